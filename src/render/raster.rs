//! Backend on the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use super::RenderError;
use super::backend::{ImageBackend, proportional_height};

/// Full-featured backend: any PNG the `image` crate reads, Lanczos3
/// resampling, straight-alpha compositing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterBackend {
    filter: Filter,
}

/// Resampling filter for [`RasterBackend::widen`](ImageBackend::widen).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    #[default]
    Lanczos3,
}

impl Filter {
    fn to_image(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl RasterBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different resampling filter.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }
}

impl ImageBackend for RasterBackend {
    type Image = RgbaImage;
    type Canvas = RgbaImage;

    fn decode(&self, path: &Path) -> Result<RgbaImage, RenderError> {
        let image = image::open(path).map_err(|e| RenderError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(image.to_rgba8())
    }

    fn widen(&self, image: &RgbaImage, width: u32) -> Result<RgbaImage, RenderError> {
        let height = proportional_height(image.width(), image.height(), width);
        if (width, height) == image.dimensions() {
            return Ok(image.clone());
        }
        Ok(imageops::resize(image, width, height, self.filter.to_image()))
    }

    fn canvas(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Canvas { width, height });
        }
        Ok(RgbaImage::new(width, height))
    }

    fn insert(&self, canvas: &mut RgbaImage, image: &RgbaImage, x: u32, y: u32) {
        imageops::overlay(canvas, image, i64::from(x), i64::from(y));
    }

    fn encode_png(&self, canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
        let mut out = Cursor::new(Vec::new());
        canvas
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| RenderError::Encode {
                message: e.to_string(),
            })?;
        Ok(out.into_inner())
    }
}
