//! Backend on `tiny-skia`.

use std::path::Path;

use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use super::RenderError;
use super::backend::{ImageBackend, proportional_height};

/// Minimal backend: PNG only, bicubic scaling, premultiplied compositing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SkiaBackend;

impl SkiaBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ImageBackend for SkiaBackend {
    type Image = Pixmap;
    type Canvas = Pixmap;

    fn decode(&self, path: &Path) -> Result<Pixmap, RenderError> {
        Pixmap::load_png(path).map_err(|e| RenderError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn widen(&self, image: &Pixmap, width: u32) -> Result<Pixmap, RenderError> {
        let height = proportional_height(image.width(), image.height(), width);
        if (width, height) == (image.width(), image.height()) {
            return Ok(image.clone());
        }
        let mut out = self.canvas(width, height)?;
        let sx = width as f32 / image.width() as f32;
        let sy = height as f32 / image.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bicubic,
            ..PixmapPaint::default()
        };
        out.draw_pixmap(
            0,
            0,
            image.as_ref(),
            &paint,
            Transform::from_scale(sx, sy),
            None,
        );
        Ok(out)
    }

    fn canvas(&self, width: u32, height: u32) -> Result<Pixmap, RenderError> {
        Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })
    }

    fn insert(&self, canvas: &mut Pixmap, image: &Pixmap, x: u32, y: u32) {
        canvas.draw_pixmap(
            x as i32,
            y as i32,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn encode_png(&self, canvas: &Pixmap) -> Result<Vec<u8>, RenderError> {
        canvas.encode_png().map_err(|e| RenderError::Encode {
            message: e.to_string(),
        })
    }
}
