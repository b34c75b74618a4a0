//! Pixel backend abstraction and construction-time selection.

use std::path::Path;

use super::RenderError;
use super::skia::SkiaBackend;
#[cfg(feature = "image")]
use super::raster::RasterBackend;

/// Decode, scale, composite, and encode operations the renderer needs.
///
/// Implementations own their pixel types; the renderer only sequences the
/// calls.
pub trait ImageBackend {
    /// A decoded icon.
    type Image;
    /// The output image being composited onto.
    type Canvas;

    /// Decode an image file.
    fn decode(&self, path: &Path) -> Result<Self::Image, RenderError>;

    /// Scale proportionally so the width becomes `width`.
    fn widen(&self, image: &Self::Image, width: u32) -> Result<Self::Image, RenderError>;

    /// Allocate a transparent canvas.
    fn canvas(&self, width: u32, height: u32) -> Result<Self::Canvas, RenderError>;

    /// Composite `image` onto `canvas` with its top-left corner at `(x, y)`.
    fn insert(&self, canvas: &mut Self::Canvas, image: &Self::Image, x: u32, y: u32);

    /// Encode the canvas as PNG bytes.
    fn encode_png(&self, canvas: &Self::Canvas) -> Result<Vec<u8>, RenderError>;

    /// Write the canvas to `path` as PNG.
    ///
    /// Encodes with [`encode_png`](Self::encode_png), so a file matches the
    /// bytes a data URL carries. Filesystem failures surface as
    /// [`RenderError::Io`].
    fn save_png(&self, canvas: &Self::Canvas, path: &Path) -> Result<(), RenderError> {
        let png = self.encode_png(canvas)?;
        std::fs::write(path, png)?;
        Ok(())
    }
}

/// Which backend to build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// `image` crate with Lanczos3 resampling. Needs the `image` feature.
    #[default]
    Raster,
    /// `tiny-skia`, always available with `std`.
    Skia,
}

impl BackendKind {
    /// Whether this backend was compiled in.
    pub fn is_available(self) -> bool {
        match self {
            Self::Raster => cfg!(feature = "image"),
            Self::Skia => true,
        }
    }
}

/// A constructed backend.
#[derive(Clone, Debug)]
pub enum Backend {
    #[cfg(feature = "image")]
    Raster(RasterBackend),
    Skia(SkiaBackend),
}

impl Backend {
    /// Build the requested backend, falling back to [`BackendKind::Skia`]
    /// when it isn't compiled in.
    pub fn new(kind: BackendKind) -> Self {
        match kind {
            #[cfg(feature = "image")]
            BackendKind::Raster => Self::Raster(RasterBackend::new()),
            #[cfg(not(feature = "image"))]
            BackendKind::Raster => {
                tracing::debug!("raster backend not compiled in, using tiny-skia");
                Self::Skia(SkiaBackend::new())
            }
            BackendKind::Skia => Self::Skia(SkiaBackend::new()),
        }
    }

    /// The kind actually in use.
    pub fn kind(&self) -> BackendKind {
        match self {
            #[cfg(feature = "image")]
            Self::Raster(_) => BackendKind::Raster,
            Self::Skia(_) => BackendKind::Skia,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

/// Height that keeps the aspect ratio when scaling `w`×`h` to `width`.
pub(crate) fn proportional_height(w: u32, h: u32, width: u32) -> u32 {
    if w == 0 {
        return width.max(1);
    }
    (h as f64 * width as f64 / w as f64).round().max(1.0) as u32
}
