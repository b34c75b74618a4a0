//! Compositing a [`PlacementPlan`] into an image.
//!
//! The renderer loads each icon from an asset directory
//! (`<dir>/<stem>.png`), scales it to the plan's icon size, drops it onto a
//! transparent canvas, and returns the result as an RFC 2397 data URL or
//! writes it to disk. Layout errors surface before any canvas is allocated.
//!
//! Two backends implement [`ImageBackend`]: [`RasterBackend`] (the `image`
//! crate, behind the `image` feature) and [`SkiaBackend`] (`tiny-skia`).
//!
//! ```no_run
//! use payicons::{RequestConfig, render::Renderer};
//!
//! let config = RequestConfig::new().icons(["visa", "mc", "amex"]);
//! let uri = Renderer::new("assets/icons").render_to_data_url(&config)?;
//! assert!(uri.starts_with("data:image/png;base64,"));
//! # Ok::<(), payicons::render::RenderError>(())
//! ```

mod backend;
#[cfg(feature = "image")]
mod raster;
mod skia;

use std::path::{Path, PathBuf};

use base64::Engine;

pub use backend::{Backend, BackendKind, ImageBackend};
#[cfg(feature = "image")]
pub use raster::{Filter, RasterBackend};
pub use skia::SkiaBackend;

use crate::layout::{LayoutError, PlacementPlan};
use crate::plan::RequestConfig;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The request can't be laid out.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// An icon asset file doesn't exist.
    #[error("icon asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },
    /// An icon asset couldn't be decoded.
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    /// The canvas couldn't be encoded.
    #[error("failed to encode image: {message}")]
    Encode { message: String },
    /// The backend refused to allocate a canvas this size.
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    /// Writing the output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turns request configs into images using one backend and one asset
/// directory.
#[derive(Clone, Debug)]
pub struct Renderer {
    backend: Backend,
    assets: PathBuf,
}

impl Renderer {
    /// Renderer on the default backend ([`BackendKind::Raster`] when
    /// compiled in).
    pub fn new(assets: impl Into<PathBuf>) -> Self {
        Self::with_backend(assets, BackendKind::default())
    }

    /// Renderer on a specific backend. An unavailable backend falls back to
    /// [`BackendKind::Skia`].
    pub fn with_backend(assets: impl Into<PathBuf>, kind: BackendKind) -> Self {
        let backend = Backend::new(kind);
        tracing::debug!(requested = ?kind, selected = ?backend.kind(), "selected image backend");
        Self {
            backend,
            assets: assets.into(),
        }
    }

    /// Backend in use.
    pub fn backend(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Directory icon assets are read from.
    pub fn assets(&self) -> &Path {
        &self.assets
    }

    /// Render to a `data:image/png;base64,…` string.
    pub fn render_to_data_url(&self, config: &RequestConfig) -> Result<String, RenderError> {
        let png = self.render_png(config)?;
        Ok(to_data_url(&png))
    }

    /// Render to PNG bytes.
    pub fn render_png(&self, config: &RequestConfig) -> Result<Vec<u8>, RenderError> {
        let plan = config.plan()?;
        match &self.backend {
            #[cfg(feature = "image")]
            Backend::Raster(b) => encode(b, &self.assets, &plan),
            Backend::Skia(b) => encode(b, &self.assets, &plan),
        }
    }

    /// Render and write a PNG file to `path`.
    pub fn render_to_file(
        &self,
        config: &RequestConfig,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let plan = config.plan()?;
        let path = path.as_ref();
        match &self.backend {
            #[cfg(feature = "image")]
            Backend::Raster(b) => save(b, &self.assets, &plan, path),
            Backend::Skia(b) => save(b, &self.assets, &plan, path),
        }
    }
}

/// Composite every placement onto a fresh canvas.
pub fn compose<B: ImageBackend>(
    backend: &B,
    assets: &Path,
    plan: &PlacementPlan,
) -> Result<B::Canvas, RenderError> {
    let mut canvas = backend.canvas(plan.canvas.width, plan.canvas.height)?;
    tracing::debug!(
        icons = plan.len(),
        width = plan.canvas.width,
        height = plan.canvas.height,
        icon_size = plan.icon_size,
        "compositing icons"
    );
    for placement in &plan.placements {
        let path = assets.join(placement.asset);
        if !path.is_file() {
            return Err(RenderError::MissingAsset { path });
        }
        let icon = backend.decode(&path)?;
        let icon = backend.widen(&icon, placement.size)?;
        backend.insert(&mut canvas, &icon, placement.x, placement.y);
    }
    Ok(canvas)
}

fn encode<B: ImageBackend>(
    backend: &B,
    assets: &Path,
    plan: &PlacementPlan,
) -> Result<Vec<u8>, RenderError> {
    let canvas = compose(backend, assets, plan)?;
    backend.encode_png(&canvas)
}

fn save<B: ImageBackend>(
    backend: &B,
    assets: &Path,
    plan: &PlacementPlan,
    path: &Path,
) -> Result<(), RenderError> {
    let canvas = compose(backend, assets, plan)?;
    backend.save_png(&canvas, path)?;
    tracing::debug!(path = %path.display(), "wrote icon image");
    Ok(())
}

/// Wrap PNG bytes in an RFC 2397 data URL.
pub fn to_data_url(png: &[u8]) -> String {
    let mut out = String::with_capacity(DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    out.push_str(DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(png, &mut out);
    out
}
