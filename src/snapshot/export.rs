//! Export flow: rasterize the composition and write the PNG.
//!
//! The [`Rasterizer`] trait is the boundary to the raster collaborator;
//! its errors propagate through [`ExportError::Raster`] untranslated. The
//! [`Exporter`] serializes export requests with an atomic in-flight flag —
//! a request arriving while another is pending fails fast with
//! [`ExportError::Busy`] instead of racing it.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{info, warn};

use crate::screen::Rgb;

/// Filename prefix for exported snapshots.
const FILE_PREFIX: &str = "code-compare-";

/// Errors from the raster collaborator.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The collaborator rejected the composition document.
    #[error("rasterizer rejected the composition document")]
    InvalidDocument(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A raster surface of the requested size could not be allocated.
    #[error("could not allocate a {width}x{height} raster surface")]
    Allocation {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },
}

/// Errors from the export flow.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Another export is still pending; no retry, the caller surfaces it.
    #[error("an export is already in progress")]
    Busy,
    /// Rasterization failed; the collaborator error is the source.
    #[error("rasterization failed")]
    Raster(#[from] RasterError),
    /// The rasterizer returned a buffer inconsistent with its dimensions.
    #[error("rasterizer returned a malformed image buffer")]
    MalformedImage,
    /// PNG encoding or writing failed.
    #[error("could not write the snapshot image")]
    Encode(#[from] image::ImageError),
}

/// An in-memory RGBA image produced by a rasterizer.
///
/// Not retained after the export that created it; the exporter consumes it
/// while writing the PNG.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// The raster collaborator: turn a composition document into pixels.
///
/// The call is the export flow's only suspension point; it may take
/// arbitrarily long and cannot be cancelled.
pub trait Rasterizer {
    /// Render the SVG document over the given background color.
    fn rasterize(&self, svg: &str, background: Rgb) -> Result<RasterImage, RasterError>;
}

/// Writes rasterized snapshots as uniquely named PNG files.
#[derive(Debug)]
pub struct Exporter {
    out_dir: PathBuf,
    in_flight: AtomicBool,
}

impl Exporter {
    /// Create an exporter writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Rasterize `svg` and write it as `code-compare-{millis}.png`.
    ///
    /// Returns the path of the written file. Fails fast with
    /// [`ExportError::Busy`] if another export is pending; rasterizer
    /// failures propagate without retry and produce no partial file.
    pub fn export<R: Rasterizer + ?Sized>(
        &self,
        rasterizer: &R,
        svg: &str,
        background: Rgb,
    ) -> Result<PathBuf, ExportError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("export requested while another is pending");
            return Err(ExportError::Busy);
        }

        let result = self.run(rasterizer, svg, background);
        self.in_flight.store(false, Ordering::Release);

        match &result {
            Ok(path) => info!(path = %path.display(), "snapshot exported"),
            Err(err) => warn!(error = %err, "snapshot export failed"),
        }
        result
    }

    fn run<R: Rasterizer + ?Sized>(
        &self,
        rasterizer: &R,
        svg: &str,
        background: Rgb,
    ) -> Result<PathBuf, ExportError> {
        let raster = rasterizer.rasterize(svg, background)?;

        let img = image::RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
            .ok_or(ExportError::MalformedImage)?;

        let path = self.out_dir.join(unique_file_name());
        img.save(&path)?;
        Ok(path)
    }
}

/// `code-compare-` plus a timestamp-derived unique suffix.
fn unique_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    format!("{FILE_PREFIX}{millis}.png")
}
