//! Raster module: SVG-backed implementation of the raster collaborator.
//!
//! Parses the composition document with usvg, renders it with resvg onto a
//! tiny-skia pixmap pre-filled with the explicit background color, and
//! returns the raw RGBA pixels. Text is shaped against the system font
//! database, optionally extended with a font file from the snapshot theme.

use std::path::Path;

use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};

use crate::screen::Rgb;
use crate::snapshot::{RasterError, RasterImage, Rasterizer};

/// Rasterizer backed by resvg.
pub struct SvgRasterizer {
    options: Options<'static>,
}

impl SvgRasterizer {
    /// Create a rasterizer using the system font database.
    pub fn new() -> Self {
        let mut options = Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Additionally load a font file (e.g. the theme's pinned code font).
    ///
    /// A missing or unreadable file is skipped; the system fonts remain the
    /// fallback.
    #[must_use]
    pub fn with_font_file(mut self, path: &Path) -> Self {
        let _ = self.options.fontdb_mut().load_font_file(path);
        self
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer").finish_non_exhaustive()
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, svg: &str, background: Rgb) -> Result<RasterImage, RasterError> {
        let tree = Tree::from_data(svg.as_bytes(), &self.options)
            .map_err(|err| RasterError::InvalidDocument(Box::new(err)))?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::Allocation { width, height })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            255,
        ));

        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        // Every pixel is opaque thanks to the background fill, so the
        // premultiplied pixmap data is already plain RGBA.
        Ok(RasterImage {
            width,
            height,
            pixels: pixmap.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Composition, SnapshotPreset, Theme};

    #[test]
    fn test_rejects_malformed_document() {
        let err = SvgRasterizer::new()
            .rasterize("this is not svg", Rgb::BLACK)
            .unwrap_err();
        assert!(matches!(err, RasterError::InvalidDocument(_)));
    }

    #[test]
    fn test_renders_composition_at_preset_size() {
        let svg = Composition::from_text("a", "b", 14)
            .to_svg(&Theme::default(), SnapshotPreset::LinkedIn);

        let image = SvgRasterizer::new()
            .rasterize(&svg, Rgb::new(30, 30, 30))
            .unwrap();

        assert_eq!((image.width, image.height), (1200, 627));
        assert_eq!(image.pixels.len(), 1200 * 627 * 4);
    }

    #[test]
    fn test_background_fills_uncovered_regions() {
        // A 4x4 document with no content: every pixel is the background.
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"></svg>";
        let bg = Rgb::new(10, 20, 30);

        let image = SvgRasterizer::new().rasterize(svg, bg).unwrap();

        assert_eq!(&image.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_zero_size_document_fails_allocation() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\"></svg>";
        let result = SvgRasterizer::new().rasterize(svg, Rgb::BLACK);
        assert!(result.is_err());
    }
}
