//! Snapshot module: compose both panes into an exportable image.
//!
//! The composer captures the current text of both panes verbatim, escapes
//! markup-significant characters, and builds a two-pane labeled SVG
//! document ("Incorrect" on the left, "Correct" on the right, raw
//! preformatted text, no syntax highlighting). A [`Rasterizer`] turns the
//! document into pixels over an explicit background color, and the
//! [`Exporter`] writes the result as a PNG named
//! `code-compare-{timestamp}.png`.

mod composer;
mod export;
mod preset;
mod theme;

pub use composer::{escape_markup, Composition};
pub use export::{ExportError, Exporter, RasterError, RasterImage, Rasterizer};
pub use preset::SnapshotPreset;
pub use theme::{Theme, ThemeError};
