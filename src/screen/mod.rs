//! Screen module: a small cell grid and ANSI presenter for the front end.
//!
//! This module contains:
//! - [`Rgb`]: true-color representation (hex-parseable for themes)
//! - [`TextAttrs`]: text style bitflags
//! - [`Cell`]: one styled character on screen
//! - [`Rect`]: rectangle primitive with pane splitting
//! - [`Screen`]: the grid plus a full-frame ANSI writer
//!
//! Frames here are small and event-driven, so the presenter redraws the
//! whole grid each frame while tracking SGR state to avoid redundant
//! escape sequences.

mod cell;
mod grid;
mod rect;

pub use cell::{Cell, Rgb, TextAttrs};
pub use grid::Screen;
pub use rect::Rect;
