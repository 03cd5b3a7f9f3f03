//! Comparison module: diff engine, annotation sink, and session state.
//!
//! This module contains:
//! - [`diff`]: positional (and optional LCS-aligned) line diffing
//! - [`LineMarker`]/[`apply_markers`]: replace-only marker application
//! - [`CompareSession`]: the Inactive/Active state machine

pub mod diff;
mod markers;
mod session;

pub use diff::{diff_lines, diff_lines_aligned, diff_lines_with, DiffPolicy, LineDiff};
pub use markers::{apply_markers, clear_markers, LineMarker, MarkerStyle};
pub use session::{CompareMode, CompareSession};
