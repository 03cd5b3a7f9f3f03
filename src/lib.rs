//! # Snapdiff
//!
//! Side-by-side code comparison for the terminal, with PNG snapshot export.
//!
//! Two editable panes ("Incorrect" on the left, "Correct" on the right) hold
//! catalog-seeded example code. A live comparison marks positionally
//! differing lines in both panes, and a snapshot composer captures the panes
//! into a labeled two-pane image exported as `code-compare-{timestamp}.png`.
//!
//! ## Core Concepts
//!
//! - **Sample catalog**: fixed incorrect/correct example pairs per language
//! - **Positional diff**: line N left vs line N right, no alignment by default
//! - **Replace-only markers**: each application discards the previous set
//! - **Actor model**: an input thread feeds the main loop over a channel
//! - **Trait collaborators**: editing ([`EditorApi`]) and rasterization
//!   ([`Rasterizer`]) sit behind traits, so the core logic runs headless
//!
//! ## Example
//!
//! ```rust
//! use snapdiff::compare::diff_lines;
//!
//! let left = vec!["fn main() {".to_string(), "    println!(\"hi\")".to_string()];
//! let right = vec!["fn main() {".to_string(), "    println!(\"hi\");".to_string()];
//!
//! let diff = diff_lines(&left, &right);
//! assert!(diff.left.contains(&1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod catalog;
pub mod compare;
pub mod editor;
pub mod raster;
pub mod screen;
pub mod snapshot;

// Re-exports for convenience
pub use app::{App, AppConfig};
pub use catalog::{Language, SamplePair};
pub use compare::{diff_lines, CompareSession, LineDiff, LineMarker};
pub use editor::{EditorApi, PaneEditor, PaneId};
pub use raster::SvgRasterizer;
pub use snapshot::{Composition, Exporter, Rasterizer, SnapshotPreset, Theme};
