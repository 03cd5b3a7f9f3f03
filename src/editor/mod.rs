//! Editor module: the text-editing collaborator boundary.
//!
//! The comparison and snapshot logic never talks to a concrete editor; it
//! goes through [`EditorApi`], which is the full surface this crate needs
//! from any text-editing component: read/replace content, set the syntax
//! mode, set the font size, replace line markers, and emit a change
//! notification after every content mutation.
//!
//! [`PaneEditor`] is the built-in in-memory implementation driven by the
//! terminal front end and the tests.

mod api;
mod pane;

pub use api::{ChangeEvent, EditorApi, PaneId};
pub use pane::PaneEditor;
