//! Annotation sink: line markers applied through the editor collaborator.
//!
//! Markers are replace-only: every application clears whatever was there
//! before, so repeated applications never accumulate and an empty set is a
//! plain clear.

use std::collections::BTreeSet;

use bitflags::bitflags;

use crate::editor::EditorApi;

bitflags! {
    /// Visual style classes a marker carries for the rendering layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MarkerStyle: u8 {
        /// Tint the full width of the line.
        const LINE_BACKGROUND = 0b0000_0001;
        /// Show a glyph in the line's margin.
        const MARGIN_GLYPH = 0b0000_0010;
    }
}

impl MarkerStyle {
    /// The style every diff marker carries: full-line tint plus margin glyph.
    pub const DIFF: Self = Self::LINE_BACKGROUND.union(Self::MARGIN_GLYPH);
}

/// A visual annotation on one line of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarker {
    /// 0-based line index.
    pub line: usize,
    /// Style classes for the rendering layer.
    pub style: MarkerStyle,
}

/// Replace all markers on `editor` with one diff marker per index.
///
/// Passing an empty set clears the editor's markers; calling twice with the
/// same set leaves the same final marker set as calling once.
pub fn apply_markers<E: EditorApi + ?Sized>(editor: &mut E, indices: &BTreeSet<usize>) {
    let markers: Vec<LineMarker> = indices
        .iter()
        .map(|&line| LineMarker {
            line,
            style: MarkerStyle::DIFF,
        })
        .collect();
    editor.set_markers(markers);
}

/// Clear all markers on `editor`.
pub fn clear_markers<E: EditorApi + ?Sized>(editor: &mut E) {
    editor.set_markers(Vec::new());
}
