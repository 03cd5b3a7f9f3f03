//! The editor collaborator interface.

use crate::catalog::Language;
use crate::compare::LineMarker;

/// Which side of the comparison a buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    /// Left pane ("Incorrect").
    Incorrect,
    /// Right pane ("Correct").
    Correct,
}

impl PaneId {
    /// Pane title as shown in the UI and the snapshot composition.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Incorrect => "Incorrect",
            Self::Correct => "Correct",
        }
    }

    /// The opposite pane.
    pub const fn other(self) -> Self {
        match self {
            Self::Incorrect => Self::Correct,
            Self::Correct => Self::Incorrect,
        }
    }
}

/// Notification that a buffer's content changed.
///
/// Emitted after the mutation completes, so a handler reading the buffer
/// observes the state as of this notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The pane whose content changed.
    pub pane: PaneId,
}

/// Everything this crate needs from a text-editing component.
///
/// Implementations must emit a [`ChangeEvent`] after every content mutation,
/// including programmatic [`set_text`](Self::set_text) calls. Marker
/// application uses replace semantics: each call discards whatever markers
/// were applied before.
pub trait EditorApi {
    /// Which pane this editor backs.
    fn pane(&self) -> PaneId;

    /// Current content as an ordered line sequence.
    fn lines(&self) -> &[String];

    /// Replace the whole content.
    fn set_text(&mut self, text: &str);

    /// Current syntax mode.
    fn language(&self) -> Language;

    /// Set the syntax mode. Does not touch content.
    fn set_language(&mut self, language: Language);

    /// Current font size in points.
    fn font_size(&self) -> u8;

    /// Set the font size in points.
    fn set_font_size(&mut self, size: u8);

    /// Replace all line markers with the given set.
    fn set_markers(&mut self, markers: Vec<LineMarker>);

    /// Currently applied line markers.
    fn markers(&self) -> &[LineMarker];

    /// Current content as a single string with `\n` separators.
    fn text(&self) -> String {
        self.lines().join("\n")
    }
}
