//! Pane Editor: in-memory multi-line text editor.
//!
//! Backs one comparison pane with plain line storage, a row/column cursor,
//! and character insertion, deletion, newline splitting, and line joins.
//! Every content mutation sends a [`ChangeEvent`] over a crossbeam channel,
//! in mutation order.

use crossbeam_channel::Sender;

use super::api::{ChangeEvent, EditorApi, PaneId};
use crate::app::{InputEvent, KeyCode};
use crate::catalog::Language;
use crate::compare::LineMarker;

/// In-memory editor for one pane.
///
/// Content is never empty: an empty buffer is one empty line, matching how
/// text splits on `\n`. The cursor column is a character index, clamped to
/// the current line when moving between lines of different length.
#[derive(Debug)]
pub struct PaneEditor {
    /// Which pane this editor backs.
    pane: PaneId,
    /// Content lines; always at least one entry.
    lines: Vec<String>,
    /// Cursor row (line index).
    row: usize,
    /// Cursor column (character index within the row).
    col: usize,
    /// First visible row, kept so the cursor stays on screen.
    scroll: usize,
    /// Active syntax mode.
    language: Language,
    /// Font size in points.
    font_size: u8,
    /// Applied line markers (replace semantics).
    markers: Vec<LineMarker>,
    /// Change notification channel.
    notify: Sender<ChangeEvent>,
    /// Whether this editor has input focus.
    focused: bool,
    /// Needs redraw flag.
    dirty: bool,
}

impl PaneEditor {
    /// Default font size in points.
    pub const DEFAULT_FONT_SIZE: u8 = 14;

    /// Create an empty editor for the given pane.
    pub fn new(pane: PaneId, notify: Sender<ChangeEvent>) -> Self {
        Self {
            pane,
            lines: vec![String::new()],
            row: 0,
            col: 0,
            scroll: 0,
            language: Language::Plaintext,
            font_size: Self::DEFAULT_FONT_SIZE,
            markers: Vec::new(),
            notify,
            focused: false,
            dirty: true,
        }
    }

    /// Cursor position as (row, column-in-characters).
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// First visible row for the given viewport height.
    pub fn scroll_offset(&mut self, viewport_rows: usize) -> usize {
        if viewport_rows == 0 {
            return 0;
        }
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + viewport_rows {
            self.scroll = self.row + 1 - viewport_rows;
        }
        self.scroll
    }

    /// Set focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.dirty = true;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if this editor needs to be redrawn.
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Clear the redraw flag after rendering.
    pub fn clear_redraw(&mut self) {
        self.dirty = false;
    }

    /// Handle an input event, returning `true` if it was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let InputEvent::Key { code, modifiers } = event {
            match code {
                KeyCode::Char(c) => {
                    if !modifiers.control && !modifiers.alt {
                        self.insert_char(*c);
                        return true;
                    }
                }
                KeyCode::Enter => {
                    self.insert_newline();
                    return true;
                }
                KeyCode::Backspace => {
                    self.backspace();
                    return true;
                }
                KeyCode::Delete => {
                    self.delete();
                    return true;
                }
                KeyCode::Left => {
                    self.cursor_left();
                    return true;
                }
                KeyCode::Right => {
                    self.cursor_right();
                    return true;
                }
                KeyCode::Up => {
                    self.cursor_up();
                    return true;
                }
                KeyCode::Down => {
                    self.cursor_down();
                    return true;
                }
                KeyCode::Home => {
                    self.cursor_home();
                    return true;
                }
                KeyCode::End => {
                    self.cursor_end();
                    return true;
                }
                _ => {}
            }
        }

        false
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, c: char) {
        let byte = Self::byte_at(&self.lines[self.row], self.col);
        self.lines[self.row].insert(byte, c);
        self.col += 1;
        self.content_changed();
    }

    /// Split the current line at the cursor.
    fn insert_newline(&mut self) {
        let byte = Self::byte_at(&self.lines[self.row], self.col);
        let tail = self.lines[self.row].split_off(byte);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
        self.content_changed();
    }

    /// Delete the character before the cursor, joining lines at column 0.
    fn backspace(&mut self) {
        if self.col > 0 {
            let byte = Self::byte_at(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(byte);
            self.col -= 1;
            self.content_changed();
        } else if self.row > 0 {
            let tail = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].chars().count();
            self.lines[self.row].push_str(&tail);
            self.content_changed();
        }
    }

    /// Delete the character at the cursor, joining with the next line at EOL.
    fn delete(&mut self) {
        let line_chars = self.lines[self.row].chars().count();
        if self.col < line_chars {
            let byte = Self::byte_at(&self.lines[self.row], self.col);
            self.lines[self.row].remove(byte);
            self.content_changed();
        } else if self.row + 1 < self.lines.len() {
            let tail = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&tail);
            self.content_changed();
        }
    }

    /// Move cursor left, wrapping to the previous line end.
    fn cursor_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].chars().count();
        }
        self.dirty = true;
    }

    /// Move cursor right, wrapping to the next line start.
    fn cursor_right(&mut self) {
        if self.col < self.lines[self.row].chars().count() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
        self.dirty = true;
    }

    /// Move cursor up one line, clamping the column.
    fn cursor_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.lines[self.row].chars().count());
            self.dirty = true;
        }
    }

    /// Move cursor down one line, clamping the column.
    fn cursor_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.lines[self.row].chars().count());
            self.dirty = true;
        }
    }

    /// Move cursor to the start of the line.
    fn cursor_home(&mut self) {
        self.col = 0;
        self.dirty = true;
    }

    /// Move cursor to the end of the line.
    fn cursor_end(&mut self) {
        self.col = self.lines[self.row].chars().count();
        self.dirty = true;
    }

    /// Byte offset of the given character index within `line`.
    fn byte_at(line: &str, char_idx: usize) -> usize {
        line.char_indices()
            .nth(char_idx)
            .map_or(line.len(), |(i, _)| i)
    }

    /// Mark dirty and send the change notification.
    fn content_changed(&mut self) {
        self.dirty = true;
        let _ = self.notify.send(ChangeEvent { pane: self.pane });
    }
}

impl EditorApi for PaneEditor {
    fn pane(&self) -> PaneId {
        self.pane
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = 0;
        self.col = 0;
        self.scroll = 0;
        self.content_changed();
    }

    fn language(&self) -> Language {
        self.language
    }

    fn set_language(&mut self, language: Language) {
        self.language = language;
        self.dirty = true;
    }

    fn font_size(&self) -> u8 {
        self.font_size
    }

    fn set_font_size(&mut self, size: u8) {
        self.font_size = size;
        self.dirty = true;
    }

    fn set_markers(&mut self, markers: Vec<LineMarker>) {
        self.markers = markers;
        self.dirty = true;
    }

    fn markers(&self) -> &[LineMarker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::KeyModifiers;
    use crossbeam_channel::{unbounded, Receiver};

    fn editor() -> (PaneEditor, Receiver<ChangeEvent>) {
        let (tx, rx) = unbounded();
        (PaneEditor::new(PaneId::Incorrect, tx), rx)
    }

    fn key(ed: &mut PaneEditor, code: KeyCode) {
        ed.handle_input(&InputEvent::Key {
            code,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_set_text_splits_lines_and_notifies() {
        let (mut ed, rx) = editor();
        ed.set_text("a\nb\nc");
        assert_eq!(ed.lines(), &["a", "b", "c"]);
        assert_eq!(rx.try_recv().unwrap().pane, PaneId::Incorrect);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let (mut ed, _rx) = editor();
        ed.set_text("");
        assert_eq!(ed.lines(), &[""]);
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn test_insert_and_newline() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        key(&mut ed, KeyCode::Char('h'));
        key(&mut ed, KeyCode::Char('i'));
        key(&mut ed, KeyCode::Enter);
        key(&mut ed, KeyCode::Char('!'));
        assert_eq!(ed.lines(), &["hi", "!"]);
        assert_eq!(ed.cursor(), (1, 1));
    }

    #[test]
    fn test_newline_splits_mid_line() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("abcd");
        key(&mut ed, KeyCode::Right);
        key(&mut ed, KeyCode::Right);
        key(&mut ed, KeyCode::Enter);
        assert_eq!(ed.lines(), &["ab", "cd"]);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("ab\ncd");
        key(&mut ed, KeyCode::Down);
        key(&mut ed, KeyCode::Home);
        key(&mut ed, KeyCode::Backspace);
        assert_eq!(ed.lines(), &["abcd"]);
        assert_eq!(ed.cursor(), (0, 2));
    }

    #[test]
    fn test_delete_joins_with_next_line() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("ab\ncd");
        key(&mut ed, KeyCode::End);
        key(&mut ed, KeyCode::Delete);
        assert_eq!(ed.lines(), &["abcd"]);
    }

    #[test]
    fn test_cursor_clamps_when_moving_to_shorter_line() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("long line\nab");
        key(&mut ed, KeyCode::End);
        key(&mut ed, KeyCode::Down);
        assert_eq!(ed.cursor(), (1, 2));
    }

    #[test]
    fn test_multibyte_character_editing() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("héllo");
        key(&mut ed, KeyCode::Right);
        key(&mut ed, KeyCode::Right);
        key(&mut ed, KeyCode::Backspace);
        assert_eq!(ed.lines(), &["hllo"]);
    }

    #[test]
    fn test_every_mutation_notifies_in_order() {
        let (mut ed, rx) = editor();
        ed.set_focused(true);
        ed.set_text("x");
        key(&mut ed, KeyCode::Char('y'));
        key(&mut ed, KeyCode::Backspace);
        assert_eq!(rx.try_iter().count(), 3);
    }

    #[test]
    fn test_cursor_moves_do_not_notify() {
        let (mut ed, rx) = editor();
        ed.set_focused(true);
        ed.set_text("ab\ncd");
        rx.try_iter().count(); // drain the set_text event
        key(&mut ed, KeyCode::Down);
        key(&mut ed, KeyCode::End);
        key(&mut ed, KeyCode::Left);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_unfocused_editor_ignores_input() {
        let (mut ed, _rx) = editor();
        key(&mut ed, KeyCode::Char('x'));
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let (mut ed, _rx) = editor();
        ed.set_focused(true);
        ed.set_text("0\n1\n2\n3\n4\n5\n6\n7");
        for _ in 0..7 {
            key(&mut ed, KeyCode::Down);
        }
        assert_eq!(ed.scroll_offset(4), 4);
        for _ in 0..7 {
            key(&mut ed, KeyCode::Up);
        }
        assert_eq!(ed.scroll_offset(4), 0);
    }
}
