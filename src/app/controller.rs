//! App controller: application state, key bindings, and the event loop.
//!
//! Owns both pane editors, the comparison session, the snapshot preview, and
//! the exporter. The event loop selects over the input thread's channel and
//! the editors' change notifications, so edits recompute the live comparison
//! in mutation order.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::{select, unbounded, Receiver};
use crossterm::{cursor, event, execute, terminal};
use tracing::{debug, error, info};

use super::input::InputActor;
use super::messages::{InputEvent, KeyCode, KeyModifiers};
use super::view;
use crate::catalog::Language;
use crate::compare::{apply_markers, clear_markers, CompareSession, DiffPolicy};
use crate::editor::{ChangeEvent, EditorApi, PaneEditor, PaneId};
use crate::screen::Screen;
use crate::snapshot::{Composition, Exporter, Rasterizer, SnapshotPreset, Theme};

/// Smallest selectable font size in points.
pub const MIN_FONT_SIZE: u8 = 10;
/// Largest selectable font size in points.
pub const MAX_FONT_SIZE: u8 = 24;

/// Configuration for [`App`].
#[derive(Debug)]
pub struct AppConfig {
    /// Directory snapshot PNGs are written into.
    pub out_dir: PathBuf,
    /// Snapshot colors and font.
    pub theme: Theme,
    /// Line diff policy for the comparison session.
    pub diff_policy: DiffPolicy,
    /// Input thread poll interval.
    pub poll_timeout: Duration,
    /// Language both panes are seeded with.
    pub initial_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            theme: Theme::default(),
            diff_policy: DiffPolicy::default(),
            poll_timeout: Duration::from_millis(50),
            initial_language: Language::CSharp,
        }
    }
}

/// The application: two editors, a comparison session, and snapshot export.
#[derive(Debug)]
pub struct App {
    pub(super) left: PaneEditor,
    pub(super) right: PaneEditor,
    pub(super) session: CompareSession,
    pub(super) language: Language,
    pub(super) font_size: u8,
    pub(super) preset: SnapshotPreset,
    pub(super) preview: Option<Composition>,
    pub(super) theme: Theme,
    pub(super) status: String,
    pub(super) focus: PaneId,
    exporter: Exporter,
    changes: Receiver<ChangeEvent>,
    poll_timeout: Duration,
    running: bool,
}

impl App {
    /// Create the app with both panes seeded from the configured language.
    pub fn new(config: AppConfig) -> Self {
        let (notify, changes) = unbounded();
        let mut app = Self {
            left: PaneEditor::new(PaneId::Incorrect, notify.clone()),
            right: PaneEditor::new(PaneId::Correct, notify),
            session: CompareSession::with_policy(config.diff_policy),
            language: config.initial_language,
            font_size: PaneEditor::DEFAULT_FONT_SIZE,
            preset: SnapshotPreset::default(),
            preview: None,
            theme: config.theme,
            status: String::from("Ready"),
            focus: PaneId::Incorrect,
            exporter: Exporter::new(config.out_dir),
            changes,
            poll_timeout: config.poll_timeout,
            running: true,
        };
        app.left.set_focused(true);
        app.select_language(config.initial_language);
        app.pump_changes();
        app
    }

    /// Current language selection.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Current font size in points.
    pub const fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Current snapshot preset.
    pub const fn preset(&self) -> SnapshotPreset {
        self.preset
    }

    /// Whether live comparison is running.
    pub const fn compare_active(&self) -> bool {
        self.session.is_active()
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Select a language: reset the comparison and reseed both panes.
    ///
    /// Selection always reloads the catalog samples, even when re-selecting
    /// the current language.
    pub fn select_language(&mut self, language: Language) {
        self.session.reset();
        clear_markers(&mut self.left);
        clear_markers(&mut self.right);

        let pair = language.samples();
        self.left.set_language(language);
        self.right.set_language(language);
        self.left.set_text(pair.incorrect);
        self.right.set_text(pair.correct);

        self.language = language;
        self.status = format!("Language: {language}");
        debug!(language = language.id(), "language selected");
    }

    /// Select a language by string id, falling back to plaintext when the
    /// id is unknown.
    pub fn select_language_id(&mut self, id: &str) {
        self.select_language(Language::from_id(id).unwrap_or_default());
    }

    /// Advance to the next language in selector order.
    pub fn cycle_language(&mut self) {
        self.select_language(self.language.cycle_next());
    }

    /// Step the font size up one point, saturating at the maximum.
    pub fn increase_font(&mut self) {
        self.set_font_size(self.font_size.saturating_add(1));
    }

    /// Step the font size down one point, saturating at the minimum.
    pub fn decrease_font(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(1));
    }

    fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.left.set_font_size(self.font_size);
        self.right.set_font_size(self.font_size);
        self.status = format!("Font size: {}pt", self.font_size);
    }

    /// Toggle the live comparison.
    ///
    /// Activating computes the diff against the current buffers and marks
    /// both panes; deactivating clears every marker.
    pub fn toggle_compare(&mut self) {
        let diff = self
            .session
            .toggle(self.left.lines(), self.right.lines())
            .cloned();
        match diff {
            Some(diff) => {
                apply_markers(&mut self.left, &diff.left);
                apply_markers(&mut self.right, &diff.right);
                self.status = if diff.is_empty() {
                    String::from("Comparing: no differences")
                } else {
                    format!(
                        "Comparing: {} | {} line(s) differ",
                        diff.left.len(),
                        diff.right.len()
                    )
                };
            }
            None => {
                clear_markers(&mut self.left);
                clear_markers(&mut self.right);
                self.status = String::from("Comparison off");
            }
        }
    }

    /// Capture both panes and open the snapshot preview.
    pub fn open_preview(&mut self) {
        let composition = Composition::capture(&self.left, &self.right);
        let (width, height) = composition.size(self.preset);
        self.status = format!("Preview: {} ({width}x{height})", self.preset.label());
        self.preview = Some(composition);
    }

    /// Cycle the preview's size preset. The captured text is not re-read.
    pub fn cycle_preset(&mut self) {
        self.preset = self.preset.cycle_next();
        if let Some(composition) = &self.preview {
            let (width, height) = composition.size(self.preset);
            self.status = format!("Preview: {} ({width}x{height})", self.preset.label());
        }
    }

    /// Close the preview without exporting.
    pub fn close_preview(&mut self) {
        self.preview = None;
        self.status = String::from("Preview closed");
    }

    /// Export the previewed composition as a PNG.
    ///
    /// Failures are surfaced on the status line; nothing is retried.
    pub fn save_snapshot<R: Rasterizer + ?Sized>(&mut self, rasterizer: &R) {
        let Some(composition) = &self.preview else {
            return;
        };
        let svg = composition.to_svg(&self.theme, self.preset);
        match self
            .exporter
            .export(rasterizer, &svg, self.theme.background_rgb())
        {
            Ok(path) => self.status = format!("Saved {}", path.display()),
            Err(err) => self.status = format!("Export failed: {err}"),
        }
    }

    /// Move input focus to the other pane.
    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
        self.left.set_focused(self.focus == PaneId::Incorrect);
        self.right.set_focused(self.focus == PaneId::Correct);
    }

    /// Drain pending change notifications, recomputing the comparison for
    /// each one in order.
    pub fn pump_changes(&mut self) {
        while let Ok(event) = self.changes.try_recv() {
            self.apply_change(event);
        }
    }

    /// Recompute the comparison for one change notification.
    fn apply_change(&mut self, event: ChangeEvent) {
        debug!(pane = ?event.pane, "content changed");
        let diff = self
            .session
            .on_edit(self.left.lines(), self.right.lines())
            .cloned();
        if let Some(diff) = diff {
            apply_markers(&mut self.left, &diff.left);
            apply_markers(&mut self.right, &diff.right);
        }
    }

    /// Dispatch one key event.
    fn handle_key<R: Rasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) {
        if self.preview.is_some() {
            match code {
                KeyCode::Esc => self.close_preview(),
                KeyCode::Char('p') => self.cycle_preset(),
                KeyCode::Char('s') => self.save_snapshot(rasterizer),
                _ => {}
            }
            return;
        }

        match (code, modifiers.control) {
            (KeyCode::Char('q'), true) => self.running = false,
            (KeyCode::Char('l'), true) => self.cycle_language(),
            (KeyCode::Char('d'), true) => self.toggle_compare(),
            (KeyCode::Char('s'), true) => self.open_preview(),
            (KeyCode::Up, true) => self.increase_font(),
            (KeyCode::Down, true) => self.decrease_font(),
            (KeyCode::Tab | KeyCode::BackTab, _) => self.switch_focus(),
            _ => {
                let event = InputEvent::Key { code, modifiers };
                self.focused_editor().handle_input(&event);
            }
        }
    }

    /// Feed pasted text into the focused editor as individual keystrokes.
    fn handle_paste(&mut self, text: &str) {
        let editor = self.focused_editor();
        for c in text.chars() {
            if c == '\r' {
                continue;
            }
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            editor.handle_input(&InputEvent::Key {
                code,
                modifiers: KeyModifiers::NONE,
            });
        }
    }

    fn focused_editor(&mut self) -> &mut PaneEditor {
        match self.focus {
            PaneId::Incorrect => &mut self.left,
            PaneId::Correct => &mut self.right,
        }
    }

    /// Run the interactive event loop until quit.
    ///
    /// Takes over the terminal (raw mode, alternate screen); the terminal
    /// state is restored on return, including early returns on error.
    pub fn run<R: Rasterizer + ?Sized>(mut self, rasterizer: &R) -> io::Result<()> {
        let _guard = TerminalGuard::enter()?;

        let (cols, rows) = terminal::size()?;
        let mut screen = Screen::new(cols, rows);

        let (input_tx, input_rx) = unbounded();
        let input = InputActor::spawn(input_tx, self.poll_timeout);
        let changes = self.changes.clone();
        let mut stdout = io::stdout();

        info!("event loop started");
        while self.running {
            view::render(&mut self, &mut screen);
            screen.present(&mut stdout)?;

            select! {
                recv(input_rx) -> msg => match msg {
                    Ok(InputEvent::Key { code, modifiers }) => {
                        self.handle_key(rasterizer, code, modifiers);
                    }
                    Ok(InputEvent::Resize { width, height }) => {
                        screen.resize(width, height);
                    }
                    Ok(InputEvent::Paste(text)) => self.handle_paste(&text),
                    Ok(InputEvent::Error(message)) => {
                        error!(message, "input error");
                        self.status = format!("Input error: {message}");
                    }
                    Ok(InputEvent::Shutdown) | Err(_) => self.running = false,
                },
                recv(changes) -> msg => {
                    if let Ok(event) = msg {
                        self.apply_change(event);
                    }
                },
            }
            // Edits arrive one notification per mutation; fold the backlog
            // into this frame instead of redrawing per keystroke.
            self.pump_changes();
        }

        info!("event loop stopped");
        input.join();
        Ok(())
    }
}

/// RAII guard for raw mode and the alternate screen.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableBracketedPaste,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableBracketedPaste,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{RasterError, RasterImage};

    /// Rasterizer producing a solid 1x1 pixel.
    struct StubRasterizer;

    impl Rasterizer for StubRasterizer {
        fn rasterize(
            &self,
            _svg: &str,
            background: crate::screen::Rgb,
        ) -> Result<RasterImage, RasterError> {
            Ok(RasterImage {
                width: 1,
                height: 1,
                pixels: vec![background.r, background.g, background.b, 255],
            })
        }
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_starts_with_csharp_samples_and_default_font() {
        let app = app();
        assert_eq!(app.language(), Language::CSharp);
        assert_eq!(app.font_size(), PaneEditor::DEFAULT_FONT_SIZE);
        assert_eq!(app.left.text(), Language::CSharp.samples().incorrect);
        assert_eq!(app.right.text(), Language::CSharp.samples().correct);
        assert!(!app.compare_active());
    }

    #[test]
    fn test_font_stepper_clamps_at_both_ends() {
        let mut app = app();
        for _ in 0..30 {
            app.increase_font();
        }
        assert_eq!(app.font_size(), MAX_FONT_SIZE);
        assert_eq!(app.left.font_size(), MAX_FONT_SIZE);
        assert_eq!(app.right.font_size(), MAX_FONT_SIZE);

        for _ in 0..30 {
            app.decrease_font();
        }
        assert_eq!(app.font_size(), MIN_FONT_SIZE);
        assert_eq!(app.right.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_toggle_compare_marks_both_panes() {
        let mut app = app();
        app.left.set_text("a\nb");
        app.right.set_text("a\nx");
        app.pump_changes();

        app.toggle_compare();
        assert!(app.compare_active());
        assert_eq!(app.left.markers().len(), 1);
        assert_eq!(app.left.markers()[0].line, 1);
        assert_eq!(app.right.markers().len(), 1);

        app.toggle_compare();
        assert!(!app.compare_active());
        assert!(app.left.markers().is_empty());
        assert!(app.right.markers().is_empty());
    }

    #[test]
    fn test_edit_while_comparing_updates_markers() {
        let mut app = app();
        app.left.set_text("a");
        app.right.set_text("a");
        app.pump_changes();
        app.toggle_compare();
        assert!(app.left.markers().is_empty());

        app.right.set_text("changed");
        app.pump_changes();
        assert_eq!(app.right.markers().len(), 1);
        assert_eq!(app.left.markers().len(), 1);
    }

    #[test]
    fn test_language_change_resets_comparison_and_reseeds() {
        let mut app = app();
        app.left.set_text("x");
        app.pump_changes();
        app.toggle_compare();
        assert!(app.compare_active());

        app.select_language(Language::Python);
        assert!(!app.compare_active());
        assert!(app.left.markers().is_empty());
        assert_eq!(app.left.text(), Language::Python.samples().incorrect);
        assert_eq!(app.right.text(), Language::Python.samples().correct);
        assert_eq!(app.left.language(), Language::Python);
    }

    #[test]
    fn test_unknown_language_id_falls_back_to_plaintext() {
        let mut app = app();
        app.select_language_id("brainfuck");
        assert_eq!(app.language(), Language::Plaintext);
        assert_eq!(app.left.text(), Language::Plaintext.samples().incorrect);
    }

    #[test]
    fn test_cycle_language_advances_selection() {
        let mut app = app();
        let next = app.language().cycle_next();
        app.cycle_language();
        assert_eq!(app.language(), next);
    }

    #[test]
    fn test_preview_captures_and_preset_cycles_without_recapture() {
        let mut app = app();
        app.left.set_text("before");
        app.pump_changes();
        app.open_preview();

        // Edits after capture do not leak into the preview
        app.left.set_text("after");
        app.pump_changes();
        assert_eq!(app.preview.as_ref().unwrap().left_text(), "before");

        let initial = app.preset();
        app.cycle_preset();
        assert_ne!(app.preset(), initial);
        assert_eq!(app.preview.as_ref().unwrap().left_text(), "before");
    }

    #[test]
    fn test_save_snapshot_writes_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(AppConfig {
            out_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        });

        app.open_preview();
        app.save_snapshot(&StubRasterizer);

        assert!(app.status().starts_with("Saved "));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_without_preview_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(AppConfig {
            out_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        });

        app.save_snapshot(&StubRasterizer);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_switch_focus_moves_between_panes() {
        let mut app = app();
        assert!(app.left.is_focused());
        app.switch_focus();
        assert!(!app.left.is_focused());
        assert!(app.right.is_focused());
        app.switch_focus();
        assert!(app.left.is_focused());
    }

    #[test]
    fn test_preview_keys_take_precedence() {
        let mut app = app();
        app.open_preview();
        let before = app.left.text();

        // 'p' cycles the preset instead of typing into the editor
        app.handle_key(&StubRasterizer, KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(app.left.text(), before);
        assert_eq!(app.preset(), SnapshotPreset::default().cycle_next());

        app.handle_key(&StubRasterizer, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.preview.is_none());
    }

    #[test]
    fn test_control_bindings_do_not_type_into_the_editor() {
        let mut app = app();
        let before = app.left.text();

        app.handle_key(&StubRasterizer, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(app.compare_active());
        assert_eq!(app.left.text(), before);

        app.handle_key(&StubRasterizer, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(!app.compare_active());
    }

    #[test]
    fn test_typed_characters_reach_the_focused_editor() {
        let mut app = app();
        app.select_language(Language::Plaintext);
        app.left.set_text("");
        app.pump_changes();

        app.handle_key(&StubRasterizer, KeyCode::Char('h'), KeyModifiers::NONE);
        app.handle_key(&StubRasterizer, KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(app.left.text(), "hi");
        assert_eq!(app.right.text(), Language::Plaintext.samples().correct);
    }

    #[test]
    fn test_paste_inserts_lines() {
        let mut app = app();
        app.left.set_text("");
        app.pump_changes();

        app.handle_paste("one\r\ntwo");
        assert_eq!(app.left.lines(), &["one", "two"]);
    }
}
