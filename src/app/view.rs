//! Frame rendering: panes, diff markers, cursor, status bar, and the
//! snapshot preview overlay.

use unicode_width::UnicodeWidthChar;

use super::controller::App;
use crate::compare::MarkerStyle;
use crate::editor::{EditorApi, PaneEditor, PaneId};
use crate::screen::{Cell, Rect, Rgb, Screen, TextAttrs};

const CANVAS_BG: Rgb = Rgb::new(0x1e, 0x1e, 0x1e);
const TITLE_BG: Rgb = Rgb::new(0x2d, 0x2d, 0x30);
const TITLE_BG_FOCUSED: Rgb = Rgb::new(0x3e, 0x3e, 0x42);
const TEXT_FG: Rgb = Rgb::new(0xd4, 0xd4, 0xd4);
const STATUS_BG: Rgb = Rgb::new(0x00, 0x7a, 0xcc);
const OVERLAY_BG: Rgb = Rgb::new(0x25, 0x25, 0x26);
const TINT_INCORRECT: Rgb = Rgb::new(0x45, 0x1b, 0x1b);
const TINT_CORRECT: Rgb = Rgb::new(0x1b, 0x3a, 0x1b);
const GLYPH_INCORRECT: Rgb = Rgb::new(0xe5, 0x73, 0x73);
const GLYPH_CORRECT: Rgb = Rgb::new(0x81, 0xc7, 0x84);

/// Columns reserved at the left of each pane for the marker glyph.
const GUTTER: u16 = 2;

/// Draw one full frame of the app into `screen`.
pub(super) fn render(app: &mut App, screen: &mut Screen) {
    screen.clear();
    let area = Rect::from_size(screen.width(), screen.height());
    if area.is_empty() {
        return;
    }

    let (body, status_row) = area.split_vertical(area.height.saturating_sub(1));
    screen.fill_rect(body, Cell::new(' ').with_bg(CANVAS_BG));

    let (left_rect, right_rect) = body.split_horizontal(body.width / 2);
    let editing = app.preview.is_none();
    let left_focused = editing && app.focus == PaneId::Incorrect;
    let right_focused = editing && app.focus == PaneId::Correct;

    draw_pane(
        screen,
        left_rect,
        &mut app.left,
        left_focused,
        TINT_INCORRECT,
        GLYPH_INCORRECT,
    );
    draw_pane(
        screen,
        right_rect,
        &mut app.right,
        right_focused,
        TINT_CORRECT,
        GLYPH_CORRECT,
    );

    draw_status(screen, status_row, app);

    if app.preview.is_some() {
        draw_preview(screen, body, app);
    }

    app.left.clear_redraw();
    app.right.clear_redraw();
}

/// Draw one pane: title bar, gutter glyphs, marked line tints, text, cursor.
fn draw_pane(
    screen: &mut Screen,
    rect: Rect,
    editor: &mut PaneEditor,
    focused: bool,
    tint: Rgb,
    glyph_fg: Rgb,
) {
    if rect.is_empty() || rect.height < 2 {
        return;
    }

    let (title_row, text_area) = rect.split_vertical(1);
    let title_bg = if focused { TITLE_BG_FOCUSED } else { TITLE_BG };
    screen.fill_rect(title_row, Cell::new(' ').with_bg(title_bg));
    let title = format!(" {} [{}]", editor.pane().title(), editor.language());
    screen.draw_text(
        title_row.x,
        title_row.y,
        &title,
        title_row.width,
        Rgb::WHITE,
        title_bg,
        TextAttrs::BOLD,
    );

    let scroll = editor.scroll_offset(usize::from(text_area.height));
    let lines = editor.lines();
    let markers = editor.markers();
    let text_x = text_area.x + GUTTER;
    let text_width = text_area.width.saturating_sub(GUTTER);

    for visual in 0..text_area.height {
        let line_idx = scroll + usize::from(visual);
        let Some(line) = lines.get(line_idx) else {
            break;
        };
        let y = text_area.y + visual;

        let marker = markers.iter().find(|m| m.line == line_idx);
        let bg = match marker {
            Some(m) if m.style.contains(MarkerStyle::LINE_BACKGROUND) => tint,
            _ => CANVAS_BG,
        };
        screen.fill_rect(Rect::new(text_area.x, y, text_area.width, 1), Cell::new(' ').with_bg(bg));
        if marker.is_some_and(|m| m.style.contains(MarkerStyle::MARGIN_GLYPH)) {
            screen.set(text_area.x, y, Cell::new('●').with_fg(glyph_fg).with_bg(bg));
        }
        screen.draw_text(text_x, y, line, text_width, TEXT_FG, bg, TextAttrs::empty());
    }

    if focused {
        draw_cursor(screen, text_area, editor, scroll);
    }
}

/// Reverse the cell under the cursor when it is inside the viewport.
fn draw_cursor(screen: &mut Screen, text_area: Rect, editor: &PaneEditor, scroll: usize) {
    let (row, col) = editor.cursor();
    if row < scroll || row >= scroll + usize::from(text_area.height) {
        return;
    }

    let line = &editor.lines()[row];
    let offset: usize = line
        .chars()
        .take(col)
        .map(|c| c.width().unwrap_or(0))
        .sum();

    #[allow(clippy::cast_possible_truncation)]
    let x = (text_area.x + GUTTER).saturating_add(offset.min(usize::from(u16::MAX)) as u16);
    #[allow(clippy::cast_possible_truncation)]
    let y = text_area.y + (row - scroll) as u16;
    if x >= text_area.right() {
        return;
    }

    if let Some(cell) = screen.get(x, y) {
        let reversed = cell.attrs | TextAttrs::REVERSED;
        let cell = *cell;
        screen.set(x, y, cell.with_attrs(reversed));
    }
}

/// Draw the status bar: current status text plus the key hints.
fn draw_status(screen: &mut Screen, row: Rect, app: &App) {
    if row.is_empty() {
        return;
    }
    screen.fill_rect(row, Cell::new(' ').with_bg(STATUS_BG));

    let compare = if app.session.is_active() { "on" } else { "off" };
    let text = format!(
        " {} | compare {compare} | {}pt | Tab focus ^D compare ^L language ^S snapshot ^Q quit",
        app.status, app.font_size,
    );
    screen.draw_text(
        row.x,
        row.y,
        &text,
        row.width,
        Rgb::WHITE,
        STATUS_BG,
        TextAttrs::empty(),
    );
}

/// Draw the snapshot preview overlay over the pane area.
fn draw_preview(screen: &mut Screen, body: Rect, app: &App) {
    let Some(composition) = &app.preview else {
        return;
    };
    let overlay = Rect::new(
        body.x + body.width / 4,
        body.y + body.height / 4,
        body.width / 2,
        body.height.min((body.height / 2).max(6)),
    );
    if overlay.is_empty() {
        return;
    }
    screen.fill_rect(overlay, Cell::new(' ').with_bg(OVERLAY_BG));

    let (width, height) = composition.size(app.preset);
    let inner_x = overlay.x + 2;
    let inner_w = overlay.width.saturating_sub(4);
    let lines = [
        (String::from("Snapshot Preview"), TextAttrs::BOLD),
        (
            format!("Preset: {} ({width}x{height})", app.preset.label()),
            TextAttrs::empty(),
        ),
        (
            String::from("s save | p preset | esc close"),
            TextAttrs::DIM,
        ),
        (app.status.clone(), TextAttrs::empty()),
    ];
    for (i, (line, attrs)) in lines.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = overlay.y + 1 + (i as u16);
        if y >= overlay.bottom() {
            break;
        }
        screen.draw_text(inner_x, y, line, inner_w, Rgb::WHITE, OVERLAY_BG, *attrs);
    }
}
