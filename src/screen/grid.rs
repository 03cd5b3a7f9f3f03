//! Screen grid and full-frame ANSI presenter.

use std::io::Write;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::cell::{Cell, Rgb, TextAttrs};
use super::rect::Rect;

/// A width x height grid of cells with a full-frame ANSI writer.
#[derive(Debug, Clone)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Screen {
    /// Create a cleared screen of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    /// Screen width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Screen height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to the default (space on black).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the grid, clearing its content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); (width as usize) * (height as usize)];
    }

    /// Set a single cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            self.cells[idx] = cell;
        }
    }

    /// Get a cell; `None` when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    /// Fill a rectangle with copies of `cell`, clipped to the screen.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let x_end = rect.right().min(self.width);
        let y_end = rect.bottom().min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw text at a position, clipped at `max_width` columns.
    ///
    /// Wide graphemes occupy their display width; the grapheme is stored in
    /// the first cell and the continuation cells are blanked. Returns the
    /// number of columns used.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Rgb,
        bg: Rgb,
        attrs: TextAttrs,
    ) -> u16 {
        let mut col = x;
        let limit = x.saturating_add(max_width).min(self.width);
        for grapheme in text.graphemes(true) {
            #[allow(clippy::cast_possible_truncation)]
            let width = grapheme.width().max(1) as u16;
            if col + width > limit {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(col, y, Cell { ch, fg, bg, attrs });
            for pad in 1..width {
                self.set(col + pad, y, Cell::new(' ').with_fg(fg).with_bg(bg));
            }
            col += width;
        }
        col - x
    }

    /// Write the whole frame as ANSI to `out` and flush it.
    ///
    /// Tracks the last emitted colors and attributes so runs of identical
    /// style cost one SGR sequence, the same trick the heavyweight diffing
    /// renderers use for full redraws.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut buf: Vec<u8> = Vec::with_capacity(self.cells.len() * 4);

        // Hide cursor and move home for the redraw
        buf.extend_from_slice(b"\x1b[?25l\x1b[H");

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_attrs: Option<TextAttrs> = None;

        for y in 0..self.height {
            if y > 0 {
                buf.extend_from_slice(b"\r\n");
            }
            for x in 0..self.width {
                let cell = &self.cells[(y as usize) * (self.width as usize) + (x as usize)];

                if last_attrs != Some(cell.attrs) {
                    // Attribute changes reset everything, so colors must be re-emitted
                    buf.extend_from_slice(b"\x1b[0m");
                    emit_attrs(&mut buf, cell.attrs);
                    last_fg = None;
                    last_bg = None;
                    last_attrs = Some(cell.attrs);
                }
                if last_fg != Some(cell.fg) {
                    let _ = write!(buf, "\x1b[38;2;{};{};{}m", cell.fg.r, cell.fg.g, cell.fg.b);
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    let _ = write!(buf, "\x1b[48;2;{};{};{}m", cell.bg.r, cell.bg.g, cell.bg.b);
                    last_bg = Some(cell.bg);
                }

                let mut encoded = [0_u8; 4];
                buf.extend_from_slice(cell.ch.encode_utf8(&mut encoded).as_bytes());
            }
        }

        // Reset attributes; the cursor stays hidden while the app runs
        buf.extend_from_slice(b"\x1b[0m");

        out.write_all(&buf)?;
        out.flush()
    }
}

/// Emit SGR sequences for a set of attributes.
fn emit_attrs(buf: &mut Vec<u8>, attrs: TextAttrs) {
    if attrs.contains(TextAttrs::BOLD) {
        buf.extend_from_slice(b"\x1b[1m");
    }
    if attrs.contains(TextAttrs::DIM) {
        buf.extend_from_slice(b"\x1b[2m");
    }
    if attrs.contains(TextAttrs::UNDERLINE) {
        buf.extend_from_slice(b"\x1b[4m");
    }
    if attrs.contains(TextAttrs::REVERSED) {
        buf.extend_from_slice(b"\x1b[7m");
    }
}
