//! Snapshot Composer: build the two-pane SVG composition.
//!
//! The composition is plain SVG: a canvas rect, then one nested `<svg>` per
//! pane (nested viewports clip overflowing text, which is what keeps fixed
//! presets at their exact size). Captured text is embedded as preformatted
//! `<text>` lines, one per buffer line, escaped so it is always displayed
//! literally and never parsed as markup.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use super::preset::SnapshotPreset;
use super::theme::Theme;
use crate::editor::EditorApi;
use crate::screen::Rgb;

/// Canvas margin and inter-pane gap, in pixels.
const MARGIN: f32 = 16.0;
/// Padding inside each pane, in pixels.
const PANE_PADDING: f32 = 12.0;

/// Fallback colors when a theme holds a malformed hex value.
const FALLBACK_PANE_BG: Rgb = Rgb::new(0x25, 0x25, 0x26);
const FALLBACK_INCORRECT: Rgb = Rgb::new(0x5a, 0x1d, 0x1d);
const FALLBACK_CORRECT: Rgb = Rgb::new(0x1d, 0x4a, 0x1d);
const FALLBACK_HEADER_TEXT: Rgb = Rgb::WHITE;
const FALLBACK_CODE_TEXT: Rgb = Rgb::new(0xd4, 0xd4, 0xd4);

/// Neutralize markup-significant characters.
///
/// `&`, `<`, `>`, and `"` become entity references so embedded text is
/// rendered verbatim instead of being interpreted as markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// A captured two-pane composition, ready to size and serialize.
///
/// Capturing copies both buffers verbatim (whitespace and line breaks
/// included) along with the current font size. Preset switches afterwards
/// only change sizing; the captured text is never re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    left: String,
    right: String,
    font_size: u8,
}

impl Composition {
    /// Capture the current text of both panes.
    pub fn capture<L, R>(left: &L, right: &R) -> Self
    where
        L: EditorApi + ?Sized,
        R: EditorApi + ?Sized,
    {
        Self {
            left: left.text(),
            right: right.text(),
            font_size: left.font_size(),
        }
    }

    /// Build a composition from raw text (used by tests and benches).
    pub fn from_text(left: &str, right: &str, font_size: u8) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            font_size,
        }
    }

    /// Captured left-pane text.
    pub fn left_text(&self) -> &str {
        &self.left
    }

    /// Captured right-pane text.
    pub fn right_text(&self) -> &str {
        &self.right
    }

    /// Pixel size of the composition under the given preset.
    ///
    /// A fixed preset returns its exact dimensions regardless of content;
    /// the default preset computes a natural size from the widest line and
    /// the tallest pane.
    pub fn size(&self, preset: SnapshotPreset) -> (u32, u32) {
        if let Some(fixed) = preset.dimensions() {
            return fixed;
        }

        let cols = self
            .left
            .lines()
            .chain(self.right.lines())
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
            .max(1);
        let rows = self
            .left
            .split('\n')
            .count()
            .max(self.right.split('\n').count());

        #[allow(clippy::cast_precision_loss)]
        let pane_w = PANE_PADDING.mul_add(2.0, cols as f32 * self.char_width());
        #[allow(clippy::cast_precision_loss)]
        let pane_h =
            self.header_height() + PANE_PADDING.mul_add(2.0, rows as f32 * self.line_height());

        let width = 2.0f32.mul_add(pane_w, 3.0 * MARGIN);
        let height = 2.0f32.mul_add(MARGIN, pane_h);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Serialize the composition as an SVG document under the given preset.
    pub fn to_svg(&self, theme: &Theme, preset: SnapshotPreset) -> String {
        let (width, height) = self.size(preset);

        #[allow(clippy::cast_precision_loss)]
        let pane_w = (width as f32 - 3.0 * MARGIN) / 2.0;
        #[allow(clippy::cast_precision_loss)]
        let pane_h = height as f32 - 2.0 * MARGIN;

        let mut svg = String::with_capacity(1024);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">"
        );
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            theme.background_rgb().to_hex()
        );

        self.write_pane(
            &mut svg,
            theme,
            MARGIN,
            pane_w,
            pane_h,
            "Incorrect",
            &css_color(&theme.incorrect_header, FALLBACK_INCORRECT),
            &self.left,
        );
        self.write_pane(
            &mut svg,
            theme,
            2.0f32.mul_add(MARGIN, pane_w),
            pane_w,
            pane_h,
            "Correct",
            &css_color(&theme.correct_header, FALLBACK_CORRECT),
            &self.right,
        );

        svg.push_str("</svg>");
        svg
    }

    /// Write one labeled pane as a nested (clipping) SVG viewport.
    #[allow(clippy::too_many_arguments)]
    fn write_pane(
        &self,
        svg: &mut String,
        theme: &Theme,
        x: f32,
        width: f32,
        height: f32,
        title: &str,
        header_bg: &str,
        text: &str,
    ) {
        let fs = f32::from(self.font_size);
        let header_h = self.header_height();
        let line_h = self.line_height();
        let font_family = escape_markup(&theme.font_family);

        let _ = write!(
            svg,
            "<svg x=\"{x}\" y=\"{MARGIN}\" width=\"{width}\" height=\"{height}\">"
        );
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            css_color(&theme.pane_background, FALLBACK_PANE_BG)
        );
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"{header_h}\" fill=\"{header_bg}\"/>"
        );
        let _ = write!(
            svg,
            "<text x=\"{PANE_PADDING}\" y=\"{}\" font-family=\"{font_family}\" \
             font-size=\"{fs}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            (header_h + fs) / 2.0,
            css_color(&theme.header_text, FALLBACK_HEADER_TEXT),
            escape_markup(title),
        );

        let code_fill = css_color(&theme.code_text, FALLBACK_CODE_TEXT);
        for (i, line) in text.split('\n').enumerate() {
            if line.is_empty() {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let baseline = header_h + PANE_PADDING + (i as f32).mul_add(line_h, fs);
            let _ = write!(
                svg,
                "<text xml:space=\"preserve\" x=\"{PANE_PADDING}\" y=\"{baseline}\" \
                 font-family=\"{font_family}\" font-size=\"{fs}\" fill=\"{code_fill}\">{}</text>",
                escape_markup(line),
            );
        }

        svg.push_str("</svg>");
    }

    /// Approximate advance of one monospace column at the current font size.
    fn char_width(&self) -> f32 {
        f32::from(self.font_size) * 0.6
    }

    /// Vertical distance between line baselines.
    fn line_height(&self) -> f32 {
        f32::from(self.font_size) * 1.4
    }

    /// Height of the pane header strip.
    fn header_height(&self) -> f32 {
        f32::from(self.font_size) * 2.0
    }
}

/// Validate a theme color, substituting the fallback for malformed values.
fn css_color(value: &str, fallback: Rgb) -> String {
    Rgb::from_hex(value).unwrap_or(fallback).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition(left: &str, right: &str) -> Composition {
        Composition::from_text(left, right, 14)
    }

    #[test]
    fn test_escape_neutralizes_markup_characters() {
        assert_eq!(escape_markup("<script>"), "&lt;script&gt;");
        assert_eq!(escape_markup("a & b"), "a &amp; b");
        assert_eq!(escape_markup("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_escape_handles_already_escaped_text() {
        assert_eq!(escape_markup("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_fixed_preset_ignores_content_length() {
        let short = composition("a", "b");
        let long = composition(&"x".repeat(500), &"y\n".repeat(200));
        assert_eq!(short.size(SnapshotPreset::LinkedIn), (1200, 627));
        assert_eq!(long.size(SnapshotPreset::LinkedIn), (1200, 627));
    }

    #[test]
    fn test_natural_size_grows_with_content() {
        let small = composition("ab", "cd");
        let wide = composition(&"x".repeat(120), "cd");
        let tall = composition("ab", &"y\n".repeat(40));

        let (w0, h0) = small.size(SnapshotPreset::Default);
        assert!(wide.size(SnapshotPreset::Default).0 > w0);
        assert!(tall.size(SnapshotPreset::Default).1 > h0);
    }

    #[test]
    fn test_natural_size_scales_with_font_size() {
        let at_10 = Composition::from_text("hello", "hello", 10);
        let at_24 = Composition::from_text("hello", "hello", 24);
        let (w_small, h_small) = at_10.size(SnapshotPreset::Default);
        let (w_big, h_big) = at_24.size(SnapshotPreset::Default);
        assert!(w_big > w_small);
        assert!(h_big > h_small);
    }

    #[test]
    fn test_svg_declares_preset_dimensions() {
        let svg = composition("a", "b").to_svg(&Theme::default(), SnapshotPreset::LinkedIn);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"1200\" height=\"627\""));
    }

    #[test]
    fn test_svg_embeds_escaped_text() {
        let svg = composition("<script>alert(1)</script>", "ok")
            .to_svg(&Theme::default(), SnapshotPreset::Default);
        assert!(svg.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_svg_contains_both_pane_titles() {
        let svg = composition("a", "b").to_svg(&Theme::default(), SnapshotPreset::Default);
        assert!(svg.contains(">Incorrect</text>"));
        assert!(svg.contains(">Correct</text>"));
    }

    #[test]
    fn test_svg_preserves_whitespace() {
        let svg = composition("    indented", "b").to_svg(&Theme::default(), SnapshotPreset::Default);
        assert!(svg.contains("xml:space=\"preserve\""));
        assert!(svg.contains("    indented"));
    }

    #[test]
    fn test_preset_switch_resizes_without_recapture() {
        let comp = composition("left text", "right text");
        let default_svg = comp.to_svg(&Theme::default(), SnapshotPreset::Default);
        let linkedin_svg = comp.to_svg(&Theme::default(), SnapshotPreset::LinkedIn);

        assert_ne!(default_svg, linkedin_svg);
        assert!(default_svg.contains("left text"));
        assert!(linkedin_svg.contains("left text"));
    }

    #[test]
    fn test_capture_copies_text_verbatim() {
        use crate::editor::{EditorApi, PaneEditor, PaneId};
        use crossbeam_channel::unbounded;

        let (tx, _rx) = unbounded();
        let mut left = PaneEditor::new(PaneId::Incorrect, tx.clone());
        let mut right = PaneEditor::new(PaneId::Correct, tx);
        left.set_text("a\n  b\t");
        right.set_text("c");

        let comp = Composition::capture(&left, &right);
        assert_eq!(comp.left_text(), "a\n  b\t");
        assert_eq!(comp.right_text(), "c");
    }

    #[test]
    fn test_empty_buffers_still_produce_a_document() {
        let svg = composition("", "").to_svg(&Theme::default(), SnapshotPreset::Default);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_malformed_theme_color_falls_back() {
        let theme = Theme {
            pane_background: String::from("nope"),
            ..Theme::default()
        };
        let svg = composition("a", "b").to_svg(&theme, SnapshotPreset::Default);
        assert!(svg.contains("#252526"));
        assert!(!svg.contains("nope"));
    }
}
