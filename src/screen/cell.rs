//! Cell: one styled character of screen content.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a `#rrggbb` hex color (leading `#` optional).
    ///
    /// Returns `None` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Format as a `#rrggbb` hex string (for SVG attributes).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttrs: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Underlined text
        const UNDERLINE = 0b0000_0100;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0000_1000;
    }
}

/// One character of screen content with its colors and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character to display.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Style attributes.
    pub attrs: TextAttrs,
}

impl Cell {
    /// Create a cell with default colors (white on black).
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            attrs: TextAttrs::empty(),
        }
    }

    /// Set the foreground color (builder style).
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder style).
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the style attributes (builder style).
    #[must_use]
    pub const fn with_attrs(mut self, attrs: TextAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}
