//! Snapshot theme: colors and font for the export composition.
//!
//! Themes deserialize from TOML so the demo can restyle exports without a
//! rebuild; every field has a default matching the editor's dark palette.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::screen::Rgb;

/// Errors while loading a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The file could not be read.
    #[error("could not read theme file")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for a theme.
    #[error("could not parse theme file")]
    Parse(#[from] toml::de::Error),
}

/// Colors and font settings for the export composition.
///
/// Color fields hold `#rrggbb` strings; malformed values fall back to the
/// corresponding default at use time rather than failing the export.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas background behind both panes.
    pub background: String,
    /// Pane body background.
    pub pane_background: String,
    /// Header background of the "Incorrect" pane.
    pub incorrect_header: String,
    /// Header background of the "Correct" pane.
    pub correct_header: String,
    /// Header label color.
    pub header_text: String,
    /// Code text color.
    pub code_text: String,
    /// Font family for the code text.
    pub font_family: String,
    /// Optional font file loaded into the rasterizer's font database.
    pub font_file: Option<PathBuf>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: String::from("#1e1e1e"),
            pane_background: String::from("#252526"),
            incorrect_header: String::from("#5a1d1d"),
            correct_header: String::from("#1d4a1d"),
            header_text: String::from("#ffffff"),
            code_text: String::from("#d4d4d4"),
            font_family: String::from("monospace"),
            font_file: None,
        }
    }
}

impl Theme {
    /// Parse a theme from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a theme from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }

    /// The canvas background as an RGB color.
    ///
    /// This is the explicit background handed to the rasterizer so regions
    /// outside the panes never default to something unpredictable.
    pub fn background_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.background).unwrap_or(Rgb::new(0x1e, 0x1e, 0x1e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_background_parses() {
        let theme = Theme::default();
        assert_eq!(theme.background_rgb(), Rgb::new(0x1e, 0x1e, 0x1e));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let theme = Theme::from_toml_str("background = \"#000000\"").unwrap();
        assert_eq!(theme.background_rgb(), Rgb::BLACK);
        assert_eq!(theme.font_family, "monospace");
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let theme = Theme::from_toml_str("background = \"not-a-color\"").unwrap();
        assert_eq!(theme.background_rgb(), Rgb::new(0x1e, 0x1e, 0x1e));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Theme::from_toml_str("background = [").is_err());
    }
}
