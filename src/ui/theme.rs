//! Color themes and ANSI escape sequence generation.
//!
//! Built-in themes are compiled in from `themes/*.toml`; custom themes use the
//! same format:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! loading_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! points_fg = "#fab387"
//! ```

use crate::domain::error::{HnSearchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, table header, secondary columns.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Search term highlight in titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// "Loading..." line.
    pub loading_fg: String,
    /// "Something went wrong" line.
    pub error_fg: String,
    /// Points column.
    pub points_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Example
    ///
    /// ```
    /// use hnsearch::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HnSearchError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| HnSearchError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| HnSearchError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() != 6 {
            return (255, 255, 255);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```
    /// use hnsearch::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Mocha palette, used if the embedded theme file ever fails to parse.
    fn fallback() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: None,
                selection_fg: "#1e1e2e".to_string(),
                selection_bg: "#f5c2e7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                search_bar_border: "#f5c2e7".to_string(),
                match_highlight_fg: "#1e1e2e".to_string(),
                match_highlight_bg: "#f9e2af".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
                loading_fg: "#89b4fa".to_string(),
                error_fg: "#f38ba8".to_string(),
                points_fg: "#fab387".to_string(),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert!(Theme::from_name("catppuccin-mocha").is_some());
        assert!(Theme::from_name("catppuccin-latte").is_some());
    }

    #[test]
    fn embedded_default_matches_fallback() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn malformed_hex_is_white() {
        assert_eq!(Theme::hex_to_rgb("#12"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zz0000"), (255, 0, 0));
        assert_eq!(Theme::hex_to_rgb("1e1e2e"), (30, 30, 46));
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn unreadable_theme_file_is_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, HnSearchError::Theme(_)));
    }
}
