//! Theme contract.
//!
//! Themes resolve named tones to colors at render time. The theme is a value
//! the host passes down alongside the rest of the props; there is no global
//! or singleton, so two grids on one screen can carry different themes.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use trellis_model::TextTone;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// Trait for theme types that can resolve named colors.
pub trait Theme: Send + Sync + 'static {
    /// Resolve a named color to its value.
    ///
    /// Returns `None` if the name is not defined in this theme.
    fn resolve(&self, name: &str) -> Option<Rgb>;

    /// All color names defined in this theme.
    fn color_names(&self) -> Vec<&'static str>;
}

/// A thread-safe shared theme.
pub type ThemeRef = Arc<dyn Theme>;

/// Map a formatter tone to the theme color it renders with.
///
/// `TextTone::Default` intentionally resolves to the plain text color.
pub fn tone_color(theme: &dyn Theme, tone: TextTone) -> Option<Rgb> {
    let name = match tone {
        TextTone::Default => "text",
        TextTone::Muted => "text_muted",
        TextTone::Positive => "positive",
        TextTone::Negative => "negative",
    };
    theme.resolve(name)
}

/// The built-in theme, with light and dark variants.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub text: Rgb,
    pub text_muted: Rgb,
    pub positive: Rgb,
    pub negative: Rgb,
    pub surface: Rgb,
    pub header_bg: Rgb,
    pub row_selected: Rgb,
    pub row_hover: Rgb,
    pub accent: Rgb,
}

impl DefaultTheme {
    pub fn dark() -> Self {
        Self {
            text: Rgb::hex(0xE8EAED),
            text_muted: Rgb::hex(0x9AA0A6),
            positive: Rgb::hex(0x34A853),
            negative: Rgb::hex(0xEA4335),
            surface: Rgb::hex(0x1F2125),
            header_bg: Rgb::hex(0x2A2D33),
            row_selected: Rgb::hex(0x31425F),
            row_hover: Rgb::hex(0x282B31),
            accent: Rgb::hex(0x8AB4F8),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Rgb::hex(0x202124),
            text_muted: Rgb::hex(0x5F6368),
            positive: Rgb::hex(0x188038),
            negative: Rgb::hex(0xD93025),
            surface: Rgb::hex(0xFFFFFF),
            header_bg: Rgb::hex(0xF1F3F4),
            row_selected: Rgb::hex(0xD2E3FC),
            row_hover: Rgb::hex(0xF8F9FA),
            accent: Rgb::hex(0x1A73E8),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Rgb> {
        match name {
            "text" => Some(self.text),
            "text_muted" => Some(self.text_muted),
            "positive" => Some(self.positive),
            "negative" => Some(self.negative),
            "surface" => Some(self.surface),
            "header_bg" => Some(self.header_bg),
            "row_selected" => Some(self.row_selected),
            "row_hover" => Some(self.row_hover),
            "accent" => Some(self.accent),
            _ => None,
        }
    }

    fn color_names(&self) -> Vec<&'static str> {
        vec![
            "text",
            "text_muted",
            "positive",
            "negative",
            "surface",
            "header_bg",
            "row_selected",
            "row_hover",
            "accent",
        ]
    }
}
