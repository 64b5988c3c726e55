//! Light/dark theme colors
//!
//! The browser chrome color is reported per color scheme. A [`ThemeColor`] is
//! either one color used for both schemes or a light/dark pair.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette;
use crate::style::StyleSource;

/// User color-scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light preference
    #[default]
    Light,
    /// Dark preference
    Dark,
}

impl ColorScheme {
    /// Both schemes, light first
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    /// Media query selecting this scheme
    pub fn media_query(&self) -> &'static str {
        match self {
            ColorScheme::Light => "(prefers-color-scheme: light)",
            ColorScheme::Dark => "(prefers-color-scheme: dark)",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// Theme color for browser UI chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// Same color in both schemes
    Uniform(Color),
    /// Separate light and dark colors
    Scheme {
        /// Color under a light preference
        light: Color,
        /// Color under a dark preference
        dark: Color,
    },
}

impl ThemeColor {
    /// Light/dark pair
    pub fn scheme(light: Color, dark: Color) -> Self {
        ThemeColor::Scheme { light, dark }
    }

    /// Color to report under `scheme`
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Color {
        match (self, scheme) {
            (ThemeColor::Uniform(color), _) => color,
            (ThemeColor::Scheme { light, .. }, ColorScheme::Light) => light,
            (ThemeColor::Scheme { dark, .. }, ColorScheme::Dark) => dark,
        }
    }

    /// Resolved `rgba(...)` string for `scheme`
    pub fn to_rgba(&self, scheme: ColorScheme, style: &dyn StyleSource) -> String {
        self.for_scheme(scheme).to_rgba(style)
    }
}

impl Default for ThemeColor {
    /// Site white in light mode, site black in dark mode
    fn default() -> Self {
        ThemeColor::scheme(palette::WHITE, palette::BLACK)
    }
}

impl From<Color> for ThemeColor {
    fn from(color: Color) -> Self {
        ThemeColor::Uniform(color)
    }
}
