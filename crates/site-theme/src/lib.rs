//! Theming for the Kessoku Tea Time site
//!
//! This crate provides the color utility used for theming: raw and symbolic
//! colors, the named tint palette, light/dark theme colors, and the style
//! sources symbolic colors are resolved against.
//!
//! # Modules
//!
//! - [`color`] - Color values, parsing and formatting
//! - [`palette`] - Named tints and site black/white
//! - [`scheme`] - Color-scheme preference and theme color pairs
//! - [`style`] - Custom-property sources and the in-memory stylesheet
//!
//! # Example
//!
//! ```rust
//! use site_theme::{palette, ColorScheme, StyleSheet, ThemeColor};
//!
//! let sheet = StyleSheet::from_css(":root { --color-tint-pink: #F4A7B9; }");
//! let theme = ThemeColor::from(palette::PINK);
//! assert_eq!(theme.to_rgba(ColorScheme::Dark, &sheet), "rgba(244, 167, 185, 1)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod palette;
pub mod scheme;
pub mod style;

// Re-export commonly used types
pub use color::{Color, ColorParseError, ColorRef, Opacity, Rgba, TintName};
pub use scheme::{ColorScheme, ThemeColor};
pub use style::{variable_color, StyleError, StyleSheet, StyleSource};
