//! Color values for the site theme
//!
//! A [`Color`] is either raw ([`Color::Raw`]), where the components are
//! authoritative, or symbolic ([`Color::Symbolic`]), where the components are
//! placeholders and the real value lives in a CSS custom property that is read
//! through a [`StyleSource`] at resolution time.
//!
//! # Usage
//!
//! ```rust
//! use site_theme::color::{Color, Opacity, TintName};
//! use site_theme::style::StyleSheet;
//!
//! let mut sheet = StyleSheet::new();
//! sheet.set("--color-tint-red", "#FF0000");
//!
//! let red = Color::from_name(TintName::Red, Opacity::Full);
//! assert_eq!(red.to_rgba(&sheet), "rgba(255, 0, 0, 1)");
//!
//! let raw = Color::from_rgba(10, 20, 30, 0.5);
//! assert_eq!(raw.to_rgba(&sheet), "rgba(10, 20, 30, 0.5)");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

use crate::style::{variable_color, StyleSource};

/// Prefix shared by every tint custom property
pub const TINT_PREFIX: &str = "--color-tint";

// =============================================================================
// Errors
// =============================================================================

/// Color parsing error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input was empty or whitespace
    #[error("Empty color string")]
    Empty,

    /// Input matched none of the supported shapes
    #[error("Unrecognized color format: {0}")]
    Unrecognized(String),

    /// Functional notation with the wrong number of arguments
    #[error("Expected {expected} components, found {found}")]
    ComponentCount {
        /// Components required by the function name
        expected: usize,
        /// Components present in the input
        found: usize,
    },

    /// A red/green/blue channel that is not an integer in 0..=255
    #[error("Invalid color channel: {0}")]
    InvalidChannel(String),

    /// An alpha value that is not a number in 0..=1
    #[error("Invalid alpha value: {0}")]
    InvalidAlpha(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorParseError>;

// =============================================================================
// Components
// =============================================================================

/// Concrete color components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha, 0 (transparent) to 1 (opaque)
    pub a: f64,
}

impl Rgba {
    /// Create components from channels and alpha
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same channels with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Components carried by a symbolic color before it is resolved
pub const PLACEHOLDER: Rgba = Rgba::new(0, 0, 0, 1.0);

// =============================================================================
// Symbolic references
// =============================================================================

/// Base hues defined by the site stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TintName {
    /// Red tint
    Red,
    /// Blue tint
    Blue,
    /// Pink tint
    Pink,
    /// Yellow tint
    Yellow,
}

impl TintName {
    /// Every tint, in stylesheet order
    pub const ALL: [TintName; 4] = [
        TintName::Red,
        TintName::Blue,
        TintName::Pink,
        TintName::Yellow,
    ];

    /// Name as it appears in the custom property
    pub fn as_str(&self) -> &'static str {
        match self {
            TintName::Red => "red",
            TintName::Blue => "blue",
            TintName::Pink => "pink",
            TintName::Yellow => "yellow",
        }
    }
}

impl fmt::Display for TintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TintName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(TintName::Red),
            "blue" => Ok(TintName::Blue),
            "pink" => Ok(TintName::Pink),
            "yellow" => Ok(TintName::Yellow),
            _ => Err(format!("Unknown tint: {}", s)),
        }
    }
}

/// Opacity preset of a tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Opacity {
    /// No suffix; the tint at full strength
    #[default]
    Full,
    /// `-soft` variant
    Soft,
    /// `-mute` variant
    Mute,
}

impl Opacity {
    /// Every preset, strongest first
    pub const ALL: [Opacity; 3] = [Opacity::Full, Opacity::Soft, Opacity::Mute];

    /// Custom property suffix, if any
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Opacity::Full => None,
            Opacity::Soft => Some("soft"),
            Opacity::Mute => Some("mute"),
        }
    }
}

/// What a symbolic color points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// One of the twelve tint properties
    Tint {
        /// Base hue
        name: TintName,
        /// Opacity preset
        opacity: Opacity,
    },
    /// Any other custom property, stored with its leading `--`
    Variable(Cow<'static, str>),
}

impl ColorRef {
    /// Reference a custom property by name.
    ///
    /// Names of the `--color-tint-<name>[-soft|-mute]` family come back as
    /// [`ColorRef::Tint`] so both spellings compare equal.
    pub fn from_variable_name(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match parse_tint_variable(&name) {
            Some((name, opacity)) => ColorRef::Tint { name, opacity },
            None => ColorRef::Variable(name),
        }
    }

    /// Name of the backing custom property
    pub fn variable_name(&self) -> Cow<'_, str> {
        match self {
            ColorRef::Tint { name, opacity } => match opacity.suffix() {
                Some(suffix) => Cow::Owned(format!("{}-{}-{}", TINT_PREFIX, name, suffix)),
                None => Cow::Owned(format!("{}-{}", TINT_PREFIX, name)),
            },
            ColorRef::Variable(name) => Cow::Borrowed(name.as_ref()),
        }
    }
}

fn parse_tint_variable(name: &str) -> Option<(TintName, Opacity)> {
    let rest = name.strip_prefix(TINT_PREFIX)?.strip_prefix('-')?;
    let (tint, opacity) = match rest.split_once('-') {
        Some((tint, "soft")) => (tint, Opacity::Soft),
        Some((tint, "mute")) => (tint, Opacity::Mute),
        Some(_) => return None,
        None => (rest, Opacity::Full),
    };
    let name = TintName::ALL.into_iter().find(|t| t.as_str() == tint)?;
    Some((name, opacity))
}

// =============================================================================
// Color
// =============================================================================

/// A theme color, raw or symbolic.
///
/// Colors are immutable; every transformation returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Components are authoritative
    Raw(Rgba),
    /// Value lives in a custom property
    Symbolic {
        /// Backing custom property
        reference: ColorRef,
        /// Concrete components pinned by a transformation such as
        /// [`Color::with_alpha`]; `None` until then
        resolved: Option<Rgba>,
    },
}

impl Color {
    /// Raw color from channels and alpha
    pub fn from_rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Raw(Rgba::new(r, g, b, a))
    }

    /// Opaque raw color
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// `0xAARRGGBB`
    pub fn from_hex_argb(hex: u32) -> Self {
        let [a, r, g, b] = hex.to_be_bytes();
        Self::from_rgba(r, g, b, f64::from(a) / 255.0)
    }

    /// `0xRRGGBBAA`
    pub fn from_hex_rgba(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self::from_rgba(r, g, b, f64::from(a) / 255.0)
    }

    /// `0xRRGGBB`, always opaque. Any high byte is ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_hex_argb(hex | 0xFF00_0000)
    }

    /// Symbolic tint color
    pub const fn from_name(name: TintName, opacity: Opacity) -> Self {
        Self::from_reference(ColorRef::Tint { name, opacity })
    }

    /// Symbolic color backed by an arbitrary custom property
    pub fn from_variable(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_reference(ColorRef::from_variable_name(name))
    }

    /// Unresolved symbolic color
    pub const fn from_reference(reference: ColorRef) -> Self {
        Color::Symbolic {
            reference,
            resolved: None,
        }
    }

    /// Parse a CSS color string; see [`FromStr`] for the accepted shapes
    pub fn from_string(value: &str) -> Result<Self> {
        value.parse()
    }

    /// Whether the value is read from a custom property
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Color::Symbolic { .. })
    }

    /// The backing custom property reference, if symbolic
    pub fn reference(&self) -> Option<&ColorRef> {
        match self {
            Color::Raw(_) => None,
            Color::Symbolic { reference, .. } => Some(reference),
        }
    }

    /// Components as stored, without consulting any style source
    pub fn components(&self) -> Rgba {
        match self {
            Color::Raw(rgba) => *rgba,
            Color::Symbolic { resolved, .. } => resolved.unwrap_or(PLACEHOLDER),
        }
    }

    /// Format the stored components as `rgba(r, g, b, a)`
    pub fn to_raw_rgba(&self) -> String {
        self.components().to_string()
    }

    /// Name of the backing custom property, if symbolic
    pub fn to_raw_css(&self) -> Option<String> {
        self.reference().map(|r| r.variable_name().into_owned())
    }

    /// Resolve against `style`.
    ///
    /// Unresolved symbolic colors read their custom property; when the
    /// property is missing or unparseable the color comes back unchanged.
    pub fn to_normalized(&self, style: &dyn StyleSource) -> Color {
        match self {
            Color::Raw(_) => self.clone(),
            Color::Symbolic {
                resolved: Some(rgba),
                ..
            } => Color::Raw(*rgba),
            Color::Symbolic {
                reference,
                resolved: None,
            } => match variable_color(style, &reference.variable_name()) {
                Some(color) => Color::Raw(color.components()),
                None => {
                    tracing::debug!(
                        "Custom property {} unavailable, using placeholder",
                        reference.variable_name()
                    );
                    self.clone()
                }
            },
        }
    }

    /// Concrete components after resolution
    pub fn resolve(&self, style: &dyn StyleSource) -> Rgba {
        self.to_normalized(style).components()
    }

    /// Resolve and format as `rgba(r, g, b, a)`
    pub fn to_rgba(&self, style: &dyn StyleSource) -> String {
        self.to_normalized(style).to_raw_rgba()
    }

    /// Replace alpha.
    ///
    /// Symbolic colors are resolved first and keep their reference, with the
    /// concrete components pinned.
    pub fn with_alpha(&self, a: f64, style: &dyn StyleSource) -> Color {
        match self {
            Color::Raw(rgba) => Color::Raw(rgba.with_alpha(a)),
            Color::Symbolic { reference, .. } => Color::Symbolic {
                reference: reference.clone(),
                resolved: Some(self.resolve(style).with_alpha(a)),
            },
        }
    }

    /// Replace alpha without resolving.
    ///
    /// On a symbolic color this pins the current stored components, so a
    /// still-unresolved color ends up with the placeholder channels.
    pub fn with_alpha_unresolved(&self, a: f64) -> Color {
        match self {
            Color::Raw(rgba) => Color::Raw(rgba.with_alpha(a)),
            Color::Symbolic { reference, .. } => Color::Symbolic {
                reference: reference.clone(),
                resolved: Some(self.components().with_alpha(a)),
            },
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Raw(rgba)
    }
}

impl fmt::Display for Color {
    /// Raw colors print as `rgba(...)`, unresolved symbolic colors as
    /// `var(--name)` and pinned ones as `var(--name) / rgba(...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Raw(rgba) => write!(f, "{}", rgba),
            Color::Symbolic {
                reference,
                resolved: None,
            } => write!(f, "var({})", reference.variable_name()),
            Color::Symbolic {
                reference,
                resolved: Some(rgba),
            } => write!(f, "var({}) / {}", reference.variable_name(), rgba),
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn hex_regex() -> &'static Regex {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    HEX_REGEX.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap())
}

fn function_regex() -> &'static Regex {
    static FUNCTION_REGEX: OnceLock<Regex> = OnceLock::new();
    FUNCTION_REGEX.get_or_init(|| Regex::new(r"^(?i)(rgba?)\(([^)]*)\)$").unwrap())
}

fn pinned_regex() -> &'static Regex {
    static PINNED_REGEX: OnceLock<Regex> = OnceLock::new();
    PINNED_REGEX.get_or_init(|| Regex::new(r"^(var\([^)]*\))\s*/\s*(.+)$").unwrap())
}

fn var_regex() -> &'static Regex {
    static VAR_REGEX: OnceLock<Regex> = OnceLock::new();
    VAR_REGEX.get_or_init(|| Regex::new(r"^var\(\s*(--[A-Za-z0-9_-]+)\s*\)$").unwrap())
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`, `rgba(r, g, b, a)`,
    /// `var(--name)` and the pinned form `var(--name) / <raw color>`,
    /// ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(caps) = pinned_regex().captures(s) {
            let reference = match caps[1].parse::<Color>()? {
                Color::Symbolic {
                    reference,
                    resolved: None,
                } => reference,
                _ => return Err(ColorParseError::Unrecognized(s.to_string())),
            };
            let rgba = match caps[2].parse::<Color>()? {
                Color::Raw(rgba) => rgba,
                _ => return Err(ColorParseError::Unrecognized(s.to_string())),
            };
            return Ok(Color::Symbolic {
                reference,
                resolved: Some(rgba),
            });
        }

        if let Some(caps) = hex_regex().captures(s) {
            let digits = &caps[1];
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::Unrecognized(s.to_string()))?;
            return Ok(if digits.len() == 8 {
                Color::from_hex_rgba(value)
            } else {
                Color::from_hex(value)
            });
        }

        if let Some(caps) = function_regex().captures(s) {
            let expected = if caps[1].eq_ignore_ascii_case("rgba") { 4 } else { 3 };
            let parts: Vec<&str> = caps[2].split(',').map(str::trim).collect();
            if parts.len() != expected {
                return Err(ColorParseError::ComponentCount {
                    expected,
                    found: parts.len(),
                });
            }

            let channel = |part: &str| {
                part.parse::<u8>()
                    .map_err(|_| ColorParseError::InvalidChannel(part.to_string()))
            };
            let r = channel(parts[0])?;
            let g = channel(parts[1])?;
            let b = channel(parts[2])?;
            let a = match parts.get(3) {
                Some(part) => parse_alpha(part)?,
                None => 1.0,
            };
            return Ok(Color::from_rgba(r, g, b, a));
        }

        if let Some(caps) = var_regex().captures(s) {
            return Ok(Color::from_variable(caps[1].to_string()));
        }

        Err(ColorParseError::Unrecognized(s.to_string()))
    }
}

fn parse_alpha(part: &str) -> Result<f64> {
    match part.parse::<f64>() {
        Ok(a) if (0.0..=1.0).contains(&a) => Ok(a),
        _ => Err(ColorParseError::InvalidAlpha(part.to_string())),
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{MockStyleSource, StyleSheet};

    #[test]
    fn test_raw_round_trip() {
        let sheet = StyleSheet::new();
        assert_eq!(Color::from_rgba(12, 34, 56, 0.25).to_rgba(&sheet), "rgba(12, 34, 56, 0.25)");
        assert_eq!(Color::from_rgb(255, 255, 255).to_rgba(&sheet), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_from_hex_rgba_byte_extraction() {
        let color = Color::from_hex_rgba(0xFF0000FF);
        assert_eq!(color, Color::from_rgba(255, 0, 0, 1.0));
    }

    #[test]
    fn test_from_hex_argb_byte_extraction() {
        let color = Color::from_hex_argb(0x8011_2233);
        let rgba = color.components();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0x11, 0x22, 0x33));
        assert_eq!(rgba.a, 128.0 / 255.0);
    }

    #[test]
    fn test_from_hex_forces_opaque() {
        assert_eq!(Color::from_hex(0xFF0000), Color::from_rgba(255, 0, 0, 1.0));
        assert_eq!(Color::from_hex(0x0000_00FF), Color::from_rgba(0, 0, 255, 1.0));
    }

    #[test]
    fn test_parse_hex_strings() {
        assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::from_rgb(255, 128, 0));
        assert_eq!("  #ff800000 ".parse::<Color>().unwrap(), Color::from_rgba(255, 128, 0, 0.0));
        assert_eq!("#FF0000FF".parse::<Color>().unwrap(), Color::from_rgba(255, 0, 0, 1.0));
    }

    #[test]
    fn test_parse_functional_notation() {
        assert_eq!(
            Color::from_string("rgb(1, 2, 3)").unwrap(),
            Color::from_rgb(1, 2, 3)
        );
        assert_eq!(
            Color::from_string("rgba(1,2,3,0.5)").unwrap(),
            Color::from_rgba(1, 2, 3, 0.5)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Color::from_string("   "), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::from_string("#12345"),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            Color::from_string("#1234567"),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            Color::from_string("hsl(0, 100%, 50%)"),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert_eq!(
            Color::from_string("rgba(1, 2, 3)"),
            Err(ColorParseError::ComponentCount { expected: 4, found: 3 })
        );
        assert_eq!(
            Color::from_string("rgb(256, 0, 0)"),
            Err(ColorParseError::InvalidChannel("256".to_string()))
        );
        assert_eq!(
            Color::from_string("rgba(0, 0, 0, 2)"),
            Err(ColorParseError::InvalidAlpha("2".to_string()))
        );
    }

    #[test]
    fn test_parse_var_reference() {
        let color: Color = "var(--color-tint-pink-mute)".parse().unwrap();
        assert_eq!(color, Color::from_name(TintName::Pink, Opacity::Mute));

        let color: Color = "var( --vt-c-black )".parse().unwrap();
        assert_eq!(color.to_raw_css().as_deref(), Some("--vt-c-black"));
    }

    #[test]
    fn test_tint_variable_names() {
        assert_eq!(
            Color::from_name(TintName::Red, Opacity::Full).to_raw_css().as_deref(),
            Some("--color-tint-red")
        );
        assert_eq!(
            Color::from_name(TintName::Yellow, Opacity::Soft).to_raw_css().as_deref(),
            Some("--color-tint-yellow-soft")
        );
        assert_eq!(
            Color::from_name(TintName::Blue, Opacity::Mute).to_raw_css().as_deref(),
            Some("--color-tint-blue-mute")
        );
        assert_eq!(Color::from_rgb(0, 0, 0).to_raw_css(), None);
    }

    #[test]
    fn test_variable_name_recognizes_tints() {
        assert_eq!(
            ColorRef::from_variable_name("--color-tint-blue-soft"),
            ColorRef::Tint {
                name: TintName::Blue,
                opacity: Opacity::Soft
            }
        );
        assert!(matches!(
            ColorRef::from_variable_name("--color-tint-green"),
            ColorRef::Variable(_)
        ));
        assert!(matches!(
            ColorRef::from_variable_name("--color-tint-red-faint"),
            ColorRef::Variable(_)
        ));
    }

    #[test]
    fn test_symbolic_resolution() {
        let mut sheet = StyleSheet::new();
        sheet.set("--color-tint-blue", "#0080FF");

        let blue = Color::from_name(TintName::Blue, Opacity::Full);
        assert!(blue.is_symbolic());
        assert_eq!(blue.to_rgba(&sheet), "rgba(0, 128, 255, 1)");
    }

    #[test]
    fn test_symbolic_resolution_falls_back_to_placeholder() {
        let sheet = StyleSheet::new();
        let red = Color::from_name(TintName::Red, Opacity::Soft);
        assert_eq!(red.to_normalized(&sheet), red);
        assert_eq!(red.to_rgba(&sheet), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_symbolic_resolution_ignores_unparseable_value() {
        let mut sheet = StyleSheet::new();
        sheet.set("--color-tint-red", "not-a-color");
        let red = Color::from_name(TintName::Red, Opacity::Full);
        assert_eq!(red.to_rgba(&sheet), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_with_alpha_raw() {
        let sheet = StyleSheet::new();
        let color = Color::from_rgba(10, 20, 30, 1.0).with_alpha(0.5, &sheet);
        assert_eq!(color, Color::from_rgba(10, 20, 30, 0.5));
    }

    #[test]
    fn test_with_alpha_symbolic_preserves_identity() {
        let mut sheet = StyleSheet::new();
        sheet.set("--color-tint-pink", "#FFC0CB");

        let pink = Color::from_name(TintName::Pink, Opacity::Full);
        let faded = pink.with_alpha(0.5, &sheet);

        assert_eq!(faded.reference(), pink.reference());
        assert_eq!(faded.components(), Rgba::new(255, 192, 203, 0.5));
        assert_eq!(faded.to_rgba(&sheet), "rgba(255, 192, 203, 0.5)");
    }

    #[test]
    fn test_pinned_color_does_not_requery() {
        let mut style = MockStyleSource::new();
        style
            .expect_property_value()
            .withf(|name| name == "--color-tint-yellow")
            .times(1)
            .returning(|_| Some("#FFFF00".to_string()));

        let yellow = Color::from_name(TintName::Yellow, Opacity::Full);
        let faded = yellow.with_alpha(0.25, &style);
        assert_eq!(faded.to_rgba(&style), "rgba(255, 255, 0, 0.25)");
    }

    #[test]
    fn test_with_alpha_unresolved() {
        let red = Color::from_name(TintName::Red, Opacity::Full);
        let faded = red.with_alpha_unresolved(0.1);
        assert_eq!(faded.reference(), red.reference());
        assert_eq!(faded.components(), PLACEHOLDER.with_alpha(0.1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_rgba(1, 2, 3, 0.5).to_string(), "rgba(1, 2, 3, 0.5)");
        assert_eq!(
            Color::from_name(TintName::Red, Opacity::Mute).to_string(),
            "var(--color-tint-red-mute)"
        );
        assert_eq!(
            Color::from_name(TintName::Red, Opacity::Mute)
                .with_alpha_unresolved(0.5)
                .to_string(),
            "var(--color-tint-red-mute) / rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn test_pinned_color_serialization_keeps_reference() {
        let mut sheet = StyleSheet::new();
        sheet.set("--color-tint-pink", "#FFC0CB");
        let faded = Color::from_name(TintName::Pink, Opacity::Full).with_alpha(0.5, &sheet);

        let json = serde_json::to_string(&faded).unwrap();
        assert_eq!(json, "\"var(--color-tint-pink) / rgba(255, 192, 203, 0.5)\"");

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_symbolic());
        assert_eq!(parsed, faded);
    }

    #[test]
    fn test_parse_pinned_rejects_bad_halves() {
        assert!(Color::from_string("#FFFFFF / rgba(1, 2, 3, 1)").is_err());
        assert!(Color::from_string("var(--x) / var(--y)").is_err());
        assert_eq!(
            Color::from_string("var(--x) / rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidChannel("300".to_string()))
        );
    }

    #[test]
    fn test_color_serialization() {
        let color = Color::from_name(TintName::Blue, Opacity::Soft);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"var(--color-tint-blue-soft)\"");
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);

        assert!(serde_json::from_str::<Color>("\"bogus\"").is_err());
    }

    #[test]
    fn test_tint_name_from_str() {
        assert_eq!("Red".parse::<TintName>(), Ok(TintName::Red));
        assert!("green".parse::<TintName>().is_err());
    }
}
