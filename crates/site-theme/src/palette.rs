//! Named colors of the site stylesheet
//!
//! Every entry is symbolic: the values themselves are defined by the external
//! stylesheet and read at resolution time.

use std::borrow::Cow;

use crate::color::{Color, ColorRef, Opacity, TintName};

/// `--vt-c-black`
pub const BLACK_VAR: &str = "--vt-c-black";

/// `--vt-c-white`
pub const WHITE_VAR: &str = "--vt-c-white";

/// Red tint
pub const RED: Color = Color::from_name(TintName::Red, Opacity::Full);
/// Red tint, soft
pub const RED_SOFT: Color = Color::from_name(TintName::Red, Opacity::Soft);
/// Red tint, mute
pub const RED_MUTE: Color = Color::from_name(TintName::Red, Opacity::Mute);

/// Blue tint
pub const BLUE: Color = Color::from_name(TintName::Blue, Opacity::Full);
/// Blue tint, soft
pub const BLUE_SOFT: Color = Color::from_name(TintName::Blue, Opacity::Soft);
/// Blue tint, mute
pub const BLUE_MUTE: Color = Color::from_name(TintName::Blue, Opacity::Mute);

/// Pink tint
pub const PINK: Color = Color::from_name(TintName::Pink, Opacity::Full);
/// Pink tint, soft
pub const PINK_SOFT: Color = Color::from_name(TintName::Pink, Opacity::Soft);
/// Pink tint, mute
pub const PINK_MUTE: Color = Color::from_name(TintName::Pink, Opacity::Mute);

/// Yellow tint
pub const YELLOW: Color = Color::from_name(TintName::Yellow, Opacity::Full);
/// Yellow tint, soft
pub const YELLOW_SOFT: Color = Color::from_name(TintName::Yellow, Opacity::Soft);
/// Yellow tint, mute
pub const YELLOW_MUTE: Color = Color::from_name(TintName::Yellow, Opacity::Mute);

/// Site black
pub const BLACK: Color = Color::from_reference(ColorRef::Variable(Cow::Borrowed(BLACK_VAR)));
/// Site white
pub const WHITE: Color = Color::from_reference(ColorRef::Variable(Cow::Borrowed(WHITE_VAR)));

/// All twelve tints, grouped by hue
pub const TINTS: [Color; 12] = [
    RED, RED_SOFT, RED_MUTE, BLUE, BLUE_SOFT, BLUE_MUTE, PINK, PINK_SOFT, PINK_MUTE, YELLOW,
    YELLOW_SOFT, YELLOW_MUTE,
];

/// Look up a named color by its custom property name
pub fn by_variable(name: &str) -> Option<Color> {
    match name {
        BLACK_VAR => Some(BLACK),
        WHITE_VAR => Some(WHITE),
        _ => TINTS
            .into_iter()
            .find(|c| c.to_raw_css().as_deref() == Some(name)),
    }
}
