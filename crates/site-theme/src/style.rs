//! Style sources: where symbolic colors read their custom properties
//!
//! In a browser this is the computed style of the document root. Here it is
//! a capability passed to every resolving call, so the color utility stays
//! testable without a live rendering environment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::color::Color;

/// Maximum number of `var(--x)` hops followed while resolving a property
pub const MAX_VAR_DEPTH: usize = 8;

/// Stylesheet loading error types
#[derive(Debug, Error)]
pub enum StyleError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for stylesheet operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Read access to CSS custom properties
#[cfg_attr(test, mockall::automock)]
pub trait StyleSource {
    /// Value of the custom property `name` (including the leading `--`).
    ///
    /// Missing and empty properties are both `None`.
    fn property_value(&self, name: &str) -> Option<String>;
}

impl<S: StyleSource + ?Sized> StyleSource for &S {
    fn property_value(&self, name: &str) -> Option<String> {
        (**self).property_value(name)
    }
}

/// Look up `name` and parse it as a color.
///
/// Values of the form `var(--other)` are followed up to [`MAX_VAR_DEPTH`]
/// times. Missing properties, unparseable values and overly deep chains all
/// yield `None`.
pub fn variable_color(style: &dyn StyleSource, name: &str) -> Option<Color> {
    let mut name = name.to_string();

    for _ in 0..MAX_VAR_DEPTH {
        let value = style.property_value(&name)?;
        match value.parse::<Color>() {
            Ok(Color::Symbolic {
                reference,
                resolved: None,
            }) => {
                name = reference.variable_name().into_owned();
            }
            Ok(color) => return Some(color),
            Err(e) => {
                tracing::debug!("Custom property {} is not a color: {}", name, e);
                return None;
            }
        }
    }

    tracing::debug!("Gave up resolving {} after {} var() hops", name, MAX_VAR_DEPTH);
    None
}

// =============================================================================
// StyleSheet
// =============================================================================

/// In-memory set of custom properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    variables: BTreeMap<String, String>,
}

impl StyleSheet {
    /// Create an empty stylesheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Raw value of a custom property
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Remove a custom property, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no properties are defined
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property of `other` into `self`; `other` wins on conflict
    pub fn merge(&mut self, other: &StyleSheet) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Load from a JSON object of `{ "--name": "value" }`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Collect custom property declarations from CSS text.
    ///
    /// Declarations inside at-rule blocks (`@media`, `@supports`, ...) are
    /// skipped; later declarations override earlier ones.
    pub fn from_css(css: &str) -> Self {
        let css = comment_regex().replace_all(css, "");
        let mut sheet = Self::new();

        // One entry per open block: true when the block belongs to an at-rule
        let mut blocks: Vec<bool> = Vec::new();
        let mut buffer = String::new();

        for ch in css.chars() {
            match ch {
                '{' => {
                    blocks.push(buffer.trim_start().starts_with('@'));
                    buffer.clear();
                }
                '}' => {
                    sheet.take_declaration(&buffer, &blocks);
                    buffer.clear();
                    blocks.pop();
                }
                ';' => {
                    sheet.take_declaration(&buffer, &blocks);
                    buffer.clear();
                }
                _ => buffer.push(ch),
            }
        }

        sheet
    }

    fn take_declaration(&mut self, text: &str, blocks: &[bool]) {
        if blocks.is_empty() || blocks.iter().any(|&at_rule| at_rule) {
            return;
        }
        if let Some((name, value)) = text.trim().split_once(':') {
            let name = name.trim();
            if name.starts_with("--") {
                self.set(name, value.trim());
            }
        }
    }
}

fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
}

impl StyleSource for StyleSheet {
    fn property_value(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for (name, value) in iter {
            sheet.set(name, value);
        }
        sheet
    }
}

// =============================================================================
// Tests
// =============================================================================
