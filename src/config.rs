//! Site configuration
//!
//! Loaded from JSON. Every field has a default, so an empty object (or no
//! file at all) yields the stock site.

use serde::{Deserialize, Serialize};
use site_router::{HeadDefaults, RouteTable, SITE_NAME};
use site_theme::{StyleSheet, ThemeColor};
use std::path::Path;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Default document title
    pub site_name: String,

    /// Description used by routes without one
    pub default_description: String,

    /// Theme color used by routes without one
    pub default_theme_color: ThemeColor,

    /// Extra custom properties layered over the stylesheet
    pub variables: StyleSheet,

    /// Replacement route table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<RouteTable>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: SITE_NAME.to_string(),
            default_description: String::new(),
            default_theme_color: ThemeColor::default(),
            variables: StyleSheet::new(),
            routes: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!("Loaded site configuration from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Invalid("siteName must not be empty".to_string()));
        }
        if let Some(routes) = &self.routes {
            if routes.records().is_empty() {
                return Err(ConfigError::Invalid("routes must not be empty".to_string()));
            }
        }
        for (name, _) in self.variables.iter() {
            if !name.starts_with("--") {
                tracing::warn!("Variable {} is not a custom property and will never be read", name);
            }
        }
        Ok(())
    }

    /// Fallbacks for the head updater
    pub fn head_defaults(&self) -> HeadDefaults {
        HeadDefaults {
            title: self.site_name.clone(),
            description: self.default_description.clone(),
            theme_color: self.default_theme_color.clone(),
        }
    }
}
