//! Kessoku Tea Time
//!
//! Personal site glue: client-side routing between a handful of static pages
//! and the color utility used for theming. The routing and theming live in
//! the workspace crates; this crate assembles them into a [`Site`] driven by a
//! [`SiteConfig`].
//!
//! # Example
//!
//! ```rust
//! use kessoku_tea_time::{Site, SiteConfig, StyleSheet};
//!
//! let style = StyleSheet::from_css(":root { --vt-c-white: #ffffff; --vt-c-black: #181818; }");
//! let mut site = Site::new(SiteConfig::default(), style);
//!
//! site.navigate("#/projects");
//! assert_eq!(site.document().title(), "Projects | Kessoku Tea Time");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod site;

pub use config::{ConfigError, SiteConfig};
pub use site::Site;

pub use site_router::{
    HeadDocument, MetaQuery, Navigation, Page, Route, RouteMeta, RouteRecord, RouteTable,
    NAV_LINKS,
};
pub use site_theme::{palette, Color, ColorScheme, StyleSheet, ThemeColor};

/// Install a `tracing` subscriber honoring `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }

    #[test]
    fn test_default_site_serves_home() {
        let mut site = Site::default();
        assert_eq!(site.navigate("/").page, Page::Home);
        assert_eq!(site.routes().records().len(), 4);
    }
}
