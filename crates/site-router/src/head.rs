//! Route-metadata driven head updates
//!
//! On every navigation the target route's metadata is merged with the site
//! defaults, theme colors are resolved against the current style source, and
//! the result is written into the document head. Missing head tags are
//! skipped; nothing here fails.

use serde::{Deserialize, Serialize};
use site_theme::{ColorScheme, StyleSource, ThemeColor};

use crate::document::{Document, MetaQuery};
use crate::routes::{RouteMeta, SITE_NAME};

/// Values used when a route leaves a field unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadDefaults {
    /// Title when the route has none
    pub title: String,
    /// Description when the route has none
    pub description: String,
    /// Theme color when the route has none
    pub theme_color: ThemeColor,
}

impl Default for HeadDefaults {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: String::new(),
            theme_color: ThemeColor::default(),
        }
    }
}

/// What a navigation wrote (or tried to write) into the head
#[derive(Debug, Clone, PartialEq)]
pub struct HeadUpdate {
    /// Document title
    pub title: String,
    /// Description content
    pub description: String,
    /// Resolved `rgba(...)` theme color per scheme, light first
    pub theme_colors: Vec<(ColorScheme, String)>,
    /// Tags that were not present in the document
    pub missing: Vec<MetaQuery>,
}

impl HeadUpdate {
    /// Resolved theme color for `scheme`
    pub fn theme_color(&self, scheme: ColorScheme) -> Option<&str> {
        self.theme_colors
            .iter()
            .find(|(s, _)| *s == scheme)
            .map(|(_, c)| c.as_str())
    }
}

/// Applies route metadata to a document head
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadUpdater {
    defaults: HeadDefaults,
}

impl HeadUpdater {
    /// Create an updater with the given fallbacks
    pub fn new(defaults: HeadDefaults) -> Self {
        Self { defaults }
    }

    /// Fallback values
    pub fn defaults(&self) -> &HeadDefaults {
        &self.defaults
    }

    /// Compute the head values for `meta` without touching a document
    pub fn compute(&self, meta: &RouteMeta, style: &dyn StyleSource) -> HeadUpdate {
        let title = non_empty(meta.title.as_deref()).unwrap_or(self.defaults.title.as_str());
        let description = non_empty(meta.description.as_deref())
            .unwrap_or(self.defaults.description.as_str());
        let theme_color = meta.theme_color.as_ref().unwrap_or(&self.defaults.theme_color);

        let theme_colors = ColorScheme::ALL
            .into_iter()
            .map(|scheme| (scheme, theme_color.to_rgba(scheme, style)))
            .collect();

        HeadUpdate {
            title: title.to_string(),
            description: description.to_string(),
            theme_colors,
            missing: Vec::new(),
        }
    }

    /// Compute the head values for `meta` and write them into `doc`
    pub fn apply(
        &self,
        meta: &RouteMeta,
        style: &dyn StyleSource,
        doc: &mut dyn Document,
    ) -> HeadUpdate {
        let mut update = self.compute(meta, style);

        doc.set_title(&update.title);

        let mut writes = vec![(MetaQuery::description(), update.description.clone())];
        for (scheme, color) in &update.theme_colors {
            writes.push((MetaQuery::theme_color(*scheme), color.clone()));
        }

        for (query, content) in writes {
            if !doc.set_meta_content(&query, &content) {
                tracing::debug!(
                    "No <meta name=\"{}\"> ({:?}) in document, skipping",
                    query.name,
                    query.media
                );
                update.missing.push(query);
            }
        }

        update
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HeadDocument, MockDocument};
    use site_theme::{palette, Color, StyleSheet};

    fn site_style() -> StyleSheet {
        StyleSheet::from_css(
            ":root {
                --vt-c-white: #ffffff;
                --vt-c-black: #181818;
                --color-tint-pink: #F4A7B9;
                --color-tint-yellow-soft: #FFE08080;
            }",
        )
    }

    #[test]
    fn test_defaults_when_meta_empty() {
        let updater = HeadUpdater::default();
        let update = updater.compute(&RouteMeta::default(), &site_style());

        assert_eq!(update.title, "Kessoku Tea Time");
        assert_eq!(update.description, "");
        assert_eq!(
            update.theme_color(ColorScheme::Light),
            Some("rgba(255, 255, 255, 1)")
        );
        assert_eq!(update.theme_color(ColorScheme::Dark), Some("rgba(24, 24, 24, 1)"));
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let updater = HeadUpdater::default();
        let meta = RouteMeta::titled("").with_description("");
        let update = updater.compute(&meta, &site_style());
        assert_eq!(update.title, "Kessoku Tea Time");
        assert_eq!(update.description, "");
    }

    #[test]
    fn test_route_meta_overrides_defaults() {
        let updater = HeadUpdater::default();
        let meta = RouteMeta::titled("About | Kessoku Tea Time")
            .with_description("Who we are")
            .with_theme_color(ThemeColor::scheme(palette::PINK, palette::YELLOW_SOFT));

        let update = updater.compute(&meta, &site_style());
        assert_eq!(update.title, "About | Kessoku Tea Time");
        assert_eq!(update.description, "Who we are");
        assert_eq!(
            update.theme_color(ColorScheme::Light),
            Some("rgba(244, 167, 185, 1)")
        );
        assert_eq!(
            update.theme_color(ColorScheme::Dark),
            Some("rgba(255, 224, 128, 0.5019607843137255)")
        );
    }

    #[test]
    fn test_uniform_theme_color() {
        let updater = HeadUpdater::default();
        let meta = RouteMeta::default().with_theme_color(Color::from_rgba(1, 2, 3, 0.5));
        let update = updater.compute(&meta, &site_style());
        assert_eq!(update.theme_color(ColorScheme::Light), Some("rgba(1, 2, 3, 0.5)"));
        assert_eq!(update.theme_color(ColorScheme::Dark), Some("rgba(1, 2, 3, 0.5)"));
    }

    #[test]
    fn test_apply_writes_document() {
        let updater = HeadUpdater::default();
        let mut doc = HeadDocument::with_standard_tags();
        let update = updater.apply(
            &RouteMeta::titled("Projects | Kessoku Tea Time"),
            &site_style(),
            &mut doc,
        );

        assert!(update.missing.is_empty());
        assert_eq!(doc.title(), "Projects | Kessoku Tea Time");
        assert_eq!(doc.meta_content(&MetaQuery::description()), Some(""));
        assert_eq!(
            doc.meta_content(&MetaQuery::theme_color(ColorScheme::Light)),
            Some("rgba(255, 255, 255, 1)")
        );
        assert_eq!(
            doc.meta_content(&MetaQuery::theme_color(ColorScheme::Dark)),
            Some("rgba(24, 24, 24, 1)")
        );
    }

    #[test]
    fn test_apply_tolerates_missing_tags() {
        let updater = HeadUpdater::default();
        let mut doc = HeadDocument::new();
        let update = updater.apply(&RouteMeta::titled("About"), &site_style(), &mut doc);

        assert_eq!(doc.title(), "About");
        assert_eq!(update.missing.len(), 3);
        assert!(update.missing.contains(&MetaQuery::description()));
    }

    #[test]
    fn test_apply_writes_each_tag_once() {
        let mut doc = MockDocument::new();
        doc.expect_set_title()
            .withf(|title| title == "Kessoku Tea Time")
            .times(1)
            .return_const(());
        doc.expect_set_meta_content()
            .withf(|query, _| query.name == "description")
            .times(1)
            .return_const(true);
        doc.expect_set_meta_content()
            .withf(|query, _| query.name == "theme-color")
            .times(2)
            .return_const(true);

        let update = HeadUpdater::default().apply(&RouteMeta::default(), &site_style(), &mut doc);
        assert!(update.missing.is_empty());
    }

    #[test]
    fn test_custom_defaults() {
        let updater = HeadUpdater::new(HeadDefaults {
            title: "Site".to_string(),
            description: "A site".to_string(),
            theme_color: ThemeColor::from(palette::PINK),
        });
        let update = updater.compute(&RouteMeta::default(), &site_style());
        assert_eq!(update.title, "Site");
        assert_eq!(update.description, "A site");
        assert_eq!(
            update.theme_color(ColorScheme::Dark),
            Some("rgba(244, 167, 185, 1)")
        );
    }
}
