//! The assembled site: routes, stylesheet and document head

use site_router::{HeadDocument, HeadUpdater, Navigation, Navigator, Page, RouteTable, Router};
use site_theme::StyleSheet;

use crate::config::SiteConfig;

/// A running site
pub struct Site {
    navigator: Navigator,
    style: StyleSheet,
    document: HeadDocument,
}

impl Default for Site {
    fn default() -> Self {
        Self::new(SiteConfig::default(), StyleSheet::new())
    }
}

impl Site {
    /// Build a site from `config` over `stylesheet`.
    ///
    /// The configuration's variables override the stylesheet's.
    pub fn new(config: SiteConfig, stylesheet: StyleSheet) -> Self {
        let mut style = stylesheet;
        style.merge(&config.variables);

        let table = config.routes.clone().unwrap_or_default();
        let navigator = Navigator::new(Router::new(table), HeadUpdater::new(config.head_defaults()));

        Self {
            navigator,
            style,
            document: HeadDocument::with_standard_tags(),
        }
    }

    /// Navigate to a path or hash location
    pub fn navigate(&mut self, location: &str) -> Navigation {
        self.navigator
            .navigate(location, &self.style, &mut self.document)
    }

    /// Go back one page
    pub fn back(&mut self) -> Option<Navigation> {
        self.navigator.back(&self.style, &mut self.document)
    }

    /// Page currently shown
    pub fn current_page(&self) -> Page {
        self.navigator.current_page()
    }

    /// Routes served
    pub fn routes(&self) -> &RouteTable {
        self.navigator.router().table()
    }

    /// Current stylesheet
    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    /// Swap the stylesheet (e.g. after a theme change) and re-apply the
    /// current page's head
    pub fn set_style(&mut self, style: StyleSheet) -> Navigation {
        self.style = style;
        let path = self.navigator.history().current().path.clone();
        self.navigator
            .replace(&path, &self.style, &mut self.document)
    }

    /// Document head as last written
    pub fn document(&self) -> &HeadDocument {
        &self.document
    }
}
