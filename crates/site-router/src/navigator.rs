//! Navigation: match, record, update the head
//!
//! [`Navigator`] ties the router, the history stack and the head updater
//! together. Each navigation resolves the target route, pushes it onto the
//! history and rewrites the document head from the route's metadata.

use site_theme::StyleSource;

use crate::document::Document;
use crate::head::{HeadUpdate, HeadUpdater};
use crate::history::{NavigationHistory, StackEntry};
use crate::router::{RouteParams, Router};
use crate::routes::Page;

/// Outcome of a navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Page now shown
    pub page: Page,
    /// Name of the matched route
    pub name: String,
    /// Normalized path
    pub path: String,
    /// Path parameters captured by the route
    pub params: RouteParams,
    /// Head values written for the page
    pub head: HeadUpdate,
}

/// Drives navigation between pages
pub struct Navigator {
    router: Router,
    head: HeadUpdater,
    history: NavigationHistory,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Router::default(), HeadUpdater::default())
    }
}

impl Navigator {
    /// Create a navigator starting on the home page
    pub fn new(router: Router, head: HeadUpdater) -> Self {
        Self {
            router,
            head,
            history: NavigationHistory::default(),
        }
    }

    /// The router in use
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Visited locations
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Page currently shown
    pub fn current_page(&self) -> Page {
        self.history.current().page
    }

    /// Navigate to `location` (a path or `#/hash` location)
    pub fn navigate(
        &mut self,
        location: &str,
        style: &dyn StyleSource,
        doc: &mut dyn Document,
    ) -> Navigation {
        let navigation = self.visit(location, style, doc);
        self.history
            .push(StackEntry::new(navigation.page, navigation.path.clone()));
        navigation
    }

    /// Navigate to `location`, replacing the current history entry
    pub fn replace(
        &mut self,
        location: &str,
        style: &dyn StyleSource,
        doc: &mut dyn Document,
    ) -> Navigation {
        let navigation = self.visit(location, style, doc);
        self.history
            .replace(StackEntry::new(navigation.page, navigation.path.clone()));
        navigation
    }

    /// Go back one entry and re-apply that page's head.
    ///
    /// Returns `None` at the first entry.
    pub fn back(&mut self, style: &dyn StyleSource, doc: &mut dyn Document) -> Option<Navigation> {
        let path = self.history.go_back()?.path.clone();
        Some(self.visit(&path, style, doc))
    }

    fn visit(
        &self,
        location: &str,
        style: &dyn StyleSource,
        doc: &mut dyn Document,
    ) -> Navigation {
        let matched = self.router.match_path(location);
        tracing::debug!(
            "Navigating to {} ({}, {})",
            matched.path,
            matched.record.name,
            matched.page().component()
        );

        let head = self.head.apply(&matched.record.meta, style, doc);

        Navigation {
            page: matched.page(),
            name: matched.record.name.clone(),
            path: matched.path,
            params: matched.params,
            head,
        }
    }
}
