//! Route definitions for the site
//!
//! The site has a fixed set of pages. Each page is registered once in a
//! [`RouteTable`] together with its path pattern and optional page metadata.

use serde::{Deserialize, Serialize};
use site_theme::ThemeColor;

/// Site name, used as the home page name and the default document title
pub const SITE_NAME: &str = "Kessoku Tea Time";

/// Pattern matching every path not claimed by another route
pub const CATCH_ALL_PATTERN: &str = "/:pathMatch(.*)*";

// =============================================================================
// Pages
// =============================================================================

/// All pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page
    #[default]
    Home,
    /// About page
    About,
    /// Project list
    Projects,
    /// Anything else
    NotFound,
}

impl Page {
    /// Canonical path of the page
    pub fn to_path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::NotFound => "/404",
        }
    }

    /// View component rendered for the page
    pub fn component(&self) -> &'static str {
        match self {
            Page::Home => "HomeView",
            Page::About => "AboutView",
            Page::Projects => "ProjectsView",
            Page::NotFound => "NotFoundView",
        }
    }

    /// Whether the view is loaded on first visit rather than bundled up front
    pub fn is_lazy(&self) -> bool {
        !matches!(self, Page::Home)
    }
}

// =============================================================================
// Navigation links
// =============================================================================

/// A named link shown in the site header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Link text
    pub name: &'static str,
    /// Target path
    pub path: &'static str,
}

/// Header navigation entries
pub const NAV_LINKS: [Route; 2] = [
    Route {
        name: "About",
        path: "/about",
    },
    Route {
        name: "Projects",
        path: "/projects",
    },
];

// =============================================================================
// Route metadata
// =============================================================================

/// Per-route page metadata written into the document head
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta name="description">` content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Browser chrome color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<ThemeColor>,
}

impl RouteMeta {
    /// Metadata with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the theme color
    pub fn with_theme_color(mut self, theme_color: impl Into<ThemeColor>) -> Self {
        self.theme_color = Some(theme_color.into());
        self
    }
}

// =============================================================================
// Route table
// =============================================================================

/// One registered route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Page rendered by the route
    pub page: Page,
    /// Route name
    pub name: String,
    /// Path pattern (`/literal`, `/:param`, or a catch-all `/:name(.*)*`)
    pub path: String,
    /// Page metadata
    #[serde(default)]
    pub meta: RouteMeta,
}

impl RouteRecord {
    /// Create a record without metadata
    pub fn new(page: Page, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            page,
            name: name.into(),
            path: path.into(),
            meta: RouteMeta::default(),
        }
    }

    /// Attach metadata
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Catch-all 404 record
    pub fn not_found() -> Self {
        Self::new(Page::NotFound, "404 Not Found", CATCH_ALL_PATTERN)
            .with_meta(RouteMeta::titled(format!("404 | {}", SITE_NAME)))
    }
}

/// Ordered set of routes; earlier records win
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn with_route(mut self, record: RouteRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Records in match order
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// First record rendering `page`
    pub fn find(&self, page: Page) -> Option<&RouteRecord> {
        self.records.iter().find(|r| r.page == page)
    }

    /// Mutable access to the first record rendering `page`
    pub fn find_mut(&mut self, page: Page) -> Option<&mut RouteRecord> {
        self.records.iter_mut().find(|r| r.page == page)
    }
}

impl Default for RouteTable {
    /// The site's routes: home, about, projects and the 404 catch-all
    fn default() -> Self {
        Self::new()
            .with_route(RouteRecord::new(Page::Home, SITE_NAME, "/"))
            .with_route(
                RouteRecord::new(Page::About, "About", "/about")
                    .with_meta(RouteMeta::titled(format!("About | {}", SITE_NAME))),
            )
            .with_route(
                RouteRecord::new(Page::Projects, "Projects", "/projects")
                    .with_meta(RouteMeta::titled(format!("Projects | {}", SITE_NAME))),
            )
            .with_route(RouteRecord::not_found())
    }
}

impl From<Vec<RouteRecord>> for RouteTable {
    fn from(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }
}

// =============================================================================
// Tests
// =============================================================================
