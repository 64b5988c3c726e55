//! Client-side routing for the Kessoku Tea Time site
//!
//! This crate provides the route table, path matching, navigation history and
//! the head updater that writes route metadata (title, description, theme
//! colors) into the document on every navigation.
//!
//! # Modules
//!
//! - [`routes`] - Pages, header links, route metadata and the route table
//! - [`router`] - Path and hash-location matching
//! - [`history`] - Navigation history stack
//! - [`document`] - Document head abstraction and in-memory head
//! - [`head`] - Route-metadata driven head updates
//! - [`navigator`] - Navigation combining all of the above
//!
//! # Example
//!
//! ```rust
//! use site_router::{HeadDocument, Navigator, Page};
//! use site_theme::StyleSheet;
//!
//! let style = StyleSheet::from_css(":root { --vt-c-white: #ffffff; --vt-c-black: #000000; }");
//! let mut doc = HeadDocument::with_standard_tags();
//! let mut navigator = Navigator::default();
//!
//! let nav = navigator.navigate("/about", &style, &mut doc);
//! assert_eq!(nav.page, Page::About);
//! assert_eq!(doc.title(), "About | Kessoku Tea Time");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod head;
pub mod history;
pub mod navigator;
pub mod router;
pub mod routes;

// Re-export commonly used types
pub use document::{Document, HeadDocument, MetaQuery, MetaTag};
pub use head::{HeadDefaults, HeadUpdate, HeadUpdater};
pub use history::{NavigationHistory, StackEntry};
pub use navigator::{Navigation, Navigator};
pub use router::{RouteMatch, RouteParams, Router};
pub use routes::{Page, Route, RouteMeta, RouteRecord, RouteTable, NAV_LINKS, SITE_NAME};
