//! Document head abstraction
//!
//! The head updater writes through the [`Document`] trait rather than a live
//! DOM. [`HeadDocument`] is the in-memory implementation: a title plus a list
//! of `<meta>` tags that can be rendered back to HTML.

use serde::{Deserialize, Serialize};
use site_theme::ColorScheme;

/// `name` attribute of the description tag
pub const DESCRIPTION: &str = "description";

/// `name` attribute of the theme color tags
pub const THEME_COLOR: &str = "theme-color";

/// Selects a `<meta>` tag by `name` and optional `media`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaQuery {
    /// `name` attribute
    pub name: String,
    /// `media` attribute; `None` selects tags without one
    pub media: Option<String>,
}

impl MetaQuery {
    /// Tag with `name` and no media attribute
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media: None,
        }
    }

    /// `<meta name="description">`
    pub fn description() -> Self {
        Self::named(DESCRIPTION)
    }

    /// `<meta name="theme-color" media="(prefers-color-scheme: ...)">`
    pub fn theme_color(scheme: ColorScheme) -> Self {
        Self {
            name: THEME_COLOR.to_string(),
            media: Some(scheme.media_query().to_string()),
        }
    }
}

/// Writable document head
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// Replace the document title
    fn set_title(&mut self, title: &str);

    /// Set the `content` of the tag selected by `query`.
    ///
    /// Returns `false` when no such tag exists; nothing is created.
    fn set_meta_content(&mut self, query: &MetaQuery, content: &str) -> bool;
}

/// A `<meta>` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    /// `name` attribute
    pub name: String,
    /// `media` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// `content` attribute
    pub content: String,
}

impl MetaTag {
    fn matches(&self, query: &MetaQuery) -> bool {
        self.name == query.name && self.media == query.media
    }
}

/// In-memory document head
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadDocument {
    title: String,
    tags: Vec<MetaTag>,
}

impl HeadDocument {
    /// Empty head: no title, no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Head with the tags the site's `index.html` ships: a description and a
    /// theme color per color scheme
    pub fn with_standard_tags() -> Self {
        let mut doc = Self::new();
        doc.insert_meta(MetaTag {
            name: DESCRIPTION.to_string(),
            media: None,
            content: String::new(),
        });
        for scheme in ColorScheme::ALL {
            doc.insert_meta(MetaTag {
                name: THEME_COLOR.to_string(),
                media: Some(scheme.media_query().to_string()),
                content: String::new(),
            });
        }
        doc
    }

    /// Add a tag
    pub fn insert_meta(&mut self, tag: MetaTag) {
        self.tags.push(tag);
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content of the first tag matching `query`
    pub fn meta_content(&self, query: &MetaQuery) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.matches(query))
            .map(|t| t.content.as_str())
    }

    /// All tags in insertion order
    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    /// Render the head contents as HTML
    pub fn render(&self) -> String {
        let mut html = format!("<title>{}</title>", escape(&self.title));
        for tag in &self.tags {
            html.push_str(&format!("\n<meta name=\"{}\"", escape(&tag.name)));
            if let Some(media) = &tag.media {
                html.push_str(&format!(" media=\"{}\"", escape(media)));
            }
            html.push_str(&format!(" content=\"{}\">", escape(&tag.content)));
        }
        html
    }
}

impl Document for HeadDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta_content(&mut self, query: &MetaQuery, content: &str) -> bool {
        match self.tags.iter_mut().find(|t| t.matches(query)) {
            Some(tag) => {
                tag.content = content.to_string();
                true
            }
            None => false,
        }
    }
}

fn escape(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}
