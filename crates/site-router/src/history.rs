//! Navigation history
//!
//! A stack of visited locations. The first entry is the landing location and
//! is never popped.

use serde::{Deserialize, Serialize};

use crate::routes::Page;

/// An entry in the history stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Page that was shown
    pub page: Page,
    /// Normalized path that was visited
    pub path: String,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(page: Page, path: impl Into<String>) -> Self {
        Self {
            page,
            path: path.into(),
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Visited locations, most recent last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationHistory {
    entries: Vec<StackEntry>,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(StackEntry::new(Page::Home, Page::Home.to_path()))
    }
}

impl NavigationHistory {
    /// Create a history starting at `root`
    pub fn new(root: StackEntry) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Record a visit
    pub fn push(&mut self, entry: StackEntry) {
        self.entries.push(entry);
    }

    /// Replace the current entry
    pub fn replace(&mut self, entry: StackEntry) {
        if let Some(last) = self.entries.last_mut() {
            *last = entry;
        }
    }

    /// Drop the current entry, returning the one now on top.
    ///
    /// Returns `None` (and leaves the stack alone) at the root.
    pub fn go_back(&mut self) -> Option<&StackEntry> {
        if self.entries.len() > 1 {
            self.entries.pop();
            self.entries.last()
        } else {
            None
        }
    }

    /// The entry on top of the stack
    pub fn current(&self) -> &StackEntry {
        self.entries.last().expect("History should never be empty")
    }

    /// Whether there is somewhere to go back to
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Number of entries, root included
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Start over at `root`
    pub fn reset(&mut self, root: StackEntry) {
        self.entries = vec![root];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_push_back() {
        let mut history = NavigationHistory::default();
        assert_eq!(history.depth(), 1);
        assert!(!history.can_go_back());

        history.push(StackEntry::new(Page::About, "/about"));
        assert_eq!(history.depth(), 2);
        assert!(history.can_go_back());
        assert_eq!(history.current().page, Page::About);

        assert_eq!(history.go_back().map(|e| e.page), Some(Page::Home));
        assert_eq!(history.depth(), 1);

        // Can't pop past root
        assert!(history.go_back().is_none());
        assert_eq!(history.current().path, "/");
    }

    #[test]
    fn test_history_replace_and_reset() {
        let mut history = NavigationHistory::default();
        history.push(StackEntry::new(Page::About, "/about"));
        history.replace(StackEntry::new(Page::Projects, "/projects"));
        assert_eq!(history.depth(), 2);
        assert_eq!(history.current().page, Page::Projects);

        history.reset(StackEntry::new(Page::NotFound, "/missing"));
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current().path, "/missing");
    }

    #[test]
    fn test_entry_keys_are_unique() {
        let a = StackEntry::new(Page::Home, "/");
        let b = StackEntry::new(Page::Home, "/");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_history_serialization() {
        let mut history = NavigationHistory::default();
        history.push(StackEntry::new(Page::Projects, "/projects"));
        let json = serde_json::to_string(&history).unwrap();
        let parsed: NavigationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }
}
