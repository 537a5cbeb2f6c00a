//! Catalog Store
//!
//! Holds the full known metadata set, the global tag vocabulary, the smart
//! folder list, and the current selection. Writes happen only in response
//! to successful backend calls or explicit local edits; collections are
//! replaced wholesale, never patched.

use crate::model::{Metadata, SmartFolder};
use tokio::sync::watch;
use tracing::{debug, warn};

pub struct CatalogStore {
    metadata: watch::Sender<Vec<Metadata>>,
    tags: watch::Sender<Vec<String>>,
    folders: watch::Sender<Vec<SmartFolder>>,
    selected: watch::Sender<Vec<String>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            metadata: watch::channel(Vec::new()).0,
            tags: watch::channel(Vec::new()).0,
            folders: watch::channel(Vec::new()).0,
            selected: watch::channel(Vec::new()).0,
        }
    }

    pub fn metadata(&self) -> Vec<Metadata> {
        self.metadata.borrow().clone()
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    pub fn folders(&self) -> Vec<SmartFolder> {
        self.folders.borrow().clone()
    }

    pub fn selected(&self) -> Vec<String> {
        self.selected.borrow().clone()
    }

    pub fn watch_metadata(&self) -> watch::Receiver<Vec<Metadata>> {
        self.metadata.subscribe()
    }

    pub fn watch_tags(&self) -> watch::Receiver<Vec<String>> {
        self.tags.subscribe()
    }

    pub fn watch_folders(&self) -> watch::Receiver<Vec<SmartFolder>> {
        self.folders.subscribe()
    }

    pub fn watch_selected(&self) -> watch::Receiver<Vec<String>> {
        self.selected.subscribe()
    }

    /// Wholesale replacement of the metadata set (used after a search or a
    /// full refresh).
    pub fn replace_all(&self, items: Vec<Metadata>) {
        debug!(count = items.len(), "Replacing catalog metadata");
        self.metadata.send_replace(items);
    }

    /// Replace the entry whose hash matches `item.hash`. An unknown hash is
    /// a no-op: callers performing an edit must confirm the item exists
    /// first, and a blind insert here would let a stale edit resurrect a
    /// deleted entry. Returns whether anything changed.
    pub fn upsert_one(&self, item: Metadata) -> bool {
        self.metadata.send_if_modified(|items| {
            match items.iter().position(|m| m.hash == item.hash) {
                Some(index) => {
                    items[index] = item;
                    true
                }
                None => {
                    warn!(hash = %item.hash, "Upsert for unknown hash ignored");
                    false
                }
            }
        })
    }

    /// Drop all entries whose hash appears in `hashes`, preserving the order
    /// of the rest. Non-present hashes are ignored. Returns whether anything
    /// was removed.
    pub fn remove_by_hashes(&self, hashes: &[String]) -> bool {
        self.metadata.send_if_modified(|items| {
            let before = items.len();
            items.retain(|m| !hashes.contains(&m.hash));
            let removed = before - items.len();
            if removed > 0 {
                debug!(removed, "Removed catalog entries");
            }
            removed > 0
        })
    }

    pub fn set_tags(&self, tags: Vec<String>) {
        self.tags.send_replace(tags);
    }

    pub fn set_folders(&self, folders: Vec<SmartFolder>) {
        self.folders.send_replace(folders);
    }

    pub fn set_selected(&self, hashes: Vec<String>) {
        self.selected.send_replace(hashes);
    }

    /// Selection projection: the sub-sequence of the metadata set whose hash
    /// is currently selected, in catalog order. Pure derivation; recompute
    /// on any metadata or selection change notification.
    pub fn selected_metadata(&self) -> Vec<Metadata> {
        project_selection(&self.metadata.borrow(), &self.selected.borrow())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Join `metadata` against `selected`, keeping metadata order and silently
/// dropping selected hashes with no catalog entry.
pub fn project_selection(metadata: &[Metadata], selected: &[String]) -> Vec<Metadata> {
    metadata
        .iter()
        .filter(|m| selected.iter().any(|hash| *hash == m.hash))
        .cloned()
        .collect()
}
