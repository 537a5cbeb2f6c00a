//! Reactive UI stores.
//!
//! Each store is an explicit context-held object, not a process-wide
//! singleton. State lives behind `tokio::sync::watch` channels: mutations
//! are whole-collection replacements applied atomically, and subscribers
//! observe consistent post-mutation snapshots.

pub mod alert;
pub mod catalog;
pub mod filter;
pub mod preferences;

pub use alert::{Alert, AlertQueue, AlertSeverity};
pub use catalog::{project_selection, CatalogStore};
pub use filter::{
    DateFilterMode, DateFilterRange, DateFilterSettings, FilterState, FilterStore,
    OrderingSettings, SortDirection, SortKey, TagFilterSettings, TypeFilterSettings,
};
pub use preferences::PreferencesStore;
