//! Filter/Ordering Store
//!
//! Four independently settable sub-states (tag filter, type filter, date
//! filter, ordering) observed jointly through one composite signal. Each
//! setter fires the signal exactly once, carrying the full four-tuple, so
//! dependent computations recompute atomically from the whole state rather
//! than once per sub-setting. The store performs no filtering itself; the
//! predicate and comparator logic lives in [`crate::views`].

use crate::model::ContentType;
use tokio::sync::watch;

#[derive(Clone, Debug, PartialEq)]
pub struct TagFilterSettings {
    /// Tags an item must all carry to pass. Empty = no tag filtering.
    pub selected_tags: Vec<String>,
}

impl Default for TagFilterSettings {
    fn default() -> Self {
        Self {
            selected_tags: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeFilterSettings {
    /// Content types allowed through. Defaults to every known type.
    pub shown_types: Vec<ContentType>,
}

impl Default for TypeFilterSettings {
    fn default() -> Self {
        Self {
            shown_types: ContentType::ALL.to_vec(),
        }
    }
}

/// Which timestamp the date filter inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFilterMode {
    Added,
    Modified,
}

/// Enumerated date bucket. `Today` and `Yesterday` are calendar days;
/// the `Last*` buckets are rolling windows ending at "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFilterRange {
    All,
    Today,
    Yesterday,
    LastWeek,
    Last30Days,
    Last90Days,
    Last180Days,
    Last365Days,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateFilterSettings {
    pub mode: DateFilterMode,
    pub range: DateFilterRange,
}

impl Default for DateFilterSettings {
    fn default() -> Self {
        Self {
            mode: DateFilterMode::Added,
            range: DateFilterRange::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Extension,
    FileSize,
    DateAdded,
    DateModified,
}

/// `Relevance` keeps the order the backend returned; the other two apply
/// the comparator for the selected sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Relevance,
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderingSettings {
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for OrderingSettings {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Name,
            direction: SortDirection::Relevance,
        }
    }
}

/// Snapshot of all four sub-states, as carried by the composite signal.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FilterState {
    pub tag: TagFilterSettings,
    pub types: TypeFilterSettings,
    pub date: DateFilterSettings,
    pub ordering: OrderingSettings,
}

pub struct FilterStore {
    state: watch::Sender<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            state: watch::channel(FilterState::default()).0,
        }
    }

    /// Current snapshot of all four sub-states.
    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    /// Composite change signal. Fires once per sub-state mutation with the
    /// full current state.
    pub fn watch(&self) -> watch::Receiver<FilterState> {
        self.state.subscribe()
    }

    pub fn set_tag_filter(&self, tag: TagFilterSettings) {
        self.state.send_modify(|s| s.tag = tag);
    }

    pub fn set_type_filter(&self, types: TypeFilterSettings) {
        self.state.send_modify(|s| s.types = types);
    }

    pub fn set_date_filter(&self, date: DateFilterSettings) {
        self.state.send_modify(|s| s.date = date);
    }

    pub fn set_ordering(&self, ordering: OrderingSettings) {
        self.state.send_modify(|s| s.ordering = ordering);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_state() {
        let state = FilterStore::new().state();
        assert!(state.tag.selected_tags.is_empty());
        assert_eq!(state.types.shown_types, ContentType::ALL.to_vec());
        assert_eq!(state.date.mode, DateFilterMode::Added);
        assert_eq!(state.date.range, DateFilterRange::All);
        assert_eq!(state.ordering.sort_key, SortKey::Name);
        assert_eq!(state.ordering.direction, SortDirection::Relevance);
    }

    #[test]
    fn each_sub_state_change_fires_composite_signal_once() {
        let store = FilterStore::new();
        let mut rx = store.watch();
        rx.mark_unchanged();

        store.set_tag_filter(TagFilterSettings {
            selected_tags: vec!["cat".to_string()],
        });
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        // The signal carries all four sub-states, changed or not.
        assert_eq!(snapshot.tag.selected_tags, ["cat".to_string()]);
        assert_eq!(snapshot.types, TypeFilterSettings::default());
        assert_eq!(snapshot.date, DateFilterSettings::default());
        assert_eq!(snapshot.ordering, OrderingSettings::default());
        assert!(!rx.has_changed().unwrap());

        store.set_ordering(OrderingSettings {
            sort_key: SortKey::FileSize,
            direction: SortDirection::Descending,
        });
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.tag.selected_tags, ["cat".to_string()]);
        assert_eq!(snapshot.ordering.sort_key, SortKey::FileSize);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn date_and_type_setters_notify_with_full_tuple() {
        let store = FilterStore::new();
        let mut rx = store.watch();
        rx.mark_unchanged();

        store.set_date_filter(DateFilterSettings {
            mode: DateFilterMode::Modified,
            range: DateFilterRange::Last30Days,
        });
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        store.set_type_filter(TypeFilterSettings {
            shown_types: vec![ContentType::Video],
        });
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.date.range, DateFilterRange::Last30Days);
        assert_eq!(snapshot.types.shown_types, [ContentType::Video]);
    }
}
