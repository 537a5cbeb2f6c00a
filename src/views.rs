//! Displayed-set computation.
//!
//! The filter predicate and sort comparator the presentation layer applies
//! to the metadata set. Consumes the exact four-tuple published by the
//! Filter/Ordering store; recompute the whole view from the full tuple on
//! every composite signal firing.

use crate::model::Metadata;
use crate::store::{
    DateFilterMode, DateFilterRange, DateFilterSettings, FilterState, OrderingSettings,
    SortDirection, SortKey,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;

/// Keep the entries passing all three filters: tag containment, content-type
/// membership, and date-bucket membership relative to `now`.
pub fn apply_filters(
    items: &[Metadata],
    state: &FilterState,
    now: DateTime<Utc>,
) -> Vec<Metadata> {
    items
        .iter()
        .filter(|m| {
            matches_tags(m, &state.tag.selected_tags)
                && state.types.shown_types.contains(&m.content_type)
                && matches_date(m, &state.date, now)
        })
        .cloned()
        .collect()
}

fn matches_tags(item: &Metadata, required: &[String]) -> bool {
    required
        .iter()
        .all(|tag| item.tag_slice().iter().any(|t| t == tag))
}

fn matches_date(item: &Metadata, date: &DateFilterSettings, now: DateTime<Utc>) -> bool {
    let timestamp = match date.mode {
        DateFilterMode::Added => item.timestamp_created,
        DateFilterMode::Modified => item.timestamp_modified,
    };
    let Some(when) = Utc.timestamp_opt(timestamp, 0).single() else {
        return false;
    };
    match date.range {
        DateFilterRange::All => true,
        DateFilterRange::Today => when.date_naive() == now.date_naive(),
        DateFilterRange::Yesterday => now
            .date_naive()
            .pred_opt()
            .map_or(false, |yesterday| when.date_naive() == yesterday),
        DateFilterRange::LastWeek => within_days(when, now, 7),
        DateFilterRange::Last30Days => within_days(when, now, 30),
        DateFilterRange::Last90Days => within_days(when, now, 90),
        DateFilterRange::Last180Days => within_days(when, now, 180),
        DateFilterRange::Last365Days => within_days(when, now, 365),
    }
}

fn within_days(when: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    when <= now && when >= now - Duration::days(days)
}

/// Order the entries per the ordering settings. `Relevance` keeps the
/// incoming (backend) order untouched. File size is not a metadata field,
/// so the caller supplies a hash-to-bytes map collected via the gateway;
/// entries without a known size sort as zero.
pub fn sort_metadata(
    mut items: Vec<Metadata>,
    ordering: &OrderingSettings,
    file_sizes: &HashMap<String, u64>,
) -> Vec<Metadata> {
    if ordering.direction == SortDirection::Relevance {
        return items;
    }
    let key = ordering.sort_key;
    items.sort_by(|a, b| {
        let cmp = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Extension => extension_of(a).cmp(&extension_of(b)),
            SortKey::FileSize => size_of(a, file_sizes).cmp(&size_of(b, file_sizes)),
            SortKey::DateAdded => a.timestamp_created.cmp(&b.timestamp_created),
            SortKey::DateModified => a.timestamp_modified.cmp(&b.timestamp_modified),
        };
        match ordering.direction {
            SortDirection::Descending => cmp.reverse(),
            _ => cmp,
        }
    });
    items
}

fn extension_of(item: &Metadata) -> String {
    item.extension.as_deref().unwrap_or_default().to_lowercase()
}

fn size_of(item: &Metadata, file_sizes: &HashMap<String, u64>) -> u64 {
    file_sizes.get(&item.hash).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentType;
    use crate::store::{TagFilterSettings, TypeFilterSettings};

    fn item(hash: &str, name: &str) -> Metadata {
        Metadata {
            hash: hash.to_string(),
            name: name.to_string(),
            ..Metadata::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn tag_filter_requires_every_selected_tag() {
        let mut tagged = item("a", "a.png");
        tagged.tags = Some(vec!["cat".to_string(), "pet".to_string()]);
        let untagged = item("b", "b.png");

        let mut state = FilterState::default();
        state.tag = TagFilterSettings {
            selected_tags: vec!["cat".to_string(), "pet".to_string()],
        };

        let shown = apply_filters(&[tagged.clone(), untagged], &state, fixed_now());
        assert_eq!(shown, vec![tagged]);
    }

    #[test]
    fn type_filter_keeps_only_shown_types() {
        let mut video = item("v", "clip.mp4");
        video.content_type = ContentType::Video;
        let image = item("i", "photo.png");

        let mut state = FilterState::default();
        state.types = TypeFilterSettings {
            shown_types: vec![ContentType::Video],
        };

        let shown = apply_filters(&[video.clone(), image], &state, fixed_now());
        assert_eq!(shown, vec![video]);
    }

    #[test]
    fn date_buckets_are_relative_to_now() {
        let now = fixed_now();
        let mut today = item("t", "t.png");
        today.timestamp_created = (now - Duration::hours(2)).timestamp();
        let mut yesterday = item("y", "y.png");
        yesterday.timestamp_created = (now - Duration::days(1)).timestamp();
        let mut last_month = item("m", "m.png");
        last_month.timestamp_created = (now - Duration::days(20)).timestamp();
        let items = [today.clone(), yesterday.clone(), last_month.clone()];

        let mut state = FilterState::default();
        state.date.range = DateFilterRange::Today;
        assert_eq!(apply_filters(&items, &state, now), vec![today.clone()]);

        state.date.range = DateFilterRange::Yesterday;
        assert_eq!(apply_filters(&items, &state, now), vec![yesterday.clone()]);

        state.date.range = DateFilterRange::LastWeek;
        assert_eq!(
            apply_filters(&items, &state, now),
            vec![today.clone(), yesterday.clone()]
        );

        state.date.range = DateFilterRange::Last30Days;
        assert_eq!(apply_filters(&items, &state, now).len(), 3);

        state.date.range = DateFilterRange::All;
        assert_eq!(apply_filters(&items, &state, now).len(), 3);
    }

    #[test]
    fn modified_mode_inspects_the_other_timestamp() {
        let now = fixed_now();
        let mut entry = item("e", "e.png");
        entry.timestamp_created = (now - Duration::days(100)).timestamp();
        entry.timestamp_modified = (now - Duration::hours(1)).timestamp();

        let mut state = FilterState::default();
        state.date.range = DateFilterRange::LastWeek;
        assert!(apply_filters(&[entry.clone()], &state, now).is_empty());

        state.date.mode = DateFilterMode::Modified;
        assert_eq!(apply_filters(&[entry.clone()], &state, now), vec![entry]);
    }

    #[test]
    fn relevance_direction_keeps_backend_order() {
        let items = vec![item("b", "beta"), item("a", "alpha")];
        let ordering = OrderingSettings::default();
        assert_eq!(
            sort_metadata(items.clone(), &ordering, &HashMap::new()),
            items
        );
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let items = vec![item("1", "Zebra"), item("2", "apple"), item("3", "Mango")];
        let ordering = OrderingSettings {
            sort_key: SortKey::Name,
            direction: SortDirection::Ascending,
        };
        let sorted = sort_metadata(items, &ordering, &HashMap::new());
        let names: Vec<&str> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn file_size_sort_uses_supplied_sizes() {
        let items = vec![item("big", "b"), item("small", "s"), item("unknown", "u")];
        let sizes = HashMap::from([("big".to_string(), 5000u64), ("small".to_string(), 10u64)]);
        let ordering = OrderingSettings {
            sort_key: SortKey::FileSize,
            direction: SortDirection::Descending,
        };
        let sorted = sort_metadata(items, &ordering, &sizes);
        let hashes: Vec<&str> = sorted.iter().map(|m| m.hash.as_str()).collect();
        assert_eq!(hashes, ["big", "small", "unknown"]);
    }

    #[test]
    fn date_sort_orders_by_timestamp() {
        let mut older = item("o", "o");
        older.timestamp_created = 100;
        let mut newer = item("n", "n");
        newer.timestamp_created = 200;
        let ordering = OrderingSettings {
            sort_key: SortKey::DateAdded,
            direction: SortDirection::Ascending,
        };
        let sorted = sort_metadata(vec![newer.clone(), older.clone()], &ordering, &HashMap::new());
        assert_eq!(sorted, vec![older, newer]);
    }
}
