//! Descriptive statistics over a filtered [`crate::types::Dataset`].
//!
//! Four independent analyzers, each a pure function of its input dataset:
//!
//! - [`time_stats()`]: most frequent month / day of week / start hour
//! - [`station_stats()`]: most popular start / end stations and trip
//! - [`duration_stats()`]: total and mean travel time
//! - [`user_stats()`]: user type, gender, and birth year breakdowns
//!
//! Every analyzer fails with [`crate::AnalyticsError::EmptyDataset`] over
//! zero records; the analyzers are otherwise independent, so one failing
//! never affects its siblings. Optional demographic columns are reported
//! structurally via [`ColumnStat`] rather than through errors.
//!
//! Every mode in this module breaks ties toward the value first encountered
//! in dataset order, so results are deterministic for a fixed input.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, HmsBreakdown, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYearStats, ColumnStat, UserStats, user_stats};

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent key produced by `key` over `items`.
///
/// Ties break toward the key whose first occurrence comes earliest in
/// iteration order. Returns `None` over zero items.
pub(crate) fn mode_by<T, K, F>(items: &[T], mut key: F) -> Option<K>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        let entry = counts.entry(key(item)).or_insert((0, idx));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_idx))| (count, std::cmp::Reverse(first_idx)))
        .map(|(k, _)| k)
}

/// Occurrence counts for the string keys produced by `key`, in descending
/// count order. `None` keys (missing cells) are skipped. Ties keep
/// first-occurrence order, so the output is deterministic.
pub(crate) fn value_counts<T, F>(items: &[T], mut key: F) -> Vec<(String, u64)>
where
    F: for<'a> FnMut(&'a T) -> Option<&'a str>,
{
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in items {
        let Some(k) = key(item) else { continue };
        match index.get(k) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(k.to_owned(), counts.len());
                counts.push((k.to_owned(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::{mode_by, value_counts};

    #[test]
    fn mode_by_picks_most_frequent() {
        let items = vec!["a", "b", "b", "c", "b"];
        assert_eq!(mode_by(&items, |s| *s), Some("b"));
    }

    #[test]
    fn mode_by_breaks_ties_toward_first_encountered() {
        let items = vec!["x", "y", "y", "x"];
        assert_eq!(mode_by(&items, |s| *s), Some("x"));

        let items = vec!["y", "x", "x", "y"];
        assert_eq!(mode_by(&items, |s| *s), Some("y"));
    }

    #[test]
    fn mode_by_returns_none_over_zero_items() {
        let items: Vec<&str> = vec![];
        assert_eq!(mode_by(&items, |s| *s), None);
    }

    #[test]
    fn value_counts_sorts_descending_with_stable_ties() {
        let items = vec![Some("b"), Some("a"), None, Some("a"), Some("c")];
        let counts = value_counts(&items, |s| *s);
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 1),
                ("c".to_string(), 1),
            ]
        );
    }
}
