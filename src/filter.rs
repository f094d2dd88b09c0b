//! Month/day filtering of a [`crate::types::Dataset`].

use crate::types::{Dataset, FilterSpec};

/// Returns a new [`Dataset`] keeping only records that match `spec`.
///
/// The month and day predicates are conjunctive; `All` on either side leaves
/// that dimension unfiltered. Record order is preserved (stable filter), and
/// an empty result is valid — this function raises no errors.
pub fn apply(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let month = spec.month.month_number();
    let day = spec.day.weekday();
    dataset.filter_records(|record| {
        month.is_none_or(|m| record.month == m) && day.is_none_or(|d| record.day_of_week == d)
    })
}
