//! Total and mean trip duration.

use std::fmt;

use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::Dataset;

/// Whole seconds decomposed into hours/minutes/seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HmsBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl HmsBreakdown {
    /// Decompose `total` seconds by repeated floor-division by 60
    /// (seconds -> minutes -> hours).
    pub fn from_seconds(total: u64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for HmsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Travel time totals for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    /// Sum of all trip durations, in seconds.
    pub total_seconds: u64,
    /// Mean trip duration rounded to the nearest whole second.
    pub mean_seconds: u64,
    /// `total_seconds` decomposed into hours/minutes/seconds.
    pub total: HmsBreakdown,
    /// `mean_seconds` decomposed into hours/minutes/seconds.
    pub mean: HmsBreakdown,
}

/// Compute total and mean travel time.
///
/// The mean is rounded to the nearest whole second before decomposition.
/// Fails with [`AnalyticsError::EmptyDataset`] over zero records (the mean is
/// undefined there; the sum-of-zero-records case is disallowed with it for
/// consistency).
pub fn duration_stats(dataset: &Dataset) -> AnalyticsResult<DurationStats> {
    if dataset.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    // Durations are validated non-negative at load time.
    let total_seconds: u64 = dataset
        .records
        .iter()
        .map(|r| r.trip_duration as u64)
        .sum();
    let mean_seconds = (total_seconds as f64 / dataset.record_count() as f64).round() as u64;

    Ok(DurationStats {
        total_seconds,
        mean_seconds,
        total: HmsBreakdown::from_seconds(total_seconds),
        mean: HmsBreakdown::from_seconds(mean_seconds),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{HmsBreakdown, duration_stats};
    use crate::error::AnalyticsError;
    use crate::types::{City, Dataset, OptionalColumns, TripRecord};

    fn dataset(durations: &[i64]) -> Dataset {
        let start = NaiveDate::from_ymd_opt(2017, 5, 20)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let records = durations
            .iter()
            .map(|&secs| TripRecord::new(start, None, secs, "A", "B", "Subscriber"))
            .collect();
        Dataset::new(City::Chicago, OptionalColumns::default(), records)
    }

    #[test]
    fn worked_example_from_three_trips() {
        let stats = duration_stats(&dataset(&[130, 90, 65])).unwrap();

        assert_eq!(stats.total_seconds, 285);
        assert_eq!(
            stats.total,
            HmsBreakdown {
                hours: 0,
                minutes: 4,
                seconds: 45
            }
        );

        assert_eq!(stats.mean_seconds, 95);
        assert_eq!(
            stats.mean,
            HmsBreakdown {
                hours: 0,
                minutes: 1,
                seconds: 35
            }
        );
    }

    #[test]
    fn mean_rounds_to_nearest_second() {
        // 100 + 101 = 201; mean 100.5 rounds to 101.
        let stats = duration_stats(&dataset(&[100, 101])).unwrap();
        assert_eq!(stats.mean_seconds, 101);
    }

    #[test]
    fn breakdown_carries_hours() {
        let stats = duration_stats(&dataset(&[3_600 + 61])).unwrap();
        assert_eq!(
            stats.total,
            HmsBreakdown {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(stats.total.to_string(), "1h 1m 1s");
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(
            duration_stats(&dataset(&[])),
            Err(AnalyticsError::EmptyDataset)
        ));
    }
}
