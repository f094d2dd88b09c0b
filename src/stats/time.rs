//! Most frequent times of travel.

use chrono::Weekday;
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::Dataset;

use super::mode_by;

/// Most frequent travel times for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// English name of the most frequent month.
    pub month: String,
    /// English name of the most frequent day of week.
    pub day_of_week: String,
    /// Most frequent start hour (0-23).
    pub hour: u32,
}

/// Compute the most frequent month, day of week, and start hour.
///
/// Fails with [`AnalyticsError::EmptyDataset`] over zero records (a mode is
/// undefined there). Ties break toward the value first encountered in
/// dataset order.
pub fn time_stats(dataset: &Dataset) -> AnalyticsResult<TimeStats> {
    let month = mode_by(&dataset.records, |r| r.month).ok_or(AnalyticsError::EmptyDataset)?;
    let day = mode_by(&dataset.records, |r| r.day_of_week).ok_or(AnalyticsError::EmptyDataset)?;
    let hour = mode_by(&dataset.records, |r| r.start_hour()).ok_or(AnalyticsError::EmptyDataset)?;

    Ok(TimeStats {
        month: month_name(month).to_owned(),
        day_of_week: day_name(day).to_owned(),
        hour,
    })
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
