//! Most popular stations and trips.

use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::Dataset;

use super::mode_by;

/// Most popular stations and station pairing for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    /// Most frequent start station.
    pub start_station: String,
    /// Most frequent end station.
    pub end_station: String,
    /// Most frequent trip, as the combined `"{start} to {end}"` label.
    pub trip: String,
}

/// Compute the most frequent start station, end station, and station pair.
///
/// The pair mode is taken over the combined label computed per record, not as
/// a joint mode over the two station fields. Fails with
/// [`AnalyticsError::EmptyDataset`] over zero records.
pub fn station_stats(dataset: &Dataset) -> AnalyticsResult<StationStats> {
    let start_station = mode_by(&dataset.records, |r| r.start_station.clone())
        .ok_or(AnalyticsError::EmptyDataset)?;
    let end_station = mode_by(&dataset.records, |r| r.end_station.clone())
        .ok_or(AnalyticsError::EmptyDataset)?;
    let trip = mode_by(&dataset.records, |r| {
        format!("{} to {}", r.start_station, r.end_station)
    })
    .ok_or(AnalyticsError::EmptyDataset)?;

    Ok(StationStats {
        start_station,
        end_station,
        trip,
    })
}
