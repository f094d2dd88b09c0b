//! CSV ingestion of trip records.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{City, Dataset, OptionalColumn, OptionalColumns, TripRecord};

/// Washington exports suffix fractional seconds (`2017-01-01 00:28:19.0`);
/// `%.f` consumes them when present and nothing otherwise.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Ingest a city's CSV trip file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all required trip columns (order can differ).
/// - `Gender` / `Birth Year` are probed once from the header into the
///   dataset's [`OptionalColumns`] descriptor.
/// - Any unparseable required cell fails the whole load; rows are never
///   silently skipped.
pub fn ingest_trips_from_path(path: impl AsRef<Path>, city: City) -> AnalyticsResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_trips_from_reader(&mut rdr, city)
}

/// Ingest trip data from an existing CSV reader.
pub fn ingest_trips_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    city: City,
) -> AnalyticsResult<Dataset> {
    let headers = rdr.headers()?.clone();

    // Map required columns -> CSV column indexes (allows re-ordered columns).
    let start_time_idx = required_column(&headers, "Start Time")?;
    let end_time_idx = required_column(&headers, "End Time")?;
    let duration_idx = required_column(&headers, "Trip Duration")?;
    let start_station_idx = required_column(&headers, "Start Station")?;
    let end_station_idx = required_column(&headers, "End Station")?;
    let user_type_idx = required_column(&headers, "User Type")?;

    // Optional demographics are a schema property, resolved once up front.
    let gender_idx = headers
        .iter()
        .position(|h| h == OptionalColumn::Gender.header());
    let birth_year_idx = headers
        .iter()
        .position(|h| h == OptionalColumn::BirthYear.header());
    let columns = OptionalColumns {
        gender: gender_idx.is_some(),
        birth_year: birth_year_idx.is_some(),
    };

    let mut records: Vec<TripRecord> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let start_time =
            parse_timestamp(user_row, "Start Time", record.get(start_time_idx).unwrap_or(""))?;
        let end_raw = record.get(end_time_idx).unwrap_or("").trim();
        let end_time = if end_raw.is_empty() {
            None
        } else {
            Some(parse_timestamp(user_row, "End Time", end_raw)?)
        };
        let trip_duration =
            parse_duration(user_row, record.get(duration_idx).unwrap_or(""))?;
        let start_station =
            parse_required_text(user_row, "Start Station", record.get(start_station_idx).unwrap_or(""))?;
        let end_station =
            parse_required_text(user_row, "End Station", record.get(end_station_idx).unwrap_or(""))?;
        let user_type =
            parse_required_text(user_row, "User Type", record.get(user_type_idx).unwrap_or(""))?;

        let mut trip = TripRecord::new(
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
        );
        if let Some(idx) = gender_idx {
            let raw = record.get(idx).unwrap_or("").trim();
            if !raw.is_empty() {
                trip.gender = Some(raw.to_owned());
            }
        }
        if let Some(idx) = birth_year_idx {
            trip.birth_year = parse_birth_year(user_row, record.get(idx).unwrap_or(""))?;
        }
        records.push(trip);
    }

    Ok(Dataset::new(city, columns, records))
}

fn required_column(headers: &csv::StringRecord, name: &str) -> AnalyticsResult<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        AnalyticsError::SchemaMismatch {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        }
    })
}

fn parse_timestamp(row: usize, column: &str, raw: &str) -> AnalyticsResult<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyticsError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "timestamp is empty".to_owned(),
        });
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|e| {
        AnalyticsError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        }
    })
}

fn parse_duration(row: usize, raw: &str) -> AnalyticsResult<i64> {
    let trimmed = raw.trim();
    // Some exports store whole-second durations as floats ("1673.0").
    let value = match trimmed.parse::<i64>() {
        Ok(v) => v,
        Err(_) => match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => v.round() as i64,
            _ => {
                return Err(AnalyticsError::ParseError {
                    row,
                    column: "Trip Duration".to_owned(),
                    raw: raw.to_owned(),
                    message: "expected seconds as an integer or whole-valued float".to_owned(),
                });
            }
        },
    };
    if value < 0 {
        return Err(AnalyticsError::ParseError {
            row,
            column: "Trip Duration".to_owned(),
            raw: raw.to_owned(),
            message: "duration must be non-negative".to_owned(),
        });
    }
    Ok(value)
}

fn parse_required_text(row: usize, column: &str, raw: &str) -> AnalyticsResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyticsError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "value is empty".to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_birth_year(row: usize, raw: &str) -> AnalyticsResult<Option<i32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // Exports store years as floats ("1992.0").
    let value = match trimmed.parse::<i32>() {
        Ok(v) => v,
        Err(_) => match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => v.round() as i32,
            _ => {
                return Err(AnalyticsError::ParseError {
                    row,
                    column: "Birth Year".to_owned(),
                    raw: raw.to_owned(),
                    message: "expected a year as an integer or whole-valued float".to_owned(),
                });
            }
        },
    };
    Ok(Some(value))
}
