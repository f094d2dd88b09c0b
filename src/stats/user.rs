//! User demographics.

use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{Dataset, OptionalColumn};

use super::{mode_by, value_counts};

/// A statistic over an optional column that may be structurally unavailable.
///
/// `Unavailable` means the city's source schema lacks the column (or carries
/// no usable values for it). It is an informational result, deliberately not
/// an error: callers and tests branch on it directly instead of catching a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ColumnStat<T> {
    Available { value: T },
    Unavailable { column: OptionalColumn },
}

impl<T> ColumnStat<T> {
    /// Whether a value was computed.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The computed value, if available.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Available { value } => Some(value),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Counts per user type, in descending count order.
    pub user_types: Vec<(String, u64)>,
    /// Counts per gender, when the city's schema has the column.
    pub genders: ColumnStat<Vec<(String, u64)>>,
    /// Birth year summary, when the city's schema has the column.
    pub birth_years: ColumnStat<BirthYearStats>,
}

/// Compute user type, gender, and birth year breakdowns.
///
/// Availability of the optional columns is read once from the dataset's
/// schema descriptor, never discovered by attempting a computation and
/// catching its failure. Empty cells inside an available column are skipped
/// by the counts. Fails with [`AnalyticsError::EmptyDataset`] over zero
/// records.
pub fn user_stats(dataset: &Dataset) -> AnalyticsResult<UserStats> {
    if dataset.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    let user_types = value_counts(&dataset.records, |r| Some(r.user_type.as_str()));

    let genders = if dataset.columns.has(OptionalColumn::Gender) {
        ColumnStat::Available {
            value: value_counts(&dataset.records, |r| r.gender.as_deref()),
        }
    } else {
        ColumnStat::Unavailable {
            column: OptionalColumn::Gender,
        }
    };

    // An available column whose cells are all empty has no defined
    // min/max/mode and degrades to Unavailable.
    let birth_years = if dataset.columns.has(OptionalColumn::BirthYear) {
        match birth_year_summary(dataset) {
            Some(value) => ColumnStat::Available { value },
            None => ColumnStat::Unavailable {
                column: OptionalColumn::BirthYear,
            },
        }
    } else {
        ColumnStat::Unavailable {
            column: OptionalColumn::BirthYear,
        }
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_summary(dataset: &Dataset) -> Option<BirthYearStats> {
    let years: Vec<i32> = dataset.records.iter().filter_map(|r| r.birth_year).collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let most_common = mode_by(&years, |y| *y)?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{BirthYearStats, ColumnStat, user_stats};
    use crate::error::AnalyticsError;
    use crate::types::{City, Dataset, OptionalColumn, OptionalColumns, TripRecord};

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, 6, 15)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        let mut record = TripRecord::new(start, None, 600, "A", "B", user_type);
        record.gender = gender.map(str::to_owned);
        record.birth_year = birth_year;
        record
    }

    fn full_schema() -> OptionalColumns {
        OptionalColumns {
            gender: true,
            birth_year: true,
        }
    }

    #[test]
    fn counts_user_types_in_descending_order() {
        let records = vec![
            trip("Customer", None, None),
            trip("Subscriber", None, None),
            trip("Subscriber", None, None),
        ];
        let ds = Dataset::new(City::Washington, OptionalColumns::default(), records);
        let stats = user_stats(&ds).unwrap();
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn demographics_available_when_schema_has_them() {
        let records = vec![
            trip("Subscriber", Some("Male"), Some(1989)),
            trip("Subscriber", Some("Female"), Some(1992)),
            trip("Customer", Some("Female"), Some(1989)),
        ];
        let ds = Dataset::new(City::Chicago, full_schema(), records);
        let stats = user_stats(&ds).unwrap();

        assert_eq!(
            stats.genders.value(),
            Some(&vec![("Female".to_string(), 2), ("Male".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            ColumnStat::Available {
                value: BirthYearStats {
                    earliest: 1989,
                    most_recent: 1992,
                    most_common: 1989,
                }
            }
        );
    }

    #[test]
    fn demographics_unavailable_when_schema_lacks_them() {
        // Washington exports carry neither Gender nor Birth Year.
        let records = vec![trip("Subscriber", None, None)];
        let ds = Dataset::new(City::Washington, OptionalColumns::default(), records);
        let stats = user_stats(&ds).unwrap();

        assert_eq!(
            stats.genders,
            ColumnStat::Unavailable {
                column: OptionalColumn::Gender
            }
        );
        assert_eq!(
            stats.birth_years,
            ColumnStat::Unavailable {
                column: OptionalColumn::BirthYear
            }
        );
    }

    #[test]
    fn empty_cells_in_available_columns_are_skipped() {
        let records = vec![
            trip("Subscriber", Some("Male"), Some(1975)),
            trip("Subscriber", None, None),
        ];
        let ds = Dataset::new(City::NewYorkCity, full_schema(), records);
        let stats = user_stats(&ds).unwrap();

        assert_eq!(stats.genders.value(), Some(&vec![("Male".to_string(), 1)]));
        assert_eq!(
            stats.birth_years.value(),
            Some(&BirthYearStats {
                earliest: 1975,
                most_recent: 1975,
                most_common: 1975,
            })
        );
    }

    #[test]
    fn all_empty_birth_year_column_degrades_to_unavailable() {
        let records = vec![trip("Subscriber", Some("Female"), None)];
        let ds = Dataset::new(City::NewYorkCity, full_schema(), records);
        let stats = user_stats(&ds).unwrap();
        assert!(!stats.birth_years.is_available());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let ds = Dataset::new(City::Chicago, full_schema(), vec![]);
        assert!(matches!(
            user_stats(&ds),
            Err(AnalyticsError::EmptyDataset)
        ));
    }
}
