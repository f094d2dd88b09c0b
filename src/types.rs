//! Core data model types for the trip analytics pipeline.
//!
//! Ingestion produces a [`Dataset`]: an ordered collection of typed
//! [`TripRecord`]s for one [`City`], plus an [`OptionalColumns`] descriptor
//! recording which demographic columns that city's source schema carries.
//! Every later stage (filtering, statistics, paging) consumes datasets
//! read-only and produces new views; nothing is mutated after construction.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// The cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All supported cities, in canonical order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse the lower-cased city key used by the upstream filter-selection
    /// contract (`"chicago"`, `"new york city"`, `"washington"`).
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "chicago" => Some(Self::Chicago),
            "new york city" => Some(Self::NewYorkCity),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }

    /// The lower-cased key form of this city.
    pub fn key(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        })
    }
}

/// Month half of a [`FilterSpec`]: either no month predicate, or one of the
/// six months the published datasets span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    /// Parse the lower-cased month choice from the upstream contract
    /// (`"all"`, `"january"` .. `"june"`).
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "all" => Some(Self::All),
            "january" => Some(Self::January),
            "february" => Some(Self::February),
            "march" => Some(Self::March),
            "april" => Some(Self::April),
            "may" => Some(Self::May),
            "june" => Some(Self::June),
            _ => None,
        }
    }

    /// 1-based calendar month this filter selects (`January` = 1), or `None`
    /// when no month predicate applies.
    pub fn month_number(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::January => Some(1),
            Self::February => Some(2),
            Self::March => Some(3),
            Self::April => Some(4),
            Self::May => Some(5),
            Self::June => Some(6),
        }
    }
}

/// Day half of a [`FilterSpec`]: either no day predicate, or a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayFilter {
    /// Parse the lower-cased day choice from the upstream contract
    /// (`"all"`, `"monday"` .. `"sunday"`).
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "all" => Some(Self::All),
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// The weekday this filter selects, or `None` when no day predicate
    /// applies.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            Self::All => None,
            Self::Monday => Some(Weekday::Mon),
            Self::Tuesday => Some(Weekday::Tue),
            Self::Wednesday => Some(Weekday::Wed),
            Self::Thursday => Some(Weekday::Thu),
            Self::Friday => Some(Weekday::Fri),
            Self::Saturday => Some(Weekday::Sat),
            Self::Sunday => Some(Weekday::Sun),
        }
    }
}

/// Immutable (month, day) filter pair.
///
/// Both halves are pre-validated enums by construction; the filter engine
/// applies them without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    /// Create a filter spec.
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    /// A spec that keeps every record.
    pub fn unfiltered() -> Self {
        Self::new(MonthFilter::All, DayFilter::All)
    }
}

/// The demographic columns that exist only in some cities' source schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalColumn {
    Gender,
    BirthYear,
}

impl OptionalColumn {
    /// Field name used in results and messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::BirthYear => "birth_year",
        }
    }

    /// Header cell naming this column in the source CSV.
    pub fn header(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::BirthYear => "Birth Year",
        }
    }
}

/// Schema descriptor: which optional columns a dataset's source carries.
///
/// Computed once from the CSV header at load time. Callers branch on this
/// explicitly instead of attempting a computation and catching its failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OptionalColumns {
    pub gender: bool,
    pub birth_year: bool,
}

impl OptionalColumns {
    /// Whether `column` exists in this dataset's source schema.
    pub fn has(self, column: OptionalColumn) -> bool {
        match column {
            OptionalColumn::Gender => self.gender,
            OptionalColumn::BirthYear => self.birth_year,
        }
    }
}

/// One bikeshare trip.
///
/// `month` and `day_of_week` are derived from `start_time` at construction;
/// the start hour is derived on demand via [`TripRecord::start_hour`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Present in every source schema but unused by the analyzers.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in whole seconds.
    pub trip_duration: i64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// `None` when the cell is empty or the city has no `Gender` column.
    pub gender: Option<String>,
    /// `None` when the cell is empty or the city has no `Birth Year` column.
    pub birth_year: Option<i32>,
    /// 1-based calendar month of `start_time`.
    pub month: u32,
    pub day_of_week: Weekday,
}

impl TripRecord {
    /// Build a record from its required fields, deriving the calendar fields
    /// from `start_time`. Optional demographics default to `None`.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        trip_duration: i64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            start_time,
            end_time,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
        }
    }

    /// Hour of day (0-23) the trip started.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Ordered, in-memory collection of trips for one city.
///
/// Record order is insertion order from the source file and is preserved by
/// every stage; the pager depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    /// Which optional columns the source schema carried.
    pub columns: OptionalColumns,
    pub records: Vec<TripRecord>,
}

impl Dataset {
    /// Create a dataset from its parts.
    pub fn new(city: City, columns: OptionalColumns, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            columns,
            records,
        }
    }

    /// Number of records in the dataset.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset keeps the original city, schema descriptor, and
    /// relative record order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self {
            city: self.city,
            columns: self.columns,
            records,
        }
    }
}
