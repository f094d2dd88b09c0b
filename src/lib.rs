//! `bikeshare-analytics` is a small library for exploring US bikeshare trip
//! records: it ingests a city's CSV export into an in-memory
//! [`types::Dataset`], filters it by month and day of week, computes
//! descriptive statistics, and pages through raw records.
//!
//! The loading entrypoint is [`ingestion::load_city`], which resolves a
//! [`types::City`] to its data file through an injected
//! [`ingestion::CityData`] mapping.
//!
//! ## Pipeline shape
//!
//! Each stage consumes its input read-only and produces a new view:
//!
//! 1. **Loader** ([`ingestion`]): CSV -> [`types::Dataset`], deriving each
//!    record's month and day of week from its start timestamp, and probing
//!    once which optional demographic columns the city's schema carries.
//! 2. **Filter engine** ([`filter`]): applies the month/day predicates of a
//!    pre-validated [`types::FilterSpec`]; stable order, never fails.
//! 3. **Statistics engine** ([`stats`]): four independent analyzers (time,
//!    station, duration, user); each fails with
//!    [`AnalyticsError::EmptyDataset`] over zero records, and optional
//!    columns are reported structurally via [`stats::ColumnStat`].
//! 4. **Pager** ([`pager`]): cursor-based windows of raw records.
//!
//! ## Quick example: load a city
//!
//! ```no_run
//! use bikeshare_analytics::ingestion::{CityData, LoadOptions, load_city};
//! use bikeshare_analytics::types::City;
//!
//! # fn main() -> Result<(), bikeshare_analytics::AnalyticsError> {
//! let data = CityData::standard("data");
//! let ds = load_city(City::Chicago, &data, &LoadOptions::default())?;
//! println!("trips={}", ds.record_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Filter and analyze
//!
//! ```rust
//! use bikeshare_analytics::filter;
//! use bikeshare_analytics::stats::{duration_stats, time_stats};
//! use bikeshare_analytics::types::{
//!     City, Dataset, DayFilter, FilterSpec, MonthFilter, OptionalColumns, TripRecord,
//! };
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), bikeshare_analytics::AnalyticsError> {
//! let start = |d: u32, h: u32| {
//!     NaiveDate::from_ymd_opt(2017, 3, d)
//!         .unwrap()
//!         .and_hms_opt(h, 0, 0)
//!         .unwrap()
//! };
//! let ds = Dataset::new(
//!     City::Chicago,
//!     OptionalColumns::default(),
//!     vec![
//!         TripRecord::new(start(6, 8), None, 130, "Clark & Lake", "Canal & Adams", "Subscriber"),
//!         TripRecord::new(start(6, 8), None, 90, "Clark & Lake", "State & Harrison", "Customer"),
//!         TripRecord::new(start(7, 17), None, 65, "Canal & Adams", "Clark & Lake", "Subscriber"),
//!     ],
//! );
//!
//! let march = filter::apply(&ds, &FilterSpec::new(MonthFilter::March, DayFilter::All));
//!
//! let time = time_stats(&march)?;
//! assert_eq!(time.month, "March");
//! assert_eq!(time.hour, 8);
//!
//! let duration = duration_stats(&march)?;
//! assert_eq!(duration.total_seconds, 285);
//! assert_eq!(duration.mean.to_string(), "0h 1m 35s");
//! # Ok(())
//! # }
//! ```
//!
//! ## Page through raw records
//!
//! ```rust
//! use bikeshare_analytics::pager::RecordPager;
//! use bikeshare_analytics::types::{City, Dataset, OptionalColumns, TripRecord};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2017, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//! let records = (0..12)
//!     .map(|i| TripRecord::new(start, None, 60, format!("start-{i}"), "end", "Subscriber"))
//!     .collect();
//! let ds = Dataset::new(City::Washington, OptionalColumns::default(), records);
//!
//! let mut pager = RecordPager::new(&ds);
//! assert_eq!(pager.peek().len(), 5);
//! pager.advance(10);
//! assert_eq!(pager.remaining(), 2);
//! assert!(!pager.is_exhausted());
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: city data mapping, CSV loading, load observability
//! - [`types`]: cities, filters, trip records, datasets
//! - [`filter`]: month/day filter engine
//! - [`stats`]: the four statistics analyzers
//! - [`pager`]: raw record paging
//! - [`error`]: error types used across the pipeline

pub mod error;
pub mod filter;
pub mod ingestion;
pub mod pager;
pub mod stats;
pub mod types;

pub use error::{AnalyticsError, AnalyticsResult};
