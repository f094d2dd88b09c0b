//! Loading city trip data into an in-memory [`crate::types::Dataset`].
//!
//! Most callers should use [`load_city`] (from [`load`]) which:
//!
//! - resolves the city's file through an injected [`CityData`] mapping
//! - ingests the CSV into a typed dataset, deriving calendar fields
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The CSV-level entry points are also available under [`csv`], including a
//! reader-based variant useful for ingesting from in-memory buffers.

pub mod csv;
pub mod load;
pub mod observability;

pub use load::{CityData, LoadOptions, load_city};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
