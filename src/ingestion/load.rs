//! City dataset loading.
//!
//! [`load_city`] is the loader entry point: it resolves the city's file
//! through an injected [`CityData`] mapping, ingests it, and (optionally)
//! reports the outcome to a [`LoadObserver`]. It applies no filters; the
//! filter engine is a separate stage.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{City, Dataset};

use super::csv::ingest_trips_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Immutable mapping from city to its trip data file.
///
/// Built once (typically at startup) and injected into [`load_city`]; there
/// is no ambient global table.
#[derive(Debug, Clone)]
pub struct CityData {
    paths: HashMap<City, PathBuf>,
}

impl CityData {
    /// Map every city to its standard filename under `root`:
    /// `chicago.csv`, `new_york_city.csv`, `washington.csv`.
    pub fn standard(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let paths = City::ALL
            .iter()
            .map(|&city| (city, root.join(standard_file_name(city))))
            .collect();
        Self { paths }
    }

    /// Override one city's path, keeping the rest of the mapping.
    pub fn with_path(mut self, city: City, path: impl AsRef<Path>) -> Self {
        self.paths.insert(city, path.as_ref().to_path_buf());
        self
    }

    /// Resolved path for `city`.
    pub fn path_for(&self, city: City) -> &Path {
        // Construction starts from `standard`, so the mapping is total.
        &self.paths[&city]
    }
}

fn standard_file_name(city: City) -> &'static str {
    match city {
        City::Chicago => "chicago.csv",
        City::NewYorkCity => "new_york_city.csv",
        City::Washington => "washington.csv",
    }
}

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a city's trip data into an in-memory [`Dataset`].
///
/// Reads all records, parses timestamps, and derives each record's calendar
/// fields. Fails on the first unparseable required cell (no row skipping).
/// Repeated calls for the same city are idempotent.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use bikeshare_analytics::ingestion::{load_city, CityData, LoadOptions};
/// use bikeshare_analytics::types::City;
///
/// # fn main() -> Result<(), bikeshare_analytics::AnalyticsError> {
/// let data = CityData::standard("data");
/// let ds = load_city(City::Chicago, &data, &LoadOptions::default())?;
/// println!("trips={}", ds.record_count());
/// # Ok(())
/// # }
/// ```
pub fn load_city(city: City, data: &CityData, options: &LoadOptions) -> AnalyticsResult<Dataset> {
    let path = data.path_for(city);
    let ctx = LoadContext {
        city,
        path: path.to_path_buf(),
    };

    let result = ingest_trips_from_path(path, city);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: ds.record_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &AnalyticsError) -> LoadSeverity {
    match e {
        AnalyticsError::Io(_) => LoadSeverity::Critical,
        AnalyticsError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        AnalyticsError::SchemaMismatch { .. } => LoadSeverity::Error,
        AnalyticsError::ParseError { .. } => LoadSeverity::Error,
        // Not produced by loading; classified for completeness.
        AnalyticsError::EmptyDataset => LoadSeverity::Error,
    }
}
