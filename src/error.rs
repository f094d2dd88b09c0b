use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type returned by the loading and statistics stages.
///
/// This is a single error enum shared across the pipeline. Note that an
/// optional column being absent from a city's schema is *not* an error; see
/// [`crate::stats::ColumnStat`].
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Underlying I/O error (e.g. dataset file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV transport error (malformed records, unbalanced quoting, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The source file does not carry the required trip columns.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into the value its column requires.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// An analyzer was invoked over zero records; modes and means are
    /// undefined there, so the condition is surfaced instead of a degenerate
    /// result. Recoverable at the session level by choosing new filters.
    #[error("no trips match the selected filters")]
    EmptyDataset,
}
