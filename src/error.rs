use thiserror::Error;

/// Convenience result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type returned by loading, configuration and dispatch.
///
/// Aggregation functions never return errors themselves; anything that fails is raised while
/// loading the dataset or while interpreting a selection key.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Underlying I/O error (e.g. dataset file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON config or chart payload error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset is missing a required column or holds a value outside its categorical domain.
    #[error("schema violation: {message}")]
    SchemaViolation { message: String },

    /// A numeric value could not be parsed.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Invalid configuration value.
    #[error("config error: {message}")]
    Config { message: String },

    /// A selection key outside the registered chart catalog.
    #[error("invalid selection: '{key}' is not a registered chart key")]
    InvalidSelection { key: String },

    /// The process-wide dataset was read before it was loaded.
    #[error("dataset not loaded")]
    NotLoaded,

    /// The process-wide dataset was initialized twice.
    #[error("dataset already loaded")]
    AlreadyLoaded,
}

impl DashboardError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            message: message.into(),
        }
    }
}
