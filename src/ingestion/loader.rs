//! Dataset loading with outcome reporting.
//!
//! [`ingest_from_path`] reads the athlete-events CSV into a [`crate::dataset::Dataset`] and, if
//! an [`super::observability::IngestionObserver`] is configured, reports success, failure and
//! alerts to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::error::DashboardResult;

use super::csv;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load the athlete-events CSV at `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use olympics_dashboard::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), olympics_dashboard::DashboardError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("Data/athlete_events.csv", &opts)?;
/// println!("records={}", ds.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> DashboardResult<Dataset> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    let result = csv::ingest_athletes_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(&ctx, IngestionStats { rows: ds.len() }),
            Err(e) => {
                let sev = IngestionSeverity::of(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Owned load request, e.g. for handing to a startup task.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Path to the dataset file.
    pub path: PathBuf,
    /// Options controlling loading.
    pub options: IngestionOptions,
}

impl IngestionRequest {
    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> DashboardResult<Dataset> {
        ingest_from_path(&self.path, &self.options)
    }
}
