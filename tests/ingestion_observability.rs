use std::sync::{Arc, Mutex};

use olympics_dashboard::ingestion::{
    ingest_from_path, CompositeObserver, IngestionContext, IngestionObserver, IngestionOptions,
    IngestionRequest, IngestionSeverity, IngestionStats,
};
use olympics_dashboard::DashboardError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats.rows);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &DashboardError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &DashboardError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(obs: Arc<RecordingObserver>) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs),
        alert_at_or_above: IngestionSeverity::Critical,
    }
}

#[test]
fn observer_receives_success_with_row_count() {
    let obs = Arc::new(RecordingObserver::default());

    let ds = ingest_from_path("tests/fixtures/athlete_events.csv", &options(obs.clone())).unwrap();

    assert_eq!(ds.len(), 23);
    assert_eq!(obs.successes.lock().unwrap().clone(), vec![23]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let _ = ingest_from_path("tests/fixtures/does_not_exist.csv", &options(obs.clone())).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_schema_violation() {
    let obs = Arc::new(RecordingObserver::default());

    let err = ingest_from_path("tests/fixtures/missing_medal_column.csv", &options(obs.clone())).unwrap_err();

    assert!(matches!(err, DashboardError::SchemaViolation { .. }));
    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_schema_violation() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = IngestionOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: IngestionSeverity::Error,
    };

    let _ = ingest_from_path("tests/fixtures/missing_medal_column.csv", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![a.clone(), b.clone()]);
    let request = IngestionRequest {
        path: "tests/fixtures/does_not_exist.csv".into(),
        options: IngestionOptions {
            observer: Some(Arc::new(composite)),
            ..Default::default()
        },
    };

    let _ = request.run().unwrap_err();

    for obs in [a, b] {
        assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Critical]);
        assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Critical]);
    }
}
