use std::fmt;
use std::time::Duration;

use crate::catalog::ChartKey;

/// Events emitted by the [`super::Dispatcher`].
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// The "none" selection was dispatched; nothing was computed.
    SelectionCleared,
    AggregateStarted {
        key: ChartKey,
    },
    AggregateFinished {
        key: ChartKey,
        rows: usize,
        elapsed: Duration,
    },
    /// A dynamic key did not name a registered chart.
    SelectionRejected {
        key: String,
    },
}

impl fmt::Display for DispatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchEvent::SelectionCleared => write!(f, "selection cleared"),
            DispatchEvent::AggregateStarted { key } => write!(f, "aggregate started: key={key}"),
            DispatchEvent::AggregateFinished { key, rows, elapsed } => write!(
                f,
                "aggregate finished: key={key} rows={rows} elapsed={elapsed:?}"
            ),
            DispatchEvent::SelectionRejected { key } => {
                write!(f, "selection rejected: key='{key}'")
            }
        }
    }
}

/// Observer hook for dispatch events.
///
/// Observers only watch; they cannot change what a dispatch returns.
pub trait DispatchObserver: Send + Sync {
    fn on_event(&self, event: &DispatchEvent);
}

/// Forwards dispatch events to the `log` facade.
///
/// Rejected selections are logged at `warn`, everything else at `debug`.
#[derive(Debug, Default)]
pub struct LogDispatchObserver;

impl DispatchObserver for LogDispatchObserver {
    fn on_event(&self, event: &DispatchEvent) {
        match event {
            DispatchEvent::SelectionRejected { .. } => log::warn!("[dispatch] {event}"),
            _ => log::debug!("[dispatch] {event}"),
        }
    }
}
