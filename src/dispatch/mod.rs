//! Selection dispatcher: maps a user's chart choice to a freshly computed aggregate.
//!
//! A [`Selection`] is either one of the twelve [`ChartKey`]s or [`Selection::None`]. Typed
//! selections cannot fail; string keys arriving from the UI are parsed with
//! [`Selection::from_str`] (or [`Dispatcher::dispatch_key`]) and anything unregistered is
//! rejected with [`DashboardError::InvalidSelection`] before any work is done.
//!
//! Every dispatch recomputes from the shared read-only [`Dataset`]; the dispatcher holds no
//! per-call state, so one instance can serve concurrent sessions.

mod observer;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{aggregate, Aggregate, AggregationOptions, ChartKey};
use crate::dataset::{self, Dataset};
use crate::error::{DashboardError, DashboardResult};

pub use observer::{DispatchEvent, DispatchObserver, LogDispatchObserver};

/// String form of [`Selection::None`].
pub const NONE_KEY: &str = "none";

/// The active chart choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing selected: draw nothing.
    None,
    Chart(ChartKey),
}

impl FromStr for Selection {
    type Err = DashboardError;

    /// `"none"` or an empty string is [`Selection::None`]; otherwise the key must be registered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | NONE_KEY => Ok(Selection::None),
            key => key.parse().map(Selection::Chart),
        }
    }
}

impl From<ChartKey> for Selection {
    fn from(key: ChartKey) -> Self {
        Selection::Chart(key)
    }
}

/// What a dispatch hands to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutput {
    /// The designated empty result for [`Selection::None`].
    Empty,
    Chart(Aggregate),
}

impl DispatchOutput {
    pub fn is_empty(&self) -> bool {
        matches!(self, DispatchOutput::Empty)
    }

    pub fn aggregate(&self) -> Option<&Aggregate> {
        match self {
            DispatchOutput::Empty => None,
            DispatchOutput::Chart(agg) => Some(agg),
        }
    }

    pub fn into_aggregate(self) -> Option<Aggregate> {
        match self {
            DispatchOutput::Empty => None,
            DispatchOutput::Chart(agg) => Some(agg),
        }
    }
}

/// Computes the aggregate for each selection over a shared dataset.
#[derive(Clone)]
pub struct Dispatcher {
    dataset: Dataset,
    options: AggregationOptions,
    observer: Option<Arc<dyn DispatchObserver>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("records", &self.dataset.len())
            .field("options", &self.options)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Dispatcher {
    /// Dispatcher over an explicit dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            options: AggregationOptions::default(),
            observer: None,
        }
    }

    /// Dispatcher over the process-wide dataset installed with [`dataset::init_global`].
    pub fn from_global() -> DashboardResult<Self> {
        Ok(Self::new(dataset::global()?.clone()))
    }

    pub fn with_options(mut self, options: AggregationOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach an observer for dispatch events.
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Compute the output for a typed selection.
    pub fn dispatch(&self, selection: Selection) -> DispatchOutput {
        match selection {
            Selection::None => {
                self.emit(DispatchEvent::SelectionCleared);
                DispatchOutput::Empty
            }
            Selection::Chart(key) => DispatchOutput::Chart(self.compute(key)),
        }
    }

    /// Parse a key from the UI and dispatch it.
    ///
    /// Unregistered keys return [`DashboardError::InvalidSelection`] and compute nothing.
    pub fn dispatch_key(&self, key: &str) -> DashboardResult<DispatchOutput> {
        match key.parse::<Selection>() {
            Ok(selection) => Ok(self.dispatch(selection)),
            Err(err) => {
                self.emit(DispatchEvent::SelectionRejected {
                    key: key.to_owned(),
                });
                Err(err)
            }
        }
    }

    /// Compute the aggregate for one chart.
    pub fn compute(&self, key: ChartKey) -> Aggregate {
        let start = Instant::now();
        self.emit(DispatchEvent::AggregateStarted { key });
        let out = aggregate(key, &self.dataset, &self.options);
        self.emit(DispatchEvent::AggregateFinished {
            key,
            rows: out.table.row_count(),
            elapsed: start.elapsed(),
        });
        out
    }

    fn emit(&self, event: DispatchEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
