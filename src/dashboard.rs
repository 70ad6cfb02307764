//! The dashboard facade: one loaded dataset, one dispatcher, one theme.

use std::sync::Arc;

use rayon::prelude::*;

use crate::catalog::ChartKey;
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::dispatch::{DispatchOutput, Dispatcher, LogDispatchObserver};
use crate::error::DashboardResult;
use crate::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
use crate::render::{ChartSpec, Theme};
use crate::ui::{dropdown_options, DropdownOption};

/// Serves chart payloads for UI selections over a dataset loaded once.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dispatcher: Dispatcher,
    theme: Theme,
}

impl Dashboard {
    /// Load the dataset named by `config` and build the dashboard over it.
    pub fn load(config: &DashboardConfig) -> DashboardResult<Self> {
        let options = IngestionOptions {
            observer: Some(Arc::new(LogObserver)),
            alert_at_or_above: config.alert_at_or_above,
        };
        let dataset = ingest_from_path(&config.dataset_path, &options)?;
        Ok(Self::new(dataset, config))
    }

    pub fn new(dataset: Dataset, config: &DashboardConfig) -> Self {
        let dispatcher = Dispatcher::new(dataset)
            .with_options(config.aggregation_options())
            .with_observer(Arc::new(LogDispatchObserver));
        Self {
            dispatcher,
            theme: config.theme.clone(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        dropdown_options()
    }

    /// Chart payload for a dropdown change; `Ok(None)` when the selection was cleared.
    pub fn select(&self, key: &str) -> DashboardResult<Option<ChartSpec>> {
        Ok(match self.dispatcher.dispatch_key(key)? {
            DispatchOutput::Empty => None,
            DispatchOutput::Chart(agg) => Some(ChartSpec::new(agg, &self.theme)),
        })
    }

    /// Every chart, computed in parallel, in [`ChartKey::ALL`] order.
    pub fn render_page(&self) -> Vec<ChartSpec> {
        ChartKey::ALL
            .par_iter()
            .map(|&key| ChartSpec::new(self.dispatcher.compute(key), &self.theme))
            .collect()
    }
}
