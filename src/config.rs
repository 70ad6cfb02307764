//! Dashboard configuration.
//!
//! [`DashboardConfig`] can be built in code, deserialized from JSON, and adjusted from the
//! environment:
//!
//! | Env var | Field |
//! |---|---|
//! | `OLYMPICS_DATASET` | `dataset_path` |
//! | `OLYMPICS_INCLUDE_NO_MEDAL` | `include_no_medal` |

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::AggregationOptions;
use crate::error::{DashboardError, DashboardResult};
use crate::ingestion::IngestionSeverity;
use crate::render::Theme;

pub const DATASET_ENV: &str = "OLYMPICS_DATASET";
pub const INCLUDE_NO_MEDAL_ENV: &str = "OLYMPICS_INCLUDE_NO_MEDAL";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Athlete-events CSV file.
    pub dataset_path: PathBuf,
    /// Keep "No medal" rows in the age group medal chart.
    pub include_no_medal: bool,
    /// Styling applied to every chart payload.
    pub theme: Theme,
    /// Load failures at or above this severity are raised as alerts.
    pub alert_at_or_above: IngestionSeverity,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("Data/athlete_events.csv"),
            include_no_medal: false,
            theme: Theme::default(),
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> DashboardResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Apply `OLYMPICS_*` environment overrides.
    pub fn with_env_overrides(self) -> DashboardResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps an env var name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATASET_ENV) {
            self.dataset_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(INCLUDE_NO_MEDAL_ENV) {
            self.include_no_medal = parse_bool(&raw).map_err(|message| DashboardError::Config {
                message: format!("{INCLUDE_NO_MEDAL_ENV}='{raw}': {message}"),
            })?;
        }
        Ok(self)
    }

    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions {
            include_no_medal: self.include_no_medal,
        }
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
