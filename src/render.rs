//! Hand-off to the rendering collaborator.
//!
//! A [`ChartSpec`] bundles an [`Aggregate`] with its title, axis labels, per-chart layout hints
//! and the shared [`Theme`]. The theme is applied here, after aggregation, so the catalog never
//! deals with presentation.

use serde::{Deserialize, Serialize};

use crate::catalog::{Aggregate, ChartKey, ChartKind, Encoding};
use crate::error::DashboardResult;
use crate::types::DataSet;

/// Styling shared by every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub legend_bgcolor: String,
    pub autosize: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            paper_bgcolor: "rgba(255,255,255,0.9)".to_string(),
            plot_bgcolor: "rgba(255,255,255,0.9)".to_string(),
            legend_bgcolor: "rgba(255,255,255,0.01)".to_string(),
            autosize: true,
        }
    }
}

/// Per-chart layout hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_angle: Option<i32>,
    /// Distance between x-axis ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_dtick: Option<f64>,
}

/// Everything the rendering collaborator needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub key: ChartKey,
    pub title: &'static str,
    pub kind: ChartKind,
    pub encoding: Encoding,
    /// Axis / legend label overrides, `(column, label)`.
    pub labels: Vec<(&'static str, &'static str)>,
    /// Series colors, `(series value, color)`.
    pub color_map: Vec<(&'static str, &'static str)>,
    pub layout: Layout,
    pub theme: Theme,
    pub data: DataSet,
}

impl ChartSpec {
    /// Decorate an aggregate for rendering.
    pub fn new(aggregate: Aggregate, theme: &Theme) -> Self {
        let key = aggregate.key;
        Self {
            key,
            title: key.label(),
            kind: aggregate.kind,
            encoding: aggregate.encoding,
            labels: labels_for(key),
            color_map: color_map_for(key),
            layout: layout_for(key),
            theme: theme.clone(),
            data: aggregate.table,
        }
    }

    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

const MEDAL_COLORS: [(&str, &str); 3] = [("Gold", "gold"), ("Silver", "silver"), ("Bronze", "brown")];

fn color_map_for(key: ChartKey) -> Vec<(&'static str, &'static str)> {
    match key {
        ChartKey::AgeGroupMedals
        | ChartKey::AustralianMedalsPerYear
        | ChartKey::CrossCountryMedalsPerCountry => MEDAL_COLORS.to_vec(),
        ChartKey::MedalDistributionPerYearTugOfWar => {
            vec![("Gold", "gold"), ("Silver", "silver"), ("Bronze", "#cd7f32")]
        }
        _ => Vec::new(),
    }
}

fn labels_for(key: ChartKey) -> Vec<(&'static str, &'static str)> {
    match key {
        ChartKey::TopTenCountries => vec![("NOC", "Countries"), ("Total", "Medals")],
        ChartKey::AgeGroupMedals => vec![("Count", "Medal Count")],
        ChartKey::MedalsPerSportAustralia => vec![("Medals", "Number of Medals")],
        ChartKey::AustralianMedalsPerYear | ChartKey::CrossCountryMedalsPerCountry => {
            vec![("value", "Medal Count"), ("NOC", "Country")]
        }
        ChartKey::MedalsCountrySwimming => vec![("NOC", "Country"), ("value", "Medals")],
        ChartKey::MedalDistributionPerYearTugOfWar => {
            vec![("NOC", "Countries"), ("Count", "Number of Medals per team")]
        }
        ChartKey::HistogramAustralia | ChartKey::AgeDistributionSwimming => vec![("Bin Start", "Age")],
        ChartKey::AgeDistributionTugOfWar | ChartKey::CrossCountrySkiersAge => {
            vec![("Bin Start", "Age of Athletes")]
        }
        ChartKey::SexDistribution => Vec::new(),
    }
}

fn layout_for(key: ChartKey) -> Layout {
    match key {
        ChartKey::MedalsPerSportAustralia => Layout {
            x_tick_angle: Some(-45),
            ..Layout::default()
        },
        ChartKey::MedalDistributionPerYearTugOfWar => Layout {
            x_tick_angle: Some(-90),
            ..Layout::default()
        },
        ChartKey::HistogramAustralia | ChartKey::CrossCountrySkiersAge => Layout {
            bar_gap: Some(0.2),
            ..Layout::default()
        },
        ChartKey::AgeDistributionSwimming => Layout {
            bar_gap: Some(0.1),
            ..Layout::default()
        },
        ChartKey::AgeDistributionTugOfWar => Layout {
            bar_gap: Some(0.2),
            x_dtick: Some(1.0),
            ..Layout::default()
        },
        _ => Layout::default(),
    }
}
