//! The chart catalog: twelve aggregations over the athlete dataset.
//!
//! Every aggregation takes the full [`Dataset`] by shared reference and builds a fresh
//! [`Aggregate`]. Nothing is cached and nothing is written back, so calling the same aggregation
//! twice over the same dataset yields identical tables.
//!
//! [`ChartKey`] names the catalog entries; [`aggregate`] is the exhaustive dispatch from key to
//! function.
//!
//! ```rust
//! use olympics_dashboard::catalog::{aggregate, AggregationOptions, ChartKey, ChartKind};
//! use olympics_dashboard::dataset::{AthleteEvent, Dataset, Sex};
//!
//! let ds = Dataset::new(vec![
//!     AthleteEvent::new(1, Sex::Female, "NOR", "Cross Country Skiing"),
//!     AthleteEvent::new(2, Sex::Male, "NOR", "Cross Country Skiing"),
//!     AthleteEvent::new(2, Sex::Male, "NOR", "Cross Country Skiing"),
//! ]);
//!
//! let agg = aggregate(ChartKey::SexDistribution, &ds, &AggregationOptions::default());
//! assert_eq!(agg.kind, ChartKind::Pie);
//! assert_eq!(agg.table.row_count(), 2);
//! ```

mod australia;
mod cross_country;
mod overview;
mod swimming;
mod tug_of_war;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::dataset::{Dataset, Medal};
use crate::error::DashboardError;
use crate::processing::{Bin, MedalTally};
use crate::types::{DataSet, DataType, Field, Schema, Value};

pub use australia::{australian_medals_per_year, histogram_australia, medals_per_sport_australia};
pub use cross_country::{cross_country_medals_per_country, cross_country_skiers_age};
pub use overview::{age_group_medals, sex_distribution, top_ten_countries, NO_MEDAL};
pub use swimming::{age_distribution_swimming, medals_country_swimming};
pub use tug_of_war::{age_distribution_tug_of_war, medal_distribution_per_year_tug_of_war};

/// Identifier of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKey {
    SexDistribution,
    TopTenCountries,
    AgeGroupMedals,
    MedalsPerSportAustralia,
    AustralianMedalsPerYear,
    HistogramAustralia,
    MedalsCountrySwimming,
    AgeDistributionSwimming,
    MedalDistributionPerYearTugOfWar,
    AgeDistributionTugOfWar,
    CrossCountryMedalsPerCountry,
    CrossCountrySkiersAge,
}

impl ChartKey {
    /// All keys, in page order.
    pub const ALL: [ChartKey; 12] = [
        ChartKey::SexDistribution,
        ChartKey::TopTenCountries,
        ChartKey::AgeGroupMedals,
        ChartKey::MedalsPerSportAustralia,
        ChartKey::AustralianMedalsPerYear,
        ChartKey::HistogramAustralia,
        ChartKey::MedalsCountrySwimming,
        ChartKey::AgeDistributionSwimming,
        ChartKey::MedalDistributionPerYearTugOfWar,
        ChartKey::AgeDistributionTugOfWar,
        ChartKey::CrossCountryMedalsPerCountry,
        ChartKey::CrossCountrySkiersAge,
    ];

    /// Stable string form, used as the dropdown value.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKey::SexDistribution => "sex_distribution",
            ChartKey::TopTenCountries => "top_ten_countries",
            ChartKey::AgeGroupMedals => "age_group_medals",
            ChartKey::MedalsPerSportAustralia => "medals_per_sport_australia",
            ChartKey::AustralianMedalsPerYear => "australian_medals_per_year",
            ChartKey::HistogramAustralia => "histogram_australia",
            ChartKey::MedalsCountrySwimming => "medals_country_swimming",
            ChartKey::AgeDistributionSwimming => "age_distribution_swimming",
            ChartKey::MedalDistributionPerYearTugOfWar => "medal_distribution_per_year_tug_of_war",
            ChartKey::AgeDistributionTugOfWar => "age_distribution_tug_of_war",
            ChartKey::CrossCountryMedalsPerCountry => "cross_country_medals_per_country",
            ChartKey::CrossCountrySkiersAge => "cross_country_skiers_age",
        }
    }

    /// Human-readable label; also the chart title.
    pub fn label(self) -> &'static str {
        match self {
            ChartKey::SexDistribution => "Sex distribution of all athletes",
            ChartKey::TopTenCountries => "Top 10 countries based on total medals won",
            ChartKey::AgeGroupMedals => "Medal counts per age group and sex",
            ChartKey::MedalsPerSportAustralia => "Number of medals per sport for Australia",
            ChartKey::AustralianMedalsPerYear => "Amount of medals per Olympic Games for Australia",
            ChartKey::HistogramAustralia => "Age of Australian Olympic athletes",
            ChartKey::MedalsCountrySwimming => "Amount of swimming medals per country",
            ChartKey::AgeDistributionSwimming => "Age distribution of swimmers",
            ChartKey::MedalDistributionPerYearTugOfWar => {
                "Medal distribution among countries in Tug-Of-War by year"
            }
            ChartKey::AgeDistributionTugOfWar => "Age distribution among athletes in Tug-Of-War",
            ChartKey::CrossCountryMedalsPerCountry => {
                "Amount of cross country skiing medals per country"
            }
            ChartKey::CrossCountrySkiersAge => "Age distribution of cross country skiers",
        }
    }

    /// The chart kind this aggregation is drawn as. Fixed per key.
    pub fn kind(self) -> ChartKind {
        match self {
            ChartKey::SexDistribution => ChartKind::Pie,
            ChartKey::TopTenCountries
            | ChartKey::AgeGroupMedals
            | ChartKey::MedalsPerSportAustralia
            | ChartKey::MedalsCountrySwimming
            | ChartKey::MedalDistributionPerYearTugOfWar => ChartKind::BarGrouped,
            ChartKey::AustralianMedalsPerYear | ChartKey::CrossCountryMedalsPerCountry => {
                ChartKind::BarStacked
            }
            ChartKey::HistogramAustralia
            | ChartKey::AgeDistributionSwimming
            | ChartKey::AgeDistributionTugOfWar
            | ChartKey::CrossCountrySkiersAge => ChartKind::Histogram,
        }
    }
}

impl fmt::Display for ChartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DashboardError::InvalidSelection { key: s.to_owned() })
    }
}

/// How the rendering collaborator should draw an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Pie,
    BarGrouped,
    BarStacked,
    Histogram,
}

/// Column roles of an aggregate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoding {
    /// Category / x-axis column (slice names for pies).
    pub x: &'static str,
    /// Value column(s).
    pub y: Vec<&'static str>,
    /// Series / color column, if any.
    pub color: Option<&'static str>,
    /// Column splitting the chart into facets, if any.
    pub facet: Option<&'static str>,
}

impl Encoding {
    fn new(x: &'static str, y: &[&'static str]) -> Self {
        Self {
            x,
            y: y.to_vec(),
            color: None,
            facet: None,
        }
    }

    fn color(mut self, column: &'static str) -> Self {
        self.color = Some(column);
        self
    }

    fn facet(mut self, column: &'static str) -> Self {
        self.facet = Some(column);
        self
    }
}

/// A chart-ready table plus what it is and how to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub key: ChartKey,
    pub kind: ChartKind,
    pub encoding: Encoding,
    pub table: DataSet,
}

impl Aggregate {
    fn new(key: ChartKey, encoding: Encoding, table: DataSet) -> Self {
        Self {
            key,
            kind: key.kind(),
            encoding,
            table,
        }
    }
}

/// Knobs that change aggregation output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Keep the "No medal" rows in the age group medal chart.
    pub include_no_medal: bool,
}

/// Compute the aggregate for `key`.
pub fn aggregate(key: ChartKey, dataset: &Dataset, options: &AggregationOptions) -> Aggregate {
    let start = Instant::now();
    let out = match key {
        ChartKey::SexDistribution => sex_distribution(dataset),
        ChartKey::TopTenCountries => top_ten_countries(dataset),
        ChartKey::AgeGroupMedals => age_group_medals(dataset, options),
        ChartKey::MedalsPerSportAustralia => medals_per_sport_australia(dataset),
        ChartKey::AustralianMedalsPerYear => australian_medals_per_year(dataset),
        ChartKey::HistogramAustralia => histogram_australia(dataset),
        ChartKey::MedalsCountrySwimming => medals_country_swimming(dataset),
        ChartKey::AgeDistributionSwimming => age_distribution_swimming(dataset),
        ChartKey::MedalDistributionPerYearTugOfWar => {
            medal_distribution_per_year_tug_of_war(dataset)
        }
        ChartKey::AgeDistributionTugOfWar => age_distribution_tug_of_war(dataset),
        ChartKey::CrossCountryMedalsPerCountry => cross_country_medals_per_country(dataset),
        ChartKey::CrossCountrySkiersAge => cross_country_skiers_age(dataset),
    };
    log::debug!(
        "aggregate computed: key={} rows={} elapsed={:?}",
        key,
        out.table.row_count(),
        start.elapsed()
    );
    out
}

const GOLD: &str = "Gold";
const SILVER: &str = "Silver";
const BRONZE: &str = "Bronze";
const TOTAL: &str = "Total";
const BIN_START: &str = "Bin Start";
const BIN_END: &str = "Bin End";
const COUNT: &str = "Count";

/// `key_fields…, Gold, Silver, Bronze[, Total]` rows from ranked tallies.
fn medal_table<K>(
    key_fields: Vec<Field>,
    tallies: impl IntoIterator<Item = (K, MedalTally)>,
    key_values: impl Fn(K) -> Vec<Value>,
    with_total: bool,
) -> DataSet {
    let mut fields = key_fields;
    fields.extend(Medal::ALL.iter().map(|m| Field::new(m.as_str(), DataType::Int64)));
    if with_total {
        fields.push(Field::new(TOTAL, DataType::Int64));
    }

    let rows = tallies
        .into_iter()
        .map(|(k, tally)| {
            let mut row = key_values(k);
            row.extend(Medal::ALL.iter().map(|&m| Value::Int64(tally.get(m) as i64)));
            if with_total {
                row.push(Value::Int64(tally.total() as i64));
            }
            row
        })
        .collect();
    DataSet::new(Schema::new(fields), rows)
}

/// `Bin Start, Bin End, Count` rows.
fn histogram_table(bins: Vec<Bin>) -> DataSet {
    let schema = Schema::new(vec![
        Field::new(BIN_START, DataType::Float64),
        Field::new(BIN_END, DataType::Float64),
        Field::new(COUNT, DataType::Int64),
    ]);
    let rows = bins
        .into_iter()
        .map(|b| vec![Value::Float64(b.start), Value::Float64(b.end), Value::Int64(b.count as i64)])
        .collect();
    DataSet::new(schema, rows)
}

fn histogram_encoding() -> Encoding {
    Encoding::new(BIN_START, &[COUNT])
}
