//! Swimming.

use crate::dataset::Dataset;
use crate::processing::{ages, by_sport, histogram, rank_by_total, tally_medals_by, BinSpec};
use crate::types::{DataType, Field, Value};

use super::{
    histogram_encoding, histogram_table, medal_table, Aggregate, ChartKey, Encoding, BRONZE, GOLD,
    SILVER,
};

const SPORT: &str = "Swimming";
const TOP_COUNTRIES: usize = 20;
const AGE_BINS: usize = 10;

/// Swimming medals per NOC for the 20 most successful NOCs.
///
/// Rows: `NOC, Gold, Silver, Bronze, Total`, by `Total` descending. NOCs that never won a
/// swimming medal have no tally and so never appear.
pub fn medals_country_swimming(dataset: &Dataset) -> Aggregate {
    let tallies = tally_medals_by(by_sport(dataset, SPORT), |r| r.noc.clone());
    let mut ranked = rank_by_total(tallies);
    ranked.truncate(TOP_COUNTRIES);

    let table = medal_table(
        vec![Field::new("NOC", DataType::Utf8)],
        ranked,
        |noc| vec![Value::Utf8(noc)],
        true,
    );
    Aggregate::new(
        ChartKey::MedalsCountrySwimming,
        Encoding::new("NOC", &[GOLD, SILVER, BRONZE]),
        table,
    )
}

/// Age histogram of swimmers, 10 bins.
pub fn age_distribution_swimming(dataset: &Dataset) -> Aggregate {
    let bins = histogram(&ages(by_sport(dataset, SPORT)), BinSpec::Count(AGE_BINS));
    Aggregate::new(
        ChartKey::AgeDistributionSwimming,
        histogram_encoding(),
        histogram_table(bins),
    )
}
