//! Cross Country Skiing.

use crate::dataset::Dataset;
use crate::processing::{ages, by_sport, histogram, rank_by_total, tally_medals_by, BinSpec};
use crate::types::{DataType, Field, Value};

use super::{
    histogram_encoding, histogram_table, medal_table, Aggregate, ChartKey, Encoding, BRONZE, GOLD,
    SILVER,
};

const SPORT: &str = "Cross Country Skiing";

/// Cross country skiing medals per NOC, every medal-winning NOC, by `Total` descending.
pub fn cross_country_medals_per_country(dataset: &Dataset) -> Aggregate {
    let ranked = rank_by_total(tally_medals_by(by_sport(dataset, SPORT), |r| r.noc.clone()));
    let table = medal_table(
        vec![Field::new("NOC", DataType::Utf8)],
        ranked,
        |noc| vec![Value::Utf8(noc)],
        true,
    );
    Aggregate::new(
        ChartKey::CrossCountryMedalsPerCountry,
        Encoding::new("NOC", &[GOLD, SILVER, BRONZE]),
        table,
    )
}

/// Age histogram of cross country skiers with automatic bin sizing.
pub fn cross_country_skiers_age(dataset: &Dataset) -> Aggregate {
    let bins = histogram(&ages(by_sport(dataset, SPORT)), BinSpec::Auto);
    Aggregate::new(
        ChartKey::CrossCountrySkiersAge,
        histogram_encoding(),
        histogram_table(bins),
    )
}
