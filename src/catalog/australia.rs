//! Australia (AUS plus the historical Australasia team, ANZ).

use crate::dataset::{Dataset, Season};
use crate::processing::{
    ages, by_noc, histogram, medalists, tally_medals_by, value_counts, BinSpec, AUSTRALIA_NOCS,
};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::{
    histogram_encoding, histogram_table, medal_table, Aggregate, ChartKey, Encoding, BRONZE, GOLD,
    SILVER,
};

const AGE_BINS: usize = 25;

/// Australian medals per sport, most medals first. Sports with equal counts keep the order in
/// which they first appear in the dataset.
pub fn medals_per_sport_australia(dataset: &Dataset) -> Aggregate {
    let australians = by_noc(dataset, &AUSTRALIA_NOCS);
    let counts = value_counts(medalists(australians).map(|(r, _)| r.sport.as_str()));

    let schema = Schema::new(vec![
        Field::new("Sport", DataType::Utf8),
        Field::new("Medals", DataType::Int64),
    ]);
    let rows = counts
        .into_iter()
        .map(|(sport, n)| vec![Value::from(sport), Value::Int64(n as i64)])
        .collect();
    Aggregate::new(
        ChartKey::MedalsPerSportAustralia,
        Encoding::new("Sport", &["Medals"]),
        DataSet::new(schema, rows),
    )
}

/// Australian gold/silver/bronze counts per Games.
///
/// Rows: `Season, Year, Gold, Silver, Bronze`; Summer before Winter, years ascending.
pub fn australian_medals_per_year(dataset: &Dataset) -> Aggregate {
    let australians = by_noc(dataset, &AUSTRALIA_NOCS);
    let tallies = tally_medals_by(australians, |r| (r.season, r.year));
    let table = medal_table(
        vec![
            Field::new("Season", DataType::Utf8),
            Field::new("Year", DataType::Int64),
        ],
        tallies,
        |(season, year): (Season, i64)| vec![Value::from(season.as_str()), Value::Int64(year)],
        false,
    );
    Aggregate::new(
        ChartKey::AustralianMedalsPerYear,
        Encoding::new("Year", &[GOLD, SILVER, BRONZE]).facet("Season"),
        table,
    )
}

/// Age histogram of Australian athletes, 25 bins over the observed age range.
pub fn histogram_australia(dataset: &Dataset) -> Aggregate {
    let bins = histogram(&ages(by_noc(dataset, &AUSTRALIA_NOCS)), BinSpec::Count(AGE_BINS));
    Aggregate::new(
        ChartKey::HistogramAustralia,
        histogram_encoding(),
        histogram_table(bins),
    )
}
