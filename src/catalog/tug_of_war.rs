//! Tug-Of-War.

use crate::dataset::Dataset;
use crate::processing::{ages, by_sport, count_by, histogram, medalists, BinSpec};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::{histogram_encoding, histogram_table, Aggregate, ChartKey, Encoding, COUNT};

const SPORT: &str = "Tug-Of-War";

/// Medals per NOC and Games year.
///
/// Rows: `NOC, Year, Medal, Count`, by year, then NOC, then Gold, Silver, Bronze.
pub fn medal_distribution_per_year_tug_of_war(dataset: &Dataset) -> Aggregate {
    let counts = count_by(medalists(by_sport(dataset, SPORT)), |(r, medal)| {
        (r.year, r.noc.clone(), medal)
    });

    let schema = Schema::new(vec![
        Field::new("NOC", DataType::Utf8),
        Field::new("Year", DataType::Int64),
        Field::new("Medal", DataType::Utf8),
        Field::new(COUNT, DataType::Int64),
    ]);
    let rows = counts
        .into_iter()
        .map(|((year, noc, medal), n)| {
            vec![
                Value::Utf8(noc),
                Value::Int64(year),
                Value::from(medal.as_str()),
                Value::Int64(n as i64),
            ]
        })
        .collect();
    Aggregate::new(
        ChartKey::MedalDistributionPerYearTugOfWar,
        Encoding::new("NOC", &[COUNT]).color("Medal").facet("Year"),
        DataSet::new(schema, rows),
    )
}

/// Age histogram of Tug-Of-War athletes with one bin per year of age.
pub fn age_distribution_tug_of_war(dataset: &Dataset) -> Aggregate {
    let bins = histogram(&ages(by_sport(dataset, SPORT)), BinSpec::UnitWidth);
    Aggregate::new(
        ChartKey::AgeDistributionTugOfWar,
        histogram_encoding(),
        histogram_table(bins),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AthleteEvent, Medal, Season, Sex};

    fn puller(id: i64, noc: &str, year: i64) -> AthleteEvent {
        AthleteEvent::new(id, Sex::Male, noc, SPORT).with_games(Season::Summer, year)
    }

    #[test]
    fn medals_sorted_by_year_then_noc() {
        let ds = Dataset::new(vec![
            puller(1, "SWE", 1912).with_medal(Medal::Gold),
            puller(2, "GBR", 1912).with_medal(Medal::Silver),
            puller(3, "USA", 1904).with_medal(Medal::Gold),
            puller(4, "USA", 1904).with_medal(Medal::Gold),
            puller(5, "GRE", 1904).with_medal(Medal::Silver),
            puller(6, "GBR", 1912),
        ]);
        let agg = medal_distribution_per_year_tug_of_war(&ds);
        assert_eq!(
            agg.table.rows,
            vec![
                vec![Value::from("GRE"), Value::Int64(1904), Value::from("Silver"), Value::Int64(1)],
                vec![Value::from("USA"), Value::Int64(1904), Value::from("Gold"), Value::Int64(2)],
                vec![Value::from("GBR"), Value::Int64(1912), Value::from("Silver"), Value::Int64(1)],
                vec![Value::from("SWE"), Value::Int64(1912), Value::from("Gold"), Value::Int64(1)],
            ]
        );
    }

    #[test]
    fn age_bins_cover_each_year_between_min_and_max() {
        let ds = Dataset::new(vec![
            puller(1, "GBR", 1908).with_age(20.0),
            puller(2, "GBR", 1908).with_age(22.0),
            puller(3, "GBR", 1908).with_age(25.0),
            puller(4, "GBR", 1908),
            AthleteEvent::new(5, Sex::Male, "GBR", "Rowing").with_age(60.0),
        ]);
        let agg = age_distribution_tug_of_war(&ds);
        assert_eq!(agg.table.row_count(), 6);
        assert_eq!(agg.table.get(0, "Bin Start"), Some(&Value::Float64(20.0)));
        assert_eq!(agg.table.get(5, "Bin End"), Some(&Value::Float64(26.0)));
        let total: i64 = agg.table.column("Count").unwrap().filter_map(Value::as_i64).sum();
        assert_eq!(total, 3);
    }
}
