//! Whole-dataset charts: sex split, top countries, medals by age group.

use std::collections::BTreeMap;

use crate::dataset::{Dataset, Medal, Sex};
use crate::processing::{
    rank_by_total, tally_medals_by, unique_athletes, value_counts, AgeGroup, MedalTally,
};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::{medal_table, Aggregate, AggregationOptions, ChartKey, Encoding, COUNT, TOTAL};

/// Medal category for records without a medal.
pub const NO_MEDAL: &str = "No medal";

const TOP_COUNTRIES: usize = 10;

/// Athletes per sex, each athlete counted once (first record wins).
///
/// Rows: `Sex` (`Female` / `Male`), `Count`, most frequent first.
pub fn sex_distribution(dataset: &Dataset) -> Aggregate {
    let counts = value_counts(unique_athletes(dataset).into_iter().map(|r| r.sex));
    let schema = Schema::new(vec![
        Field::new("Sex", DataType::Utf8),
        Field::new(COUNT, DataType::Int64),
    ]);
    let rows = counts
        .into_iter()
        .map(|(sex, n)| vec![Value::from(sex.label()), Value::Int64(n as i64)])
        .collect();
    Aggregate::new(
        ChartKey::SexDistribution,
        Encoding::new("Sex", &[COUNT]),
        DataSet::new(schema, rows),
    )
}

/// The ten NOCs with the most medals.
///
/// Rows: `NOC, Gold, Silver, Bronze, Total`, by `Total` descending; ties stay in NOC order.
pub fn top_ten_countries(dataset: &Dataset) -> Aggregate {
    let mut ranked = rank_by_total(tally_medals_by(dataset, |r| r.noc.clone()));
    ranked.truncate(TOP_COUNTRIES);
    let table = medal_table(
        vec![Field::new("NOC", DataType::Utf8)],
        ranked,
        |noc| vec![Value::Utf8(noc)],
        true,
    );
    Aggregate::new(
        ChartKey::TopTenCountries,
        Encoding::new("NOC", &[TOTAL]).color("NOC"),
        table,
    )
}

/// Medal counts per sex and decade age group.
///
/// Records without an age, or aged outside `[10, 90)`, are left out. Rows are long-form
/// `Sex, Age Group, Medal, Count`, ordered by sex, then age group, then Gold, Silver, Bronze.
/// Every (sex, age group) pair that has at least one record gets all three medal rows, zero
/// when nothing was won. "No medal" rows follow when `options.include_no_medal` is set.
pub fn age_group_medals(dataset: &Dataset, options: &AggregationOptions) -> Aggregate {
    let mut groups: BTreeMap<(Sex, AgeGroup), (MedalTally, u64)> = BTreeMap::new();
    for r in dataset {
        let Some(group) = r.age.and_then(AgeGroup::of) else {
            continue;
        };
        let (tally, no_medal) = groups.entry((r.sex, group)).or_default();
        match r.medal {
            Some(medal) => tally.add(medal),
            None => *no_medal += 1,
        }
    }

    let schema = Schema::new(vec![
        Field::new("Sex", DataType::Utf8),
        Field::new("Age Group", DataType::Utf8),
        Field::new("Medal", DataType::Utf8),
        Field::new(COUNT, DataType::Int64),
    ]);
    let mut rows = Vec::new();
    for ((sex, group), (tally, no_medal)) in groups {
        let row = |medal: &str, n: u64| {
            vec![
                Value::from(sex.code()),
                Value::Utf8(group.label()),
                Value::from(medal),
                Value::Int64(n as i64),
            ]
        };
        for medal in Medal::ALL {
            rows.push(row(medal.as_str(), tally.get(medal)));
        }
        if options.include_no_medal {
            rows.push(row(NO_MEDAL, no_medal));
        }
    }

    Aggregate::new(
        ChartKey::AgeGroupMedals,
        Encoding::new("Age Group", &[COUNT]).color("Medal").facet("Sex"),
        DataSet::new(schema, rows),
    )
}
