//! Row filtering over a [`Dataset`].
//!
//! Filters never copy or mutate records; they return borrowed views into the dataset.

use std::collections::HashSet;

use crate::dataset::{AthleteEvent, Dataset, Medal};

/// NOC codes counted as Australia, including the historical Australasia team.
pub const AUSTRALIA_NOCS: [&str; 2] = ["AUS", "ANZ"];

/// Returns the records for which `predicate` returns `true`, in dataset order.
pub fn filter<F>(dataset: &Dataset, mut predicate: F) -> Vec<&AthleteEvent>
where
    F: FnMut(&AthleteEvent) -> bool,
{
    dataset.iter().filter(|r| predicate(r)).collect()
}

/// Records whose NOC is one of `nocs`.
pub fn by_noc<'a>(dataset: &'a Dataset, nocs: &[&str]) -> Vec<&'a AthleteEvent> {
    filter(dataset, |r| nocs.contains(&r.noc.as_str()))
}

/// Records for one sport (exact, case-sensitive match).
pub fn by_sport<'a>(dataset: &'a Dataset, sport: &str) -> Vec<&'a AthleteEvent> {
    filter(dataset, |r| r.sport == sport)
}

/// Medal-bearing records paired with their medal.
pub fn medalists<'a, I>(records: I) -> impl Iterator<Item = (&'a AthleteEvent, Medal)>
where
    I: IntoIterator<Item = &'a AthleteEvent>,
{
    records.into_iter().filter_map(|r| r.medal.map(|m| (r, m)))
}

/// Known ages of `records`; missing ages are skipped.
pub fn ages<'a, I>(records: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a AthleteEvent>,
{
    records.into_iter().filter_map(|r| r.age).collect()
}

/// One record per athlete id; the first occurrence wins.
pub fn unique_athletes(dataset: &Dataset) -> Vec<&AthleteEvent> {
    let mut seen = HashSet::new();
    filter(dataset, |r| seen.insert(r.id))
}
