//! Group-by counting and medal tallies.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::dataset::{AthleteEvent, Medal};

use super::filter::medalists;

/// Gold/silver/bronze counts for one group key. Medal types never seen stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalTally {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl MedalTally {
    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    pub fn get(&self, medal: Medal) -> u64 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }
}

/// Count items per key. Keys come back in ascending order.
pub fn count_by<T, K, I, F>(items: I, mut key: F) -> BTreeMap<K, u64>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> K,
{
    let mut out = BTreeMap::new();
    for item in items {
        *out.entry(key(item)).or_insert(0) += 1;
    }
    out
}

/// Frequency count of `keys`, most frequent first.
///
/// Equal counts keep the order in which each key was first seen.
pub fn value_counts<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<(K, u64)> = Vec::new();
    for k in keys {
        match slots.get(&k) {
            Some(&i) => out[i].1 += 1,
            None => {
                slots.insert(k.clone(), out.len());
                out.push((k, 1));
            }
        }
    }
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Tally medals per key over the medal-bearing records only.
///
/// A key appears only if at least one of its records won a medal; within a present key, missing
/// medal types are zero.
pub fn tally_medals_by<'a, K, I, F>(records: I, mut key: F) -> BTreeMap<K, MedalTally>
where
    K: Ord,
    I: IntoIterator<Item = &'a AthleteEvent>,
    F: FnMut(&AthleteEvent) -> K,
{
    let mut out: BTreeMap<K, MedalTally> = BTreeMap::new();
    for (r, medal) in medalists(records) {
        out.entry(key(r)).or_default().add(medal);
    }
    out
}

/// Order tallies by total, largest first. The sort is stable, so equal totals keep their
/// incoming (ascending key) order.
pub fn rank_by_total<K>(tallies: BTreeMap<K, MedalTally>) -> Vec<(K, MedalTally)> {
    let mut ranked: Vec<(K, MedalTally)> = tallies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Sex;

    fn medal(id: i64, noc: &str, medal: Medal) -> AthleteEvent {
        AthleteEvent::new(id, Sex::Male, noc, "Swimming").with_medal(medal)
    }

    #[test]
    fn count_by_orders_keys() {
        let records = [
            AthleteEvent::new(1, Sex::Male, "USA", "Rowing"),
            AthleteEvent::new(2, Sex::Male, "AUS", "Rowing"),
            AthleteEvent::new(3, Sex::Male, "USA", "Rowing"),
        ];
        let counts = count_by(&records, |r| r.noc.clone());
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![("AUS".to_string(), 1), ("USA".to_string(), 2)]
        );
    }

    #[test]
    fn value_counts_sorts_descending_with_first_seen_ties() {
        let out = value_counts(["b", "a", "c", "a", "c", "d"]);
        assert_eq!(out, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn tally_zero_fills_and_skips_medalless_keys() {
        let records = [
            medal(1, "USA", Medal::Gold),
            medal(2, "USA", Medal::Gold),
            medal(3, "SWE", Medal::Bronze),
            AthleteEvent::new(4, Sex::Female, "FIN", "Swimming"),
        ];
        let tallies = tally_medals_by(&records, |r| r.noc.clone());
        assert_eq!(tallies.len(), 2);
        assert_eq!(
            tallies["USA"],
            MedalTally {
                gold: 2,
                silver: 0,
                bronze: 0
            }
        );
        assert_eq!(tallies["SWE"].total(), 1);
        assert!(!tallies.contains_key("FIN"));
    }

    #[test]
    fn rank_by_total_is_stable() {
        let records = [
            medal(1, "CAN", Medal::Silver),
            medal(2, "USA", Medal::Gold),
            medal(3, "USA", Medal::Bronze),
            medal(4, "BRA", Medal::Gold),
        ];
        let ranked = rank_by_total(tally_medals_by(&records, |r| r.noc.clone()));
        let order: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["USA", "BRA", "CAN"]);
    }
}
