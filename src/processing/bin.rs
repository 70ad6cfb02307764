//! Age binning: fixed decade groups and histograms.

use std::fmt;

/// First age covered by the decade groups.
pub const AGE_GROUP_MIN: u32 = 10;
/// Ages at or above this fall outside every decade group.
pub const AGE_GROUP_MAX: u32 = 90;
const AGE_GROUP_WIDTH: u32 = 10;

/// A decade age group `[start, start + 10)`, labelled `"{start}-{start + 9}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeGroup {
    start: u32,
}

impl AgeGroup {
    /// The group containing `age`, or `None` outside `[10, 90)`.
    pub fn of(age: f64) -> Option<Self> {
        if !(age >= AGE_GROUP_MIN as f64 && age < AGE_GROUP_MAX as f64) {
            return None;
        }
        let decade = (age as u32 / AGE_GROUP_WIDTH) * AGE_GROUP_WIDTH;
        Some(Self { start: decade })
    }

    pub fn start(self) -> u32 {
        self.start
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.start + AGE_GROUP_WIDTH - 1)
    }
}

/// How a histogram chooses its bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinSpec {
    /// Exactly `n` equal-width bins spanning `[min, max]`.
    Count(usize),
    /// One bin per whole year from `floor(min)` to `floor(max)`, width 1.
    UnitWidth,
    /// Sturges' rule: `ceil(log2(n)) + 1` equal-width bins.
    Auto,
}

/// One histogram bin covering `[start, end)`; the last bin also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Upper bound on the number of bins any histogram produces.
pub const MAX_BINS: usize = 1024;

/// Histogram of `values`. Non-finite values are ignored; an input with no finite value yields
/// no bins.
///
/// `UnitWidth` falls back to [`MAX_BINS`] equal-width bins when the range spans more years than
/// that.
pub fn histogram(values: &[f64], spec: BinSpec) -> Vec<Bin> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some((min, max)) = range(&values) else {
        return Vec::new();
    };

    // The last equal-width bin ends exactly at `max`.
    let ((start, width, n), snap_end) = match spec {
        BinSpec::Count(n) => (equal_width(min, max, n), true),
        BinSpec::Auto => (equal_width(min, max, sturges(values.len())), true),
        BinSpec::UnitWidth => {
            let start = min.floor();
            let span = max.floor() - start;
            if span < MAX_BINS as f64 {
                ((start, 1.0, span as usize + 1), false)
            } else {
                (equal_width(min, max, MAX_BINS), true)
            }
        }
    };

    let mut bins: Vec<Bin> = (0..n)
        .map(|i| Bin {
            start: start + i as f64 * width,
            end: start + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();
    if let (true, Some(last)) = (snap_end && max > min, bins.last_mut()) {
        last.end = max;
    }

    for &v in &values {
        let idx = (((v - start) / width).floor() as usize).min(n - 1);
        bins[idx].count += 1;
    }
    bins
}

fn range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn equal_width(min: f64, max: f64, n: usize) -> (f64, f64, usize) {
    let n = n.clamp(1, MAX_BINS);
    let width = if max > min { (max - min) / n as f64 } else { 1.0 };
    (min, width, n)
}

fn sturges(len: usize) -> usize {
    (len as f64).log2().ceil() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(bins: &[Bin]) -> Vec<u64> {
        bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn age_group_edges() {
        assert_eq!(AgeGroup::of(15.0).map(AgeGroup::label), Some("10-19".to_string()));
        assert_eq!(AgeGroup::of(10.0).map(AgeGroup::start), Some(10));
        assert_eq!(AgeGroup::of(19.5).map(AgeGroup::start), Some(10));
        assert_eq!(AgeGroup::of(20.0).map(AgeGroup::start), Some(20));
        assert_eq!(AgeGroup::of(89.0).map(AgeGroup::label), Some("80-89".to_string()));
        assert_eq!(AgeGroup::of(5.0), None);
        assert_eq!(AgeGroup::of(90.0), None);
        assert_eq!(AgeGroup::of(95.0), None);
        assert_eq!(AgeGroup::of(f64::NAN), None);
    }

    #[test]
    fn unit_width_has_one_bin_per_year() {
        let bins = histogram(&[20.0, 22.0, 25.0], BinSpec::UnitWidth);
        assert_eq!(bins.len(), 6);
        assert_eq!(bins[0].start, 20.0);
        assert_eq!(bins[5].end, 26.0);
        assert_eq!(counts(&bins), vec![1, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn fixed_count_spans_range_and_keeps_max() {
        let bins = histogram(&[0.0, 5.0, 9.0, 10.0], BinSpec::Count(2));
        assert_eq!(bins.len(), 2);
        assert_eq!((bins[0].start, bins[0].end), (0.0, 5.0));
        assert_eq!((bins[1].start, bins[1].end), (5.0, 10.0));
        assert_eq!(counts(&bins), vec![1, 3]);
    }

    #[test]
    fn single_value_lands_in_first_bin() {
        let bins = histogram(&[30.0, 30.0], BinSpec::Count(10));
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 2);
    }

    #[test]
    fn auto_uses_sturges() {
        let values: Vec<f64> = (0..16).map(|v| v as f64).collect();
        let bins = histogram(&values, BinSpec::Auto);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 16);
    }

    #[test]
    fn wide_unit_range_is_capped() {
        let bins = histogram(&[20.0, 1e13], BinSpec::UnitWidth);
        assert_eq!(bins.len(), MAX_BINS);
        assert_eq!(bins[0].start, 20.0);
        assert_eq!(bins[MAX_BINS - 1].end, 1e13);
        assert_eq!(counts(&bins).iter().sum::<u64>(), 2);
        assert_eq!(bins[MAX_BINS - 1].count, 1);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let values = [20.0, f64::INFINITY, 25.0, f64::NAN, f64::NEG_INFINITY];
        let unit = histogram(&values, BinSpec::UnitWidth);
        assert_eq!(unit.len(), 6);
        assert_eq!(counts(&unit).iter().sum::<u64>(), 2);

        let fixed = histogram(&values, BinSpec::Count(25));
        assert_eq!(fixed.len(), 25);
        assert!(fixed.iter().all(|b| b.start.is_finite() && b.end.is_finite()));

        assert!(histogram(&[f64::INFINITY], BinSpec::Auto).is_empty());
    }

    #[test]
    fn empty_input_has_no_bins() {
        assert!(histogram(&[], BinSpec::Count(25)).is_empty());
        assert!(histogram(&[], BinSpec::UnitWidth).is_empty());
    }
}
