use std::ops::RangeInclusive;

use super::model::{Dataset, Entry};

// ---------------------------------------------------------------------------
// Thresholds: the two slider values
// ---------------------------------------------------------------------------

/// Current filter bounds. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Keep entries with `score >= min_score`.
    pub min_score: f64,
    /// Keep entries with `lowest_price <= max_price`.
    pub max_price: f64,
}

impl Thresholds {
    pub const SCORE_RANGE: RangeInclusive<f64> = 0.0..=5.0;
    pub const SCORE_STEP: f64 = 0.05;
    pub const DEFAULT_MIN_SCORE: f64 = 3.2;

    pub const PRICE_RANGE: RangeInclusive<f64> = 1000.0..=20000.0;
    pub const PRICE_STEP: f64 = 500.0;
    pub const DEFAULT_MAX_PRICE: f64 = 10000.0;

    pub fn new(min_score: f64, max_price: f64) -> Self {
        Thresholds {
            min_score,
            max_price,
        }
    }

    /// Clamp both bounds into their slider ranges.
    pub fn clamped(self) -> Self {
        Thresholds {
            min_score: self
                .min_score
                .clamp(*Self::SCORE_RANGE.start(), *Self::SCORE_RANGE.end()),
            max_price: self
                .max_price
                .clamp(*Self::PRICE_RANGE.start(), *Self::PRICE_RANGE.end()),
        }
    }

    /// Whether a single entry passes both bounds.
    pub fn accepts(&self, entry: &Entry) -> bool {
        entry.score >= self.min_score && entry.lowest_price <= self.max_price
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::new(Self::DEFAULT_MIN_SCORE, Self::DEFAULT_MAX_PRICE)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the entries accepted by `thresholds`, preserving input order.
pub fn filter<'a, I>(entries: I, thresholds: &Thresholds) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|e| thresholds.accepts(e))
        .collect()
}

/// Return indices of entries that pass both thresholds, in dataset order.
pub fn filtered_indices(dataset: &Dataset, thresholds: &Thresholds) -> Vec<usize> {
    dataset
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| thresholds.accepts(e))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::entry;

    fn sample() -> Dataset {
        Dataset::from_entries(
            vec![
                entry("A", 4.0, 1200.0),
                entry("B", 2.0, 800.0),
                entry("C", 4.5, 9999.0),
            ],
            0,
        )
    }

    #[test]
    fn default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.min_score, 3.2);
        assert_eq!(t.max_price, 10000.0);
    }

    #[test]
    fn scenario_excludes_low_score() {
        let ds = sample();
        let subset = filter(&ds.entries, &Thresholds::default());
        let names: Vec<&str> = subset.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(filtered_indices(&ds, &Thresholds::default()), vec![0, 2]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = Dataset::from_entries(vec![entry("edge", 3.2, 10000.0)], 0);
        assert_eq!(filtered_indices(&ds, &Thresholds::default()), vec![0]);
    }

    #[test]
    fn nothing_passes() {
        let ds = sample();
        assert!(filtered_indices(&ds, &Thresholds::new(5.0, 1000.0)).is_empty());
    }

    #[test]
    fn clamped_snaps_into_slider_ranges() {
        let t = Thresholds::new(-1.0, 50000.0).clamped();
        assert_eq!(t, Thresholds::new(0.0, 20000.0));
    }

    fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec((0.0f64..=5.0, 0.0f64..=25000.0), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (score, price))| entry(&format!("e{i}"), score, price))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn subset_is_exactly_the_accepted_entries(
            entries in arb_entries(),
            min in 0.0f64..=5.0,
            max in 1000.0f64..=20000.0,
        ) {
            let t = Thresholds::new(min, max);
            let subset = filter(&entries, &t);
            for e in &subset {
                prop_assert!(e.score >= min && e.lowest_price <= max);
            }
            let excluded = entries.iter().filter(|e| !subset.iter().any(|s| std::ptr::eq(*s, *e)));
            for e in excluded {
                prop_assert!(!(e.score >= min && e.lowest_price <= max));
            }
        }

        #[test]
        fn filter_is_idempotent(
            entries in arb_entries(),
            min in 0.0f64..=5.0,
            max in 1000.0f64..=20000.0,
        ) {
            let t = Thresholds::new(min, max);
            let once = filter(&entries, &t);
            let twice = filter(once.iter().copied(), &t);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn widening_never_shrinks(
            entries in arb_entries(),
            min in 0.0f64..=5.0,
            max in 1000.0f64..=20000.0,
            dmin in 0.0f64..=5.0,
            dmax in 0.0f64..=19000.0,
        ) {
            let narrow = filter(&entries, &Thresholds::new(min, max));
            let wide = filter(&entries, &Thresholds::new(min - dmin, max + dmax));
            prop_assert!(wide.len() >= narrow.len());
            for e in &narrow {
                prop_assert!(wide.iter().any(|w| std::ptr::eq(*w, *e)));
            }
        }
    }
}
