//! Synthetic chart data for the finance dashboard.
//!
//! The spending trend and category charts are illustrative: they are not
//! derived from the dashboard inputs. A fresh set of samples is produced on
//! every refresh from a [`SampleSource`], which production code backs with a
//! random number generator and tests back with a fixed sequence.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{ChartSamples, MonthlyCategoryExpenses, EXPENSE_CATEGORY_COUNT};
use std::ops::RangeInclusive;

/// Number of months in the spending trend line
pub const TREND_MONTHS: usize = 12;
/// Number of months in the category bar chart
pub const CATEGORY_MONTHS: usize = 5;
/// Range of a single monthly spending sample
pub const SPENDING_RANGE: RangeInclusive<u32> = 20..=100;
/// Range of a single category expense sample
pub const CATEGORY_RANGE: RangeInclusive<u32> = 20..=60;

/// Source of integer samples for the charts
pub trait SampleSource: Send {
    /// Produce one sample within `range` (inclusive)
    fn next_sample(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniformly random samples
pub struct RandomSampleSource {
    rng: StdRng,
}

impl RandomSampleSource {
    /// Seed from the operating system; every launch differs
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SampleSource for RandomSampleSource {
    fn next_sample(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct SequenceSampleSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceSampleSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl SampleSource for SequenceSampleSource {
    fn next_sample(&mut self, range: RangeInclusive<u32>) -> u32 {
        if self.values.is_empty() {
            return *range.start();
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(*range.start(), *range.end())
    }
}

/// Produces chart samples for each refresh cycle
pub struct SampleDataService {
    source: Box<dyn SampleSource>,
}

impl SampleDataService {
    pub fn new(source: Box<dyn SampleSource>) -> Self {
        Self { source }
    }

    /// Draw a complete new set of samples for both charts
    pub fn next_samples(&mut self) -> ChartSamples {
        let monthly_spending: Vec<u32> = (0..TREND_MONTHS)
            .map(|_| self.source.next_sample(SPENDING_RANGE))
            .collect();

        let category_expenses: Vec<MonthlyCategoryExpenses> = (0..CATEGORY_MONTHS)
            .map(|_| {
                let mut month = [0; EXPENSE_CATEGORY_COUNT];
                for amount in month.iter_mut() {
                    *amount = self.source.next_sample(CATEGORY_RANGE);
                }
                month
            })
            .collect();

        debug!(
            "🎲 Generated samples: spending={:?} categories={:?}",
            monthly_spending, category_expenses
        );

        ChartSamples {
            monthly_spending,
            category_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shapes() {
        let mut service = SampleDataService::new(Box::new(RandomSampleSource::seeded(7)));
        let samples = service.next_samples();

        assert_eq!(samples.monthly_spending.len(), TREND_MONTHS);
        assert_eq!(samples.category_expenses.len(), CATEGORY_MONTHS);
    }

    #[test]
    fn test_random_samples_stay_in_range() {
        let mut service = SampleDataService::new(Box::new(RandomSampleSource::seeded(42)));
        for _ in 0..50 {
            let samples = service.next_samples();
            assert!(samples.monthly_spending.iter().all(|v| SPENDING_RANGE.contains(v)));
            assert!(samples
                .category_expenses
                .iter()
                .flatten()
                .all(|v| CATEGORY_RANGE.contains(v)));
        }
    }

    #[test]
    fn test_same_seed_same_samples() {
        let mut first = SampleDataService::new(Box::new(RandomSampleSource::seeded(99)));
        let mut second = SampleDataService::new(Box::new(RandomSampleSource::seeded(99)));
        assert_eq!(first.next_samples(), second.next_samples());
    }

    #[test]
    fn test_sequence_source_fills_spending_then_categories() {
        let values: Vec<u32> = (21..=47).collect();
        let mut service = SampleDataService::new(Box::new(SequenceSampleSource::new(values)));
        let samples = service.next_samples();

        assert_eq!(samples.monthly_spending, (21..=32).collect::<Vec<u32>>());
        assert_eq!(samples.category_expenses[0], [33, 34, 35]);
        assert_eq!(samples.category_expenses[4], [45, 46, 47]);
    }

    #[test]
    fn test_sequence_source_clamps_and_wraps() {
        let mut source = SequenceSampleSource::new(vec![5, 500]);
        assert_eq!(source.next_sample(20..=60), 20);
        assert_eq!(source.next_sample(20..=60), 60);
        assert_eq!(source.next_sample(20..=100), 20);
    }

    #[test]
    fn test_empty_sequence_returns_range_start() {
        let mut source = SequenceSampleSource::new(Vec::new());
        assert_eq!(source.next_sample(20..=100), 20);
    }
}
