//! Descriptive statistics over integer datasets.
//!
//! Everything is computed once, up front, by [`Summary::from_values`]. Sums
//! and ranges are kept in `i128` so no dataset of `i64` values overflows.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::StatsError;

/// The three quartiles of a dataset.
///
/// Computed with the median-of-halves method: Q1 and Q3 are the medians of
/// the lower and upper halves of the sorted data. For an odd count the
/// median itself belongs to neither half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range, `Q3 - Q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Descriptive statistics of a non-empty dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    sorted: Vec<i64>,
    sum: i128,
    mean: f64,
    median: f64,
    modes: Vec<i64>,
    variance: f64,
    quartiles: Option<Quartiles>,
    frequencies: BTreeMap<i64, usize>,
}

impl Summary {
    /// Compute every statistic for `values`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabstat::stats::Summary;
    ///
    /// let summary = Summary::from_values(&[4, 1, 3, 1]).unwrap();
    /// assert_eq!(summary.mean(), 2.25);
    /// assert_eq!(summary.median(), 2.0);
    /// assert_eq!(summary.modes(), &[1]);
    /// ```
    pub fn from_values(values: &[i64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptyDataset);
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let count = sorted.len() as f64;
        let sum: i128 = sorted.iter().map(|&v| i128::from(v)).sum();
        let mean = sum as f64 / count;
        let variance = sorted
            .iter()
            .map(|&v| {
                let delta = v as f64 - mean;
                delta * delta
            })
            .sum::<f64>()
            / count;

        let mut frequencies = BTreeMap::new();
        for &value in &sorted {
            *frequencies.entry(value).or_insert(0usize) += 1;
        }
        let top = frequencies.values().copied().max().unwrap_or(0);
        let modes = if top > 1 {
            frequencies
                .iter()
                .filter(|&(_, &n)| n == top)
                .map(|(&value, _)| value)
                .collect()
        } else {
            Vec::new()
        };

        let median = median_of(&sorted);
        let quartiles = quartiles_of(&sorted);

        debug!(count = sorted.len(), distinct = frequencies.len(), "computed summary");
        Ok(Summary {
            sorted,
            sum,
            mean,
            median,
            modes,
            variance,
            quartiles,
            frequencies,
        })
    }

    pub fn count(&self) -> usize {
        self.sorted.len()
    }

    pub fn sum(&self) -> i128 {
        self.sum
    }

    pub fn min(&self) -> i64 {
        self.sorted[0]
    }

    pub fn max(&self) -> i64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// `max - min`.
    pub fn range(&self) -> i128 {
        i128::from(self.max()) - i128::from(self.min())
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    /// The most frequent values, ascending. Empty when no value repeats.
    pub fn modes(&self) -> &[i64] {
        &self.modes
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Quartiles, or `None` for fewer than two values.
    pub fn quartiles(&self) -> Option<Quartiles> {
        self.quartiles
    }

    pub fn iqr(&self) -> Option<f64> {
        self.quartiles.map(|q| q.iqr())
    }

    /// The values in ascending order.
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }

    /// Occurrences of each distinct value, ascending by value.
    pub fn frequencies(&self) -> &BTreeMap<i64, usize> {
        &self.frequencies
    }
}

fn median_of(sorted: &[i64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

fn quartiles_of(sorted: &[i64]) -> Option<Quartiles> {
    let n = sorted.len();
    if n < 2 {
        return None;
    }
    let lower = &sorted[..n / 2];
    let upper = &sorted[(n + 1) / 2..];
    Some(Quartiles {
        q1: median_of(lower),
        q2: median_of(sorted),
        q3: median_of(upper),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert_eq!(Summary::from_values(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn single_value() {
        let s = Summary::from_values(&[7]).unwrap();
        assert_eq!(s.count(), 1);
        assert_eq!(s.min(), 7);
        assert_eq!(s.max(), 7);
        assert_eq!(s.range(), 0);
        assert_eq!(s.mean(), 7.0);
        assert_eq!(s.median(), 7.0);
        assert!(s.modes().is_empty());
        assert_eq!(s.variance(), 0.0);
        assert_eq!(s.quartiles(), None);
        assert_eq!(s.iqr(), None);
    }

    #[test]
    fn basic_statistics() {
        let s = Summary::from_values(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(s.sum(), 40);
        assert_eq!(s.mean(), 5.0);
        assert_eq!(s.median(), 4.5);
        assert_eq!(s.modes(), &[4]);
        assert!(close(s.variance(), 4.0));
        assert!(close(s.std_dev(), 2.0));
        assert_eq!(s.range(), 7);
    }

    #[test]
    fn quartiles_even_count() {
        let s = Summary::from_values(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let q = s.quartiles().unwrap();
        assert_eq!((q.q1, q.q2, q.q3), (2.5, 4.5, 6.5));
        assert_eq!(s.iqr(), Some(4.0));
    }

    #[test]
    fn quartiles_odd_count_excludes_median() {
        let s = Summary::from_values(&[6, 7, 15, 36, 39, 40, 41, 42, 43, 47, 49]).unwrap();
        let q = s.quartiles().unwrap();
        assert_eq!((q.q1, q.q2, q.q3), (15.0, 40.0, 43.0));
    }

    #[test]
    fn quartiles_two_values() {
        let q = Summary::from_values(&[3, 9]).unwrap().quartiles().unwrap();
        assert_eq!((q.q1, q.q2, q.q3), (3.0, 6.0, 9.0));
    }

    #[test]
    fn multiple_modes_ascending() {
        let s = Summary::from_values(&[3, 1, 3, 1, 2]).unwrap();
        assert_eq!(s.modes(), &[1, 3]);
    }

    #[test]
    fn all_unique_has_no_mode() {
        let s = Summary::from_values(&[5, 3, 1]).unwrap();
        assert!(s.modes().is_empty());
    }

    #[test]
    fn frequencies_ascending() {
        let s = Summary::from_values(&[2, -1, 2, 0]).unwrap();
        let pairs: Vec<(i64, usize)> = s.frequencies().iter().map(|(&v, &n)| (v, n)).collect();
        assert_eq!(pairs, vec![(-1, 1), (0, 1), (2, 2)]);
        assert_eq!(s.sorted(), &[-1, 0, 2, 2]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let s = Summary::from_values(&[i64::MIN, i64::MAX]).unwrap();
        assert_eq!(s.sum(), -1);
        assert_eq!(s.range(), i128::from(u64::MAX));
    }
}
