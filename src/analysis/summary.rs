//! Summary statistics over numeric samples

use serde::Serialize;

/// Immutable snapshot of a numeric sample's distribution
///
/// Policy: an empty sample yields all-zero fields and a single-element
/// sample yields stdev 0, by convention rather than error - downstream
/// reports must render cleanly for Safes with little or no history.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub stdev: f64,
}

impl SummaryStats {
    /// Compute the distribution snapshot for `sample`
    ///
    /// Standard deviation is the sample (n-1) form, used consistently for
    /// both signing and execution latencies so the two are comparable.
    pub fn from_sample(sample: &[f64]) -> Self {
        if sample.is_empty() {
            return Self::default();
        }

        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let stdev = if sample.len() > 1 {
            let variance =
                sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        Self {
            min,
            max,
            mean,
            median,
            stdev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_all_zero() {
        let stats = SummaryStats::from_sample(&[]);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.stdev, 0.0);
    }

    #[test]
    fn test_single_element_sample() {
        let stats = SummaryStats::from_sample(&[10.0]);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 10.0);
        assert_eq!(stats.median, 10.0);
        assert_eq!(stats.stdev, 0.0);
    }

    #[test]
    fn test_even_sample_median_averages_middle_pair() {
        let stats = SummaryStats::from_sample(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Sample stdev of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 denominator
        let stats = SummaryStats::from_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        assert!((stats.stdev - 2.13809).abs() < 1e-5);
        assert_eq!(stats.median, 4.5);
    }

    #[test]
    fn test_unsorted_input() {
        let stats = SummaryStats::from_sample(&[9.0, 1.0, 5.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.median, 5.0);
    }
}
