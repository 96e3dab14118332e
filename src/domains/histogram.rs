//! Density-normalised histograms.
//!
//! Bins are equal-width over the observed range. Every bin is half-open
//! `[left, right)` except the last, which also includes its right edge, so
//! the maximum value is always counted. Densities are `count / (n * width)`,
//! so the bar areas sum to one.

use serde::{Deserialize, Serialize};

use super::statistics::min_max;
use crate::error::{SimError, SimResult};

/// Default number of bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// A binned view of a set of values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
    densities: Vec<f64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning their range.
    ///
    /// If every value is identical the range becomes `[v - 0.5, v + 0.5]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `values` is empty or holds a non-finite value,
    /// and `InvalidParameter` if `bins` is zero.
    pub fn density(values: &[f64], bins: usize) -> SimResult<Self> {
        if bins == 0 {
            return Err(SimError::invalid_parameter("bins", "must be positive, got 0"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SimError::invalid_input("histogram values must be finite"));
        }
        let (mut lo, mut hi) = min_max(values)
            .ok_or_else(|| SimError::invalid_input("cannot bin an empty sequence"))?;
        if hi <= lo {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let n = values.len() as f64;
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, e)| c as f64 / (n * (e[1] - e[0])))
            .collect();

        Ok(Self {
            edges,
            counts,
            densities,
        })
    }

    /// Bin edges, `bins + 1` values.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Raw counts per bin.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Normalised density per bin.
    #[must_use]
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Midpoint of each bin.
    #[must_use]
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| (e[0] + e[1]) / 2.0).collect()
    }

    /// Total number of binned values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_edges() {
        let h = Histogram::density(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.bins(), 4);
        assert_eq!(h.edges(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        // Max value falls into the last, closed bin.
        assert_eq!(h.counts(), &[1, 1, 1, 2]);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn test_density_area_is_one() {
        let values: Vec<f64> = (0..997).map(|i| (f64::from(i) * 0.37).sin() * 3.0).collect();
        let h = Histogram::density(&values, 50).unwrap();
        let area: f64 = h
            .densities()
            .iter()
            .zip(h.edges().windows(2))
            .map(|(d, e)| d * (e[1] - e[0]))
            .sum();
        assert!((area - 1.0).abs() < 1e-12);
        assert_eq!(h.total(), 997);
    }

    #[test]
    fn test_constant_values() {
        let h = Histogram::density(&[2.0; 7], 10).unwrap();
        assert_eq!(h.edges()[0], 1.5);
        assert_eq!(h.edges()[10], 2.5);
        assert_eq!(h.total(), 7);
    }

    #[test]
    fn test_centers() {
        let h = Histogram::density(&[0.0, 10.0], 2).unwrap();
        assert_eq!(h.centers(), vec![2.5, 7.5]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Histogram::density(&[], 10).unwrap_err(),
            SimError::InvalidInput(_)
        ));
        assert!(matches!(
            Histogram::density(&[1.0], 0).unwrap_err(),
            SimError::InvalidParameter { .. }
        ));
        assert!(Histogram::density(&[1.0, f64::NAN], 3).is_err());
    }
}
