//! Repeated resampling of a finite population.
//!
//! Each sample is `sample_size` independent index picks over the population
//! (with replacement), reduced to its arithmetic mean. This is the hot loop:
//! `sample_count * sample_size` draws, up to 5 000 000 at the default bounds.

use serde::{Deserialize, Serialize};

use super::population::Population;
use super::statistics::{mean, min_max, population_std_dev};
use crate::engine::rng::SimRng;
use crate::error::{SimError, SimResult};

/// Means of repeated samples drawn from a population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleMeans {
    sample_size: usize,
    values: Vec<f64>,
}

impl SampleMeans {
    /// Number of values averaged into each mean.
    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// The means, one per sample, in draw order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully resampled sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Empirical mean of the sample means.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        mean(&self.values)
    }

    /// Empirical standard deviation of the sample means (divide by `N`).
    ///
    /// Converges to the standard error as the sample count grows.
    #[must_use]
    pub fn std_dev(&self) -> Option<f64> {
        population_std_dev(&self.values)
    }

    /// Observed `(min, max)` of the sample means.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }
}

/// Draw `sample_count` samples of `sample_size` values with replacement and
/// return their means.
///
/// The population is only read.
///
/// # Errors
///
/// Returns `InvalidInput` if the population is empty and `InvalidParameter`
/// if `sample_size` or `sample_count` is zero.
///
/// # Example
///
/// ```rust
/// use clt_sim::domains::population::{generate, DistributionPreset};
/// use clt_sim::domains::resample::resample;
/// use clt_sim::engine::rng::SimRng;
///
/// let mut rng = SimRng::new(42);
/// let population = generate(&DistributionPreset::Exponential.spec(), 10_000, &mut rng).unwrap();
/// let means = resample(&population, 30, 500, &mut rng).unwrap();
/// assert_eq!(means.len(), 500);
/// ```
pub fn resample(
    population: &Population,
    sample_size: usize,
    sample_count: usize,
    rng: &mut SimRng,
) -> SimResult<SampleMeans> {
    if population.is_empty() {
        return Err(SimError::invalid_input("cannot resample an empty population"));
    }
    if sample_size == 0 {
        return Err(SimError::invalid_parameter(
            "sample_size",
            "must be positive, got 0",
        ));
    }
    if sample_count == 0 {
        return Err(SimError::invalid_parameter(
            "sample_count",
            "must be positive, got 0",
        ));
    }

    let data = population.values();
    let len = data.len();
    let divisor = sample_size as f64;

    let mut values = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        let mut sum = 0.0;
        for _ in 0..sample_size {
            // len > 0 was checked above
            let idx = rng.gen_index(len).unwrap_or(0);
            sum += data[idx];
        }
        values.push(sum / divisor);
    }

    Ok(SampleMeans {
        sample_size,
        values,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domains::population::{generate, DistributionPreset};
    use crate::domains::statistics::summarize;

    fn small_population() -> Population {
        Population::from_values(
            DistributionPreset::Uniform.spec(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
    }

    #[test]
    fn test_resample_length() {
        let mut rng = SimRng::new(42);
        let means = resample(&small_population(), 5, 321, &mut rng).unwrap();
        assert_eq!(means.len(), 321);
        assert_eq!(means.sample_size(), 5);
        assert!(!means.is_empty());
    }

    #[test]
    fn test_resample_within_population_range() {
        let mut rng = SimRng::new(42);
        let means = resample(&small_population(), 3, 1000, &mut rng).unwrap();
        let (lo, hi) = means.range().unwrap();
        assert!(lo >= 1.0 && hi <= 9.0);
    }

    /// With sample_size = 1 every mean is a single population element.
    #[test]
    fn test_sample_size_one_draws_members() {
        let pop = small_population();
        let mut rng = SimRng::new(5);
        let means = resample(&pop, 1, 500, &mut rng).unwrap();
        assert!(means.values().iter().all(|m| pop.values().contains(m)));
    }

    #[test]
    fn test_resample_does_not_mutate_population() {
        let pop = small_population();
        let before = pop.values().to_vec();
        let mut rng = SimRng::new(1);
        let _ = resample(&pop, 10, 100, &mut rng).unwrap();
        assert_eq!(pop.values(), before.as_slice());
    }

    #[test]
    fn test_resample_empty_population() {
        let pop = Population::from_values(DistributionPreset::Normal.spec(), Vec::new());
        let err = resample(&pop, 10, 10, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn test_resample_zero_parameters() {
        let pop = small_population();
        let mut rng = SimRng::new(1);
        assert!(matches!(
            resample(&pop, 0, 10, &mut rng).unwrap_err(),
            SimError::InvalidParameter { .. }
        ));
        assert!(matches!(
            resample(&pop, 10, 0, &mut rng).unwrap_err(),
            SimError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_resample_reproducible() {
        let pop = small_population();
        let a = resample(&pop, 30, 100, &mut SimRng::new(77)).unwrap();
        let b = resample(&pop, 30, 100, &mut SimRng::new(77)).unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_spread_shrinks_toward_standard_error() {
        let mut rng = SimRng::new(2024);
        let pop = generate(&DistributionPreset::Exponential.spec(), 50_000, &mut rng).unwrap();

        for n in [4usize, 16, 64, 256] {
            let means = resample(&pop, n, 4000, &mut rng).unwrap();
            let se = summarize(&pop, n).unwrap().standard_error;
            let sd = means.std_dev().unwrap();
            assert!(
                (sd / se - 1.0).abs() < 0.06,
                "n={n}: empirical sd {sd} vs standard error {se}"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use crate::domains::population::DistributionPreset;

    proptest! {
        #[test]
        fn prop_means_bounded_by_population(
            values in prop::collection::vec(-1e3f64..1e3, 1..50),
            sample_size in 1usize..40,
            sample_count in 1usize..60,
            seed in 0u64..10_000,
        ) {
            let pop = Population::from_values(DistributionPreset::Normal.spec(), values);
            let lo = pop.min().unwrap();
            let hi = pop.max().unwrap();
            let means = resample(&pop, sample_size, sample_count, &mut SimRng::new(seed)).unwrap();

            prop_assert_eq!(means.len(), sample_count);
            for &m in means.values() {
                prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9, "{} outside [{}, {}]", m, lo, hi);
            }
        }
    }
}
