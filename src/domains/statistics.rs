//! Descriptive statistics for populations and sample means.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, so the error of a 100 000
//!   element mean does not grow with `n`.
//! - **Standard deviation**: two-pass over the data around the compensated
//!   mean, population convention (divide by `N`).
//!
//! The `N` denominator matches a fully enumerated synthetic population. The
//! Bessel-corrected (`N - 1`) variant is exposed as [`sample_std_dev`] for
//! comparison only; [`summarize`] never uses it.

use serde::{Deserialize, Serialize};

use super::population::Population;
use crate::error::{SimError, SimResult};

/// Aggregates derived from a population and the configured sample size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean of all population values.
    pub population_mean: f64,
    /// Population standard deviation (divide by `N`).
    pub population_std_dev: f64,
    /// `population_std_dev / sqrt(sample_size)`.
    pub standard_error: f64,
    /// Sample size the standard error was derived from.
    pub sample_size: usize,
}

/// Compensated sum (Neumaier's variant of Kahan summation).
#[must_use]
pub fn compensated_sum(data: &[f64]) -> f64 {
    compensated_sum_by(data, |x| x)
}

/// Neumaier-compensated sum of `f(x)` over `data`, without materializing
/// the mapped values.
fn compensated_sum_by(data: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &raw in data {
        let x = f(raw);
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Arithmetic mean, `None` if `data` is empty.
#[must_use]
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(compensated_sum(data) / data.len() as f64)
}

/// Population variance (denominator `n`), `None` if `data` is empty.
#[must_use]
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let ss = compensated_sum_by(data, |x| (x - m) * (x - m));
    Some(ss / data.len() as f64)
}

/// Population standard deviation (denominator `n`).
#[must_use]
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Bessel-corrected standard deviation (denominator `n - 1`).
///
/// `None` if `data.len() < 2`.
#[must_use]
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    population_variance(data).map(|v| (v * n as f64 / (n - 1) as f64).sqrt())
}

/// Smallest and largest value, `None` if `data` is empty.
#[must_use]
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

/// Compute mean, standard deviation and standard error for `population`.
///
/// # Errors
///
/// Returns `InvalidInput` if the population is empty and `InvalidParameter`
/// if `sample_size` is zero.
///
/// # Example
///
/// ```rust
/// use clt_sim::domains::population::{DistributionPreset, Population};
/// use clt_sim::domains::statistics::summarize;
///
/// let pop = Population::from_values(DistributionPreset::Uniform.spec(), vec![2.0, 4.0, 6.0, 8.0]);
/// let stats = summarize(&pop, 4).unwrap();
/// assert!((stats.population_mean - 5.0).abs() < 1e-12);
/// assert!((stats.standard_error - stats.population_std_dev / 2.0).abs() < 1e-12);
/// ```
pub fn summarize(population: &Population, sample_size: usize) -> SimResult<SummaryStats> {
    if sample_size == 0 {
        return Err(SimError::invalid_parameter(
            "sample_size",
            "must be positive, got 0",
        ));
    }
    let values = population.values();
    let (Some(population_mean), Some(population_std_dev)) =
        (mean(values), population_std_dev(values))
    else {
        return Err(SimError::invalid_input("cannot summarize an empty population"));
    };

    Ok(SummaryStats {
        population_mean,
        population_std_dev,
        standard_error: population_std_dev / (sample_size as f64).sqrt(),
        sample_size,
    })
}
