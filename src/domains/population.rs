//! Population generation.
//!
//! A population is a finite, immutable set of i.i.d. draws from one of three
//! distribution families. Resampling later draws from this finite set, never
//! from the theoretical distribution itself.

use serde::{Deserialize, Serialize};

use crate::engine::rng::SimRng;
use crate::error::{SimError, SimResult};

/// Default number of values in a generated population.
pub const DEFAULT_POPULATION_SIZE: usize = 100_000;

/// A parametrized distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum DistributionSpec {
    /// Continuous uniform over `[low, high)`.
    Uniform {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
    /// Gaussian.
    Normal {
        /// Location.
        mean: f64,
        /// Scale, must be positive.
        stddev: f64,
    },
    /// Exponential with `mean = scale`.
    Exponential {
        /// Scale (inverse rate), must be positive.
        scale: f64,
    },
}

impl DistributionSpec {
    /// Check parameters for this family.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a bound is not finite, `high <= low`,
    /// `stddev <= 0` or `scale <= 0`.
    pub fn validate(&self) -> SimResult<()> {
        match *self {
            Self::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(SimError::invalid_parameter(
                        "uniform bounds",
                        format!("must be finite, got [{low}, {high})"),
                    ));
                }
                if high <= low {
                    return Err(SimError::invalid_parameter(
                        "high",
                        format!("must exceed low ({low}), got {high}"),
                    ));
                }
            }
            Self::Normal { mean, stddev } => {
                if !mean.is_finite() {
                    return Err(SimError::invalid_parameter(
                        "mean",
                        format!("must be finite, got {mean}"),
                    ));
                }
                if !(stddev.is_finite() && stddev > 0.0) {
                    return Err(SimError::invalid_parameter(
                        "stddev",
                        format!("must be finite and > 0, got {stddev}"),
                    ));
                }
            }
            Self::Exponential { scale } => {
                if !(scale.is_finite() && scale > 0.0) {
                    return Err(SimError::invalid_parameter(
                        "scale",
                        format!("must be finite and > 0, got {scale}"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Theoretical mean of the family.
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Uniform { low, high } => (low + high) / 2.0,
            Self::Normal { mean, .. } => mean,
            Self::Exponential { scale } => scale,
        }
    }

    /// Theoretical standard deviation of the family.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        match *self {
            Self::Uniform { low, high } => (high - low) / 12.0_f64.sqrt(),
            Self::Normal { stddev, .. } => stddev,
            Self::Exponential { scale } => scale,
        }
    }

    /// Draw a single value. Parameters must already be validated.
    fn sample(&self, rng: &mut SimRng) -> f64 {
        match *self {
            Self::Uniform { low, high } => rng.gen_range_f64(low, high),
            Self::Normal { mean, stddev } => rng.gen_normal(mean, stddev),
            Self::Exponential { scale } => rng.gen_exponential(scale),
        }
    }
}

/// The three named presets offered to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionPreset {
    /// Uniform from 0 to 10.
    #[default]
    Uniform,
    /// Normal with mean 5 and standard deviation 2.
    Normal,
    /// Exponential with scale 2.
    Exponential,
}

impl DistributionPreset {
    /// All presets, in display order.
    pub const ALL: [Self; 3] = [Self::Uniform, Self::Normal, Self::Exponential];

    /// Concrete distribution parameters for this preset.
    #[must_use]
    pub const fn spec(self) -> DistributionSpec {
        match self {
            Self::Uniform => DistributionSpec::Uniform {
                low: 0.0,
                high: 10.0,
            },
            Self::Normal => DistributionSpec::Normal {
                mean: 5.0,
                stddev: 2.0,
            },
            Self::Exponential => DistributionSpec::Exponential { scale: 2.0 },
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Normal => "Normal",
            Self::Exponential => "Exponential",
        }
    }

    /// Human-readable parameter description, e.g. "from 0 to 10".
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Uniform => "from 0 to 10",
            Self::Normal => "with mean 5 and standard deviation 2",
            Self::Exponential => "with a scale of 2",
        }
    }
}

impl std::fmt::Display for DistributionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DistributionPreset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "normal" => Ok(Self::Normal),
            "exponential" => Ok(Self::Exponential),
            other => Err(SimError::invalid_parameter(
                "distribution",
                format!("unknown preset '{other}' (expected uniform, normal or exponential)"),
            )),
        }
    }
}

/// A generated population. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    spec: DistributionSpec,
    values: Vec<f64>,
}

impl Population {
    /// Wrap existing values as a population (e.g. loaded or hand-built data).
    #[must_use]
    pub fn from_values(spec: DistributionSpec, values: Vec<f64>) -> Self {
        Self { spec, values }
    }

    /// Distribution the values were drawn from.
    #[must_use]
    pub const fn spec(&self) -> &DistributionSpec {
        &self.spec
    }

    /// The population values in generation order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the population holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, `None` if empty.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest value, `None` if empty.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Generate `size` i.i.d. values from `spec`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `size` is zero or the distribution
/// parameters are invalid, and `NonFiniteValue` if a draw is not finite.
///
/// # Example
///
/// ```rust
/// use clt_sim::domains::population::{generate, DistributionPreset};
/// use clt_sim::engine::rng::SimRng;
///
/// let mut rng = SimRng::new(42);
/// let population = generate(&DistributionPreset::Uniform.spec(), 1_000, &mut rng).unwrap();
/// assert_eq!(population.len(), 1_000);
/// ```
pub fn generate(spec: &DistributionSpec, size: usize, rng: &mut SimRng) -> SimResult<Population> {
    if size == 0 {
        return Err(SimError::invalid_parameter(
            "population size",
            "must be positive, got 0",
        ));
    }
    spec.validate()?;

    let mut values = Vec::with_capacity(size);
    for i in 0..size {
        let v = spec.sample(rng);
        if !v.is_finite() {
            return Err(SimError::NonFiniteValue {
                location: format!("population[{i}]"),
            });
        }
        values.push(v);
    }

    Ok(Population {
        spec: *spec,
        values,
    })
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_generate_length_and_finite(
            seed in 0u64..10_000,
            size in 1usize..2_000,
            preset_idx in 0usize..3,
        ) {
            let mut rng = SimRng::new(seed);
            let pop = generate(&DistributionPreset::ALL[preset_idx].spec(), size, &mut rng).unwrap();
            prop_assert_eq!(pop.len(), size);
            prop_assert!(pop.values().iter().all(|v| v.is_finite()));
        }

        #[test]
        fn prop_uniform_within_bounds(
            seed in 0u64..10_000,
            low in -1_000.0f64..1_000.0,
            width in 0.001f64..1_000.0,
        ) {
            let high = low + width;
            let spec = DistributionSpec::Uniform { low, high };
            let mut rng = SimRng::new(seed);
            let pop = generate(&spec, 200, &mut rng).unwrap();
            prop_assert!(pop.values().iter().all(|&v| v >= low && v < high));
        }
    }
}
