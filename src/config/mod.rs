//! Configuration system with YAML schema and validation.
//!
//! Implements Poka-Yoke (mistake-proofing) through:
//! - Type-safe configuration structs
//! - Schema validation via serde (`deny_unknown_fields`) and `validator`
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::domains::curve::{DEFAULT_CURVE_MARGIN, DEFAULT_CURVE_RESOLUTION};
use crate::domains::histogram::DEFAULT_HISTOGRAM_BINS;
use crate::domains::population::{DistributionPreset, DEFAULT_POPULATION_SIZE};
use crate::error::{SimError, SimResult};

/// Smallest allowed sample size.
pub const MIN_SAMPLE_SIZE: usize = 1;
/// Largest allowed sample size.
pub const MAX_SAMPLE_SIZE: usize = 500;
/// Smallest allowed number of samples.
pub const MIN_SAMPLE_COUNT: usize = 1;
/// Largest allowed number of samples.
pub const MAX_SAMPLE_COUNT: usize = 10_000;

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Reproducibility settings.
    #[validate(nested)]
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Population generation settings.
    #[validate(nested)]
    #[serde(default)]
    pub population: PopulationConfig,

    /// Default resampling parameters.
    #[validate(nested)]
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Settings for the render-ready outputs (curve, histograms).
    #[validate(nested)]
    #[serde(default)]
    pub presentation: PresentationConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl SimConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SimResult<String> {
        serde_yaml::to_string(self).map_err(|e| SimError::serialization(e.to_string()))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Run schema constraints followed by semantic checks.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for range violations and `Config` for semantic
    /// inconsistencies.
    pub fn validate_all(&self) -> SimResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate everything except the `sampling` defaults.
    ///
    /// Used by the engine, which checks sample parameters per run.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for range violations and `Config` for semantic
    /// inconsistencies.
    pub fn validate_engine_settings(&self) -> SimResult<()> {
        self.reproducibility.validate()?;
        self.population.validate()?;
        self.presentation.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> SimResult<()> {
        let margin = self.presentation.curve_margin;
        if !margin.is_finite() {
            return Err(SimError::config("curve_margin must be finite"));
        }
        if self.schema_version != "1.0" {
            return Err(SimError::config(format!(
                "unsupported schema_version '{}' (expected 1.0)",
                self.schema_version
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            population: PopulationConfig::default(),
            sampling: SamplingConfig::default(),
            presentation: PresentationConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SimConfigBuilder {
    seed: Option<u64>,
    distribution: Option<DistributionPreset>,
    sample_size: Option<usize>,
    sample_count: Option<usize>,
    population_size: Option<usize>,
}

impl SimConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the population distribution preset.
    #[must_use]
    pub const fn distribution(mut self, preset: DistributionPreset) -> Self {
        self.distribution = Some(preset);
        self
    }

    /// Set the number of values per sample.
    #[must_use]
    pub const fn sample_size(mut self, n: usize) -> Self {
        self.sample_size = Some(n);
        self
    }

    /// Set the number of samples.
    #[must_use]
    pub const fn sample_count(mut self, n: usize) -> Self {
        self.sample_count = Some(n);
        self
    }

    /// Set the population size.
    #[must_use]
    pub const fn population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    /// Build the configuration. Call [`SimConfig::validate_all`] to check it.
    #[must_use]
    pub fn build(self) -> SimConfig {
        let mut config = SimConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }
        if let Some(preset) = self.distribution {
            config.sampling.distribution = preset;
        }
        if let Some(n) = self.sample_size {
            config.sampling.sample_size = n;
        }
        if let Some(n) = self.sample_count {
            config.sampling.sample_count = n;
        }
        if let Some(n) = self.population_size {
            config.population.size = n;
        }

        config
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Master seed for all RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Population generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PopulationConfig {
    /// Number of values drawn for each population.
    #[validate(range(min = 1))]
    #[serde(default = "default_population_size")]
    pub size: usize,
}

const fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_population_size(),
        }
    }
}

/// Resampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    /// Population distribution preset.
    #[serde(default)]
    pub distribution: DistributionPreset,
    /// Values per sample.
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Number of samples.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

const fn default_sample_size() -> usize {
    30
}

const fn default_sample_count() -> usize {
    500
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            distribution: DistributionPreset::default(),
            sample_size: default_sample_size(),
            sample_count: default_sample_count(),
        }
    }
}

/// Render-ready output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PresentationConfig {
    /// Points along the theoretical curve.
    #[validate(range(min = 2))]
    #[serde(default = "default_curve_resolution")]
    pub curve_resolution: usize,
    /// Histogram bin count.
    #[validate(range(min = 1))]
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Padding on each side of the sample-mean range, as a fraction of it.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_curve_margin")]
    pub curve_margin: f64,
}

const fn default_curve_resolution() -> usize {
    DEFAULT_CURVE_RESOLUTION
}

const fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

const fn default_curve_margin() -> f64 {
    DEFAULT_CURVE_MARGIN
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            curve_resolution: default_curve_resolution(),
            histogram_bins: default_histogram_bins(),
            curve_margin: default_curve_margin(),
        }
    }
}
