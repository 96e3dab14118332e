//! Core simulation engine.
//!
//! Drives one full regeneration per parameter selection:
//!
//! ```text
//! preset ─▶ generate ─▶ population ─┬─▶ resample ─▶ sample means ─▶ curve domain ─┐
//!                                   └─▶ summarize ─▶ summary stats ───────────────┴─▶ curve
//! ```
//!
//! Every run owns its outputs. Nothing is cached between runs; the only state
//! carried forward is the RNG stream.

pub mod rng;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use rng::SimRng;

use crate::config::{
    SimConfig, MAX_SAMPLE_COUNT, MAX_SAMPLE_SIZE, MIN_SAMPLE_COUNT, MIN_SAMPLE_SIZE,
};
use crate::domains::curve::{curve, curve_domain, CurvePoints, Domain};
use crate::domains::histogram::Histogram;
use crate::domains::population::{generate, DistributionPreset, Population};
use crate::domains::resample::{resample, SampleMeans};
use crate::domains::statistics::{summarize, SummaryStats};
use crate::error::{SimError, SimResult};

/// The user's choices for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Population distribution preset.
    pub distribution: DistributionPreset,
    /// Values per sample.
    pub sample_size: usize,
    /// Number of samples.
    pub sample_count: usize,
}

impl RunParams {
    /// Create run parameters.
    #[must_use]
    pub const fn new(distribution: DistributionPreset, sample_size: usize, sample_count: usize) -> Self {
        Self {
            distribution,
            sample_size,
            sample_count,
        }
    }

    /// Check the parameters against the supported bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either count is outside its bounds.
    pub fn validate(&self) -> SimResult<()> {
        if !(MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE).contains(&self.sample_size) {
            return Err(SimError::invalid_parameter(
                "sample_size",
                format!(
                    "must be in [{MIN_SAMPLE_SIZE}, {MAX_SAMPLE_SIZE}], got {}",
                    self.sample_size
                ),
            ));
        }
        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return Err(SimError::invalid_parameter(
                "sample_count",
                format!(
                    "must be in [{MIN_SAMPLE_COUNT}, {MAX_SAMPLE_COUNT}], got {}",
                    self.sample_count
                ),
            ));
        }
        Ok(())
    }
}

impl From<&SimConfig> for RunParams {
    fn from(config: &SimConfig) -> Self {
        Self::new(
            config.sampling.distribution,
            config.sampling.sample_size,
            config.sampling.sample_count,
        )
    }
}

/// Everything one run produces, handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Parameters this run was produced with.
    pub params: RunParams,
    /// The generated population.
    pub population: Population,
    /// One mean per sample.
    pub sample_means: SampleMeans,
    /// Population aggregates and standard error.
    pub summary: SummaryStats,
    /// Domain the curve was evaluated over.
    pub domain: Domain,
    /// Theoretical normal density of the sample mean.
    pub curve: CurvePoints,
    /// Density histogram of the population.
    pub population_histogram: Histogram,
    /// Density histogram of the sample means.
    pub means_histogram: Histogram,
    /// Empirical mean of the sample means.
    pub means_mean: f64,
    /// Empirical standard deviation of the sample means.
    pub means_std_dev: f64,
}

/// Pipeline driver owning the configuration and the RNG stream.
#[derive(Debug, Clone)]
pub struct CltEngine {
    config: SimConfig,
    rng: SimRng,
    runs: u64,
}

impl CltEngine {
    /// Create an engine from a configuration.
    ///
    /// The `sampling` section only supplies defaults for
    /// [`CltEngine::run_default`] and is checked there, so explicit
    /// [`RunParams`] work even if those defaults are out of range.
    ///
    /// # Errors
    ///
    /// Returns error if the population, presentation or schema settings fail
    /// validation.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate_engine_settings()?;
        let rng = SimRng::new(config.reproducibility.seed);
        Ok(Self {
            config,
            rng,
            runs: 0,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed runs.
    #[must_use]
    pub const fn runs(&self) -> u64 {
        self.runs
    }

    /// Run with the parameters from the configuration's `sampling` section.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configured sample size or count is
    /// out of range; otherwise see [`CltEngine::run`].
    pub fn run_default(&mut self) -> SimResult<SimulationRun> {
        let params = RunParams::from(&self.config);
        self.run(&params)
    }

    /// Regenerate everything for `params`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for out-of-range parameters. A failed run
    /// produces no partial output.
    pub fn run(&mut self, params: &RunParams) -> SimResult<SimulationRun> {
        params.validate()?;
        let presentation = &self.config.presentation;

        let spec = params.distribution.spec();
        let population = generate(&spec, self.config.population.size, &mut self.rng)?;
        debug!(
            "generated {} population of {} values",
            params.distribution,
            population.len()
        );

        let sample_means = resample(
            &population,
            params.sample_size,
            params.sample_count,
            &mut self.rng,
        )?;
        debug!(
            "resampled {} means of size {}",
            sample_means.len(),
            sample_means.sample_size()
        );

        let summary = summarize(&population, params.sample_size)?;
        debug!(
            "population mean {:.4}, std {:.4}, standard error {:.4}",
            summary.population_mean, summary.population_std_dev, summary.standard_error
        );

        let domain = curve_domain(sample_means.values(), presentation.curve_margin)?;
        let curve = curve(
            summary.population_mean,
            summary.standard_error,
            domain,
            presentation.curve_resolution,
        )?;

        let population_histogram =
            Histogram::density(population.values(), presentation.histogram_bins)?;
        let means_histogram =
            Histogram::density(sample_means.values(), presentation.histogram_bins)?;

        let (Some(means_mean), Some(means_std_dev)) = (sample_means.mean(), sample_means.std_dev())
        else {
            return Err(SimError::invalid_input("resampling produced no means"));
        };

        self.runs += 1;
        info!(
            "run {} complete: {} n={} samples={} mean={:.2} se={:.4}",
            self.runs,
            params.distribution,
            params.sample_size,
            params.sample_count,
            summary.population_mean,
            summary.standard_error
        );

        Ok(SimulationRun {
            params: *params,
            population,
            sample_means,
            summary,
            domain,
            curve,
            population_histogram,
            means_histogram,
            means_mean,
            means_std_dev,
        })
    }
}
