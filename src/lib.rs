//! # clt-sim
//!
//! Deterministic simulation engine for demonstrating the Central Limit
//! Theorem.
//!
//! A run draws a finite population from a chosen distribution, repeatedly
//! resamples it with replacement, and compares the distribution of the
//! sample means against the normal curve `N(μ, σ/√n)` the theorem predicts.
//!
//! ## Example
//!
//! ```rust
//! use clt_sim::prelude::*;
//!
//! let config = SimConfig::builder()
//!     .seed(42)
//!     .population_size(10_000)
//!     .build();
//! let mut engine = CltEngine::new(config).unwrap();
//!
//! let run = engine
//!     .run(&RunParams::new(DistributionPreset::Exponential, 30, 500))
//!     .unwrap();
//! assert_eq!(run.sample_means.len(), 500);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
)]

pub mod cli;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{SimConfig, SimConfigBuilder};
    pub use crate::domains::{
        CurvePoints, DistributionPreset, DistributionSpec, Domain, Histogram, Population,
        SampleMeans, SummaryStats,
    };
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::{CltEngine, RunParams, SimulationRun};
    pub use crate::error::{SimError, SimResult};
}

/// Re-export for public API
pub use error::{SimError, SimResult};
