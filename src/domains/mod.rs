//! Statistical building blocks of a CLT demonstration.
//!
//! Each domain module is a stateless stage of the pipeline:
//! - Population: finite synthetic data from one of three distribution families
//! - Resample: repeated sampling with replacement, reduced to means
//! - Statistics: population mean, standard deviation and standard error
//! - Curve: theoretical normal density of the sample mean
//! - Histogram: density-normalised binning for display

pub mod curve;
pub mod histogram;
pub mod population;
pub mod resample;
pub mod statistics;

pub use curve::{curve, curve_domain, normal_pdf, CurvePoint, CurvePoints, Domain};
pub use histogram::Histogram;
pub use population::{generate, DistributionPreset, DistributionSpec, Population};
pub use resample::{resample, SampleMeans};
pub use statistics::{summarize, SummaryStats};
