//! Theoretical normal curve for overlaying on the sample-mean histogram.
//!
//! # Governing Equation
//!
//! ```text
//! pdf(x) = 1 / (σ·√(2π)) · exp(-(x - μ)² / (2σ²))
//! ```
//!
//! with `μ` the population mean and `σ` the standard error.

use serde::{Deserialize, Serialize};

use super::statistics::min_max;
use crate::error::{SimError, SimResult};

/// Default number of evaluation points along the curve.
pub const DEFAULT_CURVE_RESOLUTION: usize = 1000;

/// Default fractional padding applied on each side of the data range.
pub const DEFAULT_CURVE_MARGIN: f64 = 0.05;

/// A single `(x, density)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Position on the x axis.
    pub x: f64,
    /// Normal density at `x`.
    pub density: f64,
}

/// Closed interval `[min, max]` the curve is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Left end.
    pub min: f64,
    /// Right end.
    pub max: f64,
}

impl Domain {
    /// Create a domain.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Evenly spaced evaluations of the normal density.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePoints {
    mean: f64,
    stddev: f64,
    points: Vec<CurvePoint>,
}

impl CurvePoints {
    /// Mean the curve was evaluated with.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation the curve was evaluated with.
    #[must_use]
    pub const fn stddev(&self) -> f64 {
        self.stddev
    }

    /// The evaluated points, ordered by `x`.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Trapezoidal approximation of the area under the points.
    #[must_use]
    pub fn integrate_trapezoid(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].density + w[1].density) / 2.0)
            .sum()
    }
}

/// Normal probability density. `stddev` must be positive.
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, stddev: f64) -> f64 {
    let z = (x - mean) / stddev;
    (-0.5 * z * z).exp() / (stddev * (2.0 * std::f64::consts::PI).sqrt())
}

/// Evaluate the normal density at `resolution` evenly spaced points across
/// `domain`, endpoints included.
///
/// A resolution of 1 yields the single point `domain.min`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `stddev <= 0`, `resolution == 0`, any input
/// is not finite, or `domain.min > domain.max`.
///
/// # Example
///
/// ```rust
/// use clt_sim::domains::curve::{curve, Domain};
///
/// let pts = curve(0.0, 1.0, Domain::new(-8.0, 8.0), 2001).unwrap();
/// assert!((pts.integrate_trapezoid() - 1.0).abs() < 1e-6);
/// ```
pub fn curve(mean: f64, stddev: f64, domain: Domain, resolution: usize) -> SimResult<CurvePoints> {
    if !(stddev.is_finite() && stddev > 0.0) {
        return Err(SimError::invalid_parameter(
            "stddev",
            format!("must be finite and > 0, got {stddev}"),
        ));
    }
    if !mean.is_finite() {
        return Err(SimError::invalid_parameter(
            "mean",
            format!("must be finite, got {mean}"),
        ));
    }
    if resolution == 0 {
        return Err(SimError::invalid_parameter(
            "resolution",
            "must be positive, got 0",
        ));
    }
    if !(domain.min.is_finite() && domain.max.is_finite()) || domain.min > domain.max {
        return Err(SimError::invalid_parameter(
            "domain",
            format!("expected finite min <= max, got [{}, {}]", domain.min, domain.max),
        ));
    }

    let step = if resolution > 1 {
        domain.width() / (resolution - 1) as f64
    } else {
        0.0
    };

    let points = (0..resolution)
        .map(|i| {
            // Pin the last point so rounding never overshoots the domain.
            let x = if i + 1 == resolution && resolution > 1 {
                domain.max
            } else {
                domain.min + step * i as f64
            };
            CurvePoint {
                x,
                density: normal_pdf(x, mean, stddev),
            }
        })
        .collect();

    Ok(CurvePoints {
        mean,
        stddev,
        points,
    })
}

/// Derive the plotting domain from observed values: their range widened by
/// `margin * width` on each side.
///
/// When all values coincide the domain is `[v - 0.5, v + 0.5]`.
///
/// # Errors
///
/// Returns `InvalidInput` if `values` is empty and `InvalidParameter` if
/// `margin` is negative or not finite.
pub fn curve_domain(values: &[f64], margin: f64) -> SimResult<Domain> {
    if !(margin.is_finite() && margin >= 0.0) {
        return Err(SimError::invalid_parameter(
            "margin",
            format!("must be finite and >= 0, got {margin}"),
        ));
    }
    let (lo, hi) = min_max(values)
        .ok_or_else(|| SimError::invalid_input("cannot derive a domain from no values"))?;

    let width = hi - lo;
    if width <= 0.0 {
        return Ok(Domain::new(lo - 0.5, hi + 0.5));
    }
    let pad = margin * width;
    Ok(Domain::new(lo - pad, hi + pad))
}
