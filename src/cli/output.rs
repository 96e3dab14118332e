//! CLI output formatting.
//!
//! Rendering is split into `render_*` functions returning strings so the
//! exact text can be tested; the `print_*` wrappers only write to stdout.

use serde::Serialize;

use crate::domains::curve::{normal_pdf, Domain};
use crate::domains::histogram::Histogram;
use crate::domains::population::DistributionPreset;
use crate::domains::statistics::SummaryStats;
use crate::engine::{RunParams, SimulationRun};
use crate::error::{SimError, SimResult};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: usize = 40;

/// Print version information.
pub fn print_version() {
    match option_env!("CLT_SIM_GIT_HASH") {
        Some(hash) => println!("clt-sim {} ({hash})", env!("CARGO_PKG_VERSION")),
        None => println!("clt-sim {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"clt-sim - Central Limit Theorem simulation engine

USAGE:
    clt-sim <COMMAND> [OPTIONS]

COMMANDS:
    run                         Generate a population, resample it and report
        -c, --config <FILE>     Load settings from a YAML file
        -d, --distribution <D>  uniform | normal | exponential
        -n, --sample-size <N>   Values per sample (1-500)
        -s, --samples <N>       Number of samples (1-10000)
        --seed <N>              Override the configured seed
        --json                  Print the run summary as JSON
        -v, --verbose           Enable debug logging

    presets                     List the available distributions
    help                        Show this help message
    version                     Show version information

EXAMPLES:
    clt-sim run
    clt-sim run -d exponential -n 1 -s 1000
    clt-sim run --config clt.yaml --seed 7 --json

Set RUST_LOG to control log output (e.g. RUST_LOG=clt_sim=debug).
"
    );
}

/// Render the preset list.
#[must_use]
pub fn render_presets() -> String {
    let mut out = String::from("Available distributions:\n");
    for preset in DistributionPreset::ALL {
        let spec = preset.spec();
        out.push_str(&format!(
            "  {:<12} {:<40} (μ = {:.3}, σ = {:.3})\n",
            preset.name().to_lowercase(),
            preset.description(),
            spec.mean(),
            spec.std_dev()
        ));
    }
    out
}

/// Print the preset list.
pub fn print_presets() {
    print!("{}", render_presets());
}

/// Render one bar-chart line per histogram bin, alongside the theoretical
/// density at the bin center.
#[must_use]
pub fn render_histogram(hist: &Histogram, summary: &SummaryStats) -> String {
    let centers = hist.centers();
    let expected: Vec<f64> = if summary.standard_error > 0.0 {
        centers
            .iter()
            .map(|&x| normal_pdf(x, summary.population_mean, summary.standard_error))
            .collect()
    } else {
        vec![0.0; centers.len()]
    };

    let peak = hist
        .densities()
        .iter()
        .chain(expected.iter())
        .copied()
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for ((center, density), normal) in centers.iter().zip(hist.densities()).zip(&expected) {
        let len = if peak > 0.0 {
            ((density / peak) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let marker = if peak > 0.0 {
            ((normal / peak) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let mut bar: Vec<char> = std::iter::repeat('█')
            .take(len)
            .chain(std::iter::repeat(' '))
            .take(BAR_WIDTH + 1)
            .collect();
        if let Some(slot) = bar.get_mut(marker.min(BAR_WIDTH)) {
            *slot = '│';
        }
        let bar: String = bar.into_iter().collect();
        out.push_str(&format!(
            "{center:>10.4} {bar} {density:>8.4} ({normal:.4})\n"
        ));
    }
    out
}

/// Render the full text report for a run.
#[must_use]
pub fn render_report(run: &SimulationRun) -> String {
    let params = &run.params;
    let summary = &run.summary;
    let mut out = String::new();

    out.push_str(&format!("{RULE}\n"));
    out.push_str(&format!(
        "Population: {} {}\n",
        params.distribution,
        params.distribution.description()
    ));
    out.push_str(&format!(
        "Sample Means (n={}, samples={})\n",
        params.sample_size, params.sample_count
    ));
    out.push_str(&format!("{RULE}\n\n"));

    out.push_str("Key Parameters:\n");
    out.push_str(&format!(
        "  Population mean (μ):                 {:.2}\n",
        summary.population_mean
    ));
    out.push_str(&format!(
        "  Population std dev (σ):              {:.4}\n",
        summary.population_std_dev
    ));
    out.push_str(&format!(
        "  Theoretical standard error (σ/√n):   {:.4}\n",
        summary.standard_error
    ));
    out.push_str(&format!(
        "  Observed mean of sample means:       {:.4}\n",
        run.means_mean
    ));
    out.push_str(&format!(
        "  Observed std dev of sample means:    {:.4}\n",
        run.means_std_dev
    ));
    out.push_str(&format!(
        "  Curve domain:                        [{:.4}, {:.4}]\n\n",
        run.domain.min, run.domain.max
    ));

    out.push_str("Distribution of Sample Means (│ = CLT normal density):\n");
    out.push_str(&render_histogram(&run.means_histogram, summary));
    out.push_str(&format!("\n{RULE}\n"));
    out
}

/// Print the full text report for a run.
pub fn print_report(run: &SimulationRun) {
    print!("{}", render_report(run));
}

/// Compact, serializable view of a run.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    /// Parameters of the run.
    pub params: &'a RunParams,
    /// Population aggregates.
    pub summary: &'a SummaryStats,
    /// Observed mean of the sample means.
    pub means_mean: f64,
    /// Observed standard deviation of the sample means.
    pub means_std_dev: f64,
    /// Curve domain.
    pub domain: &'a Domain,
    /// Sample-mean histogram.
    pub means_histogram: &'a Histogram,
}

impl<'a> From<&'a SimulationRun> for RunSummary<'a> {
    fn from(run: &'a SimulationRun) -> Self {
        Self {
            params: &run.params,
            summary: &run.summary,
            means_mean: run.means_mean,
            means_std_dev: run.means_std_dev,
            domain: &run.domain,
            means_histogram: &run.means_histogram,
        }
    }
}

/// Render the run summary as pretty JSON.
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails.
pub fn render_json(run: &SimulationRun) -> SimResult<String> {
    serde_json::to_string_pretty(&RunSummary::from(run))
        .map_err(|e| SimError::serialization(e.to_string()))
}
