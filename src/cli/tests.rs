//! CLI module tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use super::args::{Args, Command, RunOptions};
use super::commands::{execute, resolve_config, run_cli};
use super::output::{render_histogram, render_json, render_presets, render_report};
use crate::domains::histogram::Histogram;
use crate::domains::population::DistributionPreset;
use crate::domains::statistics::SummaryStats;
use crate::error::SimError;

fn small_config_file(extra: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "population:\n  size: 4000\n{extra}").unwrap();
    file
}

fn run_opts(path: PathBuf) -> RunOptions {
    RunOptions {
        config_path: Some(path),
        ..RunOptions::default()
    }
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["clt-sim"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        assert_eq!(Args::parse_from(["clt-sim", flag]).command, Command::Help);
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        assert_eq!(Args::parse_from(["clt-sim", flag]).command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command_shows_help() {
    let args = Args::parse_from(["clt-sim", "simulate"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_presets() {
    let args = Args::parse_from(["clt-sim", "presets"]);
    assert_eq!(args.command, Command::Presets);
}

#[test]
fn test_parse_run_defaults() {
    let args = Args::parse_from(["clt-sim", "run"]);
    assert_eq!(args.command, Command::Run(RunOptions::default()));
    assert!(!args.verbose());
}

#[test]
fn test_parse_run_all_options() {
    let args = Args::parse_from([
        "clt-sim",
        "run",
        "--distribution",
        "Exponential",
        "--sample-size",
        "12",
        "--samples",
        "800",
        "--seed",
        "7",
        "--config",
        "clt.yaml",
        "--json",
        "--verbose",
    ]);
    let expected = RunOptions {
        config_path: Some(PathBuf::from("clt.yaml")),
        distribution: Some(DistributionPreset::Exponential),
        sample_size: Some(12),
        sample_count: Some(800),
        seed_override: Some(7),
        json: true,
        verbose: true,
    };
    assert_eq!(args.command, Command::Run(expected));
    assert!(args.verbose());
}

#[test]
fn test_parse_run_short_flags() {
    let args = Args::parse_from(["clt-sim", "run", "-d", "normal", "-n", "1", "-s", "1000", "-v"]);
    let Command::Run(opts) = args.command else {
        panic!("expected run command");
    };
    assert_eq!(opts.distribution, Some(DistributionPreset::Normal));
    assert_eq!(opts.sample_size, Some(1));
    assert_eq!(opts.sample_count, Some(1000));
    assert!(opts.verbose);
}

#[test]
fn test_parse_run_missing_value_shows_help() {
    let args = Args::parse_from(["clt-sim", "run", "--seed"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_bad_values_show_help() {
    for bad in [
        ["clt-sim", "run", "--sample-size", "ten"],
        ["clt-sim", "run", "--samples", "-3"],
        ["clt-sim", "run", "--distribution", "cauchy"],
    ] {
        assert_eq!(Args::parse_from(bad).command, Command::Help, "{bad:?}");
    }
}

#[test]
fn test_parse_run_unknown_option_shows_help() {
    let args = Args::parse_from(["clt-sim", "run", "--fast"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_run_cli_help_version_presets_succeed() {
    for command in [Command::Help, Command::Version, Command::Presets] {
        assert_eq!(run_cli(Args { command }), ExitCode::SUCCESS);
    }
}

#[test]
fn test_resolve_config_applies_overrides() {
    let file = small_config_file("sampling:\n  distribution: normal\n  sample_size: 5");
    let opts = RunOptions {
        sample_count: Some(77),
        seed_override: Some(99),
        ..run_opts(file.path().to_path_buf())
    };
    let config = resolve_config(&opts).unwrap();
    assert_eq!(config.population.size, 4000);
    assert_eq!(config.sampling.distribution, DistributionPreset::Normal);
    assert_eq!(config.sampling.sample_size, 5);
    assert_eq!(config.sampling.sample_count, 77);
    assert_eq!(config.reproducibility.seed, 99);
}

#[test]
fn test_resolve_config_without_file_uses_defaults() {
    let config = resolve_config(&RunOptions::default()).unwrap();
    assert_eq!(config.sampling.distribution, DistributionPreset::Uniform);
    assert_eq!(config.sampling.sample_size, 30);
    assert_eq!(config.sampling.sample_count, 500);
}

#[test]
fn test_execute_is_reproducible() {
    let file = small_config_file("");
    let opts = RunOptions {
        sample_size: Some(4),
        sample_count: Some(60),
        ..run_opts(file.path().to_path_buf())
    };
    let a = execute(&opts).unwrap();
    let b = execute(&opts).unwrap();
    assert_eq!(a.sample_means.values(), b.sample_means.values());
}

#[test]
fn test_execute_out_of_range_is_parameter_error() {
    let file = small_config_file("");
    let opts = RunOptions {
        sample_size: Some(501),
        ..run_opts(file.path().to_path_buf())
    };
    assert!(matches!(
        execute(&opts).unwrap_err(),
        SimError::InvalidParameter { .. }
    ));
}

#[test]
fn test_execute_missing_config_is_io_error() {
    let opts = run_opts(PathBuf::from("/nonexistent/clt.yaml"));
    assert!(matches!(execute(&opts).unwrap_err(), SimError::Io(_)));
}

#[test]
fn test_run_cli_failure_exit_code() {
    let opts = RunOptions {
        sample_count: Some(0),
        ..RunOptions::default()
    };
    assert_eq!(run_cli(Args { command: Command::Run(opts) }), ExitCode::FAILURE);
}

#[test]
fn test_run_cli_json_success() {
    let file = small_config_file("");
    let opts = RunOptions {
        sample_count: Some(20),
        json: true,
        ..run_opts(file.path().to_path_buf())
    };
    assert_eq!(run_cli(Args { command: Command::Run(opts) }), ExitCode::SUCCESS);
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_render_presets_lists_all() {
    let text = render_presets();
    assert!(text.contains("uniform"));
    assert!(text.contains("with mean 5 and standard deviation 2"));
    assert!(text.contains("with a scale of 2"));
}

#[test]
fn test_render_report_key_observations() {
    let file = small_config_file("");
    let opts = RunOptions {
        sample_size: Some(30),
        sample_count: Some(100),
        ..run_opts(file.path().to_path_buf())
    };
    let run = execute(&opts).unwrap();
    let report = render_report(&run);
    assert!(report.contains("Population: Uniform from 0 to 10"));
    assert!(report.contains("Sample Means (n=30, samples=100)"));
    assert!(report.contains(&format!("{:.2}", run.summary.population_mean)));
    assert!(report.contains(&format!("{:.4}", run.summary.standard_error)));
    // One line per histogram bin.
    let bars = report.lines().filter(|l| l.contains('│')).count();
    assert!(bars >= run.means_histogram.bins());
}

#[test]
fn test_render_histogram_zero_standard_error() {
    let hist = Histogram::density(&[3.0; 5], 4).unwrap();
    let summary = SummaryStats {
        population_mean: 3.0,
        population_std_dev: 0.0,
        standard_error: 0.0,
        sample_size: 10,
    };
    let text = render_histogram(&hist, &summary);
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("(0.0000)"));
}

#[test]
fn test_render_json_contains_summary() {
    let file = small_config_file("");
    let opts = RunOptions {
        distribution: Some(DistributionPreset::Exponential),
        sample_count: Some(25),
        ..run_opts(file.path().to_path_buf())
    };
    let run = execute(&opts).unwrap();
    let json = render_json(&run).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["params"]["distribution"], "exponential");
    assert_eq!(value["params"]["sample_count"], 25);
    assert!(value["summary"]["standard_error"].as_f64().unwrap() > 0.0);
    assert!(value.get("population").is_none());
}
