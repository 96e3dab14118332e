//! CLI command handlers.

use std::process::ExitCode;

use log::error;

use super::args::{Args, Command, RunOptions};
use super::output::{print_help, print_presets, print_report, print_version, render_json};
use crate::config::SimConfig;
use crate::engine::{CltEngine, RunParams, SimulationRun};
use crate::error::SimResult;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(opts) => run_simulation(&opts),
        Command::Presets => {
            print_presets();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run one simulation and print its report.
#[must_use]
pub fn run_simulation(opts: &RunOptions) -> ExitCode {
    let run = match execute(opts) {
        Ok(run) => run,
        Err(e) => {
            error!("run failed: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match render_json(&run) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&run);
    }
    ExitCode::SUCCESS
}

/// Resolve the configuration for `opts`: the file if given, otherwise the
/// defaults, with command-line overrides applied on top.
///
/// # Errors
///
/// Returns error if the configuration file cannot be read or parsed.
pub fn resolve_config(opts: &RunOptions) -> SimResult<SimConfig> {
    let mut config = match &opts.config_path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    if let Some(seed) = opts.seed_override {
        config.reproducibility.seed = seed;
    }
    if let Some(distribution) = opts.distribution {
        config.sampling.distribution = distribution;
    }
    if let Some(n) = opts.sample_size {
        config.sampling.sample_size = n;
    }
    if let Some(n) = opts.sample_count {
        config.sampling.sample_count = n;
    }
    Ok(config)
}

/// Resolve the configuration and execute a single run.
///
/// Out-of-range counts are reported as parameter errors by the engine
/// rather than as configuration validation failures.
///
/// # Errors
///
/// Returns error if configuration loading, validation or the run fails.
pub fn execute(opts: &RunOptions) -> SimResult<SimulationRun> {
    let config = resolve_config(opts)?;
    let params = RunParams::from(&config);
    params.validate()?;
    let mut engine = CltEngine::new(config)?;
    engine.run(&params)
}
