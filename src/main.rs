//! clt-sim CLI - Central Limit Theorem simulation engine
//!
//! Command-line interface for running CLT simulations.

use std::process::ExitCode;

use clt_sim::cli::{run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run_cli(args)
}
