//! Command-line interface.
//!
//! All CLI logic lives here so it can be tested; `main.rs` only parses
//! arguments, installs the logger and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{execute, resolve_config, run_cli, run_simulation};
pub use output::{
    print_help, print_presets, print_report, print_version, render_histogram, render_json,
    render_presets, render_report, RunSummary,
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
