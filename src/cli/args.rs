//! CLI argument parsing.
//!
//! Parsing accepts any iterator of strings so it can be tested without
//! touching `std::env::args()`.

use std::path::PathBuf;

use crate::domains::population::DistributionPreset;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options for the `run` command. `None` means "use the configuration".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Optional YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Distribution preset override.
    pub distribution: Option<DistributionPreset>,
    /// Sample size override.
    pub sample_size: Option<usize>,
    /// Sample count override.
    pub sample_count: Option<usize>,
    /// Seed override.
    pub seed_override: Option<u64>,
    /// Emit JSON instead of the text report.
    pub json: bool,
    /// Enable verbose (debug) logging.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one simulation and report it.
    Run(RunOptions),
    /// List the distribution presets.
    Presets,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether verbose logging was requested.
    #[must_use]
    pub fn verbose(&self) -> bool {
        matches!(&self.command, Command::Run(opts) if opts.verbose)
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "presets" => Command::Presets,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command options.
    fn parse_run_command(rest: &[String]) -> Command {
        let mut opts = RunOptions::default();

        let mut i = 0;
        while i < rest.len() {
            let flag = rest[i].as_str();
            match flag {
                "--json" => opts.json = true,
                "-v" | "--verbose" => opts.verbose = true,
                "--config" | "-c" | "--distribution" | "-d" | "--sample-size" | "-n"
                | "--samples" | "-s" | "--seed" => {
                    let Some(value) = rest.get(i + 1) else {
                        eprintln!("Error: '{flag}' requires a value");
                        return Command::Help;
                    };
                    if let Err(message) = Self::apply_value(&mut opts, flag, value) {
                        eprintln!("Error: {message}");
                        return Command::Help;
                    }
                    i += 1;
                }
                other => {
                    eprintln!("Error: unknown option '{other}' for 'run'");
                    return Command::Help;
                }
            }
            i += 1;
        }

        Command::Run(opts)
    }

    fn apply_value(opts: &mut RunOptions, flag: &str, value: &str) -> Result<(), String> {
        match flag {
            "--config" | "-c" => opts.config_path = Some(PathBuf::from(value)),
            "--distribution" | "-d" => {
                opts.distribution = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "--sample-size" | "-n" => opts.sample_size = Some(parse_number(flag, value)?),
            "--samples" | "-s" => opts.sample_count = Some(parse_number(flag, value)?),
            "--seed" => opts.seed_override = Some(parse_number(flag, value)?),
            _ => return Err(format!("unknown option '{flag}'")),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("'{flag}' expects a non-negative integer, got '{value}'"))
}
