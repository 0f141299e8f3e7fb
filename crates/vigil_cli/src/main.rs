//! Vigil CLI — the command-line interface for the Vigil verification engine.
//!
//! Provides `vigil list` to show the available benches and `vigil run` to
//! verify one or more circuits against their behavioural DUTs.

#![warn(missing_docs)]

mod list;
mod logging;
mod run;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Vigil — transaction-level verification for small digital circuits.
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about = "Vigil Verification Engine")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `vigil.toml` file or the directory containing it.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available benches and their default policies.
    List,
    /// Run benches against their behavioural DUTs.
    Run(RunArgs),
}

/// Arguments for the `vigil run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Specific bench to run (default: all).
    pub bench: Option<String>,

    /// Substring filter for bench names.
    #[arg(long)]
    pub filter: Option<String>,

    /// Seed of the random stimulus stream.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stimulus policy.
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Random transactions under the fixed-count policy.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Iteration cap under the coverage-closure policy.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_iterations: Option<u64>,

    /// Per-transaction apply/observe timeout in milliseconds (0 disables).
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Corrupt every N-th DUT output to check the checker.
    #[arg(long, default_value_t = 0)]
    pub corrupt_every: u64,

    /// Output format for run summaries.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Print the full coverage report after each summary.
    #[arg(long)]
    pub coverage_report: bool,
}

/// Stimulus policy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Directed vectors then a fixed number of random ones.
    Fixed,
    /// Random stimulus until every coverage bin is hit.
    Coverage,
}

/// Run summary output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable status lines.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::List => list::run(&global),
        Command::Run(ref args) => run::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
