//! Clap argument types and the mapping onto config overrides.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use cal::config::Overrides;
use cal::constants::MAX_PRECISION;
use cal::models::{InvalidInputPolicy, OutputFormat};

/// Read two integers and print their sum, difference, product and quotient.
///
/// With no operands on the command line, prompts and reads them from stdin.
#[derive(Parser, Debug)]
#[command(
    name = "cal",
    version = cal::constants::VERSION,
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// First operand (dividend). Read from stdin when omitted.
    #[arg(allow_negative_numbers = true, requires = "b")]
    pub a: Option<String>,

    /// Second operand (divisor).
    #[arg(allow_negative_numbers = true)]
    pub b: Option<String>,

    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Decimal places of the quotient (default: 2).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    pub precision: Option<u8>,

    /// How to handle a missing or non-integer operand.
    #[arg(long, value_name = "POLICY")]
    pub on_invalid: Option<InvalidInputPolicy>,

    /// Load this TOML file instead of ./.cal.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print the prompt before reading stdin.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print version and build information.
    Version,
}

impl Cli {
    /// Command-line values that override the loaded configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            precision: self.precision.map(usize::from),
            on_invalid: self.on_invalid,
        }
    }

    /// Operands given as positional arguments, if any.
    pub fn operands(&self) -> Option<[&str; 2]> {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => Some([a.as_str(), b.as_str()]),
            _ => None,
        }
    }
}
