//! cal — two-integer arithmetic CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use cal::calc;
use cal::config::Config;
use cal::constants;
use cal::env::Env;
use cal::input;
use cal::logging;
use cal::models::OutputFormat;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Version) = cli.command {
        return run_version();
    }

    let env = Env::real();
    logging::init(cli.verbose, &env);

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(cli.config.as_deref(), &cwd, &env)
        .context("failed to load configuration")?;
    config.apply_overrides(&cli.overrides());
    debug!(?config, "resolved configuration");

    let policy = config.input.on_invalid;
    let operands = match cli.operands() {
        Some(tokens) => input::parse_operands(&tokens, policy)?,
        None => {
            if config.output.format == OutputFormat::Text && !cli.quiet {
                input::prompt(&mut io::stdout().lock()).context("failed to write prompt")?;
            }
            input::read_operands(io::stdin().lock(), policy)?
        }
    };

    let report = calc::evaluate(operands);
    let rendered = config.output.format.render(&report, config.output.precision);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write results")?;

    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
