//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr so stdout carries nothing but the prompt and
//! results. `CAL_LOG` takes an `EnvFilter` directive and wins over the
//! `-v` count. Colour is used only when stderr is a terminal.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Map the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `CAL_LOG`, falling back to the verbosity level.
pub fn build_filter(verbose: u8, env: &Env) -> EnvFilter {
    env.var(ENV_LOG)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, env: &Env) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(build_filter(verbose, env))
        .try_init();
}
