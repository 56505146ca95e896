//! stderr logging for the `strata` binary.
//!
//! The library crates emit `tracing` events and never install a subscriber;
//! [`init_logging`] is the one place that does. The threshold comes from
//! `-q`/`-v` (quiet is `error`, no flag is `warn`, then `info`, `debug`,
//! `trace` per `-v`) and applies to all three strata crates alike. A set
//! `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the process-wide subscriber. A second call fails.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn filter_directives(level: &str) -> String {
    format!("strata={level},strata_core={level},strata_adapters={level}")
}

/// `EnvFilter` level for the given flags; `--quiet` beats any `-v`.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
