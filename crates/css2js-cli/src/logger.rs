//! Logging infrastructure for the css2js CLI.
//!
//! Structured logging on top of the `tracing` ecosystem, with verbosity
//! levels, colored output, and `RUST_LOG` overrides.
//!
//! # Example
//!
//! ```rust,no_run
//! use css2js_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting conversion");
//! debug!("Reading chunk from: {}", "main.css");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "css2js=debug,css2js_cli=debug";

/// Filter used with `--quiet`.
const QUIET_FILTER: &str = "css2js=error,css2js_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "css2js=warn,css2js_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for css2js crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN for the library, INFO for the CLI
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = build_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // stdout may carry converted output
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
