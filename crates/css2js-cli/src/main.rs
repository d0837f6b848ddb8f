//! css2js CLI - embed CSS into JavaScript.
//!
//! This is the main entry point for the css2js CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use css2js_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = commands::convert_execute(args.convert, args.quiet).await;

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
