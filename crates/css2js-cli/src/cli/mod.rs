//! Command-line interface definition for css2js.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Usage
//!
//! - `css2js styles/*.css` - Convert each stylesheet into a `.js` file next to it
//! - `css2js -d dist styles/main.css` - Write outputs into `dist/`
//! - `cat main.css | css2js -` - Stream stdin to stdout

mod args;
mod tests;
mod validation;

use clap::Parser;

pub use args::{ConvertArgs, STDIN_INPUT};
pub use validation::{parse_chunk_size, parse_jobs};

/// css2js - Embed CSS into JavaScript
#[derive(Parser, Debug)]
#[command(
    name = "css2js",
    version,
    about = "Embed CSS into JavaScript",
    long_about = "css2js converts stylesheets into JavaScript that injects them into the page\n\
                  through a generated <style> element. Files can be converted whole or\n\
                  streamed chunk by chunk; both produce identical output."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-job details such as the read mode and resolved encoding.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only failed jobs are reported. Useful for CI/CD environments.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub convert: ConvertArgs,
}
