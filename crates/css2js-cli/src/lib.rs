//! css2js CLI - embed CSS stylesheets into self-injecting JavaScript.
//!
//! This crate provides the command-line interface for the `css2js` library.
//! Every input file becomes one conversion job; jobs run concurrently and
//! fail independently.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap)
//! - [`config`] - Layered option loading (defaults, config file, env, flags)
//! - [`commands`] - The conversion command
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use css2js_cli::{cli::ConvertArgs, commands, logger};
//!
//! # async fn run() -> css2js_cli::Result<()> {
//! logger::init_logger(false, false, false);
//! let args = ConvertArgs {
//!     inputs: vec!["styles/main.css".into()],
//!     ..Default::default()
//! };
//! commands::convert_execute(args, false).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
