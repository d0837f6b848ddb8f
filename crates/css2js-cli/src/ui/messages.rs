//! Status message functions for terminal output.
//!
//! Colors go through `if_supports_color`, so they follow the override set by
//! [`init_colors`](super::init_colors).

use owo_colors::{OwoColorize, Stream};

/// Print a success message to stderr.
///
/// ```no_run
/// use css2js_cli::ui::success;
///
/// success("Converted 2 files");
/// ```
pub fn success(message: &str) {
    eprintln!("{}", success_line(message));
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{}", info_line(message));
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{}", warning_line(message));
}

/// Print an error message to stderr.
///
/// ```no_run
/// use css2js_cli::ui::error;
///
/// error("Failed to read styles/main.css");
/// ```
pub fn error(message: &str) {
    eprintln!("{}", error_line(message));
}

fn success_line(message: &str) -> String {
    format!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |s| s.green().bold().to_string()),
        message
    )
}

fn info_line(message: &str) -> String {
    format!(
        "{} {}",
        "ℹ".if_supports_color(Stream::Stderr, |s| s.blue().bold().to_string()),
        message
    )
}

fn warning_line(message: &str) -> String {
    format!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |s| s.yellow().bold().to_string()),
        message.if_supports_color(Stream::Stderr, |s| s.yellow())
    )
}

fn error_line(message: &str) -> String {
    format!(
        "{} {}",
        "✗".if_supports_color(Stream::Stderr, |s| s.red().bold().to_string()),
        message.if_supports_color(Stream::Stderr, |s| s.red())
    )
}
