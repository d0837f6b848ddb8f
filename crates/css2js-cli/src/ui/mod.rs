//! Terminal UI utilities for status messages and formatted output.
//!
//! Messages go to stderr so converted output can be piped from stdout.
//!
//! # Examples
//!
//! ```no_run
//! use css2js_cli::ui;
//!
//! ui::success("Converted 3 files");
//! ui::error("Failed to read main.css");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_size};
pub use messages::{error, info, success, warning};

/// Decide once whether status lines are colored.
///
/// `--no-color` wins; otherwise [`should_use_color`] decides.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}
