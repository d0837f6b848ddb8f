//! Options for a single CSS-to-JavaScript conversion job.

use serde::{Deserialize, Serialize};

/// Configuration for escaping and wrapping one stylesheet.
///
/// Every field has a default, so partial configuration files and
/// environment overrides deserialize cleanly. Keys use camelCase on the wire
/// (`splitOnNewline`, `trimSpacesBeforeNewline`, ...).
///
/// # Example
///
/// ```rust
/// use css2js::Css2JsOptions;
///
/// let options = Css2JsOptions::new()
///     .with_split_on_newline(false)
///     .with_prefix("var css = \"")
///     .with_suffix("\";");
///
/// assert!(options.trim_trailing_newline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Css2JsOptions {
    /// Break the output into `"..." +` concatenated literals at every newline
    pub split_on_newline: bool,

    /// Drop spaces and tabs that sit right before a newline
    pub trim_spaces_before_newline: bool,

    /// Omit newlines at the very end of the input
    pub trim_trailing_newline: bool,

    /// Replaces the default `<style>` injection prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Replaces the default `<style>` injection suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Css2JsOptions {
    /// Options with every default applied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split_on_newline(mut self, enabled: bool) -> Self {
        self.split_on_newline = enabled;
        self
    }

    pub fn with_trim_spaces_before_newline(mut self, enabled: bool) -> Self {
        self.trim_spaces_before_newline = enabled;
        self
    }

    pub fn with_trim_trailing_newline(mut self, enabled: bool) -> Self {
        self.trim_trailing_newline = enabled;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

impl Default for Css2JsOptions {
    fn default() -> Self {
        Self {
            split_on_newline: true,
            trim_spaces_before_newline: true,
            trim_trailing_newline: true,
            prefix: None,
            suffix: None,
        }
    }
}
