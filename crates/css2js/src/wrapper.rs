//! Prefix/suffix assembly around an escaped stylesheet body.
//!
//! The default wrapper is a small ES5 snippet that creates a `<style>` element
//! in `document.head` and assigns the CSS text to it. It is shipped as two
//! asset files and embedded verbatim.

use crate::options::Css2JsOptions;

/// Opening half of the default `<style>` injection snippet. Ends with the
/// opening quote of the CSS string argument.
pub const DEFAULT_PREFIX: &str = include_str!("../assets/prefix.js");

/// Closing half of the default `<style>` injection snippet.
pub const DEFAULT_SUFFIX: &str = include_str!("../assets/suffix.js");

/// Resolved prefix and suffix for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper<'a> {
    prefix: &'a str,
    suffix: &'a str,
}

impl<'a> Wrapper<'a> {
    /// Custom `prefix`/`suffix` options replace the defaults as-is.
    pub fn new(options: &'a Css2JsOptions) -> Self {
        Self {
            prefix: options.prefix.as_deref().unwrap_or(DEFAULT_PREFIX),
            suffix: options.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX),
        }
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(body);
        out.push_str(self.suffix);
        out
    }
}

/// Wrap an escaped body with the prefix and suffix selected by `options`.
pub fn wrap(body: &str, options: &Css2JsOptions) -> String {
    Wrapper::new(options).wrap(body)
}
