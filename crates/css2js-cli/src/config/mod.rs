//! Configuration loading for css2js with multi-source merging.
//!
//! Merges conversion options from CLI flags, environment variables, and a
//! config file. Priority: CLI > Environment > File > Defaults

mod loading;

use crate::cli::ConvertArgs;
use serde::Serialize;

pub use loading::{load_options, snake_to_camel};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "css2js.config.json";

/// Prefix of environment variables such as `CSS2JS_SPLIT_ON_NEWLINE`.
pub const ENV_PREFIX: &str = "CSS2JS_";

/// Option keys accepted from the environment (after the prefix).
pub(crate) const ENV_KEYS: &[&str] = &[
    "split_on_newline",
    "trim_spaces_before_newline",
    "trim_trailing_newline",
    "prefix",
    "suffix",
];

/// Options explicitly set on the command line.
///
/// Unset fields are skipped when serialized so they don't mask values from
/// lower-priority sources.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    split_on_newline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trim_spaces_before_newline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trim_trailing_newline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

impl From<&ConvertArgs> for OptionOverrides {
    fn from(args: &ConvertArgs) -> Self {
        Self {
            split_on_newline: args.no_split_on_newline.then_some(false),
            trim_spaces_before_newline: args.no_trim_spaces_before_newline.then_some(false),
            trim_trailing_newline: args.keep_trailing_newline.then_some(false),
            prefix: args.prefix.clone(),
            suffix: args.suffix.clone(),
        }
    }
}
