use crate::cli::ConvertArgs;
use crate::config::{CONFIG_FILE_NAME, ENV_KEYS, ENV_PREFIX, OptionOverrides};
use crate::error::{ConfigError, Result};
use css2js::Css2JsOptions;
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::Path;

/// Load conversion options from multiple sources.
/// Priority: CLI args > environment variables > config file > defaults
///
/// A relative `--config` path and the default `css2js.config.json` are
/// resolved against `cwd`.
pub fn load_options(args: &ConvertArgs, cwd: &Path) -> Result<Css2JsOptions> {
    let mut figment = Figment::new().merge(Serialized::defaults(Css2JsOptions::default()));

    let config_file = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Some(path)
        }
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            default_path.is_file().then_some(default_path)
        }
    };

    if let Some(path) = config_file {
        tracing::debug!(path = %path.display(), "loading config file");
        figment = figment.merge(Json::file(path));
    }

    // CSS2JS_SPLIT_ON_NEWLINE -> splitOnNewline
    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .only(ENV_KEYS)
            .map(|key| snake_to_camel(key.as_str()).into()),
    );

    figment = figment.merge(Serialized::defaults(OptionOverrides::from(args)));

    figment.extract().map_err(|e| {
        ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {} syntax and option types", CONFIG_FILE_NAME),
        }
        .into()
    })
}

/// Convert a `snake_case` key to `camelCase`.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
