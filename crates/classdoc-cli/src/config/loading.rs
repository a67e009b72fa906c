use crate::config::{CONFIG_FILE_NAME, ClassdocConfig, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
    value::{Uncased, UncasedStr},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given on the command line. Only the fields that were actually set
/// are merged, so unset flags never mask the config file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_place: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_empty: Option<bool>,
}

impl ClassdocConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `config_path` must exist when given; otherwise `classdoc.config.json`
    /// in `cwd` is used if present.
    pub fn load(
        overrides: &ConfigOverrides,
        config_path: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(config_path, cwd)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // CLASSDOC_OUT_DIR, CLASSDOC_IN_PLACE, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(false).map(env_key));

        figment = figment.merge(Serialized::defaults(overrides));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {CONFIG_FILE_NAME} syntax and field types"),
            }
            .into()
        })
    }

    fn config_file(config_path: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match config_path {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    cwd.join(path)
                };
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path).into())
                }
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE_NAME);
                Ok(default_path.is_file().then_some(default_path))
            }
        }
    }
}

/// `OUT_DIR` -> `outDir`, matching the camelCase keys of the config file.
fn env_key(key: &UncasedStr) -> Uncased<'_> {
    Uncased::from(snake_to_camel(key.as_str()))
}

pub(crate) fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}
