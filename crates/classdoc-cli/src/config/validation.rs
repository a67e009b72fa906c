use crate::config::ClassdocConfig;
use crate::error::{ConfigError, Result};

impl ClassdocConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(ConfigError::MissingField {
                field: "input".to_string(),
                hint: "Provide at least one file, directory or glob pattern".to_string(),
            }
            .into());
        }

        if let Some(blank) = self.input.iter().find(|selector| selector.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "input".to_string(),
                value: format!("{blank:?}"),
                hint: "Input selectors cannot be empty".to_string(),
            }
            .into());
        }

        if !self.in_place && self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "outDir".to_string(),
                value: "\"\"".to_string(),
                hint: "Set an output directory or enable inPlace".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
