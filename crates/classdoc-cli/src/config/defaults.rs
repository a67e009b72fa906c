use std::path::PathBuf;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "classdoc.config.json";

/// Prefix of environment variables that override the config file.
pub const ENV_PREFIX: &str = "CLASSDOC_";

pub fn default_input() -> Vec<String> {
    vec!["src/**/*.{js,jsx,mjs,cjs}".to_string()]
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("documented")
}
