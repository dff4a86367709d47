use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{CommentPolicy, DEFAULT_KEY_PREFIX};

pub const CONFIG_FILE_NAME: &str = ".proptypesrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    #[serde(default)]
    pub include_all_preceding_comments: bool,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            include_all_preceding_comments: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The key prefix must be non-empty and may not contain `=` or whitespace,
    /// since it is matched against the start of `key=value` lines.
    pub fn validate(&self) -> Result<()> {
        if self.key_prefix.is_empty() {
            bail!("Invalid 'keyPrefix': must not be empty");
        }
        if self
            .key_prefix
            .chars()
            .any(|c| c == '=' || c.is_whitespace())
        {
            bail!(
                "Invalid 'keyPrefix': \"{}\" must not contain '=' or whitespace",
                self.key_prefix
            );
        }
        Ok(())
    }

    pub fn comment_policy(&self) -> CommentPolicy {
        CommentPolicy::from_include_all(self.include_all_preceding_comments)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
