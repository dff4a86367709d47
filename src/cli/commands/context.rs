use std::path::Path;

use anyhow::Result;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::MessageFile;

/// Everything a file command needs: resolved config and the indexed file.
pub struct CommandContext {
    pub config: Config,
    pub file: MessageFile,
    /// File path as given on the command line, for reporting.
    pub file_path: String,
    pub verbose: bool,
}

impl CommandContext {
    /// Load config (CLI args > config file > defaults) and index the file.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the properties file
    /// cannot be read.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(Path::new("."))?;

        // In verbose mode, inform user if using default config
        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref key_prefix) = args.key_prefix {
            config.key_prefix = key_prefix.clone();
            config.validate()?;
        }

        let file = MessageFile::open(&args.file, &config.key_prefix)?;

        if args.verbose {
            eprintln!(
                "Note: Indexed {} lines, {} messages with prefix '{}.'",
                file.lines().len(),
                file.len(),
                config.key_prefix
            );
        }

        Ok(Self {
            config,
            file,
            file_path: args.file.to_string_lossy().to_string(),
            verbose: args.verbose,
        })
    }
}
