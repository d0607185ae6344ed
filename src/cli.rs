use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "counter", version, about = "Terminal counter with increment and decrement buttons")]
pub struct Cli {
    /// Config file (default: <config dir>/simple-counter/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Apply a sequence of '+' and '-' presses without a terminal and print the result
    #[arg(long, value_name = "SEQUENCE", allow_hyphen_values = true)]
    pub replay: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
