use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::keys::KeyBinding;

/// Level names accepted by `[logging] level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub keys: KeysConfig,
    pub logging: LoggingConfig,
}

/// Presentation toggles for the terminal host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the key hint line under the widget (default: true).
    pub show_footer: bool,
    /// Capture the mouse so actuators can be clicked (default: true).
    pub mouse: bool,
}

/// Extra keys bound to the two actuators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub increment: Vec<KeyBinding>,
    pub decrement: Vec<KeyBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of [`LOG_LEVELS`]. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file. Stdout belongs to the TUI, so without a file nothing is logged.
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_footer: true,
            mouse: true,
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            increment: vec![
                KeyBinding::Char('+'),
                KeyBinding::Char('='),
                KeyBinding::Char('k'),
                KeyBinding::Up,
            ],
            decrement: vec![
                KeyBinding::Char('-'),
                KeyBinding::Char('_'),
                KeyBinding::Char('j'),
                KeyBinding::Down,
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
