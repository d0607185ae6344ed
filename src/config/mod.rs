mod keys;
mod loader;
mod types;

pub use keys::{KeyBinding, KeyBindingError};
pub use loader::ConfigError;
pub use types::{Config, KeysConfig, LoggingConfig, UiConfig, LOG_LEVELS};
