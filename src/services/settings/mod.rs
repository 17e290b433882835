// Settings service
// Reads and writes settings.toml

mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR};
