use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable that overrides the settings file location
pub const CONFIG_ENV_VAR: &str = "CALENDAR_WIDGET_CONFIG";

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `$CALENDAR_WIDGET_CONFIG`, or the platform config dir
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self::new(path)
    }

    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("com", "CalendarWidget", "CalendarWidget") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(SETTINGS_FILE),
        }
    }

    /// Read and validate the settings file. A missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
