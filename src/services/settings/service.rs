use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CountdownSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Reads [`CountdownSettings`] from a TOML file. The countdown never writes
/// the file; it is edited by hand.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn resolve_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "Ken24T", "SymposiumCountdown") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from `path`. A missing file yields the defaults; keys
    /// absent from the file take their default values.
    pub fn load_from_path(path: &Path) -> Result<CountdownSettings> {
        if !path.exists() {
            log::debug!("No settings at {}; using defaults", path.display());
            return Ok(CountdownSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: CountdownSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Get the current settings
    pub fn get(&self) -> Result<CountdownSettings> {
        Self::load_from_path(&self.path)
    }
}
