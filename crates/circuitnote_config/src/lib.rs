pub mod settings;

pub use settings::Settings;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "circuitnote.json";

/// A [`Settings`] record bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    path: Utf8PathBuf,
}

impl Config {
    pub fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::from(CONFIG_FILE)
    }

    /// Loads settings from `path`, overlaying the persisted record onto the
    /// hardcoded defaults (absent keys keep their default value).
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid settings record.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;

        let settings =
            serde_json::from_str(&contents).with_context(|| format!("Failed to parse {path}"))?;

        Ok(Self {
            settings,
            path: path.to_owned(),
        })
    }

    /// Persists the settings back to the bound path, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or the file written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents =
            serde_json::to_string_pretty(&self.settings).context("Failed to serialize config")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write config file {}", self.path))?;

        Ok(())
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    #[must_use]
    pub fn with_path(mut self, path: &Utf8Path) -> Self {
        self.path = path.to_owned();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            path: Self::default_path(),
        }
    }
}
