//! Configuration management
//!
//! Persistent defaults for the console, stored in ~/.vaani.cfg. Only the
//! playback parameters and the preferred voice are persisted; session text
//! and playback state never are.

use crate::{Result, VaaniError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Application configuration
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.vaani.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path (used by tests)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| VaaniError::Config(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| VaaniError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| VaaniError::Config(format!("Failed to save config: {}", e)))
    }

    /// Config file path (~/.vaani.cfg)
    fn config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".vaani.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("playback"))
            .set("rate", "1.0")
            .set("pitch", "1.0")
            .set("volume", "1.0");

        ini
    }

    /// Get a float value from config
    fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Default speech rate factor (0.5-2.0)
    pub fn rate(&self) -> f32 {
        self.get_float("playback", "rate", 1.0).clamp(0.5, 2.0)
    }

    /// Default pitch factor (0.5-2.0)
    pub fn pitch(&self) -> f32 {
        self.get_float("playback", "pitch", 1.0).clamp(0.5, 2.0)
    }

    /// Default volume (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.get_float("playback", "volume", 1.0).clamp(0.0, 1.0)
    }

    /// Preferred voice id, applied after the catalog's default selection
    pub fn voice_id(&self) -> Option<String> {
        self.ini
            .get_from(Some("playback"), "voice")
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }
}
