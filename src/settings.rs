//! Session settings
//!
//! Stored as JSON. Every field has a default so partial files load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BOUNDS;
use crate::error::Error;

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena half-width
    pub bounds: f32,
    /// Seed for the AI's random turns (None = fixed default seed)
    pub seed: Option<u64>,

    // === Headless runs ===
    /// Tick limit for a headless run
    pub max_ticks: u64,
    /// Log progress every N ticks (0 = never)
    pub log_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            seed: None,
            max_ticks: 3600,
            log_every: 60,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {})", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "bounds": 50.0 }"#).unwrap();
        assert_eq!(settings.bounds, 50.0);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.max_ticks, Settings::default().max_ticks);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.json");
        let settings = Settings {
            bounds: 12.5,
            seed: Some(42),
            max_ticks: 100,
            log_every: 0,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_or_default_reads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cycle-arena.json");
        fs::write(&path, r#"{ "seed": 9, "max_ticks": 50 }"#).unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.max_ticks, 50);
        assert_eq!(settings.bounds, DEFAULT_BOUNDS);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(Settings::load(&path), Err(Error::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_garbage_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ bounds: ").unwrap();
        assert!(matches!(Settings::load(&path), Err(Error::Json(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
