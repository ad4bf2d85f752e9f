//! `config.toml` in the data directory. Every key is optional.
//!
//! ```toml
//! [breathing]
//! inhale = 4
//! hold_after_inhale = 4
//! exhale = 4
//! hold_after_exhale = 4
//! tick_ms = 1000
//! ```

use std::path::Path;
use std::{fs, io};

use calm_core::{DEFAULT_PHASE_SECS, Pattern};
use serde::Deserialize;

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub breathing: BreathingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreathingConfig {
    pub inhale: u32,
    pub hold_after_inhale: u32,
    pub exhale: u32,
    pub hold_after_exhale: u32,
    /// Length of one tick in milliseconds.
    pub tick_ms: u64,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            inhale: DEFAULT_PHASE_SECS,
            hold_after_inhale: DEFAULT_PHASE_SECS,
            exhale: DEFAULT_PHASE_SECS,
            hold_after_exhale: DEFAULT_PHASE_SECS,
            tick_ms: 1000,
        }
    }
}

impl BreathingConfig {
    pub fn pattern(&self) -> Result<Pattern> {
        Pattern::new([
            self.inhale,
            self.hold_after_inhale,
            self.exhale,
            self.hold_after_exhale,
        ])
        .map_err(|e| StoreError::Config(e.to_string()))
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| StoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("loading config from {}", path.display());
                Self::parse(&content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        self.breathing.pattern()?;
        if self.breathing.tick_ms == 0 {
            return Err(StoreError::Config(
                "breathing.tick_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.breathing.pattern().unwrap(), Pattern::box_breathing());
        assert_eq!(config.breathing.tick_ms, 1000);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse("[breathing]\nexhale = 8\ntick_ms = 500\n").unwrap();
        assert_eq!(config.breathing.exhale, 8);
        assert_eq!(config.breathing.inhale, 4);
        assert_eq!(config.breathing.pattern().unwrap().describe(), "4-4-8-4");
        assert_eq!(config.breathing.tick_ms, 500);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Config::parse("[breathing]\ninhale = 0\n").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
        assert!(err.to_string().contains("Inhale"), "{err}");
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Config::parse("[breathing]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("[breathing]\ninhail = 4\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[breathing]\nhold_after_exhale = 2\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.breathing.pattern().unwrap().cycle_len(), 14);
    }
}
