use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::store::Store;

const DB_FILE: &str = "calm.db";
const CONFIG_FILE: &str = "config.toml";

/// Default base directory for all calm storage.
fn default_base_dir() -> PathBuf {
    dirs_home().join(".calm")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// The data directory: one database and one optional config file.
///
/// Layout:
/// ```text
/// ~/.calm/
/// ├── calm.db
/// └── config.toml
/// ```
pub struct CalmHome {
    store: Store,
    config: Config,
}

impl CalmHome {
    /// Open the data directory, creating it as needed.
    /// `base_dir`: override the default `~/.calm` location.
    pub fn open(base_dir: Option<&Path>) -> Result<Self> {
        let base = base_dir.map(PathBuf::from).unwrap_or_else(default_base_dir);

        fs::create_dir_all(&base).map_err(|e| {
            StoreError::InvalidData(format!("failed to create {}: {e}", base.display()))
        })?;

        let config = Config::load(&base.join(CONFIG_FILE))?;
        let store = Store::open(&base.join(DB_FILE))?;
        tracing::debug!("opened data directory {}", base.display());

        Ok(Self { store, config })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_creation() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("calm");

        let home = CalmHome::open(Some(&base)).unwrap();
        assert!(base.is_dir());
        assert!(base.join(DB_FILE).exists());
        assert_eq!(home.config(), &Config::default());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let home = CalmHome::open(Some(dir.path())).unwrap();
            home.store().sign_in("willow").unwrap();
        }

        let home = CalmHome::open(Some(dir.path())).unwrap();
        let session = home.store().require_session().unwrap();
        assert_eq!(session.user_name, "willow");
    }

    #[test]
    fn test_bad_config_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[breathing]\nexhale = 0\n").unwrap();
        assert!(matches!(
            CalmHome::open(Some(dir.path())),
            Err(StoreError::Config(_))
        ));
    }
}
