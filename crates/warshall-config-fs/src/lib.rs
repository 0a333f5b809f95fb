// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for warshall tools (uses platform config dir).

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use warshall_app_core::config::{ConfigError, ConfigStore};

/// Store configs as JSON files under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/warshall`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "warshall")
            .ok_or_else(|| ConfigError::Unavailable("could not resolve config dir".into()))?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Create a store rooted at an explicit directory. Nothing is created until a save.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        fs::read(self.path_for(key)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(key.to_owned()),
            _ => io_error(key, err),
        })
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.base).map_err(|err| io_error(key, err))?;
        fs::write(path, data).map_err(|err| io_error(key, err))
    }
}

fn io_error(key: &str, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        key: key.to_owned(),
        source,
    }
}
