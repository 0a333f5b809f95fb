// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for warshall tools.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw config blobs, keyed by logical name.
pub trait ConfigStore {
    /// Load a raw blob. Missing keys are [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw blob, replacing any previous value.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in the store.
    #[error("[CONFIG_NOT_FOUND] no stored value for `{0}`")]
    NotFound(String),
    /// I/O failure while reading or writing a key.
    #[error("[CONFIG_IO] `{key}`: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// Stored bytes are not valid JSON for the requested type.
    #[error("[CONFIG_SERDE] `{key}`: {source}")]
    Serde {
        /// Key being accessed.
        key: String,
        /// Underlying failure.
        source: serde_json::Error,
    },
    /// The store itself could not be set up.
    #[error("[CONFIG_UNAVAILABLE] {0}")]
    Unavailable(String),
}

/// Serializes values as pretty JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Load and deserialize `key`. Missing or empty blobs are `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Serde {
                key: key.to_owned(),
                source,
            })
    }

    /// Load `key`, falling back to `T::default()` when it is missing.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Serialize `value` and persist it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value).map_err(|source| ConfigError::Serde {
            key: key.to_owned(),
            source,
        })?;
        self.store.save_raw(key, &data)
    }
}
