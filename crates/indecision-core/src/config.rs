//! Configuration for an option manager.

use crate::random::RngSource;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "options";

/// Configuration for an [`OptionManager`](crate::OptionManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Key under which the serialized list is stored.
    pub storage_key: String,
    /// RNG seed for reproducible picks; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
        }
    }
}

impl ManagerConfig {
    /// Set the storage key. Blank keys fall back to the default.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.storage_key = if key.trim().is_empty() {
            DEFAULT_STORAGE_KEY.to_string()
        } else {
            key
        };
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source this configuration describes.
    pub fn random_source(&self) -> RngSource {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_os(),
        }
    }
}
