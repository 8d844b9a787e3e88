pub mod add;
pub mod clear;
pub mod list;
pub mod pick;
pub mod remove;
pub mod tui;

use std::path::{Path, PathBuf};

use indecision_core::{FileStore, ManagerConfig, OptionManager};

/// File name used inside the data directory.
const STORE_FILE: &str = "store.json";

/// Shared settings resolved from global CLI flags.
pub struct Context {
    store_path: PathBuf,
    config: ManagerConfig,
}

impl Context {
    pub fn new(store: Option<PathBuf>, key: String, seed: Option<u64>) -> Self {
        let mut config = ManagerConfig::default().with_storage_key(key);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Self {
            store_path: store.unwrap_or_else(default_store_path),
            config,
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Open the store and load the saved list.
    pub fn manager(&self) -> OptionManager<FileStore> {
        let store = FileStore::new(&self.store_path);
        let mut manager = OptionManager::new(store, self.config.clone());
        manager.initialize();
        manager
    }
}

/// `<data dir>/indecision/store.json`, or `./indecision.json` without one.
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("indecision").join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from("indecision.json"))
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
