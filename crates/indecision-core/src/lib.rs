//! Core of the Indecision option picker.
//!
//! Provides the validated option list, the manager that owns it and persists
//! it through a key-value store on every length change, the random source
//! used to pick an option, and the view model front ends render from.

pub mod config;
pub mod error;
pub mod manager;
pub mod options;
pub mod random;
pub mod store;
pub mod view;

pub use config::ManagerConfig;
pub use error::{LoadError, OptionError, OptionResult, StoreError, StoreResult};
pub use manager::OptionManager;
pub use options::OptionList;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view::{AddOptionForm, Header, ViewModel};
