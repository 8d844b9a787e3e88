//! The option list manager: state, validation and persistence hooks.
//!
//! `OptionManager` owns the [`OptionList`] and is the only way to mutate it.
//! Every mutation compares the list length before and after the call and
//! writes the whole list to the store only when the length changed.

use log::{debug, warn};

use crate::config::ManagerConfig;
use crate::error::{LoadError, OptionError, OptionResult};
use crate::options::OptionList;
use crate::random::{RandomSource, RngSource, pick_index};
use crate::store::KeyValueStore;
use crate::view::ViewModel;

/// Owns an option list, its store and its random source.
#[derive(Debug)]
pub struct OptionManager<S, R = RngSource> {
    options: OptionList,
    store: S,
    rng: R,
    config: ManagerConfig,
    load_error: Option<LoadError>,
    initialized: bool,
}

impl<S: KeyValueStore> OptionManager<S, RngSource> {
    /// Create a manager with the random source described by `config`.
    pub fn new(store: S, config: ManagerConfig) -> Self {
        let rng = config.random_source();
        Self::with_source(store, rng, config)
    }
}

impl<S: KeyValueStore, R: RandomSource> OptionManager<S, R> {
    /// Create a manager with an explicit random source.
    ///
    /// The list starts empty; call [`initialize`](Self::initialize) to load
    /// the stored list.
    pub fn with_source(store: S, rng: R, config: ManagerConfig) -> Self {
        Self {
            options: OptionList::new(),
            store,
            rng,
            config,
            load_error: None,
            initialized: false,
        }
    }

    /// Load the stored list, replacing the current one.
    ///
    /// An absent key (or a stored `null`) keeps the current list. A store
    /// failure or malformed value is logged and recorded in
    /// [`load_error`](Self::load_error); the current list is kept and no
    /// error reaches the caller.
    pub fn initialize(&mut self) {
        self.initialized = true;
        match self.read_stored() {
            Ok(Some(options)) => {
                debug!(
                    "loaded {} option(s) from key '{}'",
                    options.len(),
                    self.config.storage_key
                );
                self.options = options;
                self.load_error = None;
            }
            Ok(None) => {
                debug!("no stored options under key '{}'", self.config.storage_key);
                self.load_error = None;
            }
            Err(e) => {
                warn!("{e}; starting with an empty list");
                self.load_error = Some(e);
            }
        }
    }

    fn read_stored(&self) -> Result<Option<OptionList>, LoadError> {
        let Some(raw) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str::<Option<OptionList>>(&raw)?)
    }

    /// Trim `text` and append it to the list.
    ///
    /// Fails with [`OptionError::Empty`] or [`OptionError::Duplicate`] and
    /// leaves the list untouched when validation fails.
    pub fn add_option(&mut self, text: &str) -> OptionResult<()> {
        self.mutate(|options| options.push(text).map(|_| ()))
    }

    /// Remove every option equal to `text`. Returns how many were removed.
    ///
    /// Removing an absent value is a no-op and triggers no write.
    pub fn delete_option(&mut self, text: &str) -> usize {
        self.mutate(|options| options.remove(text))
    }

    /// Remove all options. Writes only if the list was non-empty.
    pub fn delete_all_options(&mut self) {
        self.mutate(OptionList::clear);
    }

    /// Pick one option uniformly at random.
    ///
    /// Front ends disable picking while the list is empty; if it happens
    /// anyway this fails with [`OptionError::EmptyList`].
    pub fn pick_random(&mut self) -> OptionResult<&str> {
        if self.options.is_empty() {
            return Err(OptionError::EmptyList);
        }
        let index = pick_index(self.options.len(), self.rng.next_unit());
        self.options.get(index).ok_or(OptionError::EmptyList)
    }

    /// Run a mutation and persist if it changed the list length.
    fn mutate<T>(&mut self, f: impl FnOnce(&mut OptionList) -> T) -> T {
        let before = self.options.len();
        let out = f(&mut self.options);
        if self.options.len() != before {
            self.persist();
        }
        out
    }

    /// Write the full list under the storage key. Failures are only logged.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.options) {
            Ok(json) => json,
            Err(e) => {
                warn!("could not serialize options: {e}");
                return;
            }
        };
        match self.store.set(&self.config.storage_key, &json) {
            Ok(()) => debug!(
                "saved {} option(s) under key '{}'",
                self.options.len(),
                self.config.storage_key
            ),
            Err(e) => warn!("could not save options: {e}"),
        }
    }

    /// The current options.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether there is anything to pick from.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Why the last [`initialize`](Self::initialize) fell back, if it did.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// The configuration.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// A read-only snapshot for rendering.
    pub fn snapshot(&self) -> ViewModel {
        ViewModel::from_options(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use crate::error::{StoreError, StoreResult};
    use crate::store::MemoryStore;

    /// Reads nothing and refuses every write.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Io {
                path: "broken".to_string(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    fn manager(store: MemoryStore) -> OptionManager<MemoryStore, ScriptedSource> {
        OptionManager::with_source(store, ScriptedSource::new([0.0]), ManagerConfig::default())
    }

    fn ready(values: &[&str]) -> OptionManager<MemoryStore, ScriptedSource> {
        let mut m = manager(MemoryStore::new());
        for v in values {
            m.add_option(v).unwrap();
        }
        m
    }

    #[test]
    fn starts_empty_and_uninitialized() {
        let m = manager(MemoryStore::new());
        assert!(m.is_empty());
        assert!(!m.has_options());
        assert!(!m.is_initialized());
    }

    #[test]
    fn initialize_loads_stored_list() {
        let store = MemoryStore::new().with_entry("options", r#"["a","b"]"#);
        let mut m = manager(store);
        m.initialize();
        assert!(m.is_initialized());
        assert_eq!(m.options().as_slice(), ["a", "b"]);
        assert!(m.load_error().is_none());
        assert_eq!(m.store().write_count(), 0);
    }

    #[test]
    fn initialize_absent_key_stays_empty() {
        let mut m = manager(MemoryStore::new());
        m.initialize();
        assert!(m.is_empty());
        assert!(m.load_error().is_none());
    }

    #[test]
    fn initialize_null_is_absent() {
        let mut m = manager(MemoryStore::new().with_entry("options", "null"));
        m.initialize();
        assert!(m.is_empty());
        assert!(m.load_error().is_none());
    }

    #[test]
    fn initialize_malformed_falls_back_to_empty() {
        for raw in ["{not json", r#"{"a":1}"#, r#"["a","a"]"#, r#"["", "b"]"#, ""] {
            let mut m = manager(MemoryStore::new().with_entry("options", raw));
            m.initialize();
            assert!(m.is_empty(), "raw {raw:?} should leave the list empty");
            assert!(matches!(m.load_error(), Some(LoadError::Malformed(_))));
        }
    }

    #[test]
    fn initialize_uses_configured_key() {
        let store = MemoryStore::new()
            .with_entry("options", r#"["wrong"]"#)
            .with_entry("chores", r#"["dishes"]"#);
        let cfg = ManagerConfig::default().with_storage_key("chores");
        let mut m = OptionManager::with_source(store, ScriptedSource::new([0.0]), cfg);
        m.initialize();
        assert_eq!(m.options().as_slice(), ["dishes"]);
    }

    #[test]
    fn add_appends_and_persists() {
        let mut m = manager(MemoryStore::new());
        m.add_option("  Play guitar ").unwrap();
        assert_eq!(m.options().as_slice(), ["Play guitar"]);
        assert_eq!(m.store().write_count(), 1);
        assert_eq!(m.store().raw("options"), Some(r#"["Play guitar"]"#));
    }

    #[test]
    fn add_invalid_leaves_state_and_store_alone() {
        let mut m = ready(&["a"]);
        assert_eq!(m.add_option("   "), Err(OptionError::Empty));
        assert_eq!(m.add_option("a"), Err(OptionError::Duplicate("a".into())));
        assert_eq!(m.options().as_slice(), ["a"]);
        assert_eq!(m.store().write_count(), 1);
    }

    #[test]
    fn delete_absent_does_not_write() {
        let mut m = ready(&["a", "b"]);
        assert_eq!(m.delete_option("z"), 0);
        assert_eq!(m.store().write_count(), 2);
    }

    #[test]
    fn delete_present_writes_new_list() {
        let mut m = ready(&["a", "b", "c"]);
        assert_eq!(m.delete_option("b"), 1);
        assert_eq!(m.options().as_slice(), ["a", "c"]);
        assert_eq!(m.store().write_count(), 4);
        assert_eq!(m.store().raw("options"), Some(r#"["a","c"]"#));
    }

    #[test]
    fn delete_all_writes_only_when_non_empty() {
        let mut m = manager(MemoryStore::new());
        m.delete_all_options();
        assert_eq!(m.store().write_count(), 0);

        m.add_option("a").unwrap();
        m.delete_all_options();
        assert!(m.is_empty());
        assert_eq!(m.store().write_count(), 2);
        assert_eq!(m.store().raw("options"), Some("[]"));
    }

    #[test]
    fn pick_uses_floor_of_scaled_draw() {
        let mut m = OptionManager::with_source(
            MemoryStore::new(),
            ScriptedSource::new([0.0, 0.34, 0.99]),
            ManagerConfig::default(),
        );
        for v in ["a", "b", "c"] {
            m.add_option(v).unwrap();
        }
        assert_eq!(m.pick_random().unwrap(), "a");
        assert_eq!(m.pick_random().unwrap(), "b");
        assert_eq!(m.pick_random().unwrap(), "c");
    }

    #[test]
    fn pick_on_empty_fails_loudly() {
        let mut m = manager(MemoryStore::new());
        assert_eq!(m.pick_random(), Err(OptionError::EmptyList));
    }

    #[test]
    fn pick_does_not_write() {
        let mut m = ready(&["a"]);
        m.pick_random().unwrap();
        assert_eq!(m.store().write_count(), 1);
    }

    #[test]
    fn scenario_from_empty_to_cleared() {
        let mut m = manager(MemoryStore::new());
        m.initialize();
        m.add_option("Play guitar").unwrap();
        assert_eq!(m.options().as_slice(), ["Play guitar"]);
        assert_eq!(
            m.add_option("Play guitar").unwrap_err().to_string(),
            "This option already exists"
        );
        assert_eq!(m.options().as_slice(), ["Play guitar"]);
        m.add_option("Read book").unwrap();
        assert_eq!(m.options().as_slice(), ["Play guitar", "Read book"]);
        m.delete_option("Play guitar");
        assert_eq!(m.options().as_slice(), ["Read book"]);
        m.delete_all_options();
        assert!(m.options().is_empty());
    }

    #[test]
    fn persisted_list_survives_a_new_manager() {
        let mut store = MemoryStore::new();
        {
            let mut m = OptionManager::with_source(
                &mut store,
                ScriptedSource::new([0.0]),
                ManagerConfig::default(),
            );
            m.add_option("x").unwrap();
            m.add_option("y").unwrap();
        }
        let mut m = manager(store);
        m.initialize();
        assert_eq!(m.options().as_slice(), ["x", "y"]);
    }

    #[test]
    fn failed_writes_keep_in_memory_changes() {
        let mut m = OptionManager::with_source(
            BrokenStore,
            ScriptedSource::new([0.0]),
            ManagerConfig::default(),
        );
        m.initialize();

        m.add_option("a").unwrap();
        m.add_option("b").unwrap();
        assert_eq!(m.options().as_slice(), ["a", "b"]);

        assert_eq!(m.delete_option("a"), 1);
        assert_eq!(m.options().as_slice(), ["b"]);

        m.delete_all_options();
        assert!(m.is_empty());
        assert!(m.load_error().is_none());
    }
}
