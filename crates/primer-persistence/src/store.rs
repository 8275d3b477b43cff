//! The key-value store contract and its two implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PersistError, Result};

/// The durable key-value contract the application writes preferences
/// through: string keys, string values, `get` misses are simply `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Implementations persist synchronously; failures
    /// surface as errors the caller downgrades to a fallback, never a block.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Session-only store, used directly in tests and as the fallback when the
/// file store cannot be opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a flat TOML string map in the user config directory.
///
/// Loading is tolerant by design. A missing or unparseable file starts the
/// session with an empty map; `set` rewrites the whole map through a temp
/// file plus rename so a crash never leaves a half-written store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the default platform path.
    ///
    /// # Errors
    ///
    /// `Unavailable` when the platform reports no config directory. A file
    /// that exists but does not parse is not an error; it is discarded with
    /// a warning.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::store_path().ok_or(PersistError::Unavailable)?))
    }

    /// Open a store at an explicit path.
    pub fn open(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(values) => Some(values),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "preference store is unreadable, starting empty"
                    );
                    None
                }
            })
            .unwrap_or_default();
        Self { path, values }
    }

    /// The default store location.
    pub fn store_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "StatePrimer", "StatePrimer")
            .map(|dirs| dirs.config_dir().join("store.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PersistError::io("create directory", parent, e))?;
        }
        let content = toml::to_string_pretty(&self.values).map_err(|e| PersistError::Serialize {
            source: Box::new(e),
        })?;

        // Temp file + rename keeps the store whole across a crash.
        let temp_path = self.path.with_extension("toml.tmp");
        fs::write(&temp_path, content).map_err(|e| PersistError::io("write", &temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| PersistError::io("replace", &self.path, e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Open the file store, or fall back to memory when the platform gives us
/// nowhere to write. The boolean reports whether the fallback engaged so
/// the caller can tell the user once.
pub fn open_with_fallback() -> (Box<dyn KeyValueStore + Send>, bool) {
    match FileStore::open_default() {
        Ok(store) => (Box::new(store), false),
        Err(error) => {
            tracing::warn!(%error, "preferences will not persist this session");
            (Box::new(MemoryStore::new()), true)
        }
    }
}
