//! Local key-value persistence.
//!
//! The browser build stores entries in `localStorage`, the desktop build in a
//! JSON file, and tests in memory. Callers only see [`KeyValueStore`].

use serde::{de::DeserializeOwned, Serialize};
use shared_types::AppError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Persisted branding override (full merged record).
pub const BRANDING_KEY: &str = "whitelabel.branding";
/// Present once the setup wizard has completed.
pub const SETUP_COMPLETED_KEY: &str = "whitelabel.setup-completed";
/// Stored [`shared_types::ThemePreference`] key.
pub const THEME_KEY: &str = "whitelabel.theme";

// ── Trait ────────────────────────────────────────────────────────────

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Read and decode a JSON entry. A missing key is `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| AppError::internal(format!("cannot encode {key}: {e}")))?;
    store.set(key, &raw)
}

// ── In-memory implementation ────────────────────────────────────────

/// Volatile store for tests and for sessions without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        store
    }

    /// Make every later `set` fail, as a full browser quota would.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.reject_writes.get() {
            return Err(AppError::storage(format!("storage quota exceeded writing {key}")));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ── JSON file implementation (desktop) ──────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use shared_types::AppError;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    /// All entries in one pretty-printed JSON object, rewritten on each change.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl FileStore {
        /// Open `path`, starting empty when the file does not exist yet.
        pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
            let path = path.as_ref().to_path_buf();
            let entries = match std::fs::read_to_string(&path) {
                Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
                Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                    AppError::storage(format!("{} is not a valid state file: {e}", path.display()))
                })?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => {
                    return Err(AppError::storage(format!(
                        "cannot read {}: {e}",
                        path.display()
                    )))
                }
            };
            Ok(Self {
                path,
                entries: RefCell::new(entries),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::storage(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
            let raw = serde_json::to_string_pretty(entries)
                .map_err(|e| AppError::internal(format!("cannot encode state file: {e}")))?;
            std::fs::write(&self.path, raw).map_err(|e| {
                AppError::storage(format!("cannot write {}: {e}", self.path.display()))
            })
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            let mut next = self.entries.borrow().clone();
            next.insert(key.to_string(), value.to_string());
            self.flush(&next)?;
            *self.entries.borrow_mut() = next;
            Ok(())
        }

        fn delete(&self, key: &str) -> Result<(), AppError> {
            let mut next = self.entries.borrow().clone();
            if next.remove(key).is_none() {
                return Ok(());
            }
            self.flush(&next)?;
            *self.entries.borrow_mut() = next;
            Ok(())
        }
    }
}
