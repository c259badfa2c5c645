//! Storage and configuration sources for the target platform.

use services::{ConfigSource, KeyValueStore};
use std::rc::Rc;

pub struct Adapters {
    pub storage: Rc<dyn KeyValueStore>,
    pub config: Rc<dyn ConfigSource>,
}

#[cfg(target_arch = "wasm32")]
pub use web::adapters;

#[cfg(not(target_arch = "wasm32"))]
pub use native::adapters;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Adapters;
    use services::config::HttpConfigSource;
    use services::KeyValueStore;
    use shared_types::AppError;
    use std::rc::Rc;

    /// Browser `localStorage`.
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, AppError> {
            web_sys::window()
                .ok_or_else(|| AppError::storage("No browser window"))?
                .local_storage()
                .map_err(|_| AppError::storage("localStorage is not accessible"))?
                .ok_or_else(|| AppError::storage("localStorage is not available"))
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| AppError::storage(format!("cannot read {key}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| AppError::storage(format!("cannot write {key}")))
        }

        fn delete(&self, key: &str) -> Result<(), AppError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|_| AppError::storage(format!("cannot remove {key}")))
        }
    }

    /// Static configuration is served next to the app under `/config/`.
    pub fn adapters() -> Adapters {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Adapters {
            storage: Rc::new(LocalStorage),
            config: Rc::new(HttpConfigSource::new(format!("{origin}/config"))),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::Adapters;
    use services::config::FileConfigSource;
    use services::storage::FileStore;
    use services::MemoryStore;
    use std::rc::Rc;

    const DEFAULT_CONFIG_DIR: &str = "config";
    const DEFAULT_STATE_FILE: &str = "whitelabel-state.json";

    /// Configuration from `CONFIG_DIR`, local state in `WHITELABEL_STATE_FILE`.
    /// An unreadable state file degrades to an in-memory session.
    pub fn adapters() -> Adapters {
        let config_dir =
            std::env::var("CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        let state_file =
            std::env::var("WHITELABEL_STATE_FILE").unwrap_or_else(|_| DEFAULT_STATE_FILE.to_string());

        let storage: Rc<dyn services::KeyValueStore> = match FileStore::open(&state_file) {
            Ok(store) => {
                tracing::info!(path = %store.path().display(), "Using state file");
                Rc::new(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "State file unusable; settings will not persist");
                Rc::new(MemoryStore::new())
            }
        };

        Adapters {
            storage,
            config: Rc::new(FileConfigSource::new(config_dir)),
        }
    }
}
