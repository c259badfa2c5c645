use crate::storage::{KeyValueStore, THEME_KEY};
use shared_types::{AppError, ThemeMode, ThemePreference};
use std::rc::Rc;

/// Persisted light/dark/system preference.
pub struct ThemeResolver {
    storage: Rc<dyn KeyValueStore>,
    preference: ThemePreference,
}

impl ThemeResolver {
    /// Read the stored preference. Unknown or unreadable values fall back to
    /// `System`.
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let preference = match storage.get(THEME_KEY) {
            Ok(Some(key)) => ThemePreference::from_key(&key),
            Ok(None) => ThemePreference::System,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read theme preference; following system");
                ThemePreference::System
            }
        };
        Self {
            storage,
            preference,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn mode(&self, system_prefers_dark: bool) -> ThemeMode {
        self.preference.resolve(system_prefers_dark)
    }

    pub fn set_preference(&mut self, preference: ThemePreference) -> Result<(), AppError> {
        self.storage.set(THEME_KEY, preference.as_str())?;
        self.preference = preference;
        tracing::info!(preference = preference.as_str(), "Theme preference saved");
        Ok(())
    }
}
