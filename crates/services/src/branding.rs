//! The single authoritative branding record for the session.

use crate::config::{ConfigSource, BRANDING_RESOURCE};
use crate::storage::{read_json, write_json, KeyValueStore, BRANDING_KEY};
use crate::surface::{Presentation, ThemeSurface};
use shared_types::{AppError, BrandingConfig, BrandingPatch, ThemeMode};
use std::rc::Rc;
use validator::Validate;

/// Where the current record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingSource {
    Persisted,
    Remote,
    Defaults,
}

pub struct BrandingStore {
    config: BrandingConfig,
    mode: ThemeMode,
    source: BrandingSource,
    storage: Rc<dyn KeyValueStore>,
    surface: Rc<dyn ThemeSurface>,
}

impl BrandingStore {
    /// A store holding the compiled-in defaults. Nothing is applied until
    /// [`load`](Self::load) or a mutation runs.
    pub fn new(storage: Rc<dyn KeyValueStore>, surface: Rc<dyn ThemeSurface>, mode: ThemeMode) -> Self {
        Self {
            config: BrandingConfig::default(),
            mode,
            source: BrandingSource::Defaults,
            storage,
            surface,
        }
    }

    pub fn config(&self) -> &BrandingConfig {
        &self.config
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn source(&self) -> BrandingSource {
        self.source
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::resolve(&self.config, self.mode)
    }

    /// Initialize from the persisted override, then the remote default, then
    /// the compiled-in defaults. Each candidate is merged over the defaults
    /// and must validate as a full record; a rejected candidate falls through
    /// to the next source.
    pub async fn load(&mut self, remote: &dyn ConfigSource) -> BrandingSource {
        let (config, source) = match self.persisted_candidate() {
            Some(config) => (config, BrandingSource::Persisted),
            None => match remote_candidate(remote).await {
                Some(config) => (config, BrandingSource::Remote),
                None => (BrandingConfig::default(), BrandingSource::Defaults),
            },
        };
        self.config = config;
        self.source = source;
        self.apply();
        tracing::info!(app_name = %self.config.app_name, source = ?source, "Branding loaded");
        source
    }

    fn persisted_candidate(&self) -> Option<BrandingConfig> {
        let patch = match read_json::<BrandingPatch>(self.storage.as_ref(), BRANDING_KEY) {
            Ok(Some(patch)) => patch,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Persisted branding is unreadable; ignoring it");
                return None;
            }
        };
        candidate(&patch, "persisted override")
    }

    /// Merge `patch` over the current record, validate, persist and apply.
    /// On any failure the store is left unchanged.
    pub fn update(&mut self, patch: &BrandingPatch) -> Result<(), AppError> {
        let next = self.config.merged(patch);
        next.validate()?;
        write_json(self.storage.as_ref(), BRANDING_KEY, &next)?;
        self.config = next;
        self.source = BrandingSource::Persisted;
        self.apply();
        tracing::info!(app_name = %self.config.app_name, "Branding updated");
        Ok(())
    }

    /// Restore the compiled-in defaults and drop the persisted override.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.storage.delete(BRANDING_KEY)?;
        self.config = BrandingConfig::default();
        self.source = BrandingSource::Defaults;
        self.apply();
        tracing::info!("Branding reset to defaults");
        Ok(())
    }

    /// Switch the active color variant.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.apply();
    }

    fn apply(&self) {
        self.surface.apply(&self.presentation());
    }
}

async fn remote_candidate(remote: &dyn ConfigSource) -> Option<BrandingConfig> {
    let raw = match remote.fetch(BRANDING_RESOURCE).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Remote branding unavailable; using defaults");
            return None;
        }
    };
    match serde_json::from_str::<BrandingPatch>(&raw) {
        Ok(patch) => candidate(&patch, BRANDING_RESOURCE),
        Err(e) => {
            tracing::warn!(error = %e, "Remote branding is malformed; using defaults");
            None
        }
    }
}

fn candidate(patch: &BrandingPatch, origin: &str) -> Option<BrandingConfig> {
    let config = BrandingConfig::default().merged(patch);
    match config.validate() {
        Ok(()) => Some(config),
        Err(e) => {
            let err = AppError::from(e);
            tracing::warn!(origin, fields = ?err.field_errors.keys().collect::<Vec<_>>(), "Branding candidate rejected");
            None
        }
    }
}
