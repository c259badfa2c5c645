//! Startup wiring. Everything the UI needs is built here and handed over as
//! one [`AppServices`] value; no module keeps global mutable state.

use crate::backend::{select_backend, LegalBackend, MockBackend, MockDelays};
use crate::branding::BrandingStore;
use crate::config::{AppConfigLoader, ConfigSource, ConfigState, APP_CONFIG_RESOURCE};
use crate::gateway::ApiGateway;
use crate::storage::KeyValueStore;
use crate::surface::ThemeSurface;
use crate::theme::ThemeResolver;
use crate::wizard::is_setup_completed;
use shared_types::AppError;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub config_resource: String,
    pub mock_delays: MockDelays,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            config_resource: APP_CONFIG_RESOURCE.to_string(),
            mock_delays: MockDelays::default(),
        }
    }
}

pub struct AppServices {
    pub storage: Rc<dyn KeyValueStore>,
    pub surface: Rc<dyn ThemeSurface>,
    pub gateway: Rc<ApiGateway>,
    pub config: ConfigState,
    pub branding: BrandingStore,
    pub theme: ThemeResolver,
    /// Set once the configuration is ready.
    pub backend: Option<Rc<dyn LegalBackend>>,
    pub setup_completed: bool,
}

impl AppServices {
    pub fn backend(&self) -> Result<Rc<dyn LegalBackend>, AppError> {
        self.backend
            .clone()
            .ok_or_else(|| AppError::not_initialized("No backend until configuration is loaded"))
    }
}

/// Load configuration and branding concurrently, then pick the backend.
pub async fn initialize(
    storage: Rc<dyn KeyValueStore>,
    surface: Rc<dyn ThemeSurface>,
    source: Rc<dyn ConfigSource>,
    options: StartupOptions,
) -> AppServices {
    let gateway = Rc::new(ApiGateway::new());
    let theme = ThemeResolver::load(storage.clone());
    let mode = theme.mode(surface.system_prefers_dark());
    let mut branding = BrandingStore::new(storage.clone(), surface.clone(), mode);

    let (config, _) = futures::join!(
        AppConfigLoader::load(source.as_ref(), &options.config_resource, &gateway),
        branding.load(source.as_ref()),
    );

    let backend = config.ready().map(|cfg| {
        select_backend(
            cfg.api.mode,
            gateway.clone(),
            MockBackend::new(options.mock_delays, cfg.courts.clone()),
        )
    });
    let setup_completed = is_setup_completed(storage.as_ref());
    tracing::info!(
        config_ready = config.is_ready(),
        setup_completed,
        mode = mode.as_str(),
        "Application services initialized"
    );

    AppServices {
        storage,
        surface,
        gateway,
        config,
        branding,
        theme,
        backend,
        setup_completed,
    }
}
