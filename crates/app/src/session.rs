//! Session state shared through Dioxus context.

use crate::platform;
use dioxus::prelude::*;
use services::panels::{
    CaseSearchPanel, ChatPanel, ContractPanel, JurisprudencePanel, PanelController, UploadPanel,
};
use services::{initialize, AppServices, ConfigState, LegalBackend, SetupWizard, StartupOptions};
use shared_types::{
    AppConfig, AppError, BackendMode, BrandingConfig, BrandingPatch, ThemePreference,
};
use shared_ui::theme::DomSurface;
use std::rc::Rc;

/// Where startup currently stands, as seen by the router guard.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Starting,
    Awaiting(Option<String>),
    NeedsSetup,
    Ready(AppConfig),
}

/// Handle to the initialized services. Cheap to copy; every read subscribes
/// the calling component, so branding and theme changes re-render.
#[derive(Clone, Copy)]
pub struct Session {
    services: Signal<Option<AppServices>>,
}

pub fn use_session() -> Session {
    use_context::<Session>()
}

impl Session {
    pub fn new() -> Self {
        Self {
            services: Signal::new(None),
        }
    }

    pub fn start(mut self) {
        spawn(async move {
            let adapters = platform::adapters();
            let services = initialize(
                adapters.storage,
                Rc::new(DomSurface),
                adapters.config,
                StartupOptions::default(),
            )
            .await;
            let gateway = services.gateway.clone();
            let live = services
                .config
                .ready()
                .is_some_and(|config| config.api.mode == BackendMode::Live);
            self.services.set(Some(services));

            if live {
                match gateway.health().await {
                    Ok(health) if health.is_healthy() => {
                        tracing::info!(version = %health.version, "Backend is healthy")
                    }
                    Ok(health) => tracing::warn!(status = %health.status, "Backend reports a problem"),
                    Err(err) => tracing::warn!(error = %err, "Backend health check failed"),
                }
            }
        });
    }

    pub fn phase(&self) -> Phase {
        let services = self.services.read();
        let Some(services) = services.as_ref() else {
            return Phase::Starting;
        };
        match &services.config {
            ConfigState::Awaiting { reason } => Phase::Awaiting(reason.clone()),
            ConfigState::Ready(_) if !services.setup_completed => Phase::NeedsSetup,
            ConfigState::Ready(config) => Phase::Ready(config.clone()),
        }
    }

    pub fn is_started(&self) -> bool {
        self.services.read().is_some()
    }

    pub fn branding(&self) -> BrandingConfig {
        self.services
            .read()
            .as_ref()
            .map(|s| s.branding.config().clone())
            .unwrap_or_default()
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.services
            .read()
            .as_ref()
            .map(|s| s.theme.preference())
            .unwrap_or_default()
    }

    pub fn backend(&self) -> Result<Rc<dyn LegalBackend>, AppError> {
        match self.services.read().as_ref() {
            Some(services) => services.backend(),
            None => Err(AppError::not_initialized("Services are still starting")),
        }
    }

    fn with_services<T>(
        &mut self,
        f: impl FnOnce(&mut AppServices) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut guard = self.services.write();
        let services = guard
            .as_mut()
            .ok_or_else(|| AppError::not_initialized("Services are still starting"))?;
        f(services)
    }

    pub fn update_branding(&mut self, patch: &BrandingPatch) -> Result<(), AppError> {
        self.with_services(|s| s.branding.update(patch))
    }

    pub fn reset_branding(&mut self) -> Result<(), AppError> {
        self.with_services(|s| s.branding.reset())
    }

    /// Persist the preference, then re-apply branding in the resolved mode.
    pub fn set_theme_preference(&mut self, preference: ThemePreference) -> Result<(), AppError> {
        self.with_services(|s| {
            s.theme.set_preference(preference)?;
            let mode = s.theme.mode(s.surface.system_prefers_dark());
            s.branding.set_mode(mode);
            Ok(())
        })
    }

    pub fn complete_setup(&mut self, wizard: &mut SetupWizard) -> Result<(), AppError> {
        self.with_services(|s| {
            wizard.complete(&mut s.branding, s.storage.as_ref())?;
            s.setup_completed = true;
            Ok(())
        })
    }
}

/// Feature panel state for the session. Created once the configuration is
/// ready, so documents survive navigation between panels.
#[derive(Clone, Copy)]
pub struct Panels {
    pub upload: Signal<UploadPanel>,
    pub case_search: Signal<CaseSearchPanel>,
    pub contract: Signal<ContractPanel>,
    pub jurisprudence: Signal<JurisprudencePanel>,
    pub chat: Signal<ChatPanel>,
}

impl Panels {
    pub fn new(config: &AppConfig, app_name: &str) -> Self {
        Self {
            upload: Signal::new(UploadPanel::new(config.upload.clone())),
            case_search: Signal::new(CaseSearchPanel::new(config.courts.clone())),
            contract: Signal::new(ContractPanel::new()),
            jurisprudence: Signal::new(JurisprudencePanel::new()),
            chat: Signal::new(ChatPanel::new(app_name)),
        }
    }
}

pub fn use_panels() -> Panels {
    use_context::<Panels>()
}

/// Validate the panel's input and, when it passes, run the backend call in
/// the background. Rejected input never reaches the backend.
pub fn submit_panel<P>(mut panel: Signal<P>, backend: Rc<dyn LegalBackend>)
where
    P: PanelController + 'static,
    P::Request: 'static,
    P::Response: 'static,
{
    let request = match panel.write().begin() {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "Panel input rejected");
            return;
        }
    };
    spawn(async move {
        let result = P::call(backend.as_ref(), &request).await;
        panel.write().finish(result);
    });
}
