pub mod branding_form;
pub mod case_search;
pub mod chat;
pub mod contracts;
pub mod documents;
pub mod home;
pub mod jurisprudence;
pub mod not_found;
pub mod settings;
pub mod setup;

use crate::session::{use_session, Panels, Phase};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdFileText, LdMessageSquare, LdScale, LdSearch, LdSettings,
};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, Panel};
use shared_ui::{LoadingScreen, Notice};

use case_search::CaseSearch;
use chat::Chat;
use contracts::Contracts;
use documents::Documents;
use home::Home;
use jurisprudence::Jurisprudence;
use not_found::NotFound;
use settings::Settings;
use setup::Setup;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/setup")]
    Setup {},
    #[layout(StartupGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/documents")]
    Documents {},
    #[route("/cases")]
    CaseSearch {},
    #[route("/contracts")]
    Contracts {},
    #[route("/jurisprudence")]
    Jurisprudence {},
    #[route("/chat")]
    Chat {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn for_panel(panel: Panel) -> Self {
        match panel {
            Panel::DocumentUpload => Route::Documents {},
            Panel::CaseSearch => Route::CaseSearch {},
            Panel::ContractAnalysis => Route::Contracts {},
            Panel::JurisprudenceSearch => Route::Jurisprudence {},
            Panel::Chat => Route::Chat {},
        }
    }
}

/// Holds every main-page route until configuration is ready and the first
/// run setup is done. A failed configuration load stays on the loading
/// screen; nothing is retried.
#[component]
fn StartupGuard() -> Element {
    let session = use_session();

    match session.phase() {
        Phase::Starting => rsx! { LoadingScreen {} },
        Phase::Awaiting(reason) => rsx! {
            LoadingScreen { message: "Waiting for configuration...", detail: reason }
        },
        Phase::NeedsSetup => {
            navigator().replace(Route::Setup {});
            rsx! { LoadingScreen { message: "Opening setup..." } }
        }
        Phase::Ready(config) => rsx! { Workspace { config } },
    }
}

/// Provides the session's configuration and panel state to every page.
#[component]
fn Workspace(config: AppConfig) -> Element {
    let session = use_session();
    use_context_provider(|| Panels::new(&config, &session.branding().app_name));
    use_context_provider(|| config.clone());

    rsx! { Outlet::<Route> {} }
}

#[component]
pub fn PanelIcon(panel: Panel) -> Element {
    match panel {
        Panel::DocumentUpload => rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
        Panel::CaseSearch => rsx! { Icon { icon: LdSearch, width: 18, height: 18 } },
        Panel::ContractAnalysis => rsx! { Icon { icon: LdScale, width: 18, height: 18 } },
        Panel::JurisprudenceSearch => rsx! { Icon { icon: LdBookOpen, width: 18, height: 18 } },
        Panel::Chat => rsx! { Icon { icon: LdMessageSquare, width: 18, height: 18 } },
    }
}

/// Branded header with navigation over the enabled panels, and a contact
/// footer.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let config: AppConfig = use_context();
    let branding = session.branding();

    let nav_class = move |target: &Route| {
        if *target == route {
            "app-nav-link active"
        } else {
            "app-nav-link"
        }
    };
    let settings_class = nav_class(&Route::Settings {});

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Home {}, class: "app-brand",
                    img { class: "app-logo", src: "{branding.logo_url}", alt: "{branding.app_name}" }
                    div { class: "app-brand-text",
                        span { class: "app-name", "{branding.app_name}" }
                        span { class: "app-tagline", "{branding.tagline}" }
                    }
                }
                nav { class: "app-nav",
                    for panel in config.features.enabled_panels() {
                        Link {
                            key: "{panel.as_str()}",
                            to: Route::for_panel(panel),
                            class: nav_class(&Route::for_panel(panel)),
                            PanelIcon { panel }
                            span { "{panel.display_name()}" }
                        }
                    }
                    Link { to: Route::Settings {}, class: settings_class,
                        Icon { icon: LdSettings, width: 18, height: 18 }
                        span { "Settings" }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            footer { class: "app-footer",
                span { "{branding.app_name}" }
                a { href: "mailto:{branding.contact.email}", "{branding.contact.email}" }
                span { "{branding.contact.phone}" }
                a { href: "{branding.contact.website}", target: "_blank", rel: "noopener", "{branding.contact.website}" }
            }
        }
    }
}

/// Renders `children` only when the deployment enables `panel`.
#[component]
pub fn FeatureGate(panel: Panel, children: Element) -> Element {
    let config: AppConfig = use_context();

    if config.features.is_enabled(panel) {
        rsx! { {children} }
    } else {
        rsx! {
            Notice { "{panel.display_name()} is not available in this deployment." }
        }
    }
}
