use pretty_assertions::assert_eq;
use services::branding::BrandingSource;
use services::config::StaticConfigSource;
use services::panels::{submit, CaseSearchPanel};
use services::storage::{BRANDING_KEY, SETUP_COMPLETED_KEY};
use services::surface::RecordingSurface;
use services::{initialize, ConfigState, KeyValueStore, MemoryStore};
use shared_types::{AppErrorKind, BrandingPatch, ThemeMode};
use std::rc::Rc;

use crate::common::{config_source, fast_options, live_config_json, spawn_stub, KNOWN_CASE};

#[tokio::test]
async fn first_run_loads_remote_branding_and_needs_setup() {
    let storage = Rc::new(MemoryStore::new());
    let surface = Rc::new(RecordingSurface::new());
    let source = config_source("{}", Some(r#"{"appName": "Almeida & Filhos", "tagline": "Direito empresarial"}"#));

    let services = initialize(storage, surface.clone(), Rc::new(source), fast_options()).await;

    assert!(services.config.is_ready());
    assert!(!services.setup_completed);
    assert_eq!(services.branding.source(), BrandingSource::Remote);
    assert_eq!(services.branding.config().app_name, "Almeida & Filhos");
    let applied = surface.last().unwrap();
    assert_eq!(applied.title, "Almeida & Filhos | Direito empresarial");
    assert_eq!(applied.mode, ThemeMode::Light);
}

#[tokio::test]
async fn missing_app_config_keeps_waiting_but_still_brands() {
    let source = StaticConfigSource::new();
    let surface = Rc::new(RecordingSurface::new());

    let services = initialize(Rc::new(MemoryStore::new()), surface.clone(), Rc::new(source), fast_options()).await;

    assert!(matches!(services.config, ConfigState::Awaiting { reason: Some(_) }));
    assert!(!services.gateway.is_bound());
    assert_eq!(services.backend().err().map(|e| e.kind), Some(AppErrorKind::NotInitialized));
    assert_eq!(services.branding.source(), BrandingSource::Defaults);
    assert_eq!(surface.count(), 1);
}

#[tokio::test]
async fn persisted_branding_survives_restart() {
    let storage = Rc::new(MemoryStore::new());
    let remote = r#"{"appName": "Remote Default"}"#;

    let mut first = initialize(
        storage.clone(),
        Rc::new(RecordingSurface::new()),
        Rc::new(config_source("{}", Some(remote))),
        fast_options(),
    )
    .await;
    first
        .branding
        .update(&BrandingPatch {
            app_name: Some("Ribeiro Advocacia".to_string()),
            ..BrandingPatch::default()
        })
        .unwrap();
    storage.set(SETUP_COMPLETED_KEY, "true").unwrap();

    let second = initialize(
        storage.clone(),
        Rc::new(RecordingSurface::new()),
        Rc::new(config_source("{}", Some(remote))),
        fast_options(),
    )
    .await;

    assert!(second.setup_completed);
    assert_eq!(second.branding.source(), BrandingSource::Persisted);
    assert_eq!(second.branding.config().app_name, "Ribeiro Advocacia");
    assert!(storage.get(BRANDING_KEY).unwrap().is_some());
}

#[tokio::test]
async fn system_dark_preference_applies_dark_palette() {
    let surface = Rc::new(RecordingSurface::new().prefers_dark());

    let services = initialize(
        Rc::new(MemoryStore::new()),
        surface.clone(),
        Rc::new(config_source("{}", None)),
        fast_options(),
    )
    .await;

    let applied = surface.last().unwrap();
    assert_eq!(applied.mode, ThemeMode::Dark);
    assert_eq!(
        applied.variable("--color-background"),
        Some(services.branding.config().colors.dark.background.as_str())
    );
}

#[tokio::test]
async fn live_mode_routes_panels_through_the_gateway() {
    let stub = spawn_stub().await;
    let source = config_source(&live_config_json(&stub.base_url, 5_000), None);

    let services = initialize(
        Rc::new(MemoryStore::new()),
        Rc::new(RecordingSurface::new()),
        Rc::new(source),
        fast_options(),
    )
    .await;
    assert_eq!(services.gateway.base_url(), Some(stub.base_url.as_str()));

    let backend = services.backend().unwrap();
    let courts = services.config.ready().unwrap().courts.clone();
    let mut panel = CaseSearchPanel::new(courts);
    panel.case_number = KNOWN_CASE.to_string();
    panel.court = "tjsp".to_string();
    submit(&mut panel, backend.as_ref()).await.unwrap();

    assert_eq!(panel.info().unwrap().number, KNOWN_CASE);
    assert_eq!(stub.log.paths(), vec!["/api/cases/search".to_string()]);
}
