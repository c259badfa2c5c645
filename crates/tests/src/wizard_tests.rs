use pretty_assertions::assert_eq;
use services::surface::RecordingSurface;
use services::wizard::is_setup_completed;
use services::{initialize, MemoryStore, SetupWizard, WizardStep};
use shared_types::{AppErrorKind, ThemeMode};
use std::rc::Rc;

use crate::common::{config_source, fast_options};

#[tokio::test]
async fn wizard_walkthrough_commits_branding_and_flag() {
    let storage = Rc::new(MemoryStore::new());
    let surface = Rc::new(RecordingSurface::new());
    let mut services = initialize(
        storage.clone(),
        surface.clone(),
        Rc::new(config_source("{}", None)),
        fast_options(),
    )
    .await;
    assert!(!services.setup_completed);

    let mut wizard = SetupWizard::new(services.branding.config());
    wizard.draft_mut().app_name = "Moreira Sociedade de Advogados".to_string();
    wizard.draft_mut().tagline = "Contencioso cível".to_string();
    assert_eq!(wizard.next().unwrap(), WizardStep::VisualIdentity);

    wizard.draft_mut().colors.light.primary = "#0B3D91".to_string();
    assert_eq!(wizard.next().unwrap(), WizardStep::Contact);

    wizard.draft_mut().contact.email = "sem-arroba".to_string();
    let err = wizard.next().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(wizard.field_error("contact.email").is_some());
    assert_eq!(wizard.step(), WizardStep::Contact);

    wizard.draft_mut().contact.email = "contato@moreira.adv.br".to_string();
    assert_eq!(wizard.next().unwrap(), WizardStep::Summary);

    // Nothing reaches the store before completion.
    assert_eq!(services.branding.config().app_name, "JurisAI");

    wizard
        .complete(&mut services.branding, services.storage.as_ref())
        .unwrap();

    assert_eq!(services.branding.config().app_name, "Moreira Sociedade de Advogados");
    assert!(is_setup_completed(storage.as_ref()));
    let applied = surface.last().unwrap();
    assert_eq!(applied.mode, ThemeMode::Light);
    assert_eq!(applied.variable("--color-primary"), Some("#0B3D91"));
    assert_eq!(applied.title, "Moreira Sociedade de Advogados | Contencioso cível");

    let restarted = initialize(
        storage,
        Rc::new(RecordingSurface::new()),
        Rc::new(config_source("{}", None)),
        fast_options(),
    )
    .await;
    assert!(restarted.setup_completed);
    assert_eq!(restarted.branding.config().contact.email, "contato@moreira.adv.br");
}

#[tokio::test]
async fn backing_out_keeps_draft_edits() {
    let services = initialize(
        Rc::new(MemoryStore::new()),
        Rc::new(RecordingSurface::new()),
        Rc::new(config_source("{}", None)),
        fast_options(),
    )
    .await;

    let mut wizard = SetupWizard::new(services.branding.config());
    wizard.draft_mut().app_name = "Teixeira Advogados".to_string();
    wizard.next().unwrap();
    assert_eq!(wizard.back(), WizardStep::BasicInfo);
    assert_eq!(wizard.draft().app_name, "Teixeira Advogados");
}
