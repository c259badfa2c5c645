use dioxus::prelude::*;
use shared_types::{AppError, BrandingPatch};
use shared_ui::theme::ThemePicker;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    InlineError, Notice, PageHeader, PageSubtitle, PageTitle,
};
use std::collections::HashMap;

use super::branding_form::{BasicInfoFields, ContactFields, VisualIdentityFields};
use super::Route;
use crate::session::use_session;

/// Outcome of the last save or reset.
#[derive(Debug, Clone, PartialEq, Default)]
struct SaveState {
    message: Option<String>,
    error: Option<String>,
    field_errors: HashMap<String, String>,
}

impl SaveState {
    fn saved(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn failed(err: AppError) -> Self {
        Self {
            message: None,
            error: Some(err.user_message()),
            field_errors: err.field_errors,
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut session = use_session();
    let mut draft = use_signal(|| session.branding());
    let mut state = use_signal(SaveState::default);
    let preference = session.theme_preference();

    let current = draft();
    let saved = session.branding();
    let dirty = current != saved;
    let SaveState {
        message,
        error,
        field_errors,
    } = state();

    let edit = move |patch: BrandingPatch| {
        draft.write().apply(&patch);
        state.set(SaveState::default());
    };

    let save = move |_: MouseEvent| {
        let patch = BrandingPatch::from(&*draft.read());
        let outcome = match session.update_branding(&patch) {
            Ok(()) => {
                tracing::info!("Branding saved from settings");
                SaveState::saved("Branding saved.")
            }
            Err(err) => SaveState::failed(err),
        };
        state.set(outcome);
    };

    let reset = move |_: MouseEvent| match session.reset_branding() {
        Ok(()) => {
            draft.set(session.branding());
            state.set(SaveState::saved("Branding restored to the defaults."));
        }
        Err(err) => state.set(SaveState::failed(err)),
    };

    let discard = move |_: MouseEvent| {
        draft.set(session.branding());
        state.set(SaveState::default());
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Settings" }
                PageSubtitle { "Branding and appearance for this installation." }
            }

            Card {
                CardHeader {
                    CardTitle { "Appearance" }
                    CardDescription { "Light, dark, or follow the operating system." }
                }
                CardContent {
                    ThemePicker {
                        value: preference,
                        on_change: move |next| {
                            if let Err(err) = session.set_theme_preference(next) {
                                state.set(SaveState::failed(err));
                            }
                        },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Branding" }
                    CardDescription { "Changes apply when saved." }
                }
                CardContent {
                    h3 { class: "form-section-title", "Identity" }
                    BasicInfoFields {
                        value: current.clone(),
                        errors: field_errors.clone(),
                        on_change: edit,
                    }
                    h3 { class: "form-section-title", "Visual identity" }
                    VisualIdentityFields {
                        value: current.clone(),
                        errors: field_errors.clone(),
                        on_change: edit,
                    }
                    h3 { class: "form-section-title", "Contact" }
                    ContactFields {
                        value: current,
                        errors: field_errors,
                        on_change: edit,
                    }
                    InlineError { message: error }
                    if let Some(message) = message {
                        Notice { "{message}" }
                    }
                }
                CardFooter {
                    Button { disabled: !dirty, onclick: save, "Save" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !dirty,
                        onclick: discard,
                        "Discard changes"
                    }
                    Button { variant: ButtonVariant::Destructive, onclick: reset, "Reset to defaults" }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Setup" }
                    CardDescription { "Walk through the first-run wizard again." }
                }
                CardFooter {
                    Link { to: Route::Setup {}, class: "text-link", "Open setup wizard" }
                }
            }
        }
    }
}

