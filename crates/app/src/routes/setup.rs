use dioxus::prelude::*;
use services::wizard::ALL_STEPS;
use services::{SetupWizard, WizardStep};
use shared_types::BrandingPatch;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    InlineError, LoadingScreen,
};

use super::branding_form::{BasicInfoFields, BrandingSummary, ContactFields, VisualIdentityFields};
use super::Route;
use crate::session::use_session;

/// First-run setup. Reachable before the configuration is ready, since it
/// only touches branding.
#[component]
pub fn Setup() -> Element {
    let session = use_session();

    if !session.is_started() {
        return rsx! { LoadingScreen { message: "Preparing setup..." } };
    }
    rsx! { SetupWizardView {} }
}

fn step_description(step: WizardStep) -> &'static str {
    match step {
        WizardStep::BasicInfo => "Name the application and give it a tagline.",
        WizardStep::VisualIdentity => "Logo, favicon, fonts and the light and dark palettes.",
        WizardStep::Contact => "How clients reach the office.",
        WizardStep::Summary => "Check everything before saving.",
    }
}

fn step_state(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "current"
    } else if step.index() < current.index() {
        "done"
    } else {
        "upcoming"
    }
}

#[component]
fn SetupWizardView() -> Element {
    let mut session = use_session();
    let mut wizard = use_signal(|| SetupWizard::new(&session.branding()));
    let mut error = use_signal(|| None::<String>);
    let nav = navigator();

    let (step, draft, field_errors) = {
        let w = wizard.read();
        (w.step(), w.draft().clone(), w.field_errors().clone())
    };
    let position = step.index() + 1;
    let total = ALL_STEPS.len();

    let edit = move |patch: BrandingPatch| {
        wizard.write().draft_mut().apply(&patch);
    };

    let next = move |_: MouseEvent| {
        let result = wizard.write().next();
        match result {
            Ok(step) => {
                tracing::debug!(step = step.title(), "Setup step advanced");
                error.set(None);
            }
            Err(err) => error.set(Some(err.user_message())),
        }
    };

    let back = move |_: MouseEvent| {
        wizard.write().back();
        error.set(None);
    };

    let finish = move |_: MouseEvent| {
        let result = session.complete_setup(&mut wizard.write());
        match result {
            Ok(()) => {
                nav.replace(Route::Home {});
            }
            Err(err) => {
                tracing::error!(error = %err, "Setup could not be saved");
                error.set(Some(err.user_message()));
            }
        }
    };

    let fields = match step {
        WizardStep::BasicInfo => rsx! {
            BasicInfoFields { value: draft, errors: field_errors, on_change: edit }
        },
        WizardStep::VisualIdentity => rsx! {
            VisualIdentityFields { value: draft, errors: field_errors, on_change: edit }
        },
        WizardStep::Contact => rsx! {
            ContactFields { value: draft, errors: field_errors, on_change: edit }
        },
        WizardStep::Summary => rsx! {
            BrandingSummary { value: draft }
        },
    };
    let description = format!("Step {position} of {total}. {}", step_description(step));

    rsx! {
        div { class: "setup-page",
            Card { class: "setup-card",
                CardHeader {
                    ol { class: "setup-steps",
                        for s in ALL_STEPS.iter().copied() {
                            li {
                                key: "{s.index()}",
                                "data-state": step_state(s, step),
                                "{s.title()}"
                            }
                        }
                    }
                    CardTitle { "{step.title()}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    {fields}
                    InlineError { message: error() }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: step == WizardStep::BasicInfo,
                        onclick: back,
                        "Back"
                    }
                    if step == WizardStep::Summary {
                        Button { onclick: finish, "Finish setup" }
                    } else {
                        Button { onclick: next, "Next" }
                    }
                }
            }
        }
    }
}
