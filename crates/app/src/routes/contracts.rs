use dioxus::prelude::*;
use services::panels::PanelController;
use shared_types::{ContractAnalysis, Panel};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, InlineError, Notice, PageHeader, PageSubtitle, PageTitle,
};
use uuid::Uuid;

use super::{FeatureGate, Route};
use crate::session::{submit_panel, use_panels, use_session};

#[component]
pub fn Contracts() -> Element {
    rsx! {
        FeatureGate { panel: Panel::ContractAnalysis, ContractsPanel {} }
    }
}

#[component]
fn ContractsPanel() -> Element {
    let session = use_session();
    let panels = use_panels();
    let upload = panels.upload;
    let mut contract = panels.contract;

    let ready: Vec<(Uuid, String)> = upload
        .read()
        .ready_documents()
        .map(|d| (d.id, d.name.clone()))
        .collect();
    let (selected, analysis, error, loading) = {
        let p = contract.read();
        (
            p.selected(),
            p.analysis().cloned(),
            p.error().map(str::to_string),
            p.is_loading(),
        )
    };
    let selected_value = selected.map(|id| id.to_string()).unwrap_or_default();

    let handle_select = move |evt: Event<FormData>| {
        let Ok(id) = Uuid::parse_str(&evt.value()) else {
            return;
        };
        if let Some(document) = upload.read().document(id) {
            if let Err(err) = contract.write().select(document) {
                tracing::warn!(error = %err, "Document cannot be analyzed yet");
            }
        }
    };

    let analyze = move |_: MouseEvent| match session.backend() {
        Ok(backend) => submit_panel(contract, backend),
        Err(err) => tracing::error!(error = %err, "Contract analysis unavailable"),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Contract Analysis" }
                PageSubtitle { "Pick a processed document to score its clauses and compliance." }
            }

            Card {
                if ready.is_empty() {
                    Notice {
                        "No processed documents yet. "
                        Link { to: Route::Documents {}, "Upload a contract first." }
                    }
                } else {
                    FormSelect {
                        label: "Contract",
                        value: selected_value.clone(),
                        onchange: handle_select,
                        option { value: "", disabled: true, selected: selected.is_none(), "Select a document" }
                        for (id, name) in ready {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: id.to_string() == selected_value,
                                "{name}"
                            }
                        }
                    }
                    Button {
                        loading: loading,
                        disabled: selected.is_none(),
                        onclick: analyze,
                        "Analyze contract"
                    }
                }
                InlineError { message: error }
            }

            if let Some(analysis) = analysis {
                ContractReport { analysis }
            }
        }
    }
}

#[component]
fn ContractReport(analysis: ContractAnalysis) -> Element {
    let level = analysis.risk_level();
    let non_compliant = analysis.non_compliant().count();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Score {analysis.score}/100" }
                CardDescription { "{analysis.summary}" }
            }
            CardContent {
                div { class: "score-row",
                    div { class: "score-bar",
                        div { class: "score-bar-fill", style: "width: {analysis.score}%" }
                    }
                    Badge { variant: BadgeVariant::for_severity(level), "{level.display_name()}" }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Risks" } }
            CardContent {
                for risk in analysis.risks_by_severity() {
                    div { key: "{risk.id}", class: "finding",
                        div { class: "finding-head",
                            Badge { variant: BadgeVariant::for_severity(risk.severity), "{risk.severity.display_name()}" }
                            strong { " {risk.clause}" }
                        }
                        p { "{risk.description}" }
                        p { class: "muted", "{risk.recommendation}" }
                    }
                }
            }
        }

        if !analysis.suggestions.is_empty() {
            Card {
                CardHeader { CardTitle { "Suggestions" } }
                CardContent {
                    for suggestion in analysis.suggestions.iter() {
                        div { key: "{suggestion.id}", class: "finding",
                            div { class: "finding-head",
                                Badge { variant: BadgeVariant::Outline, "{suggestion.kind}" }
                                strong { " {suggestion.clause}" }
                            }
                            p { "{suggestion.description}" }
                            blockquote { "{suggestion.new_text}" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Compliance" }
                CardDescription { "{non_compliant} item(s) need attention" }
            }
            CardContent {
                for item in analysis.compliance.iter() {
                    div { key: "{item.id}", class: "finding",
                        div { class: "finding-head",
                            Badge { variant: BadgeVariant::for_compliance(item.status), "{item.law}, {item.article}" }
                        }
                        p { "{item.description}" }
                    }
                }
            }
        }
    }
}
