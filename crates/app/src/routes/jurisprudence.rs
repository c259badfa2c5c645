use dioxus::prelude::*;
use services::panels::PanelController;
use shared_types::{
    AppConfig, JurisprudenceResult, Panel, RelevanceLevel, ALL_RELEVANCE_LEVELS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, InlineError, Input, Notice, PageHeader, PageSubtitle, PageTitle,
};

use super::FeatureGate;
use crate::session::{submit_panel, use_panels, use_session};

#[component]
pub fn Jurisprudence() -> Element {
    rsx! {
        FeatureGate { panel: Panel::JurisprudenceSearch, JurisprudencePanelView {} }
    }
}

fn relevance_label(level: RelevanceLevel) -> String {
    format!("{}+", level.min_score())
}

#[component]
fn JurisprudencePanelView() -> Element {
    let session = use_session();
    let config: AppConfig = use_context();
    let mut panel = use_panels().jurisprudence;

    let (query, filters, response, error, loading) = {
        let p = panel.read();
        (
            p.query.clone(),
            p.filters.clone(),
            p.response().cloned(),
            p.error().map(str::to_string),
            p.is_loading(),
        )
    };
    let court_filter = filters.court.clone().unwrap_or_default();
    let relevance_filter = filters.relevance.map(|l| l.as_str()).unwrap_or_default();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.backend() {
            Ok(backend) => submit_panel(panel, backend),
            Err(err) => tracing::error!(error = %err, "Jurisprudence search unavailable"),
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Jurisprudence" }
                PageSubtitle { "Search decisions by topic; results are ranked by relevance." }
            }

            Card {
                form { class: "search-form", onsubmit: handle_submit,
                    Input {
                        label: "Query",
                        value: query,
                        placeholder: "e.g. danos morais, cláusula penal",
                        on_input: move |evt: FormEvent| panel.write().query = evt.value(),
                    }
                    FormSelect {
                        label: "Court",
                        value: court_filter.clone(),
                        onchange: move |evt: Event<FormData>| {
                            let value = evt.value();
                            panel.write().filters.court = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", selected: court_filter.is_empty(), "All courts" }
                        for court in config.courts.iter() {
                            option {
                                key: "{court.id}",
                                value: "{court.id}",
                                selected: court.id == court_filter,
                                "{court.name}"
                            }
                        }
                    }
                    FormSelect {
                        label: "Relevance",
                        value: relevance_filter.to_string(),
                        onchange: move |evt: Event<FormData>| {
                            panel.write().filters.relevance = RelevanceLevel::from_key(&evt.value());
                        },
                        option { value: "", selected: relevance_filter.is_empty(), "Any" }
                        for level in ALL_RELEVANCE_LEVELS {
                            option {
                                key: "{level.as_str()}",
                                value: "{level.as_str()}",
                                selected: level.as_str() == relevance_filter,
                                "{relevance_label(*level)}"
                            }
                        }
                    }
                    Button { button_type: "submit", loading: loading, "Search" }
                }
                InlineError { message: error }
            }

            if let Some(response) = response {
                p { class: "muted", "{response.total} result(s) for '{response.query}'" }
                if response.results.is_empty() {
                    Notice { "No decisions match these filters." }
                }
                for result in response.results {
                    ResultCard { key: "{result.id}", result }
                }
            }
        }
    }
}

#[component]
fn ResultCard(result: JurisprudenceResult) -> Element {
    let date = result.date.format("%d/%m/%Y").to_string();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{result.court} · {date}" }
                CardDescription { "Relevance {result.relevance}%" }
            }
            CardContent {
                p { "{result.summary}" }
                p { class: "muted", "{result.decision}" }
                div { class: "tag-row",
                    for tag in result.tags.iter() {
                        Badge { key: "{tag}", variant: BadgeVariant::Outline, "{tag}" }
                    }
                }
            }
        }
    }
}
