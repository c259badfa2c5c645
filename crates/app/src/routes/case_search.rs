use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use services::panels::PanelController;
use shared_types::{CaseInfo, DeadlinePriority, Panel};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, DetailGrid, DetailItem,
    DetailList, FormSelect, InlineError, Input, PageHeader, PageSubtitle, PageTitle,
};

use super::FeatureGate;
use crate::session::{submit_panel, use_panels, use_session};

#[component]
pub fn CaseSearch() -> Element {
    rsx! {
        FeatureGate { panel: Panel::CaseSearch, CaseSearchPanelView {} }
    }
}

#[component]
fn CaseSearchPanelView() -> Element {
    let session = use_session();
    let mut panel = use_panels().case_search;

    let (case_number, court, courts, info, error, loading) = {
        let p = panel.read();
        (
            p.case_number.clone(),
            p.court.clone(),
            p.courts().to_vec(),
            p.info().cloned(),
            p.error().map(str::to_string),
            p.is_loading(),
        )
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.backend() {
            Ok(backend) => submit_panel(panel, backend),
            Err(err) => tracing::error!(error = %err, "Case search unavailable"),
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Case Search" }
                PageSubtitle { "Unified CNJ numbering: NNNNNNN-DD.AAAA.J.TR.OOOO" }
            }

            Card {
                form { class: "search-form", onsubmit: handle_submit,
                    Input {
                        label: "Case number",
                        value: case_number,
                        placeholder: "0000000-00.0000.0.00.0000",
                        on_input: move |evt: FormEvent| panel.write().case_number = evt.value(),
                    }
                    FormSelect {
                        label: "Court",
                        value: court.clone(),
                        onchange: move |evt: Event<FormData>| panel.write().court = evt.value(),
                        for c in courts {
                            option {
                                key: "{c.id}",
                                value: "{c.id}",
                                selected: c.id == court,
                                "{c.name}"
                            }
                        }
                    }
                    Button { button_type: "submit", loading: loading, "Search" }
                }
                InlineError { message: error }
            }

            if let Some(info) = info {
                CaseInfoView { info }
            }
        }
    }
}

fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn priority_variant(priority: DeadlinePriority) -> BadgeVariant {
    match priority {
        DeadlinePriority::High => BadgeVariant::Destructive,
        DeadlinePriority::Medium => BadgeVariant::Warning,
        DeadlinePriority::Low => BadgeVariant::Secondary,
    }
}

#[component]
fn CaseInfoView(info: CaseInfo) -> Element {
    let now = Utc::now();
    let last_update = short_date(&info.last_update);
    let parties = info.parties.join(" × ");

    rsx! {
        DetailGrid {
            Card {
                CardHeader { CardTitle { "{info.number}" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Court", value: info.court.clone() }
                        DetailItem { label: "Status",
                            Badge { variant: BadgeVariant::Primary, "{info.status}" }
                        }
                        DetailItem { label: "Subject", value: info.subject.clone() }
                        DetailItem { label: "Parties", value: parties }
                        DetailItem { label: "Last update", value: last_update }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Deadlines" } }
                CardContent {
                    ul { class: "deadline-list",
                        for deadline in info.pending_deadlines() {
                            li { key: "{deadline.id}",
                                Badge { variant: priority_variant(deadline.priority), "{deadline.priority.as_str()}" }
                                span { " {deadline.description} " }
                                span { class: "muted", "in {deadline.days_until(now)} days" }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Timeline" } }
            CardContent {
                ol { class: "timeline",
                    for event in info.timeline.iter() {
                        li { key: "{event.id}", "data-kind": "{event.kind.display_name()}",
                            span { class: "timeline-date", "{short_date(&event.date)}" }
                            span { class: "timeline-description", "{event.description}" }
                        }
                    }
                }
            }
        }
    }
}
