use dioxus::prelude::*;
use shared_types::{AppConfig, Panel};
use shared_ui::{
    Card, CardDescription, CardHeader, CardTitle, DetailGrid, PageHeader, PageSubtitle, PageTitle,
};

use super::{PanelIcon, Route};
use crate::session::use_session;

fn panel_summary(panel: Panel) -> &'static str {
    match panel {
        Panel::DocumentUpload => "Upload PDF, Word or text files and get a summary with key points.",
        Panel::CaseSearch => "Look up a lawsuit by its CNJ number: status, parties, timeline and deadlines.",
        Panel::ContractAnalysis => "Score an uploaded contract and review its risks and compliance items.",
        Panel::JurisprudenceSearch => "Find relevant decisions, filtered by court and relevance.",
        Panel::Chat => "Ask the legal assistant about a document or a case.",
    }
}

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let config: AppConfig = use_context();
    let branding = session.branding();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{branding.app_name}" }
                PageSubtitle { "{branding.tagline}" }
            }
            DetailGrid {
                for panel in config.features.enabled_panels() {
                    Link { key: "{panel.as_str()}", to: Route::for_panel(panel), class: "home-card-link",
                        Card {
                            CardHeader {
                                CardTitle {
                                    PanelIcon { panel }
                                    " {panel.display_name()}"
                                }
                                CardDescription { "{panel_summary(panel)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
