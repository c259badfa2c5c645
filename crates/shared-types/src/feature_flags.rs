use serde::{Deserialize, Serialize};

/// Which feature panels this deployment exposes.
///
/// Loaded from `app.json` at startup. Unlike optional integrations, panels
/// are the product, so a flag missing from the document means enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub document_upload: bool,
    #[serde(default = "enabled")]
    pub case_search: bool,
    #[serde(default = "enabled")]
    pub contract_analysis: bool,
    #[serde(default = "enabled")]
    pub jurisprudence_search: bool,
    #[serde(default = "enabled")]
    pub chat: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            document_upload: true,
            case_search: true,
            contract_analysis: true,
            jurisprudence_search: true,
            chat: true,
        }
    }
}

/// The five feature panels, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Panel {
    DocumentUpload,
    CaseSearch,
    ContractAnalysis,
    JurisprudenceSearch,
    Chat,
}

pub const ALL_PANELS: &[Panel] = &[
    Panel::DocumentUpload,
    Panel::CaseSearch,
    Panel::ContractAnalysis,
    Panel::JurisprudenceSearch,
    Panel::Chat,
];

impl Panel {
    /// URL segment and storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::DocumentUpload => "documents",
            Panel::CaseSearch => "cases",
            Panel::ContractAnalysis => "contracts",
            Panel::JurisprudenceSearch => "jurisprudence",
            Panel::Chat => "chat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Panel::DocumentUpload => "Documents",
            Panel::CaseSearch => "Case Search",
            Panel::ContractAnalysis => "Contract Analysis",
            Panel::JurisprudenceSearch => "Jurisprudence",
            Panel::Chat => "Assistant",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        ALL_PANELS.iter().copied().find(|p| p.as_str() == s)
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, panel: Panel) -> bool {
        match panel {
            Panel::DocumentUpload => self.document_upload,
            Panel::CaseSearch => self.case_search,
            Panel::ContractAnalysis => self.contract_analysis,
            Panel::JurisprudenceSearch => self.jurisprudence_search,
            Panel::Chat => self.chat,
        }
    }

    /// Enabled panels in navigation order.
    pub fn enabled_panels(&self) -> Vec<Panel> {
        ALL_PANELS
            .iter()
            .copied()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }
}
