use crate::feature_flags::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// API settings
// ---------------------------------------------------------------------------

/// Which implementation answers panel requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Fixed-delay fixture data; no network traffic.
    #[default]
    Mock,
    /// The REST backend at `ApiSettings::base_url`.
    Live,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_ms: u64,
    pub mode: BackendMode,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 30_000,
            mode: BackendMode::Mock,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Body of the backend's `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BackendHealth {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// ---------------------------------------------------------------------------
// Courts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Superior,
    Federal,
    State,
    Labor,
    Electoral,
    Military,
}

impl Jurisdiction {
    pub fn display_name(&self) -> &'static str {
        match self {
            Jurisdiction::Superior => "Superior court",
            Jurisdiction::Federal => "Federal court",
            Jurisdiction::State => "State court",
            Jurisdiction::Labor => "Labor court",
            Jurisdiction::Electoral => "Electoral court",
            Jurisdiction::Military => "Military court",
        }
    }
}

/// A court the case search panel can query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub url: String,
    pub jurisdiction: Jurisdiction,
}

fn default_courts() -> Vec<Court> {
    let court = |id: &str, name: &str, url: &str, jurisdiction| Court {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        jurisdiction,
    };
    vec![
        court("stf", "Supremo Tribunal Federal", "https://portal.stf.jus.br", Jurisdiction::Superior),
        court("stj", "Superior Tribunal de Justiça", "https://www.stj.jus.br", Jurisdiction::Superior),
        court("tst", "Tribunal Superior do Trabalho", "https://www.tst.jus.br", Jurisdiction::Labor),
        court("trf3", "Tribunal Regional Federal da 3ª Região", "https://www.trf3.jus.br", Jurisdiction::Federal),
        court("tjsp", "Tribunal de Justiça de São Paulo", "https://www.tjsp.jus.br", Jurisdiction::State),
        court("tjrj", "Tribunal de Justiça do Rio de Janeiro", "https://www.tjrj.jus.br", Jurisdiction::State),
    ]
}

// ---------------------------------------------------------------------------
// Upload limits / security
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadLimits {
    /// Bytes.
    pub max_file_size: u64,
    /// Lowercase, with leading dot.
    pub allowed_extensions: Vec<String>,
    pub max_files: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_extensions: [".pdf", ".docx", ".doc", ".txt"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_files: 5,
        }
    }
}

impl UploadLimits {
    /// Value for an `<input type="file" accept=...>` attribute.
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions.join(",")
    }
}

/// Security switches carried for the backend; nothing here is enforced by
/// the front-end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub require_https: bool,
    pub session_timeout_minutes: u32,
    pub enable_csrf: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            require_https: false,
            session_timeout_minutes: 60,
            enable_csrf: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Operational configuration, fetched once from `app.json` and immutable for
/// the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default = "default_courts")]
    pub courts: Vec<Court>,
    #[serde(default)]
    pub upload: UploadLimits,
    #[serde(default)]
    pub security: SecuritySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            features: FeatureFlags::default(),
            courts: default_courts(),
            upload: UploadLimits::default(),
            security: SecuritySettings::default(),
        }
    }
}

impl AppConfig {
    pub fn court(&self, id: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }
}
