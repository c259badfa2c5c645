use crate::gateway::ApiGateway;
use async_trait::async_trait;
use shared_types::{AppConfig, AppError};
use std::collections::HashMap;

/// Operational configuration resource.
pub const APP_CONFIG_RESOURCE: &str = "app.json";
/// Deployment-wide branding default.
pub const BRANDING_RESOURCE: &str = "branding.json";

// ── Sources ──────────────────────────────────────────────────────────

/// Where static configuration resources are fetched from.
#[async_trait(?Send)]
pub trait ConfigSource {
    async fn fetch(&self, name: &str) -> Result<String, AppError>;
}

/// Resources served over HTTP, e.g. `/config/app.json` next to the bundle.
pub struct HttpConfigSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConfigSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self, name: &str) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("GET {url} failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("GET {url} body: {e}")))?;
        if !status.is_success() {
            return Err(AppError::from_response(status.as_u16(), &body));
        }
        Ok(body)
    }
}

/// Resources read from a directory on disk (desktop builds).
#[cfg(not(target_arch = "wasm32"))]
pub struct FileConfigSource {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileConfigSource {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ConfigSource for FileConfigSource {
    async fn fetch(&self, name: &str) -> Result<String, AppError> {
        let path = self.dir.join(name);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::not_found(format!("{} does not exist", path.display()))
            }
            _ => AppError::storage(format!("cannot read {}: {e}", path.display())),
        })
    }
}

/// Fixed in-memory resources.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigSource {
    files: HashMap<String, String>,
}

impl StaticConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, contents: impl Into<String>) -> Self {
        self.files.insert(name.to_string(), contents.into());
        self
    }
}

#[async_trait(?Send)]
impl ConfigSource for StaticConfigSource {
    async fn fetch(&self, name: &str) -> Result<String, AppError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("{name} is not available")))
    }
}

// ── Loader ───────────────────────────────────────────────────────────

/// Outcome of the startup configuration fetch.
///
/// There is no "empty" configuration: until a document has been loaded the
/// application stays `Awaiting` and renders a loading indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigState {
    Awaiting { reason: Option<String> },
    Ready(AppConfig),
}

impl ConfigState {
    pub fn ready(&self) -> Option<&AppConfig> {
        match self {
            ConfigState::Ready(config) => Some(config),
            ConfigState::Awaiting { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ConfigState::Ready(_))
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState::Awaiting { reason: None }
    }
}

/// Parse a configuration document; `.toml` resources are TOML, anything else
/// JSON.
pub fn parse_app_config(name: &str, contents: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = if name.ends_with(".toml") {
        toml::from_str(contents)
            .map_err(|e| AppError::config_unavailable(format!("{name}: {e}")))?
    } else {
        serde_json::from_str(contents)
            .map_err(|e| AppError::config_unavailable(format!("{name}: {e}")))?
    };
    check_app_config(&config)
        .map_err(|msg| AppError::config_unavailable(format!("{name}: {msg}")))?;
    Ok(config)
}

fn check_app_config(config: &AppConfig) -> Result<(), String> {
    if config.api.base_url.trim().is_empty() {
        return Err("api.baseUrl must not be empty".to_string());
    }
    if config.api.timeout_ms == 0 {
        return Err("api.timeoutMs must be greater than zero".to_string());
    }
    if config.upload.allowed_extensions.is_empty() {
        return Err("upload.allowedExtensions must list at least one extension".to_string());
    }
    if config.upload.max_files == 0 {
        return Err("upload.maxFiles must be greater than zero".to_string());
    }
    Ok(())
}

pub struct AppConfigLoader;

impl AppConfigLoader {
    /// Fetch `resource` once and bind the gateway from it. Never retries.
    pub async fn load(source: &dyn ConfigSource, resource: &str, gateway: &ApiGateway) -> ConfigState {
        let config = match source.fetch(resource).await {
            Ok(contents) => parse_app_config(resource, &contents),
            Err(e) => Err(e),
        };

        match config {
            Ok(config) => {
                if let Err(e) = gateway.bind(&config.api.base_url, config.api.timeout()) {
                    tracing::warn!(error = %e, "API gateway was already bound; keeping first binding");
                }
                tracing::info!(
                    resource,
                    mode = ?config.api.mode,
                    base_url = %config.api.base_url,
                    panels = config.features.enabled_panels().len(),
                    "Application configuration loaded"
                );
                ConfigState::Ready(config)
            }
            Err(e) => {
                tracing::warn!(resource, error = %e, "Application configuration unavailable");
                ConfigState::Awaiting {
                    reason: Some(e.message),
                }
            }
        }
    }
}
