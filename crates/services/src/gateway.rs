//! REST client for the legal-analysis backend.
//!
//! The gateway is constructed unbound and bound exactly once, from the loaded
//! application configuration. JSON calls race the request against the bound
//! timeout; the multipart upload does not.

use crate::backend::LegalBackend;
use crate::time::with_timeout;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{
    AnalysisType, AnalyzeDocumentRequest, AppError, BackendHealth, CaseInfo, CaseSearchRequest,
    ChatRequest, ChatResponse, ContractAnalysis, DocumentAnalysis, FileUpload,
    JurisprudenceSearchRequest, JurisprudenceSearchResponse, MindMap, UploadResponse,
};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Binding {
    base_url: String,
    timeout: Duration,
}

pub struct ApiGateway {
    client: reqwest::Client,
    binding: OnceLock<Binding>,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiGateway {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            binding: OnceLock::new(),
        }
    }

    /// Bind the backend address and default timeout. A second bind is a
    /// `Conflict` and leaves the first binding in place.
    pub fn bind(&self, base_url: &str, timeout: Duration) -> Result<(), AppError> {
        let binding = Binding {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        };
        self.binding
            .set(binding)
            .map_err(|_| AppError::conflict("API gateway is already bound"))?;
        tracing::info!(base_url, timeout_ms = timeout.as_millis() as u64, "API gateway bound");
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.get().is_some()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.binding.get().map(|b| b.base_url.as_str())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.binding.get().map(|b| b.timeout)
    }

    fn binding(&self) -> Result<&Binding, AppError> {
        self.binding
            .get()
            .ok_or_else(|| AppError::not_initialized("API gateway used before configuration was loaded"))
    }

    /// `GET /health`. Not a panel capability, so it lives outside
    /// [`LegalBackend`].
    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> Result<BackendHealth, AppError> {
        self.get_json("/health", None).await
    }

    // ── Generic JSON calls ──────────────────────────────────────────

    /// `POST` a JSON body. `timeout` overrides the bound default.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let binding = self.binding()?;
        let request = self.client.post(format!("{}{}", binding.base_url, path)).json(body);
        with_timeout(
            timeout.unwrap_or(binding.timeout),
            path,
            send_json(request, path),
        )
        .await
    }

    /// `GET` a JSON resource. `timeout` overrides the bound default.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        timeout: Option<Duration>,
    ) -> Result<T, AppError> {
        let binding = self.binding()?;
        let request = self.client.get(format!("{}{}", binding.base_url, path));
        with_timeout(
            timeout.unwrap_or(binding.timeout),
            path,
            send_json(request, path),
        )
        .await
    }
}

async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    path: &str,
) -> Result<T, AppError> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::transport(format!("{path}: {e}")))?;
    decode(response, path).await
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::transport(format!("{path}: reading body failed: {e}")))?;
    if !status.is_success() {
        let err = AppError::from_response(status.as_u16(), &body);
        tracing::error!(path, status = status.as_u16(), error = %err.message, "Backend request failed");
        return Err(err);
    }
    serde_json::from_str(&body)
        .map_err(|e| AppError::transport(format!("{path}: unexpected response body: {e}")))
}

#[async_trait(?Send)]
impl LegalBackend for ApiGateway {
    /// Multipart upload; not subject to the request timeout.
    #[tracing::instrument(skip(self, file), fields(name = %file.name, size = file.size()))]
    async fn upload_document(&self, file: &FileUpload) -> Result<UploadResponse, AppError> {
        let binding = self.binding()?;
        let path = "/api/documents/upload";
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| AppError::invalid_file(format!("{}: {e}", file.name)))?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(format!("{}{}", binding.base_url, path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::transport(format!("{path}: {e}")))?;
        decode(response, path).await
    }

    #[tracing::instrument(skip(self))]
    async fn analyze_document(
        &self,
        document_id: &str,
        analysis_type: AnalysisType,
    ) -> Result<DocumentAnalysis, AppError> {
        self.post_json(
            &format!("/api/documents/{document_id}/analyze"),
            &AnalyzeDocumentRequest { analysis_type },
            None,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_document_analysis(&self, document_id: &str) -> Result<DocumentAnalysis, AppError> {
        self.get_json(&format!("/api/documents/{document_id}/analysis"), None)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn generate_mind_map(&self, document_id: &str) -> Result<MindMap, AppError> {
        self.post_json(
            &format!("/api/documents/{document_id}/mindmap"),
            &serde_json::json!({}),
            None,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn search_case(&self, request: &CaseSearchRequest) -> Result<CaseInfo, AppError> {
        self.post_json("/api/cases/search", request, None).await
    }

    #[tracing::instrument(skip(self))]
    async fn analyze_contract(&self, document_id: &str) -> Result<ContractAnalysis, AppError> {
        self.post_json(
            &format!("/api/contracts/{document_id}/analyze"),
            &serde_json::json!({}),
            None,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn search_jurisprudence(
        &self,
        request: &JurisprudenceSearchRequest,
    ) -> Result<JurisprudenceSearchResponse, AppError> {
        self.post_json("/api/jurisprudence/search", request, None)
            .await
    }

    #[tracing::instrument(skip(self, request), fields(len = request.message.len()))]
    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.post_json("/api/chat", request, None).await
    }
}
