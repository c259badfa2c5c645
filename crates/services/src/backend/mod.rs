mod fixtures;
pub mod mock;

use crate::gateway::ApiGateway;
use async_trait::async_trait;
use shared_types::{
    AnalysisType, AppError, BackendMode, CaseInfo, CaseSearchRequest, ChatRequest, ChatResponse,
    ContractAnalysis, DocumentAnalysis, FileUpload, JurisprudenceSearchRequest,
    JurisprudenceSearchResponse, MindMap, UploadResponse,
};
use std::rc::Rc;

pub use mock::{MockBackend, MockDelays};

// ── Trait ────────────────────────────────────────────────────────────

/// Every capability the feature panels need from a legal-analysis backend.
///
/// Implemented by the live [`ApiGateway`] and by [`MockBackend`]. Futures are
/// `?Send` because the application runs on a single-threaded executor.
#[async_trait(?Send)]
pub trait LegalBackend {
    async fn upload_document(&self, file: &FileUpload) -> Result<UploadResponse, AppError>;

    async fn analyze_document(
        &self,
        document_id: &str,
        analysis_type: AnalysisType,
    ) -> Result<DocumentAnalysis, AppError>;

    async fn get_document_analysis(&self, document_id: &str) -> Result<DocumentAnalysis, AppError>;

    async fn generate_mind_map(&self, document_id: &str) -> Result<MindMap, AppError>;

    async fn search_case(&self, request: &CaseSearchRequest) -> Result<CaseInfo, AppError>;

    async fn analyze_contract(&self, document_id: &str) -> Result<ContractAnalysis, AppError>;

    async fn search_jurisprudence(
        &self,
        request: &JurisprudenceSearchRequest,
    ) -> Result<JurisprudenceSearchResponse, AppError>;

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

/// Pick the implementation configured by `api.mode`.
pub fn select_backend(
    mode: BackendMode,
    gateway: Rc<ApiGateway>,
    mock: MockBackend,
) -> Rc<dyn LegalBackend> {
    match mode {
        BackendMode::Live => {
            tracing::info!("Using live legal backend");
            gateway
        }
        BackendMode::Mock => {
            tracing::info!("Using mock legal backend");
            Rc::new(mock)
        }
    }
}
