use super::{fixtures, LegalBackend};
use crate::time::sleep;
use async_trait::async_trait;
use chrono::Utc;
use shared_types::{
    validation::is_valid_case_number, AnalysisType, AppError, CaseInfo, CaseSearchRequest,
    ChatRequest, ChatResponse, ContractAnalysis, Court, DocumentAnalysis, FileUpload,
    JurisprudenceSearchRequest, JurisprudenceSearchResponse, MindMap, UploadResponse,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Simulated latency per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub upload: Duration,
    pub analysis: Duration,
    pub search: Duration,
    pub chat: Duration,
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            upload: Duration::from_millis(800),
            analysis: Duration::from_millis(1500),
            search: Duration::from_millis(1000),
            chat: Duration::from_millis(700),
        }
    }
}

impl MockDelays {
    pub fn none() -> Self {
        Self {
            upload: Duration::ZERO,
            analysis: Duration::ZERO,
            search: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
struct StoredDocument {
    name: String,
    analysis: Option<DocumentAnalysis>,
}

/// In-process backend returning fixture data after a fixed delay.
///
/// Uploaded documents are remembered for the session so analysis calls for
/// unknown ids fail the way the real backend does.
pub struct MockBackend {
    delays: MockDelays,
    courts: Vec<Court>,
    documents: RefCell<HashMap<String, StoredDocument>>,
}

impl MockBackend {
    pub fn new(delays: MockDelays, courts: Vec<Court>) -> Self {
        Self {
            delays,
            courts,
            documents: RefCell::new(HashMap::new()),
        }
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    fn document_name(&self, document_id: &str) -> Result<String, AppError> {
        self.documents
            .borrow()
            .get(document_id)
            .map(|d| d.name.clone())
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    fn court_name(&self, court_id: &str) -> String {
        self.courts
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(court_id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| court_id.to_uppercase())
    }
}

#[async_trait(?Send)]
impl LegalBackend for MockBackend {
    async fn upload_document(&self, file: &FileUpload) -> Result<UploadResponse, AppError> {
        self.pause(self.delays.upload).await;
        let id = uuid::Uuid::new_v4().to_string();
        self.documents.borrow_mut().insert(
            id.clone(),
            StoredDocument {
                name: file.name.clone(),
                analysis: None,
            },
        );
        tracing::debug!(id = %id, name = %file.name, "Mock upload stored");
        Ok(UploadResponse {
            id,
            status: "uploaded".to_string(),
            filename: file.name.clone(),
        })
    }

    async fn analyze_document(
        &self,
        document_id: &str,
        analysis_type: AnalysisType,
    ) -> Result<DocumentAnalysis, AppError> {
        self.pause(self.delays.analysis).await;
        let name = self.document_name(document_id)?;
        let analysis = fixtures::document_analysis(&name, analysis_type);
        if let Some(doc) = self.documents.borrow_mut().get_mut(document_id) {
            doc.analysis = Some(analysis.clone());
        }
        Ok(analysis)
    }

    async fn get_document_analysis(&self, document_id: &str) -> Result<DocumentAnalysis, AppError> {
        self.pause(self.delays.search).await;
        self.documents
            .borrow()
            .get(document_id)
            .ok_or_else(|| AppError::not_found("Document not found"))?
            .analysis
            .clone()
            .ok_or_else(|| AppError::not_found("Document has not been analyzed"))
    }

    async fn generate_mind_map(&self, document_id: &str) -> Result<MindMap, AppError> {
        self.pause(self.delays.analysis).await;
        self.document_name(document_id)?;
        Ok(fixtures::mind_map())
    }

    async fn search_case(&self, request: &CaseSearchRequest) -> Result<CaseInfo, AppError> {
        self.pause(self.delays.search).await;
        let case_number = request.case_number.trim();
        if case_number.is_empty() || request.court.trim().is_empty() {
            return Err(AppError::bad_request("Case number and court are required"));
        }
        if !is_valid_case_number(case_number) {
            return Err(AppError::bad_request("Invalid case number format"));
        }
        Ok(fixtures::case_info(case_number, &self.court_name(&request.court)))
    }

    async fn analyze_contract(&self, document_id: &str) -> Result<ContractAnalysis, AppError> {
        self.pause(self.delays.analysis).await;
        self.document_name(document_id)?;
        Ok(fixtures::contract_analysis())
    }

    async fn search_jurisprudence(
        &self,
        request: &JurisprudenceSearchRequest,
    ) -> Result<JurisprudenceSearchResponse, AppError> {
        self.pause(self.delays.search).await;
        let query = request.query.trim();
        if query.is_empty() {
            return Err(AppError::bad_request("Search query is required"));
        }
        let results = request.filters.rank(fixtures::jurisprudence(query));
        Ok(JurisprudenceSearchResponse {
            total: results.len(),
            results,
            query: query.to_string(),
        })
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.pause(self.delays.chat).await;
        if request.message.trim().is_empty() {
            return Err(AppError::bad_request("Message is required"));
        }
        Ok(ChatResponse {
            response: fixtures::chat_reply(&request.message),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        AppConfig, AppErrorKind, JurisprudenceFilters, MessageMetadata, RelevanceLevel,
        RiskSeverity,
    };

    fn backend() -> MockBackend {
        MockBackend::new(MockDelays::none(), AppConfig::default().courts)
    }

    #[tokio::test]
    async fn analysis_requires_a_known_upload() {
        let mock = backend();
        let err = mock
            .analyze_document("missing", AnalysisType::General)
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);

        let uploaded = mock
            .upload_document(&FileUpload::new("petition.txt", b"text".to_vec()))
            .await
            .unwrap();
        assert_eq!(uploaded.filename, "petition.txt");
        let analysis = mock
            .analyze_document(&uploaded.id, AnalysisType::General)
            .await
            .unwrap();
        assert!(!analysis.summary.is_empty());
        assert!(!analysis.key_points.is_empty());
        assert_eq!(mock.get_document_analysis(&uploaded.id).await.unwrap(), analysis);
    }

    #[tokio::test]
    async fn case_search_returns_timeline_and_deadlines() {
        let info = backend()
            .search_case(&CaseSearchRequest {
                case_number: "0001234-56.2024.8.26.0100".to_string(),
                court: "tjsp".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(info.court, "Tribunal de Justiça de São Paulo");
        assert_eq!(info.timeline.len(), 5);
        assert_eq!(info.deadlines.len(), 3);
        assert!(info.timeline.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn contract_fixture_is_medium_risk() {
        let mock = backend();
        let doc = mock
            .upload_document(&FileUpload::new("lease.pdf", vec![1, 2, 3]))
            .await
            .unwrap();
        let analysis = mock.analyze_contract(&doc.id).await.unwrap();
        assert_eq!(analysis.score, 75);
        assert_eq!(analysis.risk_level(), RiskSeverity::Medium);
        assert_eq!(analysis.risks.len(), 2);
        assert_eq!(analysis.compliance.len(), 2);
    }

    #[tokio::test]
    async fn jurisprudence_is_ranked_and_filtered() {
        let response = backend()
            .search_jurisprudence(&JurisprudenceSearchRequest {
                query: "danos morais consumidor".to_string(),
                filters: JurisprudenceFilters {
                    court: Some("superior".to_string()),
                    relevance: Some(RelevanceLevel::High),
                },
            })
            .await
            .unwrap();
        let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(response.total, 2);
    }

    #[tokio::test]
    async fn unmatched_query_gets_general_precedents() {
        let response = backend()
            .search_jurisprudence(&JurisprudenceSearchRequest {
                query: "usucapião".to_string(),
                filters: JurisprudenceFilters::default(),
            })
            .await
            .unwrap();
        assert_eq!(response.total, 2);
        assert!(response.results[0].relevance >= response.results[1].relevance);
    }

    #[tokio::test]
    async fn chat_reply_follows_keywords() {
        let reply = backend()
            .send_chat_message(&ChatRequest {
                message: "Can you review this contract?".to_string(),
                context: MessageMetadata::default(),
            })
            .await
            .unwrap();
        assert!(reply.response.contains("contract analysis"));
    }

    #[tokio::test]
    async fn mind_map_has_three_categories() {
        let mock = backend();
        let doc = mock
            .upload_document(&FileUpload::new("deed.docx", vec![0]))
            .await
            .unwrap();
        let map = mock.generate_mind_map(&doc.id).await.unwrap();
        assert_eq!(map.root.children.len(), 3);
        assert_eq!(map.root.node_count(), 10);
    }
}
