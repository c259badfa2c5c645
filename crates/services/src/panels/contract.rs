use super::PanelController;
use crate::backend::LegalBackend;
use async_trait::async_trait;
use shared_types::{AppError, ContractAnalysis, Document, RiskSeverity};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    document: Uuid,
    remote_id: String,
    name: String,
}

/// Risk review of an uploaded, analyzed document.
#[derive(Default)]
pub struct ContractPanel {
    selection: Option<Selection>,
    analysis: Option<ContractAnalysis>,
    error: Option<String>,
    loading: bool,
}

impl ContractPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the contract to analyze. Only ready documents qualify.
    pub fn select(&mut self, document: &Document) -> Result<(), AppError> {
        let remote_id = match (&document.remote_id, document.is_ready()) {
            (Some(remote_id), true) => remote_id.clone(),
            _ => {
                let err = AppError::field(
                    "document",
                    format!("{} has not finished processing", document.name),
                );
                self.error = Some(err.user_message());
                return Err(err);
            }
        };
        self.selection = Some(Selection {
            document: document.id,
            remote_id,
            name: document.name.clone(),
        });
        self.analysis = None;
        self.error = None;
        Ok(())
    }

    /// Forget the selection when its document leaves the list.
    pub fn deselect_if(&mut self, document: Uuid) {
        if self.selected() == Some(document) {
            self.selection = None;
            self.analysis = None;
        }
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selection.as_ref().map(|s| s.document)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.name.as_str())
    }

    pub fn analysis(&self) -> Option<&ContractAnalysis> {
        self.analysis.as_ref()
    }

    pub fn risk_level(&self) -> Option<RiskSeverity> {
        self.analysis.as_ref().map(ContractAnalysis::risk_level)
    }
}

#[async_trait(?Send)]
impl PanelController for ContractPanel {
    /// Backend document id.
    type Request = String;
    type Response = ContractAnalysis;

    fn begin(&mut self) -> Result<String, AppError> {
        let Some(selection) = &self.selection else {
            let err = AppError::field("document", "Select a processed document to analyze");
            self.error = Some(err.user_message());
            return Err(err);
        };
        let remote_id = selection.remote_id.clone();
        self.error = None;
        self.loading = true;
        Ok(remote_id)
    }

    async fn call(backend: &dyn LegalBackend, request: &String) -> Result<ContractAnalysis, AppError> {
        backend.analyze_contract(request).await
    }

    fn finish(&mut self, result: Result<ContractAnalysis, AppError>) {
        self.loading = false;
        match result {
            Ok(analysis) => {
                tracing::info!(score = analysis.score, "Contract analyzed");
                self.analysis = Some(analysis);
            }
            Err(err) => {
                tracing::error!(error = %err, "Contract analysis failed");
                self.error = Some(err.user_message());
            }
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockBackend, MockDelays};
    use crate::panels::submit;
    use shared_types::{AppConfig, DocumentStatus, FileUpload};

    #[test]
    fn analysis_without_selection_is_an_inline_error() {
        let mut panel = ContractPanel::new();
        assert!(panel.begin().is_err());
        assert!(panel.error().is_some());
        assert!(!panel.is_loading());
    }

    #[test]
    fn documents_still_processing_cannot_be_selected() {
        let mut panel = ContractPanel::new();
        let doc = Document::new("lease.pdf", "application/pdf", 100);
        assert!(panel.select(&doc).is_err());
        assert_eq!(panel.selected(), None);
    }

    #[tokio::test]
    async fn ready_document_is_scored() {
        let mock = MockBackend::new(MockDelays::none(), AppConfig::default().courts);
        let uploaded = mock
            .upload_document(&FileUpload::new("lease.pdf", vec![1]))
            .await
            .unwrap();
        let mut doc = Document::new("lease.pdf", "application/pdf", 1);
        doc.remote_id = Some(uploaded.id);
        doc.transition(DocumentStatus::Processing).unwrap();
        doc.transition(DocumentStatus::Ready).unwrap();

        let mut panel = ContractPanel::new();
        panel.select(&doc).unwrap();
        submit(&mut panel, &mock).await.unwrap();
        assert_eq!(panel.risk_level(), Some(RiskSeverity::Medium));
        assert_eq!(panel.selected_name(), Some("lease.pdf"));

        panel.deselect_if(doc.id);
        assert!(panel.analysis().is_none());
    }
}
