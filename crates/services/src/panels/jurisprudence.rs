use super::PanelController;
use crate::backend::LegalBackend;
use async_trait::async_trait;
use shared_types::{
    validation::validate_search_query, AppError, JurisprudenceFilters, JurisprudenceSearchRequest,
    JurisprudenceSearchResponse,
};

#[derive(Default)]
pub struct JurisprudencePanel {
    pub query: String,
    pub filters: JurisprudenceFilters,
    response: Option<JurisprudenceSearchResponse>,
    error: Option<String>,
    loading: bool,
}

impl JurisprudencePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> Option<&JurisprudenceSearchResponse> {
        self.response.as_ref()
    }
}

#[async_trait(?Send)]
impl PanelController for JurisprudencePanel {
    type Request = JurisprudenceSearchRequest;
    type Response = JurisprudenceSearchResponse;

    fn begin(&mut self) -> Result<JurisprudenceSearchRequest, AppError> {
        if let Err(err) = validate_search_query(&self.query) {
            self.error = Some(err.user_message());
            return Err(err);
        }
        self.error = None;
        self.loading = true;
        Ok(JurisprudenceSearchRequest {
            query: self.query.trim().to_string(),
            filters: self.filters.clone(),
        })
    }

    async fn call(
        backend: &dyn LegalBackend,
        request: &JurisprudenceSearchRequest,
    ) -> Result<JurisprudenceSearchResponse, AppError> {
        backend.search_jurisprudence(request).await
    }

    fn finish(&mut self, result: Result<JurisprudenceSearchResponse, AppError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                tracing::info!(query = %response.query, total = response.total, "Jurisprudence search finished");
                self.response = Some(response);
            }
            Err(err) => {
                tracing::error!(error = %err, "Jurisprudence search failed");
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
