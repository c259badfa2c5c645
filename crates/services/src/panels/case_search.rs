use super::PanelController;
use crate::backend::LegalBackend;
use async_trait::async_trait;
use shared_types::{AppError, CaseInfo, CaseSearchRequest, Court};
use validator::Validate;

/// Look up a lawsuit by CNJ number in one of the configured courts.
pub struct CaseSearchPanel {
    pub case_number: String,
    /// Court id.
    pub court: String,
    courts: Vec<Court>,
    info: Option<CaseInfo>,
    error: Option<String>,
    loading: bool,
}

impl CaseSearchPanel {
    pub fn new(courts: Vec<Court>) -> Self {
        let court = courts.first().map(|c| c.id.clone()).unwrap_or_default();
        Self {
            case_number: String::new(),
            court,
            courts,
            info: None,
            error: None,
            loading: false,
        }
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn info(&self) -> Option<&CaseInfo> {
        self.info.as_ref()
    }

    fn request(&self) -> Result<CaseSearchRequest, AppError> {
        let request = CaseSearchRequest {
            case_number: self.case_number.trim().to_string(),
            court: self.court.trim().to_string(),
        };
        request.validate()?;
        if !self.courts.iter().any(|c| c.id.eq_ignore_ascii_case(&request.court)) {
            return Err(AppError::field("court", "Select a court from the list"));
        }
        Ok(request)
    }
}

#[async_trait(?Send)]
impl PanelController for CaseSearchPanel {
    type Request = CaseSearchRequest;
    type Response = CaseInfo;

    fn begin(&mut self) -> Result<CaseSearchRequest, AppError> {
        match self.request() {
            Ok(request) => {
                self.error = None;
                self.loading = true;
                Ok(request)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    async fn call(
        backend: &dyn LegalBackend,
        request: &CaseSearchRequest,
    ) -> Result<CaseInfo, AppError> {
        backend.search_case(request).await
    }

    fn finish(&mut self, result: Result<CaseInfo, AppError>) {
        self.loading = false;
        match result {
            Ok(info) => self.info = Some(info),
            Err(err) => {
                tracing::error!(case_number = %self.case_number, error = %err, "Case search failed");
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
    use shared_types::{AppConfig, AppErrorKind};

    fn panel() -> CaseSearchPanel {
        CaseSearchPanel::new(AppConfig::default().courts)
    }

    #[test]
    fn defaults_to_first_configured_court() {
        assert_eq!(panel().court, "stf");
        assert_eq!(CaseSearchPanel::new(vec![]).court, "");
    }

    #[test]
    fn malformed_number_sets_inline_error() {
        let mut p = panel();
        p.case_number = "123".to_string();
        let err = p.begin().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(p.error().unwrap().contains("NNNNNNN-DD.AAAA.J.TR.OOOO"));
        assert!(!p.is_loading());
    }

    #[test]
    fn unknown_court_is_rejected() {
        let mut p = panel();
        p.case_number = "0001234-56.2024.8.26.0100".to_string();
        p.court = "tj-atlantis".to_string();
        assert!(p.begin().is_err());
        assert_eq!(p.error(), Some("Select a court from the list"));
    }

    #[tokio::test]
    async fn successful_search_stores_case_info() {
        let mock = MockBackend::new(MockDelays::none(), AppConfig::default().courts);
        let mut p = panel();
        p.case_number = " 0001234-56.2024.8.26.0100 ".to_string();
        p.court = "tjsp".to_string();
        submit(&mut p, &mock).await.unwrap();
        let info = p.info().unwrap();
        assert_eq!(info.number, "0001234-56.2024.8.26.0100");
        assert!(p.error().is_none());
        assert!(!p.is_loading());
    }
}
