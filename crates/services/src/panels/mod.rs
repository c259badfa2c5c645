//! Feature panel controllers.
//!
//! A controller owns one panel's input, result and inline error. Input is
//! validated in [`PanelController::begin`] before any backend call, so the
//! live and mock backends see exactly the same requests. The UI holds the
//! controller in a signal and awaits [`PanelController::call`] between
//! `begin` and `finish`; tests use [`submit`].

pub mod case_search;
pub mod chat;
pub mod contract;
pub mod jurisprudence;
pub mod upload;

use crate::backend::LegalBackend;
use async_trait::async_trait;
use shared_types::AppError;

pub use case_search::CaseSearchPanel;
pub use chat::ChatPanel;
pub use contract::ContractPanel;
pub use jurisprudence::JurisprudencePanel;
pub use upload::{process_document, DocumentEvent, UploadPanel};

#[async_trait(?Send)]
pub trait PanelController {
    type Request;
    type Response;

    /// Validate input and mark the panel loading. On failure the inline
    /// error is set and no request is produced.
    fn begin(&mut self) -> Result<Self::Request, AppError>;

    async fn call(
        backend: &dyn LegalBackend,
        request: &Self::Request,
    ) -> Result<Self::Response, AppError>;

    /// Store the result, or surface the failure inline.
    fn finish(&mut self, result: Result<Self::Response, AppError>);

    fn error(&self) -> Option<&str>;

    fn is_loading(&self) -> bool;
}

/// Run one full request cycle. Returns the failure, if any, after it has
/// been recorded in the panel.
pub async fn submit<P: PanelController>(
    panel: &mut P,
    backend: &dyn LegalBackend,
) -> Result<(), AppError> {
    let request = panel.begin()?;
    match P::call(backend, &request).await {
        Ok(response) => {
            panel.finish(Ok(response));
            Ok(())
        }
        Err(err) => {
            panel.finish(Err(err.clone()));
            Err(err)
        }
    }
}
