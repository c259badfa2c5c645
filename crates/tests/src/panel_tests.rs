use futures::future::join_all;
use pretty_assertions::assert_eq;
use services::panels::{
    process_document, submit, CaseSearchPanel, ChatPanel, ContractPanel, JurisprudencePanel,
    PanelController, UploadPanel,
};
use services::ApiGateway;
use shared_types::{
    AppConfig, AppErrorKind, ChatRole, DocumentStatus, RelevanceLevel, RiskSeverity, UploadLimits,
};
use std::cell::RefCell;
use std::time::Duration;

use crate::common::{spawn_stub, txt_file, CountingBackend, UNKNOWN_CASE};

fn courts() -> Vec<shared_types::Court> {
    AppConfig::default().courts
}

#[tokio::test]
async fn one_kilobyte_text_file_ends_ready_with_analysis() {
    let backend = CountingBackend::new();
    let panel = RefCell::new(UploadPanel::new(UploadLimits::default()));

    let accepted = panel.borrow_mut().add_files(vec![txt_file("contrato.txt", 1024)]);
    assert_eq!(accepted.len(), 1);
    assert_eq!(panel.borrow().documents()[0].status, DocumentStatus::Uploading);

    let (id, file) = accepted.into_iter().next().unwrap();
    process_document(&backend, id, file, |id, event| panel.borrow_mut().apply(id, event)).await;

    let panel = panel.into_inner();
    let document = panel.document(id).unwrap();
    assert_eq!(document.status, DocumentStatus::Ready);
    assert!(document.remote_id.is_some());
    assert!(!document.analysis.as_ref().unwrap().summary.is_empty());
    assert_eq!(backend.calls(), vec!["upload_document", "analyze_document"]);
}

#[tokio::test]
async fn rejected_selection_never_calls_the_backend() {
    let backend = CountingBackend::new();
    let mut panel = UploadPanel::new(UploadLimits {
        max_file_size: 2048,
        ..UploadLimits::default()
    });

    let accepted = panel.add_files(vec![
        txt_file("foto.png", 10),
        txt_file("enorme.pdf", 4096),
    ]);

    assert!(accepted.is_empty());
    assert!(panel.documents().is_empty());
    let error = panel.error().unwrap();
    assert_eq!(error.lines().count(), 2);
    assert!(backend.calls().is_empty());
}

#[test]
fn selection_is_screened_from_metadata_before_reading() {
    let mut panel = UploadPanel::new(UploadLimits {
        max_files: 2,
        ..UploadLimits::default()
    });

    let passed = panel.screen([
        ("scan.png", 2 * 1024 * 1024 * 1024_u64),
        ("anexo.pdf", 20 * 1024 * 1024),
        ("peticao.txt", 1024),
        ("recurso.docx", 2048),
        ("extra.txt", 10),
    ]);

    assert_eq!(passed, vec![2, 3]);
    assert!(panel.documents().is_empty());
    let error = panel.error().unwrap().to_string();
    assert!(error.contains("scan.png: file type not supported"));
    assert!(error.contains("anexo.pdf: file is too large"));
    assert!(error.contains("extra.txt: at most 2 documents"));
    assert_eq!(error.lines().count(), 3);

    assert!(panel.accept(txt_file("peticao.txt", 1024)).is_some());
    assert_eq!(panel.documents().len(), 1);
    assert_eq!(panel.error(), Some(error.as_str()));
}

#[test]
fn overlapping_selections_cannot_exceed_max_files() {
    let mut panel = UploadPanel::new(UploadLimits {
        max_files: 1,
        ..UploadLimits::default()
    });

    assert_eq!(panel.screen([("a.txt", 10)]), vec![0]);
    assert_eq!(panel.screen([("b.txt", 10)]), vec![0]);
    assert!(panel.accept(txt_file("a.txt", 10)).is_some());
    assert!(panel.accept(txt_file("b.txt", 10)).is_none());

    assert_eq!(panel.documents().len(), 1);
    assert!(panel.error().unwrap().contains("b.txt: at most 1 documents"));
}

#[tokio::test]
async fn concurrent_uploads_all_settle() {
    let backend = CountingBackend::new();
    let panel = RefCell::new(UploadPanel::new(UploadLimits::default()));
    let accepted = panel.borrow_mut().add_files(vec![
        txt_file("a.txt", 100),
        txt_file("b.txt", 200),
        txt_file("c.txt", 300),
    ]);

    let (backend_ref, panel_ref) = (&backend, &panel);
    join_all(accepted.into_iter().map(move |(id, file)| {
        process_document(backend_ref, id, file, move |id, event| {
            panel_ref.borrow_mut().apply(id, event)
        })
    }))
    .await;

    let panel = panel.into_inner();
    assert_eq!(panel.ready_documents().count(), 3);
    assert_eq!(backend.calls().len(), 6);
}

#[tokio::test]
async fn live_upload_pipeline_through_the_stub() {
    let stub = spawn_stub().await;
    let gateway = ApiGateway::new();
    gateway.bind(&stub.base_url, Duration::from_secs(5)).unwrap();
    let panel = RefCell::new(UploadPanel::new(UploadLimits::default()));

    let accepted = panel.borrow_mut().add_files(vec![txt_file("parecer.txt", 1024)]);
    let (id, file) = accepted.into_iter().next().unwrap();
    process_document(&gateway, id, file, |id, event| panel.borrow_mut().apply(id, event)).await;

    let panel = panel.into_inner();
    let document = panel.document(id).unwrap();
    assert_eq!(document.status, DocumentStatus::Ready);
    assert_eq!(document.remote_id.as_deref(), Some("remote-1"));
    assert_eq!(
        stub.log.paths(),
        vec![
            "/api/documents/upload".to_string(),
            "/api/documents/remote-1/analyze".to_string(),
        ]
    );
}

#[tokio::test]
async fn empty_case_number_is_an_inline_error_without_a_call() {
    let backend = CountingBackend::new();
    let mut panel = CaseSearchPanel::new(courts());
    panel.case_number = "   ".to_string();

    let err = submit(&mut panel, &backend).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(panel.error().is_some());
    assert!(panel.info().is_none());
    assert!(!panel.is_loading());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn backend_failure_keeps_previous_case_info() {
    let backend = CountingBackend::new();
    let mut panel = CaseSearchPanel::new(courts());
    panel.case_number = "1234567-89.2024.8.26.0100".to_string();
    submit(&mut panel, &backend).await.unwrap();
    let found = panel.info().cloned().unwrap();

    panel.case_number = "12345".to_string();
    assert!(submit(&mut panel, &backend).await.is_err());

    assert_eq!(panel.info(), Some(&found));
    assert!(panel.error().unwrap().contains("NNNNNNN-DD.AAAA.J.TR.OOOO"));
    assert_eq!(backend.calls(), vec!["search_case"]);
}

#[tokio::test]
async fn live_not_found_surfaces_backend_message() {
    let stub = spawn_stub().await;
    let gateway = ApiGateway::new();
    gateway.bind(&stub.base_url, Duration::from_secs(5)).unwrap();
    let mut panel = CaseSearchPanel::new(courts());
    panel.case_number = UNKNOWN_CASE.to_string();

    let err = submit(&mut panel, &gateway).await.unwrap_err();

    assert_eq!(err.status, Some(404));
    assert!(panel.error().unwrap().contains("Processo não encontrado"));
    assert!(!panel.is_loading());
}

#[tokio::test]
async fn contract_review_of_an_uploaded_document() {
    let backend = CountingBackend::new();
    let upload = RefCell::new(UploadPanel::new(UploadLimits::default()));
    let accepted = upload.borrow_mut().add_files(vec![txt_file("locacao.txt", 512)]);
    let (id, file) = accepted.into_iter().next().unwrap();
    process_document(&backend, id, file, |id, event| upload.borrow_mut().apply(id, event)).await;

    let mut contract = ContractPanel::new();
    contract.select(upload.borrow().document(id).unwrap()).unwrap();
    submit(&mut contract, &backend).await.unwrap();

    assert_eq!(contract.selected(), Some(id));
    assert_eq!(contract.analysis().unwrap().score, 75);
    assert_eq!(contract.risk_level(), Some(RiskSeverity::Medium));
    assert_eq!(
        backend.calls(),
        vec!["upload_document", "analyze_document", "analyze_contract"]
    );

    contract.deselect_if(id);
    assert!(contract.selected().is_none());
    assert!(contract.analysis().is_none());
}

#[tokio::test]
async fn jurisprudence_filters_reach_the_backend() {
    let backend = CountingBackend::new();
    let mut panel = JurisprudencePanel::new();
    panel.query = "responsabilidade civil".to_string();
    panel.filters.relevance = Some(RelevanceLevel::High);

    submit(&mut panel, &backend).await.unwrap();

    let response = panel.response().unwrap();
    let floor = RelevanceLevel::High.min_score();
    assert!(response.results.iter().all(|r| r.relevance >= floor));
    assert_eq!(backend.calls(), vec!["search_jurisprudence"]);
}

#[tokio::test]
async fn markup_in_query_is_rejected_before_the_call() {
    let backend = CountingBackend::new();
    let mut panel = JurisprudencePanel::new();
    panel.query = "<script>alert(1)</script>".to_string();

    assert!(submit(&mut panel, &backend).await.is_err());
    assert!(panel.error().is_some());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn chat_clear_returns_to_a_single_greeting() {
    let backend = CountingBackend::new();
    let mut chat = ChatPanel::new("JurisAI");
    for message in ["Olá", "Qual o prazo para recurso?"] {
        chat.input = message.to_string();
        submit(&mut chat, &backend).await.unwrap();
    }
    assert_eq!(chat.messages().len(), 5);

    chat.rename("Ribeiro Advocacia");
    chat.clear();

    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].role, ChatRole::Assistant);
    assert!(chat.messages()[0].content.contains("Ribeiro Advocacia"));
    assert!(chat.error().is_none());
}

#[tokio::test]
async fn chat_failure_keeps_the_user_message() {
    let stub = spawn_stub().await;
    let gateway = ApiGateway::new();
    gateway.bind(&stub.base_url, Duration::from_millis(100)).unwrap();
    let mut chat = ChatPanel::new("JurisAI");
    chat.input = "slow question".to_string();

    let err = submit(&mut chat, &gateway).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Timeout);
    let last = chat.messages().last().unwrap();
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.content, "slow question");
    assert!(chat.error().unwrap().contains("took too long"));
}
