use pretty_assertions::assert_eq;
use services::{ApiGateway, LegalBackend};
use shared_types::{
    AnalysisType, AppErrorKind, CaseSearchRequest, ChatRequest, ChatResponse,
    JurisprudenceSearchRequest, MessageMetadata,
};
use std::time::Duration;

use crate::common::{spawn_stub, txt_file, KNOWN_CASE, UNKNOWN_CASE};

fn bound(base_url: &str, timeout: Duration) -> ApiGateway {
    let gateway = ApiGateway::new();
    gateway.bind(base_url, timeout).unwrap();
    gateway
}

#[tokio::test]
async fn multipart_upload_sends_file_field() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let uploaded = gateway
        .upload_document(&txt_file("peticao.txt", 1024))
        .await
        .unwrap();

    assert_eq!(uploaded.id, "remote-1");
    assert_eq!(uploaded.filename, "peticao.txt");
    let received = stub.log.uploads.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "peticao.txt");
    assert_eq!(received[0].size, 1024);
    assert_eq!(received[0].content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn analysis_round_trip_decodes_camel_case() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let analysis = gateway
        .analyze_document("remote-7", AnalysisType::General)
        .await
        .unwrap();
    assert_eq!(analysis.key_points.len(), 2);
    assert!(analysis.summary.contains("prestação de serviços"));

    let fetched = gateway.get_document_analysis("remote-7").await.unwrap();
    assert_eq!(fetched, analysis);
    assert_eq!(
        stub.log.paths(),
        vec![
            "/api/documents/remote-7/analyze".to_string(),
            "/api/documents/remote-7/analysis".to_string(),
        ]
    );
}

#[tokio::test]
async fn error_body_message_is_kept_with_status() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let err = gateway
        .search_case(&CaseSearchRequest {
            case_number: UNKNOWN_CASE.to_string(),
            court: "tjsp".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::HttpStatus);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Processo não encontrado");
}

#[tokio::test]
async fn non_json_error_body_gets_generic_message() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let err = gateway.analyze_contract("remote-1").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::HttpStatus);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Request failed with status 500");
}

#[tokio::test]
async fn undecodable_success_body_is_a_transport_error() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let err = gateway.get_document_analysis("broken").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Transport);
}

#[tokio::test]
async fn slow_response_times_out_with_bound_default() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_millis(150));

    let err = gateway
        .send_chat_message(&ChatRequest {
            message: "slow please".to_string(),
            context: MessageMetadata::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Timeout);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn caller_timeout_overrides_bound_default() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(30));
    let request = ChatRequest {
        message: "slow again".to_string(),
        context: MessageMetadata::default(),
    };

    let err = gateway
        .post_json::<_, ChatResponse>("/api/chat", &request, Some(Duration::from_millis(100)))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Timeout);
}

#[tokio::test]
async fn chat_context_is_sent_camel_case() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));
    let context = MessageMetadata {
        document_id: None,
        case_number: Some(KNOWN_CASE.to_string()),
    };

    let reply = gateway
        .send_chat_message(&ChatRequest {
            message: "Quais os prazos?".to_string(),
            context: context.clone(),
        })
        .await
        .unwrap();

    assert_eq!(reply.response, "Recebido: Quais os prazos?");
    let seen = stub.log.chats.lock().unwrap().clone();
    assert_eq!(seen[0].context, context);
}

#[tokio::test]
async fn jurisprudence_and_case_search_decode() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let response = gateway
        .search_jurisprudence(&JurisprudenceSearchRequest {
            query: "danos morais".to_string(),
            filters: Default::default(),
        })
        .await
        .unwrap();
    assert_eq!(response.query, "danos morais");
    assert_eq!(response.total, 0);

    let info = gateway
        .search_case(&CaseSearchRequest {
            case_number: KNOWN_CASE.to_string(),
            court: "tjsp".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(info.number, KNOWN_CASE);
    assert_eq!(info.court, "TJSP");
}

#[tokio::test]
async fn health_reports_backend_version() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let health = gateway.health().await.unwrap();

    assert!(health.is_healthy());
    assert_eq!(health.version, "1.0.0");
    assert_eq!(stub.log.paths(), vec!["/health".to_string()]);
}

#[tokio::test]
async fn health_before_binding_is_not_initialized() {
    let gateway = ApiGateway::new();
    let err = gateway.health().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotInitialized);
}

#[tokio::test]
async fn unbound_gateway_never_reaches_the_network() {
    let stub = spawn_stub().await;
    let gateway = ApiGateway::new();

    let err = gateway.generate_mind_map("remote-1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotInitialized);
    assert!(stub.log.paths().is_empty());
}

#[tokio::test]
async fn second_bind_keeps_first_address() {
    let stub = spawn_stub().await;
    let gateway = bound(&stub.base_url, Duration::from_secs(5));

    let err = gateway
        .bind("http://127.0.0.1:9", Duration::from_secs(1))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);

    let map = gateway.generate_mind_map("remote-1").await.unwrap();
    assert_eq!(map.root.label, "Contrato");
}
