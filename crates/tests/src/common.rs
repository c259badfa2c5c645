use async_trait::async_trait;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use services::config::{StaticConfigSource, APP_CONFIG_RESOURCE, BRANDING_RESOURCE};
use services::{LegalBackend, MockBackend, MockDelays, StartupOptions};
use shared_types::{
    AnalysisType, AppConfig, AppError, CaseInfo, CaseSearchRequest, ChatRequest, ChatResponse,
    ContractAnalysis, DocumentAnalysis, FileUpload, JurisprudenceSearchRequest,
    JurisprudenceSearchResponse, MindMap, MindMapNode, MindMapNodeKind, UploadResponse,
};
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A valid CNJ number the stub backend knows.
pub const KNOWN_CASE: &str = "1234567-89.2024.8.26.0100";
/// A valid CNJ number the stub backend answers with 404.
pub const UNKNOWN_CASE: &str = "0000000-00.2024.8.26.0000";

/// File as received by the stub's multipart handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Everything the stub backend saw, in arrival order.
#[derive(Default)]
pub struct StubLog {
    pub paths: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<ReceivedFile>>,
    pub chats: Mutex<Vec<ChatRequest>>,
}

impl StubLog {
    fn hit(&self, path: impl Into<String>) {
        self.paths.lock().unwrap().push(path.into());
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub struct StubServer {
    pub base_url: String,
    pub log: Arc<StubLog>,
}

type Shared = State<Arc<StubLog>>;

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn analysis_json() -> Value {
    json!({
        "summary": "Contrato de prestação de serviços entre as partes.",
        "keyPoints": ["Vigência de 12 meses", "Multa rescisória de 20%"],
        "parties": ["Contratante", "Contratada"],
        "dates": ["2024-01-15"],
        "obligations": ["Pagamento mensal"],
        "risks": ["Cláusula penal elevada"]
    })
}

async fn upload(State(log): Shared, mut multipart: Multipart) -> Response {
    log.hit("/api/documents/upload");
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let Ok(bytes) = field.bytes().await else {
            return error_body(StatusCode::BAD_REQUEST, "Unreadable upload");
        };
        let mut uploads = log.uploads.lock().unwrap();
        uploads.push(ReceivedFile {
            name: name.clone(),
            content_type,
            size: bytes.len(),
        });
        let id = format!("remote-{}", uploads.len());
        return Json(json!({ "id": id, "status": "uploaded", "filename": name })).into_response();
    }
    error_body(StatusCode::BAD_REQUEST, "Nenhum arquivo enviado")
}

async fn analyze(State(log): Shared, Path(id): Path<String>) -> Response {
    log.hit(format!("/api/documents/{id}/analyze"));
    if !id.starts_with("remote-") {
        return error_body(StatusCode::NOT_FOUND, "Documento não encontrado");
    }
    Json(analysis_json()).into_response()
}

async fn analysis(State(log): Shared, Path(id): Path<String>) -> Response {
    log.hit(format!("/api/documents/{id}/analysis"));
    if id == "broken" {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    Json(analysis_json()).into_response()
}

async fn mind_map(State(log): Shared, Path(id): Path<String>) -> Response {
    log.hit(format!("/api/documents/{id}/mindmap"));
    let map = MindMap {
        root: MindMapNode::new("root", "Contrato", MindMapNodeKind::Root).with_children(vec![
            MindMapNode::new("parties", "Partes", MindMapNodeKind::Category),
        ]),
    };
    Json(map).into_response()
}

async fn search_case(State(log): Shared, Json(request): Json<CaseSearchRequest>) -> Response {
    log.hit("/api/cases/search");
    if request.case_number == UNKNOWN_CASE {
        return error_body(StatusCode::NOT_FOUND, "Processo não encontrado");
    }
    Json(json!({
        "number": request.case_number,
        "court": request.court.to_uppercase(),
        "status": "Em andamento",
        "parties": ["Autor", "Réu"],
        "subject": "Indenização por danos morais",
        "lastUpdate": "2024-05-02T10:00:00Z",
        "timeline": [],
        "deadlines": []
    }))
    .into_response()
}

async fn analyze_contract(State(log): Shared, Path(id): Path<String>) -> Response {
    log.hit(format!("/api/contracts/{id}/analyze"));
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn search_jurisprudence(
    State(log): Shared,
    Json(request): Json<JurisprudenceSearchRequest>,
) -> Response {
    log.hit("/api/jurisprudence/search");
    Json(json!({ "results": [], "total": 0, "query": request.query })).into_response()
}

async fn chat(State(log): Shared, Json(request): Json<ChatRequest>) -> Response {
    log.hit("/api/chat");
    if request.message.contains("slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    let reply = format!("Recebido: {}", request.message);
    log.chats.lock().unwrap().push(request);
    Json(json!({ "response": reply, "timestamp": "2024-05-02T10:00:00Z" })).into_response()
}

async fn health(State(log): Shared) -> Response {
    log.hit("/health");
    Json(json!({ "status": "healthy", "timestamp": "2024-05-02T10:00:00", "version": "1.0.0" }))
        .into_response()
}

/// Start a stub of the legal-analysis REST backend on an ephemeral port.
pub async fn spawn_stub() -> StubServer {
    let log = Arc::new(StubLog::default());
    let app = Router::new()
        .route("/api/documents/upload", post(upload))
        .route("/api/documents/{id}/analyze", post(analyze))
        .route("/api/documents/{id}/analysis", get(analysis))
        .route("/api/documents/{id}/mindmap", post(mind_map))
        .route("/api/cases/search", post(search_case))
        .route("/api/contracts/{id}/analyze", post(analyze_contract))
        .route("/api/jurisprudence/search", post(search_jurisprudence))
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{addr}"),
        log,
    }
}

// ── Startup helpers ──────────────────────────────────────────────────

pub fn fast_options() -> StartupOptions {
    StartupOptions {
        mock_delays: MockDelays::none(),
        ..StartupOptions::default()
    }
}

/// `app.json` selecting the live backend at `base_url`.
pub fn live_config_json(base_url: &str, timeout_ms: u64) -> String {
    json!({
        "api": { "baseUrl": base_url, "timeoutMs": timeout_ms, "mode": "live" }
    })
    .to_string()
}

pub fn config_source(app_json: &str, branding_json: Option<&str>) -> StaticConfigSource {
    let source = StaticConfigSource::new().with(APP_CONFIG_RESOURCE, app_json);
    match branding_json {
        Some(branding) => source.with(BRANDING_RESOURCE, branding),
        None => source,
    }
}

pub fn txt_file(name: &str, size: usize) -> FileUpload {
    FileUpload::new(name, vec![b'a'; size])
}

// ── Counting backend ─────────────────────────────────────────────────

/// Mock backend that records which capabilities were invoked.
pub struct CountingBackend {
    inner: MockBackend,
    calls: RefCell<Vec<&'static str>>,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self {
            inner: MockBackend::new(MockDelays::none(), AppConfig::default().courts),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }
}

#[async_trait(?Send)]
impl LegalBackend for CountingBackend {
    async fn upload_document(&self, file: &FileUpload) -> Result<UploadResponse, AppError> {
        self.record("upload_document");
        self.inner.upload_document(file).await
    }

    async fn analyze_document(
        &self,
        document_id: &str,
        analysis_type: AnalysisType,
    ) -> Result<DocumentAnalysis, AppError> {
        self.record("analyze_document");
        self.inner.analyze_document(document_id, analysis_type).await
    }

    async fn get_document_analysis(&self, document_id: &str) -> Result<DocumentAnalysis, AppError> {
        self.record("get_document_analysis");
        self.inner.get_document_analysis(document_id).await
    }

    async fn generate_mind_map(&self, document_id: &str) -> Result<MindMap, AppError> {
        self.record("generate_mind_map");
        self.inner.generate_mind_map(document_id).await
    }

    async fn search_case(&self, request: &CaseSearchRequest) -> Result<CaseInfo, AppError> {
        self.record("search_case");
        self.inner.search_case(request).await
    }

    async fn analyze_contract(&self, document_id: &str) -> Result<ContractAnalysis, AppError> {
        self.record("analyze_contract");
        self.inner.analyze_contract(document_id).await
    }

    async fn search_jurisprudence(
        &self,
        request: &JurisprudenceSearchRequest,
    ) -> Result<JurisprudenceSearchResponse, AppError> {
        self.record("search_jurisprudence");
        self.inner.search_jurisprudence(request).await
    }

    async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.record("send_chat_message");
        self.inner.send_chat_message(request).await
    }
}
