use crate::backend::LegalBackend;
use shared_types::{
    validation::validate_file, AnalysisType, AppError, Document, DocumentAnalysis, DocumentStatus,
    FileUpload, MindMap, UploadLimits,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Progress of one document through the upload pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Uploaded { remote_id: String },
    Analyzed(DocumentAnalysis),
    Failed(String),
}

/// The session's document list.
pub struct UploadPanel {
    limits: UploadLimits,
    documents: Vec<Document>,
    mind_maps: HashMap<Uuid, MindMap>,
    error: Option<String>,
}

impl UploadPanel {
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            documents: Vec::new(),
            mind_maps: HashMap::new(),
            error: None,
        }
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn ready_documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| d.is_ready())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mind_map(&self, id: Uuid) -> Option<&MindMap> {
        self.mind_maps.get(&id)
    }

    /// Validate a selection. Accepted files join the list as `uploading` and
    /// are returned for [`process_document`]; rejected files never join and
    /// their reasons become the inline error.
    pub fn add_files(&mut self, files: Vec<FileUpload>) -> Vec<(Uuid, FileUpload)> {
        let passed = self.screen(files.iter().map(|f| (f.name.as_str(), f.size())));
        files
            .into_iter()
            .enumerate()
            .filter(|(index, _)| passed.contains(index))
            .filter_map(|(_, file)| self.accept(file))
            .collect()
    }

    /// Check a selection from names and sizes alone, before any bytes are
    /// read. Returns the indices of the files worth reading; the reasons for
    /// the rest replace the inline error immediately.
    pub fn screen<I, N>(&mut self, selection: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (N, u64)>,
        N: AsRef<str>,
    {
        let mut free = self.limits.max_files.saturating_sub(self.documents.len());
        let mut passed = Vec::new();
        let mut rejected = Vec::new();

        for (index, (name, size)) in selection.into_iter().enumerate() {
            let name = name.as_ref();
            if free == 0 {
                rejected.push(self.too_many(name));
                continue;
            }
            if let Err(err) = validate_file(name, size, &self.limits) {
                rejected.push(err.message);
                continue;
            }
            free -= 1;
            passed.push(index);
        }

        self.error = (!rejected.is_empty()).then(|| rejected.join("\n"));
        passed
    }

    /// Add one file that passed [`screen`](Self::screen) once its bytes are
    /// in. The limits are checked again against the actual content and the
    /// current list; a rejection is appended to the inline error.
    pub fn accept(&mut self, file: FileUpload) -> Option<(Uuid, FileUpload)> {
        if self.documents.len() >= self.limits.max_files {
            let message = self.too_many(&file.name);
            self.push_error(message);
            return None;
        }
        if let Err(err) = validate_file(&file.name, file.size(), &self.limits) {
            self.push_error(err.message);
            return None;
        }
        let document = Document::new(file.name.clone(), file.mime_type.clone(), file.size());
        tracing::info!(id = %document.id, name = %document.name, size = document.size, "Document queued");
        let id = document.id;
        self.documents.push(document);
        Some((id, file))
    }

    fn too_many(&self, name: &str) -> String {
        format!("{name}: at most {} documents can be uploaded", self.limits.max_files)
    }

    /// Apply a pipeline event. Events for removed documents are ignored.
    pub fn apply(&mut self, id: Uuid, event: DocumentEvent) {
        let Some(document) = self.documents.iter_mut().find(|d| d.id == id) else {
            tracing::debug!(%id, "Event for a removed document ignored");
            return;
        };
        let outcome = match event {
            DocumentEvent::Uploaded { remote_id } => {
                document.remote_id = Some(remote_id);
                document.transition(DocumentStatus::Processing)
            }
            DocumentEvent::Analyzed(analysis) => document
                .transition(DocumentStatus::Ready)
                .map(|()| document.analysis = Some(analysis)),
            DocumentEvent::Failed(message) => document
                .transition(DocumentStatus::Error)
                .map(|()| document.error = Some(message)),
        };
        if let Err(err) = outcome {
            tracing::warn!(%id, error = %err, "Document event rejected");
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Document> {
        let index = self.documents.iter().position(|d| d.id == id)?;
        self.mind_maps.remove(&id);
        Some(self.documents.remove(index))
    }

    pub fn set_mind_map(&mut self, id: Uuid, map: MindMap) {
        if self.document(id).is_some() {
            self.mind_maps.insert(id, map);
        }
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    /// Add a line to the inline error, keeping what is already shown.
    pub fn push_error(&mut self, message: String) {
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{existing}\n{message}"),
            None => message,
        });
    }
}

/// Upload one accepted file and request its analysis, reporting each step
/// through `on_event` as it completes. Nothing is returned: failures arrive
/// as [`DocumentEvent::Failed`].
pub async fn process_document(
    backend: &dyn LegalBackend,
    id: Uuid,
    file: FileUpload,
    mut on_event: impl FnMut(Uuid, DocumentEvent),
) {
    let uploaded = match backend.upload_document(&file).await {
        Ok(uploaded) => uploaded,
        Err(err) => {
            tracing::error!(name = %file.name, error = %err, "Upload failed");
            on_event(id, DocumentEvent::Failed(err.user_message()));
            return;
        }
    };
    on_event(
        id,
        DocumentEvent::Uploaded {
            remote_id: uploaded.id.clone(),
        },
    );

    match backend
        .analyze_document(&uploaded.id, AnalysisType::General)
        .await
    {
        Ok(analysis) => on_event(id, DocumentEvent::Analyzed(analysis)),
        Err(err) => {
            tracing::error!(name = %file.name, error = %err, "Document analysis failed");
            on_event(id, DocumentEvent::Failed(err.user_message()));
        }
    }
}

/// Mind map for a ready document.
pub async fn generate_mind_map(
    backend: &dyn LegalBackend,
    document: &Document,
) -> Result<MindMap, AppError> {
    match (&document.remote_id, document.is_ready()) {
        (Some(remote_id), true) => backend.generate_mind_map(remote_id).await,
        _ => Err(AppError::conflict(format!(
            "{} has not finished processing",
            document.name
        ))),
    }
}
