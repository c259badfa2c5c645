use dioxus::prelude::*;
use services::panels::upload::generate_mind_map;
use services::panels::process_document;
use shared_types::validation::format_file_size;
use shared_types::{Document, DocumentAnalysis, FileUpload, MindMap, MindMapNode, Panel};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    DocumentStatusBadge, InlineError, Notice, PageHeader, PageSubtitle, PageTitle,
};
use uuid::Uuid;

use super::FeatureGate;
use crate::session::{use_panels, use_session};

#[component]
pub fn Documents() -> Element {
    rsx! {
        FeatureGate { panel: Panel::DocumentUpload, DocumentsPanel {} }
    }
}

#[component]
fn DocumentsPanel() -> Element {
    let session = use_session();
    let panels = use_panels();
    let mut upload = panels.upload;
    let mut contract = panels.contract;
    let mut reading = use_signal(|| false);

    let limits = upload.read().limits().clone();
    let documents = upload.read().documents().to_vec();
    let error = upload.read().error().map(str::to_string);
    let max_size = format_file_size(limits.max_file_size);
    let accepted_types = limits.allowed_extensions.join(", ");

    // Type, size and count are checked from the file metadata before any
    // bytes are read. Every accepted file runs its own pipeline; progress
    // lands in the list in whatever order the backend answers.
    let handle_files = move |evt: FormEvent| async move {
        let backend = match session.backend() {
            Ok(backend) => backend,
            Err(err) => {
                upload.write().set_error(Some(err.user_message()));
                return;
            }
        };

        let selected = evt.files();
        let passed = upload
            .write()
            .screen(selected.iter().map(|file| (file.name(), file.size())));

        reading.set(true);
        for (index, file) in selected.into_iter().enumerate() {
            if !passed.contains(&index) {
                continue;
            }
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(_) => {
                    upload
                        .write()
                        .push_error(format!("{name}: the file could not be read"));
                    continue;
                }
            };
            let Some((id, file)) = upload.write().accept(FileUpload::new(name, bytes.to_vec())) else {
                continue;
            };
            let backend = backend.clone();
            spawn(async move {
                process_document(backend.as_ref(), id, file, move |id, event| {
                    upload.write().apply(id, event)
                })
                .await;
            });
        }
        reading.set(false);
    };

    let mut remove = move |id: Uuid| {
        if let Some(document) = upload.write().remove(id) {
            tracing::info!(name = %document.name, "Document removed");
        }
        contract.write().deselect_if(id);
    };

    let mut mind_map = move |id: Uuid| {
        let Some(document) = upload.read().document(id).cloned() else {
            return;
        };
        let backend = match session.backend() {
            Ok(backend) => backend,
            Err(err) => {
                upload.write().set_error(Some(err.user_message()));
                return;
            }
        };
        spawn(async move {
            match generate_mind_map(backend.as_ref(), &document).await {
                Ok(map) => upload.write().set_mind_map(id, map),
                Err(err) => upload.write().set_error(Some(err.user_message())),
            }
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Documents" }
                PageSubtitle {
                    "Up to {limits.max_files} files, {max_size} each. Accepted: {accepted_types}"
                }
            }

            Card {
                CardContent {
                    label { class: "upload-dropzone",
                        input {
                            r#type: "file",
                            multiple: true,
                            accept: limits.accept_attribute(),
                            disabled: reading(),
                            onchange: handle_files,
                        }
                        span {
                            if reading() { "Reading files..." } else { "Choose files to upload" }
                        }
                    }
                    InlineError { message: error }
                }
            }

            if documents.is_empty() {
                Notice { "No documents uploaded in this session." }
            }

            div { class: "document-list",
                for document in documents {
                    DocumentCard {
                        key: "{document.id}",
                        mind_map: upload.read().mind_map(document.id).cloned(),
                        document: document.clone(),
                        on_remove: move |id| remove(id),
                        on_mind_map: move |id| mind_map(id),
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentCard(
    document: Document,
    mind_map: Option<MindMap>,
    on_remove: EventHandler<Uuid>,
    on_mind_map: EventHandler<Uuid>,
) -> Element {
    let id = document.id;
    let uploaded = document.uploaded_at.format("%d/%m/%Y %H:%M").to_string();
    let size = format_file_size(document.size);

    rsx! {
        Card { class: "document-card",
            CardHeader {
                CardTitle { "{document.name}" }
                CardDescription { "{size} · {uploaded}" }
            }
            CardContent {
                DocumentStatusBadge { status: document.status }
                InlineError { message: document.error.clone() }
                if let Some(analysis) = document.analysis.clone() {
                    AnalysisView { analysis }
                }
                if let Some(map) = mind_map {
                    ul { class: "mind-map",
                        MindMapBranch { node: map.root }
                    }
                }
            }
            CardFooter {
                if document.is_ready() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_mind_map.call(id),
                        "Mind map"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_remove.call(id),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn AnalysisView(analysis: DocumentAnalysis) -> Element {
    let sections = [
        ("Key points", &analysis.key_points),
        ("Parties", &analysis.parties),
        ("Dates", &analysis.dates),
        ("Obligations", &analysis.obligations),
        ("Risks", &analysis.risks),
    ];

    rsx! {
        div { class: "analysis",
            p { class: "analysis-summary", "{analysis.summary}" }
            for (title, items) in sections {
                if !items.is_empty() {
                    div { class: "analysis-section",
                        h4 { "{title}" }
                        ul {
                            for item in items.iter() {
                                li { "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MindMapBranch(node: MindMapNode) -> Element {
    rsx! {
        li { "data-kind": "{node.kind.as_str()}",
            span { class: "mind-map-label", "{node.label}" }
            if !node.children.is_empty() {
                ul {
                    for child in node.children.clone() {
                        MindMapBranch { key: "{child.id}", node: child }
                    }
                }
            }
        }
    }
}
