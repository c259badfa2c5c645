use dioxus::prelude::*;
use services::panels::PanelController;
use shared_types::validation::MAX_CHAT_MESSAGE_LEN;
use shared_types::{ChatMessage, ChatRole, Panel};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, FormSelect, InlineError, Input,
    PageActions, PageHeader, PageSubtitle, PageTitle, Textarea,
};

use super::FeatureGate;
use crate::session::{submit_panel, use_panels, use_session};

#[component]
pub fn Chat() -> Element {
    rsx! {
        FeatureGate { panel: Panel::Chat, ChatPanelView {} }
    }
}

#[component]
fn ChatPanelView() -> Element {
    let session = use_session();
    let panels = use_panels();
    let upload = panels.upload;
    let mut chat = panels.chat;

    // Greetings after a clear use the current name.
    use_effect(move || {
        let app_name = session.branding().app_name;
        chat.write().rename(&app_name);
    });

    let linkable: Vec<(String, String)> = upload
        .read()
        .ready_documents()
        .filter_map(|d| d.remote_id.clone().map(|remote| (remote, d.name.clone())))
        .collect();
    let (messages, input, context, error, loading) = {
        let p = chat.read();
        (
            p.messages().to_vec(),
            p.input.clone(),
            p.context.clone(),
            p.error().map(str::to_string),
            p.is_loading(),
        )
    };
    let linked_document = context.document_id.clone().unwrap_or_default();
    let linked_case = context.case_number.clone().unwrap_or_default();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.backend() {
            Ok(backend) => submit_panel(chat, backend),
            Err(err) => tracing::error!(error = %err, "Chat unavailable"),
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Assistant" }
                    PageSubtitle { "Ask about your documents, cases and the law." }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: loading,
                        onclick: move |_| chat.write().clear(),
                        "Clear conversation"
                    }
                }
            }

            Card {
                CardContent {
                    div { class: "chat-log", role: "log", "aria-live": "polite",
                        for message in messages {
                            MessageBubble { key: "{message.id}", message }
                        }
                        if loading {
                            div { class: "chat-message", "data-role": "assistant",
                                span { class: "chat-typing", "..." }
                            }
                        }
                    }
                }
                CardFooter {
                    form { class: "chat-form", onsubmit: handle_submit,
                        div { class: "chat-context",
                            FormSelect {
                                label: "About document",
                                value: linked_document.clone(),
                                onchange: move |evt: Event<FormData>| {
                                    let value = evt.value();
                                    chat.write().context.document_id = (!value.is_empty()).then_some(value);
                                },
                                option { value: "", selected: linked_document.is_empty(), "None" }
                                for (remote, name) in linkable {
                                    option {
                                        key: "{remote}",
                                        value: "{remote}",
                                        selected: remote == linked_document,
                                        "{name}"
                                    }
                                }
                            }
                            Input {
                                label: "About case",
                                value: linked_case,
                                placeholder: "Case number",
                                on_input: move |evt: FormEvent| {
                                    let value = evt.value().trim().to_string();
                                    chat.write().context.case_number = (!value.is_empty()).then_some(value);
                                },
                            }
                        }
                        Textarea {
                            value: input,
                            placeholder: "Type your question",
                            max_chars: Some(MAX_CHAT_MESSAGE_LEN),
                            disabled: loading,
                            on_input: move |evt: FormEvent| chat.write().input = evt.value(),
                        }
                        Button { button_type: "submit", loading: loading, "Send" }
                    }
                    InlineError { message: error }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let role = match message.role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    };
    let time = message.timestamp.format("%H:%M").to_string();
    let reference = message.metadata.as_ref().and_then(|m| {
        m.case_number
            .as_ref()
            .map(|n| format!("Case {n}"))
            .or_else(|| m.document_id.as_ref().map(|_| "Linked document".to_string()))
    });

    rsx! {
        div { class: "chat-message", "data-role": role,
            p { class: "chat-content", "{message.content}" }
            div { class: "chat-meta",
                span { "{time}" }
                if let Some(reference) = reference {
                    span { class: "chat-reference", "{reference}" }
                }
            }
        }
    }
}
