use super::PanelController;
use crate::backend::LegalBackend;
use async_trait::async_trait;
use shared_types::{
    validation::MAX_CHAT_MESSAGE_LEN, AppError, ChatMessage, ChatRequest, ChatResponse,
    MessageMetadata,
};

/// Conversation with the legal assistant. Messages are append-only until
/// [`clear`](ChatPanel::clear).
pub struct ChatPanel {
    pub input: String,
    /// Document or case the next message refers to.
    pub context: MessageMetadata,
    app_name: String,
    messages: Vec<ChatMessage>,
    error: Option<String>,
    loading: bool,
}

impl ChatPanel {
    pub fn new(app_name: &str) -> Self {
        Self {
            input: String::new(),
            context: MessageMetadata::default(),
            app_name: app_name.to_string(),
            messages: vec![ChatMessage::greeting(app_name)],
            error: None,
            loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Drop the conversation, leaving only the greeting.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::greeting(&self.app_name)];
        self.error = None;
        self.input.clear();
    }

    /// Greeting text follows later rebrands.
    pub fn rename(&mut self, app_name: &str) {
        self.app_name = app_name.to_string();
    }
}

#[async_trait(?Send)]
impl PanelController for ChatPanel {
    type Request = ChatRequest;
    type Response = ChatResponse;

    /// Appends the user message before the request goes out.
    fn begin(&mut self) -> Result<ChatRequest, AppError> {
        let message = self.input.trim().to_string();
        let len = message.chars().count();
        let check = if len == 0 {
            Err(AppError::field("message", "Type a message first"))
        } else if len > MAX_CHAT_MESSAGE_LEN {
            Err(AppError::field(
                "message",
                format!("Messages are limited to {MAX_CHAT_MESSAGE_LEN} characters"),
            ))
        } else {
            Ok(())
        };
        if let Err(err) = check {
            self.error = Some(err.user_message());
            return Err(err);
        }

        self.messages
            .push(ChatMessage::user(message.clone(), self.context.clone()));
        self.input.clear();
        self.error = None;
        self.loading = true;
        Ok(ChatRequest {
            message,
            context: self.context.clone(),
        })
    }

    async fn call(backend: &dyn LegalBackend, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        backend.send_chat_message(request).await
    }

    fn finish(&mut self, result: Result<ChatResponse, AppError>) {
        self.loading = false;
        match result {
            Ok(reply) => {
                let mut message = ChatMessage::assistant(reply.response);
                message.timestamp = reply.timestamp;
                self.messages.push(message);
            }
            Err(err) => {
                tracing::error!(error = %err, "Chat request failed");
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
