use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Links a message to the document or case it is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
}

impl MessageMetadata {
    pub fn is_empty(&self) -> bool {
        self.document_id.is_none() && self.case_number.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    pub fn user(content: impl Into<String>, metadata: MessageMetadata) -> Self {
        Self {
            metadata: (!metadata.is_empty()).then_some(metadata),
            ..Self::new(ChatRole::User, content)
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// The message a fresh or cleared conversation starts with.
    pub fn greeting(app_name: &str) -> Self {
        Self::assistant(format!(
            "Hello! I'm the {app_name} assistant. I can help with document analysis, \
             case lookups, contract review and jurisprudence research. How can I help?"
        ))
    }
}

/// Body of `POST /api/chat`. `context` mirrors [`MessageMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: MessageMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}
