use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    /// A selected file was rejected before any transfer (type, size or count).
    InvalidFile,
    Conflict,
    /// The request did not resolve within its deadline and was abandoned.
    Timeout,
    /// The request never produced an HTTP response (DNS, connection, body read).
    Transport,
    /// The backend answered with a non-2xx status.
    HttpStatus,
    /// A gateway capability was used before the configuration bound it.
    NotInitialized,
    ConfigUnavailable,
    Storage,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InvalidFile => write!(f, "InvalidFile"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Timeout => write!(f, "Timeout"),
            AppErrorKind::Transport => write!(f, "Transport"),
            AppErrorKind::HttpStatus => write!(f, "HttpStatus"),
            AppErrorKind::NotInitialized => write!(f, "NotInitialized"),
            AppErrorKind::ConfigUnavailable => write!(f, "ConfigUnavailable"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used by every layer, from validation up to
/// the gateway client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
    /// HTTP status code for `HttpStatus` errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
            status: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    /// Validation failure on a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn invalid_file(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidFile, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Transport, message)
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(AppErrorKind::HttpStatus, message)
        }
    }

    pub fn not_initialized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotInitialized, message)
    }

    pub fn config_unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ConfigUnavailable, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an `HttpStatus` error from a backend response body.
    ///
    /// The backend answers failures as `{"error": "..."}`; when the body has
    /// that shape its message is kept, otherwise a generic one is used.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        Self::http_status(status, message)
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == AppErrorKind::Timeout
    }

    /// Text shown inline in a panel when this error reaches the user.
    pub fn user_message(&self) -> String {
        match self.kind {
            AppErrorKind::Timeout => {
                "The request took too long and was cancelled. Please try again.".to_string()
            }
            AppErrorKind::Transport => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            AppErrorKind::HttpStatus => format!("Request failed: {}", self.message),
            AppErrorKind::NotInitialized | AppErrorKind::InternalError => {
                "Something went wrong. Please try again.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::bad_request(format!("Malformed JSON: {err}"))
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        collect_field_errors("", &errors, &mut field_errors);
        // Lead with the first failing field so the inline message is specific.
        let message = field_errors
            .iter()
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, msg)| msg.clone())
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::validation(message, field_errors)
    }
}

/// Flatten nested validation errors into dotted paths (`colors.light.primary`).
#[cfg(feature = "validation")]
fn collect_field_errors(
    prefix: &str,
    errors: &validator::ValidationErrors,
    out: &mut HashMap<String, String>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                if let Some(first) = errs.first() {
                    let msg = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {path}"));
                    out.insert(path, msg);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
