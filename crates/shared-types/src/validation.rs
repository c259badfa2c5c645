//! Input checks shared by the branding wizard and the feature panels.
//!
//! Every check runs before a request is built, so the mock and live backends
//! see exactly the same accepted inputs.

use crate::config::UploadLimits;
use crate::error::AppError;

pub const MAX_CHAT_MESSAGE_LEN: usize = 2000;
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_QUERY_LEN: usize = 500;

/// CNJ unified case number layout; `N` marks a digit.
const CASE_NUMBER_TEMPLATE: &str = "NNNNNNN-NN.NNNN.N.NN.NNNN";

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(feature = "validation")]
pub fn validate_hex_color(value: &str) -> Result<(), validator::ValidationError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("hex_color");
        err.message = Some(format!("'{value}' is not a hex color like #1E3A8A").into());
        Err(err)
    }
}

/// Lowercased extension including the leading dot (`"Brief.PDF"` → `".pdf"`).
///
/// Dotfiles without a further extension have none.
pub fn file_extension(name: &str) -> Option<String> {
    let stem_start = name.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    let base = &name[stem_start..];
    match base.rfind('.') {
        Some(0) | None => None,
        Some(i) if i + 1 == base.len() => None,
        Some(i) => Some(base[i..].to_lowercase()),
    }
}

/// Reject a selected file by type, then by size. Nothing is transferred for a
/// rejected file.
pub fn validate_file(name: &str, size: u64, limits: &UploadLimits) -> Result<(), AppError> {
    let allowed = file_extension(name).is_some_and(|ext| {
        limits
            .allowed_extensions
            .iter()
            .any(|a| a.eq_ignore_ascii_case(&ext))
    });
    if !allowed {
        return Err(AppError::invalid_file(format!(
            "{name}: file type not supported. Allowed types: {}",
            limits.allowed_extensions.join(", ")
        )));
    }
    if size > limits.max_file_size {
        return Err(AppError::invalid_file(format!(
            "{name}: file is too large ({}). Maximum size is {}",
            format_file_size(size),
            format_file_size(limits.max_file_size)
        )));
    }
    Ok(())
}

/// Matches `NNNNNNN-DD.AAAA.J.TR.OOOO`.
pub fn is_valid_case_number(case_number: &str) -> bool {
    case_number.len() == CASE_NUMBER_TEMPLATE.len()
        && case_number
            .chars()
            .zip(CASE_NUMBER_TEMPLATE.chars())
            .all(|(c, t)| if t == 'N' { c.is_ascii_digit() } else { c == t })
}

/// Length bounds plus a guard against markup and inline script handlers.
pub fn validate_search_query(query: &str) -> Result<(), AppError> {
    let query = query.trim();
    let len = query.chars().count();
    if len < MIN_QUERY_LEN {
        return Err(AppError::field(
            "query",
            format!("Search query must have at least {MIN_QUERY_LEN} characters"),
        ));
    }
    if len > MAX_QUERY_LEN {
        return Err(AppError::field(
            "query",
            format!("Search query must have at most {MAX_QUERY_LEN} characters"),
        ));
    }
    if contains_markup(query) {
        return Err(AppError::field("query", "Search query contains invalid content"));
    }
    Ok(())
}

fn contains_markup(text: &str) -> bool {
    let lower = text.to_lowercase();
    if lower.contains("<script") || lower.contains("javascript:") {
        return true;
    }
    // Inline handlers such as `onload=` / `onclick =`.
    let bytes = lower.as_bytes();
    lower.match_indices("on").any(|(i, _)| {
        let at_word_start = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
        let rest = &lower[i + 2..];
        let name_len = rest.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        at_word_start && name_len > 0 && rest[name_len..].trim_start().starts_with('=')
    })
}

/// Human readable size, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
