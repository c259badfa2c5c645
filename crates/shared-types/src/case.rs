use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Body of `POST /api/cases/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct CaseSearchRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_case_number"))
    )]
    pub case_number: String,
    /// Court id from `AppConfig::courts`.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a court"))
    )]
    pub court: String,
}

#[cfg(feature = "validation")]
fn validate_case_number(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("required");
        err.message = Some("Case number is required".into());
        return Err(err);
    }
    if !crate::validation::is_valid_case_number(value.trim()) {
        let mut err = validator::ValidationError::new("case_number");
        err.message = Some("Case number must follow NNNNNNN-DD.AAAA.J.TR.OOOO".into());
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimelineEventType {
    Filing,
    Decision,
    Hearing,
    #[serde(other)]
    Other,
}

impl TimelineEventType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimelineEventType::Filing => "Filing",
            TimelineEventType::Decision => "Decision",
            TimelineEventType::Hearing => "Hearing",
            TimelineEventType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventType,
}

// ---------------------------------------------------------------------------
// Deadlines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DeadlinePriority {
    High,
    Medium,
    Low,
}

impl DeadlinePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlinePriority::High => "high",
            DeadlinePriority::Medium => "medium",
            DeadlinePriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDeadline {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub priority: DeadlinePriority,
    #[serde(default)]
    pub completed: bool,
}

impl CaseDeadline {
    /// Whole days from `now` until the deadline; negative once past.
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        (self.date - now).num_days()
    }
}

// ---------------------------------------------------------------------------
// CaseInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseInfo {
    pub number: String,
    pub court: String,
    pub status: String,
    #[serde(default)]
    pub parties: Vec<String>,
    pub subject: String,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub deadlines: Vec<CaseDeadline>,
}

impl CaseInfo {
    /// Open deadlines, soonest first.
    pub fn pending_deadlines(&self) -> Vec<&CaseDeadline> {
        let mut pending: Vec<&CaseDeadline> =
            self.deadlines.iter().filter(|d| !d.completed).collect();
        pending.sort_by_key(|d| d.date);
        pending
    }
}
