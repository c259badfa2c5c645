use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Results kept after ranking.
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceLevel {
    High,
    Medium,
    Low,
}

pub const ALL_RELEVANCE_LEVELS: &[RelevanceLevel] =
    &[RelevanceLevel::High, RelevanceLevel::Medium, RelevanceLevel::Low];

impl RelevanceLevel {
    /// Minimum relevance score a result needs to pass this filter.
    pub fn min_score(&self) -> u8 {
        match self {
            RelevanceLevel::High => 90,
            RelevanceLevel::Medium => 70,
            RelevanceLevel::Low => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceLevel::High => "high",
            RelevanceLevel::Medium => "medium",
            RelevanceLevel::Low => "low",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        ALL_RELEVANCE_LEVELS.iter().copied().find(|l| l.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JurisprudenceFilters {
    /// Matched as a case-insensitive substring of the court name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<RelevanceLevel>,
}

impl JurisprudenceFilters {
    pub fn matches(&self, result: &JurisprudenceResult) -> bool {
        let court_ok = match self.court.as_deref().map(str::trim) {
            Some(court) if !court.is_empty() => result
                .court
                .to_lowercase()
                .contains(&court.to_lowercase()),
            _ => true,
        };
        let relevance_ok = self
            .relevance
            .map_or(true, |level| result.relevance >= level.min_score());
        court_ok && relevance_ok
    }

    /// Filter, sort by relevance (highest first) and truncate to
    /// [`MAX_RESULTS`].
    pub fn rank(&self, results: Vec<JurisprudenceResult>) -> Vec<JurisprudenceResult> {
        let mut kept: Vec<JurisprudenceResult> =
            results.into_iter().filter(|r| self.matches(r)).collect();
        kept.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        kept.truncate(MAX_RESULTS);
        kept
    }
}

/// Body of `POST /api/jurisprudence/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JurisprudenceSearchRequest {
    pub query: String,
    #[serde(default)]
    pub filters: JurisprudenceFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JurisprudenceResult {
    pub id: String,
    pub court: String,
    pub date: NaiveDate,
    pub summary: String,
    pub decision: String,
    /// 0–100.
    pub relevance: u8,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JurisprudenceSearchResponse {
    pub results: Vec<JurisprudenceResult>,
    pub total: usize,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(id: &str, court: &str, relevance: u8) -> JurisprudenceResult {
        JurisprudenceResult {
            id: id.to_string(),
            court: court.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            summary: String::new(),
            decision: String::new(),
            relevance,
            tags: vec![],
        }
    }

    #[test]
    fn rank_sorts_by_relevance_descending() {
        let ranked = JurisprudenceFilters::default().rank(vec![
            result("a", "STJ", 70),
            result("b", "STF", 95),
            result("c", "TJSP", 88),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn court_filter_is_case_insensitive_substring() {
        let filters = JurisprudenceFilters {
            court: Some("superior".to_string()),
            relevance: None,
        };
        let ranked = filters.rank(vec![
            result("a", "Superior Tribunal de Justiça", 90),
            result("b", "Tribunal de Justiça de São Paulo", 95),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "a");
    }

    #[test]
    fn relevance_floor_applies() {
        let filters = JurisprudenceFilters {
            court: None,
            relevance: Some(RelevanceLevel::High),
        };
        let ranked = filters.rank(vec![result("a", "STJ", 89), result("b", "STJ", 90)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn rank_keeps_at_most_ten() {
        let many = (0..15).map(|i| result(&i.to_string(), "STJ", 50 + i)).collect();
        let ranked = JurisprudenceFilters::default().rank(many);
        assert_eq!(ranked.len(), MAX_RESULTS);
        assert_eq!(ranked[0].relevance, 64);
    }

    #[test]
    fn empty_filters_serialize_to_empty_object() {
        let json = serde_json::to_string(&JurisprudenceFilters::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
