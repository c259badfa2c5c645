use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    High,
    Medium,
    Low,
}

impl RiskSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSeverity::High => "high",
            RiskSeverity::Medium => "medium",
            RiskSeverity::Low => "low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskSeverity::High => "High risk",
            RiskSeverity::Medium => "Medium risk",
            RiskSeverity::Low => "Low risk",
        }
    }

    /// Overall level for a 0–100 contract score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskSeverity::Low,
            60..=79 => RiskSeverity::Medium,
            _ => RiskSeverity::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractRisk {
    pub id: String,
    pub severity: RiskSeverity,
    pub description: String,
    pub clause: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub clause: String,
    pub new_text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceItem {
    pub id: String,
    pub law: String,
    pub article: String,
    pub status: ComplianceStatus,
    pub description: String,
}

/// Result of `POST /api/contracts/{id}/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractAnalysis {
    pub summary: String,
    /// 0–100, higher is safer.
    pub score: u8,
    #[serde(default)]
    pub risks: Vec<ContractRisk>,
    #[serde(default)]
    pub suggestions: Vec<ContractSuggestion>,
    #[serde(default)]
    pub compliance: Vec<ComplianceItem>,
}

impl ContractAnalysis {
    pub fn risk_level(&self) -> RiskSeverity {
        RiskSeverity::from_score(self.score)
    }

    pub fn non_compliant(&self) -> impl Iterator<Item = &ComplianceItem> {
        self.compliance
            .iter()
            .filter(|c| c.status == ComplianceStatus::NonCompliant)
    }

    /// Risks ordered from most to least severe.
    pub fn risks_by_severity(&self) -> Vec<&ContractRisk> {
        let mut risks: Vec<&ContractRisk> = self.risks.iter().collect();
        risks.sort_by_key(|r| r.severity);
        risks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_thresholds() {
        assert_eq!(RiskSeverity::from_score(100), RiskSeverity::Low);
        assert_eq!(RiskSeverity::from_score(80), RiskSeverity::Low);
        assert_eq!(RiskSeverity::from_score(79), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(60), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(59), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_score(0), RiskSeverity::High);
    }

    #[test]
    fn parses_backend_payload() {
        let json = r#"{
            "summary": "ok",
            "score": 75,
            "risks": [
                {"id": "1", "severity": "medium", "description": "d", "clause": "8.2", "recommendation": "r"},
                {"id": "2", "severity": "high", "description": "d", "clause": "9.1", "recommendation": "r"}
            ],
            "suggestions": [{"id": "1", "type": "improvement", "description": "d", "clause": "9.1", "newText": "t"}],
            "compliance": [
                {"id": "1", "law": "Civil Code", "article": "Art. 421", "status": "compliant", "description": "d"},
                {"id": "2", "law": "CDC", "article": "Art. 51, IV", "status": "non-compliant", "description": "d"}
            ]
        }"#;
        let analysis: ContractAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.risk_level(), RiskSeverity::Medium);
        assert_eq!(analysis.non_compliant().count(), 1);
        assert_eq!(analysis.risks_by_severity()[0].id, "2");
        assert_eq!(analysis.suggestions[0].new_text, "t");
    }
}
