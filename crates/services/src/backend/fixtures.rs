//! Canned responses served by the mock backend.

use chrono::{Duration, NaiveDate, Utc};
use shared_types::{
    AnalysisType, CaseDeadline, CaseInfo, ComplianceItem, ComplianceStatus, ContractAnalysis,
    ContractRisk, ContractSuggestion, DeadlinePriority, DocumentAnalysis, JurisprudenceResult,
    MindMap, MindMapNode, MindMapNodeKind, RiskSeverity, TimelineEvent, TimelineEventType,
};

pub(crate) fn document_analysis(file_name: &str, analysis_type: AnalysisType) -> DocumentAnalysis {
    let summary = match analysis_type {
        AnalysisType::General => format!(
            "{file_name} was analyzed successfully. It is a legal instrument with a formal \
             structure, identified parties and recurring obligations."
        ),
        AnalysisType::Synthesis => format!(
            "Synthesis of {file_name}: the parties agree on the provision of services with \
             monthly payments, confidentiality and a fixed term."
        ),
        AnalysisType::Qa => format!(
            "{file_name} is ready for questions about its parties, deadlines, obligations \
             and termination terms."
        ),
    };
    DocumentAnalysis {
        summary,
        key_points: strings(&[
            "Legal document identified",
            "Formal structure is adequate",
            "Main clauses identified",
            "Technical terms present",
        ]),
        parties: strings(&["Party A", "Party B"]),
        dates: vec![Utc::now().format("%d/%m/%Y").to_string()],
        obligations: strings(&[
            "Comply with the contractual clauses",
            "Observe the agreed deadlines",
            "Keep the information confidential",
        ]),
        risks: strings(&[
            "Some clauses may be ambiguous",
            "Deadlines should be reviewed",
        ]),
    }
}

pub(crate) fn mind_map() -> MindMap {
    use MindMapNodeKind::{Category, Item, Root};

    let category = |id: &str, label: &str, items: &[(&str, &str)]| {
        MindMapNode::new(id, label, Category).with_children(
            items
                .iter()
                .map(|(id, label)| MindMapNode::new(id, label, Item))
                .collect(),
        )
    };

    MindMap {
        root: MindMapNode::new("root", "Legal document", Root).with_children(vec![
            category(
                "parties",
                "Parties",
                &[("party1", "Plaintiff"), ("party2", "Defendant")],
            ),
            category(
                "obligations",
                "Obligations",
                &[("obl1", "Payment"), ("obl2", "Provision of services")],
            ),
            category(
                "dates",
                "Key dates",
                &[("date1", "Signature date"), ("date2", "Term of validity")],
            ),
        ]),
    }
}

pub(crate) fn case_info(case_number: &str, court_name: &str) -> CaseInfo {
    let now = Utc::now();
    let event = |id: &str, days_ago: i64, description: &str, kind| TimelineEvent {
        id: id.to_string(),
        date: now - Duration::days(days_ago),
        description: description.to_string(),
        kind,
    };
    let deadline = |id: &str, days_ahead: i64, description: &str, priority| CaseDeadline {
        id: id.to_string(),
        date: now + Duration::days(days_ahead),
        description: description.to_string(),
        priority,
        completed: false,
    };

    CaseInfo {
        number: case_number.to_string(),
        court: court_name.to_string(),
        status: "In progress".to_string(),
        parties: strings(&["João Silva Santos", "Empresa ABC Ltda."]),
        subject: "Debt collection action".to_string(),
        last_update: now,
        timeline: vec![
            event("1", 60, "Case distributed", TimelineEventType::Filing),
            event("2", 45, "Defendant served", TimelineEventType::Filing),
            event("3", 30, "Defense filed", TimelineEventType::Filing),
            event("4", 15, "Case management order", TimelineEventType::Decision),
            event("5", 5, "Evidentiary hearing scheduled", TimelineEventType::Hearing),
        ],
        deadlines: vec![
            deadline("1", 10, "Evidentiary and trial hearing", DeadlinePriority::High),
            deadline("2", 25, "Closing arguments due", DeadlinePriority::Medium),
            deadline("3", 40, "Expected judgment", DeadlinePriority::Low),
        ],
    }
}

pub(crate) fn contract_analysis() -> ContractAnalysis {
    ContractAnalysis {
        summary: "Contract reviewed under Brazilian law. The structure is adequate with a few \
                  points that need attention."
            .to_string(),
        score: 75,
        risks: vec![
            ContractRisk {
                id: "1".to_string(),
                severity: RiskSeverity::High,
                description: "Penalty clause may be considered excessive".to_string(),
                clause: "Clause 8.2".to_string(),
                recommendation: "Cap the penalty at 10% as case law suggests".to_string(),
            },
            ContractRisk {
                id: "2".to_string(),
                severity: RiskSeverity::Medium,
                description: "No force majeure clause".to_string(),
                clause: "Whole contract".to_string(),
                recommendation: "Add a clause covering acts of God".to_string(),
            },
        ],
        suggestions: vec![ContractSuggestion {
            id: "1".to_string(),
            kind: "improvement".to_string(),
            description: "Clarify the termination clause".to_string(),
            clause: "Clause 9.1".to_string(),
            new_text: "Termination upon 30 days' prior notice".to_string(),
        }],
        compliance: vec![
            ComplianceItem {
                id: "1".to_string(),
                law: "Código Civil".to_string(),
                article: "Art. 421".to_string(),
                status: ComplianceStatus::Compliant,
                description: "Social function of the contract respected".to_string(),
            },
            ComplianceItem {
                id: "2".to_string(),
                law: "CDC".to_string(),
                article: "Art. 51, IV".to_string(),
                status: ComplianceStatus::NonCompliant,
                description: "Excessive penalty clause".to_string(),
            },
        ],
    }
}

/// Precedents matching the keywords in `query`, unranked.
pub(crate) fn jurisprudence(query: &str) -> Vec<JurisprudenceResult> {
    let q = query.to_lowercase();
    let mut results = Vec::new();

    if ["danos morais", "moral"].iter().any(|t| q.contains(t)) {
        results.push(precedent(
            "1",
            "Superior Tribunal de Justiça",
            (2024, 1, 15),
            "Civil liability for moral damages in consumer relations. Moral damage is presumed \
             when the service is defective.",
            "SPECIAL APPEAL. CONSUMER LAW. MORAL DAMAGES. DEFECTIVE SERVICE. Moral damage arising \
             from a defective service is presumed; proof of the defect and causal link suffices.",
            95,
            &["Moral Damages", "Consumer Law", "Civil Liability"],
        ));
        results.push(precedent(
            "2",
            "Tribunal de Justiça de São Paulo",
            (2024, 2, 10),
            "Moral damages for undue credit blacklisting. The award must be proportionate and \
             reasonable.",
            "CIVIL APPEAL. MORAL DAMAGES. UNDUE BLACKLISTING. The amount of compensation must \
             consider the extent of the damage and the economic capacity of the parties.",
            88,
            &["Moral Damages", "Blacklisting", "Compensation"],
        ));
    }

    if ["contrato", "contract"].iter().any(|t| q.contains(t)) {
        results.push(precedent(
            "3",
            "Supremo Tribunal Federal",
            (2024, 3, 5),
            "Social function of contracts. Private autonomy limited by constitutional principles.",
            "DIRECT ACTION OF UNCONSTITUTIONALITY. CONTRACTS. SOCIAL FUNCTION. Art. 421 of the \
             Civil Code limits private autonomy; contracts must also serve social values.",
            92,
            &["Contracts", "Social Function", "Private Autonomy"],
        ));
    }

    if ["consumidor", "consumer", "cdc"].iter().any(|t| q.contains(t)) {
        results.push(precedent(
            "4",
            "Superior Tribunal de Justiça",
            (2024, 1, 20),
            "Consumer relationship. Reversal of the burden of proof under the Consumer Defense \
             Code.",
            "SPECIAL APPEAL. CONSUMER LAW. REVERSAL OF THE BURDEN OF PROOF. Art. 6, VIII of the \
             CDC applies when the claims are plausible or the consumer is at a disadvantage.",
            90,
            &["Consumer Law", "Burden of Proof", "CDC"],
        ));
    }

    if results.is_empty() {
        results.push(precedent(
            "5",
            "Tribunal de Justiça do Rio de Janeiro",
            (2024, 2, 25),
            "Human dignity principle applied to concrete civil law cases.",
            "CIVIL APPEAL. HUMAN DIGNITY. CIVIL LAW. Human dignity is a foundation of the Republic \
             and binds private legal relationships.",
            85,
            &["Human Dignity", "Fundamental Rights"],
        ));
        results.push(precedent(
            "6",
            "Tribunal Regional Federal da 3ª Região",
            (2024, 3, 15),
            "Due process of law. Constitutional procedural guarantees.",
            "APPEAL. DUE PROCESS. CONSTITUTIONAL GUARANTEES. Due process covers both procedural \
             and substantive aspects, ensuring fair decisions.",
            82,
            &["Due Process", "Constitutional Guarantees"],
        ));
    }

    results
}

fn precedent(
    id: &str,
    court: &str,
    (y, m, d): (i32, u32, u32),
    summary: &str,
    decision: &str,
    relevance: u8,
    tags: &[&str],
) -> JurisprudenceResult {
    JurisprudenceResult {
        id: id.to_string(),
        court: court.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        summary: summary.to_string(),
        decision: decision.to_string(),
        relevance,
        tags: strings(tags),
    }
}

const GENERAL_REPLIES: [&str; 4] = [
    "I understand. As a legal assistant I can help with document analysis, jurisprudence \
     research and guidance on Brazilian law.",
    "Good question. A more precise answer needs a little more detail about your case.",
    "Brazilian legislation has relevant provisions here. Could you share more about the \
     situation?",
    "I can help with that. Let's review the relevant documents and the applicable case law.",
];

pub(crate) fn chat_reply(message: &str) -> String {
    let m = message.to_lowercase();
    if ["contrato", "contract"].iter().any(|t| m.contains(t)) {
        return "For contracts, use the contract analysis panel: it checks compliance with \
                Brazilian law and scores the risks."
            .to_string();
    }
    if ["processo", "case"].iter().any(|t| m.contains(t)) {
        return "To follow a lawsuit, use case search with the CNJ case number and the court."
            .to_string();
    }
    if ["jurisprudência", "jurisprudence", "precedente", "precedent"]
        .iter()
        .any(|t| m.contains(t))
    {
        return "Jurisprudence search finds relevant precedents in the superior and state courts."
            .to_string();
    }
    // Stable choice so the same question gets the same answer.
    let index = message.bytes().map(usize::from).sum::<usize>() % GENERAL_REPLIES.len();
    GENERAL_REPLIES[index].to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
