use dioxus::prelude::*;
use shared_types::{ComplianceStatus, DocumentStatus, RiskSeverity};

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }

    pub fn for_document(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Uploading => BadgeVariant::Secondary,
            DocumentStatus::Processing => BadgeVariant::Warning,
            DocumentStatus::Ready => BadgeVariant::Success,
            DocumentStatus::Error => BadgeVariant::Destructive,
        }
    }

    pub fn for_severity(severity: RiskSeverity) -> Self {
        match severity {
            RiskSeverity::High => BadgeVariant::Destructive,
            RiskSeverity::Medium => BadgeVariant::Warning,
            RiskSeverity::Low => BadgeVariant::Success,
        }
    }

    pub fn for_compliance(status: ComplianceStatus) -> Self {
        match status {
            ComplianceStatus::Compliant => BadgeVariant::Success,
            ComplianceStatus::Partial => BadgeVariant::Warning,
            ComplianceStatus::NonCompliant => BadgeVariant::Destructive,
        }
    }
}

/// Inline label for statuses, tags and severities.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge showing where a document is in the upload pipeline.
#[component]
pub fn DocumentStatusBadge(status: DocumentStatus) -> Element {
    rsx! {
        Badge { variant: BadgeVariant::for_document(status), "{status.display_name()}" }
    }
}
