use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CaseInformation, Party};

/// Version of the consolidated-case output contract. Field names and
/// nesting are consumed by the downstream template renderer; bump this
/// whenever the shape changes.
pub const FORMAT_VERSION: &str = "1.0";

/// The canonical, deduplicated record produced by folding all per-document
/// extractions for one legal matter. Immutable once finalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedCase {
    pub case_information: CaseInformation,
    pub case_summary: CaseSummary,
    pub plaintiffs: Vec<Party>,
    pub defendants: Vec<Party>,
    pub timeline: Vec<TimelineEntry>,
    pub issues: Vec<ConsolidationIssue>,
    /// 0–100 aggregate confidence in the consolidated record.
    pub extraction_confidence: f32,
    pub processing_metadata: ProcessingMetadata,
}

/// Headline fields for quick display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSummary {
    pub case_number: Option<String>,
    pub jurisdiction: Option<String>,
    pub confidence: f32,
}

/// One chronologically placed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub event: String,
    /// Document id the event came from.
    pub source: String,
}

/// Problems found during consolidation. Advisory: the record is always
/// produced; issues exist for human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Two documents disagree on a single-valued fact.
    Conflict,
    /// A required field is missing case-wide.
    Completeness,
    /// Future-dated or otherwise implausible timeline entry.
    TimelineError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Unique id for this consolidation run, for log correlation.
    pub run_id: uuid::Uuid,
    pub source_documents: Vec<String>,
    /// RFC 3339, UTC.
    pub processing_timestamp: String,
    pub total_documents_processed: usize,
    pub format_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&IssueKind::TimelineError).unwrap(),
            "\"timeline_error\""
        );
        assert_eq!(
            serde_json::to_string(&IssueKind::Conflict).unwrap(),
            "\"conflict\""
        );
    }

    #[test]
    fn issue_field_named_type_in_json() {
        let issue = ConsolidationIssue {
            kind: IssueKind::Completeness,
            message: "No case number found".into(),
            sources: vec![],
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "completeness");
    }
}
