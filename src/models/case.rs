use serde::{Deserialize, Serialize};

/// Single-valued case metadata for one legal matter.
///
/// Every field is optional: extraction absence is not an error. During
/// consolidation, conflicting observations across documents are recorded
/// as issues, never silently overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInformation {
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub court_district: Option<String>,
    pub document_title: Option<String>,
    pub document_type: Option<String>,
}

impl CaseInformation {
    /// No field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.case_number.is_none()
            && self.court_name.is_none()
            && self.court_district.is_none()
            && self.document_title.is_none()
            && self.document_type.is_none()
    }

    /// All fields required for filing are present.
    /// Title/type are per-document descriptors and do not count.
    pub fn is_complete(&self) -> bool {
        self.case_number.is_some() && self.court_name.is_some() && self.court_district.is_some()
    }
}

/// Which side of the `v.` a party sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Plaintiff,
    Defendant,
}

impl PartyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyRole::Plaintiff => "plaintiff",
            PartyRole::Defendant => "defendant",
        }
    }
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw party mention from one document, before deduplication.
///
/// Mentions carry no cross-document identity: the consolidator links them
/// by name similarity alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyMention {
    pub name: String,
    pub role: PartyRole,
    pub confidence: f32,
    /// Document id that produced this mention.
    pub source: String,
}

/// Canonical party after the consolidation merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub role: PartyRole,
    pub confidence: f32,
    /// All document ids that mentioned this party, sorted and deduplicated.
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_case_information_is_empty() {
        assert!(CaseInformation::default().is_empty());
    }

    #[test]
    fn case_information_with_one_field_not_empty() {
        let info = CaseInformation {
            case_number: Some("1:25-cv-02156".into()),
            ..Default::default()
        };
        assert!(!info.is_empty());
        assert!(!info.is_complete());
    }

    #[test]
    fn complete_requires_number_court_and_district() {
        let info = CaseInformation {
            case_number: Some("1:25-cv-02156".into()),
            court_name: Some("UNITED STATES DISTRICT COURT".into()),
            court_district: Some("Eastern District of New York".into()),
            ..Default::default()
        };
        assert!(info.is_complete());
    }

    #[test]
    fn party_role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PartyRole::Plaintiff).unwrap(),
            "\"plaintiff\""
        );
        assert_eq!(
            serde_json::to_string(&PartyRole::Defendant).unwrap(),
            "\"defendant\""
        );
    }
}
