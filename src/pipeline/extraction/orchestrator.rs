//! Legal entity extractor: runs every pattern extractor over one document's
//! text and assembles the per-document fact bag.
//!
//! Extraction is pure and per-document. Nothing here looks across
//! documents; that is the consolidator's job.

use std::sync::LazyLock;

use regex::Regex;

use super::court::{classify_document_type, extract_court_fields, normalize_district};
use super::dates::extract_dates;
use super::financial::{find_credit_bureaus, find_institutions};
use super::party::extract_parties;
use super::types::{DocumentFacts, LegalEntities};
use super::attorney::extract_attorney;
use crate::models::CaseInformation;

static STATUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+U\.?\s?S\.?\s?C\.?\s*(?:§§?|Section|Sec\.?)\s*(\d+[a-z0-9\-]*)")
        .unwrap()
});

/// Extract case-level metadata from one document. Never errors: empty or
/// irrelevant input yields all-`None` fields.
pub fn extract_case_information(text: &str) -> CaseInformation {
    let fields = extract_court_fields(text);
    CaseInformation {
        case_number: fields.case_number,
        court_name: fields.jurisdiction,
        court_district: fields.district.map(|d| normalize_district(&d)),
        document_type: fields
            .classification
            .as_deref()
            .and_then(classify_document_type)
            .map(String::from),
        document_title: fields.classification,
    }
}

/// Extract the category-keyed entity mapping from one document.
pub fn extract_legal_entities(text: &str) -> LegalEntities {
    LegalEntities {
        financial_institutions: find_institutions(text),
        credit_bureaus: find_credit_bureaus(text),
        attorneys: extract_attorney(text).into_iter().collect(),
        statutes: extract_statutes(text),
    }
}

/// Statutory citations in canonical "15 U.S.C. § 1681" form, deduplicated.
pub fn extract_statutes(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    STATUTE
        .captures_iter(text)
        .map(|caps| format!("{} U.S.C. § {}", &caps[1], caps[2].to_lowercase()))
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Build the full fact bag for one document.
///
/// `source_confidence` is the document engine's confidence in the text
/// itself (OCR vs. digital read); it travels with the bag so the
/// consolidator can weigh facts by their source.
pub fn extract_document_facts(text: &str, source_confidence: f32) -> DocumentFacts {
    let facts = DocumentFacts {
        case_information: extract_case_information(text),
        parties: extract_parties(text),
        dates: extract_dates(text),
        entities: extract_legal_entities(text),
        confidence: source_confidence,
    };
    tracing::debug!(
        parties = facts.parties.len(),
        dates = facts.dates.len(),
        has_case_number = facts.case_information.case_number.is_some(),
        "Extracted document facts"
    );
    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyRole;

    const COMPLAINT: &str = "\
UNITED STATES DISTRICT COURT
EASTERN DISTRICT OF NEW YORK

JANE DOE,
          Plaintiff,
v.
EQUIFAX INFORMATION SERVICES LLC,
          Defendant.

Case No. 1:25-cv-02156

COMPLAINT AND DEMAND FOR JURY TRIAL

1. Plaintiff brings this action under 15 U.S.C. § 1681 et seq.
2. On January 10, 2025, Experian reported inaccurate information.
3. Plaintiff disputed the account on 2/3/2025.
";

    #[test]
    fn case_information_from_complaint() {
        let info = extract_case_information(COMPLAINT);
        assert_eq!(info.case_number.as_deref(), Some("1:25-cv-02156"));
        assert_eq!(info.court_name.as_deref(), Some("UNITED STATES DISTRICT COURT"));
        assert_eq!(
            info.court_district.as_deref(),
            Some("Eastern District of New York")
        );
        assert_eq!(info.document_type.as_deref(), Some("complaint"));
    }

    #[test]
    fn empty_input_yields_all_none() {
        let info = extract_case_information("");
        assert!(info.is_empty());
    }

    #[test]
    fn entities_cover_all_categories() {
        let entities = extract_legal_entities(COMPLAINT);
        assert_eq!(entities.credit_bureaus, vec!["Equifax", "Experian"]);
        assert_eq!(entities.statutes, vec!["15 U.S.C. § 1681"]);
    }

    #[test]
    fn statute_variants_normalized_and_deduplicated() {
        let text = "violations of 15 U.S.C. § 1681i and 15 USC Section 1681i, plus 15 U.S.C. §§ 1692";
        assert_eq!(
            extract_statutes(text),
            vec!["15 U.S.C. § 1681i", "15 U.S.C. § 1692"]
        );
    }

    #[test]
    fn fact_bag_combines_all_extractors() {
        let facts = extract_document_facts(COMPLAINT, 0.92);
        assert!((facts.confidence - 0.92).abs() < f32::EPSILON);
        assert_eq!(facts.parties.len(), 2);
        assert_eq!(
            facts
                .parties
                .iter()
                .filter(|p| p.role == PartyRole::Plaintiff)
                .count(),
            1
        );
        assert_eq!(facts.dates.len(), 2);
    }

    #[test]
    fn content_free_document_yields_empty_bag() {
        let facts = extract_document_facts("hello world", 0.5);
        assert!(facts.case_information.is_empty());
        assert!(facts.parties.is_empty());
        assert!(facts.dates.is_empty());
        assert!(facts.entities.statutes.is_empty());
    }
}
