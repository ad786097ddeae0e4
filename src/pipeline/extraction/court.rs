//! Court header extraction: jurisdiction, district, division, case number,
//! and document classification from a filing's caption.

use std::sync::LazyLock;

use serde::Serialize;

use super::patterns::{FieldRule, RuleSet};

/// Raw field values lifted from the caption. District is not yet
/// normalized here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourtFields {
    pub jurisdiction: Option<String>,
    pub district: Option<String>,
    pub division: Option<String>,
    pub case_number: Option<String>,
    pub classification: Option<String>,
}

static COURT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::compile(&[
        FieldRule {
            field: "jurisdiction",
            patterns: &[
                r"(?im)^\s*(UNITED STATES DISTRICT COURT)\s*$",
                r"(?im)^\s*(UNITED STATES BANKRUPTCY COURT)\s*$",
                r"(?im)^\s*((?:SUPERIOR|CIRCUIT|SUPREME|COUNTY|MUNICIPAL)\s+COURT[^\n]*?)\s*$",
            ],
        },
        FieldRule {
            field: "district",
            patterns: &[
                r"(?im)^\s*(?:FOR\s+THE\s+)?((?:NORTHERN|SOUTHERN|EASTERN|WESTERN|CENTRAL|MIDDLE)\s+DISTRICT(?:\s+OF)?\s+[A-Z][A-Z ]+?)\s*$",
                r"(?im)^\s*(?:FOR\s+THE\s+)?(DISTRICT\s+OF\s+[A-Z][A-Z ]+?)\s*$",
                // Compact and dotted abbreviations: EDNY, S.D.N.Y., ...
                r"\b([NSEWC]D(?:NY|NJ|CA|TX|FL|IL|PA|VA|MI|GA|OH|MA))\b",
                r"\b([NSEWC]\.D\.(?:N\.Y\.|N\.J\.|Cal\.|Tex\.|Fla\.|Ill\.|Pa\.|Va\.|Mich\.|Ga\.|Ohio|Mass\.))",
            ],
        },
        FieldRule {
            field: "division",
            patterns: &[r"(?im)^\s*([A-Z][A-Z ]+\s+DIVISION)\s*$"],
        },
        FieldRule {
            field: "case_number",
            patterns: &[
                // Structural federal form wins over label-based matches.
                r"\b(\d:\d{2}-(?:cv|cr|mc|md)-\d{4,6}(?:-[A-Z]{2,4}){0,2})\b",
                r"(?i)(?:civil\s+action|case)\s+(?:no\.?|number)\s*[:.]?\s*([A-Za-z0-9][A-Za-z0-9:/\-\.]*\d[A-Za-z0-9:/\-\.]*)",
                r"(?i)index\s+(?:no\.?|number)\s*[:.]?\s*([A-Za-z0-9][A-Za-z0-9:/\-\.]*\d[A-Za-z0-9:/\-\.]*)",
                r"(?i)docket\s+(?:no\.?|number)\s*[:.]?\s*([A-Za-z0-9][A-Za-z0-9:/\-\.]*\d[A-Za-z0-9:/\-\.]*)",
            ],
        },
        FieldRule {
            field: "classification",
            patterns: &[
                r"(?im)^\s*((?:FIRST|SECOND|THIRD)\s+AMENDED\s+COMPLAINT)\s*$",
                r"(?im)^\s*(COMPLAINT(?:\s+AND\s+DEMAND\s+FOR\s+JURY\s+TRIAL)?)\s*$",
                r"(?im)^\s*(SUMMONS(?:\s+IN\s+A\s+CIVIL\s+ACTION)?)\s*$",
                r"(?im)^\s*(CIVIL\s+COVER\s+SHEET)\s*$",
                r"(?i)\b(NOTICE\s+OF\s+ADVERSE\s+ACTION)\b",
                r"(?i)\b(ADVERSE\s+ACTION\s+NOTICE)\b",
                r"(?i)\b(DENIAL\s+(?:LETTER|NOTICE|OF\s+CREDIT))\b",
                r"(?im)^\s*(ATTORNEY\s+NOTES?|CASE\s+NOTES?|MEMORANDUM)\s*$",
            ],
        },
    ])
});

/// Extract raw court caption fields. Absence of any field is normal:
/// denial letters and notes carry no caption at all.
pub fn extract_court_fields(text: &str) -> CourtFields {
    let map = COURT_RULES.extract(text);
    CourtFields {
        jurisdiction: map.get("jurisdiction").cloned(),
        district: map.get("district").cloned(),
        division: map.get("division").cloned(),
        case_number: map.get("case_number").cloned(),
        classification: map.get("classification").cloned(),
    }
}

/// Compact abbreviation → canonical district name.
/// Keyed on the uppercased form with dots and spaces removed.
const DISTRICT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("EDNY", "Eastern District of New York"),
    ("SDNY", "Southern District of New York"),
    ("NDNY", "Northern District of New York"),
    ("WDNY", "Western District of New York"),
    ("DNJ", "District of New Jersey"),
    ("NDCA", "Northern District of California"),
    ("CDCA", "Central District of California"),
    ("EDCA", "Eastern District of California"),
    ("SDCA", "Southern District of California"),
    ("NDTX", "Northern District of Texas"),
    ("SDTX", "Southern District of Texas"),
    ("EDTX", "Eastern District of Texas"),
    ("WDTX", "Western District of Texas"),
    ("NDIL", "Northern District of Illinois"),
    ("SDFL", "Southern District of Florida"),
    ("MDFL", "Middle District of Florida"),
    ("NDGA", "Northern District of Georgia"),
    ("EDPA", "Eastern District of Pennsylvania"),
    ("EDVA", "Eastern District of Virginia"),
    ("EDMI", "Eastern District of Michigan"),
    ("NDOH", "Northern District of Ohio"),
    ("DMA", "District of Massachusetts"),
    ("DDC", "District of Columbia"),
];

/// Normalize a district mention to the canonical
/// "[Direction] District of [State]" form.
///
/// Handles compact/dotted abbreviations (EDNY, S.D.N.Y.), already-canonical
/// strings in any casing, and the malformed variant that drops "OF"
/// ("EASTERN DISTRICT NEW YORK").
pub fn normalize_district(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();

    if let Some((_, canonical)) = DISTRICT_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == compact)
    {
        return (*canonical).to_string();
    }

    let upper = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    if upper.contains("DISTRICT OF") {
        return title_case_district(&upper);
    }
    if upper.contains("DISTRICT ") {
        // Malformed caption missing "OF": "EASTERN DISTRICT NEW YORK"
        return title_case_district(&upper.replacen("DISTRICT ", "DISTRICT OF ", 1));
    }
    title_case_district(&upper)
}

fn title_case_district(upper: &str) -> String {
    upper
        .split_whitespace()
        .map(|word| {
            if word == "OF" {
                "of".to_string()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a classification string to a document-type slug.
pub fn classify_document_type(classification: &str) -> Option<&'static str> {
    let lower = classification.to_lowercase();
    if lower.contains("complaint") {
        return Some("complaint");
    }
    if lower.contains("summons") {
        return Some("summons");
    }
    if lower.contains("civil cover") {
        return Some("civil_cover_sheet");
    }
    if lower.contains("adverse action") {
        return Some("adverse_action_notice");
    }
    if lower.contains("denial") || lower.contains("denied") {
        return Some("denial_letter");
    }
    if lower.contains("notes") || lower.contains("memorandum") {
        return Some("attorney_notes");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTION: &str = "\
UNITED STATES DISTRICT COURT
EASTERN DISTRICT OF NEW YORK

JANE DOE,
          Plaintiff,
v.
EQUIFAX INFORMATION SERVICES LLC,
          Defendant.

Case No. 1:25-cv-02156

COMPLAINT AND DEMAND FOR JURY TRIAL
";

    #[test]
    fn extracts_full_federal_caption() {
        let fields = extract_court_fields(CAPTION);
        assert_eq!(
            fields.jurisdiction.as_deref(),
            Some("UNITED STATES DISTRICT COURT")
        );
        assert_eq!(
            fields.district.as_deref(),
            Some("EASTERN DISTRICT OF NEW YORK")
        );
        assert_eq!(fields.case_number.as_deref(), Some("1:25-cv-02156"));
        assert_eq!(
            fields.classification.as_deref(),
            Some("COMPLAINT AND DEMAND FOR JURY TRIAL")
        );
    }

    #[test]
    fn structural_case_number_beats_label_match() {
        // The label pattern would grab "2024-CV-8812" but the structural
        // federal form appears too and is listed first.
        let text = "Case Number: 2024-CV-8812\nrefiled as 1:25-cv-02156 in federal court";
        let fields = extract_court_fields(text);
        assert_eq!(fields.case_number.as_deref(), Some("1:25-cv-02156"));
    }

    #[test]
    fn bare_index_number_form() {
        let fields = extract_court_fields("Index No. 712345/2025");
        assert_eq!(fields.case_number.as_deref(), Some("712345/2025"));
    }

    #[test]
    fn no_caption_yields_all_none() {
        let fields = extract_court_fields("Dear Ms. Doe, thank you for your application.");
        assert!(fields.jurisdiction.is_none());
        assert!(fields.district.is_none());
        assert!(fields.case_number.is_none());
    }

    #[test]
    fn normalize_compact_abbreviation() {
        assert_eq!(normalize_district("EDNY"), "Eastern District of New York");
        assert_eq!(
            normalize_district("S.D.N.Y."),
            "Southern District of New York"
        );
    }

    #[test]
    fn normalize_canonical_passthrough() {
        assert_eq!(
            normalize_district("EASTERN DISTRICT OF NEW YORK"),
            "Eastern District of New York"
        );
        assert_eq!(
            normalize_district("Northern District of California"),
            "Northern District of California"
        );
    }

    #[test]
    fn normalize_inserts_missing_of() {
        assert_eq!(
            normalize_district("EASTERN DISTRICT NEW YORK"),
            "Eastern District of New York"
        );
    }

    #[test]
    fn normalize_district_of_columbia() {
        assert_eq!(normalize_district("DDC"), "District of Columbia");
    }

    #[test]
    fn division_line_extracted() {
        let fields = extract_court_fields("NORTHERN DISTRICT OF ILLINOIS\nEASTERN DIVISION\n");
        assert_eq!(fields.division.as_deref(), Some("EASTERN DIVISION"));
    }

    #[test]
    fn classify_known_document_types() {
        assert_eq!(classify_document_type("COMPLAINT"), Some("complaint"));
        assert_eq!(
            classify_document_type("SUMMONS IN A CIVIL ACTION"),
            Some("summons")
        );
        assert_eq!(
            classify_document_type("NOTICE OF ADVERSE ACTION"),
            Some("adverse_action_notice")
        );
        assert_eq!(classify_document_type("DENIAL LETTER"), Some("denial_letter"));
        assert_eq!(classify_document_type("ATTORNEY NOTES"), Some("attorney_notes"));
        assert_eq!(classify_document_type("GROCERY LIST"), None);
    }
}
