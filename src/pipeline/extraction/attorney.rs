//! Attorney block extraction from signature blocks and letterheads.

use std::sync::LazyLock;

use super::patterns::{FieldRule, RuleSet};
use super::types::AttorneyRecord;

static ATTORNEY_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::compile(&[
        FieldRule {
            field: "name",
            patterns: &[
                // "Sarah K. Mitchell, Esq."
                r"(?m)^\s*/?s?/?\s*((?:[A-Z][A-Za-z'\-]*\.?\s+){1,3}[A-Z][A-Za-z'\-]+),?\s+Esq\.?",
                // Name on the line introduced by "By:"
                r"(?m)^\s*By:\s*/?s?/?\s*((?:[A-Z][A-Za-z'\-]*\.?\s+){1,3}[A-Z][A-Za-z'\-]+)\s*$",
            ],
        },
        FieldRule {
            field: "firm",
            patterns: &[
                r"(?m)^\s*([A-Z][A-Za-z&.,'\- ]+(?:LLP|LLC|P\.?C\.?|P\.?L\.?L\.?C\.?))\s*$",
                r"(?im)^\s*((?:the\s+)?[A-Z][A-Za-z&.,'\- ]*law\s+(?:firm|group|offices?)(?:\s+of\s+[A-Za-z&.,'\- ]+)?)\s*$",
            ],
        },
        FieldRule {
            field: "bar_number",
            patterns: &[
                r"(?i)(?:state\s+)?bar\s+(?:no\.?|number|#)\s*[:.]?\s*([A-Z0-9][A-Z0-9\-]{3,})",
                r"(?i)attorney\s+(?:id|registration)\s*(?:no\.?|#)?\s*[:.]?\s*([A-Z0-9][A-Z0-9\-]{3,})",
            ],
        },
        FieldRule {
            field: "address",
            patterns: &[
                r"(?m)^\s*(\d+\s+[A-Za-z0-9.,'\- ]+(?:Street|St\.?|Avenue|Ave\.?|Boulevard|Blvd\.?|Road|Rd\.?|Drive|Dr\.?|Lane|Ln\.?|Place|Pl\.?|Plaza|Way)(?:,\s*(?:Suite|Ste\.?|Floor|Fl\.?|#)\s*[A-Za-z0-9\-]+)?)\s*$",
            ],
        },
        FieldRule {
            field: "email",
            patterns: &[r"([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})"],
        },
        FieldRule {
            field: "phone",
            patterns: &[r"(\(\d{3}\)\s*\d{3}[-. ]\d{4}|\d{3}[-.]\d{3}[-.]\d{4})"],
        },
    ])
});

/// Extract one attorney record from a document. Returns `None` when no
/// field matched at all.
pub fn extract_attorney(text: &str) -> Option<AttorneyRecord> {
    let map = ATTORNEY_RULES.extract(text);
    let record = AttorneyRecord {
        name: map.get("name").cloned(),
        firm: map.get("firm").cloned(),
        bar_number: map.get("bar_number").cloned(),
        address: map.get("address").cloned(),
        email: map.get("email").cloned(),
        phone: map.get("phone").cloned(),
    };
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNATURE_BLOCK: &str = "\
Respectfully submitted,

/s/ Sarah K. Mitchell
Sarah K. Mitchell, Esq.
Mitchell Consumer Law Group, LLC
Bar No. 4821067
142 Court Street, Suite 900
Brooklyn, NY 11201
(718) 555-0142
smitchell@mitchellconsumerlaw.com
Attorney for Plaintiff
";

    #[test]
    fn full_signature_block() {
        let record = extract_attorney(SIGNATURE_BLOCK).unwrap();
        assert_eq!(record.name.as_deref(), Some("Sarah K. Mitchell"));
        assert_eq!(
            record.firm.as_deref(),
            Some("Mitchell Consumer Law Group, LLC")
        );
        assert_eq!(record.bar_number.as_deref(), Some("4821067"));
        assert_eq!(
            record.address.as_deref(),
            Some("142 Court Street, Suite 900")
        );
        assert_eq!(record.phone.as_deref(), Some("(718) 555-0142"));
        assert_eq!(
            record.email.as_deref(),
            Some("smitchell@mitchellconsumerlaw.com")
        );
    }

    #[test]
    fn partial_block_keeps_matched_fields() {
        let record = extract_attorney("Contact: jdoe@lawfirm.com or 212-555-0188").unwrap();
        assert_eq!(record.email.as_deref(), Some("jdoe@lawfirm.com"));
        assert_eq!(record.phone.as_deref(), Some("212-555-0188"));
        assert!(record.name.is_none());
        assert!(record.bar_number.is_none());
    }

    #[test]
    fn no_attorney_content_yields_none() {
        assert!(extract_attorney("The quick brown fox.").is_none());
        assert!(extract_attorney("").is_none());
    }

    #[test]
    fn bar_number_label_variants() {
        let record = extract_attorney("State Bar Number: CA-304912").unwrap();
        assert_eq!(record.bar_number.as_deref(), Some("CA-304912"));
        let record = extract_attorney("Attorney ID No. 99120").unwrap();
        assert_eq!(record.bar_number.as_deref(), Some("99120"));
    }
}
