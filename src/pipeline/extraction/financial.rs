//! Financial-institution and credit-bureau matching.
//!
//! Unlike the regex extractors, this one matches against fixed lists of
//! known names via case-insensitive substring search: institution names in
//! the wild are too varied for patterns but the universe of relevant
//! furnishers and bureaus is small and known.

/// Canonical names of institutions that commonly appear as furnishers or
/// creditors in consumer credit cases.
const KNOWN_INSTITUTIONS: &[&str] = &[
    "Bank of America",
    "Wells Fargo",
    "JPMorgan Chase",
    "Chase Bank",
    "Citibank",
    "Capital One",
    "American Express",
    "Discover",
    "Synchrony Bank",
    "U.S. Bank",
    "PNC Bank",
    "TD Bank",
    "Truist",
    "Ally Financial",
    "Navy Federal Credit Union",
    "Barclays",
    "Goldman Sachs",
    "Santander",
    "Credit One Bank",
    "Portfolio Recovery Associates",
    "Midland Credit Management",
    "LVNV Funding",
];

/// The consumer reporting agencies.
const CREDIT_BUREAUS: &[&str] = &[
    "Equifax",
    "Experian",
    "TransUnion",
    "Innovis",
    "LexisNexis",
    "ChexSystems",
];

/// Known institutions mentioned in the text, in list order, deduplicated.
pub fn find_institutions(text: &str) -> Vec<String> {
    find_known(text, KNOWN_INSTITUTIONS)
}

/// Known credit bureaus mentioned in the text, in list order, deduplicated.
pub fn find_credit_bureaus(text: &str) -> Vec<String> {
    find_known(text, CREDIT_BUREAUS)
}

fn find_known(text: &str, known: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    known
        .iter()
        .filter(|name| haystack.contains(&name.to_lowercase()))
        .map(|name| (*name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        let text = "EQUIFAX INFORMATION SERVICES LLC and wells fargo bank, N.A.";
        assert_eq!(find_credit_bureaus(text), vec!["Equifax"]);
        assert_eq!(find_institutions(text), vec!["Wells Fargo"]);
    }

    #[test]
    fn canonical_name_returned_not_raw_mention() {
        let text = "the transunion report";
        assert_eq!(find_credit_bureaus(text), vec!["TransUnion"]);
    }

    #[test]
    fn multiple_mentions_deduplicated() {
        let text = "Experian denied. Experian again. Also Experian.";
        assert_eq!(find_credit_bureaus(text), vec!["Experian"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(find_institutions("no banks here").is_empty());
        assert!(find_credit_bureaus("").is_empty());
    }

    #[test]
    fn multiple_bureaus_in_list_order() {
        let text = "disputed with TransUnion, then Equifax";
        assert_eq!(find_credit_bureaus(text), vec!["Equifax", "TransUnion"]);
    }
}
