//! Data-driven extraction rules: ordered (field, patterns) tables plus one
//! generic first-match-wins executor.
//!
//! Each extractor declares a static rule table; per field the candidate
//! patterns are tried in order and the first match wins. Absence of a match
//! is not an error; the field is simply missing from the result.

use std::collections::BTreeMap;

use regex::Regex;

/// One field with its candidate patterns, ordered most-specific first.
pub struct FieldRule {
    pub field: &'static str,
    pub patterns: &'static [&'static str],
}

/// A compiled rule table. Built once per extractor behind a `LazyLock`.
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    field: &'static str,
    patterns: Vec<Regex>,
}

impl RuleSet {
    /// Compile a static rule table. Patterns are author-controlled constants,
    /// so a malformed one is a programming error.
    pub fn compile(rules: &[FieldRule]) -> Self {
        let rules = rules
            .iter()
            .map(|r| CompiledRule {
                field: r.field,
                patterns: r
                    .patterns
                    .iter()
                    .map(|p| Regex::new(p).unwrap())
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    /// First match for one field, in pattern order. Capture group 1 if the
    /// pattern defines one, otherwise the whole match. Trimmed; empty
    /// results count as no match.
    pub fn first_match(&self, field: &str, text: &str) -> Option<String> {
        let rule = self.rules.iter().find(|r| r.field == field)?;
        for pattern in &rule.patterns {
            if let Some(caps) = pattern.captures(text) {
                let value = caps
                    .get(1)
                    .unwrap_or_else(|| caps.get(0).unwrap())
                    .as_str()
                    .trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
        None
    }

    /// Run every rule against the text. Fields without a match are absent
    /// from the map, never mapped to an empty string.
    pub fn extract(&self, text: &str) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        for rule in &self.rules {
            if let Some(value) = self.first_match(rule.field, text) {
                out.insert(rule.field, value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset() -> RuleSet {
        RuleSet::compile(&[
            FieldRule {
                field: "case_number",
                patterns: &[
                    r"(?i)\b(\d:\d{2}-cv-\d{5})\b",
                    r"(?i)case\s+no\.?\s*([A-Z0-9:\-]+)",
                ],
            },
            FieldRule {
                field: "division",
                patterns: &[r"(?im)^\s*([A-Z]+\s+DIVISION)\s*$"],
            },
        ])
    }

    #[test]
    fn first_pattern_wins_over_later_ones() {
        let rules = ruleset();
        // Both patterns could match; the structural one is listed first.
        let text = "Case No. 1:25-cv-02156";
        assert_eq!(
            rules.first_match("case_number", text),
            Some("1:25-cv-02156".into())
        );
    }

    #[test]
    fn falls_through_to_looser_pattern() {
        let rules = ruleset();
        let text = "Case No. CV-2025-4471";
        assert_eq!(
            rules.first_match("case_number", text),
            Some("CV-2025-4471".into())
        );
    }

    #[test]
    fn absence_yields_none_not_error() {
        let rules = ruleset();
        assert_eq!(rules.first_match("case_number", "no numbers here"), None);
        assert_eq!(rules.first_match("unknown_field", "anything"), None);
    }

    #[test]
    fn extract_omits_unmatched_fields() {
        let rules = ruleset();
        let map = rules.extract("Case No. 1:25-cv-02156\nBROOKLYN DIVISION\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map["division"], "BROOKLYN DIVISION");

        let map = rules.extract("");
        assert!(map.is_empty());
    }
}
