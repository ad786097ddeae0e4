//! Party extraction from a filing caption.
//!
//! Isolates the caption block between the court header and the case number,
//! splits it on the "v." / "vs." separator, and cleans residual role labels
//! from each side. Documents without a caption (denial letters, notes) fall
//! back to explicit "Plaintiff:" / "Defendant:" labels.

use std::sync::LazyLock;

use regex::Regex;

use super::types::ExtractedParty;
use crate::models::PartyRole;

/// Court header lines that precede the caption block.
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(?:UNITED STATES (?:DISTRICT|BANKRUPTCY) COURT|(?:FOR THE )?(?:NORTHERN|SOUTHERN|EASTERN|WESTERN|CENTRAL|MIDDLE)?\s*DISTRICT OF [A-Z ]+|[A-Z ]+ DIVISION)\s*$",
    )
    .unwrap()
});

/// Lines that terminate the caption block.
static CAPTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(?:(?:case|civil action|index|docket)\s+(?:no\.?|number)|\d:\d{2}-(?:cv|cr|mc|md)-|COMPLAINT\b|SUMMONS\b)",
    )
    .unwrap()
});

/// The "v." separator, either on its own caption line or inline.
static VERSUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*-?\s*vs?\.?\s*-?\s*$").unwrap());
static VERSUS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+vs?\.\s+").unwrap());

/// Role labels and boilerplate descriptors to strip from party lines.
static ROLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:plaintiffs?|defendants?)\s*[.,]?\s*$").unwrap()
});
static DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),?\s*(?:an individual|a(?:n)? [a-z][a-z ]* corporation|a limited liability company|individually and on behalf of all others similarly situated|et al\.?)\s*[.,]?\s*$",
    )
    .unwrap()
});

static PLAINTIFF_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*plaintiffs?\s*[:]\s*(.+)$").unwrap());
static DEFENDANT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*defendants?\s*[:]\s*(.+)$").unwrap());

// Confidence by extraction path: caption structure is a stronger signal
// than a bare label line.
const CAPTION_CONFIDENCE: f32 = 0.9;
const LABEL_CONFIDENCE: f32 = 0.7;

/// Extract all party mentions from one document's text.
/// Absence of parties yields an empty list, never an error.
pub fn extract_parties(text: &str) -> Vec<ExtractedParty> {
    if let Some(parties) = extract_from_caption(text) {
        return parties;
    }
    extract_from_labels(text)
}

fn extract_from_caption(text: &str) -> Option<Vec<ExtractedParty>> {
    let start = HEADER_LINE.find_iter(text).last().map(|m| m.end())?;
    let rest = &text[start..];
    let end = CAPTION_END.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    let block = &rest[..end];

    let (left, right) = split_versus(block)?;

    let plaintiffs = clean_party_block(left);
    let defendants = clean_party_block(right);
    if plaintiffs.is_empty() && defendants.is_empty() {
        return None;
    }

    let mut out = Vec::new();
    out.extend(plaintiffs.into_iter().map(|name| ExtractedParty {
        name,
        role: PartyRole::Plaintiff,
        confidence: CAPTION_CONFIDENCE,
    }));
    out.extend(defendants.into_iter().map(|name| ExtractedParty {
        name,
        role: PartyRole::Defendant,
        confidence: CAPTION_CONFIDENCE,
    }));
    Some(out)
}

fn split_versus(block: &str) -> Option<(&str, &str)> {
    if let Some(m) = VERSUS_LINE.find(block) {
        return Some((&block[..m.start()], &block[m.end()..]));
    }
    if let Some(m) = VERSUS_INLINE.find(block) {
        return Some((&block[..m.start()], &block[m.end()..]));
    }
    None
}

/// Clean one side of the caption into a list of party names.
fn clean_party_block(block: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || ROLE_LABEL.is_match(line) {
            continue;
        }
        // Caption decoration: ")(", dashes, underscores.
        if line.chars().all(|c| !c.is_alphanumeric()) {
            continue;
        }
        for piece in line.split(';') {
            let mut name = piece.trim().trim_start_matches("and ").trim().to_string();
            name = DESCRIPTOR.replace(&name, "").to_string();
            // Keep trailing periods: "N.A." and "CO." are part of the name.
            let name = name.trim().trim_end_matches([',', ';']).trim();
            if name.len() >= 3 && name.chars().any(|c| c.is_alphabetic()) {
                names.push(name.to_string());
            }
        }
    }
    dedup_preserving_order(names)
}

fn extract_from_labels(text: &str) -> Vec<ExtractedParty> {
    let collect = |pattern: &Regex| -> Vec<String> {
        let names = pattern
            .captures_iter(text)
            .flat_map(|caps| split_label_list(caps.get(1).unwrap().as_str()))
            .collect();
        dedup_preserving_order(names)
    };

    let mut out = Vec::new();
    out.extend(collect(&PLAINTIFF_LABEL).into_iter().map(|name| ExtractedParty {
        name,
        role: PartyRole::Plaintiff,
        confidence: LABEL_CONFIDENCE,
    }));
    out.extend(collect(&DEFENDANT_LABEL).into_iter().map(|name| ExtractedParty {
        name,
        role: PartyRole::Defendant,
        confidence: LABEL_CONFIDENCE,
    }));
    out
}

/// Split a labelled list like "Equifax; Experian and TransUnion".
fn split_label_list(value: &str) -> Vec<String> {
    static AND_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());
    let mut names = Vec::new();
    for piece in value.split(';') {
        for name in AND_SPLIT.split(piece) {
            let name = name.trim().trim_end_matches([',', ';']).trim();
            if name.len() >= 3 && name.chars().any(|c| c.is_alphabetic()) {
                names.push(name.to_string());
            }
        }
    }
    dedup_preserving_order(names)
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(n.to_lowercase()))
        .collect()
}
