//! Date extraction with line-level provenance and context classification.
//!
//! Scans line by line so each fact can point back at the exact source line.
//! The surrounding line's keywords classify what the date refers to
//! (denial, dispute, filing, ...). Calendar-invalid matches are skipped
//! silently as noise, not an error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::types::{DateFact, EventContext};

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

struct DatePattern {
    regex: Regex,
    confidence: f32,
    order: DayMonthOrder,
}

enum DayMonthOrder {
    /// ISO: (year, month, day)
    Ymd,
    /// "March 15, 2025": (month-name, day, year)
    MonthFirst,
    /// "15 March 2025": (day, month-name, year)
    DayFirst,
    /// US slash: (month, day, year)
    Mdy,
}

// Unambiguous formats score higher. Listed most-confident first so the
// per-line dedup keeps the strongest reading.
static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern {
            regex: Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap(),
            confidence: 0.95,
            order: DayMonthOrder::Ymd,
        },
        DatePattern {
            regex: Regex::new(&format!(r"(?i)\b({MONTHS})\s+(\d{{1,2}}),?\s+(\d{{4}})\b")).unwrap(),
            confidence: 0.9,
            order: DayMonthOrder::MonthFirst,
        },
        DatePattern {
            regex: Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s+({MONTHS}),?\s+(\d{{4}})\b")).unwrap(),
            confidence: 0.9,
            order: DayMonthOrder::DayFirst,
        },
        DatePattern {
            // Assumed US order: source documents are US filings.
            regex: Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap(),
            confidence: 0.85,
            order: DayMonthOrder::Mdy,
        },
    ]
});

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(n)
}

fn parse_captures(caps: &regex::Captures<'_>, order: &DayMonthOrder) -> Option<NaiveDate> {
    let field = |i: usize| caps.get(i).map(|m| m.as_str());
    let (year, month, day) = match order {
        DayMonthOrder::Ymd => (
            field(1)?.parse().ok()?,
            field(2)?.parse().ok()?,
            field(3)?.parse().ok()?,
        ),
        DayMonthOrder::MonthFirst => (
            field(3)?.parse().ok()?,
            month_number(field(1)?)?,
            field(2)?.parse().ok()?,
        ),
        DayMonthOrder::DayFirst => (
            field(3)?.parse().ok()?,
            month_number(field(2)?)?,
            field(1)?.parse().ok()?,
        ),
        DayMonthOrder::Mdy => (
            field(3)?.parse().ok()?,
            field(1)?.parse().ok()?,
            field(2)?.parse().ok()?,
        ),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Classify what a date refers to from its line's keywords.
pub fn classify_context(line: &str) -> EventContext {
    let lower = line.to_lowercase();
    if lower.contains("denial") || lower.contains("denied") || lower.contains("adverse action") {
        return EventContext::Denial;
    }
    if lower.contains("disput") {
        return EventContext::Dispute;
    }
    if lower.contains("filed") || lower.contains("filing") || lower.contains("commenced") {
        return EventContext::Filing;
    }
    if lower.contains("respon") || lower.contains("answer") {
        return EventContext::Response;
    }
    if lower.contains("investigat") {
        return EventContext::Investigation;
    }
    if lower.contains("served") || lower.contains("service of") {
        return EventContext::Service;
    }
    if lower.contains("judgment") || lower.contains("order entered") {
        return EventContext::Judgment;
    }
    EventContext::Generic
}

/// Extract all date facts from a document's text.
pub fn extract_dates(text: &str) -> Vec<DateFact> {
    let mut facts: Vec<DateFact> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let context = classify_context(line);
        for pattern in DATE_PATTERNS.iter() {
            for caps in pattern.regex.captures_iter(line) {
                let Some(date) = parse_captures(&caps, &pattern.order) else {
                    continue;
                };
                // Same calendar date on the same line: keep the
                // higher-confidence reading only.
                if facts
                    .iter()
                    .any(|f| f.source_line == line_no && f.date == date)
                {
                    continue;
                }
                facts.push(DateFact {
                    date,
                    raw_text: caps.get(0).unwrap().as_str().to_string(),
                    context,
                    confidence: pattern.confidence,
                    source_line: line_no,
                });
            }
        }
    }
    facts
}
