//! Per-document extraction quality scoring.
//!
//! Scores one document's extracted text for plausibility, independent of
//! consolidation: length banding, compression-ratio banding against the
//! source file size, and presence counts across legal-pattern categories.
//! Purely advisory: warnings annotate the pipeline, they never block it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::QualityConfig;

// Score bands: length 30, compression 20, legal markers 50.
const LENGTH_POINTS: f32 = 30.0;
const COMPRESSION_POINTS: f32 = 20.0;
const MARKER_POINTS: f32 = 50.0;

/// Warning rank, most severe first so reports sort naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityWarning {
    pub severity: Severity,
    pub message: String,
}

/// Quality assessment for one document.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub document_id: String,
    /// 0–100.
    pub score: f32,
    /// Match counts per legal-pattern category.
    pub category_hits: BTreeMap<&'static str, usize>,
    /// Ranked most severe first.
    pub warnings: Vec<QualityWarning>,
}

static LEGAL_CATEGORIES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "court_references",
            Regex::new(r"(?i)\b(?:district|superior|circuit|supreme|bankruptcy|municipal|county)\s+court\b").unwrap(),
        ),
        (
            "case_numbers",
            Regex::new(r"(?i)\d:\d{2}-(?:cv|cr|mc|md)-\d{4,6}|(?:case|index|docket)\s+(?:no\.?|number)").unwrap(),
        ),
        (
            "legal_entity_suffixes",
            Regex::new(r"\b(?:LLC|LLP|Inc\.?|INC\.?|Corp\.?|CORP\.?|N\.A\.|Ltd\.?)\b").unwrap(),
        ),
        (
            "addresses",
            Regex::new(r"(?i)\b\d+\s+[A-Za-z.,'\- ]+(?:street|st\.|avenue|ave\.|boulevard|blvd\.|road|rd\.|drive|dr\.|lane|ln\.|place|pl\.)").unwrap(),
        ),
        (
            "phones",
            Regex::new(r"\(\d{3}\)\s*\d{3}[-. ]\d{4}|\b\d{3}[-.]\d{3}[-.]\d{4}\b").unwrap(),
        ),
        (
            "emails",
            Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap(),
        ),
        (
            "dates",
            Regex::new(r"(?i)\b\d{1,2}/\d{1,2}/\d{4}\b|\b\d{4}-\d{2}-\d{2}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b").unwrap(),
        ),
    ]
});

/// Assess one document's extracted text.
///
/// `source_file_bytes` is the on-disk size of the original document when
/// known; `None` skips the compression band with partial credit.
pub fn assess_document(
    document_id: &str,
    text: &str,
    source_file_bytes: Option<u64>,
    config: &QualityConfig,
) -> QualityReport {
    let mut warnings = Vec::new();

    // Length band
    let length_score = if text.len() < config.short_text_threshold {
        warnings.push(QualityWarning {
            severity: Severity::Critical,
            message: format!(
                "Extracted text is only {} characters; extraction likely failed",
                text.len()
            ),
        });
        LENGTH_POINTS * 0.15
    } else if text.len() < config.adequate_text_threshold {
        warnings.push(QualityWarning {
            severity: Severity::Warning,
            message: format!(
                "Extracted text is short ({} characters); document may be truncated",
                text.len()
            ),
        });
        LENGTH_POINTS * 0.6
    } else {
        LENGTH_POINTS
    };

    // Compression band
    let compression_score = match source_file_bytes {
        Some(bytes) if bytes > 0 => {
            let ratio = text.len() as f64 / bytes as f64;
            if ratio < config.compression_ratio_min || ratio > config.compression_ratio_max {
                warnings.push(QualityWarning {
                    severity: Severity::Warning,
                    message: format!(
                        "Compression ratio {ratio:.4} outside expected window [{}, {}]",
                        config.compression_ratio_min, config.compression_ratio_max
                    ),
                });
                COMPRESSION_POINTS * 0.4
            } else {
                COMPRESSION_POINTS
            }
        }
        _ => {
            warnings.push(QualityWarning {
                severity: Severity::Info,
                message: "Source file size unknown; compression ratio not checked".into(),
            });
            COMPRESSION_POINTS * 0.6
        }
    };

    // Legal-marker presence
    let mut category_hits = BTreeMap::new();
    for (category, pattern) in LEGAL_CATEGORIES.iter() {
        category_hits.insert(*category, pattern.find_iter(text).count());
    }
    let present = category_hits.values().filter(|&&n| n > 0).count();
    let marker_score = MARKER_POINTS * present as f32 / LEGAL_CATEGORIES.len() as f32;
    if present == 0 {
        warnings.push(QualityWarning {
            severity: Severity::Critical,
            message: "No legal content markers found in extracted text".into(),
        });
    } else if present < 3 {
        warnings.push(QualityWarning {
            severity: Severity::Info,
            message: format!("Only {present} of {} legal marker categories present", LEGAL_CATEGORIES.len()),
        });
    }

    let score = (length_score + compression_score + marker_score).clamp(0.0, 100.0);
    warnings.sort_by_key(|w| w.severity);

    tracing::debug!(document_id, score, present, "Assessed document quality");

    QualityReport {
        document_id: document_id.to_string(),
        score,
        category_hits,
        warnings,
    }
}
