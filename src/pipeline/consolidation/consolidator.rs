//! Case consolidator: folds per-document fact bags into one canonical record.
//!
//! Accumulate-then-finalize: `process_document` only appends to the
//! accumulator; `finalize` is a read-only transformation into the immutable
//! output. The split makes "zero documents" a checkable precondition instead
//! of a runtime guess, and keeps every merge decision in one pass.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, SecondsFormat, Utc};

use super::similarity::names_similar;
use super::timeline::build_timeline;
use super::types::{
    CaseSummary, ConsolidatedCase, ConsolidationIssue, IssueKind, ProcessingMetadata,
    FORMAT_VERSION,
};
use super::ConsolidationError;
use crate::models::{CaseInformation, Party, PartyMention, PartyRole};
use crate::pipeline::extraction::{DateFact, DocumentFacts};
use crate::pipeline::quality::readiness::{assess_readiness, ReadinessInput};

// Confidence weights. Checklist fraction dominates so the score grows
// monotonically as required fields are satisfied.
const WEIGHT_CASE_INFO: f32 = 30.0;
const WEIGHT_PER_SIDE: f32 = 15.0;
const WEIGHT_CHECKLIST: f32 = 40.0;

/// Mutable accumulator for one case. Exclusively owned by the caller for
/// the duration of one consolidation run; nothing persists beyond it.
#[derive(Debug, Default)]
pub struct CaseConsolidator {
    sources: Vec<String>,
    /// Case-information observations in encounter order.
    observations: Vec<(String, CaseInformation)>,
    /// All party mentions seen so far, not yet deduplicated.
    mentions: Vec<PartyMention>,
    dates: Vec<(String, DateFact)>,
    statutes: BTreeSet<String>,
}

impl CaseConsolidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's fact bag into the accumulator.
    ///
    /// Callable any number of times in any order. Encounter order only
    /// matters for conflict retention, which deliberately favors the
    /// earliest-processed document.
    pub fn process_document(&mut self, document_id: &str, facts: &DocumentFacts) {
        self.sources.push(document_id.to_string());
        self.observations
            .push((document_id.to_string(), facts.case_information.clone()));
        for party in &facts.parties {
            self.mentions.push(PartyMention {
                name: party.name.clone(),
                role: party.role,
                confidence: party.confidence,
                source: document_id.to_string(),
            });
        }
        for date in &facts.dates {
            self.dates.push((document_id.to_string(), date.clone()));
        }
        self.statutes.extend(facts.entities.statutes.iter().cloned());
        tracing::debug!(
            document_id,
            total_documents = self.sources.len(),
            "Processed document into case accumulator"
        );
    }

    /// Number of documents folded so far.
    pub fn document_count(&self) -> usize {
        self.sources.len()
    }

    /// Produce the immutable consolidated record.
    pub fn finalize(&self) -> Result<ConsolidatedCase, ConsolidationError> {
        self.finalize_at(Utc::now())
    }

    /// `finalize` with an explicit clock, for deterministic callers.
    pub fn finalize_at(&self, now: DateTime<Utc>) -> Result<ConsolidatedCase, ConsolidationError> {
        if self.sources.is_empty() {
            return Err(ConsolidationError::NoDocuments);
        }

        let mut issues = Vec::new();

        let case_information = self.merge_case_information(&mut issues);
        let (plaintiffs, defendants) = self.merge_parties();
        let (timeline, mut timeline_issues) = build_timeline(&self.dates, now.date_naive());
        timeline_issues.sort_by(|a, b| a.message.cmp(&b.message));

        self.check_completeness(&case_information, &plaintiffs, &defendants, &mut issues);
        issues.extend(timeline_issues);

        let readiness = assess_readiness(&ReadinessInput {
            case_information: &case_information,
            plaintiffs: &plaintiffs,
            defendants: &defendants,
            has_statutory_citation: !self.statutes.is_empty(),
        });
        let extraction_confidence = WEIGHT_CASE_INFO * f32::from(case_information.is_complete() as u8)
            + WEIGHT_PER_SIDE * f32::from(!plaintiffs.is_empty() as u8)
            + WEIGHT_PER_SIDE * f32::from(!defendants.is_empty() as u8)
            + WEIGHT_CHECKLIST * readiness.score / 100.0;

        tracing::info!(
            documents = self.sources.len(),
            plaintiffs = plaintiffs.len(),
            defendants = defendants.len(),
            issues = issues.len(),
            confidence = extraction_confidence,
            "Consolidated case"
        );

        Ok(ConsolidatedCase {
            case_summary: CaseSummary {
                case_number: case_information.case_number.clone(),
                jurisdiction: case_information
                    .court_district
                    .clone()
                    .or_else(|| case_information.court_name.clone()),
                confidence: extraction_confidence,
            },
            case_information,
            plaintiffs,
            defendants,
            timeline,
            issues,
            extraction_confidence,
            processing_metadata: ProcessingMetadata {
                run_id: uuid::Uuid::new_v4(),
                source_documents: self.sources.clone(),
                processing_timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
                total_documents_processed: self.sources.len(),
                format_version: FORMAT_VERSION.to_string(),
            },
        })
    }

    /// Merge single-valued case fields across observations.
    ///
    /// One distinct non-null value wins outright. Disagreement produces a
    /// `conflict` issue naming every value and source, and the value from
    /// the earliest-processed document is retained: best effort, flagged,
    /// never a failure.
    fn merge_case_information(&self, issues: &mut Vec<ConsolidationIssue>) -> CaseInformation {
        let fields: [(&str, fn(&CaseInformation) -> Option<&String>); 5] = [
            ("case_number", |c| c.case_number.as_ref()),
            ("court_name", |c| c.court_name.as_ref()),
            ("court_district", |c| c.court_district.as_ref()),
            ("document_title", |c| c.document_title.as_ref()),
            ("document_type", |c| c.document_type.as_ref()),
        ];

        let mut merged: BTreeMap<&str, Option<String>> = BTreeMap::new();
        for (field, accessor) in fields {
            let observed: Vec<(&String, &String)> = self
                .observations
                .iter()
                .filter_map(|(source, info)| accessor(info).map(|value| (source, value)))
                .collect();

            let mut distinct: Vec<&String> = Vec::new();
            for (_, value) in &observed {
                if !distinct.contains(value) {
                    distinct.push(value);
                }
            }

            // document_title/type legitimately vary per document (a complaint
            // and a summons in the same case); disagreement there is not a
            // conflict, the earliest simply stands.
            let conflictable = matches!(field, "case_number" | "court_name" | "court_district");
            if distinct.len() > 1 && conflictable {
                let mut sources: Vec<String> = Vec::new();
                for (source, _) in &observed {
                    if !sources.contains(*source) {
                        sources.push((*source).clone());
                    }
                }
                issues.push(ConsolidationIssue {
                    kind: IssueKind::Conflict,
                    message: format!(
                        "Conflicting values for {field}: {}",
                        distinct
                            .iter()
                            .map(|v| format!("\"{v}\""))
                            .collect::<Vec<_>>()
                            .join(" vs ")
                    ),
                    sources,
                });
            }
            merged.insert(field, observed.first().map(|(_, v)| (*v).clone()));
        }

        CaseInformation {
            case_number: merged.remove("case_number").flatten(),
            court_name: merged.remove("court_name").flatten(),
            court_district: merged.remove("court_district").flatten(),
            document_title: merged.remove("document_title").flatten(),
            document_type: merged.remove("document_type").flatten(),
        }
    }

    /// Deduplicate party mentions by role using a union-find clustering
    /// pass over `names_similar`. A single explicit pass avoids the
    /// order-dependent bugs of merging during iteration.
    fn merge_parties(&self) -> (Vec<Party>, Vec<Party>) {
        let n = self.mentions.len();
        let mut parent: Vec<usize> = (0..n).collect();

        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if self.mentions[i].role == self.mentions[j].role
                    && names_similar(&self.mentions[i].name, &self.mentions[j].name)
                {
                    let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                    if ri != rj {
                        parent[rj] = ri;
                    }
                }
            }
        }

        let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for i in 0..n {
            let root = find(&mut parent, i);
            clusters.entry(root).or_default().push(i);
        }

        let mut plaintiffs = Vec::new();
        let mut defendants = Vec::new();
        for indices in clusters.values() {
            let members: Vec<&PartyMention> =
                indices.iter().map(|&i| &self.mentions[i]).collect();
            // Longest observed name is canonical; ties break
            // lexicographically so the choice is order-independent.
            let canonical = members
                .iter()
                .map(|m| m.name.as_str())
                .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
                .unwrap_or_default();
            let confidence = members
                .iter()
                .map(|m| m.confidence)
                .fold(0.0_f32, f32::max);
            let mut sources: Vec<String> =
                members.iter().map(|m| m.source.clone()).collect();
            sources.sort();
            sources.dedup();

            let party = Party {
                name: canonical.to_string(),
                role: members[0].role,
                confidence,
                sources,
            };
            match party.role {
                PartyRole::Plaintiff => plaintiffs.push(party),
                PartyRole::Defendant => defendants.push(party),
            }
        }
        plaintiffs.sort_by(|a, b| a.name.cmp(&b.name));
        defendants.sort_by(|a, b| a.name.cmp(&b.name));
        (plaintiffs, defendants)
    }

    fn check_completeness(
        &self,
        info: &CaseInformation,
        plaintiffs: &[Party],
        defendants: &[Party],
        issues: &mut Vec<ConsolidationIssue>,
    ) {
        let mut all_sources = self.sources.clone();
        all_sources.dedup();
        let mut gap = |message: String| {
            issues.push(ConsolidationIssue {
                kind: IssueKind::Completeness,
                message,
                sources: all_sources.clone(),
            });
        };
        let n = self.sources.len();
        if info.case_number.is_none() {
            gap(format!("No case number identified across {n} document(s)"));
        }
        if info.court_district.is_none() {
            gap(format!("No court district identified across {n} document(s)"));
        }
        if plaintiffs.is_empty() {
            gap("No plaintiff identified".to_string());
        }
        if defendants.is_empty() {
            gap("No defendant identified".to_string());
        }
    }
}
