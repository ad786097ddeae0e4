//! Filing-readiness scoring for a consolidated case.
//!
//! Distinct from the per-document quality score: this checks the merged
//! record against the fixed checklist of fields a complaint needs before
//! document generation, with partial credit per satisfied sub-field.

use serde::Serialize;

use crate::models::{CaseInformation, Party};

// Fixed checklist weights: case info 30, plaintiff 25, defendants 25,
// statutory citation 20.
const CASE_NUMBER_POINTS: f32 = 10.0;
const COURT_NAME_POINTS: f32 = 10.0;
const COURT_DISTRICT_POINTS: f32 = 10.0;
const PLAINTIFF_POINTS: f32 = 25.0;
const DEFENDANT_POINTS: f32 = 25.0;
const STATUTE_POINTS: f32 = 20.0;

/// What the readiness checklist looks at.
pub struct ReadinessInput<'a> {
    pub case_information: &'a CaseInformation,
    pub plaintiffs: &'a [Party],
    pub defendants: &'a [Party],
    pub has_statutory_citation: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    /// 0–100, monotone in the number of satisfied checklist items.
    pub score: f32,
    pub satisfied: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl ReadinessReport {
    /// All fields required for document generation are populated.
    pub fn is_hydrated(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Score the consolidated record against the filing checklist.
pub fn assess_readiness(input: &ReadinessInput<'_>) -> ReadinessReport {
    let info = input.case_information;
    let items: [(&'static str, f32, bool); 6] = [
        ("case_number", CASE_NUMBER_POINTS, info.case_number.is_some()),
        ("court_name", COURT_NAME_POINTS, info.court_name.is_some()),
        (
            "court_district",
            COURT_DISTRICT_POINTS,
            info.court_district.is_some(),
        ),
        ("plaintiff", PLAINTIFF_POINTS, !input.plaintiffs.is_empty()),
        ("defendants", DEFENDANT_POINTS, !input.defendants.is_empty()),
        (
            "statutory_citation",
            STATUTE_POINTS,
            input.has_statutory_citation,
        ),
    ];

    let mut score = 0.0;
    let mut satisfied = Vec::new();
    let mut missing = Vec::new();
    for (name, points, ok) in items {
        if ok {
            score += points;
            satisfied.push(name);
        } else {
            missing.push(name);
        }
    }

    ReadinessReport {
        score,
        satisfied,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyRole;

    fn party(name: &str, role: PartyRole) -> Party {
        Party {
            name: name.into(),
            role,
            confidence: 0.9,
            sources: vec!["complaint.txt".into()],
        }
    }

    fn complete_info() -> CaseInformation {
        CaseInformation {
            case_number: Some("1:25-cv-02156".into()),
            court_name: Some("UNITED STATES DISTRICT COURT".into()),
            court_district: Some("Eastern District of New York".into()),
            ..Default::default()
        }
    }

    #[test]
    fn fully_hydrated_record_scores_100() {
        let plaintiffs = [party("Jane Doe", PartyRole::Plaintiff)];
        let defendants = [party("Equifax", PartyRole::Defendant)];
        let report = assess_readiness(&ReadinessInput {
            case_information: &complete_info(),
            plaintiffs: &plaintiffs,
            defendants: &defendants,
            has_statutory_citation: true,
        });
        assert!((report.score - 100.0).abs() < f32::EPSILON);
        assert!(report.is_hydrated());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn empty_record_scores_zero() {
        let report = assess_readiness(&ReadinessInput {
            case_information: &CaseInformation::default(),
            plaintiffs: &[],
            defendants: &[],
            has_statutory_citation: false,
        });
        assert_eq!(report.score, 0.0);
        assert_eq!(report.missing.len(), 6);
        assert!(!report.is_hydrated());
    }

    #[test]
    fn partial_credit_per_case_info_sub_field() {
        let info = CaseInformation {
            case_number: Some("1:25-cv-02156".into()),
            ..Default::default()
        };
        let report = assess_readiness(&ReadinessInput {
            case_information: &info,
            plaintiffs: &[],
            defendants: &[],
            has_statutory_citation: false,
        });
        assert!((report.score - 10.0).abs() < f32::EPSILON);
        assert_eq!(report.satisfied, vec!["case_number"]);
    }

    #[test]
    fn score_is_monotone_in_satisfied_items() {
        let plaintiffs = [party("Jane Doe", PartyRole::Plaintiff)];
        let defendants = [party("Equifax", PartyRole::Defendant)];

        let mut last = -1.0_f32;
        // Satisfy items cumulatively; the score must never decrease.
        let steps: [ReadinessInput<'_>; 4] = [
            ReadinessInput {
                case_information: &CaseInformation::default(),
                plaintiffs: &[],
                defendants: &[],
                has_statutory_citation: false,
            },
            ReadinessInput {
                case_information: &complete_info(),
                plaintiffs: &[],
                defendants: &[],
                has_statutory_citation: false,
            },
            ReadinessInput {
                case_information: &complete_info(),
                plaintiffs: &plaintiffs,
                defendants: &[],
                has_statutory_citation: false,
            },
            ReadinessInput {
                case_information: &complete_info(),
                plaintiffs: &plaintiffs,
                defendants: &defendants,
                has_statutory_citation: true,
            },
        ];
        for input in &steps {
            let score = assess_readiness(input).score;
            assert!(score > last, "expected monotone growth, {score} <= {last}");
            last = score;
        }
    }

    #[test]
    fn weights_sum_to_100() {
        assert!(
            (CASE_NUMBER_POINTS
                + COURT_NAME_POINTS
                + COURT_DISTRICT_POINTS
                + PLAINTIFF_POINTS
                + DEFENDANT_POINTS
                + STATUTE_POINTS
                - 100.0)
                .abs()
                < f32::EPSILON
        );
    }
}
