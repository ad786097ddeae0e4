//! Timeline construction from accumulated date facts.

use chrono::NaiveDate;

use super::types::{ConsolidationIssue, IssueKind, TimelineEntry};
use crate::pipeline::extraction::DateFact;

/// Build the chronological timeline from all accumulated date facts.
///
/// Entries are sorted by date with a stable tie-break on source and event
/// text, so the result is identical regardless of processing order.
/// Dates strictly after `today` are flagged as `timeline_error` but kept:
/// a wrong date is still evidence worth reviewing.
pub fn build_timeline(
    facts: &[(String, DateFact)],
    today: NaiveDate,
) -> (Vec<TimelineEntry>, Vec<ConsolidationIssue>) {
    let mut entries: Vec<TimelineEntry> = Vec::new();
    let mut issues = Vec::new();

    for (source, fact) in facts {
        let entry = TimelineEntry {
            date: fact.date,
            event: format!("{} ({})", fact.context.label(), fact.raw_text),
            source: source.clone(),
        };
        // Identical fact reported twice from the same document.
        if entries.contains(&entry) {
            continue;
        }
        if fact.date > today {
            issues.push(ConsolidationIssue {
                kind: IssueKind::TimelineError,
                message: format!(
                    "Future-dated event: {} on {} (line {})",
                    fact.context.label(),
                    fact.date,
                    fact.source_line
                ),
                sources: vec![source.clone()],
            });
        }
        entries.push(entry);
    }

    entries.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.event.cmp(&b.event))
    });
    (entries, issues)
}
