pub mod consolidator;
pub mod similarity;
pub mod timeline;
pub mod types;

pub use consolidator::*;
pub use similarity::names_similar;
pub use types::*;

use thiserror::Error;

/// The one failure the consolidator refuses to recover from.
///
/// Everything else (conflicts, gaps, timeline anomalies) is recovered
/// locally and surfaced as advisory issues on a best-effort record.
#[derive(Error, Debug)]
pub enum ConsolidationError {
    #[error("No documents processed; nothing to consolidate")]
    NoDocuments,
}
