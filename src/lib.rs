//! lexfold consolidates a folder of legal case documents into one
//! canonical case record.
//!
//! Each document (complaint, summons, denial letter, attorney notes) is
//! read by a [`engine::DocumentEngine`], mined for structured facts by the
//! extraction pipeline, quality-scored, and folded into a
//! [`pipeline::consolidation::CaseConsolidator`] that deduplicates
//! parties, flags conflicts, and builds the case timeline.

pub mod config;
pub mod engine;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod runner;

pub use engine::{DocumentEngine, PlainTextEngine};
pub use pipeline::consolidation::{CaseConsolidator, ConsolidatedCase};
pub use runner::{CaseOutput, CaseRunner, PipelineError};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// built-in default filter. Safe to call once per process; later calls
/// are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
