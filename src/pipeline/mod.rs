//! The document pipeline: per-document extraction, cross-document
//! consolidation, and quality assessment.

pub mod consolidation;
pub mod extraction;
pub mod quality;
