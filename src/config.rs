//! External tuning knobs for the pipeline.
//!
//! The quality bounds are empirical, tuned against specific upstream
//! parsing engines. They live here as configuration rather than constants
//! so deployments can recalibrate without a code change.

use serde::{Deserialize, Serialize};

/// Bounds used by the per-document quality validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Expected window for extracted-bytes ÷ source-file-bytes. Outside it
    /// the document is penalized, never rejected.
    pub compression_ratio_min: f64,
    pub compression_ratio_max: f64,
    /// Below this many characters extraction has almost certainly failed.
    pub short_text_threshold: usize,
    /// At or above this many characters the document earns full length credit.
    pub adequate_text_threshold: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            compression_ratio_min: 0.001,
            compression_ratio_max: 0.1,
            short_text_threshold: 200,
            adequate_text_threshold: 1000,
        }
    }
}

/// Configuration for the case runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Per-document extraction is pure and independent, so it fans out on a
    /// worker pool; consolidation itself stays sequential.
    pub max_concurrent_documents: usize,
    pub quality: QualityConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: 4,
            quality: QualityConfig::default(),
        }
    }
}

/// Default `RUST_LOG`-style filter when the environment sets none.
pub fn default_log_filter() -> &'static str {
    "info,lexfold=debug"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_compression_window_is_ordered() {
        let config = QualityConfig::default();
        assert!(config.compression_ratio_min < config.compression_ratio_max);
        assert!(config.short_text_threshold < config.adequate_text_threshold);
    }

    #[test]
    fn quality_config_round_trips_through_json() {
        let config = QualityConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: QualityConfig = serde_json::from_str(&json).unwrap();
        assert!((back.compression_ratio_min - config.compression_ratio_min).abs() < f64::EPSILON);
    }

    #[test]
    fn runner_defaults_are_sane() {
        let config = RunnerConfig::default();
        assert!(config.max_concurrent_documents >= 1);
    }
}
