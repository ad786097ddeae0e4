//! Text acquisition engines.
//!
//! An engine turns a file on disk into extraction-ready text with a
//! per-engine confidence. The trait seam exists so OCR or PDF backends can
//! slot in later; the built-in engine handles the plain-text corpus.

use std::path::Path;

/// Result of running an engine over one file. Failures are data, not
/// errors: the runner records them and keeps going.
#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub success: bool,
    pub text: String,
    /// How much the extracted text can be trusted, 0.0 to 1.0.
    pub confidence: f32,
    pub error: Option<String>,
}

impl EngineOutcome {
    pub fn ok(text: String, confidence: f32) -> Self {
        Self {
            success: true,
            text,
            confidence,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            confidence: 0.0,
            error: Some(message.into()),
        }
    }
}

/// A text-acquisition backend. Implementations must be cheap to share
/// across worker tasks.
pub trait DocumentEngine: Send + Sync {
    fn process(&self, file: &Path) -> EngineOutcome;
}

/// Reads UTF-8 text files directly. Direct reads are near-lossless, so
/// confidence is fixed just below 1.0.
pub struct PlainTextEngine;

const PLAIN_TEXT_CONFIDENCE: f32 = 0.99;

impl DocumentEngine for PlainTextEngine {
    fn process(&self, file: &Path) -> EngineOutcome {
        match std::fs::read(file) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                tracing::debug!(path = %file.display(), bytes = bytes.len(), "Read document");
                EngineOutcome::ok(text, PLAIN_TEXT_CONFIDENCE)
            }
            Err(e) => {
                tracing::warn!(path = %file.display(), error = %e, "Failed to read document");
                EngineOutcome::failed(format!("Failed to read {}: {e}", file.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn plain_text_engine_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "IN THE UNITED STATES DISTRICT COURT").unwrap();
        let outcome = PlainTextEngine.process(file.path());
        assert!(outcome.success);
        assert!(outcome.text.contains("DISTRICT COURT"));
        assert!(outcome.confidence > 0.9);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn missing_file_reports_failure_not_panic() {
        let outcome = PlainTextEngine.process(Path::new("/nonexistent/complaint.txt"));
        assert!(!outcome.success);
        assert_eq!(outcome.confidence, 0.0);
        assert!(outcome.error.as_deref().unwrap_or("").contains("complaint.txt"));
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Case No. 1:25-cv-02156 \xFF\xFE end").unwrap();
        let outcome = PlainTextEngine.process(file.path());
        assert!(outcome.success);
        assert!(outcome.text.contains("1:25-cv-02156"));
    }
}
