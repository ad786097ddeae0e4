use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One source document belonging to a case, after the document engine
/// turned its raw bytes into plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Stable id used for provenance (file name by convention).
    pub id: String,
    pub path: PathBuf,
    pub text: String,
    /// Confidence reported by the document engine for the text itself.
    pub confidence: f32,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, confidence: f32) -> Self {
        let path = path.into();
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            id,
            path,
            text: text.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_defaults_to_file_name() {
        let doc = SourceDocument::new("/cases/smith/complaint.txt", "text", 0.9);
        assert_eq!(doc.id, "complaint.txt");
    }
}
