//! Case runner: drives a set of document files through extraction and
//! consolidation.
//!
//! Per-document work (engine read, fact extraction, quality scoring) is
//! independent, so it fans out on a bounded worker pool. Consolidation
//! folds the results sequentially in the original file order, which keeps
//! conflict retention deterministic for a given input list.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::RunnerConfig;
use crate::engine::DocumentEngine;
use crate::models::SourceDocument;
use crate::notify::{PipelineEvent, PipelineNotifier};
use crate::pipeline::consolidation::{CaseConsolidator, ConsolidatedCase, ConsolidationError};
use crate::pipeline::extraction::{extract_document_facts, DocumentFacts};
use crate::pipeline::quality::{assess_document, QualityReport};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Consolidation(#[from] ConsolidationError),
    #[error("document worker panicked: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// A document the engine could not turn into text. Recorded, not fatal:
/// the case consolidates from whatever survived.
#[derive(Debug, Clone, Serialize)]
pub struct FailedDocument {
    pub id: String,
    pub error: String,
}

/// Everything one case run produces.
#[derive(Debug, Serialize)]
pub struct CaseOutput {
    pub case: ConsolidatedCase,
    pub quality_reports: Vec<QualityReport>,
    pub failed_documents: Vec<FailedDocument>,
}

enum DocumentResult {
    Extracted {
        document: SourceDocument,
        facts: DocumentFacts,
        report: QualityReport,
    },
    Failed {
        id: String,
        error: String,
    },
}

pub struct CaseRunner {
    engine: Arc<dyn DocumentEngine>,
    notifier: Arc<dyn PipelineNotifier>,
    config: RunnerConfig,
}

impl CaseRunner {
    pub fn new(
        engine: Arc<dyn DocumentEngine>,
        notifier: Arc<dyn PipelineNotifier>,
        config: RunnerConfig,
    ) -> Self {
        Self {
            engine,
            notifier,
            config,
        }
    }

    /// Run one case over the given files.
    ///
    /// Fails only when not a single document produced usable text or a
    /// worker panicked; individual document failures are reported in
    /// `failed_documents`.
    pub async fn run_case(&self, files: &[PathBuf]) -> Result<CaseOutput, PipelineError> {
        self.notifier.notify(PipelineEvent::CaseStarted {
            total_documents: files.len(),
        });

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_documents.max(1)));
        let mut join_set: JoinSet<Result<(usize, DocumentResult), PipelineError>> = JoinSet::new();

        for (index, file) in files.iter().cloned().enumerate() {
            let id = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string_lossy().into_owned());
            let semaphore = semaphore.clone();
            let engine = self.engine.clone();
            let notifier = self.notifier.clone();
            let quality_config = self.config.quality.clone();

            join_set.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return Ok((
                        index,
                        DocumentResult::Failed {
                            id,
                            error: "worker pool shut down".into(),
                        },
                    ));
                };
                notifier.notify(PipelineEvent::DocumentStarted {
                    document_id: id.clone(),
                });

                // Engine reads and regex extraction are blocking work.
                let result = tokio::task::spawn_blocking(move || {
                    Self::process_one(&*engine, &file, id, &quality_config)
                })
                .await?;

                match &result {
                    DocumentResult::Extracted { document, report, .. } => {
                        notifier.notify(PipelineEvent::DocumentProcessed {
                            document_id: document.id.clone(),
                            quality_score: report.score,
                        });
                    }
                    DocumentResult::Failed { id, error } => {
                        notifier.notify(PipelineEvent::DocumentFailed {
                            document_id: id.clone(),
                            error: error.clone(),
                        });
                    }
                }
                Ok((index, result))
            });
        }

        let mut indexed = Vec::with_capacity(files.len());
        while let Some(joined) = join_set.join_next().await {
            indexed.push(joined??);
        }
        // Restore the caller's file order so consolidation is deterministic.
        indexed.sort_by_key(|(index, _)| *index);

        let mut consolidator = CaseConsolidator::new();
        let mut quality_reports = Vec::new();
        let mut failed_documents = Vec::new();
        for (_, result) in indexed {
            match result {
                DocumentResult::Extracted {
                    document,
                    facts,
                    report,
                } => {
                    consolidator.process_document(&document.id, &facts);
                    quality_reports.push(report);
                }
                DocumentResult::Failed { id, error } => {
                    tracing::warn!(document_id = %id, error = %error, "Document failed");
                    failed_documents.push(FailedDocument { id, error });
                }
            }
        }

        match consolidator.finalize() {
            Ok(case) => {
                self.notifier.notify(PipelineEvent::CaseCompleted {
                    documents_processed: consolidator.document_count(),
                    extraction_confidence: case.extraction_confidence,
                });
                Ok(CaseOutput {
                    case,
                    quality_reports,
                    failed_documents,
                })
            }
            Err(e) => {
                self.notifier.notify(PipelineEvent::CaseFailed {
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    fn process_one(
        engine: &dyn DocumentEngine,
        file: &Path,
        id: String,
        quality_config: &crate::config::QualityConfig,
    ) -> DocumentResult {
        let outcome = engine.process(file);
        if !outcome.success {
            return DocumentResult::Failed {
                id,
                error: outcome
                    .error
                    .unwrap_or_else(|| "engine reported failure".into()),
            };
        }

        let document = SourceDocument::new(file, outcome.text, outcome.confidence);
        let source_bytes = std::fs::metadata(file).ok().map(|m| m.len());
        let facts = extract_document_facts(&document.text, document.confidence);
        let report = assess_document(&document.id, &document.text, source_bytes, quality_config);
        DocumentResult::Extracted {
            document,
            facts,
            report,
        }
    }
}
