//! Pipeline progress events.
//!
//! The runner emits progress as it works so a frontend can render a live
//! view of a long case run. Delivery is fire-and-forget: a notifier must
//! never block or fail the pipeline.

use serde::Serialize;

/// Progress events emitted over the life of one case run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    CaseStarted {
        total_documents: usize,
    },
    DocumentStarted {
        document_id: String,
    },
    DocumentProcessed {
        document_id: String,
        quality_score: f32,
    },
    DocumentFailed {
        document_id: String,
        error: String,
    },
    CaseCompleted {
        documents_processed: usize,
        extraction_confidence: f32,
    },
    CaseFailed {
        error: String,
    },
}

pub trait PipelineNotifier: Send + Sync {
    /// Deliver an event. Must not block; failures are the notifier's
    /// problem, not the pipeline's.
    fn notify(&self, event: PipelineEvent);
}

/// Discards every event. The default for library and test use.
pub struct NoopNotifier;

impl PipelineNotifier for NoopNotifier {
    fn notify(&self, _event: PipelineEvent) {}
}

/// Posts each event as JSON to an HTTP endpoint.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
        }
    }
}

impl PipelineNotifier for WebhookNotifier {
    fn notify(&self, event: PipelineEvent) {
        // Delivery rides on the ambient runtime; without one the event is
        // dropped with a warning rather than blocking the caller.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(url = %self.url, "No async runtime; dropping pipeline event");
            return;
        };
        let client = self.client.clone();
        let url = self.url.clone();
        handle.spawn(async move {
            if let Err(e) = client.post(&url).json(&event).send().await {
                tracing::warn!(url = %url, error = %e, "Failed to deliver pipeline event");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let event = PipelineEvent::DocumentProcessed {
            document_id: "complaint.txt".into(),
            quality_score: 87.5,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "document_processed");
        assert_eq!(json["document_id"], "complaint.txt");
    }

    #[test]
    fn webhook_without_runtime_does_not_panic() {
        let notifier = WebhookNotifier::new("http://localhost:1/hook");
        notifier.notify(PipelineEvent::CaseFailed {
            error: "no documents".into(),
        });
    }
}
