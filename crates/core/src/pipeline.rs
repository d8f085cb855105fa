use crate::batch::{add_batch, delete_batch};
use crate::error::SyncError;
use crate::event::classify_event;
use crate::extractor::{extract, sanitize};
use crate::format::classify;
use crate::identity::document_id;
use crate::models::{ExtractedDocument, NotificationEvent};
use crate::traits::{ObjectStore, SearchIndex};
use tracing::{info, warn};

/// Options passed into the orchestrator at construction.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Region used to derive the search endpoint.
    pub region: String,
}

/// Terminal state of one processed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Content was extracted and an add batch was submitted.
    Indexed,
    /// A delete batch was submitted; no fetch was performed.
    Removed,
    /// Unsupported format; the object was deleted from storage and
    /// nothing was submitted to the index.
    RejectedUnsupported,
}

/// Composes event classification, fetch, extraction, batch assembly,
/// and submission into one sequential invocation.
pub struct SyncPipeline<S, I> {
    storage: S,
    index: I,
    config: PipelineConfig,
}

impl<S, I> SyncPipeline<S, I>
where
    S: ObjectStore + Send + Sync,
    I: SearchIndex + Send + Sync,
{
    pub fn new(storage: S, index: I, config: PipelineConfig) -> Self {
        Self {
            storage,
            index,
            config,
        }
    }

    /// Processes one notification to completion without ever raising.
    ///
    /// Every failure is logged and swallowed; the notification source
    /// redelivers undelivered changes, and deterministic identity makes
    /// redelivery converge on the same index state.
    pub async fn handle(&self, event: &NotificationEvent) {
        match self.process(event).await {
            Ok(outcome) => info!(?outcome, "notification processed"),
            Err(error) => warn!(%error, "notification dropped, awaiting redelivery"),
        }
    }

    /// Same as [`handle`](Self::handle) but surfaces the typed result,
    /// so callers and tests can assert on the failure kind.
    pub async fn process(&self, event: &NotificationEvent) -> Result<SyncOutcome, SyncError> {
        let classified = classify_event(event, &self.config.region)?;
        let id = document_id(&classified.bucket, &classified.key);

        if classified.is_delete {
            info!(bucket = %classified.bucket, key = %classified.key, "removing document from index");
            let batch = delete_batch(id);
            self.index.submit(&classified.endpoint, &batch).await?;
            return Ok(SyncOutcome::Removed);
        }

        let category = classify(&classified.key);
        if !category.is_supported() {
            warn!(bucket = %classified.bucket, key = %classified.key, "unsupported format, deleting object");
            self.storage.delete(&classified.bucket, &classified.key).await?;
            return Ok(SyncOutcome::RejectedUnsupported);
        }

        info!(bucket = %classified.bucket, key = %classified.key, ?category, "indexing object");
        let bytes = self.storage.fetch(&classified.bucket, &classified.key).await?;
        let content = extract(&bytes, category);
        let document = ExtractedDocument::new(id, category, sanitize(&classified.key), content);

        let batch = add_batch(&document);
        self.index.submit(&classified.endpoint, &batch).await?;
        Ok(SyncOutcome::Indexed)
    }
}
