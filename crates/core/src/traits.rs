use crate::error::SyncError;
use crate::models::BatchEntry;
use async_trait::async_trait;

/// Outbound seam to the object store holding the notified objects.
#[async_trait]
pub trait ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SyncError>;

    /// Removes an object; used only for unsupported formats.
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), SyncError>;
}

/// Outbound seam to the search-index document service.
#[async_trait]
pub trait SearchIndex {
    async fn submit(&self, endpoint: &str, batch: &[BatchEntry]) -> Result<(), SyncError>;
}
