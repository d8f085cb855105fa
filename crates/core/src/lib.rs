pub mod batch;
pub mod error;
pub mod event;
pub mod extractor;
pub mod format;
pub mod identity;
pub mod models;
pub mod pipeline;
pub mod stores;
pub mod traits;

pub use batch::{add_batch, delete_batch, CONTENT_TYPE_LABEL};
pub use error::{EventError, ExtractError, SyncError};
pub use event::{classify_event, decode_object_key, ClassifiedEvent};
pub use extractor::{extract, sanitize};
pub use format::{classify, file_extension};
pub use identity::{document_id, MAX_DOCUMENT_ID_LEN};
pub use models::{
    BatchEntry, Category, DocumentFields, EventRecord, ExtractedDocument, NotificationEvent,
};
pub use pipeline::{PipelineConfig, SyncOutcome, SyncPipeline};
pub use stores::{CloudSearchStore, S3Store};
pub use traits::{ObjectStore, SearchIndex};
