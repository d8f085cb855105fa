use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One storage-change notification as delivered by the bucket's event
/// source. Only the first record is consulted per invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "eventName")]
    pub event_name: String,
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageEntity {
    #[serde(rename = "configurationId")]
    pub configuration_id: String,
    pub bucket: BucketRecord,
    pub object: ObjectRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRecord {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRecord {
    /// URI-encoded key; spaces may arrive as literal `+`.
    pub key: String,
}

/// Detected document format, used to select an extraction strategy.
///
/// Closed enumeration: an extension outside the allow-list classifies
/// as `Unsupported` instead of silently taking the plain-text path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Pdf,
    Docx,
    Doc,
    PlainText,
    Unsupported,
}

impl Category {
    pub fn is_supported(self) -> bool {
        !matches!(self, Category::Unsupported)
    }
}

/// Ephemeral value produced per upsert invocation; never persisted
/// locally, discarded after batch submission.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub id: String,
    pub category: Category,
    pub resource_name: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl ExtractedDocument {
    pub fn new(id: String, category: Category, resource_name: String, content: String) -> Self {
        Self {
            id,
            category,
            resource_name,
            content,
            created: Utc::now(),
        }
    }
}

/// One entry of an index-service document batch. Serializes as
/// `{"type":"add","id":…,"fields":{…}}` or `{"type":"delete","id":…}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BatchEntry {
    Add { id: String, fields: DocumentFields },
    Delete { id: String },
}

impl BatchEntry {
    pub fn id(&self) -> &str {
        match self {
            BatchEntry::Add { id, .. } | BatchEntry::Delete { id } => id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentFields {
    pub content: String,
    pub content_type: String,
    pub resourcename: String,
    pub created: DateTime<Utc>,
}
