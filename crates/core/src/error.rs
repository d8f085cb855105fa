use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("docx parse error: {0}")]
    DocxParse(String),
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("notification carried no records")]
    NoRecords,

    #[error("object key is not valid utf-8 after decoding: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("malformed event: {0}")]
    Event(#[from] EventError),

    #[error("object not found: {bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    #[error("access denied: {bucket}/{key}")]
    AccessDenied { bucket: String, key: String },

    #[error("invalid response from {backend}: {details}")]
    BackendResponse { backend: String, details: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
