use crate::error::SyncError;
use crate::traits::ObjectStore;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};
use tracing::info;

/// Characters escaped when a decoded key goes back into a URL path
/// segment. `+` and `%` are included so decoded keys round-trip.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'+');

/// Object store speaking the S3 REST interface over plain HTTP.
pub struct S3Store {
    client: Client,
    region: String,
    endpoint_override: Option<String>,
}

impl S3Store {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            region: region.into(),
            endpoint_override: None,
        }
    }

    /// Points the store at a custom base URL instead of the regional
    /// virtual-hosted address. Used for local stacks and tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        let encoded_key = key
            .split('/')
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");

        match &self.endpoint_override {
            Some(endpoint) => format!("{endpoint}/{bucket}/{encoded_key}"),
            None => format!(
                "https://{bucket}.s3.{}.amazonaws.com/{encoded_key}",
                self.region
            ),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SyncError> {
        info!(bucket, key, "fetching object");

        let response = self
            .client
            .get(self.object_url(bucket, key))
            .header("x-amz-request-payer", "requester")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(SyncError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            StatusCode::FORBIDDEN => Err(SyncError::AccessDenied {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            status if !status.is_success() => Err(SyncError::BackendResponse {
                backend: "s3".to_string(),
                details: status.to_string(),
            }),
            _ => Ok(response.bytes().await?.to_vec()),
        }
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), SyncError> {
        info!(bucket, key, "deleting object");

        let response = self
            .client
            .delete(self.object_url(bucket, key))
            .send()
            .await?;

        // Deleting an already-gone object is a success for our purposes.
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Err(SyncError::BackendResponse {
            backend: "s3".to_string(),
            details: response.status().to_string(),
        })
    }
}
