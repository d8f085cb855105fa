use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Key material for the identifier digest. This only namespaces
/// identifiers deterministically; it is not a secret and provides no
/// security. Changing it orphans every previously indexed document.
const IDENTITY_KEY: &[u8] = b"index-sync-document-identity-v1";

/// Maximum identifier length accepted by the index service.
pub const MAX_DOCUMENT_ID_LEN: usize = 127;

type HmacSha256 = Hmac<Sha256>;

/// Derives the stable document identifier for a storage coordinate.
///
/// Identical `(bucket, key)` inputs always produce the identical
/// identifier, so an add followed by a delete for the same object hits
/// the same index entry no matter how often the notification source
/// redelivers either event. The bucket is part of the digested input:
/// equal keys in different buckets do not collide.
pub fn document_id(bucket: &str, key: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(IDENTITY_KEY).expect("hmac accepts keys of any length");
    mac.update(bucket.as_bytes());
    mac.update(b":");
    mac.update(key.as_bytes());

    let mut digest = format!("{:x}", mac.finalize().into_bytes());
    digest.truncate(MAX_DOCUMENT_ID_LEN);
    digest
}
