use crate::error::EventError;
use crate::models::NotificationEvent;
use percent_encoding::percent_decode_str;

/// Routing decision derived from one notification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEvent {
    pub is_delete: bool,
    pub bucket: String,
    pub key: String,
    pub endpoint: String,
}

/// Inspects the first record and decides delete versus upsert.
///
/// Any event kind containing "delete" (case-insensitive) routes to the
/// delete path. The substring match is deliberately permissive so all
/// delete-like spellings from the notification source are covered.
pub fn classify_event(
    event: &NotificationEvent,
    region: &str,
) -> Result<ClassifiedEvent, EventError> {
    let record = event.records.first().ok_or(EventError::NoRecords)?;

    Ok(ClassifiedEvent {
        is_delete: record.event_name.to_lowercase().contains("delete"),
        bucket: record.s3.bucket.name.clone(),
        key: decode_object_key(&record.s3.object.key)?,
        endpoint: search_endpoint(&record.s3.configuration_id, region),
    })
}

/// Percent-decodes an object key, then maps literal `+` to a space.
/// Notification sources encode spaces in keys as `+`.
pub fn decode_object_key(raw: &str) -> Result<String, EventError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| EventError::InvalidKey(raw.to_string()))?;

    Ok(decoded.replace('+', " "))
}

fn search_endpoint(configuration_id: &str, region: &str) -> String {
    format!("{configuration_id}.{region}.cloudsearch.amazonaws.com")
}

#[cfg(test)]
mod tests {
    use super::{classify_event, decode_object_key};
    use crate::error::EventError;
    use crate::models::NotificationEvent;
    use serde_json::json;

    fn event(event_name: &str, key: &str) -> NotificationEvent {
        serde_json::from_value(json!({
            "Records": [{
                "eventName": event_name,
                "s3": {
                    "configurationId": "doc-search",
                    "bucket": {"name": "docs-bucket"},
                    "object": {"key": key}
                }
            }]
        }))
        .expect("valid event json")
    }

    #[test]
    fn put_event_routes_to_the_add_path() {
        let classified =
            classify_event(&event("ObjectCreated:Put", "docs/report.pdf"), "eu-west-1")
                .expect("classifies");
        assert!(!classified.is_delete);
        assert_eq!(classified.bucket, "docs-bucket");
        assert_eq!(classified.key, "docs/report.pdf");
    }

    #[test]
    fn delete_is_a_case_insensitive_substring_match() {
        for name in ["ObjectRemoved:Delete", "ObjectRemoved:DeleteMarkerCreated", "objectremoved:DELETE"] {
            let classified =
                classify_event(&event(name, "docs/report.pdf"), "eu-west-1").expect("classifies");
            assert!(classified.is_delete, "{name} should classify as delete");
        }
    }

    #[test]
    fn endpoint_combines_configuration_id_and_region() {
        let classified =
            classify_event(&event("ObjectCreated:Put", "a.txt"), "eu-west-1").expect("classifies");
        assert_eq!(classified.endpoint, "doc-search.eu-west-1.cloudsearch.amazonaws.com");
    }

    #[test]
    fn empty_record_list_is_rejected() {
        let empty: NotificationEvent =
            serde_json::from_value(json!({"Records": []})).expect("valid json");
        assert!(matches!(
            classify_event(&empty, "eu-west-1"),
            Err(EventError::NoRecords)
        ));
    }

    #[test]
    fn key_decoding_applies_percent_then_plus_mapping() {
        assert_eq!(decode_object_key("docs%2Bnotes.txt").expect("decodes"), "docs notes.txt");
        assert_eq!(decode_object_key("my+file.pdf").expect("decodes"), "my file.pdf");
        assert_eq!(decode_object_key("plain/report.pdf").expect("decodes"), "plain/report.pdf");
        assert_eq!(decode_object_key("caf%C3%A9.txt").expect("decodes"), "café.txt");
    }

    #[test]
    fn invalid_utf8_escapes_are_rejected() {
        assert!(matches!(
            decode_object_key("%FF%FE"),
            Err(EventError::InvalidKey(_))
        ));
    }
}
