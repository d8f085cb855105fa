use crate::models::{BatchEntry, DocumentFields, ExtractedDocument};

/// Content-type label recorded on every add entry. Extraction always
/// yields plain text regardless of the source format.
pub const CONTENT_TYPE_LABEL: &str = "text/plain";

/// Builds the add batch for an extracted document. One event always
/// yields one entry; the batch shape supports more.
pub fn add_batch(document: &ExtractedDocument) -> Vec<BatchEntry> {
    vec![BatchEntry::Add {
        id: document.id.clone(),
        fields: DocumentFields {
            content: document.content.clone(),
            content_type: CONTENT_TYPE_LABEL.to_string(),
            resourcename: document.resource_name.clone(),
            created: document.created,
        },
    }]
}

/// Builds the delete batch for a document identifier. Deletes carry no
/// fields; identity alone addresses the index entry.
pub fn delete_batch(id: String) -> Vec<BatchEntry> {
    vec![BatchEntry::Delete { id }]
}

#[cfg(test)]
mod tests {
    use super::{add_batch, delete_batch, CONTENT_TYPE_LABEL};
    use crate::models::{BatchEntry, Category, ExtractedDocument};
    use serde_json::{json, Value};

    fn sample_document() -> ExtractedDocument {
        ExtractedDocument::new(
            "abc123".to_string(),
            Category::Pdf,
            "docs/report.pdf".to_string(),
            "extracted body".to_string(),
        )
    }

    #[test]
    fn add_batch_contains_exactly_one_entry() {
        let batch = add_batch(&sample_document());
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id(), "abc123");
    }

    #[test]
    fn add_entry_serializes_with_type_tag_and_fields() {
        let batch = add_batch(&sample_document());
        let value = serde_json::to_value(&batch).expect("batch serializes");

        assert_eq!(value[0]["type"], json!("add"));
        assert_eq!(value[0]["id"], json!("abc123"));
        assert_eq!(value[0]["fields"]["content"], json!("extracted body"));
        assert_eq!(value[0]["fields"]["content_type"], json!(CONTENT_TYPE_LABEL));
        assert_eq!(value[0]["fields"]["resourcename"], json!("docs/report.pdf"));
        assert!(matches!(value[0]["fields"]["created"], Value::String(_)));
    }

    #[test]
    fn delete_entry_carries_only_the_identifier() {
        let batch = delete_batch("abc123".to_string());
        assert_eq!(batch, vec![BatchEntry::Delete { id: "abc123".to_string() }]);

        let value = serde_json::to_value(&batch).expect("batch serializes");
        assert_eq!(value[0], json!({"type": "delete", "id": "abc123"}));
    }

    #[test]
    fn repeated_assembly_for_the_same_document_matches() {
        let document = sample_document();
        assert_eq!(add_batch(&document), add_batch(&document));
    }
}
