//! Splitting JSON object documents into one document per top-level field.

use serde_json::{Map, Value};

use crate::chunking::Chunker;
use crate::dedup::content_hash;
use crate::error::{Result, SplitterError};
use crate::types::{Chunk, Document};

/// Splits a document whose content is a JSON object into one chunk per key.
///
/// Each chunk's content is a single-entry object mapping the key to the
/// field's value serialized as a JSON string, e.g. `{"name":"\"Ada\""}`, so
/// every chunk stays self-describing. Keys come out in sorted order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectSplitter;

impl JsonObjectSplitter {
    /// Splits every document and wraps each field in a new document.
    ///
    /// # Errors
    /// Returns [`SplitterError::Json`] if a document is not valid JSON and
    /// [`SplitterError::NotAnObject`] if it is valid JSON but not an object.
    pub fn split_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        Ok(self
            .chunk_all(documents)?
            .into_iter()
            .map(Chunk::into_document)
            .collect())
    }

    fn fields(doc: &Document) -> Result<Map<String, Value>> {
        let parsed: Value =
            serde_json::from_str(&doc.text).map_err(|source| SplitterError::Json {
                id: doc.id.clone(),
                source,
            })?;
        match parsed {
            Value::Object(fields) => Ok(fields),
            _ => Err(SplitterError::NotAnObject(doc.id.clone())),
        }
    }

    fn render_field(doc: &Document, key: String, value: &Value) -> Result<String> {
        let wrap = |source| SplitterError::Json {
            id: doc.id.clone(),
            source,
        };
        let encoded = serde_json::to_string(value).map_err(wrap)?;
        let mut entry = Map::new();
        entry.insert(key, Value::String(encoded));
        serde_json::to_string(&Value::Object(entry)).map_err(wrap)
    }
}

impl Chunker for JsonObjectSplitter {
    fn chunk(&self, doc: &Document) -> Result<Vec<Chunk>> {
        let mut fields: Vec<_> = Self::fields(doc)?.into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut chunks = Vec::with_capacity(fields.len());
        for (index, (key, value)) in fields.into_iter().enumerate() {
            let text = Self::render_field(doc, key, &value)?;
            let hash = content_hash(&text);
            chunks.push(Chunk::with_metadata(
                doc.chunk_id(index),
                text,
                &doc.id,
                index,
                hash,
                doc.metadata.clone(),
            ));
        }
        tracing::debug!(doc = %doc.id, fields = chunks.len(), "split JSON object");
        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "json_object"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Metadata;
    use serde_json::json;

    #[test]
    fn one_document_per_field() {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), json!("people.json"));
        let doc = Document::with_metadata(
            "people",
            r#"{"name": "Ada", "langs": ["en", "fr"], "age": 36}"#,
            metadata.clone(),
        );

        let out = JsonObjectSplitter.split_documents(&[doc]).unwrap();
        let texts: Vec<_> = out.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                r#"{"age":"36"}"#,
                r#"{"langs":"[\"en\",\"fr\"]"}"#,
                r#"{"name":"\"Ada\""}"#,
            ]
        );
        assert_eq!(out[0].id, "people#chunk_0");
        assert!(out.iter().all(|d| d.metadata == metadata));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let doc = Document::new("broken", "{not json");
        let err = JsonObjectSplitter.chunk(&doc).unwrap_err();
        assert!(matches!(err, SplitterError::Json { ref id, .. } if id == "broken"));
    }

    #[test]
    fn non_object_is_an_error() {
        let doc = Document::new("list", "[1, 2, 3]");
        let err = JsonObjectSplitter.chunk(&doc).unwrap_err();
        assert!(matches!(err, SplitterError::NotAnObject(id) if id == "list"));
    }

    #[test]
    fn empty_object_has_no_chunks() {
        let doc = Document::new("empty", "{}");
        assert!(JsonObjectSplitter.chunk(&doc).unwrap().is_empty());
    }
}
