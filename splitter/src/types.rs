//! Core types for the splitter crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key/value metadata attached to documents and chunks.
///
/// Values are opaque to the splitter and copied verbatim into every chunk.
pub type Metadata = BTreeMap<String, Value>;

/// A document to be split into chunks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier for the document.
    pub id: String,
    /// Raw text content.
    pub text: String,
    /// Arbitrary metadata for filtering/citations.
    pub metadata: Metadata,
}

impl Document {
    /// Creates a new document with empty metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Creates a new document with metadata.
    #[must_use]
    pub fn with_metadata(
        id: impl Into<String>,
        text: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata,
        }
    }

    /// Identifier used for the `index`-th chunk of this document.
    #[must_use]
    pub fn chunk_id(&self, index: usize) -> String {
        format!("{}#chunk_{index}", self.id)
    }
}

/// A chunk of text derived from a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique identifier for this chunk (format: `{doc_id}#chunk_{n}`).
    pub id: String,
    /// Text content of the chunk.
    pub text: String,
    /// Parent document ID.
    pub source_id: String,
    /// Index of this chunk within the document.
    pub index: usize,
    /// Copy of the parent document's metadata.
    pub metadata: Metadata,
    /// Content hash for deduplication.
    pub content_hash: u64,
}

impl Chunk {
    /// Creates a new chunk with metadata.
    #[must_use]
    pub fn with_metadata(
        id: impl Into<String>,
        text: impl Into<String>,
        source_id: impl Into<String>,
        index: usize,
        content_hash: u64,
        metadata: Metadata,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source_id: source_id.into(),
            index,
            metadata,
            content_hash,
        }
    }

    /// Converts the chunk back into a standalone document, keeping its id and metadata.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document::with_metadata(self.id, self.text, self.metadata)
    }
}
