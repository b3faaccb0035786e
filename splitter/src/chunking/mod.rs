//! Text chunking strategies.
//!
//! This module provides the [`Chunker`] trait and the [`RecursiveSplitter`],
//! which cuts text on a cascade of separators and merges the pieces back into
//! bounded, optionally overlapping chunks.

mod merge;
mod recursive;
mod separator;

pub use recursive::RecursiveSplitter;

use crate::error::Result;
use crate::types::{Chunk, Document};

/// Trait for text chunking strategies.
///
/// Chunkers split documents into smaller pieces that can be individually
/// embedded and searched:
///
/// - [`RecursiveSplitter`]: separator cascade with size bound and overlap
/// - [`JsonObjectSplitter`](crate::JsonObjectSplitter): one chunk per top-level key of a JSON object
pub trait Chunker: Send + Sync {
    /// Splits a document into chunks.
    ///
    /// # Arguments
    /// * `doc` - The document to chunk
    ///
    /// # Returns
    /// A vector of chunks, each with a unique ID derived from the document ID.
    ///
    /// # Errors
    /// Returns an error when the document content cannot be handled by this strategy.
    fn chunk(&self, doc: &Document) -> Result<Vec<Chunk>>;

    /// Chunks every document in order, stopping at the first failure.
    ///
    /// # Errors
    /// Propagates the first error returned by [`chunk`](Self::chunk).
    fn chunk_all(&self, docs: &[Document]) -> Result<Vec<Chunk>> {
        let mut chunks = Vec::new();
        for doc in docs {
            chunks.extend(self.chunk(doc)?);
        }
        Ok(chunks)
    }

    /// Returns the name of this chunking strategy.
    fn name(&self) -> &'static str;
}
