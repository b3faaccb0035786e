//! # chunkline
//!
//! Façade crate that re-exports the chunkline splitter and, behind the
//! `loaders` feature (on by default), the source loaders and ingestion
//! pipeline. Pull this crate in to turn long documents into bounded,
//! overlapping chunks ready for an embedding index.
//!
//! ## What's inside?
//!
//! - [`RecursiveSplitter`]: cuts text on a cascade of separators (paragraph,
//!   line, word, character) and merges the pieces back into chunks of at most
//!   `chunk_size`, sharing up to `chunk_overlap` between neighbours.
//! - [`JsonObjectSplitter`]: one chunk per top-level field of a JSON object.
//! - [`loaders::Ingest`]: routes sources to loaders by pattern, loads them and
//!   splits the result in one call.
//!
//! ## Example
//!
//! ```rust
//! use chunkline::{Document, RecursiveSplitter, SplitterConfig};
//!
//! let splitter = RecursiveSplitter::new(
//!     SplitterConfig::builder()
//!         .chunk_size(10)
//!         .chunk_overlap(4)
//!         .build()
//!         .unwrap(),
//! );
//! let chunks = splitter.split_documents(&[Document::new("doc", "one two three four")]);
//! let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, ["one two", "two three", "four"]);
//! ```
//!
//! ## Features
//!
//! - `loaders` (default): text loader, regex routing and [`loaders::Ingest`].
//! - `pdf`: PDF text extraction through lopdf.
//! - `parallel`: `RecursiveSplitter::split_documents_par` on the rayon pool.

pub use chunkline_splitter::*;

/// Source loaders and the ingestion pipeline.
#[cfg(feature = "loaders")]
pub mod loaders {
    pub use chunkline_loaders::*;
}
