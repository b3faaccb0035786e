//! Recursive, separator-aware text splitting for retrieval pipelines.
//!
//! The [`RecursiveSplitter`] cuts arbitrary text into chunks that
//! - never exceed a configured size (measured by a [`LengthFunction`]),
//! - break on the most meaningful boundary available: paragraphs, then lines,
//!   then words, then single characters,
//! - optionally repeat trailing content of one chunk at the start of the next
//!   so context survives chunk boundaries.
//!
//! Documents keep their metadata: every chunk produced from a [`Document`]
//! carries its own copy of the source's [`Metadata`].
//!
//! # Example
//!
//! ```rust
//! use chunkline_splitter::{Document, Metadata, RecursiveSplitter, SplitterConfig};
//!
//! let config = SplitterConfig::builder()
//!     .chunk_size(40)
//!     .chunk_overlap(10)
//!     .build()
//!     .unwrap();
//! let splitter = RecursiveSplitter::new(config);
//!
//! let doc = Document::with_metadata(
//!     "guide",
//!     "Chunking splits large files into overlapping passages.\n\nEach passage is indexed.",
//!     Metadata::from([("source".into(), "guide.txt".into())]),
//! );
//! for chunk in splitter.split_documents(&[doc]) {
//!     assert!(chunk.text.chars().count() <= 40);
//!     assert_eq!(chunk.metadata["source"], "guide.txt");
//! }
//! ```

pub mod chunking;
pub mod config;
pub mod dedup;
pub mod error;
pub mod json;
pub mod measure;
pub mod types;

pub use chunking::{Chunker, RecursiveSplitter};
pub use config::{SplitterConfig, SplitterConfigBuilder};
pub use dedup::content_hash;
pub use error::{Result, SplitterError};
pub use json::JsonObjectSplitter;
pub use measure::{AtomicUnit, LengthFunction};
pub use types::{Chunk, Document, Metadata};
