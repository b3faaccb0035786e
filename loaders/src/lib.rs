//! Loading raw sources and feeding them through the chunkline splitter.
//!
//! A [`LoaderRouter`] maps source strings (usually file paths) to a
//! [`Loader`] by regex, and [`Ingest`] glues routing, loading and splitting
//! into a single call:
//!
//! ```rust,no_run
//! use chunkline_loaders::Ingest;
//!
//! # fn main() -> chunkline_loaders::Result<()> {
//! let chunks = Ingest::new()
//!     .with_chunk_size(500)
//!     .with_chunk_overlap(50)
//!     .add_sources(["handbook.txt", "faq.txt"])?;
//! for chunk in &chunks {
//!     println!("{}: {}", chunk.id, chunk.text);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use chunkline_splitter::Document;

mod error;
mod ingest;
#[cfg(feature = "pdf")]
mod pdf;
mod router;
mod text;

pub use error::{LoaderError, Result};
pub use ingest::Ingest;
#[cfg(feature = "pdf")]
pub use pdf::PdfLoader;
pub use router::LoaderRouter;
pub use text::TextLoader;

/// Turns a source into documents ready for splitting.
///
/// Implement this for custom formats and register it on a [`LoaderRouter`].
/// Failures from third-party parsers can be wrapped in
/// [`LoaderError::Loader`].
pub trait Loader: Send + Sync + Debug {
    /// Loads every document contained in `source`.
    ///
    /// # Errors
    /// Returns an error when the source cannot be read or parsed.
    fn load(&self, source: &str) -> Result<Vec<Document>>;

    /// Returns the name of this loader.
    fn name(&self) -> &'static str;
}
