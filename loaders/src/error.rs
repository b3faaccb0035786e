//! Error types for source loading and ingestion.

use std::path::PathBuf;

use chunkline_splitter::SplitterError;
use thiserror::Error;

/// Errors that can occur while loading or ingesting sources.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// No registered loader matches the source.
    #[error("unsupported source type: {0}")]
    UnsupportedSource(String),

    /// The source could not be read from the filesystem.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The source is not a valid PDF.
    #[error("failed to parse PDF {path}: {message}")]
    Pdf {
        /// Path of the PDF.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A caller-provided loader failed.
    #[error("loader failed: {0}")]
    Loader(#[source] anyhow::Error),

    /// Splitting the loaded documents failed.
    #[error(transparent)]
    Splitter(#[from] SplitterError),
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
