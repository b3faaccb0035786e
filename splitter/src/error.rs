//! Error types for the splitter crate.

use thiserror::Error;

/// Errors that can occur while configuring or running a splitter.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The chunk configuration can never produce bounded chunks.
    #[error("invalid chunk configuration: {0}")]
    InvalidConfig(String),

    /// Document content could not be parsed as JSON.
    #[error("invalid JSON content in document {id}: {source}")]
    Json {
        /// Identifier of the offending document.
        id: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Document content is valid JSON but not an object.
    #[error("document {0} does not contain a JSON object")]
    NotAnObject(String),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
