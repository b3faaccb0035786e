//! Ingestion pipeline: route, load, split.

use chunkline_splitter::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use chunkline_splitter::{Document, JsonObjectSplitter, RecursiveSplitter, SplitterConfig};
use regex::Regex;

use crate::Loader;
use crate::error::Result;
use crate::router::LoaderRouter;

/// Loads sources and cuts them into chunk documents ready for indexing.
///
/// Chunk size defaults to 1000 characters with no overlap. The chunk
/// settings are validated on every call, so an overlap that is not smaller
/// than the chunk size surfaces as
/// [`SplitterError::InvalidConfig`](chunkline_splitter::SplitterError::InvalidConfig).
#[derive(Debug, Clone)]
pub struct Ingest {
    chunk_size: usize,
    chunk_overlap: usize,
    router: LoaderRouter,
}

impl Default for Ingest {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingest {
    /// Creates a pipeline with the default loaders and chunk settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            router: LoaderRouter::with_defaults(),
        }
    }

    /// Sets the maximum chunk size in characters.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the overlap between consecutive chunks in characters.
    #[must_use]
    pub const fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Registers an extra loader; it takes precedence over existing routes.
    #[must_use]
    pub fn with_loader(mut self, pattern: Regex, loader: impl Loader + 'static) -> Self {
        self.router = self.router.with_loader(pattern, loader);
        self
    }

    /// Replaces the router entirely.
    #[must_use]
    pub fn with_router(mut self, router: LoaderRouter) -> Self {
        self.router = router;
        self
    }

    /// Loads and splits a single source.
    ///
    /// # Errors
    /// Fails when the chunk settings are invalid, no loader matches the
    /// source, or the loader fails.
    pub fn add_source(&self, source: &str) -> Result<Vec<Document>> {
        let splitter = self.splitter()?;
        self.load_and_split(&splitter, source)
    }

    /// Loads and splits every source in order, stopping at the first failure.
    ///
    /// # Errors
    /// Same as [`add_source`](Self::add_source), for the first failing source.
    pub fn add_sources<I, S>(&self, sources: I) -> Result<Vec<Document>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let splitter = self.splitter()?;
        let mut chunks = Vec::new();
        for source in sources {
            chunks.extend(self.load_and_split(&splitter, source.as_ref())?);
        }
        tracing::info!(chunks = chunks.len(), "ingested sources");
        Ok(chunks)
    }

    /// Splits documents that were loaded elsewhere.
    ///
    /// # Errors
    /// Fails when the chunk settings are invalid.
    pub fn add_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        Ok(self.splitter()?.split_documents(documents))
    }

    /// Splits JSON object documents into one document per top-level field.
    ///
    /// # Errors
    /// Fails when a document is not a JSON object.
    pub fn add_json_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        Ok(JsonObjectSplitter.split_documents(documents)?)
    }

    fn splitter(&self) -> Result<RecursiveSplitter> {
        let config = SplitterConfig::builder()
            .chunk_size(self.chunk_size)
            .chunk_overlap(self.chunk_overlap)
            .build()?;
        Ok(RecursiveSplitter::new(config))
    }

    fn load_and_split(
        &self,
        splitter: &RecursiveSplitter,
        source: &str,
    ) -> Result<Vec<Document>> {
        let documents = self.router.load(source)?;
        let chunks = splitter.split_documents(&documents);
        tracing::debug!(
            source,
            documents = documents.len(),
            chunks = chunks.len(),
            "split source"
        );
        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoaderError;
    use chunkline_splitter::SplitterError;

    #[test]
    fn default_settings() {
        let ingest = Ingest::default();
        assert_eq!(ingest.chunk_size, 1000);
        assert_eq!(ingest.chunk_overlap, 0);
    }

    #[test]
    fn invalid_overlap_is_rejected() {
        let err = Ingest::new()
            .with_chunk_size(10)
            .with_chunk_overlap(10)
            .add_documents(&[Document::new("a", "text")])
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Splitter(SplitterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn splits_preloaded_documents() {
        let chunks = Ingest::new()
            .with_chunk_size(10)
            .add_documents(&[Document::new("doc", "hello world this is a test")])
            .unwrap();
        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "world this", "is a test"]);
    }

    #[test]
    fn json_documents_split_per_field() {
        let chunks = Ingest::new()
            .add_json_documents(&[Document::new("cfg", r#"{"a": 1, "b": true}"#)])
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].text, r#"{"b":"true"}"#);
    }
}
