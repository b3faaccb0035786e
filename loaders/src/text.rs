//! Plain-text file loader.

use std::fs;
use std::path::Path;

use chunkline_splitter::{Document, Metadata};

use crate::Loader;
use crate::error::{LoaderError, Result};

/// Loads a UTF-8 text file as a single document.
///
/// The document id and its `source` metadata are the path as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLoader;

impl Loader for TextLoader {
    fn load(&self, source: &str) -> Result<Vec<Document>> {
        let path = Path::new(source);
        let text = fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = Metadata::from([("source".to_string(), source.into())]);
        Ok(vec![Document::with_metadata(source, text, metadata)])
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_file_with_source_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first line\nsecond line").unwrap();
        let source = path.to_str().unwrap();

        let docs = TextLoader.load(source).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, source);
        assert_eq!(docs[0].text, "first line\nsecond line");
        assert_eq!(docs[0].metadata["source"], source);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = TextLoader.load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }
}
