//! PDF loader backed by lopdf text extraction.

use std::path::Path;

use chunkline_splitter::{Document, Metadata};

use crate::Loader;
use crate::error::{LoaderError, Result};

/// Extracts the text layer of a PDF.
///
/// By default the whole file becomes one document with pages separated by a
/// blank line, so the splitter can still cut on page boundaries. Scanned pages
/// without a text layer contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLoader {
    per_page: bool,
}

impl PdfLoader {
    /// Creates a loader producing one document per file.
    #[must_use]
    pub const fn new() -> Self {
        Self { per_page: false }
    }

    /// Emits one document per page instead, tagged with a `page` number.
    #[must_use]
    pub const fn per_page(mut self, enabled: bool) -> Self {
        self.per_page = enabled;
        self
    }

    fn base_metadata(doc: &lopdf::Document, source: &str, pages: usize) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), source.into());
        metadata.insert("pages".into(), pages.into());
        if let Some(title) = info_field(doc, b"Title") {
            metadata.insert("title".into(), title.into());
        }
        if let Some(author) = info_field(doc, b"Author") {
            metadata.insert("author".into(), author.into());
        }
        metadata
    }
}

impl Loader for PdfLoader {
    fn load(&self, source: &str) -> Result<Vec<Document>> {
        let path = Path::new(source);
        let doc = lopdf::Document::load(path).map_err(|e| LoaderError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();
        let metadata = Self::base_metadata(&doc, source, page_numbers.len());

        let pages: Vec<(u32, String)> = page_numbers
            .iter()
            .map(|&number| {
                let raw = doc.extract_text(&[number]).unwrap_or_else(|e| {
                    tracing::debug!(source, page = number, error = %e, "no text layer");
                    String::new()
                });
                (number, normalize_text(&raw))
            })
            .collect();

        if !self.per_page {
            let text = pages
                .into_iter()
                .map(|(_, text)| text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n");
            return Ok(vec![Document::with_metadata(source, text, metadata)]);
        }

        Ok(pages
            .into_iter()
            .map(|(number, text)| {
                let mut metadata = metadata.clone();
                metadata.insert("page".into(), number.into());
                Document::with_metadata(format!("{source}#page_{number}"), text, metadata)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

fn info_field(doc: &lopdf::Document, key: &[u8]) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let value = doc.get_dictionary(info).ok()?.get(key).ok()?.as_str().ok()?;
    let value = String::from_utf8_lossy(value).trim().to_string();
    (!value.is_empty()).then_some(value)
}

// Extraction leaves ragged indentation and runs of blank lines.
fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
