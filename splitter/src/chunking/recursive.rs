//! Recursive, separator-aware text splitting.

use crate::config::SplitterConfig;
use crate::dedup::content_hash;
use crate::error::Result;
use crate::types::{Chunk, Document};

use super::Chunker;
use super::merge::{emit, merge_fragments};
use super::separator::{select_separator, split_fragments};

/// Splits text by trying separators from most to least meaningful.
///
/// Text is cut on the first separator of the cascade that occurs in it. Small
/// fragments are merged back into chunks of at most `chunk_size` with the
/// configured overlap; fragments that are still too large are split again,
/// starting from the top of the cascade.
///
/// # Example
///
/// ```rust
/// use chunkline_splitter::{RecursiveSplitter, SplitterConfig};
///
/// let config = SplitterConfig::builder()
///     .chunk_size(10)
///     .build()
///     .unwrap();
/// let splitter = RecursiveSplitter::new(config);
/// let chunks = splitter.split_text("hello world this is a test");
/// assert_eq!(chunks, ["hello", "world this", "is a test"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecursiveSplitter {
    config: SplitterConfig,
}

impl RecursiveSplitter {
    /// Creates a splitter from a validated configuration.
    #[must_use]
    pub const fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this splitter runs with.
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Splits `text` into ordered chunks.
    ///
    /// Empty input yields no chunks. Every chunk measures at most `chunk_size`
    /// unless it is a single atomic unit that is larger on its own.
    #[must_use]
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_into(text, &mut chunks);
        chunks
    }

    /// Splits every document and wraps each chunk in a new document.
    ///
    /// Each output owns its own copy of the source metadata. Chunks of one
    /// document precede those of the next, in input order.
    #[must_use]
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .flat_map(|doc| self.split_document(doc))
            .collect()
    }

    /// Same output as [`split_documents`](Self::split_documents), computed on the rayon pool.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn split_documents_par(&self, documents: &[Document]) -> Vec<Document> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .flat_map_iter(|doc| self.split_document(doc))
            .collect()
    }

    fn split_document(&self, doc: &Document) -> Vec<Document> {
        let chunks = self.split_text(&doc.text);
        tracing::debug!(doc = %doc.id, chunks = chunks.len(), "split document");
        chunks
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                Document::with_metadata(doc.chunk_id(index), text, doc.metadata.clone())
            })
            .collect()
    }

    fn split_into(&self, text: &str, out: &mut Vec<String>) {
        if text.is_empty() {
            return;
        }

        let selected = select_separator(text, self.config.separators());
        let (separator, fragments) = split_fragments(text, selected, self.config.atomic_unit());
        tracing::trace!(
            separator = ?separator,
            fragments = fragments.len(),
            "split pass"
        );

        let mut good = Vec::new();
        for fragment in fragments {
            if self.config.measure(fragment) < self.config.chunk_size() {
                good.push(fragment);
                continue;
            }

            if !good.is_empty() {
                merge_fragments(&good, separator, &self.config, out);
                good.clear();
            }

            if self.config.atomic_unit().is_atomic(fragment) {
                if self.config.measure(fragment) > self.config.chunk_size() {
                    tracing::warn!(
                        size = self.config.measure(fragment),
                        chunk_size = self.config.chunk_size(),
                        "atomic unit exceeds chunk size"
                    );
                }
                emit(fragment, &self.config, out);
            } else {
                self.split_into(fragment, out);
            }
        }

        if !good.is_empty() {
            merge_fragments(&good, separator, &self.config, out);
        }
    }
}

impl Chunker for RecursiveSplitter {
    fn chunk(&self, doc: &Document) -> Result<Vec<Chunk>> {
        Ok(self
            .split_text(&doc.text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let hash = content_hash(&text);
                Chunk::with_metadata(
                    doc.chunk_id(index),
                    text,
                    &doc.id,
                    index,
                    hash,
                    doc.metadata.clone(),
                )
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{AtomicUnit, LengthFunction};
    use crate::types::Metadata;
    use serde_json::json;

    fn splitter(
        chunk_size: usize,
        chunk_overlap: usize,
        separators: &[&str],
    ) -> RecursiveSplitter {
        RecursiveSplitter::new(
            SplitterConfig::builder()
                .chunk_size(chunk_size)
                .chunk_overlap(chunk_overlap)
                .separators(separators.iter().copied())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn small_text_single_chunk() {
        let chunks = splitter(100, 0, &["\n\n", "\n", " ", ""]).split_text("Short text");
        assert_eq!(chunks, vec!["Short text"]);
    }

    #[test]
    fn empty_text_no_chunks() {
        assert!(splitter(10, 0, &["\n\n", "\n", " ", ""]).split_text("").is_empty());
        assert!(splitter(10, 0, &["\n\n"]).split_text("").is_empty());
    }

    #[test]
    fn words_are_packed_up_to_chunk_size() {
        let chunks =
            splitter(10, 0, &["\n\n", "\n", " ", ""]).split_text("hello world this is a test");
        assert_eq!(chunks, vec!["hello", "world this", "is a test"]);
    }

    #[test]
    fn paragraphs_are_preferred_over_lines() {
        let text = "first para\nline two\n\nsecond para";
        let chunks = splitter(20, 0, &["\n\n", "\n", " ", ""]).split_text(text);
        assert_eq!(chunks, vec!["first para\nline two", "second para"]);
    }

    #[test]
    fn oversized_paragraph_falls_back_to_words() {
        let text = "tiny\n\nthis paragraph is too long";
        let chunks = splitter(12, 0, &["\n\n", "\n", " ", ""]).split_text(text);
        assert_eq!(chunks, vec!["tiny", "this", "paragraph is", "too long"]);
    }

    #[test]
    fn long_word_is_split_into_characters() {
        let chunks = splitter(4, 0, &[" ", ""]).split_text("ab abcdefghij");
        assert_eq!(chunks, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn terminates_without_empty_separator() {
        let chunks = splitter(3, 0, &["\n\n"]).split_text("abcdefg");
        assert_eq!(chunks, vec!["abc", "def", "g"]);
    }

    #[test]
    fn chunk_size_one_emits_each_character() {
        let chunks = splitter(1, 0, &[" ", ""]).split_text("ab c");
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }

    #[test]
    fn oversized_atomic_unit_is_emitted_alone() {
        let splitter = RecursiveSplitter::new(
            SplitterConfig::builder()
                .chunk_size(2)
                .separators([""])
                .length(LengthFunction::Bytes)
                .build()
                .unwrap(),
        );
        assert_eq!(splitter.split_text("a€b"), vec!["a", "€", "b"]);
    }

    #[test]
    fn grapheme_clusters_stay_whole() {
        let splitter = RecursiveSplitter::new(
            SplitterConfig::builder()
                .chunk_size(1)
                .separators([""])
                .atomic_unit(AtomicUnit::Grapheme)
                .build()
                .unwrap(),
        );
        assert_eq!(splitter.split_text("e\u{301}a"), vec!["e\u{301}", "a"]);

        let by_char = self::splitter(1, 0, &[""]).split_text("e\u{301}a");
        assert_eq!(by_char, vec!["e", "\u{301}", "a"]);
    }

    #[test]
    fn trimmed_chunks_drop_blank_paragraphs() {
        let splitter = RecursiveSplitter::new(
            SplitterConfig::builder()
                .chunk_size(10)
                .separators(["\n\n", ""])
                .trim_chunks(true)
                .build()
                .unwrap(),
        );
        let chunks = splitter.split_text("  alpha  \n\n   \n\n beta ");
        assert_eq!(chunks, vec!["alpha", "beta"]);
    }

    #[test]
    fn overlap_repeats_trailing_words() {
        let chunks = splitter(5, 2, &[" ", ""]).split_text("ab cd ef");
        assert_eq!(chunks, vec!["ab cd", "cd ef"]);
    }

    #[test]
    fn documents_keep_order_and_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), json!("notes.txt"));
        metadata.insert("page".into(), json!(3));
        let docs = vec![
            Document::with_metadata("a", "one two three", metadata.clone()),
            Document::new("b", "four"),
        ];

        let out = splitter(8, 0, &[" ", ""]).split_documents(&docs);
        let texts: Vec<_> = out.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["one two", "three", "four"]);
        assert_eq!(out[0].id, "a#chunk_0");
        assert_eq!(out[1].id, "a#chunk_1");
        assert_eq!(out[2].id, "b#chunk_0");
        assert_eq!(out[0].metadata, metadata);
        assert_eq!(out[1].metadata, metadata);
        assert!(out[2].metadata.is_empty());
    }

    #[test]
    fn metadata_copies_are_independent() {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), json!("a.txt"));
        let docs = vec![Document::with_metadata("a", "one two three", metadata.clone())];

        let mut out = splitter(8, 0, &[" ", ""]).split_documents(&docs);
        out[0].metadata.insert("source".into(), json!("changed"));

        assert_eq!(out[1].metadata, metadata);
        assert_eq!(docs[0].metadata, metadata);
    }

    #[test]
    fn chunker_assigns_ids_and_hashes() {
        let doc = Document::new("doc1", "alpha beta gamma");
        let chunks = splitter(11, 0, &[" ", ""]).chunk(&doc).unwrap();

        assert_eq!(chunks.len(), 2);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, format!("doc1#chunk_{i}"));
            assert_eq!(chunk.source_id, "doc1");
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.content_hash, content_hash(&chunk.text));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_split_matches_sequential() {
        let docs: Vec<_> = (0..16)
            .map(|i| Document::new(format!("doc{i}"), "alpha beta gamma delta ".repeat(i + 1)))
            .collect();
        let splitter = splitter(20, 6, &["\n\n", "\n", " ", ""]);
        assert_eq!(splitter.split_documents_par(&docs), splitter.split_documents(&docs));
    }

    #[test]
    fn default_splitter_name() {
        assert_eq!(RecursiveSplitter::default().name(), "recursive");
    }
}
