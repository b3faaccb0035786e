//! Splits a few documents with overlap and prints the resulting chunks.

use chunkline_splitter::{Document, Metadata, RecursiveSplitter, Result, SplitterConfig};

fn main() -> Result<()> {
    let config = SplitterConfig::builder()
        .chunk_size(60)
        .chunk_overlap(15)
        .build()?;
    let splitter = RecursiveSplitter::new(config);

    let docs = [
        Document::with_metadata(
            "rag-basics",
            "Retrieval-Augmented Generation uses embeddings to fetch context.\n\n\
             The retrieved passages are pasted into the prompt before the question.",
            Metadata::from([("source".into(), "notes".into())]),
        ),
        Document::with_metadata(
            "chunking",
            "Chunking splits large files into overlapping passages for indexing.",
            Metadata::from([("source".into(), "docs".into())]),
        ),
    ];

    for chunk in splitter.split_documents(&docs) {
        println!(
            "{} ({} chars, source = {}): {}",
            chunk.id,
            chunk.text.chars().count(),
            chunk.metadata["source"],
            chunk.text
        );
    }

    Ok(())
}
