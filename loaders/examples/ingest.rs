//! Chunks the files given on the command line and prints a summary.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p chunkline-loaders --example ingest -- notes.txt
//! ```

use chunkline_loaders::{Ingest, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sources: Vec<String> = std::env::args().skip(1).collect();
    if sources.is_empty() {
        eprintln!("usage: ingest <file>...");
        return Ok(());
    }

    let chunks = Ingest::new()
        .with_chunk_size(400)
        .with_chunk_overlap(40)
        .add_sources(&sources)?;

    for chunk in &chunks {
        let preview: String = chunk.text.chars().take(60).collect();
        println!("{:<40} {:>4} chars  {preview:?}", chunk.id, chunk.text.chars().count());
    }
    println!("{} chunks from {} sources", chunks.len(), sources.len());

    Ok(())
}
