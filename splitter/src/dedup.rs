//! Content hashing for chunk deduplication.

use xxhash_rust::xxh3::xxh3_64;

/// Computes the xxh3 hash of a chunk's text.
///
/// Indexing collaborators use it to skip chunks they already stored.
#[must_use]
pub fn content_hash(text: &str) -> u64 {
    xxh3_64(text.as_bytes())
}
