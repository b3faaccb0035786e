//! Configuration for the recursive splitter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitterError};
use crate::measure::{AtomicUnit, LengthFunction};

/// Default maximum chunk size, measured with the configured length function.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
/// Default overlap between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 0;
/// Default separator cascade: paragraph, line, word, character.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Validated, immutable configuration for a [`RecursiveSplitter`](crate::RecursiveSplitter).
///
/// Obtain one through [`SplitterConfig::builder`]; `build` rejects settings
/// that could never produce bounded chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSplitterConfig")]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    length: LengthFunction,
    atomic_unit: AtomicUnit,
    trim_chunks: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
            length: LengthFunction::default(),
            atomic_unit: AtomicUnit::default(),
            trim_chunks: false,
        }
    }
}

impl SplitterConfig {
    /// Creates a builder for custom configuration.
    #[must_use]
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::new()
    }

    /// Maximum measured length of a chunk.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Target measured length shared between consecutive chunks.
    #[must_use]
    pub const fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Separators in priority order.
    #[must_use]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Length function used for every measurement.
    #[must_use]
    pub const fn length(&self) -> LengthFunction {
        self.length
    }

    /// Unit produced by the empty-string separator.
    #[must_use]
    pub const fn atomic_unit(&self) -> AtomicUnit {
        self.atomic_unit
    }

    /// Whether merged chunks are trimmed of surrounding whitespace.
    #[must_use]
    pub const fn trim_chunks(&self) -> bool {
        self.trim_chunks
    }

    /// Measures `text` with the configured length function.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        self.length.measure(text)
    }

    fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SplitterError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(SplitterError::InvalidConfig(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.separators.is_empty() {
            return Err(SplitterError::InvalidConfig(
                "at least one separator is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Unvalidated shape used when deserializing a stored configuration.
#[derive(Deserialize)]
#[serde(default)]
struct RawSplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    length: LengthFunction,
    atomic_unit: AtomicUnit,
    trim_chunks: bool,
}

impl Default for RawSplitterConfig {
    fn default() -> Self {
        let SplitterConfig {
            chunk_size,
            chunk_overlap,
            separators,
            length,
            atomic_unit,
            trim_chunks,
        } = SplitterConfig::default();
        Self {
            chunk_size,
            chunk_overlap,
            separators,
            length,
            atomic_unit,
            trim_chunks,
        }
    }
}

impl TryFrom<RawSplitterConfig> for SplitterConfig {
    type Error = SplitterError;

    fn try_from(raw: RawSplitterConfig) -> Result<Self> {
        let config = Self {
            chunk_size: raw.chunk_size,
            chunk_overlap: raw.chunk_overlap,
            separators: raw.separators,
            length: raw.length,
            atomic_unit: raw.atomic_unit,
            trim_chunks: raw.trim_chunks,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`SplitterConfig`].
#[derive(Debug, Default)]
pub struct SplitterConfigBuilder {
    config: SplitterConfig,
}

impl SplitterConfigBuilder {
    /// Creates a new configuration builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SplitterConfig::default(),
        }
    }

    /// Sets the maximum chunk size.
    #[must_use]
    pub const fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Sets the overlap between consecutive chunks.
    #[must_use]
    pub const fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Replaces the separator cascade.
    ///
    /// Separators are tried in order; an empty string means "split into atomic units".
    #[must_use]
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the length function.
    #[must_use]
    pub const fn length(mut self, length: LengthFunction) -> Self {
        self.config.length = length;
        self
    }

    /// Sets what the empty-string separator explodes text into.
    #[must_use]
    pub const fn atomic_unit(mut self, unit: AtomicUnit) -> Self {
        self.config.atomic_unit = unit;
        self
    }

    /// Trims whitespace around merged chunks and drops whitespace-only chunks.
    #[must_use]
    pub const fn trim_chunks(mut self, enabled: bool) -> Self {
        self.config.trim_chunks = enabled;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// Returns [`SplitterError::InvalidConfig`] when `chunk_size` is zero,
    /// `chunk_overlap >= chunk_size`, or no separator is configured.
    pub fn build(self) -> Result<SplitterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
