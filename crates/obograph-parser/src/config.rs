use serde::{Deserialize, Serialize};

/// How the bytes of a source are decoded before line splitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Infer from the path or URL extension (`.gz`, `.bz2`, `.xz`); plain for readers
    #[default]
    Auto,
    /// Uncompressed text
    Plain,
    /// gzip stream, possibly of several members
    Gzip,
    /// bzip2 stream
    Bzip2,
    /// xz stream
    Xz,
}

/// Configuration for reading OBO documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Leave out terms tagged `is_obsolete: true`
    pub ignore_obsolete: bool,

    /// Input decompression
    pub compression: Compression,

    /// Character set label (`latin1`, `utf-16le`, ...)
    /// None = UTF-8, or the charset announced by an HTTP server
    pub encoding: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            ignore_obsolete: true,
            compression: Compression::Auto,
            encoding: None,
        }
    }
}

impl ReaderConfig {
    /// Create config that keeps obsolete terms as nodes
    pub fn keep_obsolete() -> Self {
        Self {
            ignore_obsolete: false,
            ..Default::default()
        }
    }

    /// Set whether obsolete terms are left out
    pub fn with_ignore_obsolete(mut self, ignore_obsolete: bool) -> Self {
        self.ignore_obsolete = ignore_obsolete;
        self
    }

    /// Set input decompression
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set the character set used to decode the input
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }
}
