use crate::cardinality::StanzaKind;
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while reading an OBO ontology
///
/// Every variant aborts the read; no partial graph is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A stanza line does not match the tag-value grammar
    #[error("Tag-value pair parsing failed{}: {line:?}", line_suffix(.line_number))]
    InvalidTagLine {
        /// The offending line as read
        line: String,
        /// 1-based physical line number, when known
        line_number: Option<usize>,
    },

    /// A Term, Typedef or Instance stanza has no `id` tag
    #[error("{kind} stanza #{index} has no id tag")]
    MissingIdentifier {
        /// Kind of the offending stanza
        kind: StanzaKind,
        /// 0-based position among stanzas of that kind
        index: usize,
    },

    /// A `relationship` value is not `<typedef> <target_id>`
    #[error("Malformed relationship on term {term_id}: {value:?} (expected `<typedef> <target>`)")]
    MalformedRelationship {
        /// Term carrying the relationship
        term_id: String,
        /// The relationship value
        value: String,
    },

    /// Failed to open, decompress or decode the input
    #[error("Failed to read {origin}: {source}")]
    Io {
        /// Path or description of the input
        origin: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A remote source could not be fetched
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// URL as given
        url: String,
        /// Transport error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The configured character set is not known
    #[error("Unknown text encoding {label:?}")]
    UnknownEncoding {
        /// Encoding label as configured
        label: String,
    },

    /// The input names a transport this crate does not provide
    #[error("Unsupported source {source_name}: {reason}")]
    UnsupportedSource {
        /// Path or URL as given
        source_name: String,
        /// Why it cannot be read
        reason: String,
    },
}

fn line_suffix(line_number: &Option<usize>) -> String {
    line_number
        .map(|n| format!(" at line {n}"))
        .unwrap_or_default()
}

impl ParseError {
    /// Create an InvalidTagLine error without a line number
    pub fn invalid_tag_line(line: impl Into<String>) -> Self {
        ParseError::InvalidTagLine {
            line: line.into(),
            line_number: None,
        }
    }

    /// Create a MissingIdentifier error
    pub fn missing_identifier(kind: StanzaKind, index: usize) -> Self {
        ParseError::MissingIdentifier { kind, index }
    }

    /// Create a MalformedRelationship error
    pub fn malformed_relationship(term_id: impl Into<String>, value: impl Into<String>) -> Self {
        ParseError::MalformedRelationship {
            term_id: term_id.into(),
            value: value.into(),
        }
    }

    /// Create an Io error for the named input
    pub fn io(origin: impl Into<String>, source: io::Error) -> Self {
        ParseError::Io {
            origin: origin.into(),
            source,
        }
    }

    /// Create a Fetch error for the given URL
    pub fn fetch(
        url: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        ParseError::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create an UnknownEncoding error
    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        ParseError::UnknownEncoding {
            label: label.into(),
        }
    }

    /// Create an UnsupportedSource error
    pub fn unsupported_source(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::UnsupportedSource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Attach a line number to an InvalidTagLine error; other errors pass through.
    pub fn at_line(self, number: usize) -> Self {
        match self {
            ParseError::InvalidTagLine { line, .. } => ParseError::InvalidTagLine {
                line,
                line_number: Some(number),
            },
            other => other,
        }
    }
}
