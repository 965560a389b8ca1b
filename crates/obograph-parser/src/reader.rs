//! Read entry points tying the pipeline together.

use crate::builder::build_graph;
use crate::config::ReaderConfig;
use crate::errors::ParseResult;
use crate::metrics::ReadStats;
use crate::sections::parse_sections;
use crate::source::{is_remote, read_local, read_remote, read_text, resolve_encoding};
use obograph::OboGraph;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Reads OBO documents into [`OboGraph`]s.
#[derive(Debug, Clone, Default)]
pub struct OboReader {
    config: ReaderConfig,
}

impl OboReader {
    /// Create a reader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read an ontology from a local file or URL.
    ///
    /// Strings starting with `http://`, `https://`, `ftp://` or `ftps://` are
    /// fetched with [`OboReader::read_url`]. Local files may be plain, gzip,
    /// bzip2 or xz and are closed before returning.
    ///
    /// # Errors
    ///
    /// [`ParseError::Io`](crate::ParseError::Io) when the file cannot be read or
    /// decoded, [`ParseError::UnknownEncoding`](crate::ParseError::UnknownEncoding)
    /// for a bad encoding label, and any parse error.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> ParseResult<OboGraph> {
        let path = path.as_ref();
        let source = path.to_string_lossy();
        if is_remote(&source) {
            return self.read_url(&source);
        }
        let text = read_local(path, &self.config)?;
        debug!(bytes = text.len(), "Read source");
        self.read_str(&text)
    }

    /// Fetch and read an ontology from an `http(s)://` or `ftp://` URL.
    ///
    /// This blocks the current thread until the whole body has arrived.
    ///
    /// # Errors
    ///
    /// [`ParseError::Fetch`](crate::ParseError::Fetch) for transport failures,
    /// [`ParseError::UnsupportedSource`](crate::ParseError::UnsupportedSource)
    /// for other schemes, and any decoding or parse error.
    #[instrument(skip(self))]
    pub fn read_url(&self, url: &str) -> ParseResult<OboGraph> {
        let text = read_remote(url, &self.config)?;
        self.read_str(&text)
    }

    /// Read an ontology from a caller-owned buffered reader.
    ///
    /// The reader is borrowed and left open. [`Compression::Auto`](crate::Compression::Auto)
    /// is treated as plain text here.
    ///
    /// # Errors
    ///
    /// Fails with [`ParseError::Io`](crate::ParseError::Io) on read,
    /// decompression or decoding failures, and with any parse error.
    pub fn read_reader<R: BufRead>(&self, reader: &mut R) -> ParseResult<OboGraph> {
        let encoding = resolve_encoding(self.config.encoding.as_deref())?;
        let text = read_text(reader, self.config.compression, encoding, "reader")?;
        self.read_str(&text)
    }

    /// Read an ontology from in-memory text.
    ///
    /// # Errors
    ///
    /// Any parse error.
    pub fn read_str(&self, text: &str) -> ParseResult<OboGraph> {
        self.read_lines(text.lines())
    }

    /// Read an ontology from a sequence of lines.
    ///
    /// Lines may carry their trailing newline or not.
    ///
    /// # Errors
    ///
    /// Any parse error.
    pub fn read_lines<I, S>(&self, lines: I) -> ParseResult<OboGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.read_lines_with_stats(lines).map(|(graph, _)| graph)
    }

    /// Read an ontology from a sequence of lines, also returning read counts.
    ///
    /// # Errors
    ///
    /// Any parse error.
    pub fn read_lines_with_stats<I, S>(&self, lines: I) -> ParseResult<(OboGraph, ReadStats)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sections = parse_sections(lines)?;
        let (graph, stats) = build_graph(sections, self.config.ignore_obsolete)?;

        info!(
            name = graph.name().unwrap_or("<unnamed>"),
            terms = stats.terms,
            typedefs = stats.typedefs,
            instances = stats.instances,
            obsolete_skipped = stats.obsolete_skipped,
            nodes = stats.nodes,
            edges = stats.edges,
            "Ontology read"
        );

        Ok((graph, stats))
    }
}

/// Read the OBO file at `path`, leaving out obsolete terms.
///
/// # Errors
///
/// See [`OboReader::read_path`].
pub fn read_obo<P: AsRef<Path>>(path: P) -> ParseResult<OboGraph> {
    OboReader::new().read_path(path)
}

/// Read the OBO file at `path` with a custom configuration.
///
/// # Errors
///
/// See [`OboReader::read_path`].
pub fn read_obo_with<P: AsRef<Path>>(path: P, config: ReaderConfig) -> ParseResult<OboGraph> {
    OboReader::with_config(config).read_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use std::io::Cursor;

    const MINIMAL: &str = "format-version: 1.2\nontology: demo\n\n[Term]\nid: X:1\nname: Alpha\n\n[Term]\nid: X:2\nname: Beta\nis_a: X:1\n";

    #[test]
    fn test_read_str() {
        let graph = OboReader::new().read_str(MINIMAL).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.has_edge("X:2", "X:1", "is_a"));
        assert_eq!(graph.name(), Some("demo"));
    }

    #[test]
    fn test_read_reader_leaves_reader_usable() {
        let mut cursor = Cursor::new(MINIMAL.as_bytes());
        let graph = OboReader::new().read_reader(&mut cursor).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(cursor.position() as usize, MINIMAL.len());
    }

    #[test]
    fn test_read_reader_rejects_invalid_utf8() {
        let mut cursor = Cursor::new(vec![b'i', b'd', b':', b' ', 0xff, 0xfe, b'\n']);
        let err = OboReader::new().read_reader(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::Io { ref origin, .. } if origin == "reader"));
    }

    #[test]
    fn test_stats_match_graph() {
        let (graph, stats) = OboReader::new()
            .read_lines_with_stats(MINIMAL.lines())
            .unwrap();
        assert_eq!(stats.terms, 2);
        assert_eq!(stats.nodes, graph.node_count());
        assert_eq!(stats.edges, graph.edge_count());
    }

    #[test]
    fn test_config_controls_obsolete_handling() {
        let text = "[Term]\nid: X:1\nis_obsolete: true\n";
        assert_eq!(OboReader::new().read_str(text).unwrap().node_count(), 0);
        let reader = OboReader::with_config(ReaderConfig::keep_obsolete());
        assert!(!reader.config().ignore_obsolete);
        assert_eq!(reader.read_str(text).unwrap().node_count(), 1);
    }
}
