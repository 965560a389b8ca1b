//! Warnings emitted while reading incomplete headers

use obograph_parser::OboReader;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Read `text` with a warning-level subscriber installed and return what it logged.
fn read_capturing(text: &str) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        OboReader::new().read_str(text).unwrap();
    });
    capture.contents()
}

#[test]
fn test_missing_header_logs_both_warnings() {
    let logs = read_capturing("[Term]\nid: X:1\n");
    assert!(logs.contains("got no header information"), "{logs}");
    assert!(logs.contains("name and ontology keys are both missing"), "{logs}");
    assert!(logs.contains("WARN"), "{logs}");
}

#[test]
fn test_header_without_name_logs_name_warning_only() {
    let logs = read_capturing("format-version: 1.2\n\n[Term]\nid: X:1\n");
    assert!(!logs.contains("got no header information"), "{logs}");
    assert!(logs.contains("name and ontology keys are both missing"), "{logs}");
}

#[test]
fn test_complete_header_is_quiet() {
    let logs = read_capturing("format-version: 1.2\nontology: demo\n\n[Term]\nid: X:1\n");
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn test_reserved_header_tag_warns() {
    let logs = read_capturing("ontology: demo\ntypedefs: clash\n\n[Term]\nid: X:1\n");
    assert!(logs.contains("header tag shadowed by stanza list"), "{logs}");
    assert!(logs.contains("typedefs"), "{logs}");
}
