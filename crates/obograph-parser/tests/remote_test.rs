//! Reads over HTTP from a one-shot local server

use flate2::write::GzEncoder;
use flate2::Compression as GzLevel;
use obograph_parser::{read_obo, OboReader, ParseError, ReaderConfig};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

const ONTOLOGY: &str = "ontology: remote\n\n[Term]\nid: X:1\nname: Alpha\n\n[Term]\nid: X:2\nis_a: X:1\n";

/// Serve a single HTTP response on an ephemeral port.
///
/// Returns the base URL and the server thread.
fn serve_once(status: &str, content_type: &str, body: Vec<u8>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });

    (base, handle)
}

#[test]
fn test_read_plain_url() {
    let (base, server) = serve_once("200 OK", "text/plain", ONTOLOGY.as_bytes().to_vec());
    let graph = read_obo(format!("{base}/demo.obo")).unwrap();
    server.join().unwrap();

    assert_eq!(graph.name(), Some("remote"));
    assert!(graph.has_edge("X:2", "X:1", "is_a"));
}

#[test]
fn test_server_charset_is_used() {
    let body = b"ontology: t\n\n[Term]\nid: X:1\nname: caf\xe9\n".to_vec();
    let (base, server) = serve_once("200 OK", "text/plain; charset=ISO-8859-1", body);
    let graph = OboReader::new().read_url(&format!("{base}/latin.obo")).unwrap();
    server.join().unwrap();

    assert_eq!(graph.node("X:1").unwrap().name(), Some("café"));
}

#[test]
fn test_read_gzip_url() {
    let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
    encoder.write_all(ONTOLOGY.as_bytes()).unwrap();
    let body = encoder.finish().unwrap();

    let (base, server) = serve_once("200 OK", "application/gzip", body);
    let graph = OboReader::with_config(ReaderConfig::default())
        .read_url(&format!("{base}/demo.obo.gz"))
        .unwrap();
    server.join().unwrap();

    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_http_error_status() {
    let (base, server) = serve_once("404 Not Found", "text/plain", b"missing".to_vec());
    let url = format!("{base}/gone.obo");
    let err = OboReader::new().read_url(&url).unwrap_err();
    server.join().unwrap();

    match err {
        ParseError::Fetch { url: failed, .. } => assert_eq!(failed, url),
        other => panic!("Expected Fetch, got {other:?}"),
    }
}
