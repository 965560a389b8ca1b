//! Opening sources
//!
//! A source is read to bytes, decompressed according to [`Compression`] and
//! decoded to text. Local paths, `http(s)://` and `ftp://` URLs are supported.
//! Remote bodies are fetched in full before decoding.

use crate::config::{Compression, ReaderConfig};
use crate::errors::{ParseError, ParseResult};
use bzip2::bufread::MultiBzDecoder;
use encoding_rs::{Encoding, UTF_8};
use flate2::bufread::MultiGzDecoder;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};
use tracing::{debug, info};
use xz2::bufread::XzDecoder;

const REMOTE_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "ftps://"];

/// Whether `source` names a remote resource rather than a local path.
pub fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    REMOTE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Decide how a path or URL path is decompressed.
///
/// [`Compression::Auto`] looks at the extension; anything else is returned as is.
pub fn resolve_compression(name: &str, requested: Compression) -> Compression {
    if requested != Compression::Auto {
        return requested;
    }
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("gz") => Compression::Gzip,
        Some("bz2") => Compression::Bzip2,
        Some("xz") => Compression::Xz,
        _ => Compression::Plain,
    }
}

/// Look up a character set by label. `None` means UTF-8.
///
/// # Errors
///
/// Returns [`ParseError::UnknownEncoding`] for labels `encoding_rs` does not know.
pub fn resolve_encoding(label: Option<&str>) -> ParseResult<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ParseError::unknown_encoding(label)),
    }
}

/// Wrap `reader` in the decoder for `compression`.
///
/// gzip and bzip2 inputs may hold several concatenated members; all are read.
pub fn decompress<'a, R: BufRead + 'a>(reader: R, compression: Compression) -> Box<dyn Read + 'a> {
    match compression {
        Compression::Gzip => Box::new(MultiGzDecoder::new(reader)),
        Compression::Bzip2 => Box::new(MultiBzDecoder::new(reader)),
        Compression::Xz => Box::new(XzDecoder::new_multi_decoder(reader)),
        Compression::Plain | Compression::Auto => Box::new(reader),
    }
}

/// Decode bytes strictly; malformed input is an [`ParseError::Io`] error.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, origin: &str) -> ParseResult<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            ParseError::io(
                origin,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("stream did not contain valid {}", encoding.name()),
                ),
            )
        })
}

/// Decompress and decode everything `reader` yields.
///
/// # Errors
///
/// Read, decompression and decoding failures become [`ParseError::Io`].
pub fn read_text<R: BufRead>(
    reader: R,
    compression: Compression,
    encoding: &'static Encoding,
    origin: &str,
) -> ParseResult<String> {
    let mut bytes = Vec::new();
    decompress(reader, compression)
        .read_to_end(&mut bytes)
        .map_err(|e| ParseError::io(origin, e))?;
    decode(&bytes, encoding, origin)
}

/// Read a local file to text. The file is closed before returning.
///
/// # Errors
///
/// Fails when the file cannot be opened or its content cannot be decoded.
pub fn read_local(path: &Path, config: &ReaderConfig) -> ParseResult<String> {
    let origin = path.display().to_string();
    let encoding = resolve_encoding(config.encoding.as_deref())?;
    let compression = resolve_compression(&origin, config.compression);
    let file = File::open(path).map_err(|e| ParseError::io(&origin, e))?;
    debug!(path = %origin, ?compression, encoding = encoding.name(), "Opened source");

    read_text(BufReader::new(file), compression, encoding, &origin)
}

/// Fetch a remote document and decode it to text.
///
/// For uncompressed HTTP bodies without a configured encoding, the charset
/// from the `Content-Type` header is used when present.
///
/// # Errors
///
/// - [`ParseError::Fetch`] for malformed URLs and transport failures
/// - [`ParseError::UnsupportedSource`] for schemes other than `http`, `https`, `ftp`
/// - decoding errors as for local files
pub fn read_remote(url: &str, config: &ReaderConfig) -> ParseResult<String> {
    let parsed = Url::parse(url).map_err(|e| ParseError::fetch(url, e))?;
    let (bytes, charset) = match parsed.scheme() {
        "http" | "https" => fetch_http(url)?,
        "ftp" => (fetch_ftp(&parsed)?, None),
        scheme => {
            return Err(ParseError::unsupported_source(
                url,
                format!("{scheme} transport is not supported"),
            ))
        }
    };

    let compression = resolve_compression(parsed.path(), config.compression);
    let label = match compression {
        Compression::Plain | Compression::Auto => config.encoding.as_deref().or(charset.as_deref()),
        _ => config.encoding.as_deref(),
    };
    let encoding = resolve_encoding(label)?;
    info!(url, ?compression, encoding = encoding.name(), "Decoding remote content");

    read_text(bytes.as_slice(), compression, encoding, url)
}

fn fetch_http(url: &str) -> ParseResult<(Vec<u8>, Option<String>)> {
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| ParseError::fetch(url, e))?;
    let charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(content_type_charset);
    let body = response.bytes().map_err(|e| ParseError::fetch(url, e))?;
    debug!(url, bytes = body.len(), ?charset, "Fetched over HTTP");
    Ok((body.to_vec(), charset))
}

fn fetch_ftp(url: &Url) -> ParseResult<Vec<u8>> {
    let fail = |e: FtpError| ParseError::fetch(url.as_str(), e.to_string());
    let host = url
        .host_str()
        .ok_or_else(|| ParseError::unsupported_source(url.as_str(), "FTP URL has no host"))?;
    let port = url.port_or_known_default().unwrap_or(21);
    let user = match url.username() {
        "" => "anonymous",
        user => user,
    };
    let password = url.password().unwrap_or("anonymous");

    let mut ftp = FtpStream::connect((host, port)).map_err(fail)?;
    ftp.login(user, password).map_err(fail)?;
    ftp.transfer_type(FileType::Binary).map_err(fail)?;
    let body = ftp.retr_as_buffer(url.path()).map_err(fail)?;
    if let Err(e) = ftp.quit() {
        debug!(url = url.as_str(), error = %e, "FTP quit failed after transfer");
    }

    let body = body.into_inner();
    debug!(url = url.as_str(), bytes = body.len(), "Fetched over FTP");
    Ok(body)
}

/// `charset` parameter of a `Content-Type` header value.
fn content_type_charset(value: &str) -> Option<String> {
    value.split(';').skip(1).find_map(|param| {
        let (key, charset) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| charset.trim().trim_matches('"').to_string())
    })
}
