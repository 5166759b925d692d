pub mod types;

pub use types::*;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Decoder failures, distinct from plain JSON syntax errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid HAR document: missing or empty log.version")]
    InvalidFormat,
    #[error("malformed HAR JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse a HAR file from path
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Har, ParseError> {
    let file = File::open(path.as_ref())?;
    parse_reader(BufReader::new(file))
}

/// Parse HAR from a reader
///
/// Reads the whole input, deserializes it, then validates that the document
/// carries a non-empty format version. A literal `null` document (or any
/// object missing `log.version`) is rejected as `InvalidFormat`, not as a
/// syntax error.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Har, ParseError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    // Option at the root lets a `null` document decode to defaults instead
    // of failing in serde; the version check below catches it.
    let har: Har = serde_json::from_slice::<Option<Har>>(&buf)?.unwrap_or_default();
    if har.log.version.is_empty() {
        return Err(ParseError::InvalidFormat);
    }
    Ok(har)
}

/// Parse HAR from a string
pub fn parse_str(s: &str) -> Result<Har, ParseError> {
    parse_reader(s.as_bytes())
}

/// Parse HAR from stdin
pub fn parse_stdin() -> Result<Har, ParseError> {
    let stdin = std::io::stdin();
    parse_reader(stdin.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_har() {
        let har = parse_str(
            r#"{
                "log": {
                    "version": "1.2",
                    "entries": [
                        {
                            "_resourceType": "xhr",
                            "_initiator": { "type": "script" },
                            "request": {
                                "method": "GET",
                                "url": "https://example.com/api",
                                "headers": [ { "name": "Accept", "value": "*/*" } ],
                                "headersSize": 120,
                                "bodySize": 0
                            },
                            "response": { "status": 200, "headers": [] },
                            "time": 42.5,
                            "startedDateTime": "2024-01-01T00:00:00.000Z",
                            "timings": { "connect": 3.1 }
                        },
                        {
                            "request": { "method": "POST", "url": "https://example.com/submit" },
                            "response": { "status": 302 }
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(har.log.version, "1.2");
        assert_eq!(har.entries().len(), 2);
        assert_eq!(har.entries()[0].resource_type, "xhr");
        assert_eq!(har.entries()[0].initiator.kind, "script");
        assert_eq!(har.entries()[0].request_header("accept"), Some("*/*"));
        assert_eq!(har.entries()[1].url(), "https://example.com/submit");
        assert_eq!(har.entries()[1].response.status, 302);
    }

    #[test]
    fn test_parse_null_document_rejected() {
        assert!(matches!(parse_str("null"), Err(ParseError::InvalidFormat)));
    }

    #[test]
    fn test_parse_missing_version_rejected() {
        let result = parse_str(r#"{"log":{"entries":[]}}"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat)));
    }

    #[test]
    fn test_parse_empty_version_rejected() {
        let result = parse_str(r#"{"log":{"version":"","entries":[]}}"#);
        assert!(matches!(result, Err(ParseError::InvalidFormat)));
    }

    #[test]
    fn test_parse_malformed_json_propagates() {
        let result = parse_str(r#"{"log": {"version": "1.2", "#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let har = parse_str(
            r#"{
                "log": {
                    "version": "1.2",
                    "creator": { "name": "browser", "version": "99" },
                    "entries": [
                        { "cache": {}, "serverIPAddress": "1.2.3.4" }
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(har.entries().len(), 1);
    }

    #[test]
    fn test_parse_missing_fields_take_defaults() {
        let har = parse_str(r#"{"log":{"version":"1.1","entries":[{}]}}"#).unwrap();
        let entry = &har.entries()[0];
        assert_eq!(entry.request.method, "");
        assert_eq!(entry.response.status, 0);
        assert!(entry.response.error.is_empty());
        assert!(entry.request.post_data.text.is_empty());
        assert!(entry.cookies.is_empty());
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_parse_incomplete_entry_flag() {
        let har = parse_str(
            r#"{
                "log": {
                    "version": "1.2",
                    "entries": [
                        { "response": { "status": 0, "_error": "net::ERR_ABORTED" } },
                        { "response": { "status": 200 } }
                    ]
                }
            }"#,
        )
        .unwrap();
        assert!(!har.entries()[0].is_complete());
        assert!(har.entries()[1].is_complete());
    }
}
