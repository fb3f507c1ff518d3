use std::fmt;

use crate::http::request::{Method, Request};

const METHOD_GET: &[u8] = b"GET ";
const PROTOCOL_MARKER: &[u8] = b" HTTP/1";
const QUERY_DELIMITER: u8 = b'?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The request line does not start with `GET`.
    UnsupportedMethod,
    /// No ` HTTP/1` protocol marker after the target, or a non-UTF-8 target.
    MalformedRequest,
    /// The request head exceeded the configured byte limit.
    HeadTooLarge,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::UnsupportedMethod => "unsupported method",
            ParseError::MalformedRequest => "malformed request line",
            ParseError::HeadTooLarge => "request head too large",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses a raw request head into a [`Request`].
///
/// Only the request line is examined. The target runs from just after
/// `"GET "` to the first `?` or the ` HTTP/1` marker, whichever comes
/// first; a `?` sitting right at the start of the target is not treated as
/// a query delimiter.
pub fn parse_request(head: &[u8]) -> Result<Request, ParseError> {
    let line = request_line(head);

    let token_end = line
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let method = std::str::from_utf8(&line[..token_end])
        .map(Method::from_token)
        .unwrap_or(Method::Unsupported);

    if method != Method::GET || !line.starts_with(METHOD_GET) {
        return Err(ParseError::UnsupportedMethod);
    }

    let rest = &line[METHOD_GET.len()..];
    let marker = find(rest, PROTOCOL_MARKER).ok_or(ParseError::MalformedRequest)?;

    let target_end = match rest[..marker].iter().position(|&b| b == QUERY_DELIMITER) {
        Some(q) if q > 0 => q,
        _ => marker,
    };

    let target = std::str::from_utf8(&rest[..target_end])
        .map_err(|_| ParseError::MalformedRequest)?
        .to_string();

    let protocol = protocol_token(&rest[marker + 1..]);

    Ok(Request {
        method,
        target,
        protocol,
    })
}

fn request_line(head: &[u8]) -> &[u8] {
    match find(head, b"\r\n") {
        Some(end) => &head[..end],
        None => head,
    }
}

fn protocol_token(from: &[u8]) -> String {
    let end = from
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(from.len());
    String::from_utf8_lossy(&from[..end]).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}
