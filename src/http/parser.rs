use crate::http::cookie::Cookies;
use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::fmt;

/// Upper bound on the header block, request line included.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Largest `Content-Length` accepted.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    HeadersTooLarge,
    BodyTooLarge,
    Incomplete,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidRequest => "malformed request line",
            ParseError::InvalidMethod => "unsupported method",
            ParseError::InvalidHeader => "malformed header line",
            ParseError::InvalidContentLength => "invalid Content-Length",
            ParseError::HeadersTooLarge => "header block too large",
            ParseError::BodyTooLarge => "declared body too large",
            ParseError::Incomplete => "incomplete request",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one request out of `buf`.
///
/// Returns the request and the number of bytes it occupied, or
/// `ParseError::Incomplete` while the header block or the promised body has
/// not fully arrived.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = match find_headers_end(buf) {
        Some(end) if end > MAX_HEAD_BYTES => return Err(ParseError::HeadersTooLarge),
        Some(end) => end,
        None if buf.len() > MAX_HEAD_BYTES => return Err(ParseError::HeadersTooLarge),
        None => return Err(ParseError::Incomplete),
    };
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let content_length = headers
        .get("Content-Length")
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);

    if content_length > MAX_BODY_BYTES {
        return Err(ParseError::BodyTooLarge);
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = (content_length > 0).then(|| body_bytes[..content_length].to_vec());
    let cookies = Cookies::parse(headers.get("Cookie").map(String::as_str));

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        cookies,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert!(parsed.body.is_none());
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn trailing_bytes_beyond_content_length_are_left() {
        let req = b"POST /login HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.body.as_deref(), Some(&b"abc"[..]));
        assert_eq!(consumed, req.len() - 3);
    }

    #[test]
    fn oversized_head_is_rejected() {
        let mut req = b"GET / HTTP/1.1\r\nX-Fill: ".to_vec();
        req.resize(MAX_HEAD_BYTES + 1, b'a');

        assert_eq!(
            parse_http_request(&req).unwrap_err(),
            ParseError::HeadersTooLarge
        );
    }

    #[test]
    fn oversized_content_length_is_rejected_before_body_arrives() {
        let mut req = b"POST /login HTTP/1.1\r\nContent-Length: 18446744073709551615\r\n\r\n".to_vec();
        req.extend_from_slice(b"account=admin");

        assert_eq!(parse_http_request(&req).unwrap_err(), ParseError::BodyTooLarge);
    }

    #[test]
    fn content_length_at_limit_waits_for_body() {
        let req = format!(
            "POST /upload HTTP/1.1\r\nContent-Length: {}\r\n\r\nabc",
            MAX_BODY_BYTES
        );

        assert_eq!(
            parse_http_request(req.as_bytes()).unwrap_err(),
            ParseError::Incomplete
        );
    }
}
