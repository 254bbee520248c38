use indexmap::IndexMap;

use crate::http::request::{Method, Request};

/// Reasons a raw header block fails to parse. Parsing is all-or-nothing:
/// a failure discards all work and returns only the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    MissingRequestLine,
    MalformedRequestLine,
    UnknownMethod,
    MalformedHeaderLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseError::EmptyInput => "empty request",
            ParseError::MissingRequestLine => "missing request line",
            ParseError::MalformedRequestLine => "malformed request line",
            ParseError::UnknownMethod => "unknown http method",
            ParseError::MalformedHeaderLine => "malformed header line",
        };
        f.write_str(msg)
    }
}

/// Parses the header block of an HTTP request.
///
/// Strict single-pass grammar: no line folding, no lenient recovery. On
/// success the request has exactly the three first-line fields and a header
/// map with no malformed entries.
pub fn parse_header(raw: &[u8]) -> Result<Request, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Header bytes are ISO-8859-1 (RFC 7230 section 3.2.4); a byte-per-char
    // decode cannot fail on any input.
    let payload = decode_latin1(raw);

    // Isolate the header block; anything past the blank line is body and
    // is ignored.
    let header_block = payload.split("\r\n\r\n").next().unwrap_or("");
    if header_block.is_empty() {
        return Err(ParseError::MissingRequestLine);
    }

    let mut lines = header_block.split("\r\n");

    let request_line = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or(ParseError::MissingRequestLine)?;

    // Request line: METHOD PATH VERSION
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedRequestLine);
    }
    let (method, path, version) = (parts[0], parts[1], parts[2]);

    if !version.starts_with("HTTP") || !path.starts_with('/') {
        return Err(ParseError::MalformedRequestLine);
    }

    let method = Method::from_str(method).ok_or(ParseError::UnknownMethod)?;

    // Headers
    let mut headers = IndexMap::new();

    for line in lines {
        let (key, value) = line
            .split_once(": ")
            .ok_or(ParseError::MalformedHeaderLine)?;

        // A later duplicate overwrites the earlier value in place.
        headers.insert(key.to_string(), value.to_string());
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_header(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    }
}
