use std::time::SystemTime;

use indexmap::IndexMap;

/// HTTP status codes issued by the server.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Requested file absent
/// - `MethodNotAllowed` (405): Recognized but unserved method
/// - `InternalServerError` (500): I/O failure reading an existing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl Status {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpsrv::http::response::Status;
    /// assert_eq!(Status::Ok.as_u16(), 200);
    /// assert_eq!(Status::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpsrv::http::response::Status;
    /// assert_eq!(Status::Ok.reason_phrase(), "OK");
    /// assert_eq!(Status::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Constructed fresh per request and never mutated after construction.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: Status,
    /// Headers in the exact order they will appear on the wire
    pub headers: IndexMap<String, String>,
    /// Response body as raw bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use httpsrv::http::response::{ResponseBuilder, Status};
/// let response = ResponseBuilder::new(Status::Ok)
///     .header("Content-type", "text/plain")
///     .body(b"hello".to_vec())
///     .build();
/// assert_eq!(response.headers.get("Content-Length").unwrap(), "5");
/// ```
pub struct ResponseBuilder {
    status: Status,
    headers: IndexMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            headers: IndexMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header. Headers keep their insertion order on the
    /// wire; replacing a header keeps its original position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a Content-Length header equal to the exact body length if not
    /// already present.
    pub fn build(mut self) -> Response {
        // Auto Content-Length (important)
        self.headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| self.body.len().to_string());

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Formats a timestamp as `%a, %d %b %Y %H:%M:%S +0000`, always in UTC.
///
/// `httpdate` renders the same fields with a trailing `GMT`; the wire format
/// here carries the numeric `+0000` zone token instead.
pub fn http_date(t: SystemTime) -> String {
    let fixdate = httpdate::fmt_http_date(t);
    match fixdate.strip_suffix("GMT") {
        Some(prefix) => format!("{prefix}+0000"),
        None => fixdate,
    }
}
