use indexmap::IndexMap;

/// HTTP request methods.
///
/// All nine standard method tokens are recognized so that dispatch can
/// distinguish an unserved method (405) from an unknown token (parse error).
/// Only GET is actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// CONNECT - Establish a tunnel
    CONNECT,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// TRACE - Message loop-back test
    TRACE,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpsrv::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "HEAD" => Some(Method::HEAD),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "CONNECT" => Some(Method::CONNECT),
            "OPTIONS" => Some(Method::OPTIONS),
            "TRACE" => Some(Method::TRACE),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Built once by the parser from the request line and header lines, and
/// immutable thereafter. Request bodies are not modeled: this server only
/// serves GET, and anything past the header block is ignored.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path (e.g., "/index.html"); always begins with `/`
    pub path: String,
    /// HTTP version token (e.g., "HTTP/1.1"); always begins with `HTTP`
    pub version: String,
    /// Request headers in the order they appeared on the wire. A duplicate
    /// name overwrites the earlier value without changing its position.
    pub headers: IndexMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up (exact case, as received)
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .map(|v| v.as_str())
    }
}
