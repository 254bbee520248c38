use std::sync::Arc;
use std::time::SystemTime;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::files::{self, ResolveError};
use crate::http::parser::parse_header;
use crate::http::request::Method;
use crate::http::response::{Response, ResponseBuilder, Status, http_date};
use crate::http::writer::serialize_response;

/// A connection-level request handler.
///
/// Anything that turns raw request bytes into complete response bytes can be
/// plugged into the connection layer; structural conformance is all that is
/// required. Implementations never fail: every error path must map to a
/// well-formed HTTP response.
pub trait Handler: Send + Sync {
    fn handle(&self, raw: &[u8]) -> Vec<u8>;
}

/// The HTTP static file handler.
///
/// Composes the header parser, method dispatch, the static file resolver,
/// and the response builder.
pub struct HttpHandler {
    config: Arc<Config>,
}

impl HttpHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Common response scaffolding: `Server`, `Date`, `Content-Length`, and
    /// `Connection: close`, in that order on the wire. Every connection
    /// closes after one exchange.
    fn base(&self, status: Status, body_len: usize) -> ResponseBuilder {
        ResponseBuilder::new(status)
            .header("Server", self.config.server_name.as_str())
            .header("Date", http_date(SystemTime::now()))
            .header("Content-Length", body_len.to_string())
            .header("Connection", "close")
    }

    /// Builds an error response with a diagnostic string body.
    fn error_response(&self, status: Status, message: &str) -> Response {
        let body = message.as_bytes().to_vec();
        self.base(status, body.len())
            .header("Content-type", "text/html")
            .body(body)
            .build()
    }

    fn handle_get(&self, path: &str) -> Response {
        match files::resolve(&self.config.document_root, path) {
            Ok(resource) => {
                let mut builder = self
                    .base(Status::Ok, resource.content.len())
                    .header("Content-type", resource.media_type)
                    .header("Last-Modified", http_date(resource.last_modified));

                if let Some(encoding) = resource.encoding {
                    builder = builder.header("Content-Encoding", encoding);
                }

                builder.body(resource.content).build()
            }
            Err(ResolveError::NotFound) => self.error_response(Status::NotFound, "file not found"),
            Err(ResolveError::Io(err)) => {
                error!(path = %path, error = %err, "error reading file");
                self.error_response(
                    Status::InternalServerError,
                    &format!("error reading file: {}", err),
                )
            }
        }
    }
}

impl Handler for HttpHandler {
    fn handle(&self, raw: &[u8]) -> Vec<u8> {
        let response = match parse_header(raw) {
            Ok(request) => {
                let response = match request.method {
                    Method::GET => self.handle_get(&request.path),
                    _ => self.error_response(
                        Status::MethodNotAllowed,
                        "this server only serves HTTP GET",
                    ),
                };

                info!(
                    method = ?request.method,
                    path = %request.path,
                    status = response.status.as_u16(),
                    "request served"
                );

                response
            }
            Err(err) => {
                warn!(error = %err, "rejected malformed request");
                self.error_response(Status::BadRequest, &err.to_string())
            }
        };

        serialize_response(&response)
    }
}
