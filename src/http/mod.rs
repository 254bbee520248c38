//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.x surface of the server: a strict
//! header parser, response construction and serialization, media type
//! lookup, and the per-connection state machine.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`request`**: HTTP request representation and method parsing
//! - **`response`**: HTTP response representation with builder pattern
//! - **`parser`**: Parses a raw header block into a `Request` or a typed error
//! - **`connection`**: The per-socket state machine driving read and write
//! - **`writer`**: Serializes responses and drains them through partial writes
//! - **`mime`**: Media type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until the header block ends
//!        └──────┬──────┘
//!               │ Blank line seen (or peer hung up → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Handling      │ ← Parse, dispatch, build response bytes
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Drain response, resuming partial sends
//!        └──────┬───────────┘
//!               │ Fully drained
//!               ▼
//!             Closed
//! ```
//!
//! One request per connection: there is no keep-alive back-edge from
//! `Writing` to `Reading`.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
