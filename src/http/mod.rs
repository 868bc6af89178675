//! HTTP/1.1 protocol handling.
//!
//! - **`connection`**: drives one request/response exchange on a stream
//! - **`parser`**: parses a request out of a byte buffer
//! - **`request`**: request representation
//! - **`form`**: `application/x-www-form-urlencoded` bodies
//! - **`cookie`**: `Cookie` parsing and `Set-Cookie` rendering
//! - **`response`**: response representation with builder
//! - **`writer`**: serializes and writes responses
//! - **`mime`**: content types by file extension
//!
//! # Connection State Machine
//!
//! Connections are not kept alive; each one serves a single exchange:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for header block and body
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Router produces the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! A parse or I/O failure at any step ends the exchange without a response.

pub mod connection;
pub mod cookie;
pub mod form;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
