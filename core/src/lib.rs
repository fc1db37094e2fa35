//! Blocking JSON-over-HTTP request helper.
//!
//! # Overview
//! `JsonClient` holds a base URL and a set of default headers. Each call
//! serializes an optional payload to JSON, sends one request through a
//! pluggable `Transport`, checks the status code and decodes the JSON
//! response into an optional caller-provided target.
//!
//! # Design
//! - Every call is split into a build phase (`build_request`) and a parse
//!   phase (`parse_response`) around the transport, so the I/O boundary is
//!   explicit and both halves can be tested without a network.
//! - The transport is an explicit per-client dependency. `UreqTransport` is
//!   the default; tests substitute their own.
//! - Header mutation takes `&mut self`; a client is never mutated while a
//!   request borrowed from it is in flight.

pub mod client;
pub mod error;
pub mod headers;
pub mod http;
pub mod transport;

pub use client::JsonClient;
pub use error::{Error, TransportError};
pub use headers::HeaderSet;
pub use crate::http::{HttpRequest, HttpResponse, ResponseBody, Transport};
pub use transport::UreqTransport;

/// Media type sent in `Content-Type` and `Accept` on every request.
pub const APPLICATION_JSON: &str = "application/json";
