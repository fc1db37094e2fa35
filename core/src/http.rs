//! Plain-data request/response types and the transport seam.
//!
//! # Design
//! `JsonClient` builds an `HttpRequest`, hands it to a `Transport` and
//! parses the `HttpResponse` it gets back. The response body is an owned
//! reader; dropping the `HttpResponse` closes it.

use std::fmt;
use std::io::{self, Cursor, Read};

use ::http::{HeaderMap, Method, StatusCode};

use crate::error::TransportError;

/// An HTTP request described as plain data.
///
/// Built by `JsonClient::build_request`. Headers are already validated and
/// the URL is `base_url + path` exactly as the caller wrote it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response returned by a `Transport`.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

/// Owned, readable response body.
pub struct ResponseBody {
    reader: Box<dyn Read>,
}

impl ResponseBody {
    pub fn new(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn empty() -> Self {
        Self::new(io::empty())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }

    /// Read the remaining body to the end.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Consume and discard whatever is left of the body.
    pub fn drain(&mut self) -> io::Result<u64> {
        io::copy(&mut self.reader, &mut io::sink())
    }
}

impl Read for ResponseBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody").finish_non_exhaustive()
    }
}

/// Executes one request/response exchange.
///
/// Implementations must return 4xx/5xx responses as data rather than as
/// `Err`; status interpretation belongs to the client.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
