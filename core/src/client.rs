//! JSON request client with verb shorthands.
//!
//! # Design
//! `JsonClient` holds a `base_url`, a `HeaderSet` of defaults and a shared
//! `Transport`. `request` runs three steps: `build_request` produces an
//! `HttpRequest`, the transport executes it, `parse_response` checks the
//! status and decodes the body. The build and parse halves are public so
//! they can be driven without a transport.

use std::fmt;
use std::sync::Arc;

use ::http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use ::http::{HeaderMap, Method, Uri};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::headers::HeaderSet;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;
use crate::APPLICATION_JSON;

/// Blocking JSON client bound to one base URL.
///
/// Cloning is cheap apart from the header set; clones share the transport.
#[derive(Clone)]
pub struct JsonClient {
    base_url: String,
    headers: HeaderSet,
    transport: Arc<dyn Transport>,
}

impl JsonClient {
    /// Client with no default headers and a fresh `UreqTransport`.
    ///
    /// `base_url` is used verbatim: paths are appended without inserting or
    /// removing slashes.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.to_string(),
            headers: HeaderSet::new(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Replace every stored value of `key` with `value`.
    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.set(key, value);
    }

    /// Append `value` to the stored values of `key`.
    pub fn add_header(&mut self, key: &str, value: &str) {
        self.headers.add(key, value);
    }

    /// Send one JSON request and decode the response into `response`.
    ///
    /// `payload` is serialized as the body when present. `response` is only
    /// written on success; the response body is drained and closed on every
    /// path.
    pub fn request<P, R>(
        &self,
        method: &str,
        path: &str,
        payload: Option<&P>,
        response: Option<&mut R>,
    ) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, path, payload)?;
        tracing::debug!(
            target: "request_json",
            method = %request.method,
            url = %request.url,
            "sending request"
        );

        let reply = self.transport.send(request).map_err(|e| {
            tracing::debug!(target: "request_json", err = %e, "request error");
            Error::Transport(e)
        })?;
        tracing::debug!(
            target: "request_json",
            status = reply.status.as_u16(),
            "response received"
        );

        self.parse_response(reply, response)
    }

    /// Serialize `payload` and assemble the outgoing request.
    ///
    /// `Content-Type` and `Accept` are set to JSON first; stored headers are
    /// appended after them.
    pub fn build_request<P>(
        &self,
        method: &str,
        path: &str,
        payload: Option<&P>,
    ) -> Result<HttpRequest, Error>
    where
        P: Serialize + ?Sized,
    {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Encode)?;

        let method = Method::from_bytes(method.as_bytes()).map_err(build_error)?;
        let url = format!("{}{}", self.base_url, path);
        url.parse::<Uri>().map_err(build_error)?;

        Ok(HttpRequest {
            method,
            url,
            headers: self.merged_headers()?,
            body,
        })
    }

    /// Check the status and decode the body into `target`.
    pub fn parse_response<R>(
        &self,
        mut response: HttpResponse,
        target: Option<&mut R>,
    ) -> Result<(), Error>
    where
        R: DeserializeOwned,
    {
        let status = response.status.as_u16();
        if status > 299 {
            // A body that fails mid-read is reported as empty.
            let body = response.body.read_all().unwrap_or_default();
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(target: "request_json", status, "bad status code");
            return Err(Error::Status { status, body });
        }

        let Some(target) = target else {
            if let Err(e) = response.body.drain() {
                tracing::debug!(target: "request_json", err = %e, "failed draining response body");
            }
            return Ok(());
        };

        let bytes = response
            .body
            .read_all()
            .map_err(|e| Error::Decode(serde_json::Error::io(e)))?;
        // Only the first JSON value is decoded; anything after it is ignored.
        let mut de = serde_json::Deserializer::from_slice(&bytes);
        *target = R::deserialize(&mut de).map_err(Error::Decode)?;
        Ok(())
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str, response: Option<&mut R>) -> Result<(), Error> {
        self.request::<(), R>(Method::GET.as_str(), path, None, response)
    }

    pub fn post<P, R>(&self, path: &str, body: Option<&P>, response: Option<&mut R>) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST.as_str(), path, body, response)
    }

    pub fn put<P, R>(&self, path: &str, body: Option<&P>, response: Option<&mut R>) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PUT.as_str(), path, body, response)
    }

    pub fn delete<R: DeserializeOwned>(&self, path: &str, response: Option<&mut R>) -> Result<(), Error> {
        self.request::<(), R>(Method::DELETE.as_str(), path, None, response)
    }

    pub fn head<R: DeserializeOwned>(&self, path: &str, response: Option<&mut R>) -> Result<(), Error> {
        self.request::<(), R>(Method::HEAD.as_str(), path, None, response)
    }

    pub fn patch<P, R>(&self, path: &str, body: Option<&P>, response: Option<&mut R>) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PATCH.as_str(), path, body, response)
    }

    pub fn options<R: DeserializeOwned>(&self, path: &str, response: Option<&mut R>) -> Result<(), Error> {
        self.request::<(), R>(Method::OPTIONS.as_str(), path, None, response)
    }

    fn merged_headers(&self) -> Result<HeaderMap, Error> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        map.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        for (name, values) in self.headers.iter() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(build_error)?;
            for value in values {
                let value = HeaderValue::from_str(value).map_err(build_error)?;
                map.append(name.clone(), value);
            }
        }
        Ok(map)
    }
}

impl fmt::Debug for JsonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonClient")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

fn build_error(e: impl Into<::http::Error>) -> Error {
    Error::Build(e.into())
}
