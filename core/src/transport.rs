//! Default blocking transport backed by `ureq`.

use ::http::Method;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, ResponseBody, Transport};

/// A `Transport` backed by a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with default settings, except that 4xx/5xx statuses are
    /// returned as responses instead of errors and any valid method token
    /// is sent as-is.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a caller-configured agent. The agent must be built with
    /// `http_status_as_error(false)` for status errors to carry the body,
    /// and with `allow_non_standard_methods(true)` to send custom verbs.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let carries_body = method_carries_body(&method);
        let mut builder = ::http::Request::builder().method(method).uri(url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        let result = match body {
            Some(body) => {
                let req = builder.body(body).map_err(|e| TransportError::Other(Box::new(e)))?;
                self.agent.run(req)
            }
            // Bodyless POST/PUT/PATCH still go out with `Content-Length: 0`.
            None if carries_body => {
                let req = builder
                    .body(Vec::new())
                    .map_err(|e| TransportError::Other(Box::new(e)))?;
                self.agent.run(req)
            }
            None => {
                let req = builder.body(()).map_err(|e| TransportError::Other(Box::new(e)))?;
                self.agent.run(req)
            }
        };

        match result {
            Ok(resp) => Ok(convert_response(resp)),
            Err(ureq::Error::Timeout(_)) => Err(TransportError::Timeout),
            Err(ureq::Error::HostNotFound) => {
                Err(TransportError::Connection("host not found".to_owned()))
            }
            Err(ureq::Error::Io(e)) => Err(TransportError::Connection(e.to_string())),
            Err(e) => Err(TransportError::Other(Box::new(e))),
        }
    }
}

fn method_carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Hand the body reader over unread; the client drains and drops it.
fn convert_response(response: ::http::Response<ureq::Body>) -> HttpResponse {
    let (parts, body) = response.into_parts();
    HttpResponse {
        status: parts.status,
        headers: parts.headers,
        body: ResponseBody::new(body.into_reader()),
    }
}
