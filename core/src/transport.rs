//! Blocking HTTP execution of `HttpRequest` values using ureq.
//!
//! # Design
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data rather than `Err`, leaving status
//! interpretation to the parse layer. Only connection-level failures (DNS,
//! refused, timeout) surface as `ApiError::Transport`. Each call blocks the
//! calling thread for one round trip; there is no retry, queueing, or
//! background work.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes requests synchronously over a shared `ureq::Agent`.
///
/// The agent holds no mutable state visible to callers, so a `Transport`
/// (and the client owning it) can be shared across threads.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform one blocking round trip.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &req.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
