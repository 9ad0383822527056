//! Blocking `Transport` backed by ureq.

use std::time::Duration;

use crate::http::{Completion, HttpResponse, Transport};

/// Executes each GET on the calling thread and delivers before returning.
///
/// HTTP error statuses are delivered as data, and bodies that are not UTF-8
/// are decoded lossily. Anything that stops a response from arriving (DNS,
/// connect, timeout, truncated body) is delivered as
/// `TRANSPORT_FAILURE_STATUS` with the error text as body.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// `timeout` bounds the whole exchange, from resolve to last body byte.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    fn fetch(&self, url: &str) -> Result<HttpResponse, ureq::Error> {
        let mut response = self.agent.get(url).call()?;
        let status = response.status().as_u16();
        // Once a status arrived it is kept; undecodable bytes become U+FFFD.
        let bytes = response.body_mut().read_to_vec()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        Ok(HttpResponse { status, body })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn submit(&self, url: &str, completion: Completion<'_>) {
        let response = match self.fetch(url) {
            Ok(response) => {
                tracing::debug!(%url, status = response.status, "GET completed");
                response
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "GET failed before a response arrived");
                HttpResponse::transport_failure(e.to_string())
            }
        };
        completion(response);
    }
}
