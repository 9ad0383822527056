//! Transport seam for the host-does-IO pattern.
//!
//! # Design
//! The core never opens a socket. A `GetRequest` produces a URL, hands it to
//! a `Transport`, and waits for the transport to report back through a
//! one-shot `Completion`. Whatever happens on the wire, the outcome reaches
//! the caller as a plain `HttpResponse` status/body pair.

/// Status reported to the handler when the exchange never produced an HTTP
/// response (connect error, timeout, malformed reply).
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response standing in for an exchange that failed below HTTP.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self::new(TRANSPORT_FAILURE_STATUS, reason)
    }
}

/// One-shot completion handed to a transport.
///
/// The lifetime ties the completion to the handler it forwards to, so a
/// transport must finish delivering before `submit` returns.
pub type Completion<'a> = Box<dyn FnOnce(HttpResponse) + Send + 'a>;

/// Performs the network exchange for a fully built URL.
pub trait Transport {
    /// Fetch `url` and call `completion` exactly once with the outcome.
    ///
    /// Failures below HTTP are reported through `completion` as well, using
    /// `TRANSPORT_FAILURE_STATUS`.
    fn submit(&self, url: &str, completion: Completion<'_>);
}
