//! Single-parameter GET request and its response callback.
//!
//! # Design
//! `GetRequest` is built for one outbound call and dropped once the response
//! has been delivered. It borrows its `ResponseHandler` instead of owning it,
//! and `on_response` takes `self` by value so a request cannot deliver twice.
//! Status codes pass through untouched: telling success from failure is the
//! handler's job.

use crate::http::{HttpResponse, Transport};

/// Separator placed between the query parameter name and its value.
pub const ENTITY_MERGE: &str = "=";

/// Receives the final result of one request.
///
/// `Send + Sync` because a transport may deliver from one of its own threads.
/// Any `Fn(u16, &str)` closure with those bounds is a handler.
pub trait ResponseHandler: Send + Sync {
    fn on_response(&self, status: u16, body: &str);
}

impl<F> ResponseHandler for F
where
    F: Fn(u16, &str) + Send + Sync,
{
    fn on_response(&self, status: u16, body: &str) {
        self(status, body)
    }
}

/// A GET request against `base_url` carrying exactly one query parameter.
pub struct GetRequest<'h> {
    base_url: String,
    parameter_name: String,
    parameter_value: String,
    handler: &'h dyn ResponseHandler,
}

impl<'h> GetRequest<'h> {
    /// `base_url` and `parameter_name` must be non-empty. `parameter_value`
    /// is used verbatim and may be empty.
    pub fn new(
        base_url: impl Into<String>,
        parameter_name: impl Into<String>,
        parameter_value: impl Into<String>,
        handler: &'h dyn ResponseHandler,
    ) -> Self {
        let base_url = base_url.into();
        let parameter_name = parameter_name.into();
        debug_assert!(!base_url.is_empty(), "base_url must not be empty");
        debug_assert!(!parameter_name.is_empty(), "parameter_name must not be empty");
        Self {
            base_url,
            parameter_name,
            parameter_value: parameter_value.into(),
            handler,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn parameter_value(&self) -> &str {
        &self.parameter_value
    }

    /// `<base_url>?<parameter_name>=<parameter_value>`.
    ///
    /// Nothing is percent-encoded. A value containing `&`, `#`, `?` or spaces
    /// yields a malformed URL unless the caller encoded it first.
    pub fn build_url(&self) -> String {
        let mut url = String::with_capacity(
            self.base_url.len()
                + 1
                + self.parameter_name.len()
                + ENTITY_MERGE.len()
                + self.parameter_value.len(),
        );
        url.push_str(&self.base_url);
        url.push('?');
        url.push_str(&self.parameter_name);
        url.push_str(ENTITY_MERGE);
        url.push_str(&self.parameter_value);
        url
    }

    /// Hand `status` and `body` to the handler unchanged.
    pub fn on_response(self, status: u16, body: &str) {
        self.handler.on_response(status, body);
    }

    /// Build the URL, submit it through `transport` and forward whatever the
    /// transport reports to the handler.
    pub fn send<T: Transport + ?Sized>(self, transport: &T) {
        let url = self.build_url();
        transport.submit(
            &url,
            Box::new(move |response: HttpResponse| self.on_response(response.status, &response.body)),
        );
    }
}

impl std::fmt::Debug for GetRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetRequest")
            .field("base_url", &self.base_url)
            .field("parameter_name", &self.parameter_name)
            .field("parameter_value", &self.parameter_value)
            .finish_non_exhaustive()
    }
}
