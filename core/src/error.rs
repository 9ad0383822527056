//! Error types for the GET request core.
//!
//! # Design
//! Building URLs and forwarding responses cannot fail, and transport
//! failures reach the handler as a status/body pair. The only fallible step
//! left is assembling an endpoint from configuration.

use thiserror::Error;

/// Errors returned while building an `EndpointConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint domain was empty, so there is no base URL to build on.
    #[error("endpoint domain must not be empty")]
    EmptyDomain,

    /// The query parameter name was empty.
    #[error("query parameter name must not be empty")]
    EmptyParameter,
}
