//! Single-parameter HTTP GET request core.
//!
//! # Overview
//! Builds `<base>?<name>=<value>` URLs and forwards the status/body pair a
//! transport reports to a caller-supplied handler (host-does-IO pattern).
//! The request never touches the network itself, which keeps it
//! deterministic and easy to drive from tests or from a C host.
//!
//! # Design
//! - `GetRequest` is single-use: it borrows its `ResponseHandler` and is
//!   consumed when the response is delivered.
//! - `Transport` is the only I/O seam. `UreqTransport` (feature `ureq`) is a
//!   blocking implementation; hosts are free to bring their own.
//! - Endpoint domain, path and parameter name live in `EndpointConfig`
//!   rather than in globals.

pub mod config;
pub mod error;
pub mod http;
pub mod request;
#[cfg(feature = "ureq")]
pub mod transport;

pub use config::EndpointConfig;
pub use error::ConfigError;
pub use http::{Completion, HttpResponse, Transport, TRANSPORT_FAILURE_STATUS};
pub use request::{GetRequest, ResponseHandler, ENTITY_MERGE};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
