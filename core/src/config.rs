//! Endpoint configuration.
//!
//! # Design
//! The domain, path and parameter name of the GET endpoint are plain values
//! handed to the request instead of process-wide constants. They can come
//! from code, from the environment, or from any serde format the host
//! already uses for its settings.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::request::{GetRequest, ResponseHandler};

pub const DEFAULT_DOMAIN: &str = "http://httpbin.org";
pub const DEFAULT_PATH: &str = "/get";
pub const DEFAULT_PARAMETER: &str = "para";

pub const DOMAIN_ENV: &str = "BASIC_GET_DOMAIN";
pub const PATH_ENV: &str = "BASIC_GET_PATH";
pub const PARAMETER_ENV: &str = "BASIC_GET_PARAMETER";

/// Where a GET request goes and which query parameter it carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEndpointConfig")]
pub struct EndpointConfig {
    domain: String,
    path: String,
    parameter: String,
}

/// Unvalidated shape accepted by `Deserialize`; every field is optional.
#[derive(Deserialize)]
struct RawEndpointConfig {
    #[serde(default = "default_domain")]
    domain: String,
    #[serde(default = "default_path")]
    path: String,
    #[serde(default = "default_parameter")]
    parameter: String,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_parameter() -> String {
    DEFAULT_PARAMETER.to_string()
}

impl TryFrom<RawEndpointConfig> for EndpointConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEndpointConfig) -> Result<Self, Self::Error> {
        EndpointConfig::new(&raw.domain, &raw.path, &raw.parameter)
    }
}

impl EndpointConfig {
    /// `domain` and `parameter` must be non-empty; `path` may be empty.
    pub fn new(domain: &str, path: &str, parameter: &str) -> Result<Self, ConfigError> {
        let domain = domain.trim_end_matches('/');
        if domain.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        if parameter.is_empty() {
            return Err(ConfigError::EmptyParameter);
        }
        let path = match path {
            "" => String::new(),
            p if p.starts_with('/') => p.to_string(),
            p => format!("/{p}"),
        };
        Ok(Self {
            domain: domain.to_string(),
            path,
            parameter: parameter.to_string(),
        })
    }

    /// Read `BASIC_GET_DOMAIN`, `BASIC_GET_PATH` and `BASIC_GET_PARAMETER`,
    /// using the defaults for any variable that is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let domain = lookup(DOMAIN_ENV).unwrap_or_else(default_domain);
        let path = lookup(PATH_ENV).unwrap_or_else(default_path);
        let parameter = lookup(PARAMETER_ENV).unwrap_or_else(default_parameter);
        Self::new(&domain, &path, &parameter)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.domain, self.path)
    }

    /// Start a request against this endpoint carrying `value`.
    pub fn request<'h>(&self, value: impl Into<String>, handler: &'h dyn ResponseHandler) -> GetRequest<'h> {
        GetRequest::new(self.base_url(), self.parameter.clone(), value, handler)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            path: default_path(),
            parameter: default_parameter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_points_at_httpbin_get() {
        let config = EndpointConfig::default();
        assert_eq!(config.base_url(), "http://httpbin.org/get");
        assert_eq!(config.parameter(), "para");
    }

    #[test]
    fn new_trims_trailing_slash_and_adds_leading_slash() {
        let config = EndpointConfig::new("http://localhost:3000/", "get", "q").unwrap();
        assert_eq!(config.domain(), "http://localhost:3000");
        assert_eq!(config.path(), "/get");
        assert_eq!(config.base_url(), "http://localhost:3000/get");
    }

    #[test]
    fn new_accepts_empty_path() {
        let config = EndpointConfig::new("http://localhost:3000", "", "q").unwrap();
        assert_eq!(config.path(), "");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn new_rejects_empty_domain() {
        assert_eq!(EndpointConfig::new("", "/get", "q").unwrap_err(), ConfigError::EmptyDomain);
        assert_eq!(EndpointConfig::new("/", "/get", "q").unwrap_err(), ConfigError::EmptyDomain);
    }

    #[test]
    fn new_rejects_empty_parameter() {
        assert_eq!(
            EndpointConfig::new("http://h", "/get", "").unwrap_err(),
            ConfigError::EmptyParameter
        );
    }

    #[test]
    fn lookup_overrides_only_set_values() {
        let vars: HashMap<&str, &str> = [(DOMAIN_ENV, "http://127.0.0.1:8080")].into_iter().collect();
        let config = EndpointConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/get");
        assert_eq!(config.parameter(), DEFAULT_PARAMETER);
    }

    #[test]
    fn lookup_with_empty_parameter_fails() {
        let config = EndpointConfig::from_lookup(|k| (k == PARAMETER_ENV).then(String::new));
        assert_eq!(config.unwrap_err(), ConfigError::EmptyParameter);
    }

    #[test]
    fn deserializes_with_field_defaults() {
        let config: EndpointConfig = serde_json::from_str(r#"{"domain":"https://api.example.com"}"#).unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/get");
        assert_eq!(config.parameter(), "para");
    }

    #[test]
    fn deserialize_rejects_empty_parameter() {
        let result: Result<EndpointConfig, _> = serde_json::from_str(r#"{"parameter":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_uses_configured_endpoint() {
        let config = EndpointConfig::new("https://api.example.com", "/get", "q").unwrap();
        let handler = |_: u16, _: &str| {};
        let req = config.request("hello", &handler);
        assert_eq!(req.build_url(), "https://api.example.com/get?q=hello");
    }
}
