//! Client configuration
//!
//! Everything the transport needs besides the server address and the
//! credentials: URL scheme, API path prefix, TLS verification and timeout.
//! Certificate verification is on by default and can only be relaxed per
//! client instance.

use crate::error::BlueCatError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Path prefix of the BlueCat REST API v1
pub const DEFAULT_API_PATH: &str = "/Services/REST/v1";

/// URL scheme used to reach the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    /// Plain HTTP, for stub servers and lab setups
    Http,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Https => f.write_str("https"),
            Self::Http => f.write_str("http"),
        }
    }
}

/// TLS certificate verification mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsMode {
    /// Verify against the bundled web PKI roots
    #[default]
    Verify,
    /// Verify against an additional CA certificate read from a PEM file
    CustomCa(PathBuf),
    /// Accept any certificate. Only for self-signed lab appliances.
    DangerAcceptInvalid,
}

/// BlueCat client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: Scheme,
    pub api_path: String,
    pub tls: TlsMode,
    /// Request timeout in seconds; `None` leaves the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            api_path: DEFAULT_API_PATH.to_string(),
            tls: TlsMode::Verify,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Use the given URL scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Use a different API path prefix
    #[must_use]
    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Use the given TLS verification mode
    #[must_use]
    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    /// Abort requests that take longer than `secs` seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// API path prefix with a leading slash and no trailing slash
    pub fn normalized_api_path(&self) -> String {
        let trimmed = self.api_path.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Build a `reqwest::Client` from this config
    pub fn build_http_client(&self) -> Result<Client, BlueCatError> {
        let mut builder = Client::builder();

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        match &self.tls {
            TlsMode::Verify => {}
            TlsMode::CustomCa(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    BlueCatError::Config(format!(
                        "failed to read CA certificate {}: {e}",
                        path.display()
                    ))
                })?;
                let cert = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| BlueCatError::Config(format!("invalid CA certificate: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                warn!("TLS certificate verification is disabled");
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| BlueCatError::Config(format!("failed to build HTTP client: {e}")))
    }
}
