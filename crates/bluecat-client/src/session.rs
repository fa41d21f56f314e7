//! Session handle and token extraction
//!
//! The login endpoint does not answer JSON. It returns a sentence such as
//! `Session Token-> BAMAuthToken: abc123= <- for User : admin` and the whole
//! `BAMAuthToken: ...` fragment is what later calls must echo back in the
//! `Authorization` header.

use crate::config::{ClientConfig, Scheme};
use crate::error::BlueCatError;
use regex::Regex;
use std::fmt;

/// Token fragment inside the login response
const TOKEN_PATTERN: &str = r"BAMAuthToken:\s+[\w=]+";

/// Authenticated session against one server
///
/// Immutable once created. There is no renewal: when the server expires the
/// token, log in again.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    scheme: Scheme,
    server: String,
    api_path: String,
    token: String,
}

impl Session {
    /// Create a session from a token obtained elsewhere
    pub fn new(config: &ClientConfig, server: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            scheme: config.scheme,
            server: server.into(),
            api_path: config.normalized_api_path(),
            token: token.into(),
        }
    }

    /// Server host (and optional port)
    pub fn server(&self) -> &str {
        &self.server
    }

    /// API path prefix, e.g. `/Services/REST/v1`
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Token sent verbatim in the `Authorization` header
    pub fn token(&self) -> &str {
        &self.token
    }

    /// URL of an endpoint, without query string
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        endpoint_url(self.scheme, &self.server, &self.api_path, endpoint)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("scheme", &self.scheme)
            .field("server", &self.server)
            .field("api_path", &self.api_path)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Build `{scheme}://{server}{api_path}/{endpoint}`
pub(crate) fn endpoint_url(scheme: Scheme, server: &str, api_path: &str, endpoint: &str) -> String {
    format!(
        "{}://{}{}/{}",
        scheme,
        server.trim_end_matches('/'),
        api_path,
        endpoint
    )
}

/// Extract the `BAMAuthToken: ...` fragment from a login response
pub fn extract_token(body: &str) -> Result<String, BlueCatError> {
    let pattern = Regex::new(TOKEN_PATTERN)
        .map_err(|e| BlueCatError::Authentication(format!("token pattern: {e}")))?;

    pattern
        .find(body)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            BlueCatError::Authentication(format!(
                "no session token in login response: {}",
                body.chars().take(200).collect::<String>()
            ))
        })
}
