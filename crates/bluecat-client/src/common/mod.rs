//! Common utilities for BlueCat API client
//!
//! Provides the request/response values that cross the `Transport` seam, the
//! reqwest-backed transport, and the response decoders shared by every
//! operation.

pub mod query;

use crate::error::BlueCatError;
use crate::transport_trait::Transport;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use query::{Options, Query};

/// Marker the server puts in the body of a rejected mutation
const REJECTION_MARKER: &str = "Invalid";

/// One API call described as plain data
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Endpoint name, also used to tag errors (e.g. `getEntityById`)
    pub operation: &'static str,
    pub method: Method,
    /// Full URL without the query string
    pub url: String,
    pub query: Query,
    /// Value for the `Authorization` header; `None` for login
    pub auth_token: Option<String>,
    /// JSON body, only used by `addEntity` and `update`
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// URL including the encoded query string
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.query.encode())
        }
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Wrap an existing `reqwest::Client`
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BlueCatError> {
        debug!("{} {}", request.method, request.operation);

        let mut builder = self
            .client
            .request(request.method.clone(), request.full_url())
            .header("Content-Type", "application/json");

        if let Some(token) = &request.auth_token {
            builder = builder.header("Authorization", token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let transport_error = |source| BlueCatError::Transport {
            operation: request.operation.to_string(),
            source,
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(ApiResponse { status, body })
    }
}

/// Turn a non-2xx response into an `Api` error
pub fn check_status(operation: &str, response: ApiResponse) -> Result<String, BlueCatError> {
    if response.is_success() {
        return Ok(response.body);
    }

    warn!("{} failed with status {}", operation, response.status);
    Err(BlueCatError::Api {
        operation: operation.to_string(),
        status: response.status,
        body: response.body,
    })
}

/// Decode a JSON body into a record or a list of records
pub fn decode_json<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T, BlueCatError> {
    serde_json::from_str(body).map_err(|source| BlueCatError::Decode {
        operation: operation.to_string(),
        source,
    })
}

/// Strip one pair of surrounding double quotes from a scalar body
///
/// Some endpoints answer `"192.168.1.5"`, others `192.168.1.5`; both decode
/// to `192.168.1.5`.
pub fn decode_scalar(body: &str) -> String {
    let body = body.strip_prefix('"').unwrap_or(body);
    let body = body.strip_suffix('"').unwrap_or(body);
    body.to_string()
}

/// Decode a scalar body as a JSON number or boolean
pub fn decode_typed_scalar<T: DeserializeOwned>(
    operation: &str,
    body: &str,
) -> Result<T, BlueCatError> {
    decode_json(operation, decode_scalar(body.trim()).trim())
}

/// Reject a mutation whose successful response reports an error in the body
pub fn check_rejected(operation: &str, body: &str) -> Result<(), BlueCatError> {
    if body.contains(REJECTION_MARKER) {
        warn!("{} rejected by server", operation);
        return Err(BlueCatError::Rejected {
            operation: operation.to_string(),
            message: decode_scalar(body.trim()),
        });
    }
    Ok(())
}
