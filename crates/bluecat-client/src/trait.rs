//! Transport trait for mocking
//!
//! This trait abstracts the HTTP round trip so `BlueCatClient` can run
//! against a real server (`HttpClient`) or a canned one (`MockTransport`).
//! The client builds every `ApiRequest` itself; a transport only executes it.

use crate::common::{ApiRequest, ApiResponse};
use crate::error::BlueCatError;

/// Executes one API request
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return status and body.
    ///
    /// Only transport-level failures are errors here; status codes are
    /// interpreted by the caller.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BlueCatError>;
}
