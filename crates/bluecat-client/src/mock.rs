//! Mock transport for unit testing
//!
//! This module provides a `Transport` that never touches the network. Tests
//! register a canned response per endpoint and inspect the requests the
//! client built, so every operation can be checked for endpoint, verb, query
//! order and headers without a running Address Manager.

use crate::common::{ApiRequest, ApiResponse};
use crate::error::BlueCatError;
use crate::transport_trait::Transport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock transport for testing
///
/// Clones share their state, so a test can keep one handle while the client
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    // Canned responses keyed by endpoint name
    responses: Arc<Mutex<HashMap<String, ApiResponse>>>,
    // Every request seen, in order
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Create a mock with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with the given status and body
    pub fn respond(&self, endpoint: &str, status: u16, body: impl Into<String>) {
        self.respond_with(
            endpoint,
            ApiResponse {
                status,
                body: body.into(),
            },
        );
    }

    /// Answer `endpoint` with a prepared response
    pub fn respond_with(&self, endpoint: &str, response: ApiResponse) {
        lock(&self.responses).insert(endpoint.to_string(), response);
    }

    /// All requests sent so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Most recent request to `endpoint`
    pub fn last_request(&self, endpoint: &str) -> Option<ApiRequest> {
        lock(&self.requests)
            .iter()
            .rev()
            .find(|request| request.operation == endpoint)
            .cloned()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BlueCatError> {
        let response = lock(&self.responses)
            .get(request.operation)
            .cloned()
            .unwrap_or_else(|| ApiResponse {
                status: 404,
                body: format!("no canned response for {}", request.operation),
            });
        lock(&self.requests).push(request);
        Ok(response)
    }
}
