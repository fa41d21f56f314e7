//! BlueCat API client
//!
//! Implements session establishment and the request executor shared by all
//! operations. The operations themselves live in `crate::api`, one module per
//! area, as inherent methods on `BlueCatClient`.

use crate::common::{
    ApiRequest, HttpClient, Query, check_rejected, check_status, decode_json, decode_scalar,
    decode_typed_scalar,
};
use crate::config::ClientConfig;
use crate::error::BlueCatError;
use crate::session::{Session, endpoint_url, extract_token};
use crate::transport_trait::Transport;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// BlueCat API client bound to one authenticated session
///
/// Cheap to clone; clones share the transport and the session. The session
/// is read-only, so one client can serve many tasks at once.
#[derive(Clone)]
pub struct BlueCatClient {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl fmt::Debug for BlueCatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueCatClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl BlueCatClient {
    /// Log in with the default configuration (HTTPS, certificates verified)
    ///
    /// # Arguments
    /// * `server` - Address Manager host, e.g. "bam.example.com"
    /// * `username` - API user
    /// * `password` - API user's password
    pub async fn login(server: &str, username: &str, password: &str) -> Result<Self, BlueCatError> {
        Self::login_with_config(&ClientConfig::default(), server, username, password).await
    }

    /// Log in using an explicit configuration
    pub async fn login_with_config(
        config: &ClientConfig,
        server: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, BlueCatError> {
        let transport = Arc::new(HttpClient::new(config.build_http_client()?));
        Self::login_with_transport(transport, config, server, username, password).await
    }

    /// Log in over a caller-supplied transport
    ///
    /// Credentials travel as URL-encoded query parameters of an
    /// unauthenticated GET; the session token is cut out of the textual
    /// response.
    ///
    /// # Returns
    /// * `Ok(BlueCatClient)` - Client holding the new session
    /// * `Err(BlueCatError::Transport)` - The login request did not complete
    /// * `Err(BlueCatError::Authentication)` - Login refused or no token in the response
    pub async fn login_with_transport(
        transport: Arc<dyn Transport>,
        config: &ClientConfig,
        server: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, BlueCatError> {
        let request = ApiRequest {
            operation: "login",
            method: Method::GET,
            url: endpoint_url(config.scheme, server, &config.normalized_api_path(), "login"),
            query: Query::new()
                .param("username", username)
                .param("password", password),
            auth_token: None,
            body: None,
        };

        debug!("Logging in to BlueCat server {} as {}", server, username);
        let response = transport.send(request).await?;

        if !response.is_success() {
            return Err(BlueCatError::Authentication(format!(
                "login returned {} - {}",
                response.status, response.body
            )));
        }

        let token = extract_token(&response.body)?;
        debug!("Session established with {}", server);

        Ok(Self {
            transport,
            session: Session::new(config, server, token),
        })
    }

    /// Resume a session whose token was obtained earlier
    pub fn from_session(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    /// The session this client is bound to
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// End the session on the server
    ///
    /// Returns the server's confirmation message. The client must not be
    /// used afterwards; every further call fails authentication.
    pub async fn logout(&self) -> Result<String, BlueCatError> {
        debug!("Logging out of BlueCat server {}", self.session.server());
        self.get_scalar("logout", Query::new()).await
    }

    /// Execute one request and return the body of a 2xx response
    async fn execute(
        &self,
        endpoint: &'static str,
        method: Method,
        query: Query,
        body: Option<serde_json::Value>,
    ) -> Result<String, BlueCatError> {
        let request = ApiRequest {
            operation: endpoint,
            method,
            url: self.session.endpoint_url(endpoint),
            query,
            auth_token: Some(self.session.token().to_string()),
            body,
        };

        let response = self.transport.send(request).await?;
        check_status(endpoint, response)
    }

    /// GET an endpoint and decode a JSON record or list of records
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: Query,
    ) -> Result<T, BlueCatError> {
        let body = self.execute(endpoint, Method::GET, query, None).await?;
        decode_json(endpoint, &body)
    }

    /// GET an endpoint that answers with a bare string
    pub(crate) async fn get_scalar(
        &self,
        endpoint: &'static str,
        query: Query,
    ) -> Result<String, BlueCatError> {
        let body = self.execute(endpoint, Method::GET, query, None).await?;
        Ok(decode_scalar(&body))
    }

    /// GET an endpoint that answers with a bare number or boolean
    pub(crate) async fn get_typed_scalar<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: Query,
    ) -> Result<T, BlueCatError> {
        let body = self.execute(endpoint, Method::GET, query, None).await?;
        decode_typed_scalar(endpoint, &body)
    }

    /// Run a mutation and return its body once checked for rejection
    pub(crate) async fn mutate(
        &self,
        endpoint: &'static str,
        method: Method,
        query: Query,
        body: Option<serde_json::Value>,
    ) -> Result<String, BlueCatError> {
        let body = self.execute(endpoint, method, query, body).await?;
        check_rejected(endpoint, &body)?;
        Ok(body)
    }

    /// Run a mutation that answers with the id of the object it created
    pub(crate) async fn mutate_for_id(
        &self,
        endpoint: &'static str,
        query: Query,
        body: Option<serde_json::Value>,
    ) -> Result<i64, BlueCatError> {
        let body = self.mutate(endpoint, Method::POST, query, body).await?;
        decode_typed_scalar(endpoint, &body)
    }
}
