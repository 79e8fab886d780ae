//! # API Module
//!
//! HTTP client for the remote movie API. The [`RemoteApi`] struct owns the
//! reqwest client, the configured base URL, and the currently installed
//! bearer token, and translates HTTP status codes into the crate's error
//! taxonomy in one place:
//!
//! - `401` → [`ApiError::SessionExpired`] (the session layer reacts to this
//!   by clearing the stored token)
//! - `404` → [`ApiError::NotFound`]
//! - any other non-2xx → [`ApiError::Remote`] carrying the server's `detail`
//!   message when one is present
//! - requests that never complete → [`ApiError::Transport`]
//!
//! No endpoint retries automatically; the token is short-lived and expiry is
//! handled by re-authenticating, not by retrying.
//!
//! ## Endpoints
//!
//! Authentication and identity live in [`auth`], collection CRUD in
//! [`movies`]. The token grant is the one endpoint with its own error
//! mapping: a rejection there is an [`ApiError::Auth`], not a session
//! expiry, because no session existed yet.

pub mod auth;
pub mod movies;

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::{error::ApiError, types::ErrorBody};

/// Client for the remote movie API.
pub struct RemoteApi {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Installs the bearer token carried on every subsequent request.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request with the installed token and maps the response status
    /// into the error taxonomy. Success responses are returned untouched for
    /// the caller to deserialize.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::SessionExpired),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::Remote {
                status: status.as_u16(),
                message: remote_message(response, status).await,
            }),
        }
    }
}

async fn remote_message(response: Response, status: StatusCode) -> String {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| format!("request failed with status {}", status))
}
