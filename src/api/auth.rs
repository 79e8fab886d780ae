use crate::{
    api::RemoteApi,
    error::ApiError,
    types::{ErrorBody, Role, StatsSummary, TokenRequest, TokenResponse},
};

impl RemoteApi {
    /// Requests a fresh bearer token for the given username/role pair.
    ///
    /// The grant endpoint gets its own error mapping: any rejection here is
    /// an [`ApiError::Auth`], never a session expiry, and the request is sent
    /// without a bearer header so a stale stored token cannot interfere with
    /// re-authentication.
    ///
    /// The returned token is short-lived (on the order of a minute) and must
    /// be treated as perishable; callers handle expiry by re-authenticating.
    pub async fn request_token(
        &self,
        username: &str,
        role: Role,
    ) -> Result<TokenResponse, ApiError> {
        let body = TokenRequest {
            username: username.to_string(),
            role,
        };

        let response = self
            .http
            .post(self.url("/auth/token"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| format!("token request rejected with status {}", status));
            return Err(ApiError::Auth(message));
        }

        Ok(response.json::<TokenResponse>().await?)
    }

    /// Enumerates the roles the backend accepts at login.
    pub async fn roles(&self) -> Result<Vec<String>, ApiError> {
        let response = self.send(self.http.get(self.url("/auth/roles"))).await?;
        Ok(response.json::<Vec<String>>().await?)
    }

    /// Fetches aggregate collection stats plus the authenticated identity.
    ///
    /// This is the protected probe used to confirm that an installed token
    /// is still valid: the token cannot be verified locally, only by the
    /// server accepting it here.
    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        let response = self.send(self.http.get(self.url("/movies/stats"))).await?;
        Ok(response.json::<StatsSummary>().await?)
    }
}
