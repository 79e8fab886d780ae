//! Authentication session lifecycle.
//!
//! The [`SessionManager`] is the only component allowed to touch the bearer
//! token or the verified identity. It persists the token through the
//! key-value store, installs it on the outbound API client, and walks the
//! state machine
//!
//! ```text
//! Uninitialized ──(token found)──▶ Verifying ──(probe ok)──▶ LoggedIn
//!       │                             │
//!       └──(no token)──▶ LoggedOut ◀──┴──(probe fails / logout / expiry)
//! ```
//!
//! A token's validity cannot be checked locally; `verify` confirms it by
//! invoking the protected stats endpoint and absorbs every failure into a
//! logged-out transition.

use crate::{
    api::RemoteApi,
    error::ApiError,
    store::{KEY_TOKEN, KeyValueStore},
    types::{Role, UserInfo},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Verifying,
    LoggedOut,
    LoggedIn(UserInfo),
}

pub struct SessionManager {
    store: KeyValueStore,
    state: SessionState,
}

impl SessionManager {
    pub fn new(store: KeyValueStore) -> Self {
        Self {
            store,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match &self.state {
            SessionState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Reads any persisted token. Absent token transitions straight to
    /// `LoggedOut`; a present token is installed on the client and then
    /// confirmed through [`verify`](Self::verify).
    pub async fn initialize(&mut self, api: &mut RemoteApi) -> Result<(), ApiError> {
        match self.store.get::<String>(KEY_TOKEN).await? {
            Some(token) => {
                api.set_token(token);
                self.state = SessionState::Verifying;
                self.verify(api).await;
            }
            None => {
                self.state = SessionState::LoggedOut;
            }
        }
        Ok(())
    }

    /// Confirms the installed token against the protected stats endpoint.
    ///
    /// Success stores the returned identity and enters `LoggedIn`. Any
    /// failure, including a 2xx response that carries no identity, clears
    /// the token and enters `LoggedOut`. Never propagates an error.
    pub async fn verify(&mut self, api: &mut RemoteApi) {
        match api.stats().await {
            Ok(stats) => match stats.user_info {
                Some(user) => {
                    self.state = SessionState::LoggedIn(user);
                }
                None => {
                    self.clear(api).await;
                }
            },
            Err(_) => {
                self.clear(api).await;
            }
        }
    }

    /// Requests a new token for the username/role pair and verifies it.
    ///
    /// A rejected token request propagates as [`ApiError::Auth`] with the
    /// session remaining logged out. A granted token that then fails the
    /// identity probe also surfaces as an auth failure, after the clearing
    /// transition has already happened.
    pub async fn login(
        &mut self,
        api: &mut RemoteApi,
        username: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        let token = api.request_token(username, role).await?;

        api.set_token(token.access_token.clone());
        self.store.set(KEY_TOKEN, &token.access_token).await?;
        self.state = SessionState::Verifying;

        self.verify(api).await;
        if !self.is_authenticated() {
            return Err(ApiError::Auth(
                "token was granted but the identity probe failed".to_string(),
            ));
        }
        Ok(())
    }

    /// Clears the token from persistence and from the client, drops the
    /// identity, and enters `LoggedOut`. Always succeeds; has no network
    /// effect beyond the client-side clear.
    pub async fn logout(&mut self, api: &mut RemoteApi) {
        self.clear(api).await;
    }

    /// Reacts to an authorization rejection reported by any downstream call:
    /// same clearing behavior as `logout`, invoked centrally so the failure
    /// can be re-surfaced as a session expiry rather than a generic error.
    pub async fn expire(&mut self, api: &mut RemoteApi) {
        self.clear(api).await;
    }

    async fn clear(&mut self, api: &mut RemoteApi) {
        api.clear_token();
        // Best effort; a failed file removal must not keep the session alive.
        let _ = self.store.remove(KEY_TOKEN).await;
        self.state = SessionState::LoggedOut;
    }
}
