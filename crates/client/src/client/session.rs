//! Client-level login and token helpers.
//!
//! # Invariants
//! - [`BackendClient::get_auth_token`] requires `&mut self` because it may
//!   trigger a login call
//! - Pre-obtained tokens never trigger a login
//! - Token generation is requested at most once per login, and only when
//!   `allow_generate_token` is set

use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::auth::AuthStrategy;
use crate::client::BackendClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl BackendClient {
    /// Make sure a token is available before the first resource fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the login is rejected.
    pub async fn authenticate(&mut self) -> Result<()> {
        if self.token_manager.is_static_token() {
            debug!("Using pre-obtained backend token");
            return Ok(());
        }
        self.login().await.map(|_| ())
    }

    /// Check if the client is using a pre-obtained token.
    pub fn is_static_token_auth(&self) -> bool {
        self.token_manager.is_static_token()
    }

    /// Login with username/password to get a token.
    ///
    /// When the backend returns no token and generation is allowed, the
    /// login is repeated once with `action=generate`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the strategy is not login based,
    /// if the credentials are rejected, or if no token could be obtained.
    pub async fn login(&mut self) -> Result<String> {
        let AuthStrategy::Login {
            username,
            password,
            allow_generate_token,
        } = self.token_manager.strategy()
        else {
            return Err(ClientError::AuthFailed(
                "Cannot login with a pre-obtained token".to_string(),
            ));
        };
        let allow_generate_token = *allow_generate_token;

        let mut token = endpoints::login(
            &self.http,
            &self.base_url,
            username,
            password.expose_secret(),
            false,
            self.max_retries,
        )
        .await?;

        if token.is_none() && allow_generate_token {
            debug!(username, "No token for user, asking the backend to generate one");
            token = endpoints::login(
                &self.http,
                &self.base_url,
                username,
                password.expose_secret(),
                true,
                self.max_retries,
            )
            .await?;
        }

        let Some(token) = token else {
            return Err(ClientError::AuthFailed(format!(
                "Backend returned no token for user '{}'",
                username
            )));
        };

        info!(username, "Authenticated with the backend");
        self.token_manager.set_token(token.clone());
        Ok(token)
    }

    /// Get the current token, logging in if necessary.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        if let Some(token) = self.token_manager.token() {
            return Ok(token.to_string());
        }
        self.login().await
    }
}
