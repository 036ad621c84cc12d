//! Resource collection fetches.

use tracing::debug;

use crate::client::BackendClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::Document;

impl BackendClient {
    /// Fetch every document of `resource`, following pagination.
    ///
    /// `params` are extra query parameters, e.g. `embedded`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorized`] when the backend rejects a
    /// pre-obtained token, or a refreshed login token.
    pub async fn get_all(
        &mut self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Document>> {
        let token = self.get_auth_token().await?;
        let result = endpoints::get_all(
            &self.http,
            &self.base_url,
            &token,
            resource,
            params,
            self.page_size,
            self.max_retries,
        )
        .await;

        match result {
            Err(ClientError::ApiError {
                status: 401, url, ..
            }) if !self.is_static_token_auth() => {
                debug!(resource, "Token rejected, logging in again");
                self.token_manager.clear_token();
                let token = self.login().await?;
                endpoints::get_all(
                    &self.http,
                    &self.base_url,
                    &token,
                    resource,
                    params,
                    self.page_size,
                    self.max_retries,
                )
                .await
                .map_err(|e| match e {
                    ClientError::ApiError { status: 401, .. } => ClientError::Unauthorized(url),
                    other => other,
                })
            }
            Err(ClientError::ApiError {
                status: 401, url, ..
            }) => Err(ClientError::Unauthorized(url)),
            other => other,
        }
    }
}
