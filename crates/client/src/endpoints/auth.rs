//! Authentication endpoint.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{EveError, LoginResponse};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
}

/// Exchange credentials for a backend token.
///
/// With `generate` set the backend is asked to create a token for users
/// that do not have one yet. Returns `Ok(None)` when the backend accepted
/// the request but handed back no token.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
    generate: bool,
    max_retries: usize,
) -> Result<Option<String>> {
    debug!(username, generate, "Logging in to the backend");

    let url = format!("{}/login", base_url);
    let request = LoginRequest {
        username,
        password,
        action: generate.then_some("generate"),
    };
    let builder = client.post(&url).json(&request);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status: 401,
            message,
            ..
        }) => return Err(ClientError::AuthFailed(message)),
        Err(e) => return Err(e),
    };

    let body: serde_json::Value = response.json().await?;

    if let Ok(eve) = serde_json::from_value::<EveError>(body.clone())
        && eve.is_error()
    {
        return Err(ClientError::AuthFailed(eve.message()));
    }

    let login: LoginResponse = serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Malformed login response: {}", e)))?;

    Ok(login.token.filter(|t| !t.is_empty()))
}
