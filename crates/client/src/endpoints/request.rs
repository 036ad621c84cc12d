//! Retry helper for HTTP requests with exponential backoff.
//!
//! Transient statuses (429, 502, 503, 504) are retried with a 2^attempt
//! second backoff. Every other non-2xx status becomes
//! [`ClientError::ApiError`] straight away.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::EveError;

/// Sends an HTTP request, retrying transient failures.
///
/// `max_retries` counts retries on top of the first attempt, so `0` means a
/// single attempt.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all attempts hit a
/// retryable status. Transport errors propagate as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                let response = builder.send().await?;
                return check_status(response).await;
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                status,
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_secs,
                "Transient backend error, retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        } else {
            debug!(status, attempts = attempt + 1, "Max retries exhausted");
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass successful responses through, turn the rest into `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<EveError>(&body) {
        Ok(eve) => eve.message(),
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
