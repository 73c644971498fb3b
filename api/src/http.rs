// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication, per-call deadlines, and a
//! bounded retry for transport-class failures.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Base delay for exponential backoff; doubled on each retry.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// HTTP client for booking backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
    session: Session,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            config,
            session,
        })
    }

    /// Builds a request with the session's credentials applied.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.session.apply(self.client.request(method, url))
    }

    /// Executes a request, retrying transport-class failures with
    /// exponential backoff up to the configured attempt bound.
    ///
    /// Non-2xx responses are never retried; the server's message is
    /// surfaced verbatim in [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request ultimately fails or the server
    /// responds with a non-success status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            let Some(current) = req.try_clone() else {
                // Streaming bodies cannot be replayed; single attempt.
                return Self::check_status(req.send().await?).await;
            };

            match current.send().await {
                Ok(resp) => return Self::check_status(resp).await,
                Err(e) if is_transient(&e) && attempt < self.config.max_retries => {
                    let delay = RETRY_BASE_DELAY * 2u32.saturating_pow(attempt);
                    tracing::warn!(attempt, error = %e, ?delay, "transport failure, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(ApiError::Transport(e.to_string())),
            }
        }
    }

    /// Maps non-success statuses to [`ApiError::Status`], extracting the
    /// server message from the body when one is present.
    async fn check_status(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "unable to read response body".to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

/// Whether a transport error is worth retrying.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout()
}

/// Pulls a human-readable message out of an error body.
///
/// The backend wraps errors as `{"error": "..."}` or `{"message": "..."}`;
/// anything else is passed through as-is.
fn extract_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_prefers_error_field() {
        assert_eq!(
            extract_message(r#"{"error": "conflict already resolved"}"#),
            "conflict already resolved"
        );
        assert_eq!(
            extract_message(r#"{"message": "bad request"}"#),
            "bad request"
        );
        assert_eq!(extract_message("plain text"), "plain text");
    }
}
