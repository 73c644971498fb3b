// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use staycal_api::ApiError;

/// Errors surfaced by the conflict core.
///
/// Every variant is a recoverable state: nothing here crashes the caller,
/// and the flow records each failure in its observable state so a UI can
/// always render it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Malformed local input. Never reaches the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// Transport-level failure after the retry policy is exhausted.
    /// Recoverable; callers should offer a retry affordance.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the request or returned an unusable response.
    /// Not retried automatically; the server message is kept verbatim.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message.
        message: String,
    },

    /// A submit or dismiss is already in flight for this conflict.
    /// Surfaced immediately so double-clicks cannot duplicate submissions.
    #[error("a submission is already in flight for conflict {conflict_id}")]
    Busy {
        /// The conflict with an in-flight submission.
        conflict_id: String,
    },
}

impl From<ApiError> for FlowError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Transport(message) => Self::Network(message),
            ApiError::Status { status, message } => Self::Server { status, message },
            ApiError::InvalidResponse(message) => Self::Server {
                status: 200,
                message: format!("malformed response: {message}"),
            },
            ApiError::Config(message) => Self::Validation(message),
            other => Self::Network(other.to_string()),
        }
    }
}
