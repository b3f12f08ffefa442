//! Slack-related errors.

use thiserror::Error;

/// Errors that can occur when calling the Slack Web API.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed before a response arrived.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// Slack answered with a non-success HTTP status.
    #[error("Slack returned HTTP {0}")]
    Status(u16),

    /// Slack is rate limiting us.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Failed to parse response.
    #[error("Slack response error: {0}")]
    Response(String),

    /// Slack API returned `ok: false`.
    #[error("Slack API error: {0}")]
    Api(String),

    /// Failed to serialize a view or blocks for a form field.
    #[error("Failed to serialize Slack payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SlackError {
    /// Whether another attempt may succeed.
    ///
    /// Transport failures, 5xx responses and rate limits are transient.
    /// An `ok: false` envelope (bad token, expired trigger id) is not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) | Self::RateLimited(_) => true,
            Self::Status(status) => *status >= 500,
            Self::Response(_) | Self::Api(_) | Self::Serialize(_) => false,
        }
    }
}
