//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::ServerConfig;
use crate::slack::SlackClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    slack: SlackClient,
}

impl AppState {
    /// Create the application state and its Slack client from configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let slack = SlackClient::new(
            config.slack.access_token.clone(),
            config.slack.api_base(),
        );
        Self::with_slack_client(config, slack)
    }

    /// Create the application state around an existing Slack client.
    #[must_use]
    pub fn with_slack_client(config: ServerConfig, slack: SlackClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, slack }),
        }
    }

    /// Get a reference to the Slack API client.
    #[must_use]
    pub fn slack(&self) -> &SlackClient {
        &self.inner.slack
    }

    /// Get the signing secret used to verify webhooks.
    #[must_use]
    pub fn signing_secret(&self) -> &SecretString {
        &self.inner.config.slack.signing_secret
    }

    /// Get the channel provisioning results are posted to.
    #[must_use]
    pub fn result_channel(&self) -> &str {
        &self.inner.config.slack.result_channel
    }
}
