//! CLI subcommands.

pub mod config;
pub mod report;
pub mod sign;

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The system clock is before the Unix epoch.
    #[error("System clock is not usable for signing")]
    Clock,

    /// The signing secret cannot be used as an HMAC key.
    #[error("Signing secret is not a usable key")]
    SigningKey,

    /// Request to the server failed.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server rejected the request with HTTP {0}")]
    Rejected(u16),

    /// Failed to serialize the request body.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Server configuration is invalid.
    #[error(transparent)]
    Config(#[from] iad_server::config::ConfigError),
}

/// Read `SLACK_SIGNING_SECRET`, loading `.env` first.
///
/// # Errors
///
/// Returns `MissingEnvVar` if the secret is unset or empty.
pub fn signing_secret_from_env() -> Result<secrecy::SecretString, CliError> {
    dotenvy::dotenv().ok();

    std::env::var("SLACK_SIGNING_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .map(secrecy::SecretString::from)
        .ok_or(CliError::MissingEnvVar("SLACK_SIGNING_SECRET"))
}
