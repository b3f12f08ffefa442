//! Request signing.
//!
//! # Usage
//!
//! ```bash
//! iad-cli sign --body 'token=abc&trigger_id=T1'
//! iad-cli sign --body '{"gitRepoCreated":true}' --timestamp 1531420618
//! ```
//!
//! # Environment Variables
//!
//! - `SLACK_SIGNING_SECRET` - Slack app signing secret

use iad_server::slack::signature::{
    SIGNATURE_HEADER, TIMESTAMP_HEADER, compute_signature, unix_now,
};
use secrecy::SecretString;

use super::{CliError, signing_secret_from_env};

/// Timestamp and signature header values for a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `X-Slack-Request-Timestamp` value.
    pub timestamp: String,
    /// `X-Slack-Signature` value.
    pub signature: String,
}

/// Sign `body` at `timestamp`, or at the current time.
///
/// # Errors
///
/// Returns an error if no timestamp is given and the clock is unusable, or
/// if the secret is not a usable signing key.
pub fn signed_headers(
    secret: &SecretString,
    body: &[u8],
    timestamp: Option<i64>,
) -> Result<SignedHeaders, CliError> {
    let timestamp = timestamp.or_else(unix_now).ok_or(CliError::Clock)?.to_string();
    let signature = compute_signature(secret, &timestamp, body).ok_or(CliError::SigningKey)?;
    Ok(SignedHeaders {
        timestamp,
        signature,
    })
}

/// Print signature headers for `body`.
///
/// # Errors
///
/// Returns an error if the signing secret is not configured.
#[allow(clippy::print_stdout)] // Output is the command's result
pub fn sign(body: &str, timestamp: Option<i64>) -> Result<(), CliError> {
    let secret = signing_secret_from_env()?;
    let headers = signed_headers(&secret, body.as_bytes(), timestamp)?;

    println!("{TIMESTAMP_HEADER}: {}", headers.timestamp);
    println!("{SIGNATURE_HEADER}: {}", headers.signature);

    Ok(())
}
