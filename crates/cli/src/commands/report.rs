//! Provisioning result delivery.
//!
//! The provisioning service (or an operator) reports a finished run by
//! posting a signed `ProvisioningResult` to the server's `/interactive`
//! endpoint, which relays it to Slack.
//!
//! # Environment Variables
//!
//! - `SLACK_SIGNING_SECRET` - Slack app signing secret shared with the server

use iad_core::ProvisioningResult;
use iad_server::slack::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use reqwest::header::CONTENT_TYPE;

use super::sign::signed_headers;
use super::{CliError, signing_secret_from_env};

/// Sign and deliver `result` to `{base_url}/interactive`.
///
/// # Errors
///
/// Returns an error if the secret is missing, the request fails, or the
/// server does not answer with a success status.
pub async fn report(base_url: &str, result: &ProvisioningResult) -> Result<(), CliError> {
    let secret = signing_secret_from_env()?;
    let body = serde_json::to_vec(result)?;
    let headers = signed_headers(&secret, &body, None)?;
    let url = interactive_url(base_url);

    tracing::info!(
        url = %url,
        success = result.is_success(),
        "Delivering provisioning result"
    );

    let response = reqwest::Client::new()
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(TIMESTAMP_HEADER, headers.timestamp)
        .header(SIGNATURE_HEADER, headers.signature)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Rejected(status.as_u16()));
    }

    tracing::info!("Result accepted");
    Ok(())
}

fn interactive_url(base_url: &str) -> String {
    format!("{}/interactive", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_url() {
        assert_eq!(
            interactive_url("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/interactive"
        );
        assert_eq!(
            interactive_url("https://iad.example.com/"),
            "https://iad.example.com/interactive"
        );
    }
}
