//! Slack webhook handlers.
//!
//! Both endpoints follow the same path: capture the raw body, verify the
//! signature, build the Slack payload, hand the API call to a background
//! task and acknowledge with an empty `200` right away. Slack treats a slow
//! or failed acknowledgement as a failed delivery, so the response never
//! waits on the outbound call.

use std::future::Future;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use iad_core::ProvisioningResult;
use secrecy::SecretString;
use tracing::{Instrument, Span, debug, error, info, instrument, warn};

use crate::error::AppError;
use crate::slack::signature::unix_now;
use crate::slack::{self, SlackError};
use crate::state::AppState;

/// Create Slack webhook routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/iad", post(handle_command))
        .route("/interactive", post(handle_result))
}

/// Fields of a slash command delivery this service reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    /// Text typed after the command.
    pub text: String,
    /// Trigger id for opening a modal.
    pub trigger_id: Option<String>,
    /// Slack user id of the invoking user.
    pub user_id: Option<String>,
}

impl SlashCommand {
    /// Parse a form-encoded slash command body.
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        let mut command = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "text" => command.text = value.into_owned(),
                "trigger_id" => command.trigger_id = Some(value.into_owned()),
                "user_id" => command.user_id = Some(value.into_owned()),
                _ => {}
            }
        }
        command
    }
}

/// Handle the `/iad` slash command by opening the provisioning dialog.
#[instrument(skip(state, headers, body))]
async fn handle_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    verify(state.signing_secret(), &headers, &body, unix_now())?;

    let command = SlashCommand::parse(&body);
    let trigger_id = command
        .trigger_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing trigger_id".into()))?;

    debug!(
        text = %command.text,
        user_id = ?command.user_id,
        "Slash command received"
    );

    let request = slack::build_dialog(&trigger_id);
    let client = state.slack().clone();
    dispatch("views.open", async move { client.open_view(&request).await });

    Ok(StatusCode::OK)
}

/// Handle a provisioning result by posting it to the result channel.
///
/// Accepts the result as a JSON body, or as a form-encoded `payload` field
/// holding the same JSON.
#[instrument(skip(state, headers, body))]
async fn handle_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    verify(state.signing_secret(), &headers, &body, unix_now())?;

    let result = parse_result(&headers, &body)?;

    info!(
        git_repo_created = result.git_repo_created,
        jenkins_pipeline_created = result.jenkins_pipeline_created,
        "Provisioning result received"
    );

    let message = slack::format_result(&result, state.result_channel());
    let client = state.slack().clone();
    dispatch("chat.postMessage", async move {
        client.post_message(&message).await
    });

    Ok(StatusCode::OK)
}

/// Reject the request unless Slack signed it at around `now`.
///
/// A clock before the Unix epoch is a server fault.
fn verify(
    signing_secret: &SecretString,
    headers: &HeaderMap,
    body: &[u8],
    now: Option<i64>,
) -> Result<(), AppError> {
    let now =
        now.ok_or_else(|| AppError::Internal("System clock is before the Unix epoch".into()))?;

    if slack::is_verified_at(headers, body, signing_secret, now) {
        debug!("Slack signature verified");
        Ok(())
    } else {
        warn!("Slack signature verification failed");
        Err(AppError::Unverified)
    }
}

/// Decode a provisioning result from a JSON or form-encoded body.
fn parse_result(headers: &HeaderMap, body: &[u8]) -> Result<ProvisioningResult, AppError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        return serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid result JSON: {e}")));
    }

    let payload = url::form_urlencoded::parse(body)
        .find(|(key, _)| key == "payload")
        .map(|(_, value)| value)
        .ok_or_else(|| AppError::BadRequest("Missing payload field".into()))?;

    serde_json::from_str(&payload)
        .map_err(|e| AppError::BadRequest(format!("Invalid result payload: {e}")))
}

/// Run a Slack API call in the background and log its outcome.
fn dispatch<F>(method: &'static str, call: F)
where
    F: Future<Output = Result<(), SlackError>> + Send + 'static,
{
    tokio::spawn(
        async move {
            match call.await {
                Ok(()) => info!(method, "Slack call delivered"),
                Err(e) => error!(method, error = %e, "Slack call failed"),
            }
        }
        .instrument(Span::current()),
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_verify_without_clock_is_internal_error() {
        let secret = SecretString::from("8f742231b10e8888abcd99yyyzzz85a5");
        let result = verify(&secret, &HeaderMap::new(), b"", None);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_verify_rejects_unsigned_request() {
        let secret = SecretString::from("8f742231b10e8888abcd99yyyzzz85a5");
        let result = verify(&secret, &HeaderMap::new(), b"", unix_now());
        assert!(matches!(result, Err(AppError::Unverified)));
    }

    #[test]
    fn test_parse_slash_command() {
        let body = b"token=abc&command=%2Fiad&text=hello+world&user_id=U123&trigger_id=T1";
        let command = SlashCommand::parse(body);

        assert_eq!(command.text, "hello world");
        assert_eq!(command.trigger_id.as_deref(), Some("T1"));
        assert_eq!(command.user_id.as_deref(), Some("U123"));
    }

    #[test]
    fn test_parse_slash_command_missing_fields() {
        let command = SlashCommand::parse(b"");
        assert_eq!(command, SlashCommand::default());
    }

    #[test]
    fn test_parse_result_json() {
        let body = br#"{"gitRepoCreated":true,"jenkinsPipelineCreated":true}"#;
        let result = parse_result(&json_headers(), body).unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_parse_result_json_with_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let body = br#"{"gitRepoCreated":false,"jenkinsPipelineCreated":true,"error":"E","message":"M"}"#;

        let result = parse_result(&headers, body).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.error_summary(), "E: M");
    }

    #[test]
    fn test_parse_result_form_payload() {
        let body = b"payload=%7B%22gitRepoCreated%22%3Atrue%2C%22jenkinsPipelineCreated%22%3Afalse%7D";
        let result = parse_result(&HeaderMap::new(), body).unwrap();
        assert!(result.git_repo_created);
        assert!(!result.jenkins_pipeline_created);
    }

    #[test]
    fn test_parse_result_rejects_garbage() {
        assert!(matches!(
            parse_result(&json_headers(), b"not json"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_result(&HeaderMap::new(), b"other=1"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_result(&HeaderMap::new(), b"payload=%7B"),
            Err(AppError::BadRequest(_))
        ));
    }
}
