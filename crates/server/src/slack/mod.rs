//! Slack integration for the provisioning workflow.
//!
//! This module provides:
//! - Webhook signature verification ([`is_verified`])
//! - The provisioning dialog ([`build_dialog`])
//! - Result messages ([`format_result`])
//! - [`SlackClient`] for `views.open` and `chat.postMessage`
//! - Block Kit types
//!
//! # Flow
//!
//! 1. A user runs `/iad`; Slack posts the slash command to `/iad`
//! 2. The signature is verified and the dialog is opened with `views.open`
//! 3. The provisioning service later reports to `/interactive`
//! 4. The signature is verified and the result is posted to the channel

mod client;
pub mod dialog;
mod error;
mod messages;
mod retry;
pub mod signature;
mod types;

pub use client::{SLACK_API_BASE, SlackClient};
pub use dialog::{build_dialog, build_view};
pub use error::SlackError;
pub use messages::{
    FAILURE_HEADING, SUCCESS_TEXT, build_error_message, build_success_message, format_result,
};
pub use retry::{RetryPolicy, retry_with_backoff};
pub use signature::{compute_signature, is_verified, is_verified_at};
pub use types::{
    ApiResponse, Block, InputElement, OpenViewRequest, OptionObject, OutboundMessage, PlainText,
    Text, View,
};
