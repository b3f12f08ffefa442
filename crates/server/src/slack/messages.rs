//! Slack message builders for provisioning results.
//!
//! A result is either a success or a failure; there is no partial-success
//! message. A run that created only one of the two resources is a failure.

use iad_core::ProvisioningResult;

use super::types::{Block, OutboundMessage, Text};

/// Text of the success message.
pub const SUCCESS_TEXT: &str = "*SUCCESS* \nA new infrastructure has been created successfully!";

/// Heading of the failure message, followed by the error summary.
pub const FAILURE_HEADING: &str = "*ERROR* \nFailed to create infrastructure!";

/// Build the channel message reporting a provisioning result.
#[must_use]
pub fn format_result(result: &ProvisioningResult, channel: &str) -> OutboundMessage {
    let blocks = if result.is_success() {
        build_success_message()
    } else {
        build_error_message(&result.error_summary())
    };

    OutboundMessage {
        channel: channel.to_owned(),
        blocks,
    }
}

/// Build the success message.
#[must_use]
pub fn build_success_message() -> Vec<Block> {
    vec![Block::Section {
        text: Text::mrkdwn(SUCCESS_TEXT),
    }]
}

/// Build the failure message for an `error: message` summary.
#[must_use]
pub fn build_error_message(summary: &str) -> Vec<Block> {
    vec![Block::Section {
        text: Text::mrkdwn(format!("{FAILURE_HEADING}\n{summary}")),
    }]
}
