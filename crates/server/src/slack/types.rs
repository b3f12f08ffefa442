//! Slack Block Kit types for the provisioning dialog and result messages.
//!
//! These types represent the subset of Slack Block Kit
//! needed for a modal with input fields and for plain section messages.
//!
//! See: <https://api.slack.com/block-kit>

use serde::{Deserialize, Serialize};

/// Block Kit block types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section block with text.
    Section { text: Text },
    /// Input block holding one interactive element.
    Input {
        element: InputElement,
        label: PlainText,
    },
}

/// Text object types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Markdown text (supports formatting).
    Mrkdwn { text: String },
}

impl Text {
    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    /// The raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let Self::Mrkdwn { text } = self;
        text
    }
}

/// Plain text object (titles, labels, placeholders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    /// Create a new plain text object.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: true,
        }
    }
}

/// Interactive elements allowed inside an input block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputElement {
    /// Single-line text field.
    PlainTextInput {
        action_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<PlainText>,
    },
    /// Radio button group.
    RadioButtons {
        action_id: String,
        options: Vec<OptionObject>,
    },
}

impl InputElement {
    /// The element's action id.
    #[must_use]
    pub fn action_id(&self) -> &str {
        match self {
            Self::PlainTextInput { action_id, .. } | Self::RadioButtons { action_id, .. } => {
                action_id
            }
        }
    }
}

/// One selectable option of a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionObject {
    pub text: PlainText,
    pub value: String,
}

/// Modal view definition passed to `views.open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Always `modal`.
    #[serde(rename = "type")]
    pub view_type: &'static str,
    pub title: PlainText,
    pub submit: PlainText,
    pub close: PlainText,
    pub blocks: Vec<Block>,
}

/// A `views.open` call: which trigger to answer and what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenViewRequest {
    /// Trigger id from the slash command (expires after a few seconds).
    pub trigger_id: String,
    /// Modal to open.
    pub view: View,
}

/// A `chat.postMessage` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Channel name or id to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Envelope every Slack Web API method responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Error code if not ok.
    #[serde(default)]
    pub error: Option<String>,
    /// Non-fatal warning.
    #[serde(default)]
    pub warning: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_section_serializes_with_type_tag() {
        let block = Block::Section {
            text: Text::mrkdwn("*hello*"),
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "*hello*"}})
        );
    }

    #[test]
    fn test_plain_text_input_omits_missing_placeholder() {
        let element = InputElement::PlainTextInput {
            action_id: "field".to_string(),
            placeholder: None,
        };

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value, json!({"type": "plain_text_input", "action_id": "field"}));
    }

    #[test]
    fn test_radio_buttons_serialization() {
        let element = InputElement::RadioButtons {
            action_id: "pick".to_string(),
            options: vec![OptionObject {
                text: PlainText::new("One"),
                value: "one".to_string(),
            }],
        };

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "radio_buttons");
        assert_eq!(value["options"][0]["text"]["type"], "plain_text");
        assert_eq!(value["options"][0]["value"], "one");
    }

    #[test]
    fn test_api_response_error() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap();
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("invalid_auth"));
        assert!(response.warning.is_none());
    }

    #[test]
    fn test_text_as_str() {
        assert_eq!(Text::mrkdwn("*b*").as_str(), "*b*");
    }
}
