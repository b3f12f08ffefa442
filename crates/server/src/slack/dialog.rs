//! The provisioning dialog opened by the `/iad` slash command.
//!
//! The view is fixed. Field contents are validated by Slack's UI and by the
//! provisioning service, never here.

use iad_core::AwsRegion;

use super::types::{Block, InputElement, OpenViewRequest, OptionObject, PlainText, View};

/// Action id of the AWS access key id field.
pub const ACCESS_KEY_ID_ACTION: &str = "aws_accesskeyid";
/// Action id of the AWS secret key field.
pub const SECRET_KEY_ACTION: &str = "aws_secretkey";
/// Action id of the AWS region radio group.
pub const REGION_ACTION: &str = "radio_buttons-action";
/// Action id of the Lucid authorization code field.
pub const LUCID_AUTH_CODE_ACTION: &str = "lucid_auth_code";

/// Build the `views.open` request for a slash command's trigger.
#[must_use]
pub fn build_dialog(trigger_id: &str) -> OpenViewRequest {
    OpenViewRequest {
        trigger_id: trigger_id.to_owned(),
        view: build_view(),
    }
}

/// Build the provisioning modal.
#[must_use]
pub fn build_view() -> View {
    View {
        view_type: "modal",
        title: PlainText::new("Infrastructure as Design"),
        submit: PlainText::new("Submit"),
        close: PlainText::new("Cancel"),
        blocks: vec![
            text_input(
                ACCESS_KEY_ID_ACTION,
                "AWS AccessKeyId",
                "Please enter AWS AccessKeyId",
            ),
            text_input(
                SECRET_KEY_ACTION,
                "AWS SecretKey",
                "Please enter AWS SecretKey",
            ),
            Block::Input {
                element: InputElement::RadioButtons {
                    action_id: REGION_ACTION.to_string(),
                    options: AwsRegion::ALL
                        .into_iter()
                        .map(|region| OptionObject {
                            text: PlainText::new(region.label()),
                            value: region.label().to_string(),
                        })
                        .collect(),
                },
                label: PlainText::new("AWS Region"),
            },
            text_input(
                LUCID_AUTH_CODE_ACTION,
                "AUTHORIZATION CODE of Lucid",
                "Please enter your AUTHORIZATION CODE of Lucid",
            ),
        ],
    }
}

fn text_input(action_id: &str, label: &str, placeholder: &str) -> Block {
    Block::Input {
        element: InputElement::PlainTextInput {
            action_id: action_id.to_string(),
            placeholder: Some(PlainText::new(placeholder)),
        },
        label: PlainText::new(label),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn action_ids(view: &View) -> Vec<&str> {
        view.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Input { element, .. } => Some(element.action_id()),
                Block::Section { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_dialog_has_four_inputs_in_order() {
        let request = build_dialog("T1");

        assert_eq!(request.view.blocks.len(), 4);
        assert_eq!(
            action_ids(&request.view),
            [
                ACCESS_KEY_ID_ACTION,
                SECRET_KEY_ACTION,
                REGION_ACTION,
                LUCID_AUTH_CODE_ACTION
            ]
        );
    }

    #[test]
    fn test_dialog_independent_of_trigger_id() {
        for trigger_id in ["T1", "", "13345224609.738474920.8088930838d88f008e0"] {
            let request = build_dialog(trigger_id);
            assert_eq!(request.trigger_id, trigger_id);
            assert_eq!(request.view, build_view());
        }
    }

    #[test]
    fn test_region_options() {
        let view = build_view();
        let Some(Block::Input {
            element: InputElement::RadioButtons { options, .. },
            ..
        }) = view.blocks.get(2)
        else {
            panic!("Expected radio buttons as third block");
        };

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "US West (Northern California) Region",
                "US East (Ohio) Region",
                "US West (Oregon) Region"
            ]
        );
    }

    #[test]
    fn test_view_json_shape() {
        let value = serde_json::to_value(build_view()).unwrap();

        assert_eq!(value["type"], "modal");
        assert_eq!(value["title"]["text"], "Infrastructure as Design");
        assert_eq!(value["submit"]["text"], "Submit");
        assert_eq!(value["close"]["text"], "Cancel");
        assert_eq!(value["blocks"][0]["type"], "input");
        assert_eq!(value["blocks"][0]["element"]["type"], "plain_text_input");
        assert_eq!(value["blocks"][0]["element"]["action_id"], "aws_accesskeyid");
        assert_eq!(value["blocks"][2]["element"]["type"], "radio_buttons");
        assert_eq!(value["blocks"][3]["label"]["text"], "AUTHORIZATION CODE of Lucid");
    }
}
