use serde::{Deserialize, Serialize};

use super::request::{SessionAttributes, Slots};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ContentType {
    #[default]
    PlainText,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain(content: impl Into<String>) -> Self {
        Self { content_type: ContentType::PlainText, content: content.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot { intent_name: String, slots: Slots, slot_to_elicit: String, message: Message },
    Delegate { slots: Slots },
    #[serde(rename_all = "camelCase")]
    Close { fulfillment_state: FulfillmentState, message: Message },
}

impl DialogResponse {
    pub fn action_type(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

/// Asks the dialog manager to re-prompt the user for `slot_to_elicit`.
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Hands control back to the dialog manager to choose the next step.
pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse { session_attributes, dialog_action: DialogAction::Delegate { slots } }
}

/// Ends the conversation with a result.
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close { fulfillment_state, message },
    }
}
