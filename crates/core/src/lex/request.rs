use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque session state owned by the dialog manager. Echoed back untouched.
pub type SessionAttributes = BTreeMap<String, serde_json::Value>;

/// Inbound dialog code hook event.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_attributes: SessionAttributes,
    pub invocation_source: InvocationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotDetails>,
}

impl IntentRequest {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    pub fn is_dialog_code_hook(&self) -> bool {
        self.invocation_source == InvocationSource::DialogCodeHook
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BotDetails {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Which callback the dialog manager is making. Anything that is not the
/// mid-dialog validation hook is handled as fulfillment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
    #[serde(other)]
    Other,
}

/// Slot name to user-supplied value; `None` marks a slot the dialog manager
/// has not filled (or that was cleared for re-prompting).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Slots(BTreeMap<String, Option<String>>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.0.insert(name.into(), value.map(str::to_owned));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Nulls the slot's value, keeping the key so the dialog manager re-prompts.
    pub fn clear(&mut self, name: &str) {
        self.0.insert(name.to_owned(), None);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
