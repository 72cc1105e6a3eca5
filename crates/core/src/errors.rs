use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("intent with name `{intent_name}` not supported")]
    UnsupportedIntent { intent_name: String },
    #[error("cannot fulfill with risk level {}", describe_risk_level(.value))]
    InvalidRiskLevel { value: Option<String> },
    #[error("malformed intent request: {0}")]
    MalformedRequest(String),
}

fn describe_risk_level(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("`{value}`"),
        None => "<missing>".to_owned(),
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("unprocessable request: {message}")]
    Unprocessable { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check the event payload and try again."
            }
            Self::Unprocessable { .. } => {
                "The request could not be fulfilled. Check the intent name and slot values."
            }
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::Unprocessable { correlation_id, .. } => correlation_id,
        }
    }
}

impl DialogError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let message = self.to_string();
        match self {
            Self::MalformedRequest(_) => InterfaceError::BadRequest { message, correlation_id },
            Self::UnsupportedIntent { .. } | Self::InvalidRiskLevel { .. } => {
                InterfaceError::Unprocessable { message, correlation_id }
            }
        }
    }
}

impl From<serde_json::Error> for DialogError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedRequest(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{DialogError, InterfaceError};

    #[test]
    fn unsupported_intent_names_the_intent() {
        let error = DialogError::UnsupportedIntent { intent_name: "orderFlowers".to_owned() };
        assert_eq!(error.to_string(), "intent with name `orderFlowers` not supported");
    }

    #[test]
    fn invalid_risk_level_describes_missing_value() {
        let error = DialogError::InvalidRiskLevel { value: None };
        assert_eq!(error.to_string(), "cannot fulfill with risk level <missing>");

        let error = DialogError::InvalidRiskLevel { value: Some("extreme".to_owned()) };
        assert_eq!(error.to_string(), "cannot fulfill with risk level `extreme`");
    }

    #[test]
    fn malformed_request_maps_to_bad_request_interface_error() {
        let interface = DialogError::MalformedRequest("missing field `currentIntent`".to_owned())
            .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(
            interface.user_message(),
            "The request could not be processed. Check the event payload and try again."
        );
    }

    #[test]
    fn unsupported_intent_maps_to_unprocessable() {
        let interface = DialogError::UnsupportedIntent { intent_name: "orderFlowers".to_owned() }
            .into_interface("req-2");

        assert!(matches!(interface, InterfaceError::Unprocessable { .. }));
        assert_eq!(interface.correlation_id(), "req-2");
        assert!(interface.to_string().contains("orderFlowers"));
    }

    #[test]
    fn invalid_risk_level_maps_to_unprocessable_naming_slot_values() {
        let interface = DialogError::InvalidRiskLevel { value: Some("yolo".to_owned()) }
            .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::Unprocessable { .. }));
        assert_eq!(interface.correlation_id(), "req-3");
        assert!(interface.to_string().contains("`yolo`"));
        assert_eq!(
            interface.user_message(),
            "The request could not be fulfilled. Check the intent name and slot values."
        );
    }
}
