//! Result shape returned by every write action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Messages keyed by the offending field name (camelCase, as on the wire).
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Failure detail of an action.
///
/// Validation failures always carry the field map; persistence and lookup
/// failures carry a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionError {
    Fields(FieldErrors),
    Message(String),
}

impl ActionError {
    /// First message reported for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        match self {
            Self::Fields(fields) => fields.get(field).and_then(|m| m.first()).map(String::as_str),
            Self::Message(_) => None,
        }
    }
}

/// `{ success, message, error? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionState {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
}

impl ActionState {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>, error: Option<ActionError>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }

    /// Message suitable for a toast: the string error when there is one,
    /// otherwise the summary message.
    pub fn summary(&self) -> &str {
        match &self.error {
            Some(ActionError::Message(m)) => m,
            _ => &self.message,
        }
    }
}
