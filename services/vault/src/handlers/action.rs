use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};

use qrvault_domain::action::{ActionError, ActionState};

use crate::error::VaultServiceError;

pub type ActionReply = (StatusCode, Json<ActionState>);

/// The four write actions and their user-facing outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateGenerated,
    CreateScanned,
    UpdateLabel,
    UpdateNote,
}

impl Action {
    fn success_message(self) -> &'static str {
        match self {
            Self::CreateGenerated => "QR Code created successfully!",
            Self::CreateScanned => "Scan saved to history!",
            Self::UpdateLabel => "Label updated successfully!",
            Self::UpdateNote => "Note updated successfully!",
        }
    }

    fn success_status(self) -> StatusCode {
        match self {
            Self::CreateGenerated | Self::CreateScanned => StatusCode::CREATED,
            Self::UpdateLabel | Self::UpdateNote => StatusCode::OK,
        }
    }

    /// `(message, error)` reported when the write itself failed.
    fn failure(self) -> (&'static str, Option<ActionError>) {
        match self {
            Self::CreateGenerated => (
                "Database error.",
                Some(ActionError::Message(
                    "Failed to save QR code to the database.".into(),
                )),
            ),
            Self::CreateScanned => (
                "Database error.",
                Some(ActionError::Message(
                    "Failed to save scan to the database.".into(),
                )),
            ),
            Self::UpdateLabel => ("Failed to update label.", None),
            Self::UpdateNote => ("Failed to update note.", None),
        }
    }

    /// Fold a usecase outcome into the action state. Nothing escapes as a
    /// bare error response.
    pub fn reply<T>(self, result: Result<T, VaultServiceError>) -> ActionReply {
        let error = match result {
            Ok(_) => {
                return (
                    self.success_status(),
                    Json(ActionState::succeeded(self.success_message())),
                );
            }
            Err(VaultServiceError::Validation(fields)) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ActionState::failed(
                        "Validation failed.",
                        Some(ActionError::Fields(fields)),
                    )),
                );
            }
            Err(error) => error,
        };

        let status = error.status();
        if status.is_server_error() {
            tracing::error!(error = ?error, action = ?self, "action failed");
        }
        let (message, detail) = self.failure();
        (status, Json(ActionState::failed(message, detail)))
    }

    /// Unwrap the request body, or the reply for a body that did not parse.
    pub fn body<T>(self, payload: Result<Json<T>, JsonRejection>) -> Result<T, ActionReply> {
        payload
            .map(|Json(body)| body)
            .map_err(|rejection| self.reply::<()>(Err(rejection.into())))
    }
}
