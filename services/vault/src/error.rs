use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use qrvault_bridge::BridgeError;
use qrvault_domain::action::FieldErrors;
use qrvault_domain::code::CodeKind;

/// Vault service error variants.
#[derive(Debug, thiserror::Error)]
pub enum VaultServiceError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("generated code not found")]
    GeneratedCodeNotFound,
    #[error("scanned code not found")]
    ScannedCodeNotFound,
    #[error("Failed to fetch {kind} codes")]
    ListingUnavailable {
        kind: CodeKind,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl VaultServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::GeneratedCodeNotFound => "GENERATED_CODE_NOT_FOUND",
            Self::ScannedCodeNotFound => "SCANNED_CODE_NOT_FOUND",
            Self::ListingUnavailable { .. } => "LISTING_UNAVAILABLE",
            Self::Bridge(e) => e.kind(),
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::GeneratedCodeNotFound | Self::ScannedCodeNotFound => StatusCode::NOT_FOUND,
            Self::Bridge(BridgeError::NoCodeFound) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Bridge(
                BridgeError::EmptyData
                | BridgeError::Encode(_)
                | BridgeError::InvalidColor(_)
                | BridgeError::InvalidImage(_)
                | BridgeError::FrameSize { .. }
                | BridgeError::InvalidScale { .. },
            ) => StatusCode::BAD_REQUEST,
            Self::Bridge(BridgeError::PermissionDenied | BridgeError::CameraInactive)
            | Self::ListingUnavailable { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Re-label a store failure met while serving a listing.
    pub fn into_listing(self, kind: CodeKind) -> Self {
        match self {
            Self::Internal(source) => Self::ListingUnavailable { kind, source },
            other => other,
        }
    }
}

/// A body that is not the JSON an action expects is reported like any other
/// invalid field, under `body`.
impl From<JsonRejection> for VaultServiceError {
    fn from(rejection: JsonRejection) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert("body".into(), vec![rejection.body_text()]);
        Self::Validation(fields)
    }
}

impl IntoResponse for VaultServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 5xx only; TraceLayer already records the request line and status.
        match &self {
            Self::Internal(source) | Self::ListingUnavailable { source, .. } => {
                tracing::error!(error = ?source, kind = self.kind(), "internal error");
            }
            _ => {}
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(fields) = &self {
            body["errors"] = serde_json::json!(fields);
        }
        (status, axum::Json(body)).into_response()
    }
}
