use axum::http::StatusCode;

/// Handler for `GET /healthz`: the process is up and serving.
///
/// Readiness depends on the service's own backends, so each service provides
/// its own `readyz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
