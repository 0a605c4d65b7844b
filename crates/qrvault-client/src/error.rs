use qrvault_bridge::BridgeError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success response carrying the server's `{kind, message}` body.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
