//! Cross-cutting HTTP plumbing for QR Vault services: liveness, request ids,
//! structured tracing and timestamp formatting.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
