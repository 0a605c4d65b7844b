//! Vault client: browsing and editing state over the HTTP API, with QR
//! previews rendered locally through the bridge.

pub mod api;
pub mod details;
pub mod draft;
pub mod error;
pub mod projection;
pub mod vault;

pub use api::{HttpVaultApi, VaultApi};
pub use error::ClientError;
pub use vault::VaultState;

#[cfg(test)]
mod testing;
