//! Domain types shared by the vault service, the client and the QR bridge.
//!
//! This crate contains only pure types with no framework dependencies.
//! Wire formats live here so the server and the client agree on them.

pub mod action;
pub mod code;
pub mod color;
pub mod id;
pub mod sort;
