//! Bridge between vault records and QR images.
//!
//! Rendering is delegated to `qrcode`, decoding to `rqrr`; this crate only
//! adapts their inputs and outputs and owns the camera session lifecycle.

pub mod camera;
pub mod decode;
pub mod error;
pub mod frame;
pub mod render;

pub use error::BridgeError;
pub use frame::GrayFrame;
