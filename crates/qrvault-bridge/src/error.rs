use qrvault_domain::color::InvalidHexColor;

/// Failures of rendering, decoding or camera access. None of them is fatal;
/// callers surface the message and let the user retry.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("nothing to encode")]
    EmptyData,
    #[error("data cannot be encoded as a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error(transparent)]
    InvalidColor(#[from] InvalidHexColor),
    #[error("the image is invalid: {0}")]
    InvalidImage(#[from] image::ImageError),
    #[error("frame of {width}x{height} needs {expected} pixels, got {actual}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("scale of {module_px} pixels per module is out of range")]
    InvalidScale { module_px: u32 },
    #[error("No QR code found in the image or the image is invalid.")]
    NoCodeFound,
    #[error("Camera not found or permission denied. Please check your device settings.")]
    PermissionDenied,
    #[error("camera is not running")]
    CameraInactive,
}

impl BridgeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyData => "EMPTY_DATA",
            Self::Encode(_) => "ENCODE_FAILED",
            Self::InvalidColor(_) => "INVALID_COLOR",
            Self::InvalidImage(_) | Self::FrameSize { .. } => "INVALID_IMAGE",
            Self::InvalidScale { .. } => "INVALID_SCALE",
            Self::NoCodeFound => "NO_CODE_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::CameraInactive => "CAMERA_INACTIVE",
        }
    }
}
