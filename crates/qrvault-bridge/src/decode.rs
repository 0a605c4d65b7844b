use tracing::debug;

use crate::error::BridgeError;
use crate::frame::GrayFrame;

/// Decode the first readable QR symbol in `frame`.
pub fn decode_frame(frame: &GrayFrame) -> Result<String, BridgeError> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        frame.width() as usize,
        frame.height() as usize,
        |x, y| frame.luma(x, y),
    );
    for grid in prepared.detect_grids() {
        match grid.decode() {
            Ok((_meta, content)) => return Ok(content),
            Err(e) => debug!(error = ?e, "detected grid did not decode"),
        }
    }
    Err(BridgeError::NoCodeFound)
}

/// Decode a still image in any format `image` can read.
pub fn decode_image(bytes: &[u8]) -> Result<String, BridgeError> {
    let image = image::load_from_memory(bytes)?;
    decode_frame(&GrayFrame::from_image(&image))
}
