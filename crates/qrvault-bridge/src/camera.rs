use futures::StreamExt as _;
use futures::stream::BoxStream;
use tracing::debug;

use crate::decode::decode_frame;
use crate::error::BridgeError;
use crate::frame::GrayFrame;

/// A frame source such as a webcam.
///
/// Device backends are supplied by the embedding UI; this crate only drives
/// them through [`CameraSession`] and decodes what they capture.
pub trait Camera: Send {
    /// Acquire the device. Fails with [`BridgeError::PermissionDenied`] when
    /// no camera exists or access was refused.
    fn open(&mut self) -> Result<(), BridgeError>;

    /// Frames captured since `open`. The stream ends when the device stops.
    fn frames(&mut self) -> BoxStream<'_, GrayFrame>;

    /// Release the device.
    fn close(&mut self);
}

/// An acquired camera. The device is released on the first of: a decoded
/// payload, [`CameraSession::stop`], or drop.
pub struct CameraSession<C: Camera> {
    camera: C,
    active: bool,
}

impl<C: Camera> CameraSession<C> {
    pub fn start(mut camera: C) -> Result<Self, BridgeError> {
        camera.open()?;
        debug!("camera acquired");
        Ok(Self {
            camera,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Consume frames until one decodes, then release the camera.
    pub async fn scan(&mut self) -> Result<String, BridgeError> {
        if !self.active {
            return Err(BridgeError::CameraInactive);
        }
        let found = {
            let mut frames = self.camera.frames();
            let mut found = None;
            while let Some(frame) = frames.next().await {
                match decode_frame(&frame) {
                    Ok(data) => {
                        found = Some(data);
                        break;
                    }
                    Err(BridgeError::NoCodeFound) => {}
                    Err(e) => debug!(error = %e, "skipping unreadable frame"),
                }
            }
            found
        };
        self.stop();
        found.ok_or(BridgeError::NoCodeFound)
    }

    pub fn stop(&mut self) {
        if self.active {
            self.camera.close();
            self.active = false;
            debug!("camera released");
        }
    }
}

impl<C: Camera> Drop for CameraSession<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<C: Camera> std::fmt::Debug for CameraSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
