//! Capability traits for the platform camera stack.
//!
//! The controller talks to hardware only through [`CameraDevice`] and
//! [`CameraProvider`]. Platform backends implement these against their
//! native camera APIs; tests implement them in memory.

use crate::errors::CameraError;
use crate::types::{CameraFacing, CameraInfo, CameraParameters, PreviewTarget};

/// One open camera handle.
///
/// Covers the narrow slice of a camera driver the zoom test needs.
/// Releasing the handle is dropping it; implementations do their cleanup
/// in `Drop`.
pub trait CameraDevice {
    /// Fixed properties of the opened camera.
    fn camera_info(&self) -> CameraInfo;

    /// A fresh snapshot of the adjustable state.
    fn parameters(&self) -> CameraParameters;

    /// Write an edited snapshot back to the hardware.
    ///
    /// Drivers reject snapshots the hardware cannot honor, such as a zoom
    /// value outside `0..=max_zoom`.
    fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError>;

    /// Attach the preview stream to a host rendering surface.
    fn bind_preview_target(&mut self, target: PreviewTarget) -> Result<(), CameraError>;

    /// Rotate the preview stream so it renders upright.
    fn set_display_orientation(&mut self, degrees: i32);

    /// Start delivering preview frames.
    fn start_preview(&mut self) -> Result<(), CameraError>;

    /// Stop delivering preview frames. Safe to call while not previewing.
    fn stop_preview(&mut self);
}

/// Opens camera handles for a requested facing.
pub trait CameraProvider {
    fn open(&mut self, facing: CameraFacing) -> Result<Box<dyn CameraDevice>, CameraError>;
}

/// An open camera paired with the facing it was opened for.
///
/// Dropping the session drops the device handle, which releases the
/// hardware.
pub struct CameraSession {
    facing: CameraFacing,
    device: Box<dyn CameraDevice>,
}

impl CameraSession {
    pub fn new(facing: CameraFacing, device: Box<dyn CameraDevice>) -> Self {
        Self { facing, device }
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub fn camera_info(&self) -> CameraInfo {
        self.device.camera_info()
    }

    pub fn parameters(&self) -> CameraParameters {
        self.device.parameters()
    }

    pub fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError> {
        self.device.set_parameters(parameters)
    }

    pub fn bind_preview_target(&mut self, target: PreviewTarget) -> Result<(), CameraError> {
        self.device.bind_preview_target(target)
    }

    pub fn set_display_orientation(&mut self, degrees: i32) {
        self.device.set_display_orientation(degrees)
    }

    pub fn start_preview(&mut self) -> Result<(), CameraError> {
        self.device.start_preview()
    }

    pub fn stop_preview(&mut self) {
        self.device.stop_preview()
    }
}
