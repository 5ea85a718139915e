//! The zoom test state machine.
//!
//! Owns the camera session, drives it from surface lifecycle events and
//! zoom input, and reports outcomes to the registered listener.

use crate::config::ZoomCheckConfig;
use crate::device::{CameraProvider, CameraSession};
use crate::host::HostEnvironment;
use crate::listener::{TestOutcome, TestResultListener, ZoomNotSupportedReason};
use crate::preview;
use crate::types::{CameraFacing, PreviewSize, PreviewTarget};

/// Drives a camera session through the zoom capability test.
///
/// The controller is built idle; the host's surface lifecycle and input
/// events move it. All methods are synchronous and meant to run on the
/// host's event thread.
pub struct ZoomController {
    provider: Box<dyn CameraProvider>,
    host: Box<dyn HostEnvironment>,
    listener: Option<Box<dyn TestResultListener>>,
    config: ZoomCheckConfig,
    facing: CameraFacing,
    session: Option<CameraSession>,
    preview_target: Option<PreviewTarget>,
    preview_size: Option<PreviewSize>,
}

impl ZoomController {
    /// Create an idle controller for `facing`. No hardware is touched
    /// until a session is initialized or a surface appears.
    pub fn new(
        provider: Box<dyn CameraProvider>,
        host: Box<dyn HostEnvironment>,
        facing: CameraFacing,
    ) -> Self {
        Self {
            provider,
            host,
            listener: None,
            config: ZoomCheckConfig::default(),
            facing,
            session: None,
            preview_target: None,
            preview_size: None,
        }
    }

    /// Replace the default tuning configuration.
    pub fn with_config(mut self, config: ZoomCheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a listener at construction time.
    pub fn with_listener(mut self, listener: Box<dyn TestResultListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Attach or clear the outcome listener.
    ///
    /// Initialization is re-run so a freshly attached listener observes
    /// the current permission and hardware gate state right away.
    pub fn set_listener(&mut self, listener: Option<Box<dyn TestResultListener>>) {
        self.listener = listener;
        self.reinit_session();
    }

    /// The facing the controller is currently bound to.
    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// Whether a camera handle is currently held.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// The preview size last selected, if any.
    pub fn preview_size(&self) -> Option<PreviewSize> {
        self.preview_size
    }

    /// Bind to `facing` and initialize a session for it, tearing down any
    /// session already held.
    pub fn init_session(&mut self, facing: CameraFacing) {
        self.facing = facing;
        self.reinit_session();
    }

    /// [`init_session`](Self::init_session) for an untrusted raw
    /// identifier; unknown values resolve to the back camera.
    pub fn init_session_raw(&mut self, raw_id: i32) {
        self.init_session(CameraFacing::from_raw(raw_id));
    }

    /// Re-run initialization for the current facing.
    ///
    /// The shell calls this after the user grants camera permission.
    /// Permission is gated before hardware presence; failing either gate
    /// reports the matching outcome and leaves the hardware untouched.
    pub fn reinit_session(&mut self) {
        if !self.host.has_camera_permission() {
            log::info!("Camera permission not granted");
            self.emit(TestOutcome::ZoomNotSupported(
                ZoomNotSupportedReason::NoPermission,
            ));
            return;
        }
        if !self.host.has_camera_hardware() {
            log::info!("No camera hardware on this device");
            self.emit(TestOutcome::ZoomNotSupported(
                ZoomNotSupportedReason::NoCamera,
            ));
            return;
        }

        self.open_camera();
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.start_preview() {
                log::warn!("Failed to start preview: {}", e);
            }
        }
    }

    /// Stop the preview and release the camera handle. Does nothing
    /// without one.
    pub fn release_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop_preview();
            log::debug!("Released {} camera", session.facing());
        }
    }

    /// Step the zoom in by the configured increment.
    pub fn zoom_in(&mut self) {
        self.change_zoom(f64::from(self.config.zoom.increment_step));
    }

    /// Step the zoom out by the configured decrement.
    pub fn zoom_out(&mut self) {
        self.change_zoom(f64::from(self.config.zoom.decrement_step));
    }

    /// Apply a zoom delta and report whether the hardware zoom moved.
    ///
    /// The delta is truncated toward zero, added to the current level and
    /// clamped against the hardware range. The clamped value is written
    /// back and the level re-read: a moved value reports success, an
    /// unmoved one reports nothing, and a missing or zoom-less camera
    /// reports the matching failure.
    pub fn change_zoom(&mut self, delta: f64) {
        if let Some(outcome) = self.change_zoom_inner(delta) {
            self.emit(outcome);
        }
    }

    fn change_zoom_inner(&mut self, delta: f64) -> Option<TestOutcome> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => {
                log::info!("Cannot access a camera on this device");
                return Some(TestOutcome::ZoomNotSupported(ZoomNotSupportedReason::NoAccess));
            }
        };

        let mut params = session.parameters();
        if !params.zoom_supported {
            log::info!("Zoom not supported by this camera");
            return Some(TestOutcome::ZoomNotSupported(
                ZoomNotSupportedReason::NotSupported,
            ));
        }

        let max_zoom = params.max_zoom;
        let current_zoom = params.zoom;
        let candidate = current_zoom.saturating_add(delta as i32);

        // The candidate is tested against the maximum before the zero
        // floor; a negative value that slips below range is the driver's
        // to reject.
        if candidate < max_zoom {
            params.set_zoom(candidate);
        } else if candidate < 0 {
            params.set_zoom(0);
        } else {
            params.set_zoom(max_zoom);
        }

        if let Err(e) = session.set_parameters(&params) {
            log::debug!("Unable to set camera parameters: {}", e);
        }

        if current_zoom != session.parameters().zoom {
            Some(TestOutcome::ZoomSupported)
        } else {
            None
        }
    }

    /// The host surface became available; open the camera for it.
    ///
    /// The preview stream is not started here. The surface has no usable
    /// geometry until its first change notification arrives.
    pub fn surface_available(&mut self, target: PreviewTarget) {
        self.preview_target = Some(target);
        self.open_camera();
    }

    /// The host surface changed geometry.
    ///
    /// Stops the preview, re-derives the orientation correction, selects
    /// and applies the preview size for the new geometry, and restarts
    /// the stream.
    pub fn surface_changed(&mut self, width: u32, height: u32) {
        let rotation = self.host.display_rotation();
        let tolerance = self.config.preview.aspect_tolerance;

        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return,
        };
        session.stop_preview();

        let info = session.camera_info();
        let degrees =
            preview::display_orientation_degrees(info.facing, rotation, info.sensor_orientation);
        log::debug!("Display orientation set to {} degrees", degrees);
        session.set_display_orientation(degrees);

        let sizes = session.parameters().supported_preview_sizes;
        if let Some(size) = preview::optimal_preview_size(&sizes, width, height, tolerance) {
            self.preview_size = Some(size);
        }
        if let Some(size) = self.preview_size {
            let mut params = session.parameters();
            params.set_preview_size(size);
            log::info!("Camera preview size: {}", size);
            if let Err(e) = session.set_parameters(&params) {
                log::warn!("Unable to apply preview size: {}", e);
            }
        }

        if let Err(e) = session.start_preview() {
            log::warn!("Failed to restart preview: {}", e);
        }
    }

    /// The host surface is gone; stop the preview and let go of the
    /// camera.
    pub fn surface_destroyed(&mut self) {
        self.release_session();
        self.preview_target = None;
    }

    /// Resolve the dimensions a layout pass should give the preview.
    ///
    /// Selects (and remembers) the best-fitting preview size for the
    /// proposed geometry when the camera reports any; without a session
    /// or with an empty size list the proposal passes through unchanged.
    pub fn measure(&mut self, proposed_width: u32, proposed_height: u32) -> (u32, u32) {
        let sizes = match self.session.as_ref() {
            Some(session) => session.parameters().supported_preview_sizes,
            None => Vec::new(),
        };
        if sizes.is_empty() {
            return (proposed_width, proposed_height);
        }

        if let Some(size) = preview::optimal_preview_size(
            &sizes,
            proposed_width,
            proposed_height,
            self.config.preview.aspect_tolerance,
        ) {
            self.preview_size = Some(size);
        }

        preview::preferred_dimensions(self.preview_size, proposed_width, proposed_height)
    }

    /// Release the held session and open a fresh camera for the current
    /// facing, binding the stored preview target when one exists.
    ///
    /// An open failure leaves the controller without a session; a bind
    /// failure keeps the session, since the driver can still exercise
    /// zoom without a live preview.
    fn open_camera(&mut self) {
        self.release_session();

        match self.provider.open(self.facing) {
            Ok(device) => {
                let mut session = CameraSession::new(self.facing, device);
                if let Some(target) = self.preview_target {
                    if let Err(e) = session.bind_preview_target(target) {
                        log::warn!("Failed to bind preview target: {}", e);
                    }
                }
                log::debug!("Opened {} camera", self.facing);
                self.session = Some(session);
            }
            Err(e) => {
                log::warn!("Unable to open {} camera: {}", self.facing, e);
            }
        }
    }

    fn emit(&mut self, outcome: TestOutcome) {
        if let Some(listener) = self.listener.as_mut() {
            match outcome {
                TestOutcome::ZoomSupported => listener.on_zoom_supported(),
                TestOutcome::ZoomNotSupported(reason) => listener.on_zoom_not_supported(reason),
            }
        }
    }
}

impl Drop for ZoomController {
    fn drop(&mut self) {
        self.release_session();
    }
}
