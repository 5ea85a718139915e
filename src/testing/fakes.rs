//! In-memory stand-ins for the camera and host seams
//!
//! `FakeHardware` plays the platform camera stack: it hands out
//! [`FakeCamera`] handles built from registered blueprints and keeps
//! every handle's state inspectable after the controller has taken
//! ownership. `FakeHost` and `RecordingListener` complete the rig,
//! enabling reliable offline testing without a camera attached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::device::{CameraDevice, CameraProvider};
use crate::errors::CameraError;
use crate::host::HostEnvironment;
use crate::listener::{TestOutcome, TestResultListener, ZoomNotSupportedReason};
use crate::types::{
    CameraFacing, CameraInfo, CameraParameters, DisplayRotation, PreviewSize, PreviewTarget,
};

/// Everything observable about one fake camera handle.
#[derive(Debug, Clone)]
pub struct FakeCameraState {
    pub info: CameraInfo,
    pub parameters: CameraParameters,
    pub previewing: bool,
    pub bound_target: Option<PreviewTarget>,
    pub display_orientation: Option<i32>,
    pub released: bool,
    pub start_preview_calls: u32,
    pub stop_preview_calls: u32,
    pub set_parameters_calls: u32,
    /// Reject every parameter update regardless of content.
    pub reject_parameters: bool,
    /// Make every preview start fail.
    pub fail_start_preview: bool,
    /// Make preview target binding fail.
    pub fail_bind: bool,
}

impl FakeCameraState {
    fn new(info: CameraInfo, parameters: CameraParameters) -> Self {
        Self {
            info,
            parameters,
            previewing: false,
            bound_target: None,
            display_orientation: None,
            released: false,
            start_preview_calls: 0,
            stop_preview_calls: 0,
            set_parameters_calls: 0,
            reject_parameters: false,
            fail_start_preview: false,
            fail_bind: false,
        }
    }
}

/// A camera handle backed by in-memory state.
///
/// Validates parameter updates the way real drivers do: a zoom level
/// outside the supported range is rejected, and so is any zoom movement
/// on a camera that reports no zoom capability. Read-only fields of an
/// incoming snapshot are ignored; only the writable knobs (zoom, preview
/// size) are applied.
pub struct FakeCamera {
    state: Arc<Mutex<FakeCameraState>>,
}

impl FakeCamera {
    pub fn new(info: CameraInfo, parameters: CameraParameters) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeCameraState::new(info, parameters))),
        }
    }

    pub fn from_blueprint(blueprint: &FakeCameraBlueprint) -> Self {
        let camera = Self::new(blueprint.info, blueprint.parameters.clone());
        {
            let mut state = camera.state.lock().expect("lock poisoned");
            state.fail_start_preview = blueprint.fail_start_preview;
            state.fail_bind = blueprint.fail_bind;
        }
        camera
    }

    /// Handle for inspecting and steering the camera from a test.
    pub fn state(&self) -> Arc<Mutex<FakeCameraState>> {
        Arc::clone(&self.state)
    }
}

impl CameraDevice for FakeCamera {
    fn camera_info(&self) -> CameraInfo {
        self.state.lock().expect("lock poisoned").info
    }

    fn parameters(&self) -> CameraParameters {
        self.state.lock().expect("lock poisoned").parameters.clone()
    }

    fn set_parameters(&mut self, parameters: &CameraParameters) -> Result<(), CameraError> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.set_parameters_calls += 1;

        if state.reject_parameters {
            return Err(CameraError::ControlError(
                "parameter update rejected".to_string(),
            ));
        }
        if parameters.zoom != state.parameters.zoom && !state.parameters.zoom_supported {
            return Err(CameraError::ControlError(
                "zoom is not supported".to_string(),
            ));
        }
        if parameters.zoom < 0 || parameters.zoom > state.parameters.max_zoom {
            return Err(CameraError::ControlError(format!(
                "zoom {} outside 0..={}",
                parameters.zoom, state.parameters.max_zoom
            )));
        }

        state.parameters.zoom = parameters.zoom;
        state.parameters.preview_size = parameters.preview_size;
        Ok(())
    }

    fn bind_preview_target(&mut self, target: PreviewTarget) -> Result<(), CameraError> {
        let mut state = self.state.lock().expect("lock poisoned");
        if state.fail_bind {
            return Err(CameraError::BindError("surface unavailable".to_string()));
        }
        state.bound_target = Some(target);
        Ok(())
    }

    fn set_display_orientation(&mut self, degrees: i32) {
        self.state.lock().expect("lock poisoned").display_orientation = Some(degrees);
    }

    fn start_preview(&mut self) -> Result<(), CameraError> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.start_preview_calls += 1;
        if state.fail_start_preview {
            return Err(CameraError::StreamError(
                "preview stream refused".to_string(),
            ));
        }
        state.previewing = true;
        Ok(())
    }

    fn stop_preview(&mut self) {
        let mut state = self.state.lock().expect("lock poisoned");
        state.stop_preview_calls += 1;
        state.previewing = false;
    }
}

impl Drop for FakeCamera {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.previewing = false;
            state.released = true;
        }
    }
}

/// Characteristics a [`FakeHardware`] rig builds camera handles from.
#[derive(Debug, Clone)]
pub struct FakeCameraBlueprint {
    pub info: CameraInfo,
    pub parameters: CameraParameters,
    pub fail_start_preview: bool,
    pub fail_bind: bool,
}

impl FakeCameraBlueprint {
    pub fn new(info: CameraInfo, parameters: CameraParameters) -> Self {
        Self {
            info,
            parameters,
            fail_start_preview: false,
            fail_bind: false,
        }
    }

    /// Back camera of a mid-range handset: sensor mounted at 90 degrees,
    /// 60 zoom steps, the usual QVGA through 1080p preview ladder.
    pub fn typical_back() -> Self {
        Self::new(
            CameraInfo::new(CameraFacing::Back, 90),
            CameraParameters::new(60).with_preview_sizes(vec![
                PreviewSize::new(320, 240),
                PreviewSize::new(640, 480),
                PreviewSize::new(1280, 720),
                PreviewSize::new(1920, 1080),
            ]),
        )
    }

    /// Front camera counterpart: sensor at 270 degrees, shorter zoom
    /// range, no 1080p mode.
    pub fn typical_front() -> Self {
        Self::new(
            CameraInfo::new(CameraFacing::Front, 270),
            CameraParameters::new(30).with_preview_sizes(vec![
                PreviewSize::new(320, 240),
                PreviewSize::new(640, 480),
                PreviewSize::new(1280, 720),
            ]),
        )
    }
}

#[derive(Debug)]
struct HardwareInner {
    blueprints: HashMap<CameraFacing, FakeCameraBlueprint>,
    fail_open: bool,
    opened: Vec<Arc<Mutex<FakeCameraState>>>,
}

/// The platform camera stack as a test rig.
///
/// Clones share state, so a rig can stay in the test while its
/// [`provider`](Self::provider) half moves into the controller. Every
/// handle the provider opens stays inspectable through
/// [`opened`](Self::opened) and [`last_opened`](Self::last_opened),
/// released or not.
#[derive(Debug, Clone)]
pub struct FakeHardware {
    inner: Arc<Mutex<HardwareInner>>,
}

impl FakeHardware {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HardwareInner {
                blueprints: HashMap::new(),
                fail_open: false,
                opened: Vec::new(),
            })),
        }
    }

    /// Rig with the typical back and front handset cameras registered.
    pub fn with_typical_cameras() -> Self {
        let hardware = Self::new();
        hardware.set_blueprint(CameraFacing::Back, FakeCameraBlueprint::typical_back());
        hardware.set_blueprint(CameraFacing::Front, FakeCameraBlueprint::typical_front());
        hardware
    }

    pub fn set_blueprint(&self, facing: CameraFacing, blueprint: FakeCameraBlueprint) {
        self.inner
            .lock()
            .expect("lock poisoned")
            .blueprints
            .insert(facing, blueprint);
    }

    /// Make every subsequent open attempt fail.
    pub fn set_open_error(&self, fail: bool) {
        self.inner.lock().expect("lock poisoned").fail_open = fail;
    }

    /// The [`CameraProvider`] half for handing to a controller.
    pub fn provider(&self) -> FakeProvider {
        FakeProvider {
            inner: Arc::clone(&self.inner),
        }
    }

    /// State handles of every camera opened so far, oldest first.
    pub fn opened(&self) -> Vec<Arc<Mutex<FakeCameraState>>> {
        self.inner.lock().expect("lock poisoned").opened.clone()
    }

    /// State handle of the most recently opened camera.
    pub fn last_opened(&self) -> Option<Arc<Mutex<FakeCameraState>>> {
        self.inner
            .lock()
            .expect("lock poisoned")
            .opened
            .last()
            .cloned()
    }

    pub fn open_count(&self) -> usize {
        self.inner.lock().expect("lock poisoned").opened.len()
    }
}

impl Default for FakeHardware {
    fn default() -> Self {
        Self::new()
    }
}

/// The [`CameraProvider`] half of a [`FakeHardware`] rig.
pub struct FakeProvider {
    inner: Arc<Mutex<HardwareInner>>,
}

impl CameraProvider for FakeProvider {
    fn open(&mut self, facing: CameraFacing) -> Result<Box<dyn CameraDevice>, CameraError> {
        let mut inner = self.inner.lock().expect("lock poisoned");
        if inner.fail_open {
            return Err(CameraError::OpenError("camera is in use".to_string()));
        }
        let blueprint = inner
            .blueprints
            .get(&facing)
            .cloned()
            .ok_or_else(|| CameraError::OpenError(format!("no {} camera present", facing)))?;

        let camera = FakeCamera::from_blueprint(&blueprint);
        inner.opened.push(camera.state());
        Ok(Box::new(camera))
    }
}

/// [`HostEnvironment`] with switchable permission, hardware and rotation
/// state.
#[derive(Debug, Clone)]
pub struct FakeHost {
    flags: Arc<Mutex<HostFlags>>,
}

#[derive(Debug, Clone, Copy)]
struct HostFlags {
    permission: bool,
    hardware: bool,
    rotation: DisplayRotation,
}

impl FakeHost {
    pub fn new(permission: bool, hardware: bool) -> Self {
        Self {
            flags: Arc::new(Mutex::new(HostFlags {
                permission,
                hardware,
                rotation: DisplayRotation::Deg0,
            })),
        }
    }

    /// Host with permission granted, hardware present and the display
    /// unrotated.
    pub fn granted() -> Self {
        Self::new(true, true)
    }

    pub fn set_permission(&self, granted: bool) {
        self.flags.lock().expect("lock poisoned").permission = granted;
    }

    pub fn set_hardware(&self, present: bool) {
        self.flags.lock().expect("lock poisoned").hardware = present;
    }

    pub fn set_rotation(&self, rotation: DisplayRotation) {
        self.flags.lock().expect("lock poisoned").rotation = rotation;
    }
}

impl HostEnvironment for FakeHost {
    fn has_camera_permission(&self) -> bool {
        self.flags.lock().expect("lock poisoned").permission
    }

    fn has_camera_hardware(&self) -> bool {
        self.flags.lock().expect("lock poisoned").hardware
    }

    fn display_rotation(&self) -> DisplayRotation {
        self.flags.lock().expect("lock poisoned").rotation
    }
}

/// Listener that records every outcome for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    outcomes: Arc<Mutex<Vec<TestOutcome>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes recorded so far, oldest first.
    pub fn outcomes(&self) -> Vec<TestOutcome> {
        self.outcomes.lock().expect("lock poisoned").clone()
    }

    pub fn last(&self) -> Option<TestOutcome> {
        self.outcomes.lock().expect("lock poisoned").last().copied()
    }

    /// Drain the recorded outcomes, leaving the listener empty.
    pub fn take(&self) -> Vec<TestOutcome> {
        std::mem::take(&mut *self.outcomes.lock().expect("lock poisoned"))
    }
}

impl TestResultListener for RecordingListener {
    fn on_zoom_supported(&mut self) {
        self.outcomes
            .lock()
            .expect("lock poisoned")
            .push(TestOutcome::ZoomSupported);
    }

    fn on_zoom_not_supported(&mut self, reason: ZoomNotSupportedReason) {
        self.outcomes
            .lock()
            .expect("lock poisoned")
            .push(TestOutcome::ZoomNotSupported(reason));
    }
}
