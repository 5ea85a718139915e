use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a camera points on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraFacing {
    /// Rear-mounted camera, facing away from the user.
    Back,
    /// User-facing camera.
    Front,
}

impl CameraFacing {
    /// Map a raw host-supplied identifier to a facing.
    ///
    /// `0` selects the back camera and `1` the front camera. Any other
    /// value resolves to [`CameraFacing::Back`], so a bad identifier can
    /// never leave a view without a feed.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => CameraFacing::Front,
            _ => CameraFacing::Back,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraFacing::Back => "back",
            CameraFacing::Front => "front",
        }
    }
}

impl Default for CameraFacing {
    fn default() -> Self {
        CameraFacing::Back
    }
}

impl fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rotation of the host display, in the four cardinal steps the windowing
/// layer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayRotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl DisplayRotation {
    /// The rotation as plain degrees.
    pub fn degrees(self) -> i32 {
        match self {
            DisplayRotation::Deg0 => 0,
            DisplayRotation::Deg90 => 90,
            DisplayRotation::Deg180 => 180,
            DisplayRotation::Deg270 => 270,
        }
    }

    /// Map a degree reading back to a rotation step, for hosts that report
    /// plain integers. Values off the four steps yield `None`.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(DisplayRotation::Deg0),
            90 => Some(DisplayRotation::Deg90),
            180 => Some(DisplayRotation::Deg180),
            270 => Some(DisplayRotation::Deg270),
            _ => None,
        }
    }
}

impl Default for DisplayRotation {
    fn default() -> Self {
        DisplayRotation::Deg0
    }
}

/// A preview resolution the camera hardware can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

impl PreviewSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height over width, the ratio the preview size selection works in.
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl fmt::Display for PreviewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed per-camera properties reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub facing: CameraFacing,
    /// Mounting orientation of the sensor in degrees, clockwise from the
    /// device's natural orientation. Real hardware reports 0, 90, 180
    /// or 270.
    pub sensor_orientation: i32,
}

impl CameraInfo {
    pub fn new(facing: CameraFacing, sensor_orientation: i32) -> Self {
        Self {
            facing,
            sensor_orientation,
        }
    }
}

/// Snapshot of the adjustable camera state.
///
/// Obtained from [`crate::device::CameraDevice::parameters`], edited
/// locally and written back through
/// [`crate::device::CameraDevice::set_parameters`]. Callers never cache a
/// snapshot across operations; zoom handling re-reads a fresh one every
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraParameters {
    /// Current zoom level, `0..=max_zoom`.
    pub zoom: i32,
    /// Highest zoom level the hardware reaches.
    pub max_zoom: i32,
    /// Whether the driver accepts zoom changes at all.
    pub zoom_supported: bool,
    /// Every preview resolution the hardware can deliver.
    pub supported_preview_sizes: Vec<PreviewSize>,
    /// The preview resolution currently configured, if any.
    pub preview_size: Option<PreviewSize>,
}

impl CameraParameters {
    /// Snapshot for a camera idling at zoom 0.
    ///
    /// Zoom support follows the range: a camera with `max_zoom` of 0 has
    /// nothing to zoom. [`with_zoom_supported`](Self::with_zoom_supported)
    /// overrides this for drivers that advertise a range they refuse to
    /// drive.
    pub fn new(max_zoom: i32) -> Self {
        Self {
            zoom: 0,
            max_zoom,
            zoom_supported: max_zoom > 0,
            supported_preview_sizes: Vec::new(),
            preview_size: None,
        }
    }

    pub fn with_preview_sizes(mut self, sizes: Vec<PreviewSize>) -> Self {
        self.supported_preview_sizes = sizes;
        self
    }

    pub fn with_zoom_supported(mut self, supported: bool) -> Self {
        self.zoom_supported = supported;
        self
    }

    /// Edit the zoom level of this snapshot.
    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom;
    }

    /// Edit the configured preview resolution of this snapshot.
    pub fn set_preview_size(&mut self, size: PreviewSize) {
        self.preview_size = Some(size);
    }
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Opaque handle naming the host rendering surface the preview draws to.
///
/// The controller never interprets the value; it is passed through to the
/// driver, which shares its meaning with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewTarget(u64);

impl PreviewTarget {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PreviewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}
