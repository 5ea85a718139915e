use crate::permissions::{self, PermissionStatus};
use crate::types::DisplayRotation;

/// Host-side state the controller consults before touching hardware.
///
/// The shell implements this against its windowing and permission layers.
/// [`SystemHost`] is a best-effort stand-in for hosts without either.
pub trait HostEnvironment {
    /// Whether the application currently holds camera permission.
    fn has_camera_permission(&self) -> bool;

    /// Whether the device has any camera hardware.
    fn has_camera_hardware(&self) -> bool;

    /// Current rotation of the display the preview renders on.
    fn display_rotation(&self) -> DisplayRotation;
}

/// [`HostEnvironment`] backed by the platform probes in
/// [`crate::permissions`].
///
/// Only a positive denial blocks the permission gate; indeterminate
/// states are left for the driver's open call to settle. The display is
/// reported unrotated, which holds for fixed desktop screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemHost {
    fn has_camera_permission(&self) -> bool {
        !matches!(
            permissions::check_permission(),
            PermissionStatus::Denied | PermissionStatus::Restricted
        )
    }

    fn has_camera_hardware(&self) -> bool {
        permissions::has_video_device()
    }

    fn display_rotation(&self) -> DisplayRotation {
        DisplayRotation::Deg0
    }
}
