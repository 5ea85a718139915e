use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a zoom attempt could not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomNotSupportedReason {
    /// The device reports no camera hardware at all.
    NoCamera,
    /// Camera permission has not been granted to the application.
    NoPermission,
    /// The camera opened, but its driver reports no zoom capability.
    NotSupported,
    /// No camera handle is held, so the device could not be accessed.
    NoAccess,
}

impl ZoomNotSupportedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomNotSupportedReason::NoCamera => "no_camera",
            ZoomNotSupportedReason::NoPermission => "no_permission",
            ZoomNotSupportedReason::NotSupported => "not_supported",
            ZoomNotSupportedReason::NoAccess => "no_access",
        }
    }
}

impl fmt::Display for ZoomNotSupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one zoom or initialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    /// The hardware zoom value moved.
    ZoomSupported,
    /// The attempt failed for the given reason.
    ZoomNotSupported(ZoomNotSupportedReason),
}

/// Observer for test outcomes, implemented by the shell.
///
/// At most one call arrives per attempt. A zoom attempt that leaves the
/// hardware value where it was reports nothing, and so does a successful
/// initialization.
pub trait TestResultListener {
    /// A zoom attempt moved the hardware zoom value.
    fn on_zoom_supported(&mut self);

    /// An attempt failed for `reason`.
    fn on_zoom_not_supported(&mut self, reason: ZoomNotSupportedReason);
}
