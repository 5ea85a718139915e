//! ZoomCheck: camera zoom capability testing with preview size negotiation
//!
//! This crate implements the session handling and zoom control behind a
//! camera zoom tester: open a camera, negotiate a preview size for the
//! host surface, correct the display orientation, and drive the zoom from
//! button steps or pinch gestures while reporting outcomes to the host.
//!
//! # Features
//! - Camera session lifecycle driven by host surface events
//! - Button and pinch-gesture zoom with hardware range clamping
//! - Preview size negotiation against hardware-reported resolutions
//! - Display orientation correction for back and front cameras
//! - Capability traits isolating the camera driver and host environment
//! - In-memory fakes for offline testing without a camera
//!
//! # Usage
//! ```rust
//! use zoomcheck::testing::{FakeHardware, FakeHost, RecordingListener};
//! use zoomcheck::types::{CameraFacing, PreviewTarget};
//! use zoomcheck::ZoomController;
//!
//! let hardware = FakeHardware::with_typical_cameras();
//! let listener = RecordingListener::new();
//!
//! let mut controller = ZoomController::new(
//!     Box::new(hardware.provider()),
//!     Box::new(FakeHost::granted()),
//!     CameraFacing::Back,
//! )
//! .with_listener(Box::new(listener.clone()));
//!
//! controller.surface_available(PreviewTarget::from_raw(1));
//! controller.surface_changed(640, 480);
//! controller.zoom_in();
//!
//! assert!(controller.has_session());
//! assert!(!listener.outcomes().is_empty());
//! ```
pub mod config;
pub mod controller;
pub mod device;
pub mod errors;
pub mod gesture;
pub mod host;
pub mod listener;
pub mod permissions;
pub mod preview;
pub mod types;

// Testing utilities - in-memory fakes for offline testing
pub mod testing;

// Re-exports for convenience
pub use config::ZoomCheckConfig;
pub use controller::ZoomController;
pub use device::{CameraDevice, CameraProvider, CameraSession};
pub use errors::CameraError;
pub use gesture::{PinchTracker, ScaleGestureAdapter};
pub use host::{HostEnvironment, SystemHost};
pub use listener::{TestOutcome, TestResultListener, ZoomNotSupportedReason};
pub use types::{
    CameraFacing, CameraInfo, CameraParameters, DisplayRotation, PreviewSize, PreviewTarget,
};

/// Initialize logging for the zoom tester
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "zoomcheck=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_info() {
        let info = get_info();
        assert_eq!(info.name, "zoomcheck");
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
