//! Testing utilities for zoomcheck
//!
//! Provides in-memory fakes for the camera driver and host environment
//! seams, modeled on typical handset hardware, enabling reliable offline
//! testing without a camera attached.

pub mod fakes;

pub use fakes::{
    FakeCamera, FakeCameraBlueprint, FakeCameraState, FakeHardware, FakeHost, FakeProvider,
    RecordingListener,
};
