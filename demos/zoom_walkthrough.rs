//! Zoom Test Walkthrough - drives the full zoom test against the bundled fakes
//!
//! Run with: cargo run --example zoom_walkthrough
//!
//! This will:
//! 1. Build the fake hardware rig and a controller for the back camera
//! 2. Walk the surface lifecycle and preview negotiation
//! 3. Step the zoom with buttons
//! 4. Drive the zoom with a tracked pinch gesture
//! 5. Revoke permission and show the failure path

use zoomcheck::gesture::{PinchTracker, ScaleGestureAdapter};
use zoomcheck::testing::{FakeHardware, FakeHost, RecordingListener};
use zoomcheck::types::{CameraFacing, PreviewTarget};
use zoomcheck::ZoomController;

fn current_zoom(hardware: &FakeHardware) -> i32 {
    hardware
        .last_opened()
        .map(|state| state.lock().expect("lock poisoned").parameters.zoom)
        .unwrap_or(0)
}

fn main() {
    zoomcheck::init_logging();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  🔍 ZoomCheck Walkthrough - v{}", zoomcheck::VERSION);
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("📋 STEP 1: Build the Rig");
    println!("─────────────────────────────────────");
    let hardware = FakeHardware::with_typical_cameras();
    let host = FakeHost::granted();
    let listener = RecordingListener::new();
    let mut controller = ZoomController::new(
        Box::new(hardware.provider()),
        Box::new(host.clone()),
        CameraFacing::Back,
    )
    .with_listener(Box::new(listener.clone()));
    println!("   ✅ Controller ready for the {} camera\n", controller.facing());

    println!("📋 STEP 2: Surface Lifecycle");
    println!("─────────────────────────────────────");
    controller.surface_available(PreviewTarget::from_raw(1));
    let (width, height) = controller.measure(480, 800);
    println!("   Measured view:  {}x{}", width, height);

    controller.surface_changed(480, 800);
    match controller.preview_size() {
        Some(size) => println!("   Preview size:   {}", size),
        None => println!("   Preview size:   (none selected)"),
    }
    if let Some(state) = hardware.last_opened() {
        let state = state.lock().expect("lock poisoned");
        println!("   Orientation:    {:?} degrees", state.display_orientation);
        println!("   Previewing:     {}\n", state.previewing);
    }

    println!("📋 STEP 3: Button Zoom");
    println!("─────────────────────────────────────");
    controller.zoom_in();
    controller.zoom_in();
    controller.zoom_in();
    controller.zoom_out();
    println!("   Zoom level:     {}", current_zoom(&hardware));
    println!("   Outcomes:       {:?}\n", listener.take());

    println!("📋 STEP 4: Pinch Zoom");
    println!("─────────────────────────────────────");
    let adapter = ScaleGestureAdapter::default();
    let mut tracker = PinchTracker::new();

    tracker.begin((100.0, 400.0), (380.0, 400.0));
    for (first, second) in [
        ((80.0, 400.0), (400.0, 400.0)),
        ((60.0, 400.0), (420.0, 400.0)),
        ((150.0, 400.0), (350.0, 400.0)),
    ] {
        let factor = tracker.update(first, second);
        adapter.apply_scale(&mut controller, factor);
        println!(
            "   Pinch factor {:.3} -> zoom level {}",
            factor,
            current_zoom(&hardware)
        );
    }
    tracker.end();
    println!("   Outcomes:       {:?}\n", listener.take());

    println!("📋 STEP 5: Permission Revoked");
    println!("─────────────────────────────────────");
    host.set_permission(false);
    controller.reinit_session();
    println!("   Outcomes:       {:?}", listener.take());
    println!("   Session held:   {}\n", controller.has_session());

    controller.surface_destroyed();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  🎉 Walkthrough complete");
    println!("═══════════════════════════════════════════════════════════════");
}
