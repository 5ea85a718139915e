//! Fuzz-style tests using proptest
//!
//! These provide fuzz-like testing without requiring nightly Rust or
//! cargo-fuzz. Run with: cargo test --test fuzz_tests

use proptest::prelude::*;

mod zoom_fuzz {
    use super::*;
    use zoomcheck::testing::{FakeCameraBlueprint, FakeHardware, FakeHost};
    use zoomcheck::types::{CameraFacing, CameraInfo, CameraParameters};
    use zoomcheck::ZoomController;

    fn controller_with_range(hardware: &FakeHardware, max_zoom: i32) -> ZoomController {
        hardware.set_blueprint(
            CameraFacing::Back,
            FakeCameraBlueprint::new(
                CameraInfo::new(CameraFacing::Back, 90),
                CameraParameters::new(max_zoom),
            ),
        );
        let mut controller = ZoomController::new(
            Box::new(hardware.provider()),
            Box::new(FakeHost::granted()),
            CameraFacing::Back,
        );
        controller.init_session(CameraFacing::Back);
        controller
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// A single zoom attempt must never panic and must leave the
        /// hardware zoom inside the supported range.
        #[test]
        fn fuzz_change_zoom_stays_in_range(
            delta in -1.0e9f64..1.0e9f64,
            max_zoom in 0i32..500,
        ) {
            let hardware = FakeHardware::new();
            let mut controller = controller_with_range(&hardware, max_zoom);

            controller.change_zoom(delta);

            let state = hardware.last_opened().unwrap();
            let zoom = state.lock().unwrap().parameters.zoom;
            prop_assert!((0..=max_zoom).contains(&zoom));
        }

        /// The range invariant holds across arbitrary zoom sequences.
        #[test]
        fn fuzz_zoom_sequences_stay_in_range(
            deltas in prop::collection::vec(-1.0e6f64..1.0e6f64, 0..24),
            max_zoom in 1i32..200,
        ) {
            let hardware = FakeHardware::new();
            let mut controller = controller_with_range(&hardware, max_zoom);
            let state = hardware.last_opened().unwrap();

            for delta in deltas {
                controller.change_zoom(delta);
                let zoom = state.lock().unwrap().parameters.zoom;
                prop_assert!((0..=max_zoom).contains(&zoom));
            }
        }
    }
}

mod preview_fuzz {
    use super::*;
    use zoomcheck::preview::{
        display_orientation_degrees, optimal_preview_size, preferred_dimensions,
    };
    use zoomcheck::types::{CameraFacing, DisplayRotation, PreviewSize};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Whatever it picks, the selection came from the offered list.
        #[test]
        fn fuzz_optimal_size_comes_from_list(
            pairs in prop::collection::vec((1u32..5000, 1u32..5000), 0..40),
            target_width in 1u32..5000,
            target_height in 1u32..5000,
        ) {
            let sizes: Vec<PreviewSize> = pairs
                .into_iter()
                .map(|(w, h)| PreviewSize::new(w, h))
                .collect();

            match optimal_preview_size(&sizes, target_width, target_height, 0.1) {
                Some(best) => prop_assert!(sizes.contains(&best)),
                None => prop_assert!(sizes.is_empty()),
            }
        }

        /// Measurement must be total, degenerate sizes included.
        #[test]
        fn fuzz_preferred_dimensions_never_panics(
            size_width in 0u32..10000,
            size_height in 0u32..10000,
            proposed_width in 0u32..10000,
            proposed_height in 0u32..10000,
        ) {
            let size = PreviewSize::new(size_width, size_height);
            let _ = preferred_dimensions(Some(size), proposed_width, proposed_height);

            prop_assert_eq!(
                preferred_dimensions(None, proposed_width, proposed_height),
                (proposed_width, proposed_height)
            );
        }

        /// The correction lands in 0..360 for any sensor reading.
        #[test]
        fn fuzz_orientation_lands_in_circle(
            sensor in -720i32..720,
            rotation_index in 0usize..4,
            front in proptest::bool::ANY,
        ) {
            let rotation = [
                DisplayRotation::Deg0,
                DisplayRotation::Deg90,
                DisplayRotation::Deg180,
                DisplayRotation::Deg270,
            ][rotation_index];
            let facing = if front { CameraFacing::Front } else { CameraFacing::Back };

            let degrees = display_orientation_degrees(facing, rotation, sensor);
            prop_assert!((0..360).contains(&degrees));
        }
    }
}

mod gesture_fuzz {
    use super::*;
    use zoomcheck::gesture::{PinchTracker, ScaleGestureAdapter};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Pinching out and back by the same factor cancels out.
        #[test]
        fn fuzz_scale_symmetry(
            factor in 0.001f64..1000.0,
            multiplier in 0.1f64..1000.0,
        ) {
            let adapter = ScaleGestureAdapter::new(multiplier);
            let there = adapter.delta_for_scale(factor);
            let back = adapter.delta_for_scale(1.0 / factor);
            prop_assert!((there + back).abs() < 1e-6);
        }

        /// Tracker factors are always finite and non-negative.
        #[test]
        fn fuzz_tracker_factors_stay_finite(
            points in prop::collection::vec(
                (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6, -1.0e6f64..1.0e6, -1.0e6f64..1.0e6),
                0..20,
            ),
        ) {
            let mut tracker = PinchTracker::new();
            for (x1, y1, x2, y2) in points {
                let factor = tracker.update((x1, y1), (x2, y2));
                prop_assert!(factor.is_finite());
                prop_assert!(factor >= 0.0);
            }
        }
    }
}
