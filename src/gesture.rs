//! Pinch-to-zoom input mapping.

use crate::config::GestureConfig;
use crate::controller::ZoomController;

/// Turns pinch scale factors into zoom deltas.
///
/// The delta is `ln(factor) * multiplier`, so factors `f` and `1/f` move
/// the zoom by the same amount in opposite directions and a factor of
/// exactly 1.0 moves nothing.
#[derive(Debug, Clone, Copy)]
pub struct ScaleGestureAdapter {
    multiplier: f64,
}

impl ScaleGestureAdapter {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(config.scale_multiplier)
    }

    /// The zoom delta for one scale event.
    pub fn delta_for_scale(&self, scale_factor: f64) -> f64 {
        scale_factor.ln() * self.multiplier
    }

    /// Feed one scale event to the controller as a zoom change.
    pub fn apply_scale(&self, controller: &mut ZoomController, scale_factor: f64) {
        controller.change_zoom(self.delta_for_scale(scale_factor));
    }
}

impl Default for ScaleGestureAdapter {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}

/// Tracks the span between two pointers across a pinch and turns each
/// movement into a scale factor.
///
/// Hosts whose input stack already has a scale-gesture recognizer can
/// feed its factors straight to [`ScaleGestureAdapter`]; this covers the
/// rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchTracker {
    span: Option<f64>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture from the first two-pointer position.
    pub fn begin(&mut self, first: (f64, f64), second: (f64, f64)) {
        self.span = Some(span_between(first, second));
    }

    /// Advance the gesture and return the scale factor for this movement.
    ///
    /// Without a preceding [`begin`](Self::begin), or when the previous
    /// span was degenerate, the factor is 1.0.
    pub fn update(&mut self, first: (f64, f64), second: (f64, f64)) -> f64 {
        let current = span_between(first, second);
        let factor = match self.span {
            Some(previous) if previous > 0.0 => current / previous,
            _ => 1.0,
        };
        self.span = Some(current);
        factor
    }

    /// A pointer lifted; the gesture is over.
    pub fn end(&mut self) {
        self.span = None;
    }
}

fn span_between(first: (f64, f64), second: (f64, f64)) -> f64 {
    let dx = second.0 - first.0;
    let dy = second.1 - first.1;
    (dx * dx + dy * dy).sqrt()
}
