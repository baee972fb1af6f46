//! Gesture detection thresholds

/// Tunable distances and durations for gesture detection.
///
/// The defaults reproduce the app's shipped behavior and are the values the
/// rest of this crate is tested against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Press duration (inclusive) that qualifies as a hold.
    pub hold_threshold_ms: u64,
    /// Per-axis movement beyond which a pending hold is cancelled.
    pub move_cancel_px: f64,
    /// Minimum dominant-axis displacement for a swipe to register.
    pub min_swipe_px: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            hold_threshold_ms: 1000,
            move_cancel_px: 10.0,
            min_swipe_px: 50.0,
        }
    }
}
