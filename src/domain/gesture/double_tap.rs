//! Double-tap detection for the messaging screen

use super::PointerSample;

/// Taps this close together (exclusive) pair into a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// A tap that drags further than this per axis is a swipe attempt, not a tap.
pub const TAP_SLOP_PX: f64 = 30.0;

/// Pairs taps on the messaging screen into double taps.
///
/// The messaging screen suppresses the swipe/hold classifier entirely; taps
/// there toggle voice recording instead. A press/release pair counts as a
/// tap only when it barely moved, and two taps pair when the second lands
/// within the window of the first. Dragged taps neither fire nor re-arm the
/// window.
#[derive(Debug, Clone, Copy)]
pub struct DoubleTapDetector {
    window_ms: u64,
    slop_px: f64,
    last_tap_ms: Option<u64>,
}

impl DoubleTapDetector {
    pub fn new() -> Self {
        Self {
            window_ms: DOUBLE_TAP_WINDOW_MS,
            slop_px: TAP_SLOP_PX,
            last_tap_ms: None,
        }
    }

    /// Register a press/release pair; returns true when it completes a
    /// double tap.
    pub fn register_tap(&mut self, press: PointerSample, release: PointerSample) -> bool {
        if release.dx(&press).abs() > self.slop_px || release.dy(&press).abs() > self.slop_px {
            return false;
        }

        let now = release.t_ms;
        let is_double = self.last_tap_ms.map_or(false, |last| {
            let gap = now.saturating_sub(last);
            gap > 0 && gap < self.window_ms
        });
        self.last_tap_ms = Some(now);
        is_double
    }

    /// Forget the pending tap (on screen changes).
    pub fn reset(&mut self) {
        self.last_tap_ms = None;
    }
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new()
    }
}
