//! Gesture domain module
//!
//! The classifier consumes raw pointer events from one input surface and
//! produces discrete gesture outcomes; the double-tap detector covers the
//! messaging screen where the classifier is gated off.

mod classifier;
mod double_tap;
mod outcome;
mod sample;
mod thresholds;

pub use classifier::{
    Classification, GestureClassifier, GestureContext, GesturePhase, HOLD_ARMED_FEEDBACK,
    SWIPE_TOO_SHORT_FEEDBACK,
};
pub use double_tap::{DoubleTapDetector, DOUBLE_TAP_WINDOW_MS, TAP_SLOP_PX};
pub use outcome::GestureOutcome;
pub use sample::PointerSample;
pub use thresholds::GestureThresholds;
