//! Gesture classification state machine

use std::fmt;

use super::{GestureOutcome, GestureThresholds, PointerSample};

/// Shown when a swipe ends below the minimum distance.
pub const SWIPE_TOO_SHORT_FEEDBACK: &str =
    "Swipe not detected. Please try again with a longer swipe.";

/// Spoken when the hold deadline elapses mid-press (informational, the hold
/// itself fires on release).
pub const HOLD_ARMED_FEEDBACK: &str = "Long press detected. Hold for SOS.";

/// Context checked at every classifier entry point.
///
/// While the messaging sub-screen is visible the classifier is gated: no
/// state transitions happen and no outcome is ever produced. Taps on that
/// screen belong to the double-tap detector instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureContext {
    pub screen_active: bool,
}

impl GestureContext {
    pub fn new(screen_active: bool) -> Self {
        Self { screen_active }
    }
}

/// Classifier phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Tracking,
    HoldArmed,
    HoldFired,
}

impl GesturePhase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Tracking => "tracking",
            Self::HoldArmed => "hold-armed",
            Self::HoldFired => "hold-fired",
        }
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of finalizing a gesture cycle on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub outcome: GestureOutcome,
    /// Feedback to speak for a recognized no-op; `None` for real outcomes.
    pub feedback: Option<&'static str>,
}

impl Classification {
    fn of(outcome: GestureOutcome) -> Self {
        Self {
            outcome,
            feedback: None,
        }
    }

    fn too_short() -> Self {
        Self {
            outcome: GestureOutcome::None,
            feedback: Some(SWIPE_TOO_SHORT_FEEDBACK),
        }
    }
}

/// Gesture classifier entity.
///
/// Consumes raw pointer events for one input surface and produces one
/// [`GestureOutcome`] per press/release cycle. All state is owned by the
/// instance; construct one per surface and drive it from a single task.
///
/// State machine:
///   IDLE -> TRACKING (pointer_down, gate open)
///   TRACKING -> HOLD_ARMED (hold deadline elapses uncancelled)
///   TRACKING/HOLD_ARMED: movement beyond the cancel radius drops hold
///     candidacy only; the cycle keeps tracking toward a swipe from the
///     original start sample
///   TRACKING/HOLD_ARMED -> HOLD_FIRED -> IDLE (pointer_up, duration >=
///     threshold and never cancelled)
///   TRACKING -> IDLE (pointer_up, swipe classification)
///
/// The hold timer is a deadline value, not a background task: the host event
/// loop reads [`hold_deadline_ms`](Self::hold_deadline_ms), sleeps until it,
/// and calls [`hold_elapsed`](Self::hold_elapsed). Cancellation clears the
/// deadline synchronously, so a fired hold notice is at most once per cycle
/// by construction.
#[derive(Debug, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    phase: GesturePhase,
    start: Option<PointerSample>,
    hold_deadline_ms: Option<u64>,
    hold_cancelled: bool,
}

impl GestureClassifier {
    /// Create a classifier with the shipped thresholds
    pub fn new() -> Self {
        Self::with_thresholds(GestureThresholds::default())
    }

    /// Create a classifier with custom thresholds
    pub fn with_thresholds(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            phase: GesturePhase::Idle,
            start: None,
            hold_deadline_ms: None,
            hold_cancelled: false,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Pending hold deadline, if a hold is still a candidate this cycle.
    pub fn hold_deadline_ms(&self) -> Option<u64> {
        self.hold_deadline_ms
    }

    /// Begin a gesture cycle.
    ///
    /// A press while a stale cycle is still tracked discards that cycle and
    /// starts fresh (single-pointer surfaces never interleave cycles).
    pub fn pointer_down(&mut self, ctx: GestureContext, sample: PointerSample) {
        if ctx.screen_active {
            return;
        }
        self.phase = GesturePhase::Tracking;
        self.start = Some(sample);
        self.hold_deadline_ms = Some(sample.t_ms + self.thresholds.hold_threshold_ms);
        self.hold_cancelled = false;
    }

    /// Observe movement within a cycle.
    ///
    /// Movement beyond the cancel radius on either axis cancels hold
    /// candidacy; tracking continues for swipe purposes and the original
    /// start sample stays the swipe origin.
    pub fn pointer_move(&mut self, ctx: GestureContext, sample: PointerSample) {
        if ctx.screen_active {
            return;
        }
        let Some(start) = self.start else {
            return;
        };
        if self.hold_cancelled {
            return;
        }
        let limit = self.thresholds.move_cancel_px;
        if sample.dx(&start).abs() > limit || sample.dy(&start).abs() > limit {
            self.hold_cancelled = true;
            self.hold_deadline_ms = None;
            if self.phase == GesturePhase::HoldArmed {
                self.phase = GesturePhase::Tracking;
            }
        }
    }

    /// React to the hold deadline elapsing.
    ///
    /// Returns the interim announcement when the deadline genuinely fired
    /// this cycle; a deadline observed after cancellation or release returns
    /// `None` and changes nothing.
    pub fn hold_elapsed(&mut self, ctx: GestureContext, now_ms: u64) -> Option<&'static str> {
        if ctx.screen_active {
            return None;
        }
        let deadline = self.hold_deadline_ms?;
        if now_ms < deadline || self.phase != GesturePhase::Tracking {
            return None;
        }
        self.hold_deadline_ms = None;
        self.phase = GesturePhase::HoldArmed;
        Some(HOLD_ARMED_FEEDBACK)
    }

    /// Finalize the cycle.
    ///
    /// Returns `None` while gated or when no cycle is in flight; otherwise
    /// exactly one [`Classification`]. The hold decision is arithmetic over
    /// the sample pair (duration meets the threshold and movement never
    /// exceeded the cancel radius), so it does not race the deadline.
    pub fn pointer_up(
        &mut self,
        ctx: GestureContext,
        sample: PointerSample,
    ) -> Option<Classification> {
        if ctx.screen_active {
            return None;
        }
        let start = self.start?;

        let held = sample.elapsed_since(&start) >= self.thresholds.hold_threshold_ms;
        if held && !self.hold_cancelled {
            self.phase = GesturePhase::HoldFired;
            self.reset();
            return Some(Classification::of(GestureOutcome::Hold));
        }

        let classification = self.classify_swipe(&start, &sample);
        self.reset();
        Some(classification)
    }

    /// Swipe classification over the captured sample pair.
    ///
    /// Horizontal wins only on a strict majority; an exact tie falls into
    /// the vertical branch.
    fn classify_swipe(&self, start: &PointerSample, end: &PointerSample) -> Classification {
        let dh = end.dx(start);
        let dv = end.dy(start);
        let min = self.thresholds.min_swipe_px;

        if dh.abs() > dv.abs() {
            if dh.abs() < min {
                Classification::too_short()
            } else if dh > 0.0 {
                Classification::of(GestureOutcome::SwipeRight)
            } else {
                Classification::of(GestureOutcome::SwipeLeft)
            }
        } else if dv.abs() < min {
            Classification::too_short()
        } else if dv > 0.0 {
            Classification::of(GestureOutcome::SwipeDown)
        } else {
            Classification::of(GestureOutcome::SwipeUp)
        }
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.start = None;
        self.hold_deadline_ms = None;
        self.hold_cancelled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> GestureContext {
        GestureContext::new(false)
    }

    fn gated() -> GestureContext {
        GestureContext::new(true)
    }

    fn sample(x: f64, y: f64, t_ms: u64) -> PointerSample {
        PointerSample::new(x, y, t_ms)
    }

    /// Press at the origin, release at the given offset/time, return the
    /// classification.
    fn swipe(dx: f64, dy: f64, duration_ms: u64) -> Classification {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        classifier
            .pointer_up(open(), sample(100.0 + dx, 100.0 + dy, duration_ms))
            .unwrap()
    }

    #[test]
    fn new_classifier_is_idle() {
        let classifier = GestureClassifier::new();
        assert_eq!(classifier.phase(), GesturePhase::Idle);
        assert_eq!(classifier.hold_deadline_ms(), None);
    }

    #[test]
    fn pointer_down_starts_tracking_with_deadline() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 250));

        assert_eq!(classifier.phase(), GesturePhase::Tracking);
        assert_eq!(classifier.hold_deadline_ms(), Some(1250));
    }

    #[test]
    fn horizontal_dominant_long_enough_classifies_left_right() {
        assert_eq!(swipe(60.0, 10.0, 300).outcome, GestureOutcome::SwipeRight);
        assert_eq!(swipe(-60.0, 10.0, 300).outcome, GestureOutcome::SwipeLeft);
    }

    #[test]
    fn vertical_dominant_long_enough_classifies_up_down() {
        assert_eq!(swipe(10.0, 60.0, 300).outcome, GestureOutcome::SwipeDown);
        assert_eq!(swipe(10.0, -60.0, 300).outcome, GestureOutcome::SwipeUp);
    }

    #[test]
    fn dominant_axis_below_minimum_is_none_with_feedback() {
        let horizontal = swipe(40.0, 5.0, 300);
        assert_eq!(horizontal.outcome, GestureOutcome::None);
        assert_eq!(horizontal.feedback, Some(SWIPE_TOO_SHORT_FEEDBACK));

        let vertical = swipe(5.0, -40.0, 300);
        assert_eq!(vertical.outcome, GestureOutcome::None);
        assert_eq!(vertical.feedback, Some(SWIPE_TOO_SHORT_FEEDBACK));
    }

    #[test]
    fn exact_minimum_distance_registers() {
        assert_eq!(swipe(50.0, 0.0, 300).outcome, GestureOutcome::SwipeRight);
        assert_eq!(swipe(0.0, -50.0, 300).outcome, GestureOutcome::SwipeUp);
    }

    #[test]
    fn tie_goes_to_the_vertical_branch() {
        // dh == dv == 60: horizontal needs a strict majority, so this is a
        // vertical swipe, never a horizontal one.
        let classification = swipe(60.0, 60.0, 300);
        assert_eq!(classification.outcome, GestureOutcome::SwipeDown);

        let classification = swipe(-60.0, -60.0, 300);
        assert_eq!(classification.outcome, GestureOutcome::SwipeUp);
    }

    #[test]
    fn left_swipe_scenario() {
        // start (100,100), end (40,100) after 300ms
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let classification = classifier.pointer_up(open(), sample(40.0, 100.0, 300)).unwrap();
        assert_eq!(classification.outcome, GestureOutcome::SwipeLeft);
    }

    #[test]
    fn up_swipe_scenario() {
        // start (100,100), end (100,40) after 300ms
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let classification = classifier.pointer_up(open(), sample(100.0, 40.0, 300)).unwrap();
        assert_eq!(classification.outcome, GestureOutcome::SwipeUp);
    }

    #[test]
    fn still_press_past_threshold_is_hold() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        assert_eq!(classifier.hold_elapsed(open(), 1000), Some(HOLD_ARMED_FEEDBACK));
        assert_eq!(classifier.phase(), GesturePhase::HoldArmed);

        let classification = classifier
            .pointer_up(open(), sample(100.0, 100.0, 1100))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::Hold);
        assert_eq!(classification.feedback, None);
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }

    #[test]
    fn hold_threshold_is_inclusive() {
        // Release at exactly 1000ms holds, even if the deadline callback
        // never got a chance to run.
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let classification = classifier
            .pointer_up(open(), sample(100.0, 100.0, 1000))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::Hold);
    }

    #[test]
    fn release_just_under_threshold_is_not_hold() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let classification = classifier.pointer_up(open(), sample(100.0, 100.0, 999)).unwrap();
        assert_eq!(classification.outcome, GestureOutcome::None);
    }

    #[test]
    fn movement_beyond_radius_cancels_hold_but_not_tracking() {
        // 12px at t=200 cancels hold candidacy; release at t=1200 must be
        // evaluated as a swipe from the ORIGINAL start sample.
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        classifier.pointer_move(open(), sample(112.0, 100.0, 200));

        assert_eq!(classifier.hold_deadline_ms(), None);
        assert_eq!(classifier.phase(), GesturePhase::Tracking);
        assert_eq!(classifier.hold_elapsed(open(), 1000), None);

        let classification = classifier
            .pointer_up(open(), sample(170.0, 100.0, 1200))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::SwipeRight);
    }

    #[test]
    fn movement_within_radius_keeps_hold_candidacy() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        // Exactly at the radius: cancellation needs a strict excess.
        classifier.pointer_move(open(), sample(110.0, 110.0, 200));
        assert_eq!(classifier.hold_deadline_ms(), Some(1000));

        let classification = classifier
            .pointer_up(open(), sample(110.0, 110.0, 1100))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::Hold);
    }

    #[test]
    fn vertical_movement_alone_cancels_hold() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        classifier.pointer_move(open(), sample(100.0, 111.0, 200));
        assert_eq!(classifier.hold_deadline_ms(), None);
    }

    #[test]
    fn movement_after_arming_clears_the_armed_flag() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        classifier.hold_elapsed(open(), 1000);
        assert_eq!(classifier.phase(), GesturePhase::HoldArmed);

        classifier.pointer_move(open(), sample(115.0, 100.0, 1050));
        assert_eq!(classifier.phase(), GesturePhase::Tracking);

        let classification = classifier
            .pointer_up(open(), sample(160.0, 100.0, 1200))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::SwipeRight);
    }

    #[test]
    fn hold_and_swipe_are_mutually_exclusive() {
        // A long uncancelled press is a Hold even when the release sample
        // travelled a swipe-worthy distance in its final instants.
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let classification = classifier
            .pointer_up(open(), sample(200.0, 100.0, 1500))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::Hold);
    }

    #[test]
    fn hold_notice_fires_at_most_once() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        assert!(classifier.hold_elapsed(open(), 1000).is_some());
        assert!(classifier.hold_elapsed(open(), 1001).is_none());
    }

    #[test]
    fn hold_notice_before_deadline_is_ignored() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        assert!(classifier.hold_elapsed(open(), 999).is_none());
        assert_eq!(classifier.phase(), GesturePhase::Tracking);
    }

    #[test]
    fn stale_deadline_after_release_is_ignored() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        classifier.pointer_up(open(), sample(100.0, 100.0, 300));
        assert!(classifier.hold_elapsed(open(), 1000).is_none());
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }

    #[test]
    fn gated_surface_produces_no_outcomes() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(gated(), sample(100.0, 100.0, 0));
        assert_eq!(classifier.phase(), GesturePhase::Idle);
        assert_eq!(classifier.hold_deadline_ms(), None);

        classifier.pointer_move(gated(), sample(200.0, 100.0, 100));
        assert!(classifier.hold_elapsed(gated(), 1000).is_none());
        assert!(classifier.pointer_up(gated(), sample(200.0, 100.0, 1200)).is_none());
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut classifier = GestureClassifier::new();
        assert!(classifier.pointer_up(open(), sample(10.0, 10.0, 50)).is_none());
    }

    #[test]
    fn press_discards_a_stale_cycle() {
        let mut classifier = GestureClassifier::new();
        classifier.pointer_down(open(), sample(0.0, 0.0, 0));
        classifier.pointer_down(open(), sample(100.0, 100.0, 2000));

        assert_eq!(classifier.hold_deadline_ms(), Some(3000));
        let classification = classifier
            .pointer_up(open(), sample(160.0, 100.0, 2300))
            .unwrap();
        assert_eq!(classification.outcome, GestureOutcome::SwipeRight);
    }

    #[test]
    fn classifier_is_reusable_across_cycles() {
        let mut classifier = GestureClassifier::new();

        classifier.pointer_down(open(), sample(100.0, 100.0, 0));
        let first = classifier.pointer_up(open(), sample(40.0, 100.0, 300)).unwrap();
        assert_eq!(first.outcome, GestureOutcome::SwipeLeft);

        classifier.pointer_down(open(), sample(100.0, 100.0, 1000));
        classifier.hold_elapsed(open(), 2000);
        let second = classifier
            .pointer_up(open(), sample(100.0, 100.0, 2100))
            .unwrap();
        assert_eq!(second.outcome, GestureOutcome::Hold);
    }

    #[test]
    fn phase_display() {
        assert_eq!(GesturePhase::Idle.to_string(), "idle");
        assert_eq!(GesturePhase::Tracking.to_string(), "tracking");
        assert_eq!(GesturePhase::HoldArmed.to_string(), "hold-armed");
        assert_eq!(GesturePhase::HoldFired.to_string(), "hold-fired");
    }
}
