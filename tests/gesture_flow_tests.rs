//! Gesture session flow integration tests
//!
//! Drives the gesture pipeline end to end: raw pointer samples through
//! the classifier, classified outcomes through the router, and routed
//! actions through the screen flow.

use vision_voice::application::{GestureAction, GestureRouter};
use vision_voice::domain::gesture::{
    GestureClassifier, GestureContext, GestureOutcome, PointerSample, HOLD_ARMED_FEEDBACK,
    SWIPE_TOO_SHORT_FEEDBACK,
};
use vision_voice::domain::session::{Role, Screen, ScreenFlow};

fn sample(x: f64, y: f64, t_ms: u64) -> PointerSample {
    PointerSample::new(x, y, t_ms)
}

/// The pieces a client session wires together, minus the terminal.
struct Session {
    classifier: GestureClassifier,
    router: GestureRouter,
    flow: ScreenFlow,
}

impl Session {
    fn client() -> Self {
        let mut flow = ScreenFlow::new();
        flow.login(Role::Client).unwrap();
        Self {
            classifier: GestureClassifier::new(),
            router: GestureRouter::new(Role::Client),
            flow,
        }
    }

    fn ctx(&self) -> GestureContext {
        GestureContext::new(self.flow.messaging_active())
    }

    /// Press, release, and resolve one cycle to its routed action.
    fn gesture(&mut self, press: PointerSample, release: PointerSample) -> Option<GestureAction> {
        self.classifier.pointer_down(self.ctx(), press);
        let classification = self.classifier.pointer_up(self.ctx(), release)?;
        let routed = self
            .router
            .route(self.flow.current(), classification.outcome)?;
        Some(routed.action)
    }
}

#[test]
fn swipe_up_opens_messages_and_gates_the_classifier() {
    let mut session = Session::client();

    let action = session.gesture(sample(100.0, 300.0, 0), sample(100.0, 200.0, 250));
    assert_eq!(action, Some(GestureAction::OpenMessages));

    session.flow.open_messages().unwrap();
    assert!(session.flow.messaging_active());

    // With the gate closed a full swipe produces nothing at all.
    let action = session.gesture(sample(100.0, 300.0, 1000), sample(100.0, 200.0, 1250));
    assert_eq!(action, None);
}

#[test]
fn gestures_resume_after_messages_close() {
    let mut session = Session::client();
    session.flow.open_messages().unwrap();
    session.flow.close_messages().unwrap();

    let action = session.gesture(sample(200.0, 100.0, 0), sample(80.0, 100.0, 300));
    assert_eq!(action, Some(GestureAction::DescribeScene));
}

#[test]
fn hold_fires_sos_then_second_hold_cancels() {
    let mut session = Session::client();

    let action = session.gesture(sample(100.0, 100.0, 0), sample(102.0, 101.0, 1200));
    assert_eq!(action, Some(GestureAction::ActivateSos));
    session.flow.enter_sos().unwrap();
    assert_eq!(session.flow.current(), Screen::Sos);

    let action = session.gesture(sample(100.0, 100.0, 2000), sample(100.0, 100.0, 3100));
    assert_eq!(action, Some(GestureAction::CancelSos));
    session.flow.leave_sos().unwrap();
    assert_eq!(session.flow.current(), Screen::Main);
}

#[test]
fn hold_notice_fires_once_per_cycle() {
    let mut session = Session::client();
    let ctx = session.ctx();

    session.classifier.pointer_down(ctx, sample(100.0, 100.0, 0));
    let deadline = session.classifier.hold_deadline_ms().unwrap();
    assert_eq!(deadline, 1000);

    assert_eq!(
        session.classifier.hold_elapsed(ctx, deadline),
        Some(HOLD_ARMED_FEEDBACK)
    );
    assert_eq!(session.classifier.hold_elapsed(ctx, deadline + 500), None);

    let classification = session
        .classifier
        .pointer_up(ctx, sample(100.0, 100.0, 1500))
        .unwrap();
    assert_eq!(classification.outcome, GestureOutcome::Hold);
}

#[test]
fn drift_cancels_hold_but_swipe_still_lands() {
    let mut session = Session::client();
    let ctx = session.ctx();

    session.classifier.pointer_down(ctx, sample(100.0, 100.0, 0));
    session.classifier.pointer_move(ctx, sample(112.0, 100.0, 200));

    // The deadline is gone, so the host loop never announces a hold.
    assert!(session.classifier.hold_deadline_ms().is_none());
    assert_eq!(session.classifier.hold_elapsed(ctx, 1000), None);

    // A long press that drifted still classifies as a swipe from the
    // original press point.
    let classification = session
        .classifier
        .pointer_up(ctx, sample(170.0, 100.0, 1100))
        .unwrap();
    assert_eq!(classification.outcome, GestureOutcome::SwipeRight);

    let routed = session
        .router
        .route(session.flow.current(), classification.outcome)
        .unwrap();
    assert_eq!(routed.action, GestureAction::AnnounceDateTime);
}

#[test]
fn short_swipe_feeds_back_and_routes_nothing() {
    let mut session = Session::client();
    let ctx = session.ctx();

    session.classifier.pointer_down(ctx, sample(100.0, 100.0, 0));
    let classification = session
        .classifier
        .pointer_up(ctx, sample(130.0, 100.0, 200))
        .unwrap();

    assert_eq!(classification.outcome, GestureOutcome::None);
    assert_eq!(classification.feedback, Some(SWIPE_TOO_SHORT_FEEDBACK));
    assert!(session
        .router
        .route(session.flow.current(), classification.outcome)
        .is_none());
}

#[test]
fn sos_screen_still_routes_swipes() {
    let mut session = Session::client();
    session.flow.enter_sos().unwrap();

    let action = session.gesture(sample(100.0, 100.0, 0), sample(180.0, 110.0, 300));
    assert_eq!(action, Some(GestureAction::AnnounceDateTime));
}

#[test]
fn diagonal_tie_resolves_to_the_vertical_action() {
    let mut session = Session::client();

    let action = session.gesture(sample(100.0, 100.0, 0), sample(160.0, 160.0, 300));
    assert_eq!(action, Some(GestureAction::ReadLastAdminMessage));
}
