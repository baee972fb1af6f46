//! Gesture dispatch use case

use crate::domain::gesture::GestureOutcome;
use crate::domain::session::{Role, Screen};

/// Action a classified gesture maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    /// SwipeLeft: capture a frame and describe the surroundings
    DescribeScene,
    /// SwipeRight: speak the current date and time
    AnnounceDateTime,
    /// SwipeUp: open the messaging screen
    OpenMessages,
    /// SwipeDown: read the latest admin message aloud
    ReadLastAdminMessage,
    /// Hold: activate SOS
    ActivateSos,
    /// Hold while the SOS screen is showing: stand down
    CancelSos,
}

/// A gesture resolved to its action plus the on-screen notice shown
/// before the action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutedGesture {
    pub notice: Option<&'static str>,
    pub action: GestureAction,
}

/// Maps classified gestures to actions for the logged-in user.
///
/// Only client users drive actions from gestures; for any other role
/// every outcome routes to nothing. The messaging screen never reaches
/// this point because the classifier itself is gated there.
#[derive(Debug, Clone, Copy)]
pub struct GestureRouter {
    role: Role,
}

impl GestureRouter {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Resolve one classified outcome against the current screen.
    ///
    /// # Returns
    /// The routed action, or None when the gesture maps to nothing
    /// (sub-threshold outcome or non-client user).
    pub fn route(&self, screen: Screen, outcome: GestureOutcome) -> Option<RoutedGesture> {
        if !self.role.is_client() {
            return None;
        }

        let routed = match outcome {
            GestureOutcome::None => return None,
            GestureOutcome::SwipeLeft => RoutedGesture {
                notice: Some("Left swipe detected."),
                action: GestureAction::DescribeScene,
            },
            GestureOutcome::SwipeRight => RoutedGesture {
                notice: Some("Right swipe detected."),
                action: GestureAction::AnnounceDateTime,
            },
            GestureOutcome::SwipeUp => RoutedGesture {
                notice: Some("Up swipe detected. Message interface opened."),
                action: GestureAction::OpenMessages,
            },
            GestureOutcome::SwipeDown => RoutedGesture {
                notice: Some("Down swipe detected. Reading last message from admin."),
                action: GestureAction::ReadLastAdminMessage,
            },
            GestureOutcome::Hold => {
                if screen == Screen::Sos {
                    RoutedGesture {
                        notice: None,
                        action: GestureAction::CancelSos,
                    }
                } else {
                    RoutedGesture {
                        notice: Some("Hold gesture detected. SOS activated!"),
                        action: GestureAction::ActivateSos,
                    }
                }
            }
        };

        Some(routed)
    }
}
