//! Gesture outcome variants

use std::fmt;

/// The discrete result of one pointer-down to pointer-up cycle.
///
/// `None` is a recognized no-op (a swipe below the minimum distance), not an
/// error. Exactly one outcome is produced per cycle, and a Hold outcome is
/// mutually exclusive with any swipe for the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    None,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    Hold,
}

impl GestureOutcome {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::SwipeUp => "swipe-up",
            Self::SwipeDown => "swipe-down",
            Self::Hold => "hold",
        }
    }

    /// True for any of the four swipe variants.
    pub const fn is_swipe(&self) -> bool {
        matches!(
            self,
            Self::SwipeLeft | Self::SwipeRight | Self::SwipeUp | Self::SwipeDown
        )
    }
}

impl fmt::Display for GestureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(GestureOutcome::None.to_string(), "none");
        assert_eq!(GestureOutcome::SwipeLeft.to_string(), "swipe-left");
        assert_eq!(GestureOutcome::SwipeRight.to_string(), "swipe-right");
        assert_eq!(GestureOutcome::SwipeUp.to_string(), "swipe-up");
        assert_eq!(GestureOutcome::SwipeDown.to_string(), "swipe-down");
        assert_eq!(GestureOutcome::Hold.to_string(), "hold");
    }

    #[test]
    fn swipe_predicate() {
        assert!(GestureOutcome::SwipeLeft.is_swipe());
        assert!(GestureOutcome::SwipeDown.is_swipe());
        assert!(!GestureOutcome::Hold.is_swipe());
        assert!(!GestureOutcome::None.is_swipe());
    }
}
