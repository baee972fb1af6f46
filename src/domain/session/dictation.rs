//! Voice dictation state machine

use std::fmt;

use thiserror::Error;

/// Dictation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictationState {
    #[default]
    Idle,
    Listening,
    Transcribing,
}

impl DictationState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
            Self::Transcribing => "transcribing",
        }
    }
}

impl fmt::Display for DictationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid dictation transition: cannot {action} while {current_state}")]
pub struct InvalidDictationTransition {
    pub current_state: DictationState,
    pub action: String,
}

/// Dictation session entity.
/// Tracks the double-tap driven record/transcribe cycle on the messaging
/// screen.
///
/// State machine:
///   IDLE -> LISTENING (start_listening)
///   LISTENING -> TRANSCRIBING (finish_listening)
///   LISTENING -> IDLE (cancel)
///   TRANSCRIBING -> IDLE (complete)
#[derive(Debug, Default)]
pub struct DictationSession {
    state: DictationState,
}

impl DictationSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: DictationState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> DictationState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == DictationState::Idle
    }

    /// Check if currently listening
    pub fn is_listening(&self) -> bool {
        self.state == DictationState::Listening
    }

    /// Transition from IDLE to LISTENING
    pub fn start_listening(&mut self) -> Result<(), InvalidDictationTransition> {
        if self.state != DictationState::Idle {
            return Err(self.invalid("start listening"));
        }
        self.state = DictationState::Listening;
        Ok(())
    }

    /// Transition from LISTENING to TRANSCRIBING
    pub fn finish_listening(&mut self) -> Result<(), InvalidDictationTransition> {
        if self.state != DictationState::Listening {
            return Err(self.invalid("finish listening"));
        }
        self.state = DictationState::Transcribing;
        Ok(())
    }

    /// Transition from TRANSCRIBING to IDLE
    pub fn complete(&mut self) -> Result<(), InvalidDictationTransition> {
        if self.state != DictationState::Transcribing {
            return Err(self.invalid("complete dictation"));
        }
        self.state = DictationState::Idle;
        Ok(())
    }

    /// Abandon the cycle from any state (leaving the messaging screen stops
    /// an in-progress recording without an error).
    pub fn reset(&mut self) {
        self.state = DictationState::Idle;
    }

    fn invalid(&self, action: &str) -> InvalidDictationTransition {
        InvalidDictationTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}
