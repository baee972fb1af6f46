//! Screen navigation state machine

use std::fmt;

use thiserror::Error;

use super::Role;

/// Named screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    Main,
    Messages,
    Sos,
    Admin,
}

impl Screen {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Main => "main",
            Self::Messages => "messages",
            Self::Sos => "sos",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid screen transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid screen transition: cannot {action} while on the {current_screen} screen")]
pub struct InvalidScreenTransition {
    pub current_screen: Screen,
    pub action: String,
}

/// Screen flow entity.
/// Owns the currently visible screen and validates navigation.
///
/// State machine:
///   LOGIN -> MAIN (login, client) / ADMIN (login, admin)
///   MAIN -> MESSAGES (open_messages) and back (close_messages)
///   MAIN -> SOS (enter_sos) and back (leave_sos)
#[derive(Debug, Default)]
pub struct ScreenFlow {
    current: Screen,
}

impl ScreenFlow {
    /// Start on the login screen
    pub fn new() -> Self {
        Self {
            current: Screen::Login,
        }
    }

    /// Get the current screen
    pub fn current(&self) -> Screen {
        self.current
    }

    /// True while the messaging sub-screen is visible; the gesture
    /// classifier is gated off for the duration.
    pub fn messaging_active(&self) -> bool {
        self.current == Screen::Messages
    }

    /// True while the SOS screen is visible.
    pub fn sos_active(&self) -> bool {
        self.current == Screen::Sos
    }

    /// Leave the login screen for the role's home screen
    pub fn login(&mut self, role: Role) -> Result<(), InvalidScreenTransition> {
        if self.current != Screen::Login {
            return Err(self.invalid("log in"));
        }
        self.current = match role {
            Role::Client => Screen::Main,
            Role::Admin => Screen::Admin,
        };
        Ok(())
    }

    /// Open the messaging sub-screen (SwipeUp)
    pub fn open_messages(&mut self) -> Result<(), InvalidScreenTransition> {
        if self.current != Screen::Main {
            return Err(self.invalid("open messages"));
        }
        self.current = Screen::Messages;
        Ok(())
    }

    /// Return from the messaging sub-screen to the dashboard
    pub fn close_messages(&mut self) -> Result<(), InvalidScreenTransition> {
        if self.current != Screen::Messages {
            return Err(self.invalid("close messages"));
        }
        self.current = Screen::Main;
        Ok(())
    }

    /// Show the SOS screen after activation
    pub fn enter_sos(&mut self) -> Result<(), InvalidScreenTransition> {
        if self.current != Screen::Main {
            return Err(self.invalid("enter SOS"));
        }
        self.current = Screen::Sos;
        Ok(())
    }

    /// Dismiss the SOS screen after cancellation
    pub fn leave_sos(&mut self) -> Result<(), InvalidScreenTransition> {
        if self.current != Screen::Sos {
            return Err(self.invalid("leave SOS"));
        }
        self.current = Screen::Main;
        Ok(())
    }

    fn invalid(&self, action: &str) -> InvalidScreenTransition {
        InvalidScreenTransition {
            current_screen: self.current,
            action: action.to_string(),
        }
    }
}
