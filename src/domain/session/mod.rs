//! Session domain module
//!
//! Roles, the demo account directory, screen navigation, and the dictation
//! cycle state.

mod accounts;
mod dictation;
mod screen;

pub use accounts::{AuthError, InvalidRoleError, Role, UserAccount, UserDirectory};
pub use dictation::{DictationSession, DictationState, InvalidDictationTransition};
pub use screen::{InvalidScreenTransition, Screen, ScreenFlow};
