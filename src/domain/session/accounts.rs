//! User roles and the demo account directory

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Active user's role.
///
/// Only the client role receives spoken feedback and gesture dispatch; the
/// admin role works through the console and never triggers announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Client,
    Admin,
}

impl Role {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    pub const fn is_client(&self) -> bool {
        matches!(self, Self::Client)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Role::Client),
            "admin" => Ok(Role::Admin),
            _ => Err(InvalidRoleError {
                input: s.to_string(),
            }),
        }
    }
}

/// Error when an invalid role name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid role: \"{input}\". Valid roles are: client, admin")]
pub struct InvalidRoleError {
    pub input: String,
}

/// Error when login verification fails
#[derive(Debug, Clone, Error)]
#[error("Invalid username or password")]
pub struct AuthError;

/// A known account in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,
    pub role: Role,
}

/// Fixed demo account directory.
///
/// Ships the same two accounts as the original app; the password scheme is
/// a demo convenience, not a security boundary.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    accounts: Vec<(UserAccount, String)>,
}

impl UserDirectory {
    /// Directory with the built-in demo accounts
    pub fn with_demo_accounts() -> Self {
        Self {
            accounts: vec![
                (
                    UserAccount {
                        username: "admin".to_string(),
                        role: Role::Admin,
                    },
                    "admin123".to_string(),
                ),
                (
                    UserAccount {
                        username: "user".to_string(),
                        role: Role::Client,
                    },
                    "user123".to_string(),
                ),
            ],
        }
    }

    /// Verify credentials and return the matching account.
    pub fn verify(&self, username: &str, password: &str) -> Result<UserAccount, AuthError> {
        self.accounts
            .iter()
            .find(|(account, stored)| account.username == username && stored == password)
            .map(|(account, _)| account.clone())
            .ok_or(AuthError)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_demo_accounts()
    }
}
