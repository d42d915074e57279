//! Error types for the auth flow
//!
//! Every variant's display text is the message shown to the user, so the GUI
//! can surface any failure with `to_string()`.

use crate::state::PersistenceError;
use thiserror::Error;

/// Errors returned by register and login
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required registration field was empty
    #[error("All fields are required")]
    Validation,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    Mismatch,

    /// Email or password did not match the stored account.
    /// Deliberately does not say which one.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account could not be written to the preference store
    #[error("Could not save account: {0}")]
    Persistence(#[from] PersistenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AuthError::Validation.to_string(), "All fields are required");
        assert_eq!(AuthError::Mismatch.to_string(), "Passwords do not match");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_persistence_error_conversion() {
        let err: AuthError = PersistenceError::IoError("disk full".to_string()).into();
        assert_eq!(err.to_string(), "Could not save account: IO Error: disk full");
    }
}
