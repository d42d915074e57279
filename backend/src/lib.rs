//! Hello World App Backend Library
//!
//! Account persistence and the register/login/logout flow behind the GUI.
//! Rendering lives in the `hello-world-app` crate; nothing here depends on it.

pub mod config;
pub mod error;
/// Session state management
///
/// Handles the preference store, the account record, and the auth flow.
pub mod state;

pub use error::AuthError;
pub use state::{AuthFlow, FileStore, MemoryStore, PreferenceStore, Screen};
