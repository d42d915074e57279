//! Auth flow controller
//!
//! Selects which screen is shown and implements register, login and logout.
//! The registration flag is durable and read from the store at startup; the
//! logged-in flag lives only as long as the controller.

use super::account::AccountRecord;
use super::store::{PreferenceStore, StoreKey};
use crate::error::AuthError;

/// Greeting name used when no name is stored
pub const DEFAULT_USER_NAME: &str = "User";

/// The screen the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// No account yet, showing the registration form
    Registering,
    /// Account exists, showing the login form
    AwaitingLogin,
    /// Logged in, showing the home screen
    LoggedIn,
}

impl Screen {
    /// Heading shown at the top of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Registering => "Register",
            Screen::AwaitingLogin => "Login",
            Screen::LoggedIn => "Home Page",
        }
    }
}

/// Register/login/logout state machine over an injected store
///
/// | from | operation | to |
/// |---|---|---|
/// | any | `register` ok | `LoggedIn` |
/// | any | `login` ok | `LoggedIn` |
/// | any | `register`/`login` error | unchanged |
/// | `LoggedIn` | `logout` | `AwaitingLogin` (or `Registering` if never registered) |
#[derive(Debug)]
pub struct AuthFlow<S> {
    store: S,
    /// Persisted flag, cached from the store
    registered: bool,
    /// Session flag, never persisted
    logged_in: bool,
}

impl<S: PreferenceStore> AuthFlow<S> {
    /// Create a controller, reading the registration flag from `store`
    pub fn new(store: S) -> Self {
        let registered = store.get_bool(StoreKey::IsRegistered);
        tracing::debug!(registered, "Auth flow initialized");
        Self {
            store,
            registered,
            logged_in: false,
        }
    }

    /// Screen to display for the current state
    pub fn screen(&self) -> Screen {
        if self.logged_in {
            Screen::LoggedIn
        } else if self.registered {
            Screen::AwaitingLogin
        } else {
            Screen::Registering
        }
    }

    /// Whether an account has been registered
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Whether the session is logged in
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Register a new account and log in
    ///
    /// Overwrites any previously registered account. Validation failures
    /// write nothing to the store.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        let record = AccountRecord::from_registration(name, email, password, confirm_password)?;
        record.save(&mut self.store)?;

        self.registered = true;
        self.logged_in = true;
        tracing::info!("Account registered, logged in");
        Ok(())
    }

    /// Log in with the stored credentials
    ///
    /// Both values must match exactly. The error does not say which one was
    /// wrong, and the state is left unchanged on failure.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        if !AccountRecord::matches_stored(&self.store, email, password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.logged_in = true;
        tracing::info!("Logged in");
        Ok(())
    }

    /// End the session. The stored account is kept.
    pub fn logout(&mut self) {
        self.logged_in = false;
        tracing::info!("Logged out");
    }

    /// Stored display name, if any
    pub fn account_name(&self) -> Option<String> {
        self.store.get_string(StoreKey::UserName)
    }

    /// Name to greet on the home screen
    pub fn welcome_name(&self) -> String {
        self.account_name()
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string())
    }

    /// Read access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}
