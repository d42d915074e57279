// State management module
// Handles the preference store, account record, and auth flow

pub mod account;
pub mod auth_flow;
pub mod persistence;
pub mod store;

pub use account::AccountRecord;
pub use auth_flow::{AuthFlow, Screen, DEFAULT_USER_NAME};
pub use persistence::{FileStore, PersistenceError};
pub use store::{MemoryStore, PreferenceStore, StoreKey, StoreValue};
