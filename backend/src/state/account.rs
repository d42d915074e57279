// Account record
// The single registered name/email/password tuple and its validation

use super::persistence::PersistenceError;
use super::store::{PreferenceStore, StoreKey};
use crate::error::AuthError;

/// The one account this device knows about
///
/// The password is kept and stored as plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
}

impl AccountRecord {
    /// Build a record from registration input
    ///
    /// Every field must be non-empty and the confirmation must equal the
    /// password exactly. Whitespace counts as content.
    pub fn from_registration(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, AuthError> {
        if [name, email, password, confirm_password]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(AuthError::Validation);
        }

        if password != confirm_password {
            return Err(AuthError::Mismatch);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Write the record and mark the account as registered
    ///
    /// The flag goes last, so an interrupted save never reports a
    /// registration whose fields were not written.
    pub fn save<S: PreferenceStore>(&self, store: &mut S) -> Result<(), PersistenceError> {
        store.set_string(StoreKey::UserName, &self.name)?;
        store.set_string(StoreKey::UserEmail, &self.email)?;
        store.set_string(StoreKey::UserPassword, &self.password)?;
        store.set_bool(StoreKey::IsRegistered, true)
    }

    /// Whether the given credentials exactly match what is stored
    ///
    /// Absent stored values never match, not even empty input.
    pub fn matches_stored<S: PreferenceStore>(store: &S, email: &str, password: &str) -> bool {
        let stored_email = store.get_string(StoreKey::UserEmail);
        let stored_password = store.get_string(StoreKey::UserPassword);
        stored_email.as_deref() == Some(email) && stored_password.as_deref() == Some(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::MemoryStore;

    #[test]
    fn test_from_registration_valid() {
        let record = AccountRecord::from_registration("Alice", "a@x.com", "pw1", "pw1").unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.password, "pw1");
    }

    #[test]
    fn test_from_registration_empty_fields() {
        let cases = [
            ("", "a@x.com", "pw1", "pw1"),
            ("Alice", "", "pw1", "pw1"),
            ("Alice", "a@x.com", "", "pw1"),
            ("Alice", "a@x.com", "pw1", ""),
            ("", "", "", ""),
        ];
        for (name, email, password, confirm) in cases {
            assert_eq!(
                AccountRecord::from_registration(name, email, password, confirm),
                Err(AuthError::Validation)
            );
        }
    }

    #[test]
    fn test_empty_check_runs_before_mismatch() {
        // Empty confirmation also differs from the password; emptiness wins
        assert_eq!(
            AccountRecord::from_registration("Alice", "a@x.com", "pw1", ""),
            Err(AuthError::Validation)
        );
    }

    #[test]
    fn test_from_registration_mismatch() {
        assert_eq!(
            AccountRecord::from_registration("Alice", "a@x.com", "pw1", "pw2"),
            Err(AuthError::Mismatch)
        );
        // Case-sensitive, no trimming
        assert_eq!(
            AccountRecord::from_registration("Alice", "a@x.com", "pw1", "PW1"),
            Err(AuthError::Mismatch)
        );
        assert_eq!(
            AccountRecord::from_registration("Alice", "a@x.com", "pw1", "pw1 "),
            Err(AuthError::Mismatch)
        );
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        assert!(AccountRecord::from_registration(" ", " ", " ", " ").is_ok());
    }

    #[test]
    fn test_save_writes_all_keys() {
        let mut store = MemoryStore::new();
        let record = AccountRecord::from_registration("Alice", "a@x.com", "pw1", "pw1").unwrap();
        record.save(&mut store).unwrap();

        assert!(store.get_bool(StoreKey::IsRegistered));
        assert_eq!(store.get_string(StoreKey::UserName).as_deref(), Some("Alice"));
        assert_eq!(store.get_string(StoreKey::UserEmail).as_deref(), Some("a@x.com"));
        assert_eq!(store.get_string(StoreKey::UserPassword).as_deref(), Some("pw1"));
    }

    #[test]
    fn test_matches_stored() {
        let mut store = MemoryStore::new();
        assert!(!AccountRecord::matches_stored(&store, "", ""));

        AccountRecord::from_registration("Alice", "a@x.com", "pw1", "pw1")
            .unwrap()
            .save(&mut store)
            .unwrap();

        assert!(AccountRecord::matches_stored(&store, "a@x.com", "pw1"));
        assert!(!AccountRecord::matches_stored(&store, "A@x.com", "pw1"));
        assert!(!AccountRecord::matches_stored(&store, "a@x.com", "pw"));
        assert!(!AccountRecord::matches_stored(&store, " a@x.com", "pw1"));
    }
}
