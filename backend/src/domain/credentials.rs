//! Authentication primitives: login credentials and the credential table.
//!
//! Keep inbound payload parsing outside the domain by exposing a holder type
//! that carries the raw strings a handler received before it talks to the
//! credential store.

use std::collections::HashMap;

use zeroize::Zeroizing;

/// Login credentials exactly as supplied by the caller.
///
/// No normalisation is applied: usernames and passwords are compared
/// byte-for-byte, so surrounding whitespace and letter case are significant.
/// The password is zeroised on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Wrap raw username/password inputs.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Username string used for the table lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password supplied with the login attempt.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Accounts provisioned at startup. The table never changes at runtime.
const PROVISIONED_USERS: [(&str, &str); 4] = [
    ("Administrator", "Pwd&1234"),
    ("Super admin", "Pwd&1234"),
    ("User A", "Pwd&1234"),
    ("User B", "Pwd&1234"),
];

/// Immutable username → password table checked on every login attempt.
///
/// Passwords are held and compared in plain text; the service has no account
/// management, password hashing, or persistence for credentials. Unknown
/// usernames and wrong passwords are indistinguishable to callers.
#[derive(Debug)]
pub struct CredentialStore {
    users: HashMap<String, Zeroizing<String>>,
}

impl CredentialStore {
    /// Build a store from username/password pairs.
    pub fn new<U, P>(users: impl IntoIterator<Item = (U, P)>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(username, password)| (username.into(), Zeroizing::new(password.into())))
                .collect(),
        }
    }

    /// Check a username/password pair against the table.
    ///
    /// Exact, case-sensitive string equality; unknown usernames yield
    /// `false` rather than a distinct error.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected.as_str() == password)
    }
}

impl Default for CredentialStore {
    /// Store seeded with the provisioned accounts.
    fn default() -> Self {
        Self::new(PROVISIONED_USERS)
    }
}
