use std::fmt;

/// Stored account record.
///
/// Only ever holds the PHC-formatted hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub identifier: String,
    pub password_hash: String,
}

impl UserRecord {
    pub fn new(identifier: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Identifier and plaintext password supplied for a single login call.
#[derive(Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    /// Construct credentials from raw request input.
    ///
    /// # Arguments
    /// * `identifier` - Account identifier (e.g. email address)
    /// * `password` - Plaintext password, never persisted
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}
