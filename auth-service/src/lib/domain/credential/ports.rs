use async_trait::async_trait;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::Credentials;
use crate::domain::credential::models::UserRecord;

/// Port for credential verification and token lifecycle operations.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync + 'static {
    /// Exchange an identifier and password for a signed token.
    ///
    /// # Arguments
    /// * `credentials` - Identifier and plaintext password
    ///
    /// # Returns
    /// Privileged token for the identifier, issued now
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password
    /// * `StoreUnavailable` - Credential store operation failed
    /// * `Password` - Stored hash could not be processed
    /// * `Token` - Token issuance failed
    async fn login(&self, credentials: Credentials) -> Result<auth::Token, AuthError>;

    /// Validate the raw value of an `Authorization` header.
    ///
    /// # Arguments
    /// * `authorization` - Header value, `None` when the header is absent
    ///
    /// # Returns
    /// Claims of a valid, unexpired token
    ///
    /// # Errors
    /// * `MissingCredentials` - No header presented
    /// * `Unauthenticated` - Not a bearer header, or the token is malformed,
    ///   wrongly signed or uses another algorithm
    /// * `Expired` - Token signature is valid but its lifetime has elapsed
    fn validate(&self, authorization: Option<&str>) -> Result<auth::Claims, AuthError>;

    /// Hash a password and store it under the identifier.
    ///
    /// Replaces any existing record, so running it repeatedly is safe.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Credential store operation failed
    /// * `Password` - Hashing failed
    async fn provision(&self, credentials: Credentials) -> Result<(), AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a record by its unique identifier.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<UserRecord>, AuthError>;

    /// Insert the record, or fully replace the one with the same identifier.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn upsert(&self, record: UserRecord) -> Result<(), AuthError>;
}
