use async_trait::async_trait;

use crate::admission::errors::AdmissionError;

/// Token validation as consumed by the gateway.
///
/// The gateway knows nothing about passwords or claim construction; it only
/// asks whether the presented credential is currently valid.
#[async_trait]
pub trait TokenValidator: Send + Sync + 'static {
    /// Validate the raw `Authorization` header value of an incoming request.
    ///
    /// # Arguments
    /// * `authorization` - Header value, `None` when the header is absent
    ///
    /// # Returns
    /// Claims of the admitted token
    ///
    /// # Errors
    /// * `MissingCredentials` - No credential presented
    /// * `Unauthenticated` - Credential is invalid or expired
    /// * `AuthServiceUnavailable` - Validation could not be performed
    async fn validate(&self, authorization: Option<String>)
        -> Result<auth::Claims, AdmissionError>;
}
