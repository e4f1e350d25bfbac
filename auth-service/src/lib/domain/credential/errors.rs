use thiserror::Error;

/// Top-level error for credential and token operations.
///
/// Request-time kinds (`InvalidCredentials`, `MissingCredentials`,
/// `Unauthenticated`, `Expired`) map one-to-one onto client responses.
/// The rest are infrastructure failures.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown identifier or wrong password. The two are never distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Token expired")]
    Expired,

    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(auth::TokenError),
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Unauthenticated(reason) => AuthError::Unauthenticated(reason),
            auth::TokenError::Expired => AuthError::Expired,
            other => AuthError::Token(other),
        }
    }
}
