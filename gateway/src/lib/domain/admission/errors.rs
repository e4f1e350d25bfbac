use thiserror::Error;

/// Reasons a request is refused admission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Not authorized")]
    Unauthenticated,

    #[error("Token expired")]
    Expired,

    #[error("Auth service unavailable: {0}")]
    AuthServiceUnavailable(String),
}
