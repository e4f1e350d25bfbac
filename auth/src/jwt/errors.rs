use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Subject too long: maximum {max} bytes, got {actual}")]
    SubjectTooLong { max: usize, actual: usize },

    /// Malformed, unsigned, wrongly signed or signed with another algorithm.
    #[error("Token is invalid: {0}")]
    Unauthenticated(String),

    /// Signature is valid but the token is past its expiration.
    #[error("Token is expired")]
    Expired,
}
