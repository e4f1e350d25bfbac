//! Credential primitives shared by the auth service and its consumers.
//!
//! - Password hashing (Argon2id, configurable cost)
//! - Token issuance and validation (HS256 JWT with a fixed claim set)
//!
//! Services own their storage and HTTP surfaces; this crate holds only the
//! cryptography, so a gateway can depend on the claim types without pulling
//! in the password store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenError;
//! use auth::TokenService;
//! use chrono::Duration;
//! use chrono::Utc;
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let now = Utc::now();
//!
//! let token = service.issue("root@email.com", true, now).unwrap();
//! let claims = service.validate(token.as_str(), now).unwrap();
//! assert_eq!(claims.subject, "root@email.com");
//! assert!(claims.privileged);
//!
//! let expired = service.validate(token.as_str(), now + Duration::hours(24));
//! assert_eq!(expired, Err(TokenError::Expired));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::Token;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use jwt::MAX_SUBJECT_LENGTH;
pub use password::PasswordError;
pub use password::PasswordHasher;
