use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::MAX_SUBJECT_LENGTH;
use super::errors::TokenError;
use super::token::Token;

/// The only algorithm tokens are signed with and accepted under.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and validates signed, time-bounded tokens.
///
/// Tokens are HS256 JWTs over a fixed [`Claims`] structure. The accepted
/// algorithm list is pinned to HS256; the `alg` a token names in its header
/// is never used to pick a verifier.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret
    /// * `ttl` - Lifetime of issued tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from `now` until `now + ttl`.
    ///
    /// Signing is deterministic: identical inputs produce identical tokens.
    ///
    /// # Errors
    /// * `SubjectTooLong` - Subject exceeds [`MAX_SUBJECT_LENGTH`] bytes
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        privileged: bool,
        now: DateTime<Utc>,
    ) -> Result<Token, TokenError> {
        if subject.len() > MAX_SUBJECT_LENGTH {
            return Err(TokenError::SubjectTooLong {
                max: MAX_SUBJECT_LENGTH,
                actual: subject.len(),
            });
        }

        let claims = Claims::new(subject, privileged, now, self.ttl);

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map(Token::new)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry at `now`.
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is malformed, unsigned, signed with another
    ///   secret or algorithm, or carries an out-of-policy subject
    /// * `Expired` - Signature is valid and `now >= exp`
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked below against the caller's clock, without leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Unauthenticated(e.to_string()))?;

        if claims.subject.len() > MAX_SUBJECT_LENGTH {
            return Err(TokenError::Unauthenticated(
                "subject exceeds maximum length".to_string(),
            ));
        }

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
