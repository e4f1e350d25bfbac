use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::Token;
use auth::TokenService;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::hashing::HashingPool;
use crate::domain::credential::models::Credentials;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::ports::AuthenticatorPort;
use crate::domain::credential::ports::CredentialStore;

/// Password verified against when the identifier is unknown.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-identifiers";

/// Domain service implementation for login, validation and provisioning.
///
/// Tokens are always issued with `privileged = true`: there is exactly one
/// privilege tier.
pub struct Authenticator<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hashing: HashingPool,
    tokens: TokenService,
    decoy_hash: OnceCell<String>,
}

impl<S> Authenticator<S>
where
    S: CredentialStore,
{
    /// Create a new authenticator with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential store implementation
    /// * `hashing` - Password hashing pool
    /// * `tokens` - Token service holding the signing secret and TTL
    pub fn new(store: Arc<S>, hashing: HashingPool, tokens: TokenService) -> Self {
        Self {
            store,
            hashing,
            tokens,
            decoy_hash: OnceCell::new(),
        }
    }

    /// Hash the decoy password once so no login pays for it.
    ///
    /// Runs as part of [`AuthenticatorPort::provision`], which happens before
    /// the service accepts requests.
    pub async fn prepare_decoy(&self) -> Result<(), AuthError> {
        self.decoy_hash().await?;
        Ok(())
    }

    async fn decoy_hash(&self) -> Result<&String, AuthError> {
        let hash = self
            .decoy_hash
            .get_or_try_init(|| self.hashing.hash(DECOY_PASSWORD.to_string()))
            .await?;
        Ok(hash)
    }

    // Unknown identifiers still pay for one verification so they are not
    // distinguishable from wrong passwords by response time.
    async fn verify_against_decoy(&self, password: String) -> Result<(), AuthError> {
        let decoy_hash = self.decoy_hash().await?.clone();

        self.hashing.verify(password, decoy_hash).await?;
        Ok(())
    }
}

#[async_trait]
impl<S> AuthenticatorPort for Authenticator<S>
where
    S: CredentialStore,
{
    async fn login(&self, credentials: Credentials) -> Result<Token, AuthError> {
        let Credentials {
            identifier,
            password,
        } = credentials;

        let record = match self.store.find_by_identifier(&identifier).await? {
            Some(record) => record,
            None => {
                tracing::debug!(identifier = %identifier, "Login for unknown identifier");
                self.verify_against_decoy(password).await?;
                return Err(AuthError::InvalidCredentials);
            }
        };

        let is_valid = self.hashing.verify(password, record.password_hash).await?;
        if !is_valid {
            tracing::debug!(identifier = %identifier, "Login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&record.identifier, true, Utc::now())?;
        tracing::info!(identifier = %record.identifier, "Token issued");

        Ok(token)
    }

    fn validate(&self, authorization: Option<&str>) -> Result<Claims, AuthError> {
        let header = authorization.ok_or(AuthError::MissingCredentials)?;
        let token = bearer_token(header).ok_or_else(|| {
            AuthError::Unauthenticated("expected 'Bearer <token>'".to_string())
        })?;

        Ok(self.tokens.validate(token, Utc::now())?)
    }

    async fn provision(&self, credentials: Credentials) -> Result<(), AuthError> {
        // An identifier that cannot be a token subject could never log in.
        if credentials.identifier.len() > auth::MAX_SUBJECT_LENGTH {
            return Err(AuthError::Token(auth::TokenError::SubjectTooLong {
                max: auth::MAX_SUBJECT_LENGTH,
                actual: credentials.identifier.len(),
            }));
        }

        self.prepare_decoy().await?;
        let password_hash = self.hashing.hash(credentials.password).await?;

        self.store
            .upsert(UserRecord::new(credentials.identifier.clone(), password_hash))
            .await?;

        tracing::info!(identifier = %credentials.identifier, "Account provisioned");
        Ok(())
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. Returns `None` for any other
/// scheme or an empty token.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
