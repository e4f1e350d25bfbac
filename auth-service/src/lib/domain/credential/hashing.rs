use std::sync::Arc;

use auth::PasswordError;
use auth::PasswordHasher;
use tokio::sync::Semaphore;

/// Runs password hashing on the blocking thread pool.
///
/// Argon2 is CPU-bound for tens of milliseconds per call. Work is moved off
/// the async workers with `spawn_blocking`, and a semaphore caps how many
/// hashes run at once so a login burst cannot occupy every core.
#[derive(Clone)]
pub struct HashingPool {
    hasher: Arc<PasswordHasher>,
    permits: Arc<Semaphore>,
}

impl HashingPool {
    /// Create a pool running at most `max_concurrent` hash operations.
    pub fn new(hasher: PasswordHasher, max_concurrent: usize) -> Self {
        Self {
            hasher: Arc::new(hasher),
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("Hashing task failed: {}", e)))?
    }

    pub async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| {
                PasswordError::VerificationFailed(format!("Verification task failed: {}", e))
            })?
    }
}
