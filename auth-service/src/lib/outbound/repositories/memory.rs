use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credential::errors::AuthError;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::ports::CredentialStore;

/// Credential store held in process memory.
///
/// Used for tests and for embedding the service without a database.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.records.read().await.get(identifier).cloned())
    }

    async fn upsert(&self, record: UserRecord) -> Result<(), AuthError> {
        self.records
            .write()
            .await
            .insert(record.identifier.clone(), record);
        Ok(())
    }
}
