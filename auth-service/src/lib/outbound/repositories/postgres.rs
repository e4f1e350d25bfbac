use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::credential::errors::AuthError;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::ports::CredentialStore;

#[derive(sqlx::FromRow)]
struct UserRow {
    identifier: String,
    password_hash: String,
}

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Open a pool on the server at `config.url`, using the store named `config.name`.
///
/// Any database named in the URL path is replaced by `config.name`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config
        .url
        .parse::<PgConnectOptions>()?
        .database(&config.name);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT identifier, password_hash
            FROM users
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(|r| UserRecord {
            identifier: r.identifier,
            password_hash: r.password_hash,
        }))
    }

    async fn upsert(&self, record: UserRecord) -> Result<(), AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (identifier, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (identifier) DO UPDATE SET password_hash = EXCLUDED.password_hash
            "#,
        )
        .bind(&record.identifier)
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        Ok(())
    }
}
