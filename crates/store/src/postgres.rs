//! PostgreSQL durable backend for preference records.
//!
//! Implements [`DurableStore`] over two JSONB document tables
//! (`userdata`, `guilddata`). The table name is interpolated into the SQL,
//! so it is checked against the closed set of known tables first.
//!
//! # Feature gate
//!
//! This module is behind the `postgres` feature flag (on by default):
//!
//! ```toml
//! berean-store = { workspace = true, features = ["postgres"] }
//! ```

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use tracing::{debug, info};

use berean_core::{DurableStore, EntityKind, StoreError};

/// PostgreSQL system of record for preference data.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect with a small pool. Connection failure is a
    /// [`StoreError::Unavailable`].
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(format!("PostgreSQL connection failed: {e}")))?;

        info!("Connected to PostgreSQL for preference store");
        Ok(Self { pool })
    }

    /// Create from an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the preference tables if they do not exist.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        let migration_sql = include_str!("../migrations/001_create_preferences.sql");

        sqlx::raw_sql(migration_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Migration failed: {e}")))?;

        info!("Preference schema migration complete");
        Ok(())
    }
}

/// Reject table names outside the known set before they reach SQL.
fn checked_table(table: &str) -> Result<&str, StoreError> {
    let known = [EntityKind::User.table(), EntityKind::Guild.table()];
    if known.contains(&table) {
        Ok(table)
    } else {
        Err(StoreError::QueryFailed(format!("unknown table: {table}")))
    }
}

/// Classify a sqlx error: connectivity faults are `Unavailable`, the rest
/// are query failures.
fn map_sqlx_error(context: &str, e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("{context}: {e}"))
        }
        other => StoreError::QueryFailed(format!("{context}: {other}")),
    }
}

#[async_trait]
impl DurableStore for PostgresStore {
    async fn read(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let table = checked_table(table)?;
        let row = sqlx::query(&format!("SELECT data FROM {table} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("read failed", e))?;

        Ok(row.map(|r| r.get::<serde_json::Value, _>("data")))
    }

    async fn upsert(
        &self,
        table: &str,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<(), StoreError> {
        let table = checked_table(table)?;
        sqlx::query(&format!(
            "INSERT INTO {table} (id, data) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data"
        ))
        .bind(id)
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("upsert failed", e))?;

        debug!(%id, %table, "upserted preference row");
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<u64, StoreError> {
        let table = checked_table(table)?;
        let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete failed", e))?;

        Ok(result.rows_affected())
    }
}

// ── Unit tests (no DB required) ──────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tables_pass_the_check() {
        assert_eq!(checked_table("userdata").unwrap(), "userdata");
        assert_eq!(checked_table("guilddata").unwrap(), "guilddata");
    }

    #[test]
    fn unknown_tables_are_rejected() {
        let err = checked_table("userdata; DROP TABLE userdata").unwrap_err();
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }

    #[test]
    fn connectivity_faults_map_to_unavailable() {
        let err = map_sqlx_error("read failed", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));

        let err = map_sqlx_error("read failed", sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }
}
