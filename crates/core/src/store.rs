//! Storage seams and preference record schemas.
//!
//! Preference data lives in two tiers: a best-effort [`Cache`] in front of
//! a [`DurableStore`] that is the system of record. Both traits move plain
//! JSON documents; schema validation happens above them, in the preference
//! store, by deserializing into the typed records defined here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::StoreError;
use crate::translation::Translation;

/// The entity kinds the preference store is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Guild,
}

impl EntityKind {
    /// Durable-store table for this kind.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::User => "userdata",
            EntityKind::Guild => "guilddata",
        }
    }

    /// Cache/durable key for one record, e.g. `user:12345`.
    pub fn key(self, id: &str) -> String {
        match self {
            EntityKind::User => format!("user:{id}"),
            EntityKind::Guild => format!("guild:{id}"),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Guild => f.write_str("guild"),
        }
    }
}

/// Per-user stored preferences. Unknown fields are rejected at
/// deserialization, which is what enforces the closed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPreferences {
    /// Platform user id, also the primary key.
    pub id: String,

    /// Preferred translation for verse lookups.
    #[serde(default)]
    pub translation: Translation,
}

impl UserPreferences {
    pub fn new(id: impl Into<String>, translation: Translation) -> Self {
        Self {
            id: id.into(),
            translation,
        }
    }
}

/// Per-guild stored preferences. Same shape as user preferences today;
/// kept as its own schema so the kinds can diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildPreferences {
    pub id: String,

    #[serde(default)]
    pub translation: Translation,
}

/// The durable system of record. Rows are `(id, data JSONB)`.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Read one record. `None` when the id has no row.
    async fn read(
        &self,
        table: &str,
        id: &str,
    ) -> std::result::Result<Option<serde_json::Value>, StoreError>;

    /// Insert or replace one record.
    async fn upsert(
        &self,
        table: &str,
        id: &str,
        data: &serde_json::Value,
    ) -> std::result::Result<(), StoreError>;

    /// Delete one record, returning the number of rows removed (0 or 1).
    async fn delete(&self, table: &str, id: &str) -> std::result::Result<u64, StoreError>;
}

/// The best-effort speed tier. Unavailability degrades performance, never
/// correctness — callers fall back to the durable store on any error here.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> std::result::Result<Option<serde_json::Value>, StoreError>;

    async fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
        ttl: Duration,
    ) -> std::result::Result<(), StoreError>;

    async fn del(&self, key: &str) -> std::result::Result<(), StoreError>;
}
