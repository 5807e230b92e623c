//! # Berean Store
//!
//! The tiered preference store: a best-effort [`Cache`] in front of a
//! [`DurableStore`] system of record, with schema validation on every
//! write path.
//!
//! Semantics:
//! - `get` is read-through: cache hit wins; a durable hit repopulates the
//!   cache with a bounded TTL; a miss is **never** cached, so a later write
//!   is observable without invalidation.
//! - `set` validates first, then writes through cache and durable store;
//!   success is reported only once the durable write lands.
//! - `update` overlays only fields already present on the stored record —
//!   a field the record does not have is a validation failure, which keeps
//!   the schemas closed.
//! - Cache faults degrade to the durable store with a warning; they never
//!   surface as errors. Durable faults propagate.
//!
//! Concurrent `update`s on the same id are last-write-wins at the durable
//! store; preference writes are rare and user-initiated one at a time.

mod memory_cache;
mod noop;
#[cfg(feature = "postgres")]
mod postgres;

pub use memory_cache::MemoryCache;
pub use noop::NoopCache;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use berean_core::{
    Cache, DurableStore, EntityKind, GuildPreferences, StoreError, UserPreferences,
};

/// Default cache TTL: six hours.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(21_600);

/// The tiered preference store.
pub struct PreferenceStore {
    cache: Arc<dyn Cache>,
    durable: Arc<dyn DurableStore>,
    cache_ttl: Duration,
}

impl PreferenceStore {
    pub fn new(cache: Arc<dyn Cache>, durable: Arc<dyn DurableStore>) -> Self {
        Self {
            cache,
            durable,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Override the cache TTL (bounded staleness window).
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Read one record. Cache first, durable store on miss; durable hits
    /// repopulate the cache. Misses are never cached.
    pub async fn get(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let key = kind.key(id);

        match self.cache.get(&key).await {
            Ok(Some(value)) => {
                debug!(%key, "cache hit");
                return Ok(Some(value));
            }
            Ok(None) => {}
            Err(e) => warn!(%key, "cache read failed, falling back to durable store: {e}"),
        }

        let Some(value) = self.durable.read(kind.table(), &key).await? else {
            return Ok(None);
        };

        if let Err(e) = self.cache.set(&key, &value, self.cache_ttl).await {
            warn!(%key, "cache population failed: {e}");
        }
        Ok(Some(value))
    }

    /// Validate and write one record through both tiers.
    ///
    /// On validation failure nothing is written to either tier. Success is
    /// reported only if the durable write succeeds.
    pub async fn set(
        &self,
        kind: EntityKind,
        id: &str,
        record: &serde_json::Value,
    ) -> Result<(), StoreError> {
        validate(kind, record)?;

        let key = kind.key(id);
        if let Err(e) = self.cache.set(&key, record, self.cache_ttl).await {
            warn!(%key, "cache write failed: {e}");
        }

        self.durable.upsert(kind.table(), &key, record).await?;
        debug!(%key, "stored preference record");
        Ok(())
    }

    /// Overlay `partial` onto the stored record and write the result back.
    ///
    /// Fails with [`StoreError::NotFound`] when no record exists (update
    /// never upserts) and with [`StoreError::ValidationFailed`] when
    /// `partial` names a field the stored record does not have.
    pub async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        partial: &serde_json::Value,
    ) -> Result<(), StoreError> {
        let Some(current) = self.get(kind, id).await? else {
            return Err(StoreError::NotFound {
                kind: kind.to_string(),
                id: id.to_string(),
            });
        };

        let merged = overlay(current, partial)?;
        self.set(kind, id, &merged).await
    }

    /// Delete one record. The cache is only evicted when the durable
    /// delete actually removed a row; returns whether it did.
    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<bool, StoreError> {
        let key = kind.key(id);
        let rows = self.durable.delete(kind.table(), &key).await?;

        if rows == 0 {
            return Ok(false);
        }

        if let Err(e) = self.cache.del(&key).await {
            warn!(%key, "cache eviction failed, entry will age out: {e}");
        }
        Ok(true)
    }

    // --- Typed conveniences for the command layer ---

    pub async fn get_user(&self, id: &str) -> Result<Option<UserPreferences>, StoreError> {
        self.get(EntityKind::User, id)
            .await?
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| StoreError::Serialization(e.to_string()))
            })
            .transpose()
    }

    pub async fn set_user(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        let value = serde_json::to_value(prefs)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.set(EntityKind::User, &prefs.id, &value).await
    }
}

/// Check a record against its kind's schema. The typed records use
/// `deny_unknown_fields`, so deserializing is the whole check.
fn validate(kind: EntityKind, record: &serde_json::Value) -> Result<(), StoreError> {
    let result = match kind {
        EntityKind::User => {
            serde_json::from_value::<UserPreferences>(record.clone()).map(|_| ())
        }
        EntityKind::Guild => {
            serde_json::from_value::<GuildPreferences>(record.clone()).map(|_| ())
        }
    };

    result.map_err(|e| StoreError::ValidationFailed(format!("{kind} record invalid: {e}")))
}

/// Overlay the fields of `partial` onto `current`. Every overlaid field
/// must already exist on `current`.
fn overlay(
    mut current: serde_json::Value,
    partial: &serde_json::Value,
) -> Result<serde_json::Value, StoreError> {
    let Some(partial_map) = partial.as_object() else {
        return Err(StoreError::ValidationFailed(
            "partial update must be a JSON object".into(),
        ));
    };
    let Some(current_map) = current.as_object_mut() else {
        return Err(StoreError::ValidationFailed(
            "stored record is not a JSON object".into(),
        ));
    };

    for (field, value) in partial_map {
        if !current_map.contains_key(field) {
            return Err(StoreError::ValidationFailed(format!(
                "unknown field in update: {field}"
            )));
        }
        current_map.insert(field.clone(), value.clone());
    }

    Ok(current)
}
