//! No-op cache tier — disables the speed layer entirely.
//!
//! Every read goes straight to the durable store; correctness is
//! unchanged, only performance.

use async_trait::async_trait;
use std::time::Duration;

use berean_core::{Cache, StoreError};

/// A cache that stores nothing and never hits.
pub struct NoopCache;

#[async_trait]
impl Cache for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(None)
    }

    async fn set(
        &self,
        _key: &str,
        _value: &serde_json::Value,
        _ttl: Duration,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn del(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
