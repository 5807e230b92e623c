//! Error types for the Berean domain.
//!
//! One `thiserror` enum per bounded context; operations return the enum of
//! the context they belong to. There is deliberately no crate-wide
//! aggregate — the binary boundary folds these into `anyhow` instead.
//!
//! Expected "no result" outcomes (an unrecognized book name, a missing
//! preference record) are **not** errors — they are `Option`/`bool` returns
//! on the operations themselves. The enums here cover real faults.

use thiserror::Error;

/// Faults from the tiered preference store (cache + durable tiers).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable tier could not be reached. The cache tier never raises
    /// this — cache faults degrade to durable reads.
    #[error("Durable store unavailable: {0}")]
    Unavailable(String),

    /// A record failed schema validation before any write was attempted.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// `update` was called for a record that does not exist (no upsert-by-update).
    #[error("No record for {kind} id {id}")]
    NotFound { kind: String, id: String },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Record serialization failed: {0}")]
    Serialization(String),
}

/// Faults from the interactive-response channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Pushing a page update to the hosting message failed (message deleted,
    /// remote session expired, network fault). Callers at the navigation
    /// layer swallow this.
    #[error("Update delivery failed: {0}")]
    DeliveryFailed(String),

    /// Navigation input from an identity that does not own the session.
    #[error("Unauthorized navigation input from {requester_id}")]
    Unauthorized { requester_id: String },

    /// The hosting channel has been torn down.
    #[error("Channel closed: {0}")]
    Closed(String),
}

/// Programming errors in paginator usage. These fail fast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page limit: {0}")]
    InvalidLimit(String),

    #[error("Navigation session requires at least one page")]
    EmptyPages,
}

/// Faults from the scripture content provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Content lookup failed: {0}")]
    QueryFailed(String),

    #[error("Content database unavailable: {0}")]
    Unavailable(String),

    #[error("Content request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}
