//! # Berean Core
//!
//! Domain types, traits, and error definitions for the Berean Bible-lookup
//! bot. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator (chat platform, scripture database, cache,
//! durable store) is defined as a trait here. Implementations live in their
//! respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod book;
pub mod channel;
pub mod error;
pub mod provider;
pub mod store;
pub mod translation;

// Re-export key types at crate root for ergonomics
pub use book::BookId;
pub use channel::{NavigationCommand, NavigationInput, RenderedPage, ResponseHandle, UserId};
pub use error::{ChannelError, PaginationError, ProviderError, StoreError};
pub use provider::{ContentProvider, Verse};
pub use store::{Cache, DurableStore, EntityKind, GuildPreferences, UserPreferences};
pub use translation::Translation;
