//! # Berean Pagination
//!
//! Splitting of arbitrarily large results into bounded pages
//! ([`split_text`], [`split_entries`]) and the per-invocation navigation
//! session ([`NavigationSession`]) that pages through them interactively.

mod paginator;
mod session;

pub use paginator::{split_entries, split_text, PageEntry};
pub use session::{NavigationSession, PageRender};
