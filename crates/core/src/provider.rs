//! The scripture content-provider seam.
//!
//! A [`ContentProvider`] serves verse text for a book/chapter/verse-range
//! request across every translation it carries. Absence of a particular
//! translation for a verse is normal (not every source covers every code)
//! and is represented by a missing map entry, never an error.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::book::BookId;
use crate::error::ProviderError;
use crate::translation::Translation;

/// One verse with its text in every available translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse number within the chapter.
    pub verse_number: u32,

    /// Text keyed by translation. Missing codes mean the source has no
    /// text for that translation.
    pub texts: HashMap<Translation, String>,
}

impl Verse {
    /// The verse text in the requested translation, if present.
    pub fn text(&self, translation: Translation) -> Option<&str> {
        self.texts.get(&translation).map(String::as_str)
    }
}

/// The content-provider trait.
///
/// Implementations: the bundled SQLite scripture database; mocks in tests.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// The provider name (e.g., "sqlite").
    fn name(&self) -> &str;

    /// Fetch `start_verse..=end_verse` of one chapter, ordered by verse
    /// number. An empty result means the range does not exist; that is the
    /// caller's "not found" case, not a fault.
    async fn fetch_verse_range(
        &self,
        book: BookId,
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    ) -> std::result::Result<Vec<Verse>, ProviderError>;
}
