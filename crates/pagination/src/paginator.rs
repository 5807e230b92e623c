//! Deterministic splitting of large content into bounded pages.
//!
//! Two content shapes are supported: free text split on word boundaries,
//! and ordered lists of opaque entries. In both, a semantic unit (a word,
//! one entry) is never broken across pages, and concatenating the pages in
//! order reconstructs the input losslessly.
//!
//! Invalid limits are programming errors and fail fast with
//! [`PaginationError::InvalidLimit`]; they are never silently clamped.

use berean_core::PaginationError;

/// Split free text into pages of at most `max_chars` characters, breaking
/// only at word boundaries.
///
/// Limits are counted in characters, not bytes: superscript verse numbers
/// and other multi-byte text fill a page no faster than ASCII.
///
/// A page is sealed when appending the next word (with its separating
/// space) would reach or exceed `max_chars`. A single word at least
/// `max_chars` long is never truncated — it gets a page of its own.
///
/// Empty or whitespace-only input yields a single empty page, never zero
/// pages.
pub fn split_text(text: &str, max_chars: usize) -> Result<Vec<String>, PaginationError> {
    if max_chars == 0 {
        return Err(PaginationError::InvalidLimit(
            "max_chars must be > 0".into(),
        ));
    }

    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if !current.is_empty() && current_chars + 1 + word_chars >= max_chars {
            pages.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    Ok(pages)
}

/// A structured entry that knows its serialized length in characters.
pub trait PageEntry {
    fn char_len(&self) -> usize;
}

impl PageEntry for String {
    fn char_len(&self) -> usize {
        self.chars().count()
    }
}

impl PageEntry for &str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }
}

/// Split an ordered entry list into pages holding at most `max_units`
/// entries and at most `max_chars` serialized characters — whichever limit
/// triggers first seals the page. An entry is never split across pages;
/// an entry longer than `max_chars` by itself gets its own page.
///
/// An empty list yields a single empty page.
pub fn split_entries<T: PageEntry>(
    entries: Vec<T>,
    max_units: usize,
    max_chars: usize,
) -> Result<Vec<Vec<T>>, PaginationError> {
    if max_units == 0 {
        return Err(PaginationError::InvalidLimit(
            "max_units must be > 0".into(),
        ));
    }
    if max_chars == 0 {
        return Err(PaginationError::InvalidLimit(
            "max_chars must be > 0".into(),
        ));
    }

    let mut pages: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut current_chars = 0usize;

    for entry in entries {
        let entry_chars = entry.char_len();
        let full = current.len() == max_units || current_chars + entry_chars > max_chars;

        if full && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        current_chars += entry_chars;
        current.push(entry);
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    Ok(pages)
}
