//! Canonical book identity.
//!
//! Every book of the Bible has a fixed canonical ID, 1 (Genesis) through
//! 66 (Revelation), in Old+New Testament ordering. The `canonicalId →
//! displayName` mapping is a fixed bijective table known at startup and is
//! the only "bit-exact" book contract shared with other implementations.

use serde::{Deserialize, Serialize};

/// Number of books in the canon.
pub const BOOK_COUNT: u8 = 66;

/// Display names indexed by `canonical_id - 1`.
const DISPLAY_NAMES: [&str; BOOK_COUNT as usize] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// A validated canonical book identifier in `1..=66`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BookId(u8);

impl TryFrom<u8> for BookId {
    type Error = String;

    fn try_from(id: u8) -> std::result::Result<Self, Self::Error> {
        BookId::new(id).ok_or_else(|| format!("book id {id} out of range 1..=66"))
    }
}

impl From<BookId> for u8 {
    fn from(book: BookId) -> u8 {
        book.0
    }
}

impl BookId {
    /// Construct from a canonical number. Returns `None` outside `1..=66`.
    pub fn new(id: u8) -> Option<Self> {
        (1..=BOOK_COUNT).contains(&id).then_some(Self(id))
    }

    /// The canonical number, `1..=66`.
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// The fixed English display name for this book.
    pub fn display_name(self) -> &'static str {
        DISPLAY_NAMES[(self.0 - 1) as usize]
    }

    /// Iterate every book in canonical order.
    pub fn all() -> impl Iterator<Item = BookId> {
        (1..=BOOK_COUNT).map(BookId)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Render a number as Unicode superscript digits, e.g. `123` → `¹²³`.
///
/// Used to prefix verse text with its verse number.
pub fn superscript(number: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    number
        .to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_ids() {
        assert!(BookId::new(0).is_none());
        assert!(BookId::new(67).is_none());
        assert!(BookId::new(1).is_some());
        assert!(BookId::new(66).is_some());
    }

    #[test]
    fn display_names_are_a_bijection() {
        let mut seen = std::collections::HashSet::new();
        for book in BookId::all() {
            assert!(seen.insert(book.display_name()));
        }
        assert_eq!(seen.len(), BOOK_COUNT as usize);
    }

    #[test]
    fn known_display_names() {
        assert_eq!(BookId::new(1).unwrap().display_name(), "Genesis");
        assert_eq!(BookId::new(9).unwrap().display_name(), "1 Samuel");
        assert_eq!(BookId::new(19).unwrap().display_name(), "Psalms");
        assert_eq!(BookId::new(66).unwrap().display_name(), "Revelation");
    }

    #[test]
    fn superscript_multi_digit() {
        assert_eq!(superscript(123), "¹²³");
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(40), "⁴⁰");
    }

    #[test]
    fn serde_is_transparent() {
        let book = BookId::new(19).unwrap();
        assert_eq!(serde_json::to_string(&book).unwrap(), "19");
        let back: BookId = serde_json::from_str("19").unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn invalid_id_fails_deserialization() {
        // Deserialization goes through the validated constructor.
        let result: std::result::Result<BookId, _> = serde_json::from_str("99");
        assert!(result.is_err());
    }
}
