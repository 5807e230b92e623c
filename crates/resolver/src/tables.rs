//! The static book-name tables the resolver matches against.
//!
//! All tables are immutable after construction and injected into the
//! resolver, so alternate locales can be substituted wholesale in tests or
//! configuration. Nothing here is consulted as ambient global state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use berean_core::BookId;

/// The common three-letter abbreviation for each book, canonical order.
const ABBREVIATIONS: [&str; 66] = [
    "gen", "exo", "lev", "num", "deu", "jos", "jdg", "rut", "1sa", "2sa", "1ki", "2ki", "1ch",
    "2ch", "ezr", "neh", "est", "job", "psa", "pro", "ecc", "sos", "isa", "jer", "lam", "eze",
    "dan", "hos", "joe", "amo", "oba", "jon", "mic", "nah", "hab", "zep", "hag", "zec", "mal",
    "mat", "mar", "luk", "joh", "act", "rom", "1co", "2co", "gal", "eph", "php", "col", "1th",
    "2th", "1ti", "2ti", "tit", "phm", "heb", "jam", "1pe", "2pe", "1jo", "2jo", "3jo", "jde",
    "rev",
];

/// The four lookup tables of the resolution cascade, in tier order.
///
/// `aliases` maps alternate names to an abbreviation in `abbreviations`
/// (alternate data sources and locales hook in here); `corrections` maps
/// known common misspellings straight to a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTable {
    /// Tier 1: abbreviation and full English name, lowercase.
    pub abbreviations: HashMap<String, BookId>,

    /// Tier 2: alias → abbreviation key into tier 1.
    pub aliases: HashMap<String, String>,

    /// Tier 4: misspelling → book.
    pub corrections: HashMap<String, BookId>,
}

impl BookTable {
    /// The built-in English tables.
    pub fn english() -> Self {
        let mut abbreviations = HashMap::new();
        for (index, abbr) in ABBREVIATIONS.iter().enumerate() {
            let book = BookId::new(index as u8 + 1).expect("static table covers 1..=66");
            abbreviations.insert((*abbr).to_string(), book);
            abbreviations.insert(book.display_name().to_lowercase(), book);
        }

        let aliases = [
            ("ps", "psa"),
            ("psalm", "psa"),
            ("song of songs", "sos"),
            ("canticles", "sos"),
            ("qoheleth", "ecc"),
            ("apocalypse", "rev"),
        ]
        .into_iter()
        .map(|(alias, abbr)| (alias.to_string(), abbr.to_string()))
        .collect();

        let corrections = [
            ("revelations", 66),
            ("pslams", 19),
            ("pslam", 19),
            ("phillipians", 50),
            ("philipians", 50),
            ("collosians", 51),
            ("galations", 48),
            ("isiah", 23),
        ]
        .into_iter()
        .map(|(misspelling, id)| {
            let book = BookId::new(id).expect("static table covers 1..=66");
            (misspelling.to_string(), book)
        })
        .collect();

        Self {
            abbreviations,
            aliases,
            corrections,
        }
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_book_has_an_abbreviation_and_full_name() {
        let table = BookTable::english();
        for book in BookId::all() {
            assert!(
                table
                    .abbreviations
                    .values()
                    .any(|&mapped| mapped == book),
                "no abbreviation maps to {book}"
            );
            assert_eq!(
                table.abbreviations.get(&book.display_name().to_lowercase()),
                Some(&book)
            );
        }
    }

    #[test]
    fn aliases_point_at_real_abbreviations() {
        let table = BookTable::english();
        for abbr in table.aliases.values() {
            assert!(
                table.abbreviations.contains_key(abbr),
                "alias target {abbr} missing from tier 1"
            );
        }
    }
}
