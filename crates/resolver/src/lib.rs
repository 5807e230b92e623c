//! # Berean Resolver
//!
//! Resolves free-text book references ("gen", "1 Samuel", "revelations")
//! to canonical [`BookId`]s via a tiered lookup cascade.
//!
//! The cascade is ordered by specificity and cost: exact abbreviation hits
//! are both the most common input and the cheapest check; the misspelling
//! table is a last resort. Every tier is an exact-string membership test
//! against a precomputed table — no edit-distance computation anywhere, so
//! resolution stays O(1) amortized per tier.
//!
//! "No match" is a normal outcome (`None`), never an error.

mod tables;

pub use tables::BookTable;

use std::collections::HashMap;

use berean_core::BookId;

/// The normalized forms of a raw input tried against each tier, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchCandidate {
    /// Lowercased and trimmed.
    exact: String,
    /// `exact` with all internal whitespace removed.
    stripped: String,
    /// `exact` with internal whitespace runs collapsed to single spaces.
    collapsed: String,
}

impl MatchCandidate {
    fn normalize(raw: &str) -> Self {
        let exact = raw.trim().to_lowercase();
        let stripped = exact.split_whitespace().collect::<String>();
        let collapsed = exact.split_whitespace().collect::<Vec<_>>().join(" ");

        Self {
            exact,
            stripped,
            collapsed,
        }
    }

    fn variants(&self) -> [&str; 3] {
        [&self.exact, &self.stripped, &self.collapsed]
    }
}

/// The tiered book-reference resolver.
///
/// Holds its tables by value; construct once at startup and share.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    table: BookTable,
    /// Tier 3: canonical display names, lowercased.
    display_names: HashMap<String, BookId>,
}

impl ReferenceResolver {
    pub fn new(table: BookTable) -> Self {
        let display_names = BookId::all()
            .map(|book| (book.display_name().to_lowercase(), book))
            .collect();

        Self {
            table,
            display_names,
        }
    }

    /// Resolve a free-text book reference. Matching is case-insensitive and
    /// tolerant of internal whitespace variation. First tier to hit wins;
    /// no tier is re-entered once passed.
    pub fn resolve(&self, raw_input: &str) -> Option<BookId> {
        let candidate = MatchCandidate::normalize(raw_input);
        if candidate.exact.is_empty() {
            return None;
        }

        // Tier 1: abbreviation / full-name table.
        for variant in candidate.variants() {
            if let Some(&book) = self.table.abbreviations.get(variant) {
                return Some(book);
            }
        }

        // Tier 2: configurable alias map, indirected through tier 1 keys.
        for variant in candidate.variants() {
            if let Some(abbr) = self.table.aliases.get(variant) {
                if let Some(&book) = self.table.abbreviations.get(abbr) {
                    return Some(book);
                }
            }
        }

        // Tier 3: canonical display names.
        for variant in candidate.variants() {
            if let Some(&book) = self.display_names.get(variant) {
                return Some(book);
            }
        }

        // Tier 4: known misspellings, plain lowercase form only.
        self.table.corrections.get(&candidate.exact).copied()
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new(BookTable::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ReferenceResolver {
        ReferenceResolver::default()
    }

    #[test]
    fn resolves_abbreviations() {
        let r = resolver();
        assert_eq!(r.resolve("gen").map(BookId::as_u8), Some(1));
        assert_eq!(r.resolve("rev").map(BookId::as_u8), Some(66));
        assert_eq!(r.resolve("psa").map(BookId::as_u8), Some(19));
    }

    #[test]
    fn resolves_spaced_numbered_books() {
        let r = resolver();
        assert_eq!(r.resolve("1 sa").map(BookId::as_u8), Some(9));
        assert_eq!(r.resolve("1sa").map(BookId::as_u8), Some(9));
        assert_eq!(r.resolve("1 Samuel").map(BookId::as_u8), Some(9));
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        let r = resolver();
        for input in ["GEN", " gen ", "Gen", "  GeN  "] {
            assert_eq!(r.resolve(input), r.resolve("gen"), "input {input:?}");
        }
        assert_eq!(
            r.resolve("song   of   solomon").map(BookId::as_u8),
            Some(22)
        );
    }

    #[test]
    fn display_names_resolve_to_their_own_id() {
        let r = resolver();
        for book in BookId::all() {
            assert_eq!(r.resolve(book.display_name()), Some(book));
        }
    }

    #[test]
    fn aliases_resolve() {
        let r = resolver();
        assert_eq!(r.resolve("psalm").map(BookId::as_u8), Some(19));
        assert_eq!(r.resolve("Song of Songs").map(BookId::as_u8), Some(22));
        assert_eq!(r.resolve("apocalypse").map(BookId::as_u8), Some(66));
    }

    #[test]
    fn misspellings_resolve_last() {
        let r = resolver();
        assert_eq!(r.resolve("revelations").map(BookId::as_u8), Some(66));
        assert_eq!(r.resolve("phillipians").map(BookId::as_u8), Some(50));
    }

    #[test]
    fn unknown_and_empty_inputs_miss() {
        let r = resolver();
        assert_eq!(r.resolve("Nonexistentbook"), None);
        assert_eq!(r.resolve(""), None);
        assert_eq!(r.resolve("   "), None);
    }

    #[test]
    fn custom_tables_are_injectable() {
        let mut table = BookTable::english();
        table
            .aliases
            .insert("bereshit".into(), "gen".into());
        let r = ReferenceResolver::new(table);
        assert_eq!(r.resolve("Bereshit").map(BookId::as_u8), Some(1));
    }
}
