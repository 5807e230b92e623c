//! # Berean Content
//!
//! The bundled scripture database: a read-only SQLite file with one row
//! per verse and one text column per translation code. Implements
//! [`ContentProvider`] for the command layer.
//!
//! A translation column that is missing or NULL for a verse is an absence
//! (not every translation covers every verse), never an error.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use berean_core::book::superscript;
use berean_core::{BookId, ContentProvider, ProviderError, Translation, Verse};

/// Read-only SQLite scripture database.
pub struct SqliteBible {
    pool: SqlitePool,
}

impl SqliteBible {
    /// Open the database file read-only.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|e| {
                ProviderError::Unavailable(format!("scripture database open failed: {e}"))
            })?;

        info!(path = %path.as_ref().display(), "Opened scripture database");
        Ok(Self { pool })
    }

    /// Create from an existing pool (tests).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Pull every translation column present on a verse row.
fn row_to_verse(row: &sqlx::sqlite::SqliteRow) -> Verse {
    let verse_number: i64 = row.get("verse");

    let mut texts = HashMap::new();
    for translation in Translation::ALL {
        // Column may be absent in older database files; both absence and
        // NULL mean "this translation has no text here".
        if let Ok(Some(text)) =
            row.try_get::<Option<String>, _>(translation.as_str().to_lowercase().as_str())
        {
            texts.insert(translation, text);
        }
    }

    Verse {
        verse_number: verse_number as u32,
        texts,
    }
}

#[async_trait]
impl ContentProvider for SqliteBible {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn fetch_verse_range(
        &self,
        book: BookId,
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    ) -> Result<Vec<Verse>, ProviderError> {
        let rows = sqlx::query(
            "SELECT * FROM verses \
             WHERE bookid = ? AND chapter = ? AND verse BETWEEN ? AND ? \
             ORDER BY verse ASC",
        )
        .bind(book.as_u8() as i64)
        .bind(chapter as i64)
        .bind(start_verse as i64)
        .bind(end_verse as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProviderError::QueryFailed(format!("verse range lookup failed: {e}")))?;

        debug!(%book, chapter, start_verse, end_verse, rows = rows.len(), "fetched verse range");
        Ok(rows.iter().map(row_to_verse).collect())
    }
}

/// Decorates a [`ContentProvider`] with a per-query time budget.
///
/// A lookup that outlives the budget is abandoned and surfaces as
/// [`ProviderError::Timeout`]; the command layer reports it instead of
/// hanging the interaction.
pub struct TimeBounded<P> {
    inner: P,
    budget: Duration,
}

impl<P> TimeBounded<P> {
    pub fn new(inner: P, budget: Duration) -> Self {
        Self { inner, budget }
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for TimeBounded<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_verse_range(
        &self,
        book: BookId,
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    ) -> Result<Vec<Verse>, ProviderError> {
        tokio::time::timeout(
            self.budget,
            self.inner
                .fetch_verse_range(book, chapter, start_verse, end_verse),
        )
        .await
        .map_err(|_| ProviderError::Timeout {
            timeout_secs: self.budget.as_secs(),
        })?
    }
}

/// Join a verse range into one passage, each verse prefixed with its
/// number in superscript. Verses without text in the requested
/// translation are skipped.
pub fn format_passage(verses: &[Verse], translation: Translation) -> String {
    verses
        .iter()
        .filter_map(|v| {
            v.text(translation)
                .map(|text| format!("{} {}", superscript(v.verse_number), text))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The conventional passage title, e.g. `Genesis 1:1-3` or `John 3:16`.
pub fn passage_title(book: BookId, chapter: u32, start_verse: u32, end_verse: u32) -> String {
    if end_verse > start_verse {
        format!("{book} {chapter}:{start_verse}-{end_verse}")
    } else {
        format!("{book} {chapter}:{start_verse}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(number: u32, pairs: &[(Translation, &str)]) -> Verse {
        Verse {
            verse_number: number,
            texts: pairs
                .iter()
                .map(|(t, s)| (*t, s.to_string()))
                .collect(),
        }
    }

    #[test]
    fn passage_formatting_uses_superscript_numbers() {
        let verses = vec![
            verse(1, &[(Translation::Bsb, "In the beginning")]),
            verse(2, &[(Translation::Bsb, "Now the earth was formless")]),
        ];

        let passage = format_passage(&verses, Translation::Bsb);
        assert_eq!(passage, "¹ In the beginning ² Now the earth was formless");
    }

    #[test]
    fn verses_missing_the_translation_are_skipped() {
        let verses = vec![
            verse(1, &[(Translation::Bsb, "first")]),
            verse(2, &[(Translation::Kjv, "second")]),
            verse(3, &[(Translation::Bsb, "third")]),
        ];

        let passage = format_passage(&verses, Translation::Bsb);
        assert_eq!(passage, "¹ first ³ third");
    }

    #[test]
    fn empty_range_formats_to_empty_string() {
        assert_eq!(format_passage(&[], Translation::Bsb), "");
    }

    #[test]
    fn titles_collapse_single_verse_ranges() {
        let john = BookId::new(43).unwrap();
        assert_eq!(passage_title(john, 3, 16, 16), "John 3:16");
        assert_eq!(passage_title(john, 3, 16, 18), "John 3:16-18");
    }

    #[tokio::test]
    async fn fetch_against_in_memory_database() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        sqlx::raw_sql(
            "CREATE TABLE verses (bookid INTEGER, chapter INTEGER, verse INTEGER, \
                                  bsb TEXT, kjv TEXT); \
             INSERT INTO verses VALUES (43, 3, 16, 'For God so loved the world', NULL); \
             INSERT INTO verses VALUES (43, 3, 17, NULL, 'For God sent not his Son'); \
             INSERT INTO verses VALUES (43, 4, 1, 'other chapter', NULL);",
        )
        .execute(&pool)
        .await
        .unwrap();

        let bible = SqliteBible::from_pool(pool);
        let john = BookId::new(43).unwrap();
        let verses = bible.fetch_verse_range(john, 3, 16, 17).await.unwrap();

        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].verse_number, 16);
        assert_eq!(
            verses[0].text(Translation::Bsb),
            Some("For God so loved the world")
        );
        assert!(verses[0].text(Translation::Kjv).is_none());
        assert_eq!(
            verses[1].text(Translation::Kjv),
            Some("For God sent not his Son")
        );
    }

    /// Answers after a fixed delay, for exercising the time budget.
    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait]
    impl ContentProvider for SlowProvider {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_verse_range(
            &self,
            _book: BookId,
            _chapter: u32,
            start_verse: u32,
            _end_verse: u32,
        ) -> Result<Vec<Verse>, ProviderError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![verse(start_verse, &[(Translation::Bsb, "text")])])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookup_surfaces_as_timeout() {
        let provider = TimeBounded::new(
            SlowProvider {
                delay: Duration::from_secs(30),
            },
            Duration::from_secs(5),
        );

        let r#gen = BookId::new(1).unwrap();
        let result = provider.fetch_verse_range(r#gen, 1, 1, 3).await;
        assert!(matches!(
            result,
            Err(ProviderError::Timeout { timeout_secs: 5 })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_within_budget_passes_through() {
        let provider = TimeBounded::new(
            SlowProvider {
                delay: Duration::from_secs(1),
            },
            Duration::from_secs(5),
        );

        let r#gen = BookId::new(1).unwrap();
        let verses = provider.fetch_verse_range(r#gen, 1, 1, 1).await.unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].verse_number, 1);
    }

    #[tokio::test]
    async fn absent_range_is_empty_not_an_error() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        sqlx::raw_sql("CREATE TABLE verses (bookid INTEGER, chapter INTEGER, verse INTEGER, bsb TEXT);")
            .execute(&pool)
            .await
            .unwrap();

        let bible = SqliteBible::from_pool(pool);
        let r#gen = BookId::new(1).unwrap();
        let verses = bible.fetch_verse_range(r#gen, 51, 1, 3).await.unwrap();
        assert!(verses.is_empty());
    }
}
