//! `berean verse` — look up a verse range and print it in pages.

use std::time::Duration;

use anyhow::Context;

use berean_config::AppConfig;
use berean_content::{format_passage, passage_title, SqliteBible, TimeBounded};
use berean_core::{ContentProvider, Translation};
use berean_pagination::split_text;
use berean_resolver::ReferenceResolver;

/// Page size used for chat-platform messages; kept here so CLI output
/// paginates the same way the bot does.
const PAGE_CHAR_LIMIT: usize = 1900;

/// Budget for one scripture lookup before the command gives up.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn run(
    config: &AppConfig,
    book: &str,
    chapter: u32,
    start_verse: u32,
    end_verse: Option<u32>,
    translation: Option<String>,
) -> anyhow::Result<()> {
    let end_verse = end_verse.unwrap_or(start_verse);
    if start_verse > end_verse {
        println!("The start verse cannot be greater than the end verse!");
        return Ok(());
    }

    let translation = match translation {
        Some(code) => code
            .parse::<Translation>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => Translation::default(),
    };

    let resolver = ReferenceResolver::default();
    let Some(book) = resolver.resolve(book) else {
        println!("I couldn't find the book \"{book}\". Check the spelling or try the full name.");
        return Ok(());
    };

    let bible = SqliteBible::open(&config.content.bible_db_path)
        .await
        .context("opening scripture database")?;
    let bible = TimeBounded::new(bible, QUERY_TIMEOUT);

    let verses = bible
        .fetch_verse_range(book, chapter, start_verse, end_verse)
        .await?;

    let title = passage_title(book, chapter, start_verse, end_verse);
    if verses.is_empty() {
        println!("I couldn't find any verses for {title}.");
        return Ok(());
    }

    let passage = format_passage(&verses, translation);
    if passage.is_empty() {
        println!("No {translation} text is available for {title}.");
        return Ok(());
    }

    let pages = split_text(&passage, PAGE_CHAR_LIMIT)?;
    let total = pages.len();

    println!("{title} ({translation})");
    for (index, page) in pages.iter().enumerate() {
        println!();
        println!("{page}");
        if total > 1 {
            println!("-- Page {}/{} --", index + 1, total);
        }
    }

    Ok(())
}
