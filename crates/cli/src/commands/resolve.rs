//! `berean resolve` — exercise the book-reference resolver.

use berean_resolver::ReferenceResolver;

pub fn run(book: &str) -> anyhow::Result<()> {
    let resolver = ReferenceResolver::default();

    match resolver.resolve(book) {
        Some(id) => println!("{} => {} (book {})", book, id.display_name(), id.as_u8()),
        None => println!("I couldn't find the book \"{book}\". Check the spelling or try the full name."),
    }

    Ok(())
}
