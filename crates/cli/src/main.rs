//! Berean CLI — the main entry point.
//!
//! Commands:
//! - `resolve` — Resolve a free-text book reference to its canonical ID
//! - `verse`   — Look up a verse range, paginated
//! - `prefs`   — Get/set/delete stored user preferences

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "berean", about = "Berean — Bible lookup from the command line", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "berean.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a book name or abbreviation to its canonical ID
    Resolve {
        /// Free-text book reference, e.g. "gen", "1 Samuel", "revelations"
        book: String,
    },

    /// Look up a verse range
    Verse {
        /// Book name or abbreviation
        book: String,
        /// Chapter number
        chapter: u32,
        /// First verse of the range
        start_verse: u32,
        /// Last verse of the range (defaults to the first)
        end_verse: Option<u32>,
        /// Translation code, e.g. KJV (default BSB)
        #[arg(short, long)]
        translation: Option<String>,
    },

    /// Manage stored user preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = berean_config::AppConfig::load(&cli.config)?;

    match cli.command {
        Commands::Resolve { book } => commands::resolve::run(&book),
        Commands::Verse {
            book,
            chapter,
            start_verse,
            end_verse,
            translation,
        } => {
            commands::verse::run(&config, &book, chapter, start_verse, end_verse, translation)
                .await
        }
        Commands::Prefs { action } => commands::prefs::run(&config, action).await,
    }
}
