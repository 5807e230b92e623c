//! `berean prefs` — manage stored user preferences.
//!
//! Mirrors the bot's preference-set flow: an existing record gets a
//! partial update, a missing one gets a full insert.

use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use berean_config::AppConfig;
use berean_core::{Cache, EntityKind, Translation, UserPreferences};
use berean_store::{MemoryCache, NoopCache, PostgresStore, PreferenceStore};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show a user's stored preferences
    Get { id: String },

    /// Set a user's default translation
    Set {
        id: String,
        /// Translation code, e.g. KJV
        translation: String,
    },

    /// Delete a user's stored preferences
    Delete { id: String },
}

async fn open_store(config: &AppConfig) -> anyhow::Result<PreferenceStore> {
    let url = config
        .database_url
        .as_deref()
        .context("no database_url configured; set it in berean.toml or BEREAN_DATABASE_URL")?;

    let durable = PostgresStore::connect(url).await?;
    durable.migrate().await?;

    let cache: Arc<dyn Cache> = if config.cache.enabled {
        Arc::new(MemoryCache::new())
    } else {
        Arc::new(NoopCache)
    };

    let store = PreferenceStore::new(cache, Arc::new(durable))
        .with_cache_ttl(config.cache_ttl());
    Ok(store)
}

pub async fn run(config: &AppConfig, action: PrefsAction) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    match action {
        PrefsAction::Get { id } => match store.get_user(&id).await? {
            Some(prefs) => println!("{}: translation {}", prefs.id, prefs.translation),
            None => println!("No stored preferences for {id}."),
        },

        PrefsAction::Set { id, translation } => {
            let translation = translation
                .parse::<Translation>()
                .map_err(|e| anyhow::anyhow!(e))?;

            if store.get_user(&id).await?.is_some() {
                store
                    .update(
                        EntityKind::User,
                        &id,
                        &json!({ "translation": translation }),
                    )
                    .await?;
            } else {
                store
                    .set_user(&UserPreferences::new(id.clone(), translation))
                    .await?;
            }
            println!("Set default translation for {id} to {translation}.");
        }

        PrefsAction::Delete { id } => {
            if store.delete(EntityKind::User, &id).await? {
                println!("Deleted stored preferences for {id}.");
            } else {
                println!("No stored preferences for {id}.");
            }
        }
    }

    Ok(())
}
