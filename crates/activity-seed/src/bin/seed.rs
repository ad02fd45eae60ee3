//! Seeds the activities collection with the sample dataset
//!
//! Run with:
//! ```
//! cargo run -p activity-seed --bin seed
//! ```
//!
//! Reads `MONGO_URL`, `DB_NAME` and `SEED_POLICY` from the environment.

use activity_seed::config::{SeedConfig, SeedPolicy};
use activity_seed::data::sample_activities;
use activity_seed::db::{MongoStore, Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    tracing::info!("Connecting to database at {}", config.mongo_url);

    let store = MongoStore::connect(&config).await?;
    let activities = sample_activities();

    let report = Seeder::new(&store, config.policy)
        .seed_and_close(&activities)
        .await?;

    // Summary output
    tracing::info!(
        "Seeded {} activities into {} @ {}",
        report.seeded(),
        config.db_name,
        config.mongo_url
    );
    if config.policy == SeedPolicy::InsertIfAbsent {
        tracing::info!("  Inserted: {}", report.inserted);
        tracing::info!("  Skipped: {}", report.skipped);
    }

    Ok(())
}
