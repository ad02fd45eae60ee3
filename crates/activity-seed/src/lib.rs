//! Sample data seeding for the Mergington activities app.
//!
//! This crate fills the `activities` collection with a fixed set of sample
//! records so the app has something to show during local development and
//! demos. Seeding is idempotent: a unique index on `name` is ensured first,
//! then every record is either upserted or inserted only when missing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use activity_seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let store = MongoStore::connect(&config).await?;
//! let report = Seeder::new(&store, config.policy)
//!     .seed_and_close(&sample_activities())
//!     .await?;
//! println!("seeded {} activities", report.seeded());
//! ```

pub mod config;
pub mod data;
pub mod db;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, SeedPolicy};
    pub use crate::data::sample_activities;
    pub use crate::db::{ActivityStore, InMemoryStore, MongoStore, SeedError, SeedReport, Seeder};
    pub use crate::models::ActivityRecord;
}
