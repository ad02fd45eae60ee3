//! Database seeding utilities.

use thiserror::Error;
use tracing::{debug, info};

use super::ActivityStore;
use crate::config::SeedPolicy;
use crate::models::ActivityRecord;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),
    #[error("Duplicate activity name: {0}")]
    DuplicateKey(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Outcome counts of one seeding pass.
///
/// Upserts only count as `written`; whether the record was created or
/// updated is not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub written: usize,
    pub inserted: usize,
    pub skipped: usize,
}

impl SeedReport {
    /// Number of records processed.
    pub fn total(&self) -> usize {
        self.written + self.inserted + self.skipped
    }

    /// Number of records actually written to the store.
    pub fn seeded(&self) -> usize {
        self.written + self.inserted
    }
}

/// Writes sample activities into a store, one record at a time.
pub struct Seeder<'a, S: ActivityStore> {
    store: &'a S,
    policy: SeedPolicy,
}

impl<'a, S: ActivityStore> Seeder<'a, S> {
    pub fn new(store: &'a S, policy: SeedPolicy) -> Self {
        Self { store, policy }
    }

    /// Ensures the unique index on `name`, then applies the policy to each
    /// record in order. The first failure aborts the pass.
    pub async fn seed(&self, records: &[ActivityRecord]) -> Result<SeedReport, SeedError> {
        self.store.ensure_unique_name().await?;
        debug!("Unique index on name ensured");

        info!(
            "Seeding {} activities ({} policy)...",
            records.len(),
            self.policy
        );

        let mut report = SeedReport::default();
        for record in records {
            match self.policy {
                SeedPolicy::Upsert => {
                    self.store.upsert(record).await?;
                    report.written += 1;
                    debug!("Upserted: {}", record.name);
                }
                SeedPolicy::InsertIfAbsent => {
                    if self.store.find_by_name(&record.name).await?.is_some() {
                        info!("Skipped (exists): {}", record.name);
                        report.skipped += 1;
                    } else {
                        self.store.insert(record).await?;
                        info!("Inserted: {}", record.name);
                        report.inserted += 1;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Runs [`Seeder::seed`] and closes the store whether or not it succeeded.
    pub async fn seed_and_close(self, records: &[ActivityRecord]) -> Result<SeedReport, SeedError> {
        let result = self.seed(records).await;
        self.store.close().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_activities;
    use crate::db::{ActivityStore, InMemoryStore};
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_empty_store_gets_every_record() {
        let activities = sample_activities();

        for policy in [SeedPolicy::Upsert, SeedPolicy::InsertIfAbsent] {
            let store = InMemoryStore::new();

            let report = Seeder::new(&store, policy).seed(&activities).await.unwrap();

            assert_eq!(store.records().await, activities, "policy {policy}");
            assert_eq!(report.total(), activities.len());
            assert!(store.has_unique_name().await);
        }
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let activities = sample_activities();

        for policy in [SeedPolicy::Upsert, SeedPolicy::InsertIfAbsent] {
            let store = InMemoryStore::new();
            let seeder = Seeder::new(&store, policy);

            seeder.seed(&activities).await.unwrap();
            let second = seeder.seed(&activities).await.unwrap();

            assert_eq!(store.count().await.unwrap(), activities.len() as u64);
            assert_eq!(second.total(), activities.len());
        }
    }

    #[tokio::test]
    async fn test_second_insert_if_absent_run_skips_everything() {
        let activities = sample_activities();
        let store = InMemoryStore::new();
        let seeder = Seeder::new(&store, SeedPolicy::InsertIfAbsent);

        seeder.seed(&activities).await.unwrap();
        let writes_after_first = store.writes().await;
        let second = seeder.seed(&activities).await.unwrap();

        assert_eq!(second.skipped, activities.len());
        assert_eq!(second.inserted, 0);
        assert_eq!(second.seeded(), 0);
        assert_eq!(store.writes().await, writes_after_first);
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing_fields() {
        let activities = sample_activities();
        let stale = ActivityRecord::new(
            "Chess Club",
            "Weekly chess club for beginners and advanced players.",
            "Wednesdays 15:30",
            20,
            &["alice@example.com"],
        );
        let store = InMemoryStore::with_records(vec![stale]);

        let report = Seeder::new(&store, SeedPolicy::Upsert)
            .seed(&activities)
            .await
            .unwrap();

        assert_eq!(report.written, activities.len());
        assert_eq!(report.seeded(), activities.len());
        let chess = store.find_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(chess, activities[0]);
        assert_eq!(store.count().await.unwrap(), activities.len() as u64);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_insert_if_absent_leaves_existing_untouched() {
        let activities = sample_activities();
        let custom = ActivityRecord::new("Art Club", "Pottery only", "Saturdays", 4, &[]);
        let store = InMemoryStore::with_records(vec![custom.clone()]);

        let report = Seeder::new(&store, SeedPolicy::InsertIfAbsent)
            .seed(&activities)
            .await
            .unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.inserted, activities.len() - 1);
        assert_eq!(store.find_by_name("Art Club").await.unwrap(), Some(custom));
        assert!(logs_contain("Skipped (exists): Art Club"));
        assert!(logs_contain("Inserted: Chess Club"));
        assert!(!logs_contain("Inserted: Art Club"));
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_without_writes() {
        let store = InMemoryStore::unreachable();

        let result = Seeder::new(&store, SeedPolicy::Upsert)
            .seed_and_close(&sample_activities())
            .await;

        assert!(matches!(result, Err(SeedError::Unavailable(_))));
        assert_eq!(store.writes().await, 0);
        assert!(store.is_closed().await);
    }

    #[tokio::test]
    async fn test_seed_and_close_closes_on_success() {
        let store = InMemoryStore::new();

        let report = Seeder::new(&store, SeedPolicy::InsertIfAbsent)
            .seed_and_close(&sample_activities())
            .await
            .unwrap();

        assert_eq!(report.inserted, 9);
        assert!(store.is_closed().await);
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_records() {
        let activities = sample_activities();
        // A duplicate already in the store makes the unique index fail before any write.
        let dup = activities[3].clone();
        let store = InMemoryStore::with_records(vec![dup.clone(), dup]);

        let result = Seeder::new(&store, SeedPolicy::InsertIfAbsent)
            .seed(&activities)
            .await;

        assert!(matches!(result, Err(SeedError::DuplicateKey(name)) if name == "Soccer Team"));
        assert_eq!(store.writes().await, 0);
    }
}
