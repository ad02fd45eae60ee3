use async_trait::async_trait;

use super::SeedError;
use crate::models::ActivityRecord;

/// A record store keyed by activity name.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Ensure a unique index on `name`. Succeeds if it already exists.
    async fn ensure_unique_name(&self) -> Result<(), SeedError>;

    /// Look up a record by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<ActivityRecord>, SeedError>;

    /// Insert a new record. Fails with a duplicate key error if the name is taken.
    async fn insert(&self, record: &ActivityRecord) -> Result<(), SeedError>;

    /// Overwrite the fields of the record with the same name, creating it when absent.
    async fn upsert(&self, record: &ActivityRecord) -> Result<(), SeedError>;

    /// Number of records currently stored.
    async fn count(&self) -> Result<u64, SeedError>;

    /// Release the connection. Later calls on the store fail.
    async fn close(&self);
}
