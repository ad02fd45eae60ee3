//! MongoDB-backed activity store.

use async_trait::async_trait;
use mongodb::bson::{self, doc};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::debug;

use super::{ActivityStore, SeedError};
use crate::config::{ACTIVITIES_COLLECTION, SeedConfig};
use crate::models::ActivityRecord;

/// Handle to the `activities` collection of the configured database.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<ActivityRecord>,
}

impl MongoStore {
    /// Creates a client for `config.mongo_url` and binds the activities collection.
    ///
    /// The driver connects lazily, so an unreachable server surfaces as an
    /// error from the first operation rather than from this call.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(&config.mongo_url).await?;
        let collection = client
            .database(&config.db_name)
            .collection::<ActivityRecord>(ACTIVITIES_COLLECTION);

        debug!(
            "Bound collection {}.{}",
            config.db_name, ACTIVITIES_COLLECTION
        );

        Ok(Self { client, collection })
    }

    /// Returns the underlying collection for advanced usage.
    pub fn collection(&self) -> &Collection<ActivityRecord> {
        &self.collection
    }
}

#[async_trait]
impl ActivityStore for MongoStore {
    async fn ensure_unique_name(&self) -> Result<(), SeedError> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let created = self.collection.create_index(index).await?;
        debug!("Ensured unique index {}", created.index_name);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ActivityRecord>, SeedError> {
        let found = self.collection.find_one(doc! { "name": name }).await?;
        Ok(found)
    }

    async fn insert(&self, record: &ActivityRecord) -> Result<(), SeedError> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    async fn upsert(&self, record: &ActivityRecord) -> Result<(), SeedError> {
        let fields = bson::to_document(record)?;

        self.collection
            .update_one(doc! { "name": record.name.as_str() }, doc! { "$set": fields })
            .upsert(true)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, SeedError> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        debug!("MongoDB client shut down");
    }
}
