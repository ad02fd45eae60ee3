//! In-memory activity store.
//!
//! Mirrors the parts of MongoDB behaviour the seeder relies on: the unique
//! index on `name` rejects duplicate inserts once it exists, upserts match by
//! name, and every operation fails after `close` or when the store was built
//! as unreachable. State lives behind an `Arc` so a clone handed to the
//! seeder can be inspected afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ActivityStore, SeedError};
use crate::models::ActivityRecord;

#[derive(Debug, Default)]
struct State {
    records: Vec<ActivityRecord>,
    unique_name: bool,
    unreachable: bool,
    closed: bool,
    writes: usize,
}

impl State {
    fn check_available(&self) -> Result<(), SeedError> {
        if self.unreachable {
            return Err(SeedError::Unavailable("server selection failed".into()));
        }
        if self.closed {
            return Err(SeedError::Unavailable("store is closed".into()));
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    /// Creates an empty, reachable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<ActivityRecord>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                records,
                ..State::default()
            })),
        }
    }

    /// Creates a store on which every operation fails, like a server that cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                unreachable: true,
                ..State::default()
            })),
        }
    }

    /// Snapshot of the stored records in insertion order.
    pub async fn records(&self) -> Vec<ActivityRecord> {
        self.state.lock().await.records.clone()
    }

    /// Number of successful insert and upsert calls.
    pub async fn writes(&self) -> usize {
        self.state.lock().await.writes
    }

    pub async fn has_unique_name(&self) -> bool {
        self.state.lock().await.unique_name
    }

    pub async fn is_closed(&self) -> bool {
        self.state.lock().await.closed
    }
}

#[async_trait]
impl ActivityStore for InMemoryStore {
    async fn ensure_unique_name(&self) -> Result<(), SeedError> {
        let mut state = self.state.lock().await;
        state.check_available()?;

        if !state.unique_name {
            let duplicate = {
                let mut seen = HashSet::new();
                state
                    .records
                    .iter()
                    .find(|r| !seen.insert(r.name.as_str()))
                    .map(|r| r.name.clone())
            };
            if let Some(name) = duplicate {
                return Err(SeedError::DuplicateKey(name));
            }
            state.unique_name = true;
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ActivityRecord>, SeedError> {
        let state = self.state.lock().await;
        state.check_available()?;
        Ok(state.position(name).map(|i| state.records[i].clone()))
    }

    async fn insert(&self, record: &ActivityRecord) -> Result<(), SeedError> {
        let mut state = self.state.lock().await;
        state.check_available()?;

        if state.unique_name && state.position(&record.name).is_some() {
            return Err(SeedError::DuplicateKey(record.name.clone()));
        }
        state.records.push(record.clone());
        state.writes += 1;
        Ok(())
    }

    async fn upsert(&self, record: &ActivityRecord) -> Result<(), SeedError> {
        let mut state = self.state.lock().await;
        state.check_available()?;

        match state.position(&record.name) {
            Some(i) => state.records[i] = record.clone(),
            None => state.records.push(record.clone()),
        }
        state.writes += 1;
        Ok(())
    }

    async fn count(&self) -> Result<u64, SeedError> {
        let state = self.state.lock().await;
        state.check_available()?;
        Ok(state.records.len() as u64)
    }

    async fn close(&self) {
        self.state.lock().await.closed = true;
    }
}
