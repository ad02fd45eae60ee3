//! Configuration for seeding runs.

use std::fmt;
use std::str::FromStr;

use crate::db::SeedError;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "mergington";

/// Collection the app reads activities from.
pub const ACTIVITIES_COLLECTION: &str = "activities";

/// How each sample record is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Overwrite the fields of a matching record, or create it.
    Upsert,
    /// Insert only records whose name is not present yet.
    #[default]
    InsertIfAbsent,
}

impl SeedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::Upsert => "upsert",
            SeedPolicy::InsertIfAbsent => "insert-if-absent",
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedPolicy {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(SeedPolicy::Upsert),
            "insert-if-absent" | "insert_if_absent" | "skip-existing" => {
                Ok(SeedPolicy::InsertIfAbsent)
            }
            other => Err(SeedError::InvalidConfig(format!(
                "unknown SEED_POLICY {other:?} (expected \"upsert\" or \"insert-if-absent\")"
            ))),
        }
    }
}

/// Where to seed and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// MongoDB connection string (`MONGO_URL`).
    pub mongo_url: String,

    /// Database holding the activities collection (`DB_NAME`).
    pub db_name: String,

    /// Write policy (`SEED_POLICY`).
    pub policy: SeedPolicy,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mongo_url: DEFAULT_MONGO_URL.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            policy: SeedPolicy::default(),
        }
    }
}

impl SeedConfig {
    /// Reads `MONGO_URL`, `DB_NAME` and `SEED_POLICY` from the process
    /// environment, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SeedError> {
        let defaults = Self::default();

        let policy = match lookup("SEED_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.policy,
        };

        Ok(Self {
            mongo_url: lookup("MONGO_URL").unwrap_or(defaults.mongo_url),
            db_name: lookup("DB_NAME").unwrap_or(defaults.db_name),
            policy,
        })
    }
}
