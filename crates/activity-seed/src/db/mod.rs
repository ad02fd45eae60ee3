//! Database integration for seeding sample activities.
//!
//! [`ActivityStore`] is the seam between the seeding logic and the record
//! store. [`MongoStore`] talks to MongoDB; [`InMemoryStore`] keeps records
//! in memory and is what the unit tests seed into. The [`Seeder`] drives
//! either one through a single sequential pass.

mod memory;
mod mongo;
mod seeder;
mod store;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use seeder::{SeedError, SeedReport, Seeder};
pub use store::ActivityStore;
