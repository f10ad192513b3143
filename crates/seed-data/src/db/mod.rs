//! Persistence for seeded data.
//!
//! Generators write through [`Repository`], a typed wrapper over any [`Store`].
//! Two stores ship with the crate: [`PgStore`] for PostgreSQL and
//! [`MemoryStore`] for tests and dry runs.

mod memory;
mod postgres;
mod repository;
mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::{Persisted, Repository, Seeded};
pub use store::{NewRecord, RecordFilter, SeedError, Store, StoredRecord, Upsert};
