//! Tenant-scoped fixture generation for practice.
//!
//! Seeds law-practice data (reference tables, staff, clients, cases and their
//! notes, documents, hearings, tasks, time entries, and invoices) for every
//! company account. Runs are idempotent: each (tenant, entity kind) pair draws
//! from its own seeded random stream and every write is a find-or-create on the
//! entity's natural key.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let store = PgStore::new(pool);
//! store.migrate().await?;
//!
//! let config = SeedConfig::from_env()?;
//! let report = Orchestrator::for_profile(config.profile)
//!     .run(&store, &config)
//!     .await?;
//! report.log_summary();
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod generators;
pub mod orchestrator;
pub mod sampling;

pub use practice::{Account, AccountType, Entity, EntityKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{Bounds, ConfigError, Profile, SeedConfig};
    pub use crate::db::{MemoryStore, PgStore, Persisted, Repository, SeedError, Store};
    pub use crate::generators::{GenContext, Generator, GeneratorReport, standard_generators};
    pub use crate::orchestrator::{KindSummary, Orchestrator, RunReport, seed};
    pub use crate::{Account, AccountType, Entity, EntityKind};
}
