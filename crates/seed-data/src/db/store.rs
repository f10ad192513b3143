//! The persistence seam the generators write through.

use async_trait::async_trait;
use practice::{Account, EntityKind, NewAccount};
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate {kind} for tenant {tenant_id}: {natural_key}")]
    Duplicate {
        kind: EntityKind,
        tenant_id: Uuid,
        natural_key: String,
    },
    #[error("{kind} references missing {reference} {id}")]
    MissingReference {
        kind: EntityKind,
        reference: EntityKind,
        id: Uuid,
    },
    #[error("{kind} references {id} as {expected}, but it is a {actual}")]
    ReferenceKindMismatch {
        kind: EntityKind,
        id: Uuid,
        expected: EntityKind,
        actual: EntityKind,
    },
    #[error("{kind} for tenant {tenant_id} references {reference} {id} owned by tenant {owner_id}")]
    CrossTenantReference {
        kind: EntityKind,
        tenant_id: Uuid,
        reference: EntityKind,
        id: Uuid,
        owner_id: Uuid,
    },
    #[error("Account {0} is not a company account")]
    NotATenant(String),
    #[error("Unknown stored value: {0}")]
    UnknownValue(String),
    #[error("Generator for {kind} is scheduled before its dependency {dependency}")]
    OutOfOrder {
        kind: EntityKind,
        dependency: EntityKind,
    },
}

/// A record about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub kind: EntityKind,
    pub tenant_id: Uuid,
    /// Rendered natural key; unique per (kind, tenant).
    pub natural_key: String,
    pub attributes: Value,
}

/// A record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub kind: EntityKind,
    /// The owning tenant (`created_by` in the application schema).
    pub tenant_id: Uuid,
    pub natural_key: String,
    pub attributes: Value,
    pub created_at: OffsetDateTime,
}

/// Outcome of a find-or-create write.
#[derive(Debug, Clone, PartialEq)]
pub enum Upsert<T> {
    Created(T),
    Existing(T),
}

impl<T> Upsert<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Upsert::Created(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Upsert::Created(v) | Upsert::Existing(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Upsert::Created(v) | Upsert::Existing(v) => v,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Upsert<U>, E> {
        Ok(match self {
            Upsert::Created(v) => Upsert::Created(f(v)?),
            Upsert::Existing(v) => Upsert::Existing(f(v)?),
        })
    }
}

/// Selects records by kind and/or tenant. Empty filter matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub kind: Option<EntityKind>,
    pub tenant_id: Option<Uuid>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn kind(kind: EntityKind) -> Self {
        Self {
            kind: Some(kind),
            tenant_id: None,
        }
    }

    pub fn tenant(mut self, tenant_id: Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn matches(&self, record: &StoredRecord) -> bool {
        self.kind.is_none_or(|k| k == record.kind)
            && self.tenant_id.is_none_or(|t| t == record.tenant_id)
    }
}

/// Persistence operations needed by the seeders.
///
/// Implementations never update or delete. Query results come back in
/// insertion order so that repeated runs see prerequisites in the same order.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the account with this email, creating it if absent.
    async fn find_or_create_account(&self, account: NewAccount)
    -> Result<Upsert<Account>, SeedError>;

    /// Company accounts, in creation order.
    async fn list_tenants(&self) -> Result<Vec<Account>, SeedError>;

    /// Returns the record matching (kind, tenant, natural key), inserting it if absent.
    async fn find_or_create(&self, record: NewRecord) -> Result<Upsert<StoredRecord>, SeedError>;

    /// Inserts unconditionally; a natural-key collision is an error.
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, SeedError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredRecord>, SeedError>;

    async fn query(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, SeedError>;
}
