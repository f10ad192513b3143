//! In-memory store for tests and dry runs.

use std::sync::Arc;

use async_trait::async_trait;
use practice::{Account, NewAccount};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{NewRecord, RecordFilter, SeedError, Store, StoredRecord, Upsert};

#[derive(Debug, Default)]
struct MemoryState {
    accounts: Vec<Account>,
    records: Vec<StoredRecord>,
}

impl MemoryState {
    fn find(&self, record: &NewRecord) -> Option<&StoredRecord> {
        self.records.iter().find(|r| {
            r.kind == record.kind
                && r.tenant_id == record.tenant_id
                && r.natural_key == record.natural_key
        })
    }

    fn insert(&mut self, record: NewRecord) -> StoredRecord {
        let stored = StoredRecord {
            id: Uuid::new_v4(),
            kind: record.kind,
            tenant_id: record.tenant_id,
            natural_key: record.natural_key,
            attributes: record.attributes,
            created_at: OffsetDateTime::now_utc(),
        };
        self.records.push(stored.clone());
        stored
    }
}

/// Store backed by vectors behind an async lock. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of tenant-owned records.
    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn account_count(&self) -> usize {
        self.state.read().await.accounts.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_or_create_account(
        &self,
        account: NewAccount,
    ) -> Result<Upsert<Account>, SeedError> {
        let mut state = self.state.write().await;

        if let Some(existing) = state.accounts.iter().find(|a| a.email == account.email) {
            return Ok(Upsert::Existing(existing.clone()));
        }

        let created = Account {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            account_type: account.account_type,
            created_at: OffsetDateTime::now_utc(),
        };
        state.accounts.push(created.clone());
        Ok(Upsert::Created(created))
    }

    async fn list_tenants(&self) -> Result<Vec<Account>, SeedError> {
        let state = self.state.read().await;
        Ok(state
            .accounts
            .iter()
            .filter(|a| a.is_tenant())
            .cloned()
            .collect())
    }

    async fn find_or_create(&self, record: NewRecord) -> Result<Upsert<StoredRecord>, SeedError> {
        let mut state = self.state.write().await;

        if let Some(existing) = state.find(&record) {
            return Ok(Upsert::Existing(existing.clone()));
        }
        Ok(Upsert::Created(state.insert(record)))
    }

    async fn create(&self, record: NewRecord) -> Result<StoredRecord, SeedError> {
        let mut state = self.state.write().await;

        if state.find(&record).is_some() {
            return Err(SeedError::Duplicate {
                kind: record.kind,
                tenant_id: record.tenant_id,
                natural_key: record.natural_key,
            });
        }
        Ok(state.insert(record))
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredRecord>, SeedError> {
        let state = self.state.read().await;
        Ok(state.records.iter().find(|r| r.id == id).cloned())
    }

    async fn query(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, SeedError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use practice::{AccountType, EntityKind};
    use serde_json::json;

    fn record(tenant_id: Uuid, key: &str) -> NewRecord {
        NewRecord {
            kind: EntityKind::CaseType,
            tenant_id,
            natural_key: format!("name={key}"),
            attributes: json!({ "name": key, "description": "" }),
        }
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();

        let first = store.find_or_create(record(tenant, "Probate")).await.unwrap();
        let second = store.find_or_create(record(tenant, "Probate")).await.unwrap();

        assert!(first.is_created());
        assert!(!second.is_created());
        assert_eq!(first.get().id, second.get().id);
        assert_eq!(store.record_count().await, 1);
    }

    #[tokio::test]
    async fn test_natural_key_is_scoped_by_tenant() {
        let store = MemoryStore::new();

        store.find_or_create(record(Uuid::new_v4(), "Probate")).await.unwrap();
        let other = store
            .find_or_create(record(Uuid::new_v4(), "Probate"))
            .await
            .unwrap();

        assert!(other.is_created());
        assert_eq!(store.record_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();

        store.create(record(tenant, "Probate")).await.unwrap();
        let err = store.create(record(tenant, "Probate")).await.unwrap_err();
        assert!(matches!(err, SeedError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_query_preserves_insertion_order() {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();

        for name in ["Zoning", "Antitrust", "Maritime"] {
            store.find_or_create(record(tenant, name)).await.unwrap();
        }
        store
            .find_or_create(record(Uuid::new_v4(), "Elder Law"))
            .await
            .unwrap();

        let found = store
            .query(&RecordFilter::kind(EntityKind::CaseType).tenant(tenant))
            .await
            .unwrap();
        let keys: Vec<&str> = found.iter().map(|r| r.natural_key.as_str()).collect();
        assert_eq!(keys, vec!["name=Zoning", "name=Antitrust", "name=Maritime"]);
    }

    #[tokio::test]
    async fn test_only_company_accounts_are_tenants() {
        let store = MemoryStore::new();

        store
            .find_or_create_account(NewAccount {
                name: "Super Admin".into(),
                email: "superadmin@example.test".into(),
                account_type: AccountType::SuperAdmin,
            })
            .await
            .unwrap();
        let company = NewAccount {
            name: "Ashgrove Legal".into(),
            email: "company1@example.test".into(),
            account_type: AccountType::Company,
        };
        store.find_or_create_account(company.clone()).await.unwrap();
        let again = store.find_or_create_account(company).await.unwrap();

        assert!(!again.is_created());
        assert_eq!(store.account_count().await, 2);

        let tenants = store.list_tenants().await.unwrap();
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].email, "company1@example.test");
    }
}
