//! Typed access to a [`Store`] for tenant-owned entities.

use practice::{Account, Entity, EntityKind};
use tracing::debug;
use uuid::Uuid;

use super::store::{NewRecord, RecordFilter, SeedError, Store, StoredRecord, Upsert};

/// A stored entity together with its id and owning tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<E> {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub entity: E,
}

/// Result of [`Repository::find_or_create`].
pub type Seeded<E> = Upsert<Persisted<E>>;

/// Typed, tenant-checked wrapper over a store.
///
/// Every write verifies that the entity's foreign keys exist and belong to the
/// same tenant before anything is inserted.
#[derive(Clone, Copy)]
pub struct Repository<'a> {
    store: &'a dyn Store,
}

impl<'a> Repository<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Returns the entity matching `entity`'s natural key for this tenant,
    /// inserting `entity` if there is none. Existing records are left untouched.
    pub async fn find_or_create<E: Entity>(
        &self,
        tenant: &Account,
        entity: E,
    ) -> Result<Seeded<E>, SeedError> {
        let record = self.prepare(tenant, &entity).await?;
        let upsert = self.store.find_or_create(record).await?;

        if let Upsert::Created(stored) = &upsert {
            debug!(
                "Created {} {} ({}) for tenant {}",
                E::KIND,
                stored.id,
                stored.natural_key,
                tenant.email
            );
        }
        upsert.try_map(decode::<E>)
    }

    /// Inserts `entity`; fails with [`SeedError::Duplicate`] if its natural key is taken.
    pub async fn create<E: Entity>(
        &self,
        tenant: &Account,
        entity: E,
    ) -> Result<Persisted<E>, SeedError> {
        let record = self.prepare(tenant, &entity).await?;
        decode(self.store.create(record).await?)
    }

    /// All entities of type `E` owned by the tenant, oldest first.
    pub async fn list<E: Entity>(&self, tenant: &Account) -> Result<Vec<Persisted<E>>, SeedError> {
        self.store
            .query(&RecordFilter::kind(E::KIND).tenant(tenant.id))
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn count(&self, kind: EntityKind, tenant: &Account) -> Result<usize, SeedError> {
        Ok(self
            .store
            .query(&RecordFilter::kind(kind).tenant(tenant.id))
            .await?
            .len())
    }

    async fn prepare<E: Entity>(
        &self,
        tenant: &Account,
        entity: &E,
    ) -> Result<NewRecord, SeedError> {
        if !tenant.is_tenant() {
            return Err(SeedError::NotATenant(tenant.email.clone()));
        }

        for reference in entity.references() {
            let Some(target) = self.store.get(reference.id).await? else {
                return Err(SeedError::MissingReference {
                    kind: E::KIND,
                    reference: reference.kind,
                    id: reference.id,
                });
            };
            if target.kind != reference.kind {
                return Err(SeedError::ReferenceKindMismatch {
                    kind: E::KIND,
                    id: reference.id,
                    expected: reference.kind,
                    actual: target.kind,
                });
            }
            if target.tenant_id != tenant.id {
                return Err(SeedError::CrossTenantReference {
                    kind: E::KIND,
                    tenant_id: tenant.id,
                    reference: reference.kind,
                    id: reference.id,
                    owner_id: target.tenant_id,
                });
            }
        }

        Ok(NewRecord {
            kind: E::KIND,
            tenant_id: tenant.id,
            natural_key: entity.natural_key().render(),
            attributes: serde_json::to_value(entity)?,
        })
    }
}

fn decode<E: Entity>(stored: StoredRecord) -> Result<Persisted<E>, SeedError> {
    if stored.kind != E::KIND {
        return Err(SeedError::UnknownValue(format!(
            "expected {} record, found {}",
            E::KIND,
            stored.kind
        )));
    }
    Ok(Persisted {
        id: stored.id,
        tenant_id: stored.tenant_id,
        entity: serde_json::from_value(stored.attributes)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use practice::{
        AccountType, Case, CaseNote, CaseStatus, CaseType, Client, ClientKind, NewAccount,
    };
    use time::macros::date;

    async fn tenant(store: &MemoryStore, email: &str) -> Account {
        store
            .find_or_create_account(NewAccount {
                name: email.to_string(),
                email: email.to_string(),
                account_type: AccountType::Company,
            })
            .await
            .unwrap()
            .into_inner()
    }

    fn probate() -> CaseType {
        CaseType {
            name: "Probate".into(),
            description: "Estates and wills".into(),
        }
    }

    #[tokio::test]
    async fn test_find_or_create_round_trips_entity() {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        let acme = tenant(&store, "acme@example.test").await;

        let first = repo.find_or_create(&acme, probate()).await.unwrap();
        let second = repo
            .find_or_create(
                &acme,
                CaseType {
                    description: "changed".into(),
                    ..probate()
                },
            )
            .await
            .unwrap();

        assert!(first.is_created());
        assert!(!second.is_created());
        // Existing rows are never updated.
        assert_eq!(second.get().entity.description, "Estates and wills");
        assert_eq!(repo.list::<CaseType>(&acme).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_cross_tenant_reference() {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        let acme = tenant(&store, "acme@example.test").await;
        let globex = tenant(&store, "globex@example.test").await;

        let client = repo
            .create(
                &globex,
                Client {
                    name: "Orla Brennan".into(),
                    kind: ClientKind::Individual,
                    email: "orla@example.test".into(),
                    phone: None,
                },
            )
            .await
            .unwrap();
        let case_type = repo.create(&globex, probate()).await.unwrap();
        let status = repo
            .create(
                &globex,
                CaseStatus {
                    name: "Open".into(),
                    is_closed: false,
                    sort_order: 1,
                },
            )
            .await
            .unwrap();
        let foreign_case = repo
            .create(
                &globex,
                Case {
                    title: "Estate of Brennan".into(),
                    case_number: "PR-0001".into(),
                    description: String::new(),
                    client_id: client.id,
                    case_type_id: case_type.id,
                    case_status_id: status.id,
                    lead_attorney_id: None,
                    opened_on: date!(2024 - 01 - 10),
                    closed_on: None,
                },
            )
            .await
            .unwrap();

        let note = CaseNote {
            case_id: foreign_case.id,
            title: "Intake call".into(),
            body: String::new(),
            author_id: None,
            written_on: date!(2024 - 02 - 01),
        };

        let err = repo.find_or_create(&acme, note.clone()).await.unwrap_err();
        assert!(matches!(err, SeedError::CrossTenantReference { owner_id, .. } if owner_id == globex.id));
        assert_eq!(repo.count(EntityKind::CaseNote, &acme).await.unwrap(), 0);

        // The owning tenant may reference it.
        assert!(repo.find_or_create(&globex, note).await.unwrap().is_created());
    }

    #[tokio::test]
    async fn test_rejects_reference_of_wrong_kind() {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        let acme = tenant(&store, "acme@example.test").await;

        let case_type = repo.create(&acme, probate()).await.unwrap();
        let note = CaseNote {
            case_id: case_type.id,
            title: "Intake call".into(),
            body: String::new(),
            author_id: None,
            written_on: date!(2024 - 02 - 01),
        };

        let err = repo.find_or_create(&acme, note).await.unwrap_err();
        assert!(matches!(err, SeedError::ReferenceKindMismatch { .. }));
    }

    #[tokio::test]
    async fn test_rejects_missing_reference() {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        let acme = tenant(&store, "acme@example.test").await;

        let note = CaseNote {
            case_id: Uuid::new_v4(),
            title: "Intake call".into(),
            body: String::new(),
            author_id: None,
            written_on: date!(2024 - 02 - 01),
        };

        let err = repo.find_or_create(&acme, note).await.unwrap_err();
        assert!(matches!(
            err,
            SeedError::MissingReference {
                reference: EntityKind::Case,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_rejects_non_company_account() {
        let store = MemoryStore::new();
        let repo = Repository::new(&store);
        let admin = store
            .find_or_create_account(NewAccount {
                name: "Super Admin".into(),
                email: "superadmin@example.test".into(),
                account_type: AccountType::SuperAdmin,
            })
            .await
            .unwrap()
            .into_inner();

        let err = repo.find_or_create(&admin, probate()).await.unwrap_err();
        assert!(matches!(err, SeedError::NotATenant(_)));
    }
}
