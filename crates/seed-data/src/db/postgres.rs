//! PostgreSQL store.

use async_trait::async_trait;
use practice::{Account, AccountType, EntityKind, NewAccount};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::store::{NewRecord, RecordFilter, SeedError, Store, StoredRecord, Upsert};

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    account_type: String,
    created_at: OffsetDateTime,
}

impl TryFrom<AccountRow> for Account {
    type Error = SeedError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let account_type = AccountType::from_db_str(&row.account_type)
            .ok_or_else(|| SeedError::UnknownValue(format!("account_type {}", row.account_type)))?;
        Ok(Account {
            id: row.id,
            name: row.name,
            email: row.email,
            account_type,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: Uuid,
    kind: String,
    tenant_id: Uuid,
    natural_key: String,
    attributes: serde_json::Value,
    created_at: OffsetDateTime,
}

impl TryFrom<RecordRow> for StoredRecord {
    type Error = SeedError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let kind: EntityKind = row
            .kind
            .parse()
            .map_err(|e: practice::UnknownEntityKind| SeedError::UnknownValue(e.to_string()))?;
        Ok(StoredRecord {
            id: row.id,
            kind,
            tenant_id: row.tenant_id,
            natural_key: row.natural_key,
            attributes: row.attributes,
            created_at: row.created_at,
        })
    }
}

/// Store writing to the `accounts` and `fixture_records` tables.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a store over the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), SeedError> {
        info!("Applying fixture store migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn find_record(&self, record: &NewRecord) -> Result<StoredRecord, SeedError> {
        let row: RecordRow = sqlx::query_as(
            r#"
            SELECT id, kind, tenant_id, natural_key, attributes, created_at
            FROM fixture_records
            WHERE kind = $1 AND tenant_id = $2 AND natural_key = $3
            "#,
        )
        .bind(record.kind.as_str())
        .bind(record.tenant_id)
        .bind(&record.natural_key)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_or_create_account(
        &self,
        account: NewAccount,
    ) -> Result<Upsert<Account>, SeedError> {
        let inserted: Option<AccountRow> = sqlx::query_as(
            r#"
            INSERT INTO accounts (id, name, email, account_type, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (email) DO NOTHING
            RETURNING id, name, email, account_type, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&account.name)
        .bind(&account.email)
        .bind(account.account_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(Upsert::Created(row.try_into()?));
        }

        let row: AccountRow = sqlx::query_as(
            r#"
            SELECT id, name, email, account_type, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(&account.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(Upsert::Existing(row.try_into()?))
    }

    async fn list_tenants(&self) -> Result<Vec<Account>, SeedError> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, account_type, created_at
            FROM accounts
            WHERE account_type = 'company'
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn find_or_create(&self, record: NewRecord) -> Result<Upsert<StoredRecord>, SeedError> {
        let inserted: Option<RecordRow> = sqlx::query_as(
            r#"
            INSERT INTO fixture_records (id, kind, tenant_id, natural_key, attributes, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (kind, tenant_id, natural_key) DO NOTHING
            RETURNING id, kind, tenant_id, natural_key, attributes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.kind.as_str())
        .bind(record.tenant_id)
        .bind(&record.natural_key)
        .bind(&record.attributes)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(row) => Ok(Upsert::Created(row.try_into()?)),
            None => Ok(Upsert::Existing(self.find_record(&record).await?)),
        }
    }

    async fn create(&self, record: NewRecord) -> Result<StoredRecord, SeedError> {
        let result: Result<RecordRow, sqlx::Error> = sqlx::query_as(
            r#"
            INSERT INTO fixture_records (id, kind, tenant_id, natural_key, attributes, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, kind, tenant_id, natural_key, attributes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.kind.as_str())
        .bind(record.tenant_id)
        .bind(&record.natural_key)
        .bind(&record.attributes)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row.try_into(),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(SeedError::Duplicate {
                kind: record.kind,
                tenant_id: record.tenant_id,
                natural_key: record.natural_key,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredRecord>, SeedError> {
        let row: Option<RecordRow> = sqlx::query_as(
            r#"
            SELECT id, kind, tenant_id, natural_key, attributes, created_at
            FROM fixture_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StoredRecord::try_from).transpose()
    }

    async fn query(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, SeedError> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            r#"
            SELECT id, kind, tenant_id, natural_key, attributes, created_at
            FROM fixture_records
            WHERE ($1::text IS NULL OR kind = $1)
              AND ($2::uuid IS NULL OR tenant_id = $2)
            ORDER BY seq
            "#,
        )
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.tenant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StoredRecord::try_from).collect()
    }
}
