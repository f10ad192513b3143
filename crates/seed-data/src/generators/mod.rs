//! Entity generators.
//!
//! Every generator follows the same shape: load the tenant's prerequisite
//! records, skip the tenant if a required collection is empty, then hand a
//! candidate list and a field-synthesis closure to [`seed_from_catalog`].
//!
//! - [`AccountSeeder`]: super admin and company accounts (tenants)
//! - [`reference`]: currencies, case types, case statuses, document types, task categories
//! - [`people`]: employees and clients
//! - [`case`]: cases
//! - [`case_detail`]: notes, documents, timeline events, team members, hearings
//! - [`task`]: tasks
//! - [`billing`]: time entries and invoices

pub mod account;
pub mod billing;
pub mod case;
pub mod case_detail;
pub mod people;
pub mod reference;
pub mod task;

use async_trait::async_trait;
use practice::{Account, Entity, EntityKind};
use rand::rngs::StdRng;
use time::Date;
use tracing::info;
use uuid::Uuid;

use crate::config::{Bounds, SeedConfig};
use crate::db::{Repository, SeedError, Upsert};
use crate::sampling::{sample_count, sample_without_replacement, tenant_rng};

pub use account::{AccountReport, AccountSeeder};
pub use billing::{InvoiceGenerator, TimeEntryGenerator};
pub use case::CaseGenerator;
pub use case_detail::{
    CaseDocumentGenerator, CaseNoteGenerator, CaseTeamGenerator, CaseTimelineGenerator,
    HearingGenerator,
};
pub use people::{ClientGenerator, EmployeeGenerator};
pub use reference::{
    CaseStatusGenerator, CaseTypeGenerator, CurrencyGenerator, DocumentTypeGenerator,
    TaskCategoryGenerator,
};
pub use task::TaskGenerator;

/// What one generator did for one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorReport {
    pub kind: EntityKind,
    pub tenant_id: Uuid,
    /// Records inserted by this run.
    pub created: usize,
    /// Sampled records whose natural key already existed.
    pub existing: usize,
    /// Set when the tenant was skipped for lack of this prerequisite.
    pub skipped_for: Option<EntityKind>,
}

impl GeneratorReport {
    pub fn new(kind: EntityKind, tenant_id: Uuid) -> Self {
        Self {
            kind,
            tenant_id,
            created: 0,
            existing: 0,
            skipped_for: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped_for.is_some()
    }
}

/// Everything a generator needs for one tenant.
///
/// The tenant is passed explicitly; the random stream is private to this
/// (tenant, kind) pair.
pub struct GenContext<'a> {
    pub repo: Repository<'a>,
    pub tenant: &'a Account,
    pub bounds: Bounds,
    pub anchor_date: Date,
    pub email_domain: &'a str,
    pub rng: StdRng,
    kind: EntityKind,
}

impl<'a> GenContext<'a> {
    pub fn new(
        repo: Repository<'a>,
        tenant: &'a Account,
        config: &'a SeedConfig,
        kind: EntityKind,
        bounds: Bounds,
    ) -> Self {
        Self {
            repo,
            tenant,
            bounds,
            anchor_date: config.anchor_date,
            email_domain: &config.email_domain,
            rng: tenant_rng(config.rng_seed, &tenant.email, kind.as_str()),
            kind,
        }
    }

    /// Report for a tenant skipped because `missing` has no records.
    pub fn skip(&self, missing: EntityKind) -> GeneratorReport {
        info!(
            "Skipping {} for tenant {}: no {} records",
            self.kind, self.tenant.email, missing
        );
        GeneratorReport {
            skipped_for: Some(missing),
            ..GeneratorReport::new(self.kind, self.tenant.id)
        }
    }
}

/// Seeds one entity type for one tenant.
#[async_trait]
pub trait Generator: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Kinds that must have records for the tenant; otherwise the tenant is skipped.
    fn requires(&self) -> &'static [EntityKind] {
        &[]
    }

    /// Kinds referenced when present, left as `None` when absent.
    fn uses(&self) -> &'static [EntityKind] {
        &[]
    }

    fn default_bounds(&self) -> Bounds;

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError>;
}

/// Samples between `ctx.bounds.min` and `ctx.bounds.max` candidates (all of
/// them if the list is shorter), builds an entity from each, and writes it
/// with find-or-create.
pub async fn seed_from_catalog<T, E, F>(
    ctx: &mut GenContext<'_>,
    candidates: &[T],
    mut build: F,
) -> Result<GeneratorReport, SeedError>
where
    T: Sync,
    E: Entity,
    F: FnMut(&T, &mut StdRng) -> E + Send,
{
    let count = sample_count(ctx.bounds, candidates.len(), &mut ctx.rng);
    let picked = sample_without_replacement(candidates, count, &mut ctx.rng);
    let mut report = GeneratorReport::new(E::KIND, ctx.tenant.id);

    for template in picked {
        let entity = build(template, &mut ctx.rng);
        match ctx.repo.find_or_create(ctx.tenant, entity).await? {
            Upsert::Created(_) => report.created += 1,
            Upsert::Existing(_) => report.existing += 1,
        }
    }

    info!(
        "Seeded {} {} records for tenant {} ({} already present)",
        report.created, E::KIND, ctx.tenant.email, report.existing
    );
    Ok(report)
}

/// The full generator set in dependency order.
pub fn standard_generators() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(CurrencyGenerator),
        Box::new(CaseTypeGenerator),
        Box::new(CaseStatusGenerator),
        Box::new(DocumentTypeGenerator),
        Box::new(TaskCategoryGenerator),
        Box::new(EmployeeGenerator::new()),
        Box::new(ClientGenerator::new()),
        Box::new(CaseGenerator::new()),
        Box::new(CaseNoteGenerator),
        Box::new(CaseDocumentGenerator),
        Box::new(CaseTimelineGenerator),
        Box::new(CaseTeamGenerator),
        Box::new(HearingGenerator),
        Box::new(TaskGenerator::new()),
        Box::new(TimeEntryGenerator::new()),
        Box::new(InvoiceGenerator::new()),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use practice::{Account, AccountType, EntityKind, NewAccount};
    use time::macros::date;

    use super::GenContext;
    use crate::config::{Bounds, SeedConfig};
    use crate::db::{MemoryStore, Repository, Store};

    /// An in-memory store with a single company tenant.
    pub struct TestTenant {
        pub store: MemoryStore,
        pub tenant: Account,
        pub config: SeedConfig,
    }

    impl TestTenant {
        pub async fn new() -> Self {
            let store = MemoryStore::new();
            let tenant = store
                .find_or_create_account(NewAccount {
                    name: "Ashgrove & Pell LLP".to_string(),
                    email: "company1@example.test".to_string(),
                    account_type: AccountType::Company,
                })
                .await
                .unwrap()
                .into_inner();

            Self {
                store,
                tenant,
                config: SeedConfig::default().with_anchor_date(date!(2024 - 06 - 01)),
            }
        }

        pub fn repo(&self) -> Repository<'_> {
            Repository::new(&self.store)
        }
    }

    pub fn context<'a>(
        fixture: &'a TestTenant,
        repo: Repository<'a>,
        kind: EntityKind,
        bounds: Bounds,
    ) -> GenContext<'a> {
        GenContext::new(repo, &fixture.tenant, &fixture.config, kind, bounds)
    }
}
