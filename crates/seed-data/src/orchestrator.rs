//! Runs the generator pipeline for every tenant.

use std::collections::BTreeMap;
use std::time::Instant;

use practice::EntityKind;
use tracing::info;

use crate::config::{Profile, SeedConfig};
use crate::db::{Repository, SeedError, Store};
use crate::generators::{
    AccountReport, AccountSeeder, GenContext, Generator, GeneratorReport, standard_generators,
};

/// Per-kind totals across all tenants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub created: usize,
    pub existing: usize,
    pub skipped_tenants: usize,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub tenants: usize,
    pub accounts: AccountReport,
    pub kinds: BTreeMap<EntityKind, KindSummary>,
    pub elapsed_ms: u64,
}

impl RunReport {
    fn record(&mut self, report: &GeneratorReport) {
        let summary = self.kinds.entry(report.kind).or_default();
        summary.created += report.created;
        summary.existing += report.existing;
        if report.is_skipped() {
            summary.skipped_tenants += 1;
        }
    }

    /// Entity records created by this run, accounts excluded.
    pub fn total_created(&self) -> usize {
        self.kinds.values().map(|s| s.created).sum()
    }

    pub fn created(&self, kind: EntityKind) -> usize {
        self.kinds.get(&kind).map_or(0, |s| s.created)
    }

    pub fn log_summary(&self) {
        info!("Seed completed in {}ms", self.elapsed_ms);
        info!(
            "  Accounts: {} created, {} existing ({} tenants)",
            self.accounts.created, self.accounts.existing, self.tenants
        );
        for (kind, summary) in &self.kinds {
            info!(
                "  {}: {} created, {} existing, {} tenants skipped",
                kind, summary.created, summary.existing, summary.skipped_tenants
            );
        }
    }
}

/// An ordered generator list.
///
/// Construction rejects lists where a generator runs before one of its
/// dependencies. A dependency with no generator in the list is allowed; its
/// records may already exist in the store.
pub struct Orchestrator {
    generators: Vec<Box<dyn Generator>>,
}

impl Orchestrator {
    pub fn new(generators: Vec<Box<dyn Generator>>) -> Result<Self, SeedError> {
        for (i, generator) in generators.iter().enumerate() {
            let later = &generators[i + 1..];
            let dependencies = generator.requires().iter().chain(generator.uses());
            for &dependency in dependencies {
                if later.iter().any(|g| g.kind() == dependency) {
                    return Err(SeedError::OutOfOrder {
                        kind: generator.kind(),
                        dependency,
                    });
                }
            }
        }
        Ok(Self { generators })
    }

    /// The standard pipeline restricted to the profile's kinds.
    pub fn for_profile(profile: Profile) -> Self {
        let generators = standard_generators()
            .into_iter()
            .filter(|g| profile.includes(g.kind()))
            .collect();
        Self { generators }
    }

    pub fn kinds(&self) -> Vec<EntityKind> {
        self.generators.iter().map(|g| g.kind()).collect()
    }

    /// Ensures accounts, then runs each generator for each tenant in order.
    pub async fn run(
        &self,
        store: &dyn Store,
        config: &SeedConfig,
    ) -> Result<RunReport, SeedError> {
        let start = Instant::now();

        let accounts = AccountSeeder::seed(store, config).await?;
        let tenants = store.list_tenants().await?;
        let repo = Repository::new(store);

        let mut report = RunReport {
            tenants: tenants.len(),
            accounts,
            ..Default::default()
        };

        for generator in &self.generators {
            let kind = generator.kind();
            let bounds = config.bounds_for(kind, generator.default_bounds());
            for tenant in &tenants {
                let mut ctx = GenContext::new(repo, tenant, config, kind, bounds);
                let result = generator.generate(&mut ctx).await?;
                report.record(&result);
            }
        }

        report.elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }
}

/// Runs the pipeline for `config.profile`.
pub async fn seed(store: &dyn Store, config: &SeedConfig) -> Result<RunReport, SeedError> {
    Orchestrator::for_profile(config.profile).run(store, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{CaseGenerator, CaseTypeGenerator, ClientGenerator};

    #[test]
    fn test_standard_order_is_valid() {
        let orchestrator = Orchestrator::new(standard_generators()).unwrap();
        assert_eq!(orchestrator.kinds(), EntityKind::ALL.to_vec());
    }

    #[test]
    fn test_rejects_generator_before_dependency() {
        let generators: Vec<Box<dyn Generator>> =
            vec![Box::new(CaseGenerator::new()), Box::new(CaseTypeGenerator)];

        match Orchestrator::new(generators) {
            Err(SeedError::OutOfOrder { kind, dependency }) => {
                assert_eq!(kind, EntityKind::Case);
                assert_eq!(dependency, EntityKind::CaseType);
            }
            other => panic!("expected OutOfOrder, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_allows_absent_dependency() {
        let generators: Vec<Box<dyn Generator>> =
            vec![Box::new(ClientGenerator::new()), Box::new(CaseGenerator::new())];
        let orchestrator = Orchestrator::new(generators).unwrap();
        assert_eq!(orchestrator.kinds(), vec![EntityKind::Client, EntityKind::Case]);
    }

    #[test]
    fn test_minimal_profile_is_reference_data_only() {
        let kinds = Orchestrator::for_profile(Profile::Minimal).kinds();
        assert_eq!(kinds.len(), 5);
        assert!(kinds.iter().all(|k| k.is_reference_data()));
    }

    #[test]
    fn test_run_report_totals() {
        let mut report = RunReport::default();
        let tenant = uuid::Uuid::new_v4();

        report.record(&GeneratorReport {
            created: 3,
            existing: 1,
            ..GeneratorReport::new(EntityKind::Case, tenant)
        });
        report.record(&GeneratorReport {
            skipped_for: Some(EntityKind::Client),
            ..GeneratorReport::new(EntityKind::Case, tenant)
        });
        report.record(&GeneratorReport {
            created: 2,
            ..GeneratorReport::new(EntityKind::Hearing, tenant)
        });

        assert_eq!(report.total_created(), 5);
        assert_eq!(report.created(EntityKind::Case), 3);
        assert_eq!(
            report.kinds[&EntityKind::Case],
            KindSummary {
                created: 3,
                existing: 1,
                skipped_tenants: 1
            }
        );
    }
}
