//! Case generation.

use async_trait::async_trait;
use practice::{Case, CaseStatus, CaseType, Client, Employee, EntityKind};
use rand::Rng;
use time::Duration;

use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::catalog::cases::CASES;
use crate::config::Bounds;
use crate::db::{Persisted, SeedError};
use crate::sampling::{date_around, date_between, pick_with_probability};

/// Configuration for case generation.
#[derive(Debug, Clone)]
pub struct CaseGenConfig {
    /// Probability that a case has a lead attorney, when the firm has attorneys.
    pub lead_attorney_probability: f64,
    /// How far back a case may have been opened, in days.
    pub max_age_days: i64,
    /// Range of days between opening and closing for closed cases.
    pub closing_after_days: (i64, i64),
}

impl Default for CaseGenConfig {
    fn default() -> Self {
        Self {
            lead_attorney_probability: 0.7,
            max_age_days: 720,
            closing_after_days: (20, 300),
        }
    }
}

/// Generates cases tied to a client, a case type, and a status.
pub struct CaseGenerator {
    config: CaseGenConfig,
}

impl CaseGenerator {
    pub fn new() -> Self {
        Self {
            config: CaseGenConfig::default(),
        }
    }

    pub fn with_config(config: CaseGenConfig) -> Self {
        Self { config }
    }
}

impl Default for CaseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for CaseGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Case
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Client, EntityKind::CaseType, EntityKind::CaseStatus]
    }

    fn uses(&self) -> &'static [EntityKind] {
        &[EntityKind::Employee]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(3, 8)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let clients = ctx.repo.list::<Client>(ctx.tenant).await?;
        let case_types = ctx.repo.list::<CaseType>(ctx.tenant).await?;
        let statuses = ctx.repo.list::<CaseStatus>(ctx.tenant).await?;

        if clients.is_empty() {
            return Ok(ctx.skip(EntityKind::Client));
        }
        if case_types.is_empty() {
            return Ok(ctx.skip(EntityKind::CaseType));
        }
        if statuses.is_empty() {
            return Ok(ctx.skip(EntityKind::CaseStatus));
        }

        let attorneys: Vec<Persisted<Employee>> = ctx
            .repo
            .list::<Employee>(ctx.tenant)
            .await?
            .into_iter()
            .filter(|e| e.entity.role.is_attorney())
            .collect();

        let anchor = ctx.anchor_date;
        let candidates: Vec<(usize, _)> = CASES.iter().enumerate().collect();

        seed_from_catalog(ctx, &candidates, |&(index, template), rng| {
            let client = &clients[rng.gen_range(0..clients.len())];
            let case_type = &case_types[rng.gen_range(0..case_types.len())];
            let status = &statuses[rng.gen_range(0..statuses.len())];
            let lead =
                pick_with_probability(&attorneys, self.config.lead_attorney_probability, rng);

            let opened_on = date_around(anchor, -self.config.max_age_days, 0, rng);
            let closed_on = status.entity.is_closed.then(|| {
                let (lo, hi) = self.config.closing_after_days;
                let latest = (opened_on + Duration::days(hi)).min(anchor);
                let earliest = (opened_on + Duration::days(lo)).min(latest);
                date_between(earliest, latest, rng)
            });

            Case {
                title: template.title.to_string(),
                case_number: format!(
                    "{}-{:04}",
                    case_number_prefix(&case_type.entity.name),
                    index + 1
                ),
                description: template.description.to_string(),
                client_id: client.id,
                case_type_id: case_type.id,
                case_status_id: status.id,
                lead_attorney_id: lead.map(|e| e.id),
                opened_on,
                closed_on,
            }
        })
        .await
    }
}

/// Short docket prefix from the case type's initials, e.g. "Civil Litigation" -> "CL".
fn case_number_prefix(case_type: &str) -> String {
    let prefix: String = case_type
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if prefix.is_empty() {
        "GEN".to_string()
    } else {
        prefix
    }
}
