//! Time entries and invoices.

use async_trait::async_trait;
use practice::{Case, Client, Currency, Employee, EntityKind, Invoice, InvoiceStatus, TimeEntry};
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};
use time::{Date, Duration};

use super::case_detail::{case_window, pairs};
use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::catalog::reference::PREFERRED_CURRENCY;
use crate::catalog::work::{INVOICE_MEMOS, TIME_ENTRY_DESCRIPTIONS};
use crate::config::Bounds;
use crate::db::{Persisted, SeedError};
use crate::sampling::{chance, date_around, date_between, pick_with_probability};

/// Configuration for time entry generation.
#[derive(Debug, Clone)]
pub struct TimeEntryGenConfig {
    pub mean_minutes: f64,
    pub std_dev_minutes: f64,
    pub billable_probability: f64,
}

impl Default for TimeEntryGenConfig {
    fn default() -> Self {
        Self {
            mean_minutes: 90.0,
            std_dev_minutes: 45.0,
            billable_probability: 0.85,
        }
    }
}

/// Generates time entries against a tenant's cases.
pub struct TimeEntryGenerator {
    config: TimeEntryGenConfig,
}

impl TimeEntryGenerator {
    /// Entries are billed in tenths of an hour.
    const INCREMENT_MINUTES: f64 = 6.0;
    const MAX_MINUTES: f64 = 480.0;

    pub fn new() -> Self {
        Self {
            config: TimeEntryGenConfig::default(),
        }
    }

    pub fn with_config(config: TimeEntryGenConfig) -> Self {
        Self { config }
    }

    fn minutes(&self, rng: &mut impl Rng) -> u32 {
        let raw = Normal::new(self.config.mean_minutes, self.config.std_dev_minutes)
            .map(|n| n.sample(rng))
            .unwrap_or(self.config.mean_minutes)
            .clamp(Self::INCREMENT_MINUTES, Self::MAX_MINUTES);

        let steps = (raw / Self::INCREMENT_MINUTES).round().max(1.0);
        (steps * Self::INCREMENT_MINUTES) as u32
    }
}

impl Default for TimeEntryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for TimeEntryGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::TimeEntry
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case, EntityKind::Employee]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(5, 10)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        if cases.is_empty() {
            return Ok(ctx.skip(EntityKind::Case));
        }
        let employees = ctx.repo.list::<Employee>(ctx.tenant).await?;
        if employees.is_empty() {
            return Ok(ctx.skip(EntityKind::Employee));
        }

        let anchor = ctx.anchor_date;
        let candidates = pairs(&cases, TIME_ENTRY_DESCRIPTIONS);

        seed_from_catalog(ctx, &candidates, |&(case, &description), rng| {
            let employee = &employees[rng.gen_range(0..employees.len())];
            let (from, to) = case_window(&case.entity, anchor);

            TimeEntry {
                case_id: case.id,
                employee_id: employee.id,
                description: description.to_string(),
                worked_on: date_between(from, to, rng),
                minutes: self.minutes(rng),
                billable: chance(self.config.billable_probability, rng),
            }
        })
        .await
    }
}

/// Configuration for invoice generation.
#[derive(Debug, Clone)]
pub struct InvoiceGenConfig {
    /// Probability that an invoice is tied to one of the client's cases.
    pub case_link_probability: f64,
    /// Probability of billing in the firm's preferred currency.
    pub preferred_currency_probability: f64,
    /// Median invoice total in whole currency units.
    pub median_total: f64,
    pub total_sigma: f64,
    /// Invoices are issued at most this many days before the anchor date.
    pub max_age_days: i64,
    pub payment_terms_days: i64,
}

impl Default for InvoiceGenConfig {
    fn default() -> Self {
        Self {
            case_link_probability: 0.6,
            preferred_currency_probability: 0.8,
            median_total: 3_500.0,
            total_sigma: 0.6,
            max_age_days: 180,
            payment_terms_days: 30,
        }
    }
}

/// Generates invoices addressed to a tenant's clients.
pub struct InvoiceGenerator {
    config: InvoiceGenConfig,
}

impl InvoiceGenerator {
    pub fn new() -> Self {
        Self {
            config: InvoiceGenConfig::default(),
        }
    }

    pub fn with_config(config: InvoiceGenConfig) -> Self {
        Self { config }
    }

    /// Total in cents, rounded to whole units.
    fn total_cents(&self, rng: &mut impl Rng) -> i64 {
        let units = LogNormal::new(self.config.median_total.ln(), self.config.total_sigma)
            .map(|d| d.sample(rng))
            .unwrap_or(self.config.median_total)
            .max(1.0);
        (units.round() as i64) * 100
    }

    fn status_for(due_on: Date, anchor: Date, rng: &mut impl Rng) -> InvoiceStatus {
        if due_on < anchor {
            if chance(0.6, rng) {
                InvoiceStatus::Paid
            } else {
                InvoiceStatus::Overdue
            }
        } else if chance(0.7, rng) {
            InvoiceStatus::Sent
        } else {
            InvoiceStatus::Draft
        }
    }
}

impl Default for InvoiceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for InvoiceGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Invoice
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Client, EntityKind::Currency]
    }

    fn uses(&self) -> &'static [EntityKind] {
        &[EntityKind::Case]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(2, 6)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let clients = ctx.repo.list::<Client>(ctx.tenant).await?;
        if clients.is_empty() {
            return Ok(ctx.skip(EntityKind::Client));
        }
        let currencies = ctx.repo.list::<Currency>(ctx.tenant).await?;
        if currencies.is_empty() {
            return Ok(ctx.skip(EntityKind::Currency));
        }
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;

        let preferred = currencies
            .iter()
            .find(|c| c.entity.code == PREFERRED_CURRENCY);
        let anchor = ctx.anchor_date;
        let candidates: Vec<(usize, _)> = INVOICE_MEMOS.iter().enumerate().collect();

        seed_from_catalog(ctx, &candidates, |&(index, &memo), rng| {
            let client = &clients[rng.gen_range(0..clients.len())];
            let client_cases: Vec<&Persisted<Case>> = cases
                .iter()
                .filter(|c| c.entity.client_id == client.id)
                .collect();
            let case = pick_with_probability(&client_cases, self.config.case_link_probability, rng);

            let currency = match preferred {
                Some(usd) if chance(self.config.preferred_currency_probability, rng) => usd,
                _ => &currencies[rng.gen_range(0..currencies.len())],
            };

            let issued_on = date_around(anchor, -self.config.max_age_days, 0, rng);
            let due_on = issued_on + Duration::days(self.config.payment_terms_days);

            Invoice {
                number: format!("INV-{:05}", index + 1),
                memo: memo.to_string(),
                client_id: client.id,
                case_id: case.map(|c| c.id),
                currency_id: currency.id,
                issued_on,
                due_on,
                total_cents: self.total_cents(rng),
                status: Self::status_for(due_on, anchor, rng),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{TestTenant, context};
    use crate::generators::{ClientGenerator, CurrencyGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    #[test]
    fn test_minutes_in_tenth_hour_steps() {
        let entries = TimeEntryGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let minutes = entries.minutes(&mut rng);
            assert_eq!(minutes % 6, 0);
            assert!((6..=480).contains(&minutes), "minutes {minutes}");
        }
    }

    #[test]
    fn test_invoice_totals_are_whole_units() {
        let invoices = InvoiceGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..100 {
            let total = invoices.total_cents(&mut rng);
            assert!(total >= 100);
            assert_eq!(total % 100, 0);
        }
    }

    #[test]
    fn test_invoice_status_follows_due_date() {
        let anchor = date!(2024 - 06 - 01);
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..30 {
            let past = InvoiceGenerator::status_for(date!(2024 - 05 - 01), anchor, &mut rng);
            assert!(matches!(past, InvoiceStatus::Paid | InvoiceStatus::Overdue));

            let future = InvoiceGenerator::status_for(date!(2024 - 06 - 20), anchor, &mut rng);
            assert!(matches!(future, InvoiceStatus::Sent | InvoiceStatus::Draft));
        }
    }

    #[tokio::test]
    async fn test_time_entries_skip_without_cases() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();

        let entries = TimeEntryGenerator::new();
        let mut ctx = context(&fixture, repo, EntityKind::TimeEntry, entries.default_bounds());
        let report = entries.generate(&mut ctx).await.unwrap();

        assert_eq!(report.skipped_for, Some(EntityKind::Case));
    }

    #[tokio::test]
    async fn test_invoices_reference_tenant_clients() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        let tenant = &fixture.tenant;

        let mut ctx = context(&fixture, repo, EntityKind::Currency, Bounds::ALL);
        CurrencyGenerator.generate(&mut ctx).await.unwrap();
        let clients = ClientGenerator::new();
        let mut ctx = context(&fixture, repo, EntityKind::Client, clients.default_bounds());
        clients.generate(&mut ctx).await.unwrap();

        let invoices = InvoiceGenerator::new();
        let bounds = invoices.default_bounds();
        let mut ctx = context(&fixture, repo, EntityKind::Invoice, bounds);
        let report = invoices.generate(&mut ctx).await.unwrap();
        assert!(bounds.contains(report.created));

        let client_ids: Vec<_> = repo
            .list::<Client>(tenant)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        for invoice in repo.list::<Invoice>(tenant).await.unwrap() {
            assert!(client_ids.contains(&invoice.entity.client_id));
            assert_eq!(invoice.entity.case_id, None);
            assert_eq!(
                invoice.entity.due_on - invoice.entity.issued_on,
                Duration::days(30)
            );
            assert!(invoice.entity.number.starts_with("INV-"));
        }
    }
}
