//! Example: Run the demo profile against an in-memory store.
//!
//! Seeds three firms with the full data set, then runs the pipeline a second
//! time to show that nothing new is created.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --example seed_demo
//! ```

use practice::{Case, Hearing, HearingStatus, Invoice, InvoiceStatus};
use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = MemoryStore::new();
    let config = SeedConfig::demo().with_tenant_count(3).with_seed(54321);
    let orchestrator = Orchestrator::for_profile(config.profile);

    let first = orchestrator.run(&store, &config).await?;
    first.log_summary();

    let second = orchestrator.run(&store, &config).await?;
    tracing::info!(
        "Second run created {} records ({} total in store)",
        second.total_created(),
        store.record_count().await
    );

    // Per-firm stats
    let repo = Repository::new(&store);
    tracing::info!("Firm stats:");
    for tenant in store.list_tenants().await? {
        let cases = repo.list::<Case>(&tenant).await?;
        let hearings = repo.list::<Hearing>(&tenant).await?;
        let invoices = repo.list::<Invoice>(&tenant).await?;

        let open_cases = cases.iter().filter(|c| c.entity.closed_on.is_none()).count();
        let upcoming = hearings
            .iter()
            .filter(|h| h.entity.status == HearingStatus::Scheduled)
            .count();
        let outstanding: i64 = invoices
            .iter()
            .filter(|i| matches!(i.entity.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
            .map(|i| i.entity.total_cents)
            .sum();

        tracing::info!("  {}:", tenant.name);
        tracing::info!("    Cases: {} ({} open)", cases.len(), open_cases);
        tracing::info!("    Hearings: {} ({} upcoming)", hearings.len(), upcoming);
        tracing::info!(
            "    Invoices: {} ({:.2} outstanding)",
            invoices.len(),
            outstanding as f64 / 100.0
        );
    }

    Ok(())
}
