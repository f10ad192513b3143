//! Account seeding: the super admin and the company accounts that act as tenants.

use practice::{AccountType, NewAccount};
use tracing::info;

use crate::catalog::reference::FIRM_NAMES;
use crate::config::SeedConfig;
use crate::db::{SeedError, Store};

/// Accounts ensured by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountReport {
    pub created: usize,
    pub existing: usize,
}

/// Ensures the super admin and `tenant_count` company accounts exist.
///
/// Company names and emails depend only on their position, so the same config
/// always resolves to the same accounts.
pub struct AccountSeeder;

impl AccountSeeder {
    /// Accounts the config asks for, super admin first.
    pub fn planned_accounts(config: &SeedConfig) -> Vec<NewAccount> {
        let mut accounts = vec![NewAccount {
            name: "Super Admin".to_string(),
            email: format!("superadmin@{}", config.email_domain),
            account_type: AccountType::SuperAdmin,
        }];

        accounts.extend((0..config.tenant_count).map(|i| NewAccount {
            name: firm_name(i),
            email: format!("company{}@{}", i + 1, config.email_domain),
            account_type: AccountType::Company,
        }));

        accounts
    }

    pub async fn seed(store: &dyn Store, config: &SeedConfig) -> Result<AccountReport, SeedError> {
        let mut report = AccountReport::default();

        for account in Self::planned_accounts(config) {
            if store.find_or_create_account(account).await?.is_created() {
                report.created += 1;
            } else {
                report.existing += 1;
            }
        }

        info!(
            "Seeded {} accounts ({} already present)",
            report.created, report.existing
        );
        Ok(report)
    }
}

fn firm_name(index: usize) -> String {
    let base = FIRM_NAMES[index % FIRM_NAMES.len()];
    match index / FIRM_NAMES.len() {
        0 => base.to_string(),
        round => format!("{base} ({})", round + 1),
    }
}
