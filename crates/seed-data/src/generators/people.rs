//! Employee and client generation with realistic names.

use std::collections::HashSet;

use async_trait::async_trait;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use practice::{Client, ClientKind, Employee, EntityKind, StaffRole};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::config::Bounds;
use crate::db::SeedError;
use crate::sampling::chance;

/// Configuration for employee generation.
#[derive(Debug, Clone)]
pub struct EmployeeGenConfig {
    /// Number of candidate names drawn before sampling.
    pub candidate_pool: usize,
    /// Distribution of roles (partner, associate, paralegal, legal assistant).
    pub role_distribution: [f64; 4],
    /// Base hourly rate in cents for each role, same order.
    pub base_rates_cents: [i64; 4],
    /// Relative spread applied to the base rate.
    pub rate_spread: f64,
}

impl Default for EmployeeGenConfig {
    fn default() -> Self {
        Self {
            candidate_pool: 14,
            role_distribution: [0.2, 0.35, 0.3, 0.15],
            base_rates_cents: [65_000, 38_000, 17_500, 11_000],
            rate_spread: 0.12,
        }
    }
}

/// Generates firm staff with emails on the tenant's own domain.
pub struct EmployeeGenerator {
    config: EmployeeGenConfig,
}

impl EmployeeGenerator {
    pub fn new() -> Self {
        Self {
            config: EmployeeGenConfig::default(),
        }
    }

    pub fn with_config(config: EmployeeGenConfig) -> Self {
        Self { config }
    }

    /// Picks a role based on the configured distribution.
    fn pick_role(&self, rng: &mut impl Rng) -> StaffRole {
        let roll: f64 = rng.r#gen();
        let mut cumulative = 0.0;

        for (role, &weight) in StaffRole::ALL.iter().zip(&self.config.role_distribution) {
            cumulative += weight;
            if roll < cumulative {
                return *role;
            }
        }

        StaffRole::LegalAssistant
    }

    fn hourly_rate(&self, role: StaffRole, rng: &mut impl Rng) -> i64 {
        let idx = StaffRole::ALL.iter().position(|r| *r == role).unwrap_or(0);
        let base = self.config.base_rates_cents[idx] as f64;
        let factor = Normal::new(1.0, self.config.rate_spread)
            .map(|n| n.sample(rng))
            .unwrap_or(1.0)
            .clamp(0.7, 1.4);

        // Round to whole five-dollar steps.
        ((base * factor / 500.0).round() as i64) * 500
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for EmployeeGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Employee
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(3, 6)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let domain = firm_domain(&ctx.tenant.name, ctx.email_domain);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for _ in 0..self.config.candidate_pool {
            let name: String = Name().fake_with_rng(&mut ctx.rng);
            let email = email_for(&name, &domain);
            if seen.insert(email.clone()) {
                candidates.push((name, email));
            }
        }

        seed_from_catalog(ctx, &candidates, |(name, email), rng| {
            let role = self.pick_role(rng);
            Employee {
                name: name.clone(),
                email: email.clone(),
                role,
                hourly_rate_cents: self.hourly_rate(role, rng),
            }
        })
        .await
    }
}

/// Configuration for client generation.
#[derive(Debug, Clone)]
pub struct ClientGenConfig {
    /// Number of candidate clients drawn before sampling.
    pub candidate_pool: usize,
    /// Probability that a candidate is a company rather than an individual.
    pub company_probability: f64,
    /// Probability that a phone number is on file.
    pub phone_fill_rate: f64,
}

impl Default for ClientGenConfig {
    fn default() -> Self {
        Self {
            candidate_pool: 16,
            company_probability: 0.4,
            phone_fill_rate: 0.8,
        }
    }
}

/// Generates individual and company clients.
pub struct ClientGenerator {
    config: ClientGenConfig,
}

impl ClientGenerator {
    pub fn new() -> Self {
        Self {
            config: ClientGenConfig::default(),
        }
    }

    pub fn with_config(config: ClientGenConfig) -> Self {
        Self { config }
    }
}

impl Default for ClientGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for ClientGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Client
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(4, 8)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for _ in 0..self.config.candidate_pool {
            let (name, kind): (String, ClientKind) =
                if chance(self.config.company_probability, &mut ctx.rng) {
                    (CompanyName().fake_with_rng(&mut ctx.rng), ClientKind::Company)
                } else {
                    (Name().fake_with_rng(&mut ctx.rng), ClientKind::Individual)
                };
            if seen.insert(name.clone()) {
                candidates.push((name, kind));
            }
        }

        let domain = format!("clients.{}", ctx.email_domain);
        seed_from_catalog(ctx, &candidates, |(name, kind), rng| {
            let phone = if chance(self.config.phone_fill_rate, rng) {
                Some(PhoneNumber().fake_with_rng(rng))
            } else {
                None
            };
            Client {
                name: name.clone(),
                kind: *kind,
                email: email_for(name, &domain),
                phone,
            }
        })
        .await
    }
}

/// Lowercases a name into a dotted mailbox on `domain`.
fn email_for(name: &str, domain: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");

    format!("{normalized}@{domain}")
}

/// Mail domain for a firm, e.g. `ashgrove-pell-llp.example.test`.
fn firm_domain(firm_name: &str, base: &str) -> String {
    let slug = firm_name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{slug}.{base}")
}
