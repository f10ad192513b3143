//! Configuration types for fixture generation.

use std::collections::BTreeMap;
use std::num::ParseIntError;

use practice::EntityKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Which generator set a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Production bootstrap: accounts and structural lookup tables only.
    Minimal,
    /// Everything, including clients, cases, hearings, tasks, and billing.
    Demo,
}

impl Profile {
    /// Maps the external demo-data flag onto a profile.
    pub fn from_demo_flag(demo: bool) -> Self {
        if demo { Profile::Demo } else { Profile::Minimal }
    }

    /// Whether generators for `kind` belong to this profile.
    pub fn includes(&self, kind: EntityKind) -> bool {
        match self {
            Profile::Minimal => kind.is_reference_data(),
            Profile::Demo => true,
        }
    }
}

/// Inclusive bounds on how many records a generator creates per tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    /// Take the whole catalog.
    pub const ALL: Bounds = Bounds {
        min: usize::MAX,
        max: usize::MAX,
    };

    /// Creates bounds, swapping the ends if given in the wrong order.
    pub const fn new(min: usize, max: usize) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Bounds after capping both ends at the catalog size.
    pub fn capped(&self, available: usize) -> Bounds {
        Bounds::new(self.min.min(available), self.max.min(available))
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Generator set to run.
    pub profile: Profile,

    /// Base seed; every (tenant, entity kind) pair derives its own stream from it.
    pub rng_seed: u64,

    /// Number of company accounts (tenants) to ensure.
    pub tenant_count: usize,

    /// Domain used for generated account and staff emails.
    pub email_domain: String,

    /// Reference date that generated dates are spread around.
    pub anchor_date: Date,

    /// Per-kind overrides of the generators' default bounds.
    pub bounds: BTreeMap<EntityKind, Bounds>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Minimal,
            rng_seed: 20240601,
            tenant_count: 2,
            email_domain: "example.test".to_string(),
            anchor_date: OffsetDateTime::now_utc().date(),
            bounds: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be a non-negative integer, got {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl SeedConfig {
    /// Demo profile with default settings.
    pub fn demo() -> Self {
        Self {
            profile: Profile::Demo,
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_tenant_count(mut self, count: usize) -> Self {
        self.tenant_count = count;
        self
    }

    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = domain.into();
        self
    }

    pub fn with_anchor_date(mut self, date: Date) -> Self {
        self.anchor_date = date;
        self
    }

    /// Overrides the bounds for one entity kind.
    pub fn with_bounds(mut self, kind: EntityKind, bounds: Bounds) -> Self {
        self.bounds.insert(kind, bounds);
        self
    }

    /// Effective bounds for `kind`, falling back to the generator's default.
    pub fn bounds_for(&self, kind: EntityKind, default: Bounds) -> Bounds {
        self.bounds.get(&kind).copied().unwrap_or(default)
    }

    /// Reads configuration from the process environment.
    ///
    /// - `SEED_DEMO_DATA`: selects the demo profile (default `false`)
    /// - `SEED_RNG_SEED`: base random seed
    /// - `SEED_TENANT_COUNT`: number of company accounts
    /// - `SEED_EMAIL_DOMAIN`: domain for generated emails
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("SEED_DEMO_DATA") {
            config.profile = Profile::from_demo_flag(parse_bool("SEED_DEMO_DATA", &value)?);
        }
        if let Some(value) = lookup("SEED_RNG_SEED") {
            config.rng_seed = parse_number("SEED_RNG_SEED", &value)?;
        }
        if let Some(value) = lookup("SEED_TENANT_COUNT") {
            config.tenant_count = parse_number("SEED_TENANT_COUNT", &value)?;
        }
        if let Some(value) = lookup("SEED_EMAIL_DOMAIN")
            && !value.trim().is_empty()
        {
            config.email_domain = value.trim().to_string();
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_number<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
            source,
        })
}
