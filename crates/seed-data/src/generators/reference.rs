//! Structural lookup tables. These run in both profiles and take the whole
//! catalog by default.

use async_trait::async_trait;
use practice::{CaseStatus, CaseType, Currency, DocumentType, EntityKind, TaskCategory};

use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::catalog::reference::{
    CASE_STATUSES, CASE_TYPES, CURRENCIES, DOCUMENT_TYPES, TASK_CATEGORIES,
};
use crate::config::Bounds;
use crate::db::SeedError;

pub struct CurrencyGenerator;

#[async_trait]
impl Generator for CurrencyGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Currency
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::ALL
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        seed_from_catalog(ctx, CURRENCIES, |c, _| Currency {
            code: c.code.to_string(),
            name: c.name.to_string(),
            symbol: c.symbol.to_string(),
            decimal_places: c.decimal_places,
        })
        .await
    }
}

pub struct CaseTypeGenerator;

#[async_trait]
impl Generator for CaseTypeGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseType
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::ALL
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        seed_from_catalog(ctx, CASE_TYPES, |&(name, description), _| CaseType {
            name: name.to_string(),
            description: description.to_string(),
        })
        .await
    }
}

pub struct CaseStatusGenerator;

#[async_trait]
impl Generator for CaseStatusGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseStatus
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::ALL
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        seed_from_catalog(ctx, CASE_STATUSES, |&(name, is_closed, sort_order), _| {
            CaseStatus {
                name: name.to_string(),
                is_closed,
                sort_order,
            }
        })
        .await
    }
}

pub struct DocumentTypeGenerator;

#[async_trait]
impl Generator for DocumentTypeGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::DocumentType
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::ALL
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        seed_from_catalog(ctx, DOCUMENT_TYPES, |&(name, description), _| DocumentType {
            name: name.to_string(),
            description: description.to_string(),
        })
        .await
    }
}

pub struct TaskCategoryGenerator;

#[async_trait]
impl Generator for TaskCategoryGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::TaskCategory
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::ALL
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        seed_from_catalog(ctx, TASK_CATEGORIES, |&(name, color), _| TaskCategory {
            name: name.to_string(),
            color: color.to_string(),
        })
        .await
    }
}
