//! Firm tasks, optionally linked to a category, a case, and an assignee.

use async_trait::async_trait;
use practice::{Case, Employee, EntityKind, Task, TaskCategory, TaskStatus};
use rand::Rng;

use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::catalog::work::TASKS;
use crate::config::Bounds;
use crate::db::SeedError;
use crate::sampling::{chance, date_around, pick, pick_with_probability};

/// Configuration for task generation.
#[derive(Debug, Clone)]
pub struct TaskGenConfig {
    pub case_link_probability: f64,
    pub assignee_probability: f64,
    pub due_date_probability: f64,
    /// Due dates fall within this many days of the anchor date.
    pub due_window_days: (i64, i64),
    /// Distribution of statuses (todo, in progress, done).
    pub status_distribution: [f64; 3],
}

impl Default for TaskGenConfig {
    fn default() -> Self {
        Self {
            case_link_probability: 0.5,
            assignee_probability: 0.7,
            due_date_probability: 0.7,
            due_window_days: (-14, 45),
            status_distribution: [0.45, 0.3, 0.25],
        }
    }
}

pub struct TaskGenerator {
    config: TaskGenConfig,
}

impl TaskGenerator {
    pub fn new() -> Self {
        Self {
            config: TaskGenConfig::default(),
        }
    }

    pub fn with_config(config: TaskGenConfig) -> Self {
        Self { config }
    }

    fn pick_status(&self, rng: &mut impl Rng) -> TaskStatus {
        let [todo, in_progress, _] = self.config.status_distribution;
        let roll: f64 = rng.r#gen();
        if roll < todo {
            TaskStatus::Todo
        } else if roll < todo + in_progress {
            TaskStatus::InProgress
        } else {
            TaskStatus::Done
        }
    }
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for TaskGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Task
    }

    fn uses(&self) -> &'static [EntityKind] {
        &[EntityKind::TaskCategory, EntityKind::Case, EntityKind::Employee]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(4, 10)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let categories = ctx.repo.list::<TaskCategory>(ctx.tenant).await?;
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        let employees = ctx.repo.list::<Employee>(ctx.tenant).await?;

        let anchor = ctx.anchor_date;
        let (due_from, due_to) = self.config.due_window_days;

        seed_from_catalog(ctx, TASKS, |&(title, priority), rng| {
            let due_on = chance(self.config.due_date_probability, rng)
                .then(|| date_around(anchor, due_from, due_to, rng));

            Task {
                title: title.to_string(),
                category_id: pick(&categories, rng).map(|c| c.id),
                case_id: pick_with_probability(&cases, self.config.case_link_probability, rng)
                    .map(|c| c.id),
                assignee_id: pick_with_probability(
                    &employees,
                    self.config.assignee_probability,
                    rng,
                )
                .map(|e| e.id),
                priority,
                status: self.pick_status(rng),
                due_on,
            }
        })
        .await
    }
}
