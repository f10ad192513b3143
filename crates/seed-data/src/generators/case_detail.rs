//! Records that hang off a case: notes, documents, timeline events, team
//! members, and hearings.
//!
//! Candidates are (case, template) pairs, so the sampled count is per tenant
//! rather than per case and every pair has a distinct natural key.

use async_trait::async_trait;
use practice::{
    Case, CaseDocument, CaseNote, CaseTeamMember, CaseTimelineEvent, DocumentType, Employee,
    EntityKind, Hearing, HearingStatus, TeamRole,
};
use rand::Rng;
use time::{Date, Duration};

use super::{GenContext, Generator, GeneratorReport, seed_from_catalog};
use crate::catalog::cases::{
    CASE_DOCUMENTS, CASE_NOTES, HEARING_OUTCOMES, HEARINGS, JUDGES, TIMELINE_EVENTS,
};
use crate::config::Bounds;
use crate::db::{Persisted, SeedError};
use crate::sampling::{chance, date_around, date_between, pick, pick_with_probability};

/// Days during which work on a case can have happened: from opening until it
/// closed, or until `anchor` for open cases.
pub(crate) fn case_window(case: &Case, anchor: Date) -> (Date, Date) {
    let end = case.closed_on.unwrap_or(anchor).min(anchor);
    (case.opened_on, end.max(case.opened_on))
}

/// Every (left, right) combination, left-major.
pub(crate) fn pairs<'a, A, B>(left: &'a [A], right: &'a [B]) -> Vec<(&'a A, &'a B)> {
    left.iter()
        .flat_map(|a| right.iter().map(move |b| (a, b)))
        .collect()
}

pub struct CaseNoteGenerator;

#[async_trait]
impl Generator for CaseNoteGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseNote
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case]
    }

    fn uses(&self) -> &'static [EntityKind] {
        &[EntityKind::Employee]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(4, 10)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        if cases.is_empty() {
            return Ok(ctx.skip(EntityKind::Case));
        }
        let employees = ctx.repo.list::<Employee>(ctx.tenant).await?;

        let anchor = ctx.anchor_date;
        let candidates = pairs(&cases, CASE_NOTES);

        seed_from_catalog(ctx, &candidates, |&(case, &(title, body)), rng| {
            let (from, to) = case_window(&case.entity, anchor);
            CaseNote {
                case_id: case.id,
                title: title.to_string(),
                body: body.to_string(),
                author_id: pick_with_probability(&employees, 0.8, rng).map(|e| e.id),
                written_on: date_between(from, to, rng),
            }
        })
        .await
    }
}

pub struct CaseDocumentGenerator;

#[async_trait]
impl Generator for CaseDocumentGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseDocument
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case]
    }

    fn uses(&self) -> &'static [EntityKind] {
        &[EntityKind::DocumentType]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(3, 8)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        if cases.is_empty() {
            return Ok(ctx.skip(EntityKind::Case));
        }
        let doc_types = ctx.repo.list::<DocumentType>(ctx.tenant).await?;

        let anchor = ctx.anchor_date;
        let candidates = pairs(&cases, CASE_DOCUMENTS);

        seed_from_catalog(ctx, &candidates, |&(case, template), rng| {
            let (from, to) = case_window(&case.entity, anchor);
            let doc_type = doc_types
                .iter()
                .find(|t| t.entity.name == template.type_hint)
                .or_else(|| pick_with_probability(&doc_types, 0.9, rng));

            CaseDocument {
                case_id: case.id,
                name: template.name.to_string(),
                file_name: template.file_name.to_string(),
                document_type_id: doc_type.map(|t| t.id),
                uploaded_on: date_between(from, to, rng),
            }
        })
        .await
    }
}

pub struct CaseTimelineGenerator;

#[async_trait]
impl Generator for CaseTimelineGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseTimelineEvent
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(4, 10)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        if cases.is_empty() {
            return Ok(ctx.skip(EntityKind::Case));
        }

        let anchor = ctx.anchor_date;
        let candidates = pairs(&cases, TIMELINE_EVENTS);

        seed_from_catalog(
            ctx,
            &candidates,
            |&(case, &(title, description, days_after_open)), _| {
                let (from, to) = case_window(&case.entity, anchor);
                CaseTimelineEvent {
                    case_id: case.id,
                    title: title.to_string(),
                    description: description.to_string(),
                    occurred_on: (from + Duration::days(days_after_open)).min(to),
                }
            },
        )
        .await
    }
}

pub struct CaseTeamGenerator;

impl CaseTeamGenerator {
    fn role_for(
        case: &Persisted<Case>,
        employee: &Persisted<Employee>,
        rng: &mut impl Rng,
    ) -> TeamRole {
        if case.entity.lead_attorney_id == Some(employee.id) {
            return TeamRole::LeadCounsel;
        }
        if !employee.entity.role.is_attorney() {
            return TeamRole::Paralegal;
        }
        if rng.gen_bool(0.5) {
            TeamRole::CoCounsel
        } else {
            TeamRole::Reviewer
        }
    }
}

#[async_trait]
impl Generator for CaseTeamGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::CaseTeamMember
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case, EntityKind::Employee]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(3, 8)
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

        let candidates = pairs(&cases, &employees);

        seed_from_catalog(ctx, &candidates, |&(case, employee), rng| CaseTeamMember {
            case_id: case.id,
            employee_id: employee.id,
            role: Self::role_for(case, employee, rng),
            assigned_on: case.entity.opened_on,
        })
        .await
    }
}

/// Hearings of open cases fall around the anchor date; future ones stay
/// scheduled. Hearings of closed cases fall within the case window and are
/// always settled.
pub struct HearingGenerator;

impl HearingGenerator {
    const WINDOW_DAYS: i64 = 120;

    fn status_for(
        scheduled_on: Date,
        anchor: Date,
        case_closed: bool,
        rng: &mut impl Rng,
    ) -> HearingStatus {
        if !case_closed && scheduled_on >= anchor {
            return HearingStatus::Scheduled;
        }
        let roll: f64 = rng.r#gen();
        if roll < 0.6 {
            HearingStatus::Completed
        } else if roll < 0.85 {
            HearingStatus::Adjourned
        } else {
            HearingStatus::Cancelled
        }
    }
}

#[async_trait]
impl Generator for HearingGenerator {
    fn kind(&self) -> EntityKind {
        EntityKind::Hearing
    }

    fn requires(&self) -> &'static [EntityKind] {
        &[EntityKind::Case]
    }

    fn default_bounds(&self) -> Bounds {
        Bounds::new(2, 6)
    }

    async fn generate(&self, ctx: &mut GenContext<'_>) -> Result<GeneratorReport, SeedError> {
        let cases = ctx.repo.list::<Case>(ctx.tenant).await?;
        if cases.is_empty() {
            return Ok(ctx.skip(EntityKind::Case));
        }

        let anchor = ctx.anchor_date;
        let candidates = pairs(&cases, HEARINGS);

        seed_from_catalog(ctx, &candidates, |&(case, &(title, court)), rng| {
            let case_closed = case.entity.closed_on.is_some();
            let scheduled_on = if case_closed {
                let (from, to) = case_window(&case.entity, anchor);
                date_between(from, to, rng)
            } else {
                date_around(anchor, -Self::WINDOW_DAYS, Self::WINDOW_DAYS, rng)
                    .max(case.entity.opened_on)
            };
            let status = Self::status_for(scheduled_on, anchor, case_closed, rng);
            let judge = if chance(0.8, rng) {
                pick(JUDGES, rng).map(|j| j.to_string())
            } else {
                None
            };
            let outcome = match status {
                HearingStatus::Completed => pick(HEARING_OUTCOMES, rng).map(|o| o.to_string()),
                _ => None,
            };

            Hearing {
                case_id: case.id,
                title: title.to_string(),
                court: court.to_string(),
                judge,
                scheduled_on,
                status,
                outcome,
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{TestTenant, context};
    use crate::generators::{DocumentTypeGenerator, EmployeeGenerator};
    use practice::{CaseStatus, CaseType, Client, ClientKind, StaffRole};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    async fn seed_case(
        fixture: &TestTenant,
        title: &str,
        opened_on: Date,
        closed_on: Option<Date>,
    ) -> Persisted<Case> {
        let repo = fixture.repo();
        let tenant = &fixture.tenant;
        let client = repo
            .find_or_create(
                tenant,
                Client {
                    name: "Halvorsen Freight".into(),
                    kind: ClientKind::Company,
                    email: "halvorsen.freight@clients.example.test".into(),
                    phone: None,
                },
            )
            .await
            .unwrap()
            .into_inner();
        let case_type = repo
            .find_or_create(
                tenant,
                CaseType {
                    name: "Commercial Contract".into(),
                    description: "Contract disputes".into(),
                },
            )
            .await
            .unwrap()
            .into_inner();
        let status = repo
            .find_or_create(
                tenant,
                CaseStatus {
                    name: "Open".into(),
                    is_closed: false,
                    sort_order: 20,
                },
            )
            .await
            .unwrap()
            .into_inner();

        repo.create(
            tenant,
            Case {
                title: title.into(),
                case_number: "CC-0001".into(),
                description: String::new(),
                client_id: client.id,
                case_type_id: case_type.id,
                case_status_id: status.id,
                lead_attorney_id: None,
                opened_on,
                closed_on,
            },
        )
        .await
        .unwrap()
    }

    #[test]
    fn test_case_window_clamps_to_anchor() {
        let anchor = date!(2024 - 06 - 01);
        let case = Case {
            title: "t".into(),
            case_number: "X-0001".into(),
            description: String::new(),
            client_id: uuid::Uuid::nil(),
            case_type_id: uuid::Uuid::nil(),
            case_status_id: uuid::Uuid::nil(),
            lead_attorney_id: None,
            opened_on: date!(2024 - 01 - 10),
            closed_on: Some(date!(2024 - 09 - 01)),
        };
        assert_eq!(case_window(&case, anchor), (date!(2024 - 01 - 10), anchor));

        let closed_early = Case {
            closed_on: Some(date!(2024 - 03 - 01)),
            ..case
        };
        assert_eq!(
            case_window(&closed_early, anchor),
            (date!(2024 - 01 - 10), date!(2024 - 03 - 01))
        );
    }

    #[test]
    fn test_future_hearings_stay_scheduled() {
        let anchor = date!(2024 - 06 - 01);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            assert_eq!(
                HearingGenerator::status_for(date!(2024 - 07 - 01), anchor, false, &mut rng),
                HearingStatus::Scheduled
            );
            assert_ne!(
                HearingGenerator::status_for(date!(2024 - 05 - 01), anchor, false, &mut rng),
                HearingStatus::Scheduled
            );
            assert_ne!(
                HearingGenerator::status_for(anchor, anchor, true, &mut rng),
                HearingStatus::Scheduled
            );
        }
    }

    #[tokio::test]
    async fn test_detail_generators_skip_without_cases() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();

        let generators: Vec<Box<dyn Generator>> = vec![
            Box::new(CaseNoteGenerator),
            Box::new(CaseDocumentGenerator),
            Box::new(CaseTimelineGenerator),
            Box::new(CaseTeamGenerator),
            Box::new(HearingGenerator),
        ];
        for generator in generators {
            let mut ctx = context(&fixture, repo, generator.kind(), generator.default_bounds());
            let report = generator.generate(&mut ctx).await.unwrap();
            assert_eq!(report.skipped_for, Some(EntityKind::Case));
        }
        assert_eq!(fixture.store.record_count().await, 0);
    }

    #[tokio::test]
    async fn test_notes_fall_within_case_window() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        let case = seed_case(&fixture, "Halvorsen v. Brightwater", date!(2024 - 02 - 01), None).await;

        let bounds = Bounds::new(4, 6);
        let mut ctx = context(&fixture, repo, EntityKind::CaseNote, bounds);
        let report = CaseNoteGenerator.generate(&mut ctx).await.unwrap();
        assert!(bounds.contains(report.created));

        let notes = repo.list::<CaseNote>(&fixture.tenant).await.unwrap();
        assert_eq!(notes.len(), report.created);
        for note in notes {
            assert_eq!(note.entity.case_id, case.id);
            assert_eq!(note.entity.author_id, None);
            assert!(note.entity.written_on >= date!(2024 - 02 - 01));
            assert!(note.entity.written_on <= fixture.config.anchor_date);
        }
    }

    #[tokio::test]
    async fn test_documents_use_hinted_type() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        seed_case(&fixture, "Halvorsen v. Brightwater", date!(2024 - 02 - 01), None).await;

        let mut ctx = context(&fixture, repo, EntityKind::DocumentType, Bounds::ALL);
        DocumentTypeGenerator.generate(&mut ctx).await.unwrap();
        let doc_types = repo.list::<DocumentType>(&fixture.tenant).await.unwrap();

        let mut ctx = context(&fixture, repo, EntityKind::CaseDocument, Bounds::ALL);
        CaseDocumentGenerator.generate(&mut ctx).await.unwrap();

        let documents = repo.list::<CaseDocument>(&fixture.tenant).await.unwrap();
        assert_eq!(documents.len(), CASE_DOCUMENTS.len());
        for doc in documents {
            let template = CASE_DOCUMENTS
                .iter()
                .find(|t| t.name == doc.entity.name)
                .unwrap();
            let hinted = doc_types
                .iter()
                .find(|t| t.entity.name == template.type_hint)
                .unwrap();
            assert_eq!(doc.entity.document_type_id, Some(hinted.id));
        }
    }

    #[tokio::test]
    async fn test_team_members_are_distinct_pairs() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        seed_case(&fixture, "Halvorsen v. Brightwater", date!(2024 - 02 - 01), None).await;
        seed_case(&fixture, "Estate of Marrow", date!(2023 - 11 - 15), None).await;

        let employees = EmployeeGenerator::new();
        let mut ctx = context(&fixture, repo, EntityKind::Employee, Bounds::new(4, 4));
        employees.generate(&mut ctx).await.unwrap();

        let mut ctx = context(&fixture, repo, EntityKind::CaseTeamMember, Bounds::ALL);
        let report = CaseTeamGenerator.generate(&mut ctx).await.unwrap();
        assert_eq!(report.created, 8);

        let staff = repo.list::<Employee>(&fixture.tenant).await.unwrap();
        let members = repo.list::<CaseTeamMember>(&fixture.tenant).await.unwrap();
        for member in members {
            let employee = staff.iter().find(|e| e.id == member.entity.employee_id).unwrap();
            if !employee.entity.role.is_attorney() {
                assert_eq!(member.entity.role, TeamRole::Paralegal);
            }
            // Neither case has a lead attorney.
            assert_ne!(member.entity.role, TeamRole::LeadCounsel);
        }
    }

    #[test]
    fn test_only_the_case_lead_is_lead_counsel() {
        let lead = uuid::Uuid::new_v4();
        let case = Persisted {
            id: uuid::Uuid::new_v4(),
            tenant_id: uuid::Uuid::nil(),
            entity: Case {
                title: "Halvorsen v. Brightwater".into(),
                case_number: "CC-0001".into(),
                description: String::new(),
                client_id: uuid::Uuid::nil(),
                case_type_id: uuid::Uuid::nil(),
                case_status_id: uuid::Uuid::nil(),
                lead_attorney_id: Some(lead),
                opened_on: date!(2024 - 02 - 01),
                closed_on: None,
            },
        };
        let attorney = |id| Persisted {
            id,
            tenant_id: uuid::Uuid::nil(),
            entity: Employee {
                name: "Nadia Okafor".into(),
                email: "nadia.okafor@example.test".into(),
                role: StaffRole::Associate,
                hourly_rate_cents: 30_000,
            },
        };
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            CaseTeamGenerator::role_for(&case, &attorney(lead), &mut rng),
            TeamRole::LeadCounsel
        );
        for _ in 0..30 {
            let role =
                CaseTeamGenerator::role_for(&case, &attorney(uuid::Uuid::new_v4()), &mut rng);
            assert!(matches!(role, TeamRole::CoCounsel | TeamRole::Reviewer));
        }
    }

    #[tokio::test]
    async fn test_closed_case_hearings_are_settled_within_window() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        let opened_on = date!(2024 - 01 - 10);
        let closed_on = date!(2024 - 03 - 01);
        seed_case(&fixture, "Estate of Marrow", opened_on, Some(closed_on)).await;

        let mut ctx = context(&fixture, repo, EntityKind::Hearing, Bounds::ALL);
        let report = HearingGenerator.generate(&mut ctx).await.unwrap();
        assert_eq!(report.created, HEARINGS.len());

        for hearing in repo.list::<Hearing>(&fixture.tenant).await.unwrap() {
            assert!(hearing.entity.scheduled_on >= opened_on);
            assert!(hearing.entity.scheduled_on <= closed_on);
            assert_ne!(hearing.entity.status, HearingStatus::Scheduled);
            if hearing.entity.status != HearingStatus::Completed {
                assert_eq!(hearing.entity.outcome, None);
            }
        }
    }

    #[tokio::test]
    async fn test_open_case_hearings_follow_anchor() {
        let fixture = TestTenant::new().await;
        let repo = fixture.repo();
        let opened_on = date!(2024 - 02 - 01);
        seed_case(&fixture, "Halvorsen v. Brightwater", opened_on, None).await;

        let mut ctx = context(&fixture, repo, EntityKind::Hearing, Bounds::ALL);
        HearingGenerator.generate(&mut ctx).await.unwrap();

        let anchor = fixture.config.anchor_date;
        for hearing in repo.list::<Hearing>(&fixture.tenant).await.unwrap() {
            assert!(hearing.entity.scheduled_on >= opened_on);
            if hearing.entity.scheduled_on >= anchor {
                assert_eq!(hearing.entity.status, HearingStatus::Scheduled);
            } else {
                assert_ne!(hearing.entity.status, HearingStatus::Scheduled);
            }
        }
    }
}
