use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::entity::{Entity, EntityKind, NaturalKey, Reference};

/// Kind of login account. Only company accounts own data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    SuperAdmin,
    Company,
}

impl AccountType {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::SuperAdmin => "super_admin",
            AccountType::Company => "company",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(AccountType::SuperAdmin),
            "company" => Some(AccountType::Company),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub created_at: OffsetDateTime,
}

impl Account {
    /// Whether this account is a tenant, i.e. a scope for generated data.
    pub fn is_tenant(&self) -> bool {
        self.account_type == AccountType::Company
    }
}

/// Account fields supplied by the seeder; the email is the natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub decimal_places: u8,
}

impl Entity for Currency {
    const KIND: EntityKind = EntityKind::Currency;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("code", &self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseType {
    pub name: String,
    pub description: String,
}

impl Entity for CaseType {
    const KIND: EntityKind = EntityKind::CaseType;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatus {
    pub name: String,
    pub is_closed: bool,
    pub sort_order: i32,
}

impl Entity for CaseStatus {
    const KIND: EntityKind = EntityKind::CaseStatus;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    pub name: String,
    pub description: String,
}

impl Entity for DocumentType {
    const KIND: EntityKind = EntityKind::DocumentType;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub name: String,
    /// Hex color used by the task board.
    pub color: String,
}

impl Entity for TaskCategory {
    const KIND: EntityKind = EntityKind::TaskCategory;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("name", &self.name)
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Partner,
    Associate,
    Paralegal,
    LegalAssistant,
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Partner,
        StaffRole::Associate,
        StaffRole::Paralegal,
        StaffRole::LegalAssistant,
    ];

    /// Whether the role bills as an attorney.
    pub fn is_attorney(&self) -> bool {
        matches!(self, StaffRole::Partner | StaffRole::Associate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub hourly_rate_cents: i64,
}

impl Entity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("email", &self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    Individual,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub kind: ClientKind,
    pub email: String,
    pub phone: Option<String>,
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("name", &self.name)
    }
}

// ---------------------------------------------------------------------------
// Cases and their children
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub title: String,
    pub case_number: String,
    pub description: String,
    pub client_id: Uuid,
    pub case_type_id: Uuid,
    pub case_status_id: Uuid,
    pub lead_attorney_id: Option<Uuid>,
    pub opened_on: Date,
    pub closed_on: Option<Date>,
}

impl Entity for Case {
    const KIND: EntityKind = EntityKind::Case;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("title", &self.title)
    }

    fn references(&self) -> Vec<Reference> {
        [
            Some(Reference::new(EntityKind::Client, self.client_id)),
            Some(Reference::new(EntityKind::CaseType, self.case_type_id)),
            Some(Reference::new(EntityKind::CaseStatus, self.case_status_id)),
            Reference::optional(EntityKind::Employee, self.lead_attorney_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNote {
    pub case_id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    pub written_on: Date,
}

impl Entity for CaseNote {
    const KIND: EntityKind = EntityKind::CaseNote;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .text("title", &self.title)
    }

    fn references(&self) -> Vec<Reference> {
        [
            Some(Reference::new(EntityKind::Case, self.case_id)),
            Reference::optional(EntityKind::Employee, self.author_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub case_id: Uuid,
    pub name: String,
    pub file_name: String,
    pub document_type_id: Option<Uuid>,
    pub uploaded_on: Date,
}

impl Entity for CaseDocument {
    const KIND: EntityKind = EntityKind::CaseDocument;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .text("name", &self.name)
    }

    fn references(&self) -> Vec<Reference> {
        [
            Some(Reference::new(EntityKind::Case, self.case_id)),
            Reference::optional(EntityKind::DocumentType, self.document_type_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTimelineEvent {
    pub case_id: Uuid,
    pub title: String,
    pub description: String,
    pub occurred_on: Date,
}

impl Entity for CaseTimelineEvent {
    const KIND: EntityKind = EntityKind::CaseTimelineEvent;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .text("title", &self.title)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(EntityKind::Case, self.case_id)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    LeadCounsel,
    CoCounsel,
    Paralegal,
    Reviewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTeamMember {
    pub case_id: Uuid,
    pub employee_id: Uuid,
    pub role: TeamRole,
    pub assigned_on: Date,
}

impl Entity for CaseTeamMember {
    const KIND: EntityKind = EntityKind::CaseTeamMember;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .id("employee_id", self.employee_id)
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(EntityKind::Case, self.case_id),
            Reference::new(EntityKind::Employee, self.employee_id),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HearingStatus {
    Scheduled,
    Adjourned,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hearing {
    pub case_id: Uuid,
    pub title: String,
    pub court: String,
    pub judge: Option<String>,
    pub scheduled_on: Date,
    pub status: HearingStatus,
    pub outcome: Option<String>,
}

impl Entity for Hearing {
    const KIND: EntityKind = EntityKind::Hearing;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .text("title", &self.title)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new(EntityKind::Case, self.case_id)]
    }
}

// ---------------------------------------------------------------------------
// Tasks and billing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub category_id: Option<Uuid>,
    pub case_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_on: Option<Date>,
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("title", &self.title)
    }

    fn references(&self) -> Vec<Reference> {
        [
            Reference::optional(EntityKind::TaskCategory, self.category_id),
            Reference::optional(EntityKind::Case, self.case_id),
            Reference::optional(EntityKind::Employee, self.assignee_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub case_id: Uuid,
    pub employee_id: Uuid,
    pub description: String,
    pub worked_on: Date,
    pub minutes: u32,
    pub billable: bool,
}

impl Entity for TimeEntry {
    const KIND: EntityKind = EntityKind::TimeEntry;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new()
            .id("case_id", self.case_id)
            .id("employee_id", self.employee_id)
            .text("description", &self.description)
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(EntityKind::Case, self.case_id),
            Reference::new(EntityKind::Employee, self.employee_id),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub memo: String,
    pub client_id: Uuid,
    pub case_id: Option<Uuid>,
    pub currency_id: Uuid,
    pub issued_on: Date,
    pub due_on: Date,
    pub total_cents: i64,
    pub status: InvoiceStatus,
}

impl Entity for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;

    fn natural_key(&self) -> NaturalKey {
        NaturalKey::new().text("number", &self.number)
    }

    fn references(&self) -> Vec<Reference> {
        [
            Some(Reference::new(EntityKind::Client, self.client_id)),
            Reference::optional(EntityKind::Case, self.case_id),
            Some(Reference::new(EntityKind::Currency, self.currency_id)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_case_references_skip_missing_lead() {
        let mut case = Case {
            title: "Harlow v. Dunmore Logistics".into(),
            case_number: "CV-2024-0001".into(),
            description: String::new(),
            client_id: Uuid::new_v4(),
            case_type_id: Uuid::new_v4(),
            case_status_id: Uuid::new_v4(),
            lead_attorney_id: None,
            opened_on: date!(2024 - 03 - 01),
            closed_on: None,
        };

        assert_eq!(case.references().len(), 3);

        case.lead_attorney_id = Some(Uuid::new_v4());
        let refs = case.references();
        assert_eq!(refs.len(), 4);
        assert!(refs.iter().any(|r| r.kind == EntityKind::Employee));
    }

    #[test]
    fn test_account_type_db_str() {
        for t in [AccountType::SuperAdmin, AccountType::Company] {
            assert_eq!(AccountType::from_db_str(t.as_str()), Some(t));
        }
        assert_eq!(AccountType::from_db_str("client"), None);
    }

    #[test]
    fn test_attributes_round_trip_through_json() {
        let entry = TimeEntry {
            case_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            description: "Drafted motion to compel".into(),
            worked_on: date!(2024 - 05 - 14),
            minutes: 95,
            billable: true,
        };

        let value = serde_json::to_value(&entry).unwrap();
        let back: TimeEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }
}
