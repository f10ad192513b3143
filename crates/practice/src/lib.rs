//! Domain model of the practice-management application.
//!
//! Only the parts the seeders touch live here: accounts (tenants), the
//! tenant-owned business records, and the [`Entity`] trait that gives each of
//! them a natural key and its foreign keys.

pub mod entity;
pub mod models;

pub use entity::{Entity, EntityKind, NaturalKey, Reference, UnknownEntityKind};
pub use models::{
    Account, AccountType, Case, CaseDocument, CaseNote, CaseStatus, CaseTeamMember,
    CaseTimelineEvent, CaseType, Client, ClientKind, Currency, DocumentType, Employee, Hearing,
    HearingStatus, Invoice, InvoiceStatus, NewAccount, StaffRole, Task, TaskCategory, TaskPriority,
    TaskStatus, TeamRole, TimeEntry,
};
