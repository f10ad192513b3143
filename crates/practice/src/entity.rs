//! Entity kinds, natural keys, and the [`Entity`] trait implemented by every
//! tenant-owned record the seeders write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

/// Business record types owned by a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Currency,
    CaseType,
    CaseStatus,
    DocumentType,
    TaskCategory,
    Employee,
    Client,
    Case,
    CaseNote,
    CaseDocument,
    CaseTimelineEvent,
    CaseTeamMember,
    Hearing,
    Task,
    TimeEntry,
    Invoice,
}

impl EntityKind {
    pub const ALL: [EntityKind; 16] = [
        EntityKind::Currency,
        EntityKind::CaseType,
        EntityKind::CaseStatus,
        EntityKind::DocumentType,
        EntityKind::TaskCategory,
        EntityKind::Employee,
        EntityKind::Client,
        EntityKind::Case,
        EntityKind::CaseNote,
        EntityKind::CaseDocument,
        EntityKind::CaseTimelineEvent,
        EntityKind::CaseTeamMember,
        EntityKind::Hearing,
        EntityKind::Task,
        EntityKind::TimeEntry,
        EntityKind::Invoice,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Currency => "currency",
            EntityKind::CaseType => "case_type",
            EntityKind::CaseStatus => "case_status",
            EntityKind::DocumentType => "document_type",
            EntityKind::TaskCategory => "task_category",
            EntityKind::Employee => "employee",
            EntityKind::Client => "client",
            EntityKind::Case => "case",
            EntityKind::CaseNote => "case_note",
            EntityKind::CaseDocument => "case_document",
            EntityKind::CaseTimelineEvent => "case_timeline_event",
            EntityKind::CaseTeamMember => "case_team_member",
            EntityKind::Hearing => "hearing",
            EntityKind::Task => "task",
            EntityKind::TimeEntry => "time_entry",
            EntityKind::Invoice => "invoice",
        }
    }

    /// Structural lookup tables a tenant needs even without demo content.
    pub fn is_reference_data(&self) -> bool {
        matches!(
            self,
            EntityKind::Currency
                | EntityKind::CaseType
                | EntityKind::CaseStatus
                | EntityKind::DocumentType
                | EntityKind::TaskCategory
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Business-meaningful field combination identifying a record within a tenant.
///
/// Field order does not matter: the rendered form is sorted by field name, so
/// `NaturalKey::new().text("a", "1").text("b", "2")` and the reverse render
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaturalKey {
    parts: Vec<(&'static str, String)>,
}

impl NaturalKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.parts.push((field, value.into()));
        self
    }

    pub fn id(self, field: &'static str, value: Uuid) -> Self {
        self.text(field, value.to_string())
    }

    /// Canonical string form, as stored next to the record.
    pub fn render(&self) -> String {
        let mut parts: Vec<&(&'static str, String)> = self.parts.iter().collect();
        parts.sort_by(|a, b| a.0.cmp(b.0));

        parts
            .into_iter()
            .map(|(field, value)| format!("{field}={}", escape(value)))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | '=') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A foreign key held by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub kind: EntityKind,
    pub id: Uuid,
}

impl Reference {
    pub fn new(kind: EntityKind, id: Uuid) -> Self {
        Self { kind, id }
    }

    pub fn optional(kind: EntityKind, id: Option<Uuid>) -> Option<Self> {
        id.map(|id| Self::new(kind, id))
    }
}

/// A tenant-owned record type that can be seeded.
///
/// The tenant itself is not part of the entity; stores keep it next to the
/// serialized attributes and include it in the uniqueness check.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn natural_key(&self) -> NaturalKey;

    /// Every foreign key this record holds.
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_its_own_string() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("matter".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_natural_key_is_order_insensitive() {
        let id = Uuid::new_v4();
        let a = NaturalKey::new().id("case_id", id).text("title", "Intake");
        let b = NaturalKey::new().text("title", "Intake").id("case_id", id);

        assert_eq!(a.render(), b.render());
        assert_eq!(a.render(), format!("case_id={id};title=Intake"));
    }

    #[test]
    fn test_natural_key_escapes_separators() {
        let tricky = NaturalKey::new().text("name", "a;b=c");
        let plain = NaturalKey::new().text("name", "a").text("other", "b=c");

        assert_eq!(tricky.render(), r"name=a\;b\=c");
        assert_ne!(tricky.render(), plain.render());
    }

    #[test]
    fn test_reference_data_split() {
        assert!(EntityKind::CaseStatus.is_reference_data());
        assert!(!EntityKind::Case.is_reference_data());
        assert!(!EntityKind::Invoice.is_reference_data());
    }
}
