//! Domain model for an evolution (timeline) record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::student::StudentStatus;

/// Discriminator for timeline entries. Serialized labels match the values
/// stored by the original records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvolutionKind {
    /// Free-form progress note entered by an instructor.
    #[serde(rename = "evolucao")]
    Progress,
    /// Emitted automatically when a student is deactivated.
    #[serde(rename = "mudanca_status")]
    StatusChange,
    /// Emitted by a belt promotion.
    #[serde(rename = "graduacao")]
    Graduation,
}

/// A dated timeline entry belonging to exactly one student.
///
/// Records are either entered manually or emitted by the student service as
/// a side effect of a status change or promotion. Deleting a student deletes
/// all of their records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub description: String,
    /// The student's status at the time of the entry.
    pub status: StudentStatus,
    pub kind: EvolutionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
