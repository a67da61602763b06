//! Evolution timeline records and the demotion side effect.
//!
//! Saving a record whose status is Inativo force-deactivates the student it
//! belongs to. The sync is one-directional: an Ativo record never
//! reactivates anyone. The demoted student, when there is one, is returned
//! in the result.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::evolution::{
    DeleteEvolutionRecordCommand, DeleteEvolutionRecordResult, SaveEvolutionRecordCommand,
    SaveEvolutionRecordResult,
};
use crate::domain::models::evolution::{EvolutionKind, EvolutionRecord};
use crate::domain::models::student::{Student, StudentStatus};
use crate::identity;
use crate::storage::traits::{Connection, EvolutionStorage, StudentStorage};

pub struct EvolutionService<C: Connection> {
    evolution_repository: C::EvolutionRepository,
    student_repository: C::StudentRepository,
}

impl<C: Connection> EvolutionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            evolution_repository: connection.create_evolution_repository(),
            student_repository: connection.create_student_repository(),
        }
    }

    /// Create or update a timeline record. On update, only the fields the
    /// form submitted are merged into the stored record; on insert, unset
    /// fields take the form defaults (today, empty text, Ativo, evolução).
    pub fn save_record(
        &self,
        command: SaveEvolutionRecordCommand,
    ) -> Result<SaveEvolutionRecordResult> {
        self.save_record_on(command, Local::now().date_naive())
    }

    fn save_record_on(
        &self,
        command: SaveEvolutionRecordCommand,
        today: NaiveDate,
    ) -> Result<SaveEvolutionRecordResult> {
        let now = Utc::now();

        let record = if let Some(id) = &command.id {
            info!("Updating evolution record: {}", id);

            match self.evolution_repository.get_record(id)? {
                Some(mut existing) => {
                    if let Some(date) = command.date {
                        existing.date = date;
                    }
                    if let Some(description) = &command.description {
                        existing.description = description.clone();
                    }
                    if let Some(status) = command.status {
                        existing.status = status;
                    }
                    if let Some(kind) = command.kind {
                        existing.kind = kind;
                    }
                    existing.updated_at = now;
                    self.evolution_repository.update_record(&existing)?;
                    Some(existing)
                }
                None => {
                    warn!("Attempted to update unknown evolution record: {}", id);
                    None
                }
            }
        } else {
            let record = EvolutionRecord {
                id: identity::record_id("evolution"),
                student_id: command.student_id.clone(),
                date: command.date.unwrap_or(today),
                description: command.description.clone().unwrap_or_default(),
                status: command.status.unwrap_or(StudentStatus::Active),
                kind: command.kind.unwrap_or(EvolutionKind::Progress),
                created_at: now,
                updated_at: now,
            };
            self.evolution_repository.store_record(&record)?;
            info!(
                "Stored evolution record {} for student {}",
                record.id, record.student_id
            );
            Some(record)
        };

        // An inactive record pulls its student down with it, even when the
        // update itself referenced an unknown id.
        let marks_inactive = record
            .as_ref()
            .map(|r| r.status == StudentStatus::Inactive)
            .unwrap_or(command.status == Some(StudentStatus::Inactive));

        let demoted_student = if marks_inactive {
            let student_id = record
                .as_ref()
                .map(|r| r.student_id.as_str())
                .unwrap_or(&command.student_id);
            self.demote_student(student_id, now)?
        } else {
            None
        };

        Ok(SaveEvolutionRecordResult {
            record,
            demoted_student,
        })
    }

    fn demote_student(
        &self,
        student_id: &str,
        now: chrono::DateTime<Utc>,
    ) -> Result<Option<Student>> {
        let Some(mut student) = self.student_repository.get_student(student_id)? else {
            return Ok(None);
        };
        if student.status == StudentStatus::Inactive {
            return Ok(None);
        }

        student.status = StudentStatus::Inactive;
        student.updated_at = now;
        self.student_repository.update_student(&student)?;
        info!("Student {} deactivated by timeline record", student.id);

        Ok(Some(student))
    }

    pub fn delete_record(
        &self,
        command: DeleteEvolutionRecordCommand,
    ) -> Result<DeleteEvolutionRecordResult> {
        let removed = self.evolution_repository.delete_record(&command.record_id)?;
        if removed {
            info!("Deleted evolution record: {}", command.record_id);
        } else {
            warn!(
                "Attempted to delete unknown evolution record: {}",
                command.record_id
            );
        }
        Ok(DeleteEvolutionRecordResult { removed })
    }

    pub fn list_records(&self) -> Result<Vec<EvolutionRecord>> {
        self.evolution_repository.list_records()
    }

    pub fn records_for_student(&self, student_id: &str) -> Result<Vec<EvolutionRecord>> {
        self.evolution_repository.list_records_for_student(student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_support::{date, sample_record, sample_student};
    use crate::storage::memory::MemoryConnection;

    fn setup() -> (EvolutionService<MemoryConnection>, Arc<MemoryConnection>) {
        let connection = Arc::new(MemoryConnection::new());
        (EvolutionService::new(connection.clone()), connection)
    }

    fn store_student(connection: &MemoryConnection, id: &str) {
        connection
            .create_student_repository()
            .store_student(&sample_student(id, "Aluno Teste"))
            .unwrap();
    }

    #[test]
    fn test_insert_applies_form_defaults() {
        let (service, _) = setup();

        let result = service
            .save_record_on(
                SaveEvolutionRecordCommand {
                    id: None,
                    student_id: "1".to_string(),
                    date: None,
                    description: None,
                    status: None,
                    kind: None,
                },
                date(2024, 3, 1),
            )
            .unwrap();

        let record = result.record.unwrap();
        assert_eq!(record.date, date(2024, 3, 1));
        assert_eq!(record.description, "");
        assert_eq!(record.status, StudentStatus::Active);
        assert_eq!(record.kind, EvolutionKind::Progress);
        assert!(result.demoted_student.is_none());
    }

    #[test]
    fn test_update_merges_submitted_fields_only() {
        let (service, connection) = setup();
        let original = sample_record("101", "1");
        connection
            .create_evolution_repository()
            .store_record(&original)
            .unwrap();

        let result = service
            .save_record(SaveEvolutionRecordCommand {
                id: Some("101".to_string()),
                student_id: "1".to_string(),
                date: None,
                description: Some("Texto revisado.".to_string()),
                status: None,
                kind: None,
            })
            .unwrap();

        let record = result.record.unwrap();
        assert_eq!(record.description, "Texto revisado.");
        assert_eq!(record.date, original.date);
        assert_eq!(record.kind, original.kind);
        assert_eq!(record.created_at, original.created_at);
    }

    #[test]
    fn test_inactive_record_demotes_student() {
        let (service, connection) = setup();
        store_student(&connection, "1");

        let result = service
            .save_record(SaveEvolutionRecordCommand {
                id: None,
                student_id: "1".to_string(),
                date: None,
                description: Some("Abandonou as aulas.".to_string()),
                status: Some(StudentStatus::Inactive),
                kind: Some(EvolutionKind::StatusChange),
            })
            .unwrap();

        let demoted = result.demoted_student.unwrap();
        assert_eq!(demoted.id, "1");
        assert_eq!(demoted.status, StudentStatus::Inactive);

        let stored = connection
            .create_student_repository()
            .get_student("1")
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, StudentStatus::Inactive);
    }

    #[test]
    fn test_active_record_never_reactivates() {
        let (service, connection) = setup();
        let mut student = sample_student("1", "Aluno Inativo");
        student.status = StudentStatus::Inactive;
        connection
            .create_student_repository()
            .store_student(&student)
            .unwrap();

        let result = service
            .save_record(SaveEvolutionRecordCommand {
                id: None,
                student_id: "1".to_string(),
                date: None,
                description: Some("Voltou a treinar.".to_string()),
                status: Some(StudentStatus::Active),
                kind: None,
            })
            .unwrap();

        assert!(result.demoted_student.is_none());
        let stored = connection
            .create_student_repository()
            .get_student("1")
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, StudentStatus::Inactive);
    }

    #[test]
    fn test_already_inactive_student_is_not_demoted_again() {
        let (service, connection) = setup();
        let mut student = sample_student("1", "Aluno Inativo");
        student.status = StudentStatus::Inactive;
        connection
            .create_student_repository()
            .store_student(&student)
            .unwrap();

        let result = service
            .save_record(SaveEvolutionRecordCommand {
                id: None,
                student_id: "1".to_string(),
                date: None,
                description: None,
                status: Some(StudentStatus::Inactive),
                kind: None,
            })
            .unwrap();

        assert!(result.record.is_some());
        assert!(result.demoted_student.is_none());
    }

    #[test]
    fn test_unknown_update_with_inactive_status_still_demotes() {
        let (service, connection) = setup();
        store_student(&connection, "1");

        let result = service
            .save_record(SaveEvolutionRecordCommand {
                id: Some("ghost".to_string()),
                student_id: "1".to_string(),
                date: None,
                description: None,
                status: Some(StudentStatus::Inactive),
                kind: None,
            })
            .unwrap();

        assert!(result.record.is_none());
        assert!(result.demoted_student.is_some());
    }

    #[test]
    fn test_delete_record() {
        let (service, connection) = setup();
        connection
            .create_evolution_repository()
            .store_record(&sample_record("101", "1"))
            .unwrap();

        assert!(service
            .delete_record(DeleteEvolutionRecordCommand {
                record_id: "101".to_string(),
            })
            .unwrap()
            .removed);
        assert!(!service
            .delete_record(DeleteEvolutionRecordCommand {
                record_id: "101".to_string(),
            })
            .unwrap()
            .removed);
        assert!(service.list_records().unwrap().is_empty());
    }
}
