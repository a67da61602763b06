//! Student enrollment, editing, deletion and belt promotion.
//!
//! This service owns the cross-entity rules around students: deactivating a
//! student documents itself on the evolution timeline, deleting a student
//! cascades into their timeline, and a promotion writes a graduation entry.
//! Emitted records are returned in the result so callers never have to
//! re-read the timeline to learn what a mutation did.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::students::{
    DeleteStudentCommand, DeleteStudentResult, PromoteStudentCommand, PromoteStudentResult,
    SaveStudentCommand, SaveStudentResult,
};
use crate::domain::models::evolution::{EvolutionKind, EvolutionRecord};
use crate::domain::models::student::{age_on, Student, StudentStatus};
use crate::identity;
use crate::storage::traits::{Connection, EvolutionStorage, StudentStorage};

pub struct StudentService<C: Connection> {
    student_repository: C::StudentRepository,
    evolution_repository: C::EvolutionRepository,
}

impl<C: Connection> StudentService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            student_repository: connection.create_student_repository(),
            evolution_repository: connection.create_evolution_repository(),
        }
    }

    /// Create or update a student from a submitted enrollment form.
    ///
    /// New students get a fresh id and 4-digit matrícula. On edit, identity,
    /// matrícula and creation timestamp are carried over from the stored
    /// record, and an Active → Inactive transition emits one status-change
    /// evolution record naming the acting user. Age is recomputed from the
    /// birthdate either way.
    pub fn save_student(&self, command: SaveStudentCommand) -> Result<SaveStudentResult> {
        self.save_student_on(command, Local::now().date_naive())
    }

    fn save_student_on(
        &self,
        command: SaveStudentCommand,
        today: NaiveDate,
    ) -> Result<SaveStudentResult> {
        let now = Utc::now();
        let data = command.data;
        let age = age_on(data.birthdate, today);

        if let Some(id) = command.id {
            info!("Updating student: {}", id);

            let Some(existing) = self.student_repository.get_student(&id)? else {
                warn!("Attempted to update unknown student: {}", id);
                return Ok(SaveStudentResult {
                    student: None,
                    emitted_records: Vec::new(),
                });
            };

            let student = Student {
                id: existing.id.clone(),
                enrollment_number: existing.enrollment_number.clone(),
                full_name: data.full_name,
                gender: data.gender,
                birthdate: data.birthdate,
                age,
                rg: data.rg,
                cpf: data.cpf,
                enrollment_date: data.enrollment_date.unwrap_or(existing.enrollment_date),
                status: data.status,
                belt: data.belt,
                degrees: data.degrees,
                mother: data.mother,
                father: data.father,
                address: data.address,
                schooling: data.schooling,
                health_conditions: data.health_conditions,
                other_conditions: data.other_conditions,
                enrolled_classes: data.enrolled_classes,
                baptized: data.baptized,
                baptism_date: data.baptism_date,
                created_at: existing.created_at,
                updated_at: now,
                last_modified_by: Some(command.acting_user.clone()),
            };
            self.student_repository.update_student(&student)?;

            let mut emitted_records = Vec::new();
            if existing.status == StudentStatus::Active && student.status == StudentStatus::Inactive
            {
                let record = EvolutionRecord {
                    id: identity::record_id("evolution"),
                    student_id: student.id.clone(),
                    date: today,
                    description: format!(
                        "Status alterado para Inativo via edição de cadastro por {}.",
                        command.acting_user
                    ),
                    status: StudentStatus::Inactive,
                    kind: EvolutionKind::StatusChange,
                    created_at: now,
                    updated_at: now,
                };
                self.evolution_repository.store_record(&record)?;
                info!("Student {} deactivated, status change logged", student.id);
                emitted_records.push(record);
            }

            Ok(SaveStudentResult {
                student: Some(student),
                emitted_records,
            })
        } else {
            let student = Student {
                id: identity::record_id("student"),
                enrollment_number: identity::four_digit_number(),
                full_name: data.full_name,
                gender: data.gender,
                birthdate: data.birthdate,
                age,
                rg: data.rg,
                cpf: data.cpf,
                enrollment_date: data.enrollment_date.unwrap_or(today),
                status: data.status,
                belt: data.belt,
                degrees: data.degrees,
                mother: data.mother,
                father: data.father,
                address: data.address,
                schooling: data.schooling,
                health_conditions: data.health_conditions,
                other_conditions: data.other_conditions,
                enrolled_classes: data.enrolled_classes,
                baptized: data.baptized,
                baptism_date: data.baptism_date,
                created_at: now,
                updated_at: now,
                last_modified_by: Some(command.acting_user),
            };
            self.student_repository.store_student(&student)?;

            info!(
                "Enrolled student {} with matrícula {}",
                student.full_name, student.enrollment_number
            );

            Ok(SaveStudentResult {
                student: Some(student),
                emitted_records: Vec::new(),
            })
        }
    }

    /// Remove a student and every evolution record tied to them. A no-op
    /// (not an error) when the id is unknown; the cascade still runs so
    /// orphaned records are cleaned up either way.
    pub fn delete_student(&self, command: DeleteStudentCommand) -> Result<DeleteStudentResult> {
        info!("Deleting student: {}", command.student_id);

        let removed = self.student_repository.delete_student(&command.student_id)?;
        let removed_record_count = self
            .evolution_repository
            .delete_records_for_student(&command.student_id)?;

        if removed {
            info!(
                "Deleted student {} and {} timeline record(s)",
                command.student_id, removed_record_count
            );
        } else {
            warn!("Attempted to delete unknown student: {}", command.student_id);
        }

        Ok(DeleteStudentResult {
            removed,
            removed_record_count,
        })
    }

    /// Promote a student to a new belt/degree combination and write the
    /// graduation to their timeline, dated as entered on the form.
    pub fn promote_student(&self, command: PromoteStudentCommand) -> Result<PromoteStudentResult> {
        info!(
            "Promoting student {} to {} ({} degree(s))",
            command.student_id,
            command.new_belt.label(),
            command.new_degrees
        );

        let Some(mut student) = self.student_repository.get_student(&command.student_id)? else {
            warn!("Attempted to promote unknown student: {}", command.student_id);
            return Ok(PromoteStudentResult {
                student: None,
                record: None,
            });
        };

        let now = Utc::now();
        student.belt = command.new_belt;
        student.degrees = command.new_degrees;
        student.updated_at = now;
        self.student_repository.update_student(&student)?;

        let record = EvolutionRecord {
            id: identity::record_id("evolution"),
            student_id: student.id.clone(),
            date: command.date,
            description: format!(
                "Graduado para Faixa {} ({}º Grau).\n{}",
                command.new_belt.label(),
                command.new_degrees,
                command.notes
            ),
            status: student.status,
            kind: EvolutionKind::Graduation,
            created_at: now,
            updated_at: now,
        };
        self.evolution_repository.store_record(&record)?;

        Ok(PromoteStudentResult {
            student: Some(student),
            record: Some(record),
        })
    }

    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        self.student_repository.get_student(student_id)
    }

    /// Snapshot of the student collection, newest enrollment first.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        self.student_repository.list_students()
    }
}
