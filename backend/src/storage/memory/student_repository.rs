//! In-memory student repository.

use anyhow::Result;
use log::warn;

use super::connection::MemoryConnection;
use crate::domain::models::student::Student;
use crate::storage::traits::StudentStorage;

#[derive(Clone)]
pub struct StudentRepository {
    connection: MemoryConnection,
}

impl StudentRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl StudentStorage for StudentRepository {
    fn store_student(&self, student: &Student) -> Result<()> {
        let mut students = self.connection.students()?;
        // Newest enrollment first; list views rely on this ordering.
        students.insert(0, student.clone());
        Ok(())
    }

    fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let students = self.connection.students()?;
        Ok(students.iter().find(|s| s.id == student_id).cloned())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.connection.students()?.clone())
    }

    fn update_student(&self, student: &Student) -> Result<bool> {
        let mut students = self.connection.students()?;
        match students.iter_mut().find(|s| s.id == student.id) {
            Some(slot) => {
                *slot = student.clone();
                Ok(true)
            }
            None => {
                warn!("Attempted to update unknown student: {}", student.id);
                Ok(false)
            }
        }
    }

    fn delete_student(&self, student_id: &str) -> Result<bool> {
        let mut students = self.connection.students()?;
        let before = students.len();
        students.retain(|s| s.id != student_id);
        Ok(students.len() < before)
    }
}
