//! Read side of the student collection: search, filtering and the
//! dashboard statistics blocks.
//!
//! At most one attribute filter is active at a time. Filters with an
//! unrecognized kind or value pass students through rather than hiding
//! them, so a stale filter coming from a saved view never empties the list.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use shared::{filter_kind, ActiveFilter, BeltCount, GospelStats, StudentStats};
use std::sync::Arc;

use crate::domain::commands::queries::SearchStudentsQuery;
use crate::domain::models::student::{Belt, Gender, Student, StudentStatus};
use crate::storage::traits::{Connection, StudentStorage};

pub struct StudentQueryService<C: Connection> {
    student_repository: C::StudentRepository,
}

impl<C: Connection> StudentQueryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            student_repository: connection.create_student_repository(),
        }
    }

    /// Students matching both the free-text term and the active filter,
    /// in collection order. The term matches name, CPF and matrícula,
    /// case-insensitively; an empty term matches everyone.
    pub fn search_students(&self, query: &SearchStudentsQuery) -> Result<Vec<Student>> {
        self.search_students_on(query, Local::now().date_naive())
    }

    fn search_students_on(
        &self,
        query: &SearchStudentsQuery,
        today: NaiveDate,
    ) -> Result<Vec<Student>> {
        let mut students = self.student_repository.list_students()?;
        students.retain(|student| {
            matches_search(student, &query.search_text)
                && query
                    .filter
                    .as_ref()
                    .map(|filter| matches_filter(student, filter, today))
                    .unwrap_or(true)
        });
        debug!(
            "Search \"{}\" with filter {:?}: {} match(es)",
            query.search_text,
            query.filter,
            students.len()
        );
        Ok(students)
    }

    /// Selecting the filter already in effect clears it; anything else
    /// replaces whatever was active.
    pub fn toggle_filter(
        current: Option<ActiveFilter>,
        selection: ActiveFilter,
    ) -> Option<ActiveFilter> {
        match current {
            Some(active) if active == selection => None,
            _ => Some(selection),
        }
    }

    /// Headcounts by status, and by gender over the whole collection.
    pub fn student_stats(&self) -> Result<StudentStats> {
        let students = self.student_repository.list_students()?;
        let active = students.iter().filter(|s| s.is_active()).count();

        Ok(StudentStats {
            total_active: active,
            total_inactive: students.len() - active,
            boys: students.iter().filter(|s| s.gender == Gender::Male).count(),
            girls: students.iter().filter(|s| s.gender == Gender::Female).count(),
        })
    }

    /// Active students per belt, every belt present in promotion order even
    /// when its count is zero.
    pub fn belt_counts(&self) -> Result<Vec<BeltCount>> {
        let students = self.student_repository.list_students()?;
        Ok(Belt::ALL
            .iter()
            .map(|belt| BeltCount {
                belt: belt.label().to_string(),
                count: students
                    .iter()
                    .filter(|s| s.is_active() && s.belt == *belt)
                    .count(),
            })
            .collect())
    }

    /// Baptism counts over the whole collection, active or not.
    pub fn gospel_stats(&self) -> Result<GospelStats> {
        let students = self.student_repository.list_students()?;
        let baptized = students.iter().filter(|s| s.baptized).count();

        Ok(GospelStats {
            total_students: students.len(),
            baptized,
            not_baptized: students.len() - baptized,
        })
    }

    /// Students whose enrollment date falls in the current calendar month.
    pub fn new_enrollments_this_month(&self) -> Result<Vec<Student>> {
        self.new_enrollments_in_month(Local::now().date_naive())
    }

    fn new_enrollments_in_month(&self, today: NaiveDate) -> Result<Vec<Student>> {
        let mut students = self.student_repository.list_students()?;
        students.retain(|s| enrolled_in_month(s, today));
        Ok(students)
    }
}

fn matches_search(student: &Student, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    student.full_name.to_lowercase().contains(&term)
        || student
            .cpf
            .as_ref()
            .map(|cpf| cpf.to_lowercase().contains(&term))
            .unwrap_or(false)
        || student.enrollment_number.to_lowercase().contains(&term)
}

fn matches_filter(student: &Student, filter: &ActiveFilter, today: NaiveDate) -> bool {
    match filter.kind.as_str() {
        filter_kind::STATUS => student.status.label() == filter.value,
        filter_kind::GENDER => student.gender.label() == filter.value,
        filter_kind::BELT => student.belt.label() == filter.value,
        filter_kind::ENROLLED_THIS_MONTH => enrolled_in_month(student, today),
        filter_kind::BAPTIZED => match filter.value.as_str() {
            "Sim" => student.baptized,
            "Não" => !student.baptized,
            _ => true,
        },
        _ => true,
    }
}

fn enrolled_in_month(student: &Student, today: NaiveDate) -> bool {
    student.enrollment_date.year() == today.year()
        && student.enrollment_date.month() == today.month()
}
