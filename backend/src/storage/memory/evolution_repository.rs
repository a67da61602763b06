//! In-memory evolution record repository.

use anyhow::Result;
use log::warn;

use super::connection::MemoryConnection;
use crate::domain::models::evolution::EvolutionRecord;
use crate::storage::traits::EvolutionStorage;

#[derive(Clone)]
pub struct EvolutionRepository {
    connection: MemoryConnection,
}

impl EvolutionRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl EvolutionStorage for EvolutionRepository {
    fn store_record(&self, record: &EvolutionRecord) -> Result<()> {
        let mut records = self.connection.records()?;
        records.insert(0, record.clone());
        Ok(())
    }

    fn get_record(&self, record_id: &str) -> Result<Option<EvolutionRecord>> {
        let records = self.connection.records()?;
        Ok(records.iter().find(|r| r.id == record_id).cloned())
    }

    fn list_records(&self) -> Result<Vec<EvolutionRecord>> {
        Ok(self.connection.records()?.clone())
    }

    fn list_records_for_student(&self, student_id: &str) -> Result<Vec<EvolutionRecord>> {
        let records = self.connection.records()?;
        Ok(records
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    fn update_record(&self, record: &EvolutionRecord) -> Result<bool> {
        let mut records = self.connection.records()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(true)
            }
            None => {
                warn!("Attempted to update unknown evolution record: {}", record.id);
                Ok(false)
            }
        }
    }

    fn delete_record(&self, record_id: &str) -> Result<bool> {
        let mut records = self.connection.records()?;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        Ok(records.len() < before)
    }

    fn delete_records_for_student(&self, student_id: &str) -> Result<usize> {
        let mut records = self.connection.records()?;
        let before = records.len();
        records.retain(|r| r.student_id != student_id);
        Ok(before - records.len())
    }
}
