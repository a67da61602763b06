//! In-memory storage connection.
//!
//! All four collections live behind one shared state, so every repository
//! created from the same connection sees the same data. Cloning the
//! connection is cheap and shares state, mirroring how a pooled database
//! connection would behave.

use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    EvolutionRepository, IncomeRepository, StudentRepository, TransactionRepository,
};
use crate::domain::models::evolution::EvolutionRecord;
use crate::domain::models::finance::{FinancialIncome, FinancialTransaction};
use crate::domain::models::student::Student;
use crate::storage::traits::Connection;

#[derive(Default)]
struct MemoryState {
    students: Mutex<Vec<Student>>,
    records: Mutex<Vec<EvolutionRecord>>,
    transactions: Mutex<Vec<FinancialTransaction>>,
    incomes: Mutex<Vec<FinancialIncome>>,
}

/// Handle to the in-memory collections. The collections start empty; use
/// [`MemoryConnection::with_sample_data`] for a pre-seeded instance.
#[derive(Clone, Default)]
pub struct MemoryConnection {
    state: Arc<MemoryState>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connection seeded with the sample fixtures the dashboard has
    /// always started from.
    pub fn with_sample_data() -> Result<Self> {
        let connection = Self::new();
        super::fixtures::seed(&connection)?;
        Ok(connection)
    }

    pub(crate) fn students(&self) -> Result<MutexGuard<'_, Vec<Student>>> {
        guard(&self.state.students, "student")
    }

    pub(crate) fn records(&self) -> Result<MutexGuard<'_, Vec<EvolutionRecord>>> {
        guard(&self.state.records, "evolution record")
    }

    pub(crate) fn transactions(&self) -> Result<MutexGuard<'_, Vec<FinancialTransaction>>> {
        guard(&self.state.transactions, "transaction")
    }

    pub(crate) fn incomes(&self) -> Result<MutexGuard<'_, Vec<FinancialIncome>>> {
        guard(&self.state.incomes, "income")
    }
}

fn guard<'a, T>(lock: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    lock.lock()
        .map_err(|_| anyhow!("{} collection lock poisoned", what))
}

impl Connection for MemoryConnection {
    type StudentRepository = StudentRepository;
    type EvolutionRepository = EvolutionRepository;
    type TransactionRepository = TransactionRepository;
    type IncomeRepository = IncomeRepository;

    fn create_student_repository(&self) -> StudentRepository {
        StudentRepository::new(self.clone())
    }

    fn create_evolution_repository(&self) -> EvolutionRepository {
        EvolutionRepository::new(self.clone())
    }

    fn create_transaction_repository(&self) -> TransactionRepository {
        TransactionRepository::new(self.clone())
    }

    fn create_income_repository(&self) -> IncomeRepository {
        IncomeRepository::new(self.clone())
    }
}
