//! Storage abstraction traits.
//!
//! The domain layer only talks to these traits, so a different backend
//! (a database, files, a sync engine) can replace the in-memory one without
//! touching the services. The core ships with the in-memory implementation;
//! nothing here implies durability.

use anyhow::Result;

use crate::domain::models::evolution::EvolutionRecord;
use crate::domain::models::finance::{FinancialIncome, FinancialTransaction};
use crate::domain::models::student::Student;

/// Storage operations for students.
///
/// `store_*` inserts a new record at the front of the collection (the list
/// views show newest first); `update_*` replaces by id and reports whether
/// the id was found; `delete_*` is idempotent and reports the same.
pub trait StudentStorage: Send + Sync {
    fn store_student(&self, student: &Student) -> Result<()>;

    fn get_student(&self, student_id: &str) -> Result<Option<Student>>;

    /// Snapshot of the collection in insertion order (newest first).
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Replace the stored student with the same id. Returns false when the
    /// id is unknown.
    fn update_student(&self, student: &Student) -> Result<bool>;

    /// Returns true if a student was actually removed.
    fn delete_student(&self, student_id: &str) -> Result<bool>;
}

/// Storage operations for evolution (timeline) records.
pub trait EvolutionStorage: Send + Sync {
    fn store_record(&self, record: &EvolutionRecord) -> Result<()>;

    fn get_record(&self, record_id: &str) -> Result<Option<EvolutionRecord>>;

    fn list_records(&self) -> Result<Vec<EvolutionRecord>>;

    /// All records belonging to one student, in collection order.
    fn list_records_for_student(&self, student_id: &str) -> Result<Vec<EvolutionRecord>>;

    fn update_record(&self, record: &EvolutionRecord) -> Result<bool>;

    fn delete_record(&self, record_id: &str) -> Result<bool>;

    /// Cascade helper: remove every record of a student, returning how many
    /// were removed.
    fn delete_records_for_student(&self, student_id: &str) -> Result<usize>;
}

/// Storage operations for expense transactions.
pub trait TransactionStorage: Send + Sync {
    fn store_transaction(&self, transaction: &FinancialTransaction) -> Result<()>;

    fn get_transaction(&self, transaction_id: &str) -> Result<Option<FinancialTransaction>>;

    fn list_transactions(&self) -> Result<Vec<FinancialTransaction>>;

    fn update_transaction(&self, transaction: &FinancialTransaction) -> Result<bool>;

    fn delete_transaction(&self, transaction_id: &str) -> Result<bool>;
}

/// Storage operations for income entries.
pub trait IncomeStorage: Send + Sync {
    fn store_income(&self, income: &FinancialIncome) -> Result<()>;

    fn list_incomes(&self) -> Result<Vec<FinancialIncome>>;

    fn delete_income(&self, income_id: &str) -> Result<bool>;
}

/// Factory trait tying a storage backend together.
///
/// Services are generic over a `Connection` and obtain their repositories
/// from it, so one connection instance is the single point of truth for all
/// four collections.
pub trait Connection: Send + Sync + Clone {
    type StudentRepository: StudentStorage;
    type EvolutionRepository: EvolutionStorage;
    type TransactionRepository: TransactionStorage;
    type IncomeRepository: IncomeStorage;

    fn create_student_repository(&self) -> Self::StudentRepository;
    fn create_evolution_repository(&self) -> Self::EvolutionRepository;
    fn create_transaction_repository(&self) -> Self::TransactionRepository;
    fn create_income_repository(&self) -> Self::IncomeRepository;
}
