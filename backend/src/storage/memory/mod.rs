//! In-memory storage backend.
//!
//! One repository per entity over a shared [`MemoryConnection`]. This is
//! the storage model the dashboard actually runs on: collections seeded
//! from fixtures, mutated in place, gone at process exit.

mod connection;
mod evolution_repository;
mod fixtures;
mod income_repository;
mod student_repository;
mod transaction_repository;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::MemoryConnection;
pub use evolution_repository::EvolutionRepository;
pub use income_repository::IncomeRepository;
pub use student_repository::StudentRepository;
pub use transaction_repository::TransactionRepository;
