//! Storage layer: abstraction traits plus the in-memory backend.

pub mod memory;
pub mod traits;

pub use traits::{
    Connection, EvolutionStorage, IncomeStorage, StudentStorage, TransactionStorage,
};
