//! Domain models owned by the backend.

pub mod evolution;
pub mod finance;
pub mod student;
