//! Shared DTO types for the Avalanche admin dashboard.
//!
//! These structs cross the boundary between the domain backend and whatever
//! presentation layer consumes it. They carry no business logic; the backend
//! maps its domain models onto these types when answering dashboard queries.

use serde::{Deserialize, Serialize};

pub mod display;

/// The single attribute filter that can narrow the student list, in addition
/// to the free-text search term.
///
/// `kind` is deliberately an open string rather than an enum: the query
/// engine treats unrecognized kinds as passing every record, so a newer
/// frontend can ship a filter chip before the backend learns about it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveFilter {
    pub kind: String,
    pub value: String,
}

impl ActiveFilter {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Well-known filter kinds understood by the student query engine.
pub mod filter_kind {
    pub const STATUS: &str = "status";
    pub const GENDER: &str = "genero";
    pub const BELT: &str = "faixa";
    pub const ENROLLED_THIS_MONTH: &str = "matricula_mes";
    pub const BAPTIZED: &str = "batizado";
}

/// Headline counters for the student stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentStats {
    pub total_active: usize,
    pub total_inactive: usize,
    pub boys: usize,
    pub girls: usize,
}

/// Number of active students holding a given belt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeltCount {
    /// Display label of the belt, e.g. "Azul".
    pub belt: String,
    pub count: usize,
}

/// Counters for the spiritual-progress dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GospelStats {
    pub total_students: usize,
    pub baptized: usize,
    pub not_baptized: usize,
}

/// Aggregated financial picture. `balance` may be negative; the sign only
/// drives display styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_incomes: f64,
    pub total_expenses: f64,
    pub balance: f64,
}
