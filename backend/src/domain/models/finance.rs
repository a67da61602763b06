//! Domain models for the financial side: expense transactions (invoices
//! broken into line items) and plain income entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line item of an expense transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_value: f64,
    /// Always `quantity × unit_value`; recomputed whenever items change.
    pub final_value: f64,
}

/// A recorded outflow tied to an invoice.
///
/// Invariant: `total_value` equals the sum of the items' `final_value`s.
/// The finance service recomputes both on every save, so a stored
/// transaction never carries stale totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    pub id: String,
    /// 4-digit number assigned at creation, kept across edits.
    pub transaction_number: String,
    pub issue_date: NaiveDate,
    pub entry_date: NaiveDate,
    pub company_name: String,
    pub invoice_number: String,
    pub total_value: f64,
    pub items: Vec<TransactionItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialTransaction {
    /// Sum of the current items' final values.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.final_value).sum()
    }
}

/// How an income entry was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Pix,
    #[serde(rename = "Cartão")]
    Card,
    #[serde(rename = "Boleto")]
    Bill,
    #[serde(rename = "Dinheiro")]
    Cash,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Card => "Cartão",
            PaymentMethod::Bill => "Boleto",
            PaymentMethod::Cash => "Dinheiro",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recorded inflow. Not itemized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIncome {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub method: PaymentMethod,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
