//! Financial aggregation for the dashboard header.

use anyhow::Result;
use log::debug;
use shared::FinancialSummary;
use std::sync::Arc;

use crate::storage::traits::{Connection, IncomeStorage, TransactionStorage};

pub struct ReportService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    income_repository: C::IncomeRepository,
}

impl<C: Connection> ReportService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            income_repository: connection.create_income_repository(),
        }
    }

    /// Totals over the whole financial history: income sum, expense sum and
    /// the running balance (incomes minus expenses, negative when spending
    /// outpaces funding).
    pub fn financial_summary(&self) -> Result<FinancialSummary> {
        let total_incomes: f64 = self
            .income_repository
            .list_incomes()?
            .iter()
            .map(|income| income.amount)
            .sum();
        let total_expenses: f64 = self
            .transaction_repository
            .list_transactions()?
            .iter()
            .map(|transaction| transaction.total_value)
            .sum();

        let summary = FinancialSummary {
            total_incomes,
            total_expenses,
            balance: total_incomes - total_expenses,
        };
        debug!(
            "Financial summary: incomes {:.2}, expenses {:.2}, balance {:.2}",
            summary.total_incomes, summary.total_expenses, summary.balance
        );
        Ok(summary)
    }
}
