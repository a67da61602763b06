//! In-memory expense transaction repository.

use anyhow::Result;
use log::warn;

use super::connection::MemoryConnection;
use crate::domain::models::finance::FinancialTransaction;
use crate::storage::traits::TransactionStorage;

#[derive(Clone)]
pub struct TransactionRepository {
    connection: MemoryConnection,
}

impl TransactionRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl TransactionStorage for TransactionRepository {
    fn store_transaction(&self, transaction: &FinancialTransaction) -> Result<()> {
        let mut transactions = self.connection.transactions()?;
        transactions.insert(0, transaction.clone());
        Ok(())
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Option<FinancialTransaction>> {
        let transactions = self.connection.transactions()?;
        Ok(transactions.iter().find(|t| t.id == transaction_id).cloned())
    }

    fn list_transactions(&self) -> Result<Vec<FinancialTransaction>> {
        Ok(self.connection.transactions()?.clone())
    }

    fn update_transaction(&self, transaction: &FinancialTransaction) -> Result<bool> {
        let mut transactions = self.connection.transactions()?;
        match transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(slot) => {
                *slot = transaction.clone();
                Ok(true)
            }
            None => {
                warn!("Attempted to update unknown transaction: {}", transaction.id);
                Ok(false)
            }
        }
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        let mut transactions = self.connection.transactions()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != transaction_id);
        Ok(transactions.len() < before)
    }
}
