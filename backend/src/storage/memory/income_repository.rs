//! In-memory income repository.

use anyhow::Result;

use super::connection::MemoryConnection;
use crate::domain::models::finance::FinancialIncome;
use crate::storage::traits::IncomeStorage;

#[derive(Clone)]
pub struct IncomeRepository {
    connection: MemoryConnection,
}

impl IncomeRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl IncomeStorage for IncomeRepository {
    fn store_income(&self, income: &FinancialIncome) -> Result<()> {
        let mut incomes = self.connection.incomes()?;
        incomes.insert(0, income.clone());
        Ok(())
    }

    fn list_incomes(&self) -> Result<Vec<FinancialIncome>> {
        Ok(self.connection.incomes()?.clone())
    }

    fn delete_income(&self, income_id: &str) -> Result<bool> {
        let mut incomes = self.connection.incomes()?;
        let before = incomes.len();
        incomes.retain(|i| i.id != income_id);
        Ok(incomes.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_support::sample_income;

    #[test]
    fn test_store_list_delete() {
        let repo = IncomeRepository::new(MemoryConnection::new());
        repo.store_income(&sample_income("inc1", 150.0)).unwrap();
        repo.store_income(&sample_income("inc2", 200.0)).unwrap();

        let incomes = repo.list_incomes().unwrap();
        assert_eq!(incomes.len(), 2);
        assert_eq!(incomes[0].id, "inc2");

        assert!(repo.delete_income("inc1").unwrap());
        assert!(!repo.delete_income("inc1").unwrap());
        assert_eq!(repo.list_incomes().unwrap().len(), 1);
    }
}
