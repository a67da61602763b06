//! Expense transactions and income entries.
//!
//! Monetary derivation lives here: line item totals and the transaction
//! total are always recomputed from quantity and unit value on save, so a
//! stored transaction can never disagree with its items.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::finance::{
    CreateIncomeCommand, CreateIncomeResult, DeleteIncomeCommand, DeleteIncomeResult,
    DeleteTransactionCommand, DeleteTransactionResult, SaveTransactionCommand,
    SaveTransactionResult, TransactionItemDraft,
};
use crate::domain::models::finance::{FinancialIncome, FinancialTransaction, TransactionItem};
use crate::identity;
use crate::storage::traits::{Connection, IncomeStorage, TransactionStorage};

pub struct FinanceService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    income_repository: C::IncomeRepository,
}

impl<C: Connection> FinanceService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            income_repository: connection.create_income_repository(),
        }
    }

    /// Create or update an expense transaction from the invoice form.
    /// New transactions get a fresh id and 4-digit number; on edit both are
    /// carried over. Values are derived from the submitted items.
    pub fn save_transaction(&self, command: SaveTransactionCommand) -> Result<SaveTransactionResult> {
        let now = Utc::now();
        let items = build_items(&command.items);
        let total_value = items.iter().map(|i| i.final_value).sum();

        if let Some(id) = command.id {
            info!("Updating transaction: {}", id);

            let Some(existing) = self.transaction_repository.get_transaction(&id)? else {
                warn!("Attempted to update unknown transaction: {}", id);
                return Ok(SaveTransactionResult { transaction: None });
            };

            let transaction = FinancialTransaction {
                id: existing.id.clone(),
                transaction_number: existing.transaction_number.clone(),
                issue_date: command.issue_date,
                entry_date: command.entry_date,
                company_name: command.company_name,
                invoice_number: command.invoice_number,
                total_value,
                items,
                created_at: existing.created_at,
                updated_at: now,
            };
            self.transaction_repository.update_transaction(&transaction)?;

            Ok(SaveTransactionResult {
                transaction: Some(transaction),
            })
        } else {
            let transaction = FinancialTransaction {
                id: identity::record_id("transaction"),
                transaction_number: identity::four_digit_number(),
                issue_date: command.issue_date,
                entry_date: command.entry_date,
                company_name: command.company_name,
                invoice_number: command.invoice_number,
                total_value,
                items,
                created_at: now,
                updated_at: now,
            };
            self.transaction_repository.store_transaction(&transaction)?;

            info!(
                "Stored transaction {} ({}, R$ {:.2})",
                transaction.transaction_number, transaction.company_name, transaction.total_value
            );

            Ok(SaveTransactionResult {
                transaction: Some(transaction),
            })
        }
    }

    pub fn delete_transaction(
        &self,
        command: DeleteTransactionCommand,
    ) -> Result<DeleteTransactionResult> {
        let removed = self
            .transaction_repository
            .delete_transaction(&command.transaction_id)?;
        if removed {
            info!("Deleted transaction: {}", command.transaction_id);
        } else {
            warn!(
                "Attempted to delete unknown transaction: {}",
                command.transaction_id
            );
        }
        Ok(DeleteTransactionResult { removed })
    }

    pub fn get_transaction(&self, transaction_id: &str) -> Result<Option<FinancialTransaction>> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    pub fn list_transactions(&self) -> Result<Vec<FinancialTransaction>> {
        self.transaction_repository.list_transactions()
    }

    /// Case-insensitive search over company name, invoice number and
    /// transaction number. An empty term matches everything.
    pub fn search_transactions(&self, term: &str) -> Result<Vec<FinancialTransaction>> {
        let term = term.trim().to_lowercase();
        let mut transactions = self.transaction_repository.list_transactions()?;
        if !term.is_empty() {
            transactions.retain(|t| {
                t.company_name.to_lowercase().contains(&term)
                    || t.invoice_number.to_lowercase().contains(&term)
                    || t.transaction_number.to_lowercase().contains(&term)
            });
        }
        Ok(transactions)
    }

    pub fn create_income(&self, command: CreateIncomeCommand) -> Result<CreateIncomeResult> {
        let income = FinancialIncome {
            id: identity::record_id("income"),
            date: command.date,
            amount: command.amount,
            method: command.method,
            description: command.description,
            created_at: Utc::now(),
        };
        self.income_repository.store_income(&income)?;

        info!("Stored income of R$ {:.2} ({})", income.amount, income.method);

        Ok(CreateIncomeResult { income })
    }

    pub fn delete_income(&self, command: DeleteIncomeCommand) -> Result<DeleteIncomeResult> {
        let removed = self.income_repository.delete_income(&command.income_id)?;
        if removed {
            info!("Deleted income: {}", command.income_id);
        } else {
            warn!("Attempted to delete unknown income: {}", command.income_id);
        }
        Ok(DeleteIncomeResult { removed })
    }

    pub fn list_incomes(&self) -> Result<Vec<FinancialIncome>> {
        self.income_repository.list_incomes()
    }
}

fn build_items(drafts: &[TransactionItemDraft]) -> Vec<TransactionItem> {
    drafts
        .iter()
        .map(|draft| TransactionItem {
            id: identity::record_id("item"),
            name: draft.name.clone(),
            quantity: draft.quantity,
            unit_value: draft.unit_value,
            final_value: draft.quantity as f64 * draft.unit_value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::finance::PaymentMethod;
    use crate::storage::memory::test_support::date;
    use crate::storage::memory::MemoryConnection;

    fn setup() -> FinanceService<MemoryConnection> {
        FinanceService::new(Arc::new(MemoryConnection::new()))
    }

    fn invoice_command(company: &str, items: Vec<TransactionItemDraft>) -> SaveTransactionCommand {
        SaveTransactionCommand {
            id: None,
            issue_date: date(2023, 10, 1),
            entry_date: date(2023, 10, 2),
            company_name: company.to_string(),
            invoice_number: "NF-123456".to_string(),
            items,
        }
    }

    fn item(name: &str, quantity: u32, unit_value: f64) -> TransactionItemDraft {
        TransactionItemDraft {
            name: name.to_string(),
            quantity,
            unit_value,
        }
    }

    #[test]
    fn test_save_derives_item_and_total_values() {
        let service = setup();

        let result = service
            .save_transaction(invoice_command(
                "Papelaria Central",
                vec![item("Cadernos", 10, 10.0), item("Canetas", 5, 4.1)],
            ))
            .unwrap();

        let transaction = result.transaction.unwrap();
        assert!((transaction.items[0].final_value - 100.0).abs() < 1e-9);
        assert!((transaction.items[1].final_value - 20.5).abs() < 1e-9);
        assert!((transaction.total_value - 120.5).abs() < 1e-9);
        assert!(transaction.id.starts_with("transaction::"));
        assert_eq!(transaction.transaction_number.len(), 4);
    }

    #[test]
    fn test_empty_item_list_totals_zero() {
        let service = setup();
        let result = service
            .save_transaction(invoice_command("Fornecedor", vec![]))
            .unwrap();
        let transaction = result.transaction.unwrap();
        assert!(transaction.items.is_empty());
        assert_eq!(transaction.total_value, 0.0);
    }

    #[test]
    fn test_edit_keeps_identity_and_recomputes_values() {
        let service = setup();
        let created = service
            .save_transaction(invoice_command("Fornecedor", vec![item("Kimono", 1, 450.0)]))
            .unwrap()
            .transaction
            .unwrap();

        let mut command = invoice_command("Fornecedor Editado", vec![item("Kimono", 2, 450.0)]);
        command.id = Some(created.id.clone());
        let updated = service.save_transaction(command).unwrap().transaction.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.transaction_number, created.transaction_number);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.company_name, "Fornecedor Editado");
        assert!((updated.total_value - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_edit_unknown_transaction_is_noop() {
        let service = setup();
        let mut command = invoice_command("Fornecedor", vec![]);
        command.id = Some("ghost".to_string());
        let result = service.save_transaction(command).unwrap();
        assert!(result.transaction.is_none());
        assert!(service.list_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_company_invoice_and_number() {
        let service = setup();
        let created = service
            .save_transaction(invoice_command("Kimonos KVRA", vec![]))
            .unwrap()
            .transaction
            .unwrap();
        service
            .save_transaction(invoice_command("Papelaria Central", vec![]))
            .unwrap();

        assert_eq!(service.search_transactions("kvra").unwrap().len(), 1);
        assert_eq!(service.search_transactions("nf-123").unwrap().len(), 2);
        assert_eq!(
            service
                .search_transactions(&created.transaction_number)
                .unwrap()
                .len(),
            1
        );
        assert_eq!(service.search_transactions("").unwrap().len(), 2);
        assert!(service.search_transactions("inexistente").unwrap().is_empty());
    }

    #[test]
    fn test_income_lifecycle() {
        let service = setup();
        let income = service
            .create_income(CreateIncomeCommand {
                date: date(2023, 10, 1),
                amount: 150.0,
                method: PaymentMethod::Pix,
                description: Some("Mensalidade".to_string()),
            })
            .unwrap()
            .income;

        assert!(income.id.starts_with("income::"));
        assert_eq!(service.list_incomes().unwrap().len(), 1);

        assert!(service
            .delete_income(DeleteIncomeCommand {
                income_id: income.id.clone(),
            })
            .unwrap()
            .removed);
        assert!(!service
            .delete_income(DeleteIncomeCommand {
                income_id: income.id,
            })
            .unwrap()
            .removed);
    }

    #[test]
    fn test_delete_transaction_is_idempotent() {
        let service = setup();
        let created = service
            .save_transaction(invoice_command("Fornecedor", vec![]))
            .unwrap()
            .transaction
            .unwrap();

        assert!(service
            .delete_transaction(DeleteTransactionCommand {
                transaction_id: created.id.clone(),
            })
            .unwrap()
            .removed);
        assert!(!service
            .delete_transaction(DeleteTransactionCommand {
                transaction_id: created.id,
            })
            .unwrap()
            .removed);
    }
}
