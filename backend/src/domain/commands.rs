//! Domain-level command and result types.
//!
//! These structs are the input/output surface of the services. Mutations
//! return the affected entity together with any records emitted as a side
//! effect, so callers observe cross-entity effects explicitly instead of
//! re-reading collections to discover them.
//!
//! Deletes and updates on unknown ids are silent no-ops by design (trusted
//! single-user tool); results still report whether anything happened.

pub mod students {
    use crate::domain::models::evolution::EvolutionRecord;
    use crate::domain::models::student::{
        Address, Belt, Gender, Guardian, Schooling, Student, StudentStatus,
    };
    use chrono::NaiveDate;

    /// Everything an enrollment form submits. Identity, matrícula, age and
    /// audit timestamps are derived by the service, never supplied.
    #[derive(Debug, Clone)]
    pub struct StudentDraft {
        pub full_name: String,
        pub gender: Gender,
        pub birthdate: NaiveDate,
        pub rg: Option<String>,
        pub cpf: Option<String>,
        /// Defaults to today when unset.
        pub enrollment_date: Option<NaiveDate>,
        pub status: StudentStatus,
        pub belt: Belt,
        pub degrees: u8,
        pub mother: Option<Guardian>,
        pub father: Option<Guardian>,
        pub address: Address,
        pub schooling: Schooling,
        pub health_conditions: Vec<String>,
        pub other_conditions: Option<String>,
        pub enrolled_classes: Vec<String>,
        pub baptized: bool,
        pub baptism_date: Option<NaiveDate>,
    }

    /// Upsert input: `id` present means edit, absent means enroll.
    #[derive(Debug, Clone)]
    pub struct SaveStudentCommand {
        pub id: Option<String>,
        pub data: StudentDraft,
        /// Display name recorded as `last_modified_by` and named in any
        /// emitted status-change record.
        pub acting_user: String,
    }

    #[derive(Debug, Clone)]
    pub struct SaveStudentResult {
        /// `None` when an edit referenced an unknown id.
        pub student: Option<Student>,
        /// Status-change records emitted by this save (0 or 1).
        pub emitted_records: Vec<EvolutionRecord>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteStudentCommand {
        pub student_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteStudentResult {
        pub removed: bool,
        /// Evolution records cascaded away with the student.
        pub removed_record_count: usize,
    }

    #[derive(Debug, Clone)]
    pub struct PromoteStudentCommand {
        pub student_id: String,
        pub new_belt: Belt,
        pub new_degrees: u8,
        /// Graduation date as entered on the form, not necessarily today.
        pub date: NaiveDate,
        pub notes: String,
    }

    #[derive(Debug, Clone)]
    pub struct PromoteStudentResult {
        pub student: Option<Student>,
        pub record: Option<EvolutionRecord>,
    }
}

pub mod evolution {
    use crate::domain::models::evolution::{EvolutionKind, EvolutionRecord};
    use crate::domain::models::student::{Student, StudentStatus};
    use chrono::NaiveDate;

    /// Upsert input for a timeline record. On update, only the `Some`
    /// fields are merged into the stored record; on insert, unset fields
    /// take the form defaults (today / Active / Progress).
    #[derive(Debug, Clone)]
    pub struct SaveEvolutionRecordCommand {
        pub id: Option<String>,
        pub student_id: String,
        pub date: Option<NaiveDate>,
        pub description: Option<String>,
        pub status: Option<StudentStatus>,
        pub kind: Option<EvolutionKind>,
    }

    #[derive(Debug, Clone)]
    pub struct SaveEvolutionRecordResult {
        /// `None` when an update referenced an unknown id.
        pub record: Option<EvolutionRecord>,
        /// The student force-set to Inactive by this save, if that happened.
        pub demoted_student: Option<Student>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteEvolutionRecordCommand {
        pub record_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteEvolutionRecordResult {
        pub removed: bool,
    }
}

pub mod finance {
    use crate::domain::models::finance::{FinancialIncome, FinancialTransaction, PaymentMethod};
    use chrono::NaiveDate;

    /// A line item as submitted; `final_value` is computed, never supplied.
    #[derive(Debug, Clone)]
    pub struct TransactionItemDraft {
        pub name: String,
        pub quantity: u32,
        pub unit_value: f64,
    }

    /// Upsert input for an expense transaction. Item and total values are
    /// recomputed from the drafts before storing.
    #[derive(Debug, Clone)]
    pub struct SaveTransactionCommand {
        pub id: Option<String>,
        pub issue_date: NaiveDate,
        pub entry_date: NaiveDate,
        pub company_name: String,
        pub invoice_number: String,
        pub items: Vec<TransactionItemDraft>,
    }

    #[derive(Debug, Clone)]
    pub struct SaveTransactionResult {
        /// `None` when an edit referenced an unknown id.
        pub transaction: Option<FinancialTransaction>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteTransactionCommand {
        pub transaction_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteTransactionResult {
        pub removed: bool,
    }

    #[derive(Debug, Clone)]
    pub struct CreateIncomeCommand {
        pub date: NaiveDate,
        pub amount: f64,
        pub method: PaymentMethod,
        pub description: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateIncomeResult {
        pub income: FinancialIncome,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteIncomeCommand {
        pub income_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteIncomeResult {
        pub removed: bool,
    }
}

pub mod queries {
    use shared::ActiveFilter;

    /// Input for the student list view: free-text term plus the single
    /// optional attribute filter.
    #[derive(Debug, Clone, Default)]
    pub struct SearchStudentsQuery {
        pub search_text: String,
        pub filter: Option<ActiveFilter>,
    }
}
