//! Shared builders for repository and service tests.

use chrono::{NaiveDate, Utc};

use crate::domain::commands::students::StudentDraft;
use crate::domain::models::evolution::{EvolutionKind, EvolutionRecord};
use crate::domain::models::finance::{
    FinancialIncome, FinancialTransaction, PaymentMethod, TransactionItem,
};
use crate::domain::models::student::{
    Address, Belt, Gender, Schooling, Student, StudentStatus,
};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn sample_student(id: &str, full_name: &str) -> Student {
    let now = Utc::now();
    Student {
        id: id.to_string(),
        enrollment_number: "1234".to_string(),
        full_name: full_name.to_string(),
        gender: Gender::Male,
        birthdate: date(2010, 5, 15),
        age: 13,
        rg: None,
        cpf: None,
        enrollment_date: date(2023, 1, 10),
        status: StudentStatus::Active,
        belt: Belt::White,
        degrees: 0,
        mother: None,
        father: None,
        address: Address::default(),
        schooling: Schooling::default(),
        health_conditions: Vec::new(),
        other_conditions: None,
        enrolled_classes: vec!["Jiu-jitsu".to_string()],
        baptized: false,
        baptism_date: None,
        created_at: now,
        updated_at: now,
        last_modified_by: None,
    }
}

pub(crate) fn sample_draft(full_name: &str) -> StudentDraft {
    StudentDraft {
        full_name: full_name.to_string(),
        gender: Gender::Male,
        birthdate: date(2010, 5, 15),
        rg: None,
        cpf: None,
        enrollment_date: Some(date(2023, 1, 10)),
        status: StudentStatus::Active,
        belt: Belt::White,
        degrees: 0,
        mother: None,
        father: None,
        address: Address::default(),
        schooling: Schooling::default(),
        health_conditions: Vec::new(),
        other_conditions: None,
        enrolled_classes: vec!["Jiu-jitsu".to_string()],
        baptized: false,
        baptism_date: None,
    }
}

pub(crate) fn sample_record(id: &str, student_id: &str) -> EvolutionRecord {
    let now = Utc::now();
    EvolutionRecord {
        id: id.to_string(),
        student_id: student_id.to_string(),
        date: date(2023, 6, 15),
        description: "Boa postura em aula.".to_string(),
        status: StudentStatus::Active,
        kind: EvolutionKind::Progress,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn sample_transaction(id: &str, amount: f64) -> FinancialTransaction {
    let now = Utc::now();
    FinancialTransaction {
        id: id.to_string(),
        transaction_number: "4321".to_string(),
        issue_date: date(2023, 10, 1),
        entry_date: date(2023, 10, 2),
        company_name: "Fornecedor Teste".to_string(),
        invoice_number: "NF-000001".to_string(),
        total_value: amount,
        items: vec![TransactionItem {
            id: format!("{}::item", id),
            name: "Item único".to_string(),
            quantity: 1,
            unit_value: amount,
            final_value: amount,
        }],
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn sample_income(id: &str, amount: f64) -> FinancialIncome {
    FinancialIncome {
        id: id.to_string(),
        date: date(2023, 10, 1),
        amount,
        method: PaymentMethod::Pix,
        description: None,
        created_at: Utc::now(),
    }
}
