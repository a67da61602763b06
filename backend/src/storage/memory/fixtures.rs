//! Seed fixtures for a freshly started dashboard.
//!
//! Reproduces the sample population the program has always booted with:
//! four students, one timeline entry, two invoices and two incomes. Ages
//! are recomputed at seed time instead of being stored stale.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};

use super::connection::MemoryConnection;
use crate::domain::models::evolution::{EvolutionKind, EvolutionRecord};
use crate::domain::models::finance::{
    FinancialIncome, FinancialTransaction, PaymentMethod, TransactionItem,
};
use crate::domain::models::student::{
    age_on, Address, Belt, Gender, Guardian, Schooling, Student, StudentStatus,
};

pub(crate) fn seed(connection: &MemoryConnection) -> Result<()> {
    let today = Local::now().date_naive();

    connection.students()?.extend(sample_students(today));
    connection.records()?.extend(sample_records());
    connection.transactions()?.extend(sample_transactions());
    connection.incomes()?.extend(sample_incomes());

    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixture dates are hand-picked valid calendar days.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn base_student(today: chrono::NaiveDate) -> Student {
    let now = Utc::now();
    Student {
        id: String::new(),
        enrollment_number: String::new(),
        full_name: String::new(),
        gender: Gender::Male,
        birthdate: date(2010, 1, 1),
        age: age_on(date(2010, 1, 1), today),
        rg: None,
        cpf: None,
        enrollment_date: date(2023, 1, 1),
        status: StudentStatus::Active,
        belt: Belt::NoBelt,
        degrees: 0,
        mother: None,
        father: None,
        address: Address::default(),
        schooling: Schooling::default(),
        health_conditions: Vec::new(),
        other_conditions: None,
        enrolled_classes: Vec::new(),
        baptized: false,
        baptism_date: None,
        created_at: now,
        updated_at: now,
        last_modified_by: None,
    }
}

fn sample_students(today: chrono::NaiveDate) -> Vec<Student> {
    let joao = Student {
        id: "1".to_string(),
        enrollment_number: "0001".to_string(),
        full_name: "João Silva".to_string(),
        gender: Gender::Male,
        birthdate: date(2010, 5, 15),
        age: age_on(date(2010, 5, 15), today),
        enrollment_date: date(2023, 1, 10),
        status: StudentStatus::Active,
        belt: Belt::Yellow,
        degrees: 2,
        mother: Some(Guardian {
            name: "Maria Silva".to_string(),
            rg: None,
            cpf: None,
            phone: Some("(11) 99999-9999".to_string()),
        }),
        address: Address {
            street: Some("Rua das Flores".to_string()),
            number: Some("123".to_string()),
            district: Some("Centro".to_string()),
            city: Some("São Paulo".to_string()),
            postal_code: Some("01001-000".to_string()),
        },
        enrolled_classes: vec!["Jiu-jitsu".to_string(), "Reforço Escolar".to_string()],
        baptized: true,
        baptism_date: Some(date(2022, 5, 20)),
        ..base_student(today)
    };

    let ana = Student {
        id: "2".to_string(),
        enrollment_number: "0002".to_string(),
        full_name: "Ana Santos".to_string(),
        gender: Gender::Female,
        birthdate: date(2012, 8, 20),
        age: age_on(date(2012, 8, 20), today),
        enrollment_date: date(2023, 2, 15),
        status: StudentStatus::Active,
        belt: Belt::Grey,
        degrees: 4,
        father: Some(Guardian {
            name: "Carlos Santos".to_string(),
            rg: None,
            cpf: None,
            phone: Some("(11) 88888-8888".to_string()),
        }),
        address: Address {
            street: Some("Av. Paulista".to_string()),
            number: Some("1000".to_string()),
            district: Some("Jardins".to_string()),
            city: Some("São Paulo".to_string()),
            postal_code: Some("01310-100".to_string()),
        },
        health_conditions: vec!["Rinite Alérgica".to_string()],
        enrolled_classes: vec!["Jiu-jitsu".to_string(), "Inglês".to_string()],
        ..base_student(today)
    };

    let pedro = Student {
        id: "3".to_string(),
        enrollment_number: "0003".to_string(),
        full_name: "Pedro Oliveira".to_string(),
        gender: Gender::Male,
        birthdate: date(2008, 3, 10),
        age: age_on(date(2008, 3, 10), today),
        enrollment_date: date(2022, 11, 5),
        status: StudentStatus::Inactive,
        belt: Belt::White,
        degrees: 0,
        address: Address {
            district: Some("Vila Madalena".to_string()),
            city: Some("São Paulo".to_string()),
            ..Address::default()
        },
        enrolled_classes: vec!["Jiu-jitsu".to_string()],
        baptized: true,
        baptism_date: Some(date(2021, 12, 10)),
        ..base_student(today)
    };

    let mariana = Student {
        id: "4".to_string(),
        enrollment_number: "0004".to_string(),
        full_name: "Mariana Costa".to_string(),
        gender: Gender::Female,
        birthdate: date(2014, 6, 12),
        age: age_on(date(2014, 6, 12), today),
        enrollment_date: date(2023, 5, 10),
        status: StudentStatus::Active,
        belt: Belt::NoBelt,
        degrees: 0,
        address: Address {
            district: Some("Moema".to_string()),
            city: Some("São Paulo".to_string()),
            ..Address::default()
        },
        enrolled_classes: vec!["Reforço Escolar".to_string()],
        ..base_student(today)
    };

    vec![joao, ana, pedro, mariana]
}

fn sample_records() -> Vec<EvolutionRecord> {
    let now = Utc::now();
    vec![EvolutionRecord {
        id: "101".to_string(),
        student_id: "1".to_string(),
        date: date(2023, 6, 15),
        description: "Aluno demonstrou grande evolução na técnica de guarda.".to_string(),
        status: StudentStatus::Active,
        kind: EvolutionKind::Progress,
        created_at: now,
        updated_at: now,
    }]
}

fn sample_transactions() -> Vec<FinancialTransaction> {
    let now = Utc::now();
    vec![
        FinancialTransaction {
            id: "t1".to_string(),
            transaction_number: "0001".to_string(),
            issue_date: date(2023, 10, 1),
            entry_date: date(2023, 10, 2),
            company_name: "Kimonos KVRA".to_string(),
            invoice_number: "NF-123456".to_string(),
            total_value: 450.0,
            items: vec![TransactionItem {
                id: "i1".to_string(),
                name: "Kimono Branco A1 (Doação)".to_string(),
                quantity: 1,
                unit_value: 450.0,
                final_value: 450.0,
            }],
            created_at: now,
            updated_at: now,
        },
        FinancialTransaction {
            id: "t2".to_string(),
            transaction_number: "0002".to_string(),
            issue_date: date(2023, 10, 5),
            entry_date: date(2023, 10, 6),
            company_name: "Papelaria Central".to_string(),
            invoice_number: "NF-987654".to_string(),
            total_value: 120.5,
            items: vec![
                TransactionItem {
                    id: "i2".to_string(),
                    name: "Cadernos para Reforço".to_string(),
                    quantity: 10,
                    unit_value: 10.0,
                    final_value: 100.0,
                },
                TransactionItem {
                    id: "i3".to_string(),
                    name: "Canetas".to_string(),
                    quantity: 5,
                    unit_value: 4.1,
                    final_value: 20.5,
                },
            ],
            created_at: now,
            updated_at: now,
        },
    ]
}

fn sample_incomes() -> Vec<FinancialIncome> {
    let now = Utc::now();
    vec![
        FinancialIncome {
            id: "inc1".to_string(),
            date: date(2023, 10, 1),
            amount: 150.0,
            method: PaymentMethod::Pix,
            description: Some("Mensalidade João Silva".to_string()),
            created_at: now,
        },
        FinancialIncome {
            id: "inc2".to_string(),
            date: date(2023, 10, 3),
            amount: 200.0,
            method: PaymentMethod::Cash,
            description: Some("Doação Anônima".to_string()),
            created_at: now,
        },
    ]
}
