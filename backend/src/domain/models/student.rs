//! Domain model for a student and the enums describing their progression.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered belt ranks, from no belt through black belt.
///
/// The declaration order is the promotion order; `PartialOrd`/`Ord` follow it.
/// Serialized labels match the Portuguese names used on stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Belt {
    #[serde(rename = "Sem Faixa")]
    NoBelt,
    #[serde(rename = "Branca")]
    White,
    #[serde(rename = "Cinza")]
    Grey,
    #[serde(rename = "Amarela")]
    Yellow,
    #[serde(rename = "Laranja")]
    Orange,
    #[serde(rename = "Verde")]
    Green,
    #[serde(rename = "Azul")]
    Blue,
    #[serde(rename = "Roxa")]
    Purple,
    #[serde(rename = "Marrom")]
    Brown,
    #[serde(rename = "Preta")]
    Black,
}

impl Belt {
    /// All belts in promotion order.
    pub const ALL: [Belt; 10] = [
        Belt::NoBelt,
        Belt::White,
        Belt::Grey,
        Belt::Yellow,
        Belt::Orange,
        Belt::Green,
        Belt::Blue,
        Belt::Purple,
        Belt::Brown,
        Belt::Black,
    ];

    /// Maximum degree count within a belt.
    pub const MAX_DEGREES: u8 = 4;

    pub fn label(self) -> &'static str {
        match self {
            Belt::NoBelt => "Sem Faixa",
            Belt::White => "Branca",
            Belt::Grey => "Cinza",
            Belt::Yellow => "Amarela",
            Belt::Orange => "Laranja",
            Belt::Green => "Verde",
            Belt::Blue => "Azul",
            Belt::Purple => "Roxa",
            Belt::Brown => "Marrom",
            Belt::Black => "Preta",
        }
    }

    /// Position in the promotion order (0 = no belt).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Student lifecycle status. The only transition with a side effect is
/// Active → Inactive, which the services document on the evolution timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
}

impl StudentStatus {
    pub fn label(self) -> &'static str {
        match self {
            StudentStatus::Active => "Ativo",
            StudentStatus::Inactive => "Inativo",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact block for a parent or guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    pub name: String,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
}

/// Address block. Every field is optional; enrollment forms often arrive
/// with only the district and city filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Schooling block for the education side of the program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schooling {
    pub education_level: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub shift: Option<String>,
}

/// A student enrolled in the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    /// 4-digit matrícula, assigned once at creation and never changed.
    pub enrollment_number: String,
    pub full_name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    /// Whole years, recomputed from `birthdate` on every save.
    pub age: u32,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
    pub belt: Belt,
    /// Degrees within the current belt (0..=4). Only meaningful when the
    /// student holds a belt; see [`Student::displayed_degrees`].
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_modified_by: Option<String>,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }

    /// Degree count for display. Suppressed while the student has no belt.
    pub fn displayed_degrees(&self) -> Option<u8> {
        (self.belt != Belt::NoBelt).then_some(self.degrees)
    }
}

/// Age in whole years on a given day, calendar-aware: the year difference is
/// reduced by one when the birthday has not yet been reached in `today`'s
/// year.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_belt_order() {
        assert!(Belt::NoBelt < Belt::White);
        assert!(Belt::Blue < Belt::Black);
        assert_eq!(Belt::NoBelt.rank(), 0);
        assert_eq!(Belt::Black.rank(), 9);
        assert_eq!(Belt::ALL.len(), 10);
    }

    #[test]
    fn test_belt_labels_round_trip_through_serde() {
        for belt in Belt::ALL {
            let json = serde_json::to_string(&belt).unwrap();
            assert_eq!(json, format!("\"{}\"", belt.label()));
            let back: Belt = serde_json::from_str(&json).unwrap();
            assert_eq!(back, belt);
        }
    }

    #[test]
    fn test_age_on_birthday_not_yet_reached() {
        // Birthday is tomorrow: still one year younger than the naive
        // year difference.
        assert_eq!(age_on(date(2010, 3, 2), date(2024, 3, 1)), 13);
        // Birthday is today: already turned.
        assert_eq!(age_on(date(2010, 3, 1), date(2024, 3, 1)), 14);
        // Birthday already passed this year.
        assert_eq!(age_on(date(2010, 2, 28), date(2024, 3, 1)), 14);
    }

    #[test]
    fn test_age_on_same_year() {
        assert_eq!(age_on(date(2024, 1, 10), date(2024, 6, 1)), 0);
    }
}
