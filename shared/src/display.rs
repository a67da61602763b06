//! Display formatting helpers.
//!
//! Pure string conversions used by the rendering layer: Brazilian currency,
//! day/month/year dates, and the progressive input masks applied to document
//! and contact fields as the user types. The domain backend never calls
//! these; raw values are stored unformatted.

use chrono::NaiveDate;

/// Kinds of digit-only input masks supported by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// CPF: `000.000.000-00` (11 digits).
    Cpf,
    /// RG: `00.000.000-0` (9 digits).
    Rg,
    /// Mobile phone: `(00) 00000-0000` (11 digits).
    Phone,
    /// CEP postal code: `00000-000` (8 digits).
    Cep,
}

impl MaskKind {
    fn max_digits(self) -> usize {
        match self {
            MaskKind::Cpf => 11,
            MaskKind::Rg => 9,
            MaskKind::Phone => 11,
            MaskKind::Cep => 8,
        }
    }
}

/// Format a value as Brazilian currency, e.g. `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Apply a progressive input mask to a partially typed value.
///
/// Non-digit characters are stripped first, the digit count is capped per
/// mask kind, and separators appear as soon as the corresponding group is
/// complete, so the value stays well-formed while the user is still typing.
pub fn format_masked(value: &str, kind: MaskKind) -> String {
    let mut v: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    v.truncate(kind.max_digits());
    if v.is_empty() {
        return String::new();
    }

    match kind {
        MaskKind::Cpf => match v.len() {
            0..=3 => v,
            4..=6 => format!("{}.{}", &v[..3], &v[3..]),
            7..=9 => format!("{}.{}.{}", &v[..3], &v[3..6], &v[6..]),
            _ => format!("{}.{}.{}-{}", &v[..3], &v[3..6], &v[6..9], &v[9..]),
        },
        MaskKind::Rg => match v.len() {
            0..=2 => v,
            3..=5 => format!("{}.{}", &v[..2], &v[2..]),
            6..=8 => format!("{}.{}.{}", &v[..2], &v[2..5], &v[5..]),
            _ => format!("{}.{}.{}-{}", &v[..2], &v[2..5], &v[5..8], &v[8..]),
        },
        MaskKind::Phone => match v.len() {
            0..=2 => format!("({}", v),
            3..=6 => format!("({}) {}", &v[..2], &v[2..]),
            7..=10 => format!("({}) {}-{}", &v[..2], &v[2..6], &v[6..]),
            _ => format!("({}) {}-{}", &v[..2], &v[2..7], &v[7..]),
        },
        MaskKind::Cep => match v.len() {
            0..=5 => v,
            _ => format!("{}-{}", &v[..5], &v[5..]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(450.0), "R$ 450,00");
        assert_eq!(format_currency(120.5), "R$ 120,50");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(-220.5), "-R$ 220,50");
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
        assert_eq!(format_date(date), "01/10/2023");
    }

    #[test]
    fn test_cpf_mask_progressive() {
        assert_eq!(format_masked("123", MaskKind::Cpf), "123");
        assert_eq!(format_masked("12345", MaskKind::Cpf), "123.45");
        assert_eq!(format_masked("12345678", MaskKind::Cpf), "123.456.78");
        assert_eq!(format_masked("12345678901", MaskKind::Cpf), "123.456.789-01");
        // Excess digits are dropped
        assert_eq!(format_masked("123456789012345", MaskKind::Cpf), "123.456.789-01");
    }

    #[test]
    fn test_rg_mask_progressive() {
        assert_eq!(format_masked("12", MaskKind::Rg), "12");
        assert_eq!(format_masked("1234", MaskKind::Rg), "12.34");
        assert_eq!(format_masked("1234567", MaskKind::Rg), "12.345.67");
        assert_eq!(format_masked("123456789", MaskKind::Rg), "12.345.678-9");
    }

    #[test]
    fn test_phone_mask_progressive() {
        assert_eq!(format_masked("1", MaskKind::Phone), "(1");
        assert_eq!(format_masked("119", MaskKind::Phone), "(11) 9");
        assert_eq!(format_masked("11987654", MaskKind::Phone), "(11) 9876-54");
        assert_eq!(format_masked("11987654321", MaskKind::Phone), "(11) 98765-4321");
    }

    #[test]
    fn test_cep_mask_progressive() {
        assert_eq!(format_masked("01001", MaskKind::Cep), "01001");
        assert_eq!(format_masked("01001000", MaskKind::Cep), "01001-000");
    }

    #[test]
    fn test_masks_strip_non_digits() {
        assert_eq!(format_masked("123.456.789-01", MaskKind::Cpf), "123.456.789-01");
        assert_eq!(format_masked("(11) 98765-4321", MaskKind::Phone), "(11) 98765-4321");
        assert_eq!(format_masked("", MaskKind::Phone), "");
    }
}
