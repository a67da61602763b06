//! Identifier generation.
//!
//! Record identities only need to be unique within one process lifetime, so
//! a prefixed v4 UUID fragment is plenty. Enrollment and transaction numbers
//! are the user-facing 4-digit codes the program has always used.

use rand::Rng;
use uuid::Uuid;

/// Generate a short process-unique record id, e.g. `student::9f8a2c1d04b3`.
pub fn record_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}::{}", prefix, &uuid[..12])
}

/// Generate a random 4-digit number (1000 to 9999) for matrículas and
/// transaction numbers.
pub fn four_digit_number() -> String {
    rand::thread_rng().gen_range(1000..10000).to_string()
}
