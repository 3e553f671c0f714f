//! Project id generation.
//!
//! Ids are the creation time in base-36 milliseconds followed by a random
//! base-36 suffix. Uniqueness is best-effort: no collision check is made
//! against existing records.

use rand::Rng;

use crate::types::{ProjectId, Timestamp};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random base-36 characters appended to the timestamp prefix.
pub const RANDOM_SUFFIX_LENGTH: usize = 11;

/// Render an unsigned integer in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generate a fresh project id for a record created at `created_at`.
pub fn generate_project_id(created_at: Timestamp) -> ProjectId {
    let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
    let mut rng = rand::rng();
    let suffix: String = (0..RANDOM_SUFFIX_LENGTH)
        .map(|_| BASE36_DIGITS[rng.random_range(0..BASE36_DIGITS.len())] as char)
        .collect();
    format!("{}{suffix}", to_base36(millis))
}
