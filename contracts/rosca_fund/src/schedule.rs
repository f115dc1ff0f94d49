use crate::types::{TermUnit, MS_PER_DAY};
use soroban_sdk::Env;

/// Length of one term in days
pub fn unit_days(term_unit: TermUnit) -> u64 {
    match term_unit {
        TermUnit::Weekly => 7,
        TermUnit::Biweekly => 15,
        TermUnit::Monthly => 30,
    }
}

/// Calculate when a term matures
///
/// Formula: expiry = init + term_index × unit_days × 86_400_000
///
/// Example:
/// - init: 2022-07-27T00:00:00Z (1_658_880_000_000 ms)
/// - Monthly, term 1: init + 30 days = 1_661_472_000_000 ms
pub fn term_expiry_timestamp(init_ms: u64, term_unit: TermUnit, term_index: u32) -> u64 {
    let term_ms = unit_days(term_unit) * MS_PER_DAY;
    init_ms.saturating_add(u64::from(term_index).saturating_mul(term_ms))
}

/// Ledger time in milliseconds (the ledger clock ticks in seconds)
pub fn now_millis(env: &Env) -> u64 {
    env.ledger().timestamp().saturating_mul(1000)
}
