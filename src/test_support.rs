//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::rates::{CurrencyRecord, RateTable};
use crate::core::state::App;

/// A small table with easy-to-check rates.
pub fn test_rates() -> RateTable {
    RateTable::new(vec![
        CurrencyRecord::new("dollar", "$", "🇺🇸", 0.012),
        CurrencyRecord::new("euro", "€", "🇪🇺", 0.011),
        CurrencyRecord::new("yen", "¥", "🇯🇵", 1.5),
    ])
    .expect("test rates are valid")
}

/// Creates a fresh App over `test_rates()`.
pub fn test_app() -> App {
    App::new(test_rates())
}
