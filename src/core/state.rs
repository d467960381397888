//! # Application State
//!
//! Core conversion state. Domain logic only, no TUI types. Presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── rates: RateTable             // immutable currency list
//! ├── raw_input: String            // text as typed
//! ├── target: Option<usize>        // index into `rates`
//! └── result_text: Option<String>  // last successful conversion
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::rates::{CurrencyRecord, RateTable};

/// Longest input the amount field accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 14;

/// Which of the two machine states the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TargetSelected,
}

pub struct App {
    pub rates: RateTable,
    pub raw_input: String,
    /// Position of the selected currency in `rates`.
    pub target: Option<usize>,
    /// Only written by recomputation; stays put when input fails to parse.
    pub result_text: Option<String>,
}

impl App {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            raw_input: String::new(),
            target: None,
            result_text: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.target.is_some() {
            Phase::TargetSelected
        } else {
            Phase::Idle
        }
    }

    pub fn target_currency(&self) -> Option<&CurrencyRecord> {
        self.target.and_then(|i| self.rates.get(i))
    }

    /// True when `name` is the currently selected target.
    pub fn is_target(&self, name: &str) -> bool {
        self.target_currency().is_some_and(|c| c.name == name)
    }
}
