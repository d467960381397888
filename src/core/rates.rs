//! # Rate Table
//!
//! The static list of currencies the rupee can be converted into.
//! Built once at startup and never mutated afterwards.
//!
//! ```text
//! RateTable
//! └── records: Vec<CurrencyRecord>   // ordered, names unique
//!     ├── name:   "DOLLAR"           // key + button label
//!     ├── symbol: "$"                // prefix of the result
//!     ├── flag:   "🇺🇸"               // button glyph
//!     └── value:  0.012              // 1 ₹ × value = amount
//! ```

use std::fmt;

/// A single currency the user can convert into.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRecord {
    pub name: String,
    pub symbol: String,
    pub flag: String,
    /// Units of this currency per rupee.
    pub value: f64,
}

impl CurrencyRecord {
    pub fn new(name: &str, symbol: &str, flag: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            flag: flag.to_string(),
            value,
        }
    }
}

/// Rates shipped with the binary, relative to one Indian rupee.
const DEFAULT_RATES: &[(&str, &str, &str, f64)] = &[
    ("DOLLAR", "$", "🇺🇸", 0.012271),
    ("EURO", "€", "🇪🇺", 0.011139),
    ("POUND", "£", "🇬🇧", 0.0094885),
    ("RUBEL", "₽", "🇷🇺", 0.85815),
    ("AUS DOLLAR", "A$", "🇦🇺", 0.017),
    ("CAN DOLLAR", "C$", "🇨🇦", 0.016),
    ("YEN", "¥", "🇯🇵", 1.54),
    ("DINAR", "KD", "🇰🇼", 0.0037),
    ("BITCOIN", "₿", "🎰", 0.000000531),
];

#[derive(Debug, Clone, PartialEq)]
pub enum RateTableError {
    DuplicateName(String),
    InvalidValue { name: String, value: f64 },
}

impl fmt::Display for RateTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTableError::DuplicateName(name) => {
                write!(f, "currency '{name}' appears more than once in the rate table")
            }
            RateTableError::InvalidValue { name, value } => {
                write!(f, "currency '{name}' has a non-positive rate: {value}")
            }
        }
    }
}

impl std::error::Error for RateTableError {}

/// Ordered, immutable collection of currencies keyed by name.
#[derive(Debug, Clone)]
pub struct RateTable {
    records: Vec<CurrencyRecord>,
}

impl RateTable {
    /// Builds a table, rejecting duplicate names and rates that are not
    /// finite and strictly positive.
    pub fn new(records: Vec<CurrencyRecord>) -> Result<Self, RateTableError> {
        for (i, record) in records.iter().enumerate() {
            if !record.value.is_finite() || record.value <= 0.0 {
                return Err(RateTableError::InvalidValue {
                    name: record.name.clone(),
                    value: record.value,
                });
            }
            if records[..i].iter().any(|r| r.name == record.name) {
                return Err(RateTableError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CurrencyRecord> {
        self.records.get(index)
    }

    /// Position of the currency called `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn lookup(&self, name: &str) -> Option<&CurrencyRecord> {
        self.position(name).and_then(|i| self.get(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            records: DEFAULT_RATES
                .iter()
                .map(|&(name, symbol, flag, value)| CurrencyRecord::new(name, symbol, flag, value))
                .collect(),
        }
    }
}
