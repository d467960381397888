//! # Conversion Engine
//!
//! Pure functions turning the raw input text and a target currency into the
//! string shown on screen. No state, no I/O, no logging.
//!
//! ```text
//! "12.5abc" ──parse_leading_number──▶ Some(12.5)
//!           ──× currency.value──────▶ 0.15
//!           ──format────────────────▶ "$ 0.15"
//! ```
//!
//! Rounding uses the standard library fixed-point formatter: the exact binary
//! value of the product is rounded to two decimals, ties to even.

use std::fmt;

use crate::core::rates::CurrencyRecord;

/// The two ways user input can fail. Neither is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// A currency button was pressed while the input was empty.
    EmptyInputOnSelect,
    /// The input has no parseable leading number.
    InvalidNumericInput,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::EmptyInputOnSelect => write!(f, "Enter a value to convert"),
            ConversionError::InvalidNumericInput => write!(f, "Not a valid number to convert"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Parses the longest numeric prefix of `text`, ignoring whatever follows.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, or the literal `Infinity`.
/// Returns `None` when no prefix is a number.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(bytes.get(exp_start..).unwrap_or_default());
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats an amount with exactly two decimals. Negative zero prints as
/// `0.00`; tiny negatives that round to zero keep their sign.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    if amount.is_infinite() {
        return if amount.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if amount.is_nan() {
        return "NaN".to_string();
    }
    format!("{amount:.2}")
}

/// Converts `raw_input` rupees into `currency` and formats the result as
/// `"<symbol> <amount>"`.
pub fn convert(raw_input: &str, currency: &CurrencyRecord) -> Result<String, ConversionError> {
    let amount = parse_leading_number(raw_input).ok_or(ConversionError::InvalidNumericInput)?;
    let converted = amount * currency.value;
    Ok(format!("{} {}", currency.symbol, format_amount(converted)))
}
