//! # Notifications
//!
//! The messages the core hands to whatever sink the adapter provides.
//! A notification is text plus two colours; how long it stays up is the
//! sink's business.

use crate::core::convert::ConversionError;

/// A plain RGB colour, free of any UI toolkit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl From<ConversionError> for Notification {
    fn from(error: ConversionError) -> Self {
        let background = match error {
            ConversionError::EmptyInputOnSelect => Rgb(0xEA, 0x77, 0x73),
            ConversionError::InvalidNumericInput => Rgb(0xF4, 0xB2, 0xEC),
        };
        Self {
            text: error.to_string(),
            background,
            foreground: Rgb::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_notification() {
        let n = Notification::from(ConversionError::EmptyInputOnSelect);
        assert_eq!(n.text, "Enter a value to convert");
        assert_eq!(n.background, Rgb(0xEA, 0x77, 0x73));
        assert_eq!(n.foreground, Rgb::BLACK);
    }

    #[test]
    fn test_invalid_number_notification() {
        let n = Notification::from(ConversionError::InvalidNumericInput);
        assert_eq!(n.text, "Not a valid number to convert");
        assert_eq!(n.background, Rgb(0xF4, 0xB2, 0xEC));
    }
}
