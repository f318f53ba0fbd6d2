//! Error types for the input side of classification.
//!
//! Classification itself never fails: a bad card number is reported as
//! `Classification::Invalid`. The errors here belong to the code that turns
//! user input into an account number, and to label parsing.

use std::fmt;

/// Errors that can occur while reading an account number from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input string was empty.
    Empty,

    /// The input contains only whitespace or separators.
    NoDigits,

    /// The input is a negative number.
    Negative,

    /// An invalid character was found in the input.
    ///
    /// Only digits (0-9), spaces, dots and hyphens are allowed.
    InvalidCharacter {
        /// The position in the trimmed input (0-indexed, in characters).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The number does not fit in an unsigned 64-bit integer.
    Overflow,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "account number is empty"),

            Self::NoDigits => write!(f, "account number contains no digits"),

            Self::Negative => write!(f, "account number must not be negative"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, dots, and hyphens allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::Overflow => {
                write!(f, "account number too large: maximum is {}", u64::MAX)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Error returned when a string is not one of the classification labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClassificationError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl fmt::Display for ParseClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown classification '{}' (expected VISA, MASTERCARD, AMEX, or INVALID)",
            self.input
        )
    }
}

impl std::error::Error for ParseClassificationError {}
