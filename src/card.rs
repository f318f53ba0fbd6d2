//! Core types: the classification result and the account number it is
//! computed from.
//!
//! This module provides the `Classification` enum naming the issuer network
//! (or `Invalid`) and the `AccountNumber` newtype holding the number itself.

use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

use crate::digits;
use crate::error::ParseClassificationError;

/// Result of validating an account number.
///
/// Exactly one variant is produced per input. `Invalid` is a regular result,
/// not an error: it covers checksum failures as well as numbers whose length
/// and prefix match no issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Classification {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Not a valid card number for any supported issuer.
    Invalid,
}

impl Classification {
    /// Every classification, in label order.
    pub const ALL: [Classification; 4] = [
        Classification::Visa,
        Classification::Mastercard,
        Classification::Amex,
        Classification::Invalid,
    ];

    /// The issuer classifications, in the order they are checked.
    pub const ISSUERS: [Classification; 3] = [
        Classification::Amex,
        Classification::Mastercard,
        Classification::Visa,
    ];

    /// Returns the printed label: `VISA`, `MASTERCARD`, `AMEX` or `INVALID`.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Amex => "AMEX",
            Self::Invalid => "INVALID",
        }
    }

    /// Returns a human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Invalid => "Invalid",
        }
    }

    /// Returns true for every classification except `Invalid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns the digit counts accepted for this issuer.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u32] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Invalid => &[],
        }
    }

    /// Returns true if the given digit count is valid for this issuer.
    #[inline]
    pub const fn is_valid_length(&self, length: u32) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] == length {
                return true;
            }
            i += 1;
        }
        false
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    /// Parses a label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseClassificationError {
                input: trimmed.to_string(),
            })
    }
}

/// An account number with secure memory handling.
///
/// The value is zeroed when the struct is dropped, and neither `Debug` nor
/// `Display` prints it in full.
///
/// # Example
///
/// ```
/// use cc_classifier::AccountNumber;
///
/// let account = AccountNumber::new(4003600000000014);
/// assert_eq!(account.digit_count(), 16);
/// assert_eq!(account.leading_digits(2), 40);
/// assert_eq!(account.masked(), "****-****-****-0014");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct AccountNumber {
    value: u64,
}

impl AccountNumber {
    /// Wraps a non-negative account number.
    #[inline]
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the raw number.
    ///
    /// # Security Warning
    ///
    /// This exposes the full account number. Never log the result; use
    /// `masked()` for display.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the number of decimal digits (0 for the number 0).
    #[inline]
    pub fn digit_count(&self) -> u32 {
        digits::count(self.value)
    }

    /// Returns the leading `width` digits, computed arithmetically.
    ///
    /// Yields 0 when the number has fewer than `width` digits.
    #[inline]
    pub fn leading_digits(&self, width: u32) -> u64 {
        digits::prefix(self.value, self.digit_count(), width)
    }

    /// Returns the last four digits as a string.
    ///
    /// Numbers shorter than four digits are returned whole.
    pub fn last_four(&self) -> String {
        if self.digit_count() >= 4 {
            format!("{:04}", self.value % 10_000)
        } else {
            self.value.to_string()
        }
    }

    /// Returns the number masked for safe display.
    ///
    /// Format: `****-****-****-1234` (shows only the last 4 digits).
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_account(self)
    }
}

impl From<u64> for AccountNumber {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountNumber")
            .field("number", &self.masked())
            .field("digits", &self.digit_count())
            .finish()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Drop for AccountNumber {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
