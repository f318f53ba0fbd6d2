//! Main validation orchestration for account numbers.
//!
//! This module provides the primary `validate` function that combines the
//! Luhn checksum, digit counting and issuer detection into a single total
//! operation, plus the parser that turns user input into an
//! [`AccountNumber`].

use crate::card::{AccountNumber, Classification};
use crate::detect::detect_issuer;
use crate::digits;
use crate::error::InputError;
use crate::luhn;

/// Validates and classifies an account number.
///
/// This is the primary validation function. It performs:
/// 1. Luhn checksum validation (failure short-circuits to `Invalid`)
/// 2. Digit counting
/// 3. Issuer detection by length and prefix
///
/// Every input maps to exactly one classification; this function never
/// fails and never panics.
///
/// # Example
///
/// ```
/// use cc_classifier::{validate, Classification};
///
/// assert_eq!(validate(4003600000000014), Classification::Visa);
/// assert_eq!(validate(378282246310005), Classification::Amex);
/// assert_eq!(validate(5555555555554444), Classification::Mastercard);
/// assert_eq!(validate(1234567890123456), Classification::Invalid);
/// assert_eq!(validate(0), Classification::Invalid);
/// ```
#[inline]
pub fn validate(number: u64) -> Classification {
    if !luhn::validate(number) {
        return Classification::Invalid;
    }

    detect_issuer(number, digits::count(number))
}

/// Validates an [`AccountNumber`].
#[inline]
pub fn validate_account(account: &AccountNumber) -> Classification {
    validate(account.value())
}

/// Returns true if the number classifies as any issuer.
///
/// # Example
///
/// ```
/// use cc_classifier::is_valid;
///
/// assert!(is_valid(4111111111111111));
/// assert!(!is_valid(4111111111111112));
/// ```
#[inline]
pub fn is_valid(number: u64) -> bool {
    validate(number).is_valid()
}

/// Checks the Luhn checksum only, ignoring length and prefix.
///
/// # Example
///
/// ```
/// use cc_classifier::passes_luhn;
///
/// assert!(passes_luhn(79927398713));
/// assert!(!passes_luhn(79927398710));
/// ```
#[inline]
pub fn passes_luhn(number: u64) -> bool {
    luhn::validate(number)
}

/// Parses user input into an account number.
///
/// Surrounding whitespace is ignored and an optional leading `+` is
/// accepted. Spaces, dots and hyphens between digits are treated as
/// separators, so `4003-6000-0000-0014` and `4003 6000 0000 0014` both
/// parse. A `-` before the first digit makes the input negative.
///
/// # Example
///
/// ```
/// use cc_classifier::{parse_account_number, InputError};
///
/// let account = parse_account_number("4003-6000-0000-0014").unwrap();
/// assert_eq!(account.value(), 4003600000000014);
///
/// assert_eq!(parse_account_number("-5").unwrap_err(), InputError::Negative);
/// ```
pub fn parse_account_number(input: &str) -> Result<AccountNumber, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let mut value: u64 = 0;
    let mut count = 0usize;

    for (pos, c) in trimmed.chars().enumerate() {
        match c {
            '0'..='9' => {
                let digit = (c as u8 - b'0') as u64;
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or(InputError::Overflow)?;
                count += 1;
            }
            '-' if count == 0 => {
                return if trimmed.chars().any(|c| c.is_ascii_digit()) {
                    Err(InputError::Negative)
                } else {
                    Err(InputError::NoDigits)
                };
            }
            '+' if pos == 0 => {}
            ' ' | '-' | '.' => {
                // Allowed separators, skip them
            }
            _ => {
                return Err(InputError::InvalidCharacter {
                    position: pos,
                    character: c,
                });
            }
        }
    }

    if count == 0 {
        return Err(InputError::NoDigits);
    }

    Ok(AccountNumber::new(value))
}

/// Parses and validates user input in one step.
///
/// # Example
///
/// ```
/// use cc_classifier::{validate_str, Classification};
///
/// assert_eq!(validate_str("3782 822463 10005"), Ok(Classification::Amex));
/// assert!(validate_str("abc").is_err());
/// ```
pub fn validate_str(input: &str) -> Result<Classification, InputError> {
    let account = parse_account_number(input)?;
    Ok(validate_account(&account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scenarios() {
        assert_eq!(validate(4003600000000014), Classification::Visa);
        assert_eq!(validate(4222222222222), Classification::Visa);
        assert_eq!(validate(378282246310005), Classification::Amex);
        assert_eq!(validate(5555555555554444), Classification::Mastercard);
        assert_eq!(validate(1234567890123456), Classification::Invalid);
        assert_eq!(validate(0), Classification::Invalid);
    }

    #[test]
    fn test_checksum_failure_short_circuits() {
        // Right length and prefix for each issuer, bad check digit
        assert_eq!(validate(4003600000000015), Classification::Invalid);
        assert_eq!(validate(378282246310006), Classification::Invalid);
        assert_eq!(validate(5555555555554445), Classification::Invalid);
    }

    #[test]
    fn test_luhn_valid_but_unknown_issuer() {
        // Discover test number passes Luhn but has no supported prefix
        assert_eq!(validate(6011111111111117), Classification::Invalid);
        // Passes Luhn, too short
        assert_eq!(validate(79927398713), Classification::Invalid);
        // 19-digit Visa passes Luhn, but 19 is not an accepted length
        assert!(passes_luhn(4000000000000000006));
        assert_eq!(validate(4000000000000000006), Classification::Invalid);
    }

    #[test]
    fn test_validate_account() {
        let account = AccountNumber::new(371449635398431);
        assert_eq!(validate_account(&account), Classification::Amex);
    }

    #[test]
    fn test_parse_plain_and_formatted() {
        assert_eq!(
            parse_account_number("4003600000000014").unwrap().value(),
            4003600000000014
        );
        assert_eq!(
            parse_account_number("  4003 6000 0000 0014\n").unwrap().value(),
            4003600000000014
        );
        assert_eq!(
            parse_account_number("4003.6000.0000.0014").unwrap().value(),
            4003600000000014
        );
        assert_eq!(parse_account_number("+42").unwrap().value(), 42);
        assert_eq!(parse_account_number("0").unwrap().value(), 0);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_account_number("-1").unwrap_err(), InputError::Negative);
        assert_eq!(
            parse_account_number(" -4003600000000014").unwrap_err(),
            InputError::Negative
        );
        // A sign after '+' is still a sign, not a separator
        assert_eq!(parse_account_number("+-5").unwrap_err(), InputError::Negative);
        assert_eq!(parse_account_number("+ -5").unwrap_err(), InputError::Negative);
        assert_eq!(parse_account_number("+-").unwrap_err(), InputError::NoDigits);
        // Dashes between digits remain separators
        assert_eq!(parse_account_number("4-2").unwrap().value(), 42);
    }

    #[test]
    fn test_parse_empty_and_separators() {
        assert_eq!(parse_account_number("").unwrap_err(), InputError::Empty);
        assert_eq!(parse_account_number("   ").unwrap_err(), InputError::Empty);
        assert_eq!(parse_account_number("- -").unwrap_err(), InputError::NoDigits);
        assert_eq!(parse_account_number("+").unwrap_err(), InputError::NoDigits);
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = parse_account_number("4003x600").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidCharacter {
                position: 4,
                character: 'x'
            }
        );
        // '+' is only a sign in first position
        assert!(matches!(
            parse_account_number("4+4").unwrap_err(),
            InputError::InvalidCharacter { character: '+', .. }
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_account_number("18446744073709551615").unwrap().value(),
            u64::MAX
        );
        assert_eq!(
            parse_account_number("18446744073709551616").unwrap_err(),
            InputError::Overflow
        );
    }

    #[test]
    fn test_validate_str() {
        assert_eq!(validate_str("5555 5555 5555 4444"), Ok(Classification::Mastercard));
        assert_eq!(validate_str("1234567890123456"), Ok(Classification::Invalid));
        assert_eq!(validate_str("-378282246310005"), Err(InputError::Negative));
    }
}
