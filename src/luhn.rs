//! Luhn algorithm implementation for account number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! Digits are taken straight from the numeric magnitude, rightmost first, so
//! the checksum never needs a parse step.

use crate::digits::Digits;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// This avoids the branch and division in the inner loop.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates an account number using the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// Zero sums to zero and therefore passes; it is rejected later because it
/// has no digits to classify.
///
/// # Example
///
/// ```
/// use cc_classifier::luhn::validate;
///
/// assert!(validate(4003600000000014));
/// assert!(!validate(4003600000000015));
/// ```
#[inline]
pub fn validate(number: u64) -> bool {
    checksum(number) % 10 == 0
}

/// Computes the Luhn sum of a number (not reduced modulo 10).
///
/// Position 0 is the rightmost digit and is added as is; positions 1, 3, 5
/// and so on are doubled.
#[inline]
pub fn checksum(number: u64) -> u32 {
    let mut sum: u32 = 0;
    for (i, digit) in Digits::new(number).enumerate() {
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }
    sum
}

/// Computes the check digit to append to a partial number.
///
/// Every digit of `partial` moves one place to the left once the check digit
/// is appended, so the doubling starts at its rightmost digit.
///
/// # Example
///
/// ```
/// use cc_classifier::luhn::check_digit;
///
/// // 400360000000001 + 4 = 4003600000000014
/// assert_eq!(check_digit(400360000000001), 4);
/// ```
#[inline]
pub fn check_digit(partial: u64) -> u8 {
    let mut sum: u32 = 0;
    for (i, digit) in Digits::new(partial).enumerate() {
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }
    ((10 - (sum % 10)) % 10) as u8
}

/// Appends the Luhn check digit to a partial number.
///
/// Returns `None` if the result does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use cc_classifier::luhn::{append_check_digit, validate};
///
/// let full = append_check_digit(37828224631000).unwrap();
/// assert_eq!(full, 378282246310005);
/// assert!(validate(full));
/// ```
#[inline]
pub fn append_check_digit(partial: u64) -> Option<u64> {
    partial
        .checked_mul(10)?
        .checked_add(check_digit(partial) as u64)
}
