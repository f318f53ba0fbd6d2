//! Issuer detection from digit count and leading digits.
//!
//! Each issuer is identified by the total number of digits together with
//! its one- or two-digit prefix. The rules are disjoint, but they are still
//! matched in a fixed order (Amex, Mastercard, Visa) so the result never
//! depends on anything but the number.

use crate::digits;
use crate::Classification;

/// Classifies a number by length and prefix alone, without the checksum.
///
/// `digit_count` must be the digit count of `number` (see
/// [`digits::count`]). Leading digits are read by dividing by a power of
/// ten, so a number shorter than the prefix reads as 0 and matches nothing.
///
/// # Example
///
/// ```
/// use cc_classifier::detect::detect_issuer;
/// use cc_classifier::Classification;
///
/// assert_eq!(detect_issuer(378282246310005, 15), Classification::Amex);
/// assert_eq!(detect_issuer(5555555555554444, 16), Classification::Mastercard);
/// assert_eq!(detect_issuer(4222222222222, 13), Classification::Visa);
/// assert_eq!(detect_issuer(0, 0), Classification::Invalid);
/// ```
#[inline]
pub fn detect_issuer(number: u64, digit_count: u32) -> Classification {
    let leading = digits::prefix(number, digit_count, 2);

    match (digit_count, leading) {
        // American Express: 34 or 37, 15 digits
        (15, 34 | 37) => Classification::Amex,

        // Mastercard: 51-55, 16 digits
        (16, 51..=55) => Classification::Mastercard,

        // Visa: leading 4, 13 or 16 digits
        (13 | 16, 40..=49) => Classification::Visa,

        _ => Classification::Invalid,
    }
}

/// Returns true if `number` has the length and prefix of an Amex card.
#[inline]
pub fn is_amex(number: u64, digit_count: u32) -> bool {
    detect_issuer(number, digit_count) == Classification::Amex
}

/// Returns true if `number` has the length and prefix of a Mastercard.
#[inline]
pub fn is_mastercard(number: u64, digit_count: u32) -> bool {
    detect_issuer(number, digit_count) == Classification::Mastercard
}

/// Returns true if `number` has the length and prefix of a Visa card.
#[inline]
pub fn is_visa(number: u64, digit_count: u32) -> bool {
    detect_issuer(number, digit_count) == Classification::Visa
}
