//! Account number generation for testing purposes.
//!
//! This module generates numbers that pass the Luhn check and classify as
//! the requested issuer. They are intended for testing only and are not
//! real card numbers.
//!
//! # Example
//!
//! ```
//! use cc_classifier::generate::{generate_deterministic, CardGenerator};
//! use cc_classifier::{validate, Classification};
//!
//! // Generate a deterministic Visa number (no randomness required)
//! let number = generate_deterministic(Classification::Visa).unwrap();
//! assert_eq!(validate(number), Classification::Visa);
//!
//! // Use builder pattern
//! let number = CardGenerator::new(Classification::Visa)
//!     .length(13)
//!     .generate_deterministic()
//!     .unwrap();
//! assert_eq!(number, 4000000000006);
//! ```

use crate::digits;
use crate::luhn;
use crate::Classification;

#[cfg(feature = "generate")]
use rand::Rng;

/// Longest number that can be generated; every 19-digit number fits in a
/// `u64`.
pub const MAX_GENERATED_DIGITS: u32 = 19;

/// Returns the default prefix for an issuer, or `None` for `Invalid`.
pub const fn prefix_for(issuer: Classification) -> Option<u64> {
    match issuer {
        Classification::Visa => Some(4),
        Classification::Mastercard => Some(51),
        Classification::Amex => Some(34),
        Classification::Invalid => None,
    }
}

/// Returns the default length for an issuer, or `None` for `Invalid`.
pub const fn default_length(issuer: Classification) -> Option<u32> {
    match issuer {
        Classification::Visa => Some(16),
        Classification::Mastercard => Some(16),
        Classification::Amex => Some(15),
        Classification::Invalid => None,
    }
}

/// Generates a number deterministically (no randomness).
///
/// Returns `None` for `Classification::Invalid`.
///
/// # Example
///
/// ```
/// use cc_classifier::generate::generate_deterministic;
/// use cc_classifier::Classification;
///
/// assert_eq!(generate_deterministic(Classification::Amex), Some(340000000000009));
/// assert_eq!(generate_deterministic(Classification::Invalid), None);
/// ```
pub fn generate_deterministic(issuer: Classification) -> Option<u64> {
    generate_deterministic_with_prefix(prefix_for(issuer)?, default_length(issuer)?)
}

/// Generates a number deterministically with a custom prefix.
///
/// Fills the middle digits with zeros and appends a valid check digit.
/// Returns `None` if the prefix does not leave room for a check digit or
/// `length` exceeds [`MAX_GENERATED_DIGITS`].
pub fn generate_deterministic_with_prefix(prefix: u64, length: u32) -> Option<u64> {
    let fill = fill_width(prefix, length)?;
    let body = prefix.checked_mul(digits::pow10(fill)?)?;
    luhn::append_check_digit(body)
}

/// Number of digits between the prefix and the check digit.
fn fill_width(prefix: u64, length: u32) -> Option<u32> {
    if length > MAX_GENERATED_DIGITS {
        return None;
    }
    let prefix_len = digits::count(prefix);
    if prefix_len == 0 || prefix_len >= length {
        return None;
    }
    Some(length - prefix_len - 1)
}

/// Generates a random number for the given issuer.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cc_classifier::generate::generate;
/// use cc_classifier::{validate, Classification};
///
/// let number = generate(Classification::Mastercard).unwrap();
/// assert_eq!(validate(number), Classification::Mastercard);
/// ```
#[cfg(feature = "generate")]
pub fn generate(issuer: Classification) -> Option<u64> {
    let mut rng = rand::thread_rng();
    generate_with_rng(prefix_for(issuer)?, default_length(issuer)?, &mut rng)
}

/// Generates a random number with the given prefix and length.
///
/// This is useful for reproducible test generation with seeded RNGs.
/// Returns `None` under the same conditions as
/// [`generate_deterministic_with_prefix`].
#[cfg(feature = "generate")]
pub fn generate_with_rng<R: Rng>(prefix: u64, length: u32, rng: &mut R) -> Option<u64> {
    let fill = fill_width(prefix, length)?;

    let mut body = prefix;
    for _ in 0..fill {
        body = body * 10 + rng.gen_range(0..10u64);
    }

    luhn::append_check_digit(body)
}

/// Generates multiple random numbers for the given issuer.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_many(issuer: Classification, count: usize) -> Vec<u64> {
    (0..count).filter_map(|_| generate(issuer)).collect()
}

/// Generator builder for custom prefixes and lengths.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: u64,
    length: u32,
}

impl CardGenerator {
    /// Creates a generator with the issuer's default prefix and length.
    ///
    /// `Classification::Invalid` has neither, so it produces a generator
    /// whose output is always `None`.
    pub fn new(issuer: Classification) -> Self {
        Self {
            prefix: prefix_for(issuer).unwrap_or(0),
            length: default_length(issuer).unwrap_or(0),
        }
    }

    /// Creates a generator with a custom prefix and a length of 16.
    pub fn with_prefix(prefix: u64) -> Self {
        Self { prefix, length: 16 }
    }

    /// Sets the total length.
    pub fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Generates a number deterministically.
    pub fn generate_deterministic(&self) -> Option<u64> {
        generate_deterministic_with_prefix(self.prefix, self.length)
    }

    /// Generates a random number.
    ///
    /// Requires the `generate` feature.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> Option<u64> {
        let mut rng = rand::thread_rng();
        generate_with_rng(self.prefix, self.length, &mut rng)
    }

    /// Generates a random number using a provided RNG.
    ///
    /// Requires the `generate` feature.
    #[cfg(feature = "generate")]
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Option<u64> {
        generate_with_rng(self.prefix, self.length, rng)
    }
}
