//! Batch processing for classifying many account numbers.
//!
//! This module provides batch classification of multiple numbers, with
//! optional parallel processing using rayon. Since `validate` is pure, the
//! parallel variants return exactly what the sequential ones do.

use std::ops::AddAssign;

use crate::validate::{validate, validate_str};
use crate::{Classification, InputError};

/// Per-classification counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Numbers classified as Visa.
    pub visa: usize,
    /// Numbers classified as Mastercard.
    pub mastercard: usize,
    /// Numbers classified as American Express.
    pub amex: usize,
    /// Numbers classified as invalid.
    pub invalid: usize,
}

impl Tally {
    /// Counts one classification.
    #[inline]
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Visa => self.visa += 1,
            Classification::Mastercard => self.mastercard += 1,
            Classification::Amex => self.amex += 1,
            Classification::Invalid => self.invalid += 1,
        }
    }

    /// Returns the count for one classification.
    #[inline]
    pub const fn get(&self, classification: Classification) -> usize {
        match classification {
            Classification::Visa => self.visa,
            Classification::Mastercard => self.mastercard,
            Classification::Amex => self.amex,
            Classification::Invalid => self.invalid,
        }
    }

    /// Returns the number of valid (non-`Invalid`) results.
    #[inline]
    pub const fn valid(&self) -> usize {
        self.visa + self.mastercard + self.amex
    }

    /// Returns the total number of results counted.
    #[inline]
    pub const fn total(&self) -> usize {
        self.valid() + self.invalid
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.visa += other.visa;
        self.mastercard += other.mastercard;
        self.amex += other.amex;
        self.invalid += other.invalid;
    }
}

impl FromIterator<Classification> for Tally {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for classification in iter {
            tally.record(classification);
        }
        tally
    }
}

/// Batch validator for classifying many account numbers.
///
/// # Example
///
/// ```
/// use cc_classifier::{BatchValidator, Classification};
///
/// let mut batch = BatchValidator::new();
/// let numbers: [u64; 3] = [4003600000000014, 378282246310005, 1234567890123456];
/// let results = batch.validate_all(&numbers);
///
/// assert_eq!(
///     results,
///     vec![Classification::Visa, Classification::Amex, Classification::Invalid]
/// );
/// ```
#[derive(Debug, Default)]
pub struct BatchValidator {
    tally: Tally,
}

impl BatchValidator {
    /// Creates a new batch validator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the running tally of every number this validator has
    /// classified.
    #[inline]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Classifies a batch of numbers.
    ///
    /// Returns a vector of results in the same order as the input.
    pub fn validate_all(&mut self, numbers: &[u64]) -> Vec<Classification> {
        let results = validate_batch(numbers);
        self.tally += results.iter().copied().collect::<Tally>();
        results
    }

    /// Classifies a batch and returns the index and classification of each
    /// valid number.
    pub fn validate_valid_only(&mut self, numbers: &[u64]) -> Vec<(usize, Classification)> {
        self.validate_all(numbers)
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.is_valid())
            .collect()
    }

    /// Parses and classifies textual inputs, partitioning them into
    /// classifications and input errors.
    ///
    /// Returns `(classified, errors)`, both tagged with the input index.
    pub fn validate_partitioned<S: AsRef<str>>(
        &mut self,
        inputs: &[S],
    ) -> (Vec<(usize, Classification)>, Vec<(usize, InputError)>) {
        let mut classified = Vec::new();
        let mut errors = Vec::new();

        for (i, input) in inputs.iter().enumerate() {
            match validate_str(input.as_ref()) {
                Ok(c) => {
                    self.tally.record(c);
                    classified.push((i, c));
                }
                Err(e) => errors.push((i, e)),
            }
        }

        (classified, errors)
    }

    /// Classifies numbers in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel(&mut self, numbers: &[u64]) -> Vec<Classification> {
        let results = validate_batch_parallel(numbers);
        self.tally += results.iter().copied().collect::<Tally>();
        results
    }
}

/// Classifies a slice of numbers without creating a BatchValidator.
///
/// # Example
///
/// ```
/// use cc_classifier::batch::validate_batch;
/// use cc_classifier::Classification;
///
/// let results = validate_batch(&[5555555555554444, 0]);
/// assert_eq!(results, vec![Classification::Mastercard, Classification::Invalid]);
/// ```
#[inline]
pub fn validate_batch(numbers: &[u64]) -> Vec<Classification> {
    numbers.iter().map(|&n| validate(n)).collect()
}

/// Classifies a slice of numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel(numbers: &[u64]) -> Vec<Classification> {
    use rayon::prelude::*;
    numbers.par_iter().map(|&n| validate(n)).collect()
}

/// Counts classifications in a batch without allocating results.
///
/// # Example
///
/// ```
/// use cc_classifier::batch::tally;
///
/// let counts = tally(&[4003600000000014, 4222222222222, 1234567890123456]);
/// assert_eq!(counts.visa, 2);
/// assert_eq!(counts.invalid, 1);
/// assert_eq!(counts.total(), 3);
/// ```
#[inline]
pub fn tally(numbers: &[u64]) -> Tally {
    numbers.iter().map(|&n| validate(n)).collect()
}

/// Counts classifications in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn tally_parallel(numbers: &[u64]) -> Tally {
    use rayon::prelude::*;

    numbers
        .par_iter()
        .fold(Tally::default, |mut acc, &n| {
            acc.record(validate(n));
            acc
        })
        .reduce(Tally::default, |mut a, b| {
            a += b;
            a
        })
}
