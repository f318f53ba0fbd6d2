//! Streaming classification for numbers as they arrive.
//!
//! This module provides iterator adapters for classifying account numbers
//! one at a time, useful for processing large files or standard input
//! without loading everything into memory.
//!
//! # Example
//!
//! ```
//! use cc_classifier::stream::ValidateExt;
//!
//! let numbers: Vec<u64> = vec![4003600000000014, 5555555555554444, 42];
//! let valid_count = numbers
//!     .into_iter()
//!     .validate_numbers()
//!     .filter(|c| c.is_valid())
//!     .count();
//!
//! assert_eq!(valid_count, 2);
//! ```

use crate::validate::{validate, validate_str};
use crate::{Classification, InputError};

/// A streaming validator that wraps an iterator of account numbers.
///
/// This struct is created by the `validate_numbers` method on iterators.
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
}

impl<I> ValidateStream<I> {
    /// Creates a new ValidateStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for ValidateStream<I>
where
    I: Iterator<Item = u64>,
{
    type Item = Classification;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(validate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for ValidateStream<I> where I: ExactSizeIterator<Item = u64> {}

impl<I> DoubleEndedIterator for ValidateStream<I>
where
    I: DoubleEndedIterator<Item = u64>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(validate)
    }
}

/// A streaming validator that only yields valid numbers, paired with their
/// classification.
///
/// Invalid numbers are silently skipped.
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: I,
}

impl<I> ValidOnlyStream<I> {
    /// Creates a new ValidOnlyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = u64>,
{
    type Item = (u64, Classification);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for number in self.inner.by_ref() {
            let classification = validate(number);
            if classification.is_valid() {
                return Some((number, classification));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper) // Lower bound is 0 since all might be invalid
    }
}

/// A streaming parser and validator over lines of text.
///
/// Each item is parsed with [`parse_account_number`] and then classified.
/// Blank items are skipped.
///
/// [`parse_account_number`]: crate::parse_account_number
#[derive(Debug, Clone)]
pub struct LinesStream<I> {
    inner: I,
    index: usize,
}

impl<I> LinesStream<I> {
    /// Creates a new LinesStream.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, index: 0 }
    }
}

impl<I, S> Iterator for LinesStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Zero-based index of the item in the underlying iterator, and its
    /// result.
    type Item = (usize, Result<Classification, InputError>);

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.inner.by_ref() {
            let index = self.index;
            self.index += 1;
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            return Some((index, validate_str(line)));
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension trait for adding classification to any iterator.
///
/// Implemented for every iterator; the adapters are usable when the items
/// are `u64` (`validate_numbers`, `validate_valid_only`) or string-like
/// (`validate_lines`).
pub trait ValidateExt: Iterator + Sized {
    /// Classifies each number yielded by the iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_classifier::stream::ValidateExt;
    /// use cc_classifier::Classification;
    ///
    /// let numbers: [u64; 2] = [378282246310005, 0];
    /// let results: Vec<_> = numbers.into_iter().validate_numbers().collect();
    /// assert_eq!(results, vec![Classification::Amex, Classification::Invalid]);
    /// ```
    fn validate_numbers(self) -> ValidateStream<Self>;

    /// Yields only numbers that classify as an issuer.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_classifier::stream::ValidateExt;
    ///
    /// let numbers: [u64; 3] = [4003600000000014, 1, 5555555555554444];
    /// let valid: Vec<_> = numbers.into_iter().validate_valid_only().collect();
    /// assert_eq!(valid.len(), 2);
    /// ```
    fn validate_valid_only(self) -> ValidOnlyStream<Self>;

    /// Parses and classifies each line of text, skipping blank lines.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_classifier::stream::ValidateExt;
    /// use cc_classifier::Classification;
    ///
    /// let input = "4003600000000014\n\nnope\n";
    /// let results: Vec<_> = input.lines().validate_lines().collect();
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0], (0, Ok(Classification::Visa)));
    /// assert_eq!(results[1].0, 2);
    /// assert!(results[1].1.is_err());
    /// ```
    fn validate_lines(self) -> LinesStream<Self>;
}

impl<I: Iterator + Sized> ValidateExt for I {
    #[inline]
    fn validate_numbers(self) -> ValidateStream<Self> {
        ValidateStream::new(self)
    }

    #[inline]
    fn validate_valid_only(self) -> ValidOnlyStream<Self> {
        ValidOnlyStream::new(self)
    }

    #[inline]
    fn validate_lines(self) -> LinesStream<Self> {
        LinesStream::new(self)
    }
}
