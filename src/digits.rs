//! Arithmetic digit decomposition for account numbers.
//!
//! Account numbers are held as plain `u64` magnitudes. Everything in this
//! module works by repeated division and remainder by 10, so no textual
//! representation of the number is ever built.

/// Counts the decimal digits of a number.
///
/// Zero has no significant digits, so `count(0) == 0`.
///
/// # Example
///
/// ```
/// use cc_classifier::digits::count;
///
/// assert_eq!(count(0), 0);
/// assert_eq!(count(7), 1);
/// assert_eq!(count(4003600000000014), 16);
/// ```
#[inline]
pub const fn count(number: u64) -> u32 {
    let mut rest = number;
    let mut digits = 0;
    while rest > 0 {
        rest /= 10;
        digits += 1;
    }
    digits
}

/// Returns `10^exp`, or `None` if it does not fit in a `u64`.
#[inline]
pub const fn pow10(exp: u32) -> Option<u64> {
    10u64.checked_pow(exp)
}

/// Extracts the leading `width` digits of a number assumed to be `length`
/// digits long.
///
/// The number is divided by `10^(length - width)`. Positions that the number
/// does not actually have read as zero, so a short number never yields a
/// prefix it does not contain.
///
/// # Example
///
/// ```
/// use cc_classifier::digits::prefix;
///
/// assert_eq!(prefix(378282246310005, 15, 2), 37);
/// assert_eq!(prefix(378282246310005, 15, 1), 3);
/// // A 1-digit number has no second leading digit to read.
/// assert_eq!(prefix(4, 15, 2), 0);
/// // Width larger than the length never reads out of range.
/// assert_eq!(prefix(4, 1, 2), 0);
/// ```
#[inline]
pub const fn prefix(number: u64, length: u32, width: u32) -> u64 {
    if width > length {
        return 0;
    }
    match pow10(length - width) {
        Some(divisor) => number / divisor,
        // 10^20 and beyond exceed every u64
        None => 0,
    }
}

/// Iterator over the decimal digits of a number, rightmost first.
///
/// Yields nothing for zero, matching [`count`].
///
/// # Example
///
/// ```
/// use cc_classifier::digits::Digits;
///
/// let digits: Vec<u8> = Digits::new(1234).collect();
/// assert_eq!(digits, vec![4, 3, 2, 1]);
/// assert_eq!(Digits::new(0).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Digits {
    rest: u64,
}

impl Digits {
    /// Starts iterating over the digits of `number`.
    #[inline]
    pub const fn new(number: u64) -> Self {
        Self { rest: number }
    }
}

impl Iterator for Digits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.rest == 0 {
            return None;
        }
        let digit = (self.rest % 10) as u8;
        self.rest /= 10;
        Some(digit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = count(self.rest) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Digits {}

impl std::iter::FusedIterator for Digits {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(0), 0);
        assert_eq!(count(9), 1);
        assert_eq!(count(10), 2);
        assert_eq!(count(4222222222222), 13);
        assert_eq!(count(378282246310005), 15);
        assert_eq!(count(5555555555554444), 16);
        assert_eq!(count(u64::MAX), 20);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(prefix(5555555555554444, 16, 2), 55);
        assert_eq!(prefix(4222222222222, 13, 1), 4);
        assert_eq!(prefix(4222222222222, 16, 1), 0);
        assert_eq!(prefix(0, 0, 2), 0);
        assert_eq!(prefix(12, 2, 2), 12);
    }

    #[test]
    fn test_prefix_huge_exponent() {
        assert_eq!(prefix(u64::MAX, 25, 2), 0);
        assert_eq!(prefix(u64::MAX, 20, 1), 1);
    }

    #[test]
    fn test_digits_rightmost_first() {
        let digits: Vec<u8> = Digits::new(4003600000000014).collect();
        assert_eq!(digits.len(), 16);
        assert_eq!(digits[0], 4);
        assert_eq!(digits[1], 1);
        assert_eq!(digits[15], 4);
    }

    #[test]
    fn test_digits_exact_size() {
        let digits = Digits::new(378282246310005);
        assert_eq!(digits.len(), 15);
    }

    #[test]
    fn test_digits_interior_zeros() {
        let digits: Vec<u8> = Digits::new(1001).collect();
        assert_eq!(digits, vec![1, 0, 0, 1]);
    }
}
