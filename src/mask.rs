//! Masking utilities for account numbers.
//!
//! Only the last four digits are ever shown. These helpers back the `Debug`
//! and `Display` impls of [`AccountNumber`], so an account number can be
//! logged or printed without exposing it.

use crate::AccountNumber;

/// Masks an account number showing only the last 4 digits.
///
/// Format: `****-****-****-1234`, with a dash after every fourth mask
/// character. Numbers of four digits or fewer are masked entirely.
///
/// # Example
///
/// ```
/// use cc_classifier::{mask, AccountNumber};
///
/// let account = AccountNumber::new(5555555555554444);
/// assert_eq!(mask::mask_account(&account), "****-****-****-4444");
/// ```
pub fn mask_account(account: &AccountNumber) -> String {
    let len = account.digit_count() as usize;

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Add separator before last 4 if needed
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(&account.last_four());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_16_digits() {
        let account = AccountNumber::new(4003600000000014);
        assert_eq!(mask_account(&account), "****-****-****-0014");
    }

    #[test]
    fn test_mask_15_digits() {
        let account = AccountNumber::new(378282246310005);
        assert_eq!(mask_account(&account), "****-****-***0005");
    }

    #[test]
    fn test_mask_13_digits() {
        let account = AccountNumber::new(4222222222222);
        assert_eq!(mask_account(&account), "****-****-*2222");
    }

    #[test]
    fn test_mask_short_numbers() {
        assert_eq!(mask_account(&AccountNumber::new(1234)), "****");
        assert_eq!(mask_account(&AccountNumber::new(7)), "*");
        assert_eq!(mask_account(&AccountNumber::new(0)), "");
    }

    #[test]
    fn test_mask_never_contains_full_number() {
        let account = AccountNumber::new(5555555555554444);
        let masked = mask_account(&account);
        assert!(!masked.contains("5555555555554444"));
        assert!(masked.ends_with("4444"));
    }
}
