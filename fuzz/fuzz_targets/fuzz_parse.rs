//! Fuzz target for input parsing.
//!
//! Tests that parsing never panics on arbitrary input.

#![no_main]

use cc_classifier::{parse_account_number, validate_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(account) = parse_account_number(data) {
        // Digits-only rendering parses back to the same value
        let again = parse_account_number(&account.value().to_string());
        assert_eq!(again.ok(), Some(account));
    }
    let _ = validate_str(data);
});
