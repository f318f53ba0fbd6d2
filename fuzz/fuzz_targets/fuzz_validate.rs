//! Fuzz target for classification.
//!
//! Tests that validate() is total and agrees with its building blocks.

#![no_main]

use cc_classifier::{detect, digits, luhn, validate, Classification};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|number: u64| {
    let classification = validate(number);

    // Pure: same input, same output
    assert_eq!(classification, validate(number));

    if luhn::validate(number) {
        assert_eq!(
            classification,
            detect::detect_issuer(number, digits::count(number))
        );
    } else {
        assert_eq!(classification, Classification::Invalid);
    }

    if classification.is_valid() {
        assert!(classification.is_valid_length(digits::count(number)));
    }
});
