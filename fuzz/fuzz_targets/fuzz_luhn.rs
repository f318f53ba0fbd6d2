//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cc_classifier::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|partial: u64| {
    let check = luhn::check_digit(partial);
    assert!(check <= 9, "Check digit should be 0-9");

    // Adding check digit should make it valid
    if let Some(full) = luhn::append_check_digit(partial) {
        assert!(luhn::validate(full), "Adding check digit should make valid");
        assert_eq!(full % 10, check as u64);
    }
});
