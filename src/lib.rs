//! # cc_classifier
//!
//! Credit card number validation and issuer classification.
//!
//! ## Features
//!
//! - Luhn checksum computed directly on the numeric value
//! - Issuer classification for Visa, Mastercard and American Express
//! - A total, pure `validate` function: every number maps to exactly one
//!   [`Classification`], with `INVALID` as the fallback
//! - Interactive prompting, batch and streaming classification
//! - Test number generation and masked display
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_classifier::{validate, Classification};
//!
//! assert_eq!(validate(4003600000000014), Classification::Visa);
//! assert_eq!(validate(378282246310005), Classification::Amex);
//! assert_eq!(validate(5555555555554444), Classification::Mastercard);
//! assert_eq!(validate(1234567890123456), Classification::Invalid);
//!
//! // The label is what gets printed
//! assert_eq!(validate(4222222222222).to_string(), "VISA");
//! ```
//!
//! ## Reading Input
//!
//! ```rust
//! use cc_classifier::{parse_account_number, validate_account, Classification, InputError};
//!
//! let account = parse_account_number("3782 822463 10005").unwrap();
//! assert_eq!(validate_account(&account), Classification::Amex);
//!
//! // Safe for logging - never exposes full number
//! assert_eq!(account.masked(), "****-****-***0005");
//!
//! assert_eq!(parse_account_number("-42").unwrap_err(), InputError::Negative);
//! ```
//!
//! ## Supported Issuers
//!
//! | Issuer | Prefix | Length | Label |
//! |--------|--------|--------|-------|
//! | American Express | 34, 37 | 15 | `AMEX` |
//! | Mastercard | 51-55 | 16 | `MASTERCARD` |
//! | Visa | 4 | 13, 16 | `VISA` |
//!
//! Anything else, and anything failing the Luhn check, is `INVALID`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for results |
//! | `json` | `serde` plus `serde_json` |
//! | `parallel` | Rayon-based batch classification |
//! | `generate` | Random test number generation |
//! | `tracing` | Debug events from the prompter |
//! | `cli` | The `credit` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod digits;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod prompt;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use batch::{BatchValidator, Tally};
pub use card::{AccountNumber, Classification};
pub use error::{InputError, ParseClassificationError};
pub use prompt::Prompter;
pub use validate::{
    is_valid, parse_account_number, passes_luhn, validate, validate_account, validate_str,
};
