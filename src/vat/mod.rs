//! VAT number validation against per-country rules.
//!
//! Validation is a pure function of a [`CountryRule`](crate::core::CountryRule)
//! and the text typed so far. It distinguishes input that is still being
//! typed from input that is wrong, so a form can stay quiet mid-keystroke.
//!
//! # Example
//!
//! ```rust
//! use vatfeld::CountryRegistry;
//! use vatfeld::vat::validate;
//!
//! let registry = CountryRegistry::reference().unwrap();
//! let austria = registry.get("AT").unwrap();
//!
//! assert!(validate(austria, "U1234567").is_incomplete());
//! assert!(validate(austria, "u12345678").is_valid());
//! assert!(validate(austria, "X12345678").message().is_some());
//! ```

mod format;

pub use format::{LETTERS_AND_DIGITS_ONLY, validate};
