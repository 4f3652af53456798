//! Core rule types, load-time errors, and text helpers.
//!
//! A [`RuleDefinition`] is configuration data; [`CountryRule::compile`]
//! turns it into an immutable [`CountryRule`] with a compiled matcher and
//! derived length bounds.

mod countries;
mod error;
mod normalize;
mod pattern;
mod types;

pub use countries::{is_known_country_code, iso_code_for_vat_prefix};
pub use error::*;
pub use normalize::fold_for_search;
pub use pattern::{FormatPattern, LengthBounds};
pub use types::*;
