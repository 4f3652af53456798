//! Selection state for a country picker paired with a VAT number field.
//!
//! # Example
//!
//! ```rust
//! use vatfeld::CountryRegistry;
//! use vatfeld::session::Selection;
//!
//! let registry = CountryRegistry::reference().unwrap();
//! let mut form = Selection::new(&registry);
//!
//! form.set_search_text("portu");
//! form.select("PT").unwrap();
//! assert!(form.set_candidate("249888776").unwrap().is_valid());
//!
//! // Typing over the country drops the VAT number too
//! form.set_search_text("PT | Portuga");
//! assert!(form.selected().is_none());
//! assert!(form.outcome().is_none());
//! ```

mod selection;

pub use selection::Selection;
