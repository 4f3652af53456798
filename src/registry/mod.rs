//! The country registry: loading, lookup and search.
//!
//! # Example
//!
//! ```rust
//! use vatfeld::registry::{CountryRegistry, SearchView};
//!
//! let registry = CountryRegistry::reference().unwrap();
//!
//! let croatia: Vec<&str> = registry.search("croacia").into_iter().map(|r| r.code()).collect();
//! assert_eq!(croatia, ["HR"]);
//! assert!(matches!(registry.search_view("atlantis"), SearchView::NoResults));
//! ```

mod reference;
mod search;
mod table;

pub use reference::definitions as reference_definitions;
pub use search::SearchView;
pub use table::CountryRegistry;
