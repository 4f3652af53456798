//! # vatfeld
//!
//! Engine behind a country picker + VAT number form field: a table of
//! per-country VAT number formats, accent-insensitive country search, and
//! validation that tells a number still being typed apart from a wrong one.
//!
//! Everything is synchronous and pure over an immutable [`CountryRegistry`]
//! loaded once at startup. Malformed rules are rejected at load time, so
//! validation itself never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatfeld::{CountryRegistry, ValidationOutcome};
//!
//! let registry = CountryRegistry::reference().unwrap();
//!
//! let hits = registry.search("CROÁCIA");
//! assert_eq!(hits[0].label(), "HR | Croácia");
//!
//! assert_eq!(registry.validate("PT", "12345678").unwrap(), ValidationOutcome::Incomplete);
//! assert_eq!(registry.validate("PT", "249888776").unwrap(), ValidationOutcome::Valid);
//! assert!(matches!(
//!     registry.validate("PT", "24988877X").unwrap(),
//!     ValidationOutcome::Invalid(_)
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rule types, registry, search, validation |
//! | `session` | Form selection state (country + VAT number) |
//! | `json` | Load rule tables from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod registry;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "session")]
pub mod session;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "core")]
pub use crate::registry::{CountryRegistry, SearchView};
