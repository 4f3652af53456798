use thiserror::Error;

/// Errors raised while loading a rule table or looking up a country.
///
/// Every table defect is reported at load time, before a registry exists.
/// Validating a candidate identifier never produces one of these: a
/// non-conforming identifier is a
/// [`ValidationOutcome::Invalid`](super::ValidationOutcome::Invalid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The same country code appears more than once in the table.
    #[error("duplicate country code '{0}'")]
    DuplicateCode(String),

    /// The code is not an assigned ISO 3166-1 alpha-2 code.
    #[error("invalid country code '{0}': expected an ISO 3166-1 alpha-2 code")]
    InvalidCode(String),

    /// The format pattern cannot be used as an identifier rule.
    #[error("invalid format pattern for {code}: {reason}")]
    InvalidPattern {
        /// Country code of the offending rule.
        code: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// The rule's example value is not accepted by the rule itself.
    #[error("example value '{example}' for {code} does not satisfy its own rule")]
    ExampleMismatch {
        /// Country code of the offending rule.
        code: String,
        /// The rejected example value.
        example: String,
    },

    /// A length override in the rule definition is unusable.
    #[error("invalid length override for {code}: {reason}")]
    InvalidLengthOverride {
        /// Country code of the offending rule.
        code: String,
        /// Why the override was rejected.
        reason: String,
    },

    /// No rule is registered for the requested country.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// The rule table configuration could not be parsed.
    #[error("rule table configuration error: {0}")]
    Config(String),
}
