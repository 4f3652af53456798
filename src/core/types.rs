use std::fmt;

use serde::{Deserialize, Serialize};

use super::countries::is_known_country_code;
use super::error::RegistryError;
use super::normalize::fold_for_search;
use super::pattern::{FormatPattern, LengthBounds};

/// One row of a rule table, as written in configuration.
///
/// The optional fields override what the validator would otherwise derive
/// from `format_pattern`: `min_len`/`max_len` replace the derived length
/// bounds and `message` replaces `format_description` as the text shown
/// when a candidate does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// ISO 3166-1 alpha-2 code (e.g. "PT").
    pub code: String,
    /// Human-readable country name, may contain accents.
    pub display_name: String,
    /// Regular-expression body describing a whole identifier.
    pub format_pattern: String,
    /// Identifier satisfying the rule, shown as an input hint.
    pub example_value: String,
    /// Natural-language description of the format.
    pub format_description: String,
    /// Override for the derived minimum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    /// Override for the derived maximum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    /// Custom mismatch message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleDefinition {
    /// Create a definition without overrides.
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        format_pattern: impl Into<String>,
        example_value: impl Into<String>,
        format_description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            format_pattern: format_pattern.into(),
            example_value: example_value.into(),
            format_description: format_description.into(),
            min_len: None,
            max_len: None,
            message: None,
        }
    }

    /// Override the minimum length.
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Override the maximum length.
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Set a custom mismatch message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A compiled, immutable country rule.
///
/// Built from a [`RuleDefinition`] by [`CountryRule::compile`], which
/// rejects malformed definitions so that validation never has to.
#[derive(Debug, Clone)]
pub struct CountryRule {
    code: String,
    display_name: String,
    pattern: FormatPattern,
    example_value: String,
    format_description: String,
    message: Option<String>,
    bounds: LengthBounds,
    folded_code: String,
    folded_name: String,
}

impl CountryRule {
    /// Compile a definition into a rule.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidCode`] if `code` is not an upper-case ISO
    ///   3166-1 alpha-2 code
    /// - [`RegistryError::InvalidPattern`] if the pattern is unusable
    /// - [`RegistryError::InvalidLengthOverride`] if overrides are contradictory
    /// - [`RegistryError::ExampleMismatch`] if `example_value` is not `Valid`
    pub fn compile(def: RuleDefinition) -> Result<Self, RegistryError> {
        if !is_known_country_code(&def.code) {
            return Err(RegistryError::InvalidCode(def.code));
        }

        let pattern =
            FormatPattern::compile(&def.format_pattern).map_err(|reason| {
                RegistryError::InvalidPattern {
                    code: def.code.clone(),
                    reason,
                }
            })?;

        let derived = pattern.bounds();
        let bounds = LengthBounds {
            min: def.min_len.unwrap_or(derived.min),
            max: def.max_len.or(derived.max),
        };
        if bounds.min == 0 {
            return Err(RegistryError::InvalidLengthOverride {
                code: def.code,
                reason: "minimum length must be at least 1".into(),
            });
        }
        if let Some(max) = bounds.max {
            if bounds.min > max {
                return Err(RegistryError::InvalidLengthOverride {
                    code: def.code,
                    reason: format!("minimum length {} exceeds maximum {max}", bounds.min),
                });
            }
        }

        let rule = Self {
            folded_code: fold_for_search(&def.code),
            folded_name: fold_for_search(&def.display_name),
            code: def.code,
            display_name: def.display_name,
            pattern,
            example_value: def.example_value,
            format_description: def.format_description,
            message: def.message,
            bounds,
        };

        if !crate::vat::validate(&rule, &rule.example_value).is_valid() {
            return Err(RegistryError::ExampleMismatch {
                code: rule.code,
                example: rule.example_value,
            });
        }

        Ok(rule)
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable country name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The format pattern as written in the rule table.
    pub fn format_pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Example identifier for input hints.
    pub fn example_value(&self) -> &str {
        &self.example_value
    }

    /// Natural-language description of the format.
    pub fn format_description(&self) -> &str {
        &self.format_description
    }

    /// Message shown when a candidate does not match the pattern: the custom
    /// message if one is configured, else the format description.
    pub fn mismatch_message(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.format_description)
    }

    /// Effective length bounds (derived from the pattern, then overridden).
    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Whether the pattern only ever accepts decimal digits.
    pub fn is_numeric(&self) -> bool {
        self.pattern.is_numeric()
    }

    /// Full-string, case-insensitive match against the pattern.
    pub fn is_full_match(&self, candidate: &str) -> bool {
        self.pattern.is_full_match(candidate)
    }

    /// The canonical "`code` | `display_name`" text written into the
    /// country field once this rule is selected.
    pub fn label(&self) -> String {
        format!("{} | {}", self.code, self.display_name)
    }

    /// Whether a query, already passed through [`fold_for_search`], is a
    /// substring of the folded name or code.
    pub(crate) fn matches_folded(&self, folded_query: &str) -> bool {
        self.folded_name.contains(folded_query) || self.folded_code.contains(folded_query)
    }
}

impl fmt::Display for CountryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.code, self.display_name)
    }
}

/// Result of checking a candidate identifier against a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Shorter than the rule's minimum length; no judgment yet.
    Incomplete,
    /// Matches the rule.
    Valid,
    /// Long enough to judge but not conforming, with an explanation.
    Invalid(String),
}

impl ValidationOutcome {
    /// Whether the candidate conforms to the rule.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether the candidate is still too short to judge.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    /// The explanation, for `Invalid` outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            Self::Incomplete | Self::Valid => None,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => f.write_str("incomplete"),
            Self::Valid => f.write_str("valid"),
            Self::Invalid(message) => write!(f, "invalid: {message}"),
        }
    }
}
