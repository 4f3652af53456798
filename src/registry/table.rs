use std::collections::HashSet;

use crate::core::{
    CountryRule, RegistryError, RuleDefinition, ValidationOutcome, iso_code_for_vat_prefix,
};
use crate::vat::validate;

use super::reference;

/// Immutable, ordered set of country rules.
///
/// Built once from a rule table; there is no way to add or change rules
/// afterwards. Lookups, search and validation borrow it immutably and can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    rules: Vec<CountryRule>,
}

impl CountryRegistry {
    /// Compile a rule table, keeping its order.
    ///
    /// The whole table is rejected on the first defect.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateCode`] for a repeated code, or any error of
    /// [`CountryRule::compile`].
    pub fn load(
        definitions: impl IntoIterator<Item = RuleDefinition>,
    ) -> Result<Self, RegistryError> {
        match compile_all(definitions) {
            Ok(rules) => {
                tracing::info!(rules = rules.len(), "country rule registry loaded");
                Ok(Self { rules })
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected country rule table");
                Err(err)
            }
        }
    }

    /// Load the built-in EU reference table.
    pub fn reference() -> Result<Self, RegistryError> {
        Self::load(reference::definitions())
    }

    /// Load a rule table from a JSON array of [`RuleDefinition`]s.
    ///
    /// ```rust
    /// use vatfeld::CountryRegistry;
    ///
    /// let registry = CountryRegistry::from_json(r#"[{
    ///     "code": "PT",
    ///     "display_name": "Portugal",
    ///     "format_pattern": "[0-9]{9}",
    ///     "example_value": "249888776",
    ///     "format_description": "Must have 9 digits."
    /// }]"#).unwrap();
    /// assert_eq!(registry.len(), 1);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let definitions: Vec<RuleDefinition> =
            serde_json::from_str(json).map_err(|e| RegistryError::Config(e.to_string()))?;
        Self::load(definitions)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in table order.
    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }

    /// Iterate over rules in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRule> {
        self.rules.iter()
    }

    /// Look up a rule by country code, ignoring ASCII case.
    pub fn get(&self, code: &str) -> Option<&CountryRule> {
        self.rules
            .iter()
            .find(|rule| rule.code().eq_ignore_ascii_case(code))
    }

    /// Validate `candidate` against the rule for `code`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCountry`] if no rule is registered for `code`.
    pub fn validate(
        &self,
        code: &str,
        candidate: &str,
    ) -> Result<ValidationOutcome, RegistryError> {
        let rule = self
            .get(code)
            .ok_or_else(|| RegistryError::UnknownCountry(code.to_owned()))?;
        Ok(validate(rule, candidate))
    }

    /// Validate a full VAT number including its two-letter prefix
    /// (e.g. "ATU12345678").
    ///
    /// Surrounding whitespace is trimmed. Greece's VAT prefix `EL` resolves
    /// to the `GR` rule; the ISO code `GR` is not accepted as a prefix.
    /// Returns the matched rule together with the outcome for the part after
    /// the prefix.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCountry`] if the prefix names no registered rule.
    pub fn validate_prefixed(
        &self,
        vat_id: &str,
    ) -> Result<(&CountryRule, ValidationOutcome), RegistryError> {
        let vat_id = vat_id.trim();
        let (Some(prefix), Some(number)) = (vat_id.get(..2), vat_id.get(2..)) else {
            return Err(RegistryError::UnknownCountry(vat_id.to_owned()));
        };

        let rule = iso_code_for_vat_prefix(prefix)
            .and_then(|code| self.get(&code))
            .ok_or_else(|| RegistryError::UnknownCountry(prefix.to_owned()))?;
        Ok((rule, validate(rule, number)))
    }
}

impl<'a> IntoIterator for &'a CountryRegistry {
    type Item = &'a CountryRule;
    type IntoIter = std::slice::Iter<'a, CountryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn compile_all(
    definitions: impl IntoIterator<Item = RuleDefinition>,
) -> Result<Vec<CountryRule>, RegistryError> {
    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for def in definitions {
        if !seen.insert(def.code.clone()) {
            return Err(RegistryError::DuplicateCode(def.code));
        }
        let rule = CountryRule::compile(def)?;
        tracing::debug!(
            code = rule.code(),
            min_len = rule.bounds().min,
            max_len = ?rule.bounds().max,
            numeric = rule.is_numeric(),
            "compiled country rule"
        );
        rules.push(rule);
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(code: &str, name: &str) -> RuleDefinition {
        RuleDefinition::new(code, name, "[0-9]{8}", "12345678", "Must have 8 digits.")
    }

    #[test]
    fn reference_loads_in_order() {
        let registry = CountryRegistry::reference().unwrap();
        assert_eq!(registry.len(), 27);
        assert_eq!(registry.rules()[0].code(), "AT");
        assert_eq!(registry.rules()[26].code(), "DE");
    }

    #[test]
    fn duplicate_codes_rejected() {
        let err =
            CountryRegistry::load([def("DK", "Dinamarca"), def("DK", "Denmark")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCode("DK".into()));
    }

    #[test]
    fn empty_table_is_allowed() {
        let registry = CountryRegistry::load(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("DK").is_none());
    }

    #[test]
    fn get_ignores_case() {
        let registry = CountryRegistry::load([def("DK", "Dinamarca")]).unwrap();
        assert_eq!(registry.get("dk").map(CountryRule::code), Some("DK"));
        assert!(registry.get("D").is_none());
    }

    #[test]
    fn validate_unknown_country() {
        let registry = CountryRegistry::load([def("DK", "Dinamarca")]).unwrap();
        assert_eq!(
            registry.validate("SE", "12345678").unwrap_err(),
            RegistryError::UnknownCountry("SE".into())
        );
        assert_eq!(registry.validate("DK", "12345678").unwrap(), ValidationOutcome::Valid);
    }

    #[test]
    fn prefixed_greek_alias() {
        let registry = CountryRegistry::reference().unwrap();
        let (rule, outcome) = registry.validate_prefixed("EL123456789").unwrap();
        assert_eq!(rule.code(), "GR");
        assert_eq!(outcome, ValidationOutcome::Valid);
    }

    #[test]
    fn prefixed_greek_iso_code_rejected() {
        let registry = CountryRegistry::reference().unwrap();
        assert_eq!(
            registry.validate_prefixed("GR123456789").unwrap_err(),
            RegistryError::UnknownCountry("GR".into())
        );
    }

    #[test]
    fn prefixed_trims_and_splits() {
        let registry = CountryRegistry::reference().unwrap();
        let (rule, outcome) = registry.validate_prefixed("  atU12345678 ").unwrap();
        assert_eq!(rule.code(), "AT");
        assert_eq!(outcome, ValidationOutcome::Valid);
    }

    #[test]
    fn prefixed_rejects_garbage() {
        let registry = CountryRegistry::reference().unwrap();
        assert!(registry.validate_prefixed("").is_err());
        assert!(registry.validate_prefixed("X").is_err());
        assert!(registry.validate_prefixed("XX123").is_err());
        assert!(registry.validate_prefixed("Ü123").is_err());
    }
}
