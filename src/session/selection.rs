use crate::core::{CountryRule, RegistryError, ValidationOutcome};
use crate::registry::{CountryRegistry, SearchView};
use crate::vat::validate;

/// Selection state of one country + VAT number form.
///
/// Owned by the form; each instance borrows a shared registry and nothing
/// else, so any number of forms can run side by side.
///
/// Lifecycle: a country is set only by [`select`](Self::select). Once the
/// country text differs from the selected country's
/// [`label`](CountryRule::label), the selection is dropped together with the
/// VAT number and its outcome.
#[derive(Debug, Clone)]
pub struct Selection<'r> {
    registry: &'r CountryRegistry,
    search_text: String,
    selected: Option<&'r CountryRule>,
    candidate: String,
    outcome: Option<ValidationOutcome>,
}

impl<'r> Selection<'r> {
    /// Start with an empty form.
    pub fn new(registry: &'r CountryRegistry) -> Self {
        Self {
            registry,
            search_text: String::new(),
            selected: None,
            candidate: String::new(),
            outcome: None,
        }
    }

    /// The user edited the country field.
    ///
    /// Returns what the picker should show for the new text. While the text
    /// is the selected country's label the picker stays closed.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> SearchView<'r> {
        let text = text.into();
        if let Some(rule) = self.selected {
            if text != rule.label() {
                self.clear_selection();
            }
        }
        self.search_text = text;
        self.search_view()
    }

    /// Picker contents for the current country text.
    pub fn search_view(&self) -> SearchView<'r> {
        match self.selected {
            Some(rule) if self.search_text == rule.label() => SearchView::Inactive,
            _ => self.registry.search_view(&self.search_text),
        }
    }

    /// Select the country with `code` (pointer click or Enter on a
    /// highlighted entry).
    ///
    /// The country field is set to the rule's label. Switching to a
    /// different country discards the VAT number typed for the previous one.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCountry`] if `code` is not registered; the
    /// state is left untouched.
    pub fn select(&mut self, code: &str) -> Result<&'r CountryRule, RegistryError> {
        let registry = self.registry;
        let rule = registry
            .get(code)
            .ok_or_else(|| RegistryError::UnknownCountry(code.to_owned()))?;

        if self.selected.is_some_and(|current| current.code() != rule.code()) {
            self.candidate.clear();
            self.outcome = None;
        }
        self.selected = Some(rule);
        self.search_text = rule.label();
        tracing::trace!(code = rule.code(), "country selected");
        Ok(rule)
    }

    /// The user edited the VAT number field.
    ///
    /// Without a selected country the field is disabled: the text is
    /// dropped and `None` is returned.
    pub fn set_candidate(&mut self, text: impl Into<String>) -> Option<&ValidationOutcome> {
        let rule = self.selected?;
        self.candidate = text.into();
        self.outcome = Some(validate(rule, &self.candidate));
        self.outcome.as_ref()
    }

    /// Focus left the country field.
    ///
    /// Must run after any pending pointer selection has been applied,
    /// otherwise the click is lost. Unselected text is cleared; a selected
    /// country keeps its label.
    pub fn blur(&mut self) {
        if self.selected.is_none() {
            self.search_text.clear();
        }
    }

    /// Placeholder for the VAT number field.
    pub fn example_hint(&self) -> Option<&'r str> {
        self.selected.map(CountryRule::example_value)
    }

    /// Current country field text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Currently selected country.
    pub fn selected(&self) -> Option<&'r CountryRule> {
        self.selected
    }

    /// Current VAT number text.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Outcome for the current VAT number, if one was entered.
    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    fn clear_selection(&mut self) {
        if let Some(rule) = self.selected.take() {
            tracing::trace!(code = rule.code(), "country selection cleared");
        }
        self.candidate.clear();
        self.outcome = None;
    }
}
