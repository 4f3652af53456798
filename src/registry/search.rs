//! Accent- and case-insensitive country search.

use crate::core::{CountryRule, fold_for_search};

use super::table::CountryRegistry;

/// What a country picker should show for a query.
#[derive(Debug, Clone)]
pub enum SearchView<'r> {
    /// Empty query: no active search, no list.
    Inactive,
    /// Non-empty query that matched nothing.
    NoResults,
    /// Matching rules, in registry order.
    Matches(Vec<&'r CountryRule>),
}

impl<'r> SearchView<'r> {
    /// The matching rules; empty for `Inactive` and `NoResults`.
    pub fn rules(&self) -> &[&'r CountryRule] {
        match self {
            Self::Matches(rules) => rules.as_slice(),
            Self::Inactive | Self::NoResults => &[],
        }
    }

    /// Codes of the matching rules, mostly for display and assertions.
    pub fn codes(&self) -> Vec<&'r str> {
        self.rules().iter().copied().map(CountryRule::code).collect()
    }
}

impl CountryRegistry {
    /// Rules whose display name or code contains `query`, in registry order.
    ///
    /// Both sides are compared after [`fold_for_search`], so "croacia",
    /// "Croácia" and "CROÁCIA" find the same rules. An empty query matches
    /// nothing.
    pub fn search(&self, query: &str) -> Vec<&CountryRule> {
        if query.is_empty() {
            return Vec::new();
        }
        let folded = fold_for_search(query);
        self.iter().filter(|rule| rule.matches_folded(&folded)).collect()
    }

    /// Classify `query` for a picker: inactive, no results, or matches.
    pub fn search_view(&self, query: &str) -> SearchView<'_> {
        if query.is_empty() {
            return SearchView::Inactive;
        }
        let matches = self.search(query);
        if matches.is_empty() {
            SearchView::NoResults
        } else {
            SearchView::Matches(matches)
        }
    }
}
