#![cfg(feature = "core")]

use vatfeld::{CountryRegistry, CountryRule, RegistryError, RuleDefinition, SearchView};

fn registry() -> CountryRegistry {
    CountryRegistry::reference().unwrap()
}

fn codes<'a>(rules: impl IntoIterator<Item = &'a CountryRule>) -> Vec<&'a str> {
    rules.into_iter().map(CountryRule::code).collect()
}

// ---------------------------------------------------------------------------
// Search — normalization
// ---------------------------------------------------------------------------

#[test]
fn croatia_any_spelling() {
    let registry = registry();
    let expected = ["HR"];
    assert_eq!(codes(registry.search("croacia")), expected);
    assert_eq!(codes(registry.search("Croácia")), expected);
    assert_eq!(codes(registry.search("CROÁCIA")), expected);
    assert_eq!(codes(registry.search("cro")), expected);
}

#[test]
fn decomposed_query_matches_precomposed_name() {
    let registry = registry();
    assert_eq!(codes(registry.search("Cro\u{0061}\u{0301}cia")), ["HR"]);
}

#[test]
fn hr_code_finds_only_croatia() {
    assert_eq!(codes(registry().search("HR")), ["HR"]);
}

#[test]
fn lowercase_code() {
    assert_eq!(codes(registry().search("de")), ["DE"]);
}

#[test]
fn cedilla_folds() {
    assert_eq!(codes(registry().search("franca")), ["FR"]);
}

#[test]
fn multiword_names() {
    assert_eq!(codes(registry().search("baixos")), ["NL"]);
    assert_eq!(codes(registry().search("republica")), ["CZ"]);
}

#[test]
fn common_substring_keeps_registry_order() {
    let registry = registry();
    // Áustria, Bulgária, Croácia, Eslováquia, Estónia, Finlândia, ...
    let hits = codes(registry.search("ia"));
    let all = codes(&registry);
    let mut last = 0;
    for code in &hits {
        let idx = all.iter().position(|c| c == code).unwrap();
        assert!(idx >= last, "{code} out of order");
        last = idx;
    }
    assert_eq!(hits.first(), Some(&"AT"));
}

#[test]
fn results_are_subset_of_folded_matches() {
    let registry = registry();
    for query in ["a", "ia", "E", "ó", "Ê", "z"] {
        let folded = vatfeld::fold_for_search(query);
        for rule in registry.search(query) {
            assert!(
                vatfeld::fold_for_search(rule.display_name()).contains(&folded)
                    || vatfeld::fold_for_search(rule.code()).contains(&folded),
                "{} should not match {query:?}",
                rule.code()
            );
        }
    }
}

#[test]
fn label_text_is_not_a_search_hit() {
    // after a selection the field shows "PT | Portugal", which names no country
    assert!(registry().search("PT | Portugal").is_empty());
}

// ---------------------------------------------------------------------------
// Search views
// ---------------------------------------------------------------------------

#[test]
fn empty_query_is_inactive() {
    let registry = registry();
    assert!(registry.search("").is_empty());
    assert!(matches!(registry.search_view(""), SearchView::Inactive));
}

#[test]
fn unmatched_query_is_no_results() {
    let registry = registry();
    assert!(registry.search("narnia").is_empty());
    assert!(matches!(registry.search_view("narnia"), SearchView::NoResults));
}

#[test]
fn matched_query_lists_rules() {
    let registry = registry();
    let view = registry.search_view("malta");
    assert_eq!(view.codes(), ["MT"]);
    assert_eq!(view.rules()[0].label(), "MT | Malta");
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn reference_table_contents() {
    let registry = registry();
    assert_eq!(registry.len(), 27);
    assert_eq!(
        codes(&registry),
        [
            "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "SK", "SI", "ES", "EE", "FI", "FR", "GR",
            "HU", "IE", "IT", "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SE", "DE",
        ]
    );
}

#[test]
fn custom_table_keeps_order() {
    let registry = CountryRegistry::load([
        RuleDefinition::new("SE", "Sweden", "[0-9]{12}", "123456789012", "12 digits."),
        RuleDefinition::new("DK", "Denmark", "[0-9]{8}", "12345678", "8 digits."),
    ])
    .unwrap();
    assert_eq!(codes(&registry), ["SE", "DK"]);
    assert_eq!(codes(registry.search("denm")), ["DK"]);
}

#[test]
fn first_defect_rejects_whole_table() {
    let result = CountryRegistry::load([
        RuleDefinition::new("DK", "Denmark", "[0-9]{8}", "12345678", "8 digits."),
        RuleDefinition::new("SE", "Sweden", "[0-9]{12", "123456789012", "12 digits."),
    ]);
    assert!(matches!(
        result,
        Err(RegistryError::InvalidPattern { ref code, .. }) if code == "SE"
    ));
}

#[test]
fn reference_definitions_round_trip_through_load() {
    let defs = vatfeld::registry::reference_definitions();
    let registry = CountryRegistry::load(defs.clone()).unwrap();
    for (def, rule) in defs.iter().zip(&registry) {
        assert_eq!(def.code, rule.code());
        assert_eq!(def.display_name, rule.display_name());
        assert_eq!(def.format_pattern, rule.format_pattern());
        assert_eq!(def.example_value, rule.example_value());
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                registry.validate("AT", "U12345678").unwrap().is_valid()
                    && registry.search("croacia").len() == 1
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
