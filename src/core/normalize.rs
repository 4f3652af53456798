//! Accent- and case-insensitive text folding for country search.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300–U+036F).
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold `text` for search comparison.
///
/// Applies canonical decomposition (NFD), drops combining diacritical marks
/// and lowercases the rest, so `"Croácia"`, `"CROÁCIA"` and `"croacia"` all
/// fold to `"croacia"`.
pub fn fold_for_search(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(fold_for_search("Croácia"), "croacia");
        assert_eq!(fold_for_search("CROÁCIA"), "croacia");
        assert_eq!(fold_for_search("croacia"), "croacia");
    }

    #[test]
    fn precomposed_and_decomposed_agree() {
        // U+00E1 vs 'a' + U+0301
        assert_eq!(fold_for_search("\u{00E1}"), fold_for_search("a\u{0301}"));
    }

    #[test]
    fn other_accents() {
        assert_eq!(fold_for_search("Eslovênia"), "eslovenia");
        assert_eq!(fold_for_search("Estónia"), "estonia");
        assert_eq!(fold_for_search("Polônia"), "polonia");
        assert_eq!(fold_for_search("França"), "franca");
    }

    #[test]
    fn separators_are_kept() {
        assert_eq!(fold_for_search("AT | Áustria"), "at | austria");
        assert_eq!(fold_for_search("Países Baixos"), "paises baixos");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(fold_for_search(""), "");
    }
}
