//! Reference rule table: the 27 EU member states.
//!
//! Formats follow the published EU VAT number formats, cross-checked
//! against the ISO 3166-1 country list. Display names are Portuguese, the
//! language of the form the table was written for. Letters are matched
//! case-insensitively.

use crate::core::RuleDefinition;

struct Entry {
    code: &'static str,
    name: &'static str,
    pattern: &'static str,
    example: &'static str,
    description: &'static str,
    message: Option<&'static str>,
}

const fn entry(
    code: &'static str,
    name: &'static str,
    pattern: &'static str,
    example: &'static str,
    description: &'static str,
) -> Entry {
    Entry {
        code,
        name,
        pattern,
        example,
        description,
        message: None,
    }
}

const fn with_message(e: Entry, message: &'static str) -> Entry {
    Entry {
        message: Some(message),
        ..e
    }
}

/// In display order.
static REFERENCE_RULES: &[Entry] = &[
    with_message(
        entry(
            "AT",
            "Áustria",
            "U[0-9]{8}",
            "U12345678",
            "Must start with the letter \"U\", followed by 8 digits.",
        ),
        "Austrian VAT numbers are the letter \"U\" followed by 8 digits, e.g. U12345678.",
    ),
    with_message(
        entry(
            "BE",
            "Bélgica",
            "0[0-9]{9}",
            "0123456789",
            "Must start with \"0\", followed by 9 digits.",
        ),
        "Belgian VAT numbers are \"0\" followed by 9 digits, e.g. 0123456789.",
    ),
    entry("BG", "Bulgária", "[0-9]{9,10}", "123456789", "Must have 9 or 10 digits."),
    entry("HR", "Croácia", "[0-9]{11}", "12345678901", "Must have 11 digits."),
    with_message(
        entry(
            "CY",
            "Chipre",
            "[0-9]{8}L",
            "12345678L",
            "Must start with 8 digits and end with the letter \"L\".",
        ),
        "Cypriot VAT numbers are 8 digits followed by the letter \"L\", e.g. 12345678L.",
    ),
    entry("CZ", "República Checa", "[0-9]{8,10}", "12345678", "Must have between 8 and 10 digits."),
    entry("DK", "Dinamarca", "[0-9]{8}", "12345678", "Must have 8 digits."),
    entry("SK", "Eslováquia", "[0-9]{10}", "1234567890", "Must have 10 digits."),
    entry("SI", "Eslovênia", "[0-9]{8}", "12345678", "Must have 8 digits."),
    with_message(
        entry(
            "ES",
            "Espanha",
            "[0-9A-Z][0-9]{7}[0-9A-Z]",
            "X12345678",
            "Starts with a letter or digit, followed by 7 digits and a letter or digit.",
        ),
        "Spanish VAT numbers are a letter or digit, 7 digits, then a letter or digit, e.g. X12345678.",
    ),
    entry("EE", "Estónia", "[0-9]{9}", "123456789", "Must have 9 digits."),
    entry("FI", "Finlândia", "[0-9]{8}", "12345678", "Must have 8 digits."),
    with_message(
        entry(
            "FR",
            "França",
            "[0-9A-Z]{2}[0-9]{9}",
            "AB123456789",
            "Starts with 2 letters or digits, followed by 9 digits.",
        ),
        "French VAT numbers are 2 letters or digits followed by 9 digits, e.g. AB123456789.",
    ),
    entry("GR", "Grécia", "[0-9]{9}", "123456789", "Must have 9 digits."),
    entry("HU", "Hungria", "[0-9]{8}", "12345678", "Must have 8 digits."),
    with_message(
        entry(
            "IE",
            "Irlanda",
            "[0-9]S[0-9]{5}L",
            "1S23456L",
            "Starts with a digit, then the letter \"S\", 5 digits, and ends with the letter \"L\".",
        ),
        "Irish VAT numbers are a digit, \"S\", 5 digits and \"L\", e.g. 1S23456L.",
    ),
    entry("IT", "Itália", "[0-9]{11}", "12345678901", "Must have 11 digits."),
    entry("LV", "Letônia", "[0-9]{11}", "12345678901", "Must have 11 digits."),
    entry("LT", "Lituânia", "[0-9]{9}|[0-9]{12}", "123456789", "Must have 9 or 12 digits."),
    entry("LU", "Luxemburgo", "[0-9]{8}", "12345678", "Must have 8 digits."),
    entry("MT", "Malta", "[0-9]{8}", "12345678", "Must have 8 digits."),
    with_message(
        entry(
            "NL",
            "Países Baixos",
            "[0-9]{9}B[0-9]{2}",
            "123456789B01",
            "Starts with 9 digits, followed by the letter \"B\" and 2 digits.",
        ),
        "Dutch VAT numbers are 9 digits, \"B\", then 2 digits, e.g. 123456789B01.",
    ),
    entry("PL", "Polônia", "[0-9]{10}", "1234567890", "Must have 10 digits."),
    entry("PT", "Portugal", "[0-9]{9}", "249888776", "Must have 9 digits."),
    entry("RO", "Romênia", "[0-9]{2,10}", "1234567890", "Must have between 2 and 10 digits."),
    entry("SE", "Suécia", "[0-9]{12}", "123456789012", "Must have 12 digits."),
    entry("DE", "Alemanha", "[0-9]{9}", "123456789", "Must have 9 digits."),
];

/// Definitions of the reference table, in display order.
pub fn definitions() -> Vec<RuleDefinition> {
    REFERENCE_RULES
        .iter()
        .map(|e| {
            let def = RuleDefinition::new(e.code, e.name, e.pattern, e.example, e.description);
            match e.message {
                Some(message) => def.message(message),
                None => def,
            }
        })
        .collect()
}
