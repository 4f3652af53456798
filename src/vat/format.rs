//! As-you-type VAT number validation against a country rule.

use crate::core::{CountryRule, LengthBounds, ValidationOutcome};

/// Message for input containing anything besides ASCII letters and digits.
pub const LETTERS_AND_DIGITS_ONLY: &str = "Only letters and digits are allowed.";

/// Validate `candidate` against `rule`.
///
/// Length is counted in characters and the candidate is not trimmed, so
/// stray whitespace counts against it.
///
/// - Shorter than the rule's minimum: [`ValidationOutcome::Incomplete`].
/// - Otherwise every applicable explanation is collected, in order: length
///   above the maximum, characters outside `[0-9A-Za-z]` (only for rules
///   that allow letters), pattern mismatch. None apply:
///   [`ValidationOutcome::Valid`]; else [`ValidationOutcome::Invalid`] with
///   the explanations joined by a space.
///
/// Rules with alternative lengths are judged from their shortest branch
/// onwards. For Lithuania (`[0-9]{9}|[0-9]{12}`) 10 or 11 digits are
/// `Invalid`, even though more typing could still reach a legal 12-digit
/// number.
///
/// Pure and idempotent: the outcome depends only on the arguments.
pub fn validate(rule: &CountryRule, candidate: &str) -> ValidationOutcome {
    let bounds = rule.bounds();
    let len = candidate.chars().count();
    if len < bounds.min {
        return ValidationOutcome::Incomplete;
    }

    let mut messages: Vec<String> = Vec::new();

    match bounds.max {
        Some(max) if len > max => messages.push(length_message(bounds, max)),
        _ => {}
    }

    if !rule.is_numeric() && !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        messages.push(LETTERS_AND_DIGITS_ONLY.to_owned());
    }

    if !rule.is_full_match(candidate) {
        messages.push(rule.mismatch_message().to_owned());
    }

    if messages.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(messages.join(" "))
    }
}

fn length_message(bounds: LengthBounds, max: usize) -> String {
    if bounds.is_fixed() {
        format!("Must have exactly {max} characters.")
    } else {
        format!("Must have at most {max} characters.")
    }
}
