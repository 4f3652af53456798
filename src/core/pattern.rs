//! Compilation and shape analysis of identifier format patterns.
//!
//! A format pattern is a regular-expression body describing a whole
//! identifier. It is compiled once, anchored at both ends and matched
//! ASCII case-insensitively. The parsed syntax tree is walked to derive the
//! length bounds and to decide whether the pattern is purely numeric.

use regex::{Regex, RegexBuilder};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Class, Hir, HirKind};
use serde::{Deserialize, Serialize};

/// Length bounds of the identifiers a rule accepts, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    /// Shortest acceptable identifier. Shorter input is still being typed.
    pub min: usize,
    /// Longest acceptable identifier, if bounded.
    pub max: Option<usize>,
}

impl LengthBounds {
    /// Whether only a single length is accepted.
    pub fn is_fixed(&self) -> bool {
        self.max == Some(self.min)
    }
}

/// A compiled format pattern.
#[derive(Debug, Clone)]
pub struct FormatPattern {
    source: String,
    matcher: Regex,
    bounds: LengthBounds,
    numeric: bool,
}

impl FormatPattern {
    /// Compile and analyse `source`.
    ///
    /// Rejected patterns: non-ASCII text, syntax errors, patterns that can
    /// match a non-ASCII character (e.g. after an inline `(?u)`), patterns
    /// that can never match, and patterns that accept the empty string. The
    /// error is a human-readable reason.
    pub fn compile(source: &str) -> Result<Self, String> {
        if !source.is_ascii() {
            return Err("pattern must be ASCII".into());
        }

        // Same flags as the matcher, so case folding is part of the tree.
        let hir = ParserBuilder::new()
            .unicode(false)
            .case_insensitive(true)
            .build()
            .parse(source)
            .map_err(|e| e.to_string())?;

        // Length bounds count bytes, which equal characters only for ASCII.
        if !only_ascii(&hir) {
            return Err("pattern may match non-ASCII characters".into());
        }

        let matcher = RegexBuilder::new(&format!("^(?:{source})$"))
            .unicode(false)
            .case_insensitive(true)
            .build()
            .map_err(|e| e.to_string())?;

        let props = hir.properties();
        let min = match props.minimum_len() {
            Some(0) => return Err("pattern accepts the empty string".into()),
            Some(n) => n,
            None => return Err("pattern can never match".into()),
        };

        Ok(Self {
            source: source.to_owned(),
            matcher,
            bounds: LengthBounds {
                min,
                max: props.maximum_len(),
            },
            numeric: only_digits(&hir),
        })
    }

    /// The pattern as written in the rule table.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Length bounds derived from the pattern.
    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Whether every position of the pattern is a decimal digit.
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Full-string, case-insensitive match.
    pub fn is_full_match(&self, candidate: &str) -> bool {
        self.matcher.is_match(candidate)
    }
}

fn only_ascii(hir: &Hir) -> bool {
    match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => true,
        HirKind::Literal(lit) => lit.0.is_ascii(),
        HirKind::Class(Class::Bytes(class)) => class.ranges().iter().all(|r| r.end().is_ascii()),
        HirKind::Class(Class::Unicode(class)) => class.ranges().iter().all(|r| r.end().is_ascii()),
        HirKind::Repetition(rep) => only_ascii(&rep.sub),
        HirKind::Capture(cap) => only_ascii(&cap.sub),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => subs.iter().all(only_ascii),
    }
}

fn only_digits(hir: &Hir) -> bool {
    match hir.kind() {
        HirKind::Empty | HirKind::Look(_) => true,
        HirKind::Literal(lit) => lit.0.iter().all(u8::is_ascii_digit),
        HirKind::Class(Class::Bytes(class)) => class
            .ranges()
            .iter()
            .all(|r| r.start().is_ascii_digit() && r.end().is_ascii_digit()),
        HirKind::Class(Class::Unicode(class)) => class
            .ranges()
            .iter()
            .all(|r| r.start().is_ascii_digit() && r.end().is_ascii_digit()),
        HirKind::Repetition(rep) => only_digits(&rep.sub),
        HirKind::Capture(cap) => only_digits(&cap.sub),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => subs.iter().all(only_digits),
    }
}
