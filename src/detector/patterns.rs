//! Common weak-password pattern detection.
//!
//! The catalogue is an ordered static table compiled once per process. Matching
//! is existential: a password is "common" if any entry matches. Order only
//! affects the order of names reported by [`PatternDetector::matched_patterns`].
//!
//! Patterns compile with Unicode mode off, so `(?i)` folds ASCII case only
//! (`ſ` is not `s`, the Kelvin sign is not `k`) and every class is ASCII.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// What kind of weakness a pattern signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Keyboard or counting sequence
    Sequence,
    /// Dictionary word common in leaked password lists
    Dictionary,
    /// Predictable whole-string shape
    Structural,
}

/// Catalogue entries: (name, kind, regex source)
const PATTERN_TABLE: &[(&str, PatternKind, &str)] = &[
    ("leading-123", PatternKind::Sequence, r"^123"),
    ("abc", PatternKind::Sequence, r"(?i)abc"),
    ("qwerty", PatternKind::Sequence, r"(?i)qwerty"),
    ("password", PatternKind::Dictionary, r"(?i)password"),
    ("admin", PatternKind::Dictionary, r"(?i)admin"),
    ("welcome", PatternKind::Dictionary, r"(?i)welcome"),
    ("trailing-4-digits", PatternKind::Structural, r"[0-9]{4}$"),
    ("letters-then-digits", PatternKind::Structural, r"^[a-zA-Z]+[0-9]+$"),
    ("all-lowercase", PatternKind::Structural, r"^[a-z]+$"),
    ("all-uppercase", PatternKind::Structural, r"^[A-Z]+$"),
    ("birthday", PatternKind::Dictionary, r"(?i)birthday"),
    ("letmein", PatternKind::Dictionary, r"(?i)letmein"),
    ("monkey", PatternKind::Dictionary, r"(?i)monkey"),
    ("sunshine", PatternKind::Dictionary, r"(?i)sunshine"),
    ("iloveyou", PatternKind::Dictionary, r"(?i)iloveyou"),
    ("football", PatternKind::Dictionary, r"(?i)football"),
    ("baseball", PatternKind::Dictionary, r"(?i)baseball"),
    ("dragon", PatternKind::Dictionary, r"(?i)dragon"),
    ("master", PatternKind::Dictionary, r"(?i)master"),
    ("superman", PatternKind::Dictionary, r"(?i)superman"),
    ("summer-year", PatternKind::Structural, r"(?i)summer[0-9]{2,4}$"),
];

/// A compiled catalogue entry
#[derive(Debug, Clone)]
pub struct CommonPattern {
    pub name: &'static str,
    pub kind: PatternKind,
    pub regex: Regex,
}

impl CommonPattern {
    pub fn is_match(&self, password: &str) -> bool {
        self.regex.is_match(password)
    }
}

fn compile_catalogue() -> Vec<CommonPattern> {
    PATTERN_TABLE
        .iter()
        .map(|&(name, kind, source)| CommonPattern {
            name,
            kind,
            regex: RegexBuilder::new(source)
                .unicode(false)
                .build()
                .expect("pattern table entries are valid regexes"),
        })
        .collect()
}

/// The compiled catalogue, in table order (compiled once per process).
pub fn common_patterns() -> &'static [CommonPattern] {
    static CATALOGUE: OnceLock<Vec<CommonPattern>> = OnceLock::new();
    CATALOGUE.get_or_init(compile_catalogue)
}

/// Matches passwords against the weak-pattern catalogue
pub struct PatternDetector<'a> {
    password: &'a str,
}

impl<'a> PatternDetector<'a> {
    pub fn new(password: &'a str) -> Self {
        Self { password }
    }

    /// True if any catalogue entry matches
    pub fn matches_common_pattern(&self) -> bool {
        common_patterns().iter().any(|p| p.is_match(self.password))
    }

    /// Names of every matching entry, in catalogue order
    pub fn matched_patterns(&self) -> Vec<&'static str> {
        common_patterns()
            .iter()
            .filter(|p| p.is_match(self.password))
            .map(|p| p.name)
            .collect()
    }
}
