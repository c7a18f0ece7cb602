//! Suggestion generation.
//!
//! The first suggestion is a deterministic repair of the password driven by its
//! findings. The other two are random per-character variations of it.

use crate::detector::{CharacterClass, CharacterProfile};
use crate::Vulnerability;

use super::RandomSource;

/// Appended to short passwords
pub const FILLER: &str = "xK7!pL";
/// Alphabet for random special characters
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];
/// Per-character chance of a case flip or digit swap in a variation
pub const MUTATION_PROBABILITY: f64 = 0.3;
pub const SUGGESTION_COUNT: usize = 3;
/// Short passwords are padded toward this length
const TARGET_LENGTH: usize = 8;
const MIN_FILLER: usize = 3;
/// Fallback variations get a numeric suffix below this
const SUFFIX_BOUND: usize = 100;

/// Substitutions applied to every occurrence when a common pattern was found
pub const LEET_SUBSTITUTIONS: &[(char, char)] =
    &[('a', '@'), ('e', '3'), ('i', '!'), ('o', '0'), ('s', '$')];

/// Fix for a missing character class: swap the first occurrence of `target`
/// (either case) for `replacement`, else append `fallback`.
#[derive(Debug, Clone, Copy)]
struct ClassRepair {
    vulnerability: Vulnerability,
    class: CharacterClass,
    target: char,
    replacement: char,
    fallback: char,
}

const CLASS_REPAIRS: &[ClassRepair] = &[
    ClassRepair {
        vulnerability: Vulnerability::NoLowercase,
        class: CharacterClass::Lower,
        target: 'a',
        replacement: 'a',
        fallback: 'z',
    },
    ClassRepair {
        vulnerability: Vulnerability::NoUppercase,
        class: CharacterClass::Upper,
        target: 'e',
        replacement: 'E',
        fallback: 'Z',
    },
    ClassRepair {
        vulnerability: Vulnerability::NoNumbers,
        class: CharacterClass::Digit,
        target: 'o',
        replacement: '0',
        fallback: '9',
    },
    ClassRepair {
        vulnerability: Vulnerability::NoSpecialCharacters,
        class: CharacterClass::Special,
        target: 's',
        replacement: '$',
        fallback: '!',
    },
];

impl ClassRepair {
    fn apply(&self, candidate: &mut String) {
        let first = candidate
            .char_indices()
            .find(|(_, c)| c.eq_ignore_ascii_case(&self.target));
        if let Some((index, found)) = first {
            let end = index + found.len_utf8();
            candidate.replace_range(index..end, &self.replacement.to_string());
        }
        if !CharacterProfile::detect(candidate).has(self.class) {
            candidate.push(self.fallback);
        }
    }
}

/// Generator for replacement password suggestions
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    mutation_probability: f64,
}

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self {
            mutation_probability: MUTATION_PROBABILITY,
        }
    }

    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Exactly three suggestions: the repaired password and two variations of it.
    pub fn generate(
        &self,
        password: &str,
        vulnerabilities: &[Vulnerability],
        rng: &mut dyn RandomSource,
    ) -> Vec<String> {
        let base = Self::improve(password, vulnerabilities);
        let mut suggestions = Vec::with_capacity(SUGGESTION_COUNT);
        for _ in 1..SUGGESTION_COUNT {
            let variation = self.vary(&base, rng);
            if variation != base {
                suggestions.push(variation);
            } else {
                log::trace!("variation unchanged, using suffix fallback");
                suggestions.push(format!(
                    "{}{}{}",
                    base,
                    rng.pick(SPECIAL_CHARACTERS),
                    rng.below(SUFFIX_BOUND)
                ));
            }
        }
        suggestions.insert(0, base);
        suggestions
    }

    /// Deterministic repair of the password for the given findings.
    pub fn improve(password: &str, vulnerabilities: &[Vulnerability]) -> String {
        let mut candidate = password.to_string();

        if vulnerabilities.contains(&Vulnerability::TooShort) {
            let length = candidate.chars().count();
            let wanted = TARGET_LENGTH.saturating_sub(length).max(MIN_FILLER);
            candidate.extend(FILLER.chars().take(wanted));
        }

        for repair in CLASS_REPAIRS {
            if vulnerabilities.contains(&repair.vulnerability) {
                repair.apply(&mut candidate);
            }
        }

        if vulnerabilities.contains(&Vulnerability::CommonPattern) {
            candidate = disguise_common_pattern(&candidate);
        }

        candidate
    }

    /// Flip letter case or swap digits for specials, per character.
    fn vary(&self, base: &str, rng: &mut dyn RandomSource) -> String {
        base.chars()
            .map(|c| {
                if rng.next_f64() < self.mutation_probability {
                    if c.is_ascii_lowercase() {
                        return c.to_ascii_uppercase();
                    }
                    if c.is_ascii_uppercase() {
                        return c.to_ascii_lowercase();
                    }
                    if c.is_ascii_digit() {
                        return rng.pick(SPECIAL_CHARACTERS);
                    }
                }
                c
            })
            .collect()
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Leetspeak substitution, then uppercase letters at every third position.
pub fn disguise_common_pattern(candidate: &str) -> String {
    candidate
        .chars()
        .map(leet)
        .enumerate()
        .map(|(i, c)| {
            if i % 3 == 0 && c.is_ascii_alphabetic() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

fn leet(c: char) -> char {
    let lower = c.to_ascii_lowercase();
    LEET_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}
