//! Character-class detection

use serde::{Deserialize, Serialize};

/// One of the four character classes the analyzer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    /// Anything outside ASCII letters and digits, including non-ASCII text
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Size of the alphabet an attacker must cover for this class
    pub fn alphabet_size(self) -> u32 {
        match self {
            CharacterClass::Lower | CharacterClass::Upper => 26,
            CharacterClass::Digit => 10,
            CharacterClass::Special => 33,
        }
    }

    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharacterClass::Lower
        } else if c.is_ascii_uppercase() {
            CharacterClass::Upper
        } else if c.is_ascii_digit() {
            CharacterClass::Digit
        } else {
            CharacterClass::Special
        }
    }
}

/// Facts derived from a password's characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Length in characters (Unicode scalar values)
    pub length: usize,
    /// Sum of alphabet sizes of the classes present
    pub possible_charset_size: u32,
}

impl CharacterProfile {
    pub fn detect(password: &str) -> Self {
        let mut profile = CharacterProfile::default();
        for c in password.chars() {
            profile.length += 1;
            match CharacterClass::of(c) {
                CharacterClass::Lower => profile.has_lower = true,
                CharacterClass::Upper => profile.has_upper = true,
                CharacterClass::Digit => profile.has_digit = true,
                CharacterClass::Special => profile.has_special = true,
            }
        }
        profile.possible_charset_size = CharacterClass::ALL
            .iter()
            .filter(|class| profile.has(**class))
            .map(|class| class.alphabet_size())
            .sum();
        profile
    }

    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.has_lower,
            CharacterClass::Upper => self.has_upper,
            CharacterClass::Digit => self.has_digit,
            CharacterClass::Special => self.has_special,
        }
    }

    /// Number of classes present (0-4)
    pub fn class_count(&self) -> usize {
        CharacterClass::ALL.iter().filter(|c| self.has(**c)).count()
    }
}
