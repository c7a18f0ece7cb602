//! Vulnerability and attack-vector classification

use crate::detector::CharacterProfile;
use crate::{AttackVector, Vulnerability};

/// Passwords shorter than this are flagged as too short
pub const MIN_LENGTH: usize = 8;

pub struct Classifier;

impl Classifier {
    /// Findings in check order; each check fires independently.
    pub fn vulnerabilities(
        profile: &CharacterProfile,
        matches_common_pattern: bool,
    ) -> Vec<Vulnerability> {
        let checks = [
            (profile.length < MIN_LENGTH, Vulnerability::TooShort),
            (!profile.has_lower, Vulnerability::NoLowercase),
            (!profile.has_upper, Vulnerability::NoUppercase),
            (!profile.has_digit, Vulnerability::NoNumbers),
            (!profile.has_special, Vulnerability::NoSpecialCharacters),
            (matches_common_pattern, Vulnerability::CommonPattern),
        ];
        checks
            .into_iter()
            .filter(|(triggered, _)| *triggered)
            .map(|(_, vulnerability)| vulnerability)
            .collect()
    }

    /// Exactly one tier applies for a given score.
    pub fn attack_vectors(score: u8) -> Vec<AttackVector> {
        if score < 30 {
            vec![AttackVector::BruteForce, AttackVector::Dictionary]
        } else if score < 60 {
            vec![
                AttackVector::DictionaryWithSubstitutions,
                AttackVector::Hybrid,
            ]
        } else if score < 80 {
            vec![AttackVector::AdvancedHybrid]
        } else {
            vec![]
        }
    }
}
