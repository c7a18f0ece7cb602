//! Score calculation for password strength

use crate::detector::CharacterProfile;
use crate::ScoreBreakdown;

/// Cap for each of the length, variety and entropy terms
const MAX_TERM_POINTS: f64 = 25.0;
const POINTS_PER_CHARACTER: usize = 2;
const LETTER_CASE_POINTS: u8 = 6;
const DIGIT_POINTS: u8 = 6;
const SPECIAL_POINTS: u8 = 7;
/// Deducted when the password matches a common pattern
pub const PATTERN_PENALTY: f64 = 25.0;

/// Calculator for password strength scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// `min(25, length * 2)`
    pub fn length_points(length: usize) -> u8 {
        length.saturating_mul(POINTS_PER_CHARACTER).min(25) as u8
    }

    pub fn variety_points(profile: &CharacterProfile) -> u8 {
        let mut points = 0;
        if profile.has_lower {
            points += LETTER_CASE_POINTS;
        }
        if profile.has_upper {
            points += LETTER_CASE_POINTS;
        }
        if profile.has_digit {
            points += DIGIT_POINTS;
        }
        if profile.has_special {
            points += SPECIAL_POINTS;
        }
        points
    }

    /// Raw entropy bits capped at 25. Not rescaled: 17 bits contribute 17 points.
    pub fn entropy_points(entropy_bits: f64) -> f64 {
        entropy_bits.clamp(0.0, MAX_TERM_POINTS)
    }

    /// Build the breakdown. The penalty is applied to the sum of the three
    /// positive terms and floors at zero on its own.
    pub fn calculate_breakdown(
        profile: &CharacterProfile,
        entropy_bits: f64,
        matches_common_pattern: bool,
    ) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown {
            length: Self::length_points(profile.length),
            variety: Self::variety_points(profile),
            entropy: Self::entropy_points(entropy_bits),
            pattern_penalty: 0.0,
        };
        if matches_common_pattern {
            breakdown.pattern_penalty = breakdown.subtotal().min(PATTERN_PENALTY);
        }
        breakdown
    }

    /// Final 0-100 score: penalize, clamp, then floor to an integer.
    /// Flooring keeps tier comparisons identical to the unrounded value.
    pub fn calculate(breakdown: &ScoreBreakdown) -> u8 {
        let score = (breakdown.subtotal() - breakdown.pattern_penalty).max(0.0);
        score.clamp(0.0, 100.0).floor() as u8
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::analyzer::EntropyEstimator;
    use proptest::prelude::*;

    fn contributions(password: &str) -> (u8, f64) {
        let profile = CharacterProfile::detect(password);
        let bits = EntropyEstimator::entropy_bits(&profile);
        (
            ScoreCalculator::length_points(profile.length),
            ScoreCalculator::entropy_points(bits),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn longer_password_never_scores_less(ref password in "[a-zA-Z0-9!@#]{1,30}", extra in 0usize..10) {
            // Repeat the first character so the set of classes stays fixed
            let first = password.chars().next().unwrap();
            let longer: String = password.chars().chain(std::iter::repeat(first).take(extra)).collect();
            let (short_len, short_entropy) = contributions(password);
            let (long_len, long_entropy) = contributions(&longer);
            prop_assert!(long_len >= short_len);
            prop_assert!(long_entropy >= short_entropy);
        }

        #[test]
        fn penalty_is_25_or_floors(ref password in "[a-zA-Z0-9!@#]{0,30}") {
            let profile = CharacterProfile::detect(password);
            let bits = EntropyEstimator::entropy_bits(&profile);
            let plain = ScoreCalculator::calculate(
                &ScoreCalculator::calculate_breakdown(&profile, bits, false));
            let penalized = ScoreCalculator::calculate(
                &ScoreCalculator::calculate_breakdown(&profile, bits, true));
            if plain >= 25 {
                prop_assert_eq!(plain - penalized, 25);
            } else {
                prop_assert_eq!(penalized, 0);
            }
        }
    }
}
