//! Analysis engine - runs the detection, scoring and suggestion pipeline

use crate::config::{AnalyzerConfig, ConfigError};
use crate::detector::{CharacterProfile, PatternDetector};
use crate::suggestions::{RandomSource, SuggestionGenerator, ThreadRandom};
use crate::AnalysisResult;

use super::entropy::round2;
use super::{Classifier, EntropyEstimator, ScoreCalculator};

/// Main analysis engine. Holds only tuning constants, so one instance can be
/// shared and reused for any number of passwords.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    estimator: EntropyEstimator,
    generator: SuggestionGenerator,
}

impl PasswordAnalyzer {
    /// Create an analyzer with the default guess rate and mutation probability
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer tuned by a config. Rejects a non-positive guess rate
    /// or a mutation probability outside `0..=1`.
    pub fn with_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            estimator: EntropyEstimator::new(config.guesses_per_second),
            generator: SuggestionGenerator::new()
                .with_mutation_probability(config.mutation_probability),
        })
    }

    /// Analyze a password; suggestion variations use the thread-local RNG.
    pub fn analyze(&self, password: &str) -> AnalysisResult {
        let mut rng = ThreadRandom::thread();
        self.analyze_with_rng(password, &mut rng)
    }

    /// Analyze a password with a caller-supplied random source.
    /// Everything except `suggestions[1..]` is independent of `rng`.
    pub fn analyze_with_rng(&self, password: &str, rng: &mut dyn RandomSource) -> AnalysisResult {
        // The password itself must never reach the logs.
        let profile = CharacterProfile::detect(password);
        let patterns = PatternDetector::new(password);
        let matched_patterns = patterns.matched_patterns();
        let matches_common_pattern = !matched_patterns.is_empty();
        log::trace!(
            "length {} charset {} patterns {:?}",
            profile.length,
            profile.possible_charset_size,
            matched_patterns
        );

        let entropy_bits = EntropyEstimator::entropy_bits(&profile);
        let crack_time = self.estimator.crack_time(&profile);

        let breakdown =
            ScoreCalculator::calculate_breakdown(&profile, entropy_bits, matches_common_pattern);
        let score = ScoreCalculator::calculate(&breakdown);

        let vulnerabilities = Classifier::vulnerabilities(&profile, matches_common_pattern);
        let attack_vectors = Classifier::attack_vectors(score);
        let suggestions = self.generator.generate(password, &vulnerabilities, rng);

        log::debug!(
            "analyzed password: score {} entropy {:.2} bits, crack time {}, {} findings",
            score,
            entropy_bits,
            crack_time,
            vulnerabilities.len()
        );

        AnalysisResult {
            score,
            entropy_bits: round2(entropy_bits),
            crack_time,
            vulnerabilities,
            attack_vectors,
            suggestions,
            breakdown,
            matched_patterns: matched_patterns.into_iter().map(String::from).collect(),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::suggestions::{SeededRandom, SPECIAL_CHARACTERS};
    use proptest::prelude::*;

    /// Strings built from letters, digits, specials and a few non-ASCII characters.
    fn arbitrary_password() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                'a', 'e', 'o', 's', 'z', 'A', 'E', 'O', 'S', 'Z', '0', '1', '9', '!', '$', ' ',
                '_', 'é', 'ß', '日',
            ]),
            0..24,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn score_is_bounded(ref password in ".{0,64}") {
            let result = PasswordAnalyzer::new().analyze(password);
            prop_assert!(result.score <= 100);
            prop_assert!(result.entropy_bits.is_finite());
            prop_assert!(result.crack_time.value.is_finite());
            prop_assert!(result.crack_time.seconds.is_finite());
        }

        #[test]
        fn always_three_suggestions(ref password in arbitrary_password(), seed in any::<u64>()) {
            let mut rng = SeededRandom::seeded(seed);
            let result = PasswordAnalyzer::new().analyze_with_rng(password, &mut rng);
            prop_assert_eq!(result.suggestions.len(), 3);
            let base = &result.suggestions[0];
            for variation in &result.suggestions[1..] {
                prop_assert_ne!(variation, base);
                let same_length = variation.chars().count() == base.chars().count();
                if same_length {
                    // Each changed character is a case flip or a digit turned special
                    for (original, varied) in base.chars().zip(variation.chars()) {
                        if original == varied {
                            continue;
                        }
                        let flipped = original.is_ascii_alphabetic()
                            && varied == (original as u8 ^ 0x20) as char;
                        let swapped = original.is_ascii_digit()
                            && SPECIAL_CHARACTERS.contains(&varied);
                        prop_assert!(flipped || swapped, "{:?} -> {:?}", original, varied);
                    }
                } else {
                    // Fallback: base + one special + 0..100
                    let suffix = variation.strip_prefix(base.as_str()).unwrap();
                    let mut rest = suffix.chars();
                    prop_assert!(SPECIAL_CHARACTERS.contains(&rest.next().unwrap()));
                    prop_assert!(rest.as_str().parse::<u8>().unwrap() < 100);
                }
            }
        }

        #[test]
        fn non_random_fields_are_deterministic(ref password in arbitrary_password()) {
            let analyzer = PasswordAnalyzer::new();
            let first = analyzer.analyze(password);
            let second = analyzer.analyze(password);
            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(first.entropy_bits, second.entropy_bits);
            prop_assert_eq!(first.crack_time, second.crack_time);
            prop_assert_eq!(&first.vulnerabilities, &second.vulnerabilities);
            prop_assert_eq!(&first.attack_vectors, &second.attack_vectors);
            prop_assert_eq!(&first.suggestions[0], &second.suggestions[0]);
        }

        #[test]
        fn findings_empty_only_when_nothing_fires(ref password in arbitrary_password()) {
            let result = PasswordAnalyzer::new().analyze(password);
            let profile = CharacterProfile::detect(password);
            let clean = profile.length >= 8
                && profile.class_count() == 4
                && result.matched_patterns.is_empty();
            prop_assert_eq!(result.vulnerabilities.is_empty(), clean);
        }
    }
}
