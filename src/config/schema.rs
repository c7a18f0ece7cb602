//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::GUESSES_PER_SECOND;
use crate::suggestions::MUTATION_PROBABILITY;
use crate::{CrackTime, TimeUnit};

/// Semantic problems in an otherwise well-formed config
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("guessesPerSecond must be a positive finite number, got {0}")]
    InvalidGuessRate(f64),
    #[error("mutationProbability must be between 0 and 1, got {0}")]
    InvalidMutationProbability(f64),
    #[error("maxCrackTime.value must be a non-negative finite number, got {0}")]
    InvalidCrackTime(f64),
}

/// Maximum acceptable crack time chosen by the caller.
///
/// Analysis never reads this; callers use it to decide whether a result is
/// good enough for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackTimeThreshold {
    pub value: f64,
    pub unit: TimeUnit,
}

impl Default for CrackTimeThreshold {
    /// One year, expressed in days
    fn default() -> Self {
        Self {
            value: 365.0,
            unit: TimeUnit::Days,
        }
    }
}

impl CrackTimeThreshold {
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub fn in_seconds(&self) -> f64 {
        self.value * self.unit.in_seconds()
    }

    /// True when the estimate takes at least as long as the threshold
    pub fn is_satisfied_by(&self, crack_time: &CrackTime) -> bool {
        crack_time.seconds >= self.in_seconds()
    }
}

/// Root config structure for .pwguardrc.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Adversary guess rate used for crack-time estimates. Default: 1e10
    #[serde(default = "default_guesses_per_second")]
    pub guesses_per_second: f64,

    /// Per-character mutation chance for suggestion variations. Default: 0.3
    #[serde(default = "default_mutation_probability")]
    pub mutation_probability: f64,

    /// Caller-side acceptance threshold. Default: 365 days
    #[serde(default)]
    pub max_crack_time: CrackTimeThreshold,
}

fn default_guesses_per_second() -> f64 {
    GUESSES_PER_SECOND
}

fn default_mutation_probability() -> f64 {
    MUTATION_PROBABILITY
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            guesses_per_second: GUESSES_PER_SECOND,
            mutation_probability: MUTATION_PROBABILITY,
            max_crack_time: CrackTimeThreshold::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.guesses_per_second.is_finite() || self.guesses_per_second <= 0.0 {
            return Err(ConfigError::InvalidGuessRate(self.guesses_per_second));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        let max = self.max_crack_time.value;
        if !max.is_finite() || max < 0.0 {
            return Err(ConfigError::InvalidCrackTime(max));
        }
        Ok(())
    }

    /// Override the guess rate (e.g. from a command-line flag in the caller)
    pub fn with_guesses_per_second(mut self, rate: f64) -> Self {
        self.guesses_per_second = rate;
        self
    }

    pub fn with_max_crack_time(mut self, threshold: CrackTimeThreshold) -> Self {
        self.max_crack_time = threshold;
        self
    }
}
