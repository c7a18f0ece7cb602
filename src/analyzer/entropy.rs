//! Entropy and crack-time estimation.
//!
//! The model is uniform random guessing over the observed charset: an attacker
//! finds the password after searching half the space on average.

use crate::detector::CharacterProfile;
use crate::{CrackTime, TimeUnit};

/// Default adversary guess rate (a well-equipped offline attacker).
pub const GUESSES_PER_SECOND: f64 = 1e10;

/// Estimates entropy and average crack time for a given guess rate
#[derive(Debug, Clone, Copy)]
pub struct EntropyEstimator {
    guesses_per_second: f64,
}

impl EntropyEstimator {
    pub fn new(guesses_per_second: f64) -> Self {
        Self { guesses_per_second }
    }

    pub fn guesses_per_second(&self) -> f64 {
        self.guesses_per_second
    }

    /// `length * log2(charset)`, or 0 for the empty password.
    pub fn entropy_bits(profile: &CharacterProfile) -> f64 {
        if profile.length == 0 || profile.possible_charset_size == 0 {
            return 0.0;
        }
        profile.length as f64 * (profile.possible_charset_size as f64).log2()
    }

    /// Average seconds to search half of `charset^length`, or 0 for the empty
    /// password. Saturates at `f64::MAX` when the search space overflows.
    pub fn seconds_to_crack(&self, profile: &CharacterProfile) -> f64 {
        if profile.length == 0 || profile.possible_charset_size == 0 {
            return 0.0;
        }
        let exponent = i32::try_from(profile.length).unwrap_or(i32::MAX);
        let combinations = (profile.possible_charset_size as f64).powi(exponent);
        let seconds = combinations / (2.0 * self.guesses_per_second);
        if seconds.is_finite() {
            seconds
        } else {
            f64::MAX
        }
    }

    pub fn crack_time(&self, profile: &CharacterProfile) -> CrackTime {
        crack_time_from_seconds(self.seconds_to_crack(profile))
    }
}

impl Default for EntropyEstimator {
    fn default() -> Self {
        Self::new(GUESSES_PER_SECOND)
    }
}

/// Pick the display unit. Each boundary is strict: exactly 60s is minutes.
pub fn select_unit(seconds: f64) -> TimeUnit {
    if seconds < 60.0 {
        TimeUnit::Seconds
    } else if seconds < 3_600.0 {
        TimeUnit::Minutes
    } else if seconds < 86_400.0 {
        TimeUnit::Hours
    } else if seconds < 2_592_000.0 {
        TimeUnit::Days
    } else if seconds < 31_536_000.0 {
        TimeUnit::Months
    } else {
        TimeUnit::Years
    }
}

pub fn crack_time_from_seconds(seconds: f64) -> CrackTime {
    let unit = select_unit(seconds);
    CrackTime {
        value: round2(seconds / unit.in_seconds()),
        unit,
        seconds,
    }
}

/// Round to 2 decimal places. Values too large to carry a fraction are returned as-is.
pub fn round2(value: f64) -> f64 {
    if value.abs() >= 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}
