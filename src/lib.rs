//! pwguard: Password Strength Analyzer
//!
//! This library estimates how resistant a password is to guessing attacks and
//! produces actionable suggestions for a stronger replacement. Analysis is a
//! pure, synchronous function of the password; nothing is stored or sent
//! anywhere.
//!
//! ```
//! let result = pwguard::analyze("password");
//! assert!(result.score < 30);
//! assert_eq!(result.suggestions.len(), 3);
//! ```

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod suggestions;

use serde::{Deserialize, Serialize};

pub use analyzer::PasswordAnalyzer;

/// Analyze a password with the default analyzer settings.
pub fn analyze(password: &str) -> AnalysisResult {
    PasswordAnalyzer::new().analyze(password)
}

/// The main result of analyzing a password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall strength score (0-100)
    pub score: u8,
    /// Estimated entropy in bits, rounded to 2 decimals
    pub entropy_bits: f64,
    /// Estimated average time to brute-force the password
    pub crack_time: CrackTime,
    /// Weaknesses found, in check order
    pub vulnerabilities: Vec<Vulnerability>,
    /// Attack techniques the password is likely to fall to
    pub attack_vectors: Vec<AttackVector>,
    /// Three candidate replacement passwords
    pub suggestions: Vec<String>,
    /// Per-term contributions behind `score`
    pub breakdown: ScoreBreakdown,
    /// Names of every weak-password pattern the password matched
    pub matched_patterns: Vec<String>,
}

impl AnalysisResult {
    /// Strength label for the score
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    pub fn has_vulnerability(&self, vulnerability: Vulnerability) -> bool {
        self.vulnerabilities.contains(&vulnerability)
    }
}

/// Score breakdown by term. Length, variety and entropy are each worth up to 25.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// `min(25, length * 2)`
    pub length: u8,
    /// 6 per letter case and digits present, 7 for special characters
    pub variety: u8,
    /// Raw entropy bits capped at 25 (not normalized)
    pub entropy: f64,
    /// Points actually removed by the common-pattern penalty
    pub pattern_penalty: f64,
}

impl ScoreBreakdown {
    /// Sum of the three positive terms, before the penalty
    pub fn subtotal(&self) -> f64 {
        self.length as f64 + self.variety as f64 + self.entropy
    }
}

/// Strength label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Strength::Weak,
            30..=59 => Strength::Fair,
            60..=79 => Strength::Good,
            _ => Strength::Strong,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Fair => write!(f, "Fair"),
            Strength::Good => write!(f, "Good"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Estimated time to crack, expressed in the largest fitting unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackTime {
    /// Magnitude in `unit`, rounded to 2 decimals
    pub value: f64,
    pub unit: TimeUnit,
    /// Unrounded estimate in seconds (always finite)
    pub seconds: f64,
}

impl std::fmt::Display for CrackTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Time units used for crack-time display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// All units, smallest first
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Length of one unit in seconds (a month is 30 days, a year 365 days)
    pub fn in_seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Months => 2_592_000.0,
            TimeUnit::Years => 31_536_000.0,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "seconds"),
            TimeUnit::Minutes => write!(f, "minutes"),
            TimeUnit::Hours => write!(f, "hours"),
            TimeUnit::Days => write!(f, "days"),
            TimeUnit::Months => write!(f, "months"),
            TimeUnit::Years => write!(f, "years"),
        }
    }
}

/// A weakness found in the password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vulnerability {
    /// Fewer than 8 characters
    TooShort,
    NoLowercase,
    NoUppercase,
    NoNumbers,
    NoSpecialCharacters,
    /// Matched at least one entry of the weak-pattern catalogue
    CommonPattern,
}

impl Vulnerability {
    /// Human-readable finding
    pub fn message(&self) -> &'static str {
        match self {
            Vulnerability::TooShort => "Too short (less than 8 characters)",
            Vulnerability::NoLowercase => "No lowercase letters",
            Vulnerability::NoUppercase => "No uppercase letters",
            Vulnerability::NoNumbers => "No numbers",
            Vulnerability::NoSpecialCharacters => "No special characters",
            Vulnerability::CommonPattern => "Contains common patterns or dictionary words",
        }
    }
}

impl std::fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Cracking technique attributed to a password by score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackVector {
    BruteForce,
    Dictionary,
    DictionaryWithSubstitutions,
    /// Dictionary words combined with brute-forced affixes
    Hybrid,
    AdvancedHybrid,
}

impl AttackVector {
    pub fn message(&self) -> &'static str {
        match self {
            AttackVector::BruteForce => "Brute force attack",
            AttackVector::Dictionary => "Dictionary attack",
            AttackVector::DictionaryWithSubstitutions => {
                "Dictionary attack with common substitutions"
            }
            AttackVector::Hybrid => "Hybrid attack (dictionary + brute force)",
            AttackVector::AdvancedHybrid => "Advanced hybrid attacks",
        }
    }
}

impl std::fmt::Display for AttackVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
