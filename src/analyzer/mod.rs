//! Analyzer module - password strength analysis engine

pub mod classifier;
pub mod engine;
pub mod entropy;
pub mod scoring;

pub use classifier::Classifier;
pub use engine::PasswordAnalyzer;
pub use entropy::{EntropyEstimator, GUESSES_PER_SECOND};
pub use scoring::ScoreCalculator;
