//! Suggestions module: stronger replacement passwords

pub mod generator;
pub mod random;

pub use generator::{SuggestionGenerator, MUTATION_PROBABILITY, SPECIAL_CHARACTERS};
pub use random::{RandomSource, RngSource, SeededRandom, SequenceRandom, ThreadRandom};
