//! Detector module for character classes and weak-password patterns

pub mod charset;
pub mod patterns;

pub use charset::{CharacterClass, CharacterProfile};
pub use patterns::{CommonPattern, PatternDetector, PatternKind};
