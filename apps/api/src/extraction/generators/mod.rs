//! Candidate generators: independent heuristics that propose skill strings from the working text.
//!
//! Each generator is a pure function of (text, vocabulary snapshot). The engine
//! iterates over a configured list of `Box<dyn CandidateGenerator>`, so adding or
//! removing a heuristic never touches the aggregator.

pub mod capitalized;
pub mod cue_phrases;
pub mod dictionary_matcher;
pub mod localized;

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::text::WorkingText;

pub use capitalized::CapitalizedTokens;
pub use cue_phrases::CuePhrases;
pub use dictionary_matcher::DictionaryMatcher;
pub use localized::LocalizedPatterns;

/// A skill-candidate heuristic.
///
/// Output is deduplicated by exact string and kept in first-encounter order.
pub trait CandidateGenerator: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    fn generate(&self, text: &WorkingText, vocabulary: &Vocabulary) -> Vec<String>;
}

/// The four stock generators, in the order their candidates are pooled.
pub fn default_generators() -> Vec<Box<dyn CandidateGenerator>> {
    vec![
        Box::new(DictionaryMatcher),
        Box::new(CapitalizedTokens),
        Box::new(LocalizedPatterns),
        Box::new(CuePhrases),
    ]
}
