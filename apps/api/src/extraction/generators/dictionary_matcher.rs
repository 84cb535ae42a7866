use tracing::trace;

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::generators::CandidateGenerator;
use crate::extraction::text::{is_whole_word, CandidateSet, WorkingText};

/// Proposes every canonical label that occurs as a whole word in the text,
/// followed by every pattern hit (re-cased through the dictionary).
///
/// Highest-precision generator: anchored to known vocabulary.
pub struct DictionaryMatcher;

impl CandidateGenerator for DictionaryMatcher {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn generate(&self, text: &WorkingText, vocabulary: &Vocabulary) -> Vec<String> {
        let mut found = CandidateSet::new();
        let haystack = text.lower();

        for (label, lower) in vocabulary.entries() {
            let hit = haystack
                .match_indices(lower)
                .any(|(start, m)| is_whole_word(haystack, start, start + m.len()));
            if hit {
                found.insert(label);
            }
        }

        for label in vocabulary.match_patterns(text.raw()) {
            found.insert(label);
        }

        trace!("dictionary matcher proposed {:?}", found);
        found.into_vec()
    }
}
