use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::generators::CandidateGenerator;
use crate::extraction::text::{CandidateSet, WorkingText};

/// Bilingual phrases that usually precede a skill name.
pub const CUE_PHRASES: &[&str] = &[
    "kinh nghiệm",
    "sử dụng",
    "thành thạo",
    "am hiểu",
    "hiểu biết",
    "làm việc với",
    "có khả năng",
    "experience with",
    "experience in",
    "proficient in",
    "skilled in",
    "knowledge of",
];

/// One matcher per cue phrase: the phrase (any case), then the first
/// capitalized token before the clause ends at a period.
static CUE_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CUE_PHRASES
        .iter()
        .map(|phrase| {
            let pattern = format!(r"(?i:{})[^.]*?([A-Z][A-Za-z0-9.+#]+)", regex::escape(phrase));
            Regex::new(&pattern).expect("Invalid regex")
        })
        .collect()
});

/// Narrow-precision companion to `LocalizedPatterns`: requires both a cue
/// phrase and capitalization.
pub struct CuePhrases;

impl CandidateGenerator for CuePhrases {
    fn name(&self) -> &'static str {
        "cue_phrases"
    }

    fn generate(&self, text: &WorkingText, _vocabulary: &Vocabulary) -> Vec<String> {
        let mut found = CandidateSet::new();
        for matcher in CUE_MATCHERS.iter() {
            for caps in matcher.captures_iter(text.raw()) {
                if let Some(skill) = caps.get(1).map(|m| m.as_str().trim_end_matches('.')) {
                    if skill.chars().count() > 2 {
                        found.insert(skill);
                    }
                }
            }
        }
        found.into_vec()
    }
}
