use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::generators::CandidateGenerator;
use crate::extraction::text::{CandidateSet, WorkingText};

/// `React`, `TypeScript`, `Node.js`: an uppercase ASCII letter, letters/digits,
/// and at most one dotted suffix.
static CAPITALIZED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z0-9]*(?:\.[a-zA-Z]+)?\b").expect("Invalid regex")
});

/// Capitalized words that are never skills on their own.
const STOP_WORDS: &[&str] = &[
    // function words that start sentences
    "The", "This", "That", "These", "Those", "And", "Or", "But", "For", "With",
    "From", "To", "In", "On", "At", "By", "About", "As", "Into", "Through",
    "During", "Before", "After", "Above", "Below", "Between", "Under", "Since",
    "Our", "You", "Your", "They", "Their", "Are", "Will", "Must", "Should",
    // Vietnamese sentence openers the ASCII token pattern can still pick up
    "Kinh", "Trong", "Khi", "Cho", "Theo", "Tham", "Nhanh",
    // the same openers typed without diacritics
    "Yeu", "Cau", "Thanh", "Thao", "Chung", "Toi", "Can", "Nghiem", "Uu", "Tien",
    // roles
    "Team", "Director", "Manager", "Developer", "Engineer", "Designer", "Leader",
    "Intern", "Senior", "Junior", "Staff",
    // generic nouns
    "Company", "Project", "System", "Application", "Software", "Hardware",
    "Communication", "Skills", "Experience", "Knowledge", "Requirements",
];

/// Lower-precision generator; the scorer compensates.
pub struct CapitalizedTokens;

impl CandidateGenerator for CapitalizedTokens {
    fn name(&self) -> &'static str {
        "capitalized"
    }

    fn generate(&self, text: &WorkingText, _vocabulary: &Vocabulary) -> Vec<String> {
        let mut found = CandidateSet::new();
        for token in CAPITALIZED_TOKEN.find_iter(text.raw()).map(|m| m.as_str()) {
            if token.chars().count() > 2
                && !STOP_WORDS.contains(&token)
                && !token.chars().all(|c| c.is_ascii_digit())
            {
                found.insert(token);
            }
        }
        found.into_vec()
    }
}
