//! Confidence scoring for skill candidates.
//!
//! Additive, total, never negative. Thresholds in `ranking::Profile` assume this
//! exact scale:
//!
//! | Signal | Points |
//! |---|---|
//! | exact (case-sensitive) dictionary label | 3 |
//! | first character uppercase | 2 |
//! | contains `.` | 1 |
//! | occurs more than once in the text (any case, substring) | 2 |
//! | directly next to an experience keyword, one space apart | 1 |

use serde::{Deserialize, Serialize};

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::text::WorkingText;

pub const DICTIONARY_POINTS: u32 = 3;
pub const CAPITALIZED_POINTS: u32 = 2;
pub const DOTTED_POINTS: u32 = 1;
pub const REPEATED_POINTS: u32 = 2;
pub const NEAR_CUE_POINTS: u32 = 1;

/// Experience keywords checked for direct adjacency.
///
/// Only "keyword label" / "label keyword" with a single space counts, so this
/// rarely fires on real sentences. It is kept as a weak additive signal.
pub const CUE_KEYWORDS: &[&str] = &[
    "kinh nghiệm",
    "năm",
    "thành thạo",
    "sử dụng",
    "experience",
    "years",
];

/// Which scoring signals fired for one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub in_dictionary: bool,
    pub capitalized: bool,
    pub dotted: bool,
    pub repeated: bool,
    pub near_cue: bool,
}

impl ScoreBreakdown {
    pub fn evaluate(label: &str, text: &WorkingText, vocabulary: &Vocabulary) -> Self {
        let label_lower = label.to_lowercase();
        Self {
            in_dictionary: vocabulary.contains(label),
            capitalized: label.chars().next().is_some_and(char::is_uppercase),
            dotted: label.contains('.'),
            repeated: is_repeated(&label_lower, text.lower()),
            near_cue: is_near_cue(&label_lower, text.lower()),
        }
    }

    pub fn total(&self) -> u32 {
        [
            (self.in_dictionary, DICTIONARY_POINTS),
            (self.capitalized, CAPITALIZED_POINTS),
            (self.dotted, DOTTED_POINTS),
            (self.repeated, REPEATED_POINTS),
            (self.near_cue, NEAR_CUE_POINTS),
        ]
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, points)| points)
        .sum()
    }
}

/// Scores `label` against the full working text.
pub fn score_candidate(label: &str, text: &WorkingText, vocabulary: &Vocabulary) -> u32 {
    ScoreBreakdown::evaluate(label, text, vocabulary).total()
}

fn is_repeated(label_lower: &str, text_lower: &str) -> bool {
    !label_lower.is_empty() && text_lower.matches(label_lower).nth(1).is_some()
}

fn is_near_cue(label_lower: &str, text_lower: &str) -> bool {
    CUE_KEYWORDS.iter().any(|keyword| {
        text_lower.contains(&format!("{keyword} {label_lower}"))
            || text_lower.contains(&format!("{label_lower} {keyword}"))
    })
}
