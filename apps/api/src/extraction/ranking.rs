//! Aggregation of generator output into one ranked, deduplicated skill list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::scoring::score_candidate;
use crate::extraction::text::WorkingText;

/// Precision/recall trade-off for one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub min_score: u32,
    pub max_count: usize,
}

impl Profile {
    /// Used during live extraction.
    pub const QUICK: Profile = Profile {
        min_score: 2,
        max_count: 10,
    };

    /// Short, high-confidence list.
    pub const STRICT: Profile = Profile {
        min_score: 4,
        max_count: 8,
    };

    pub fn custom(min_score: u32, max_count: usize) -> Self {
        Self {
            min_score,
            max_count,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::QUICK
    }
}

/// A deduplicated candidate with its confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub label: String,
    pub score: u32,
}

/// Pools candidates from every generator and returns the top entries for `profile`.
///
/// Algorithm:
/// 1. Trim each candidate; drop it if one character or less
/// 2. Re-case to the dictionary label when a case-insensitive lookup succeeds
/// 3. Collapse by lowercase identity; each surface form is scored once, the
///    entry keeps the best-scoring form (first seen on ties)
/// 4. Drop entries below `min_score`
/// 5. Stable sort by score descending (first-encounter order breaks ties)
/// 6. Truncate to `max_count`
pub fn rank_candidates<I, S>(
    candidates: I,
    text: &WorkingText,
    vocabulary: &Vocabulary,
    profile: Profile,
) -> Vec<ScoredCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<ScoredCandidate> = Vec::new();
    let mut by_identity: HashMap<String, usize> = HashMap::new();
    let mut scored_forms: HashMap<String, u32> = HashMap::new();

    for candidate in candidates {
        let trimmed = candidate.as_ref().trim();
        if trimmed.chars().count() <= 1 {
            continue;
        }
        let label = vocabulary.lookup(trimmed).unwrap_or(trimmed);

        let score = match scored_forms.get(label) {
            Some(&score) => score,
            None => {
                let score = score_candidate(label, text, vocabulary);
                scored_forms.insert(label.to_string(), score);
                score
            }
        };

        match by_identity.get(&label.to_lowercase()) {
            Some(&idx) => {
                let entry = &mut entries[idx];
                if score > entry.score {
                    entry.label = label.to_string();
                    entry.score = score;
                }
            }
            None => {
                by_identity.insert(label.to_lowercase(), entries.len());
                entries.push(ScoredCandidate {
                    label: label.to_string(),
                    score,
                });
            }
        }
    }

    entries.retain(|entry| entry.score >= profile.min_score);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(profile.max_count);
    entries
}
