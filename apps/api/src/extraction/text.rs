//! Working text and small string helpers shared by the generators and the scorer.

use std::collections::HashSet;

/// The single input every generator runs over: the job description followed by
/// each requirement line, separated by spaces.
///
/// The lowercased copy is computed once per extraction call so that
/// case-insensitive lookups (dictionary hits, repetition counts, cue adjacency)
/// do not re-fold the whole text for every candidate.
#[derive(Debug, Clone)]
pub struct WorkingText {
    raw: String,
    lower: String,
}

impl WorkingText {
    pub fn new(description: &str, requirements: &[String]) -> Self {
        let raw = format!("{} {}", description, requirements.join(" "));
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        Self { raw, lower }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `haystack[start..end]` is not glued to a neighbouring word character.
///
/// Unlike a regex `\b`, this also works for labels that begin or end with
/// punctuation (`.NET`, `C#`, `C++`).
pub fn is_whole_word(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Insertion-ordered set of candidate strings produced by one generator.
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the exact string was already present.
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        let candidate = candidate.into();
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.order.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}
