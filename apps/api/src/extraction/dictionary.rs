//! Skill dictionary: canonical skill labels plus patterns for irregularly tokenized names.
//!
//! The dictionary is read-mostly and shared across threads. Readers take a cheap
//! `Arc<Vocabulary>` snapshot; `add_label`/`add_labels` build a new vocabulary
//! and swap it in under the write lock, so a reader sees either the whole batch
//! or none of it.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::text::{is_whole_word, CandidateSet};

/// Built-in vocabulary, embedded at compile time.
pub const BUILTIN_DICTIONARY: &str = include_str!("../../data/skills.toml");

static SHARED: LazyLock<Arc<SkillDictionary>> = LazyLock::new(|| {
    Arc::new(SkillDictionary::builtin().expect("built-in skill dictionary is invalid"))
});

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid skill pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Data file format
// ────────────────────────────────────────────────────────────────────────────

/// A named extraction pattern as written in the data file.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub regex: String,
}

/// Raw dictionary contents as read from a TOML data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionarySource {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

impl DictionarySource {
    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::parse(BUILTIN_DICTIONARY)
    }

    pub fn parse(data: &str) -> Result<Self, DictionaryError> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let data = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary snapshot
// ────────────────────────────────────────────────────────────────────────────

/// A compiled pattern. Hits are accepted only at whole-word positions.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    pub name: String,
    regex: Regex,
}

impl SkillPattern {
    pub fn compile(spec: &PatternSpec) -> Result<Self, DictionaryError> {
        let regex = RegexBuilder::new(&spec.regex)
            .case_insensitive(true)
            .build()
            .map_err(|source| DictionaryError::InvalidPattern {
                name: spec.name.clone(),
                source,
            })?;
        Ok(Self {
            name: spec.name.clone(),
            regex,
        })
    }

    /// Raw matched substrings, in text order.
    pub fn find_all<'s, 't: 's>(&'s self, text: &'t str) -> impl Iterator<Item = &'t str> + 's {
        self.regex
            .find_iter(text)
            .filter(move |m| is_whole_word(text, m.start(), m.end()))
            .map(|m| m.as_str())
    }
}

/// Immutable view of the dictionary at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    labels: Vec<String>,
    lowered: Vec<String>,
    exact: HashSet<String>,
    by_lower: HashMap<String, usize>,
    patterns: Vec<SkillPattern>,
}

impl Vocabulary {
    fn insert(&mut self, label: &str) -> bool {
        if self.exact.contains(label) {
            return false;
        }
        let lower = label.to_lowercase();
        self.by_lower
            .entry(lower.clone())
            .or_insert(self.labels.len());
        self.exact.insert(label.to_string());
        self.labels.push(label.to_string());
        self.lowered.push(lower);
        true
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, label: &str) -> bool {
        self.exact.contains(label)
    }

    /// Case-insensitive whole-phrase lookup. Returns the canonical casing.
    pub fn lookup(&self, candidate: &str) -> Option<&str> {
        self.by_lower
            .get(&candidate.to_lowercase())
            .map(|&idx| self.labels[idx].as_str())
    }

    /// Canonical labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `(canonical, lowercased)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .zip(self.lowered.iter())
            .map(|(label, lower)| (label.as_str(), lower.as_str()))
    }

    pub fn patterns(&self) -> &[SkillPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Runs every pattern over `text`, resolving each hit to its canonical label
    /// and falling back to the matched text when the label is unknown.
    pub fn match_patterns(&self, text: &str) -> Vec<String> {
        let mut found = CandidateSet::new();
        for pattern in &self.patterns {
            for hit in pattern.find_all(text) {
                let resolved = self.lookup(hit).unwrap_or(hit);
                found.insert(resolved);
            }
        }
        found.into_vec()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared dictionary
// ────────────────────────────────────────────────────────────────────────────

/// Process-wide, runtime-extensible skill dictionary.
///
/// Construct isolated instances for tests with [`SkillDictionary::builtin`] or
/// [`SkillDictionary::from_source`]; production wiring uses [`SkillDictionary::shared`].
#[derive(Debug, Default)]
pub struct SkillDictionary {
    current: RwLock<Arc<Vocabulary>>,
}

impl SkillDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::from_source(DictionarySource::builtin()?)
    }

    pub fn from_source(source: DictionarySource) -> Result<Self, DictionaryError> {
        let dictionary = Self::empty();
        dictionary.merge_source(source)?;
        Ok(dictionary)
    }

    /// The default instance shared by the free entry points and the service.
    pub fn shared() -> Arc<SkillDictionary> {
        Arc::clone(&SHARED)
    }

    pub fn snapshot(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.current.read())
    }

    pub fn lookup(&self, candidate: &str) -> Option<String> {
        self.snapshot().lookup(candidate).map(str::to_string)
    }

    pub fn match_patterns(&self, text: &str) -> Vec<String> {
        self.snapshot().match_patterns(text)
    }

    pub fn all_labels(&self) -> Vec<String> {
        self.snapshot().labels().to_vec()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn add_label(&self, label: &str) -> bool {
        self.add_labels([label]) == 1
    }

    /// Inserts new canonical labels; returns how many were not already present.
    pub fn add_labels<I, S>(&self, labels: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut guard = self.current.write();
        let mut next = Vocabulary::clone(&guard);
        let mut added = 0;
        for label in labels {
            let label = label.as_ref();
            if label.trim().is_empty() {
                warn!("Skipping blank skill label");
                continue;
            }
            if next.insert(label) {
                added += 1;
            }
        }
        if added > 0 {
            *guard = Arc::new(next);
            info!("Skill dictionary extended by {added} label(s), {} total", guard.len());
        }
        added
    }

    /// Adds every label and pattern from `source`. Patterns are compiled before
    /// anything is published, so an invalid pattern leaves the dictionary untouched.
    pub fn merge_source(&self, source: DictionarySource) -> Result<usize, DictionaryError> {
        let patterns = source
            .patterns
            .iter()
            .map(SkillPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut guard = self.current.write();
        let mut next = Vocabulary::clone(&guard);
        let added = source
            .labels
            .iter()
            .filter(|label| !label.trim().is_empty())
            .filter(|label| next.insert(label))
            .count();
        next.patterns.extend(patterns);
        *guard = Arc::new(next);
        Ok(added)
    }
}
