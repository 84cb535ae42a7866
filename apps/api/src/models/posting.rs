use serde::{Deserialize, Serialize};

use crate::extraction::SkillExtractor;

/// A scraped job posting as handed over by the crawl layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Structured skill tags, when the source page lists them.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Where a posting's skill list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Structured,
    Extracted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedSkills {
    pub skills: Vec<String>,
    pub source: SkillSource,
}

/// Uses the posting's own skill tags when it has any; otherwise runs the quick
/// extraction profile over description + requirements.
pub fn resolve_skills(posting: &JobPosting, extractor: &SkillExtractor) -> ResolvedSkills {
    let structured: Vec<String> = posting
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if !structured.is_empty() {
        return ResolvedSkills {
            skills: structured,
            source: SkillSource::Structured,
        };
    }

    ResolvedSkills {
        skills: extractor.extract_quick(&posting.description, &posting.requirements),
        source: SkillSource::Extracted,
    }
}
