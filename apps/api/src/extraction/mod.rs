// Skill Extraction Engine
// Implements: candidate generation, confidence scoring, dedup, ranked selection.
// Pure and synchronous: no I/O, safe to call from any thread.

pub mod dictionary;
pub mod generators;
pub mod handlers;
pub mod ranking;
pub mod scoring;
pub mod text;

use std::sync::Arc;

use tracing::debug;

use crate::extraction::dictionary::SkillDictionary;
use crate::extraction::generators::{default_generators, CandidateGenerator};
use crate::extraction::ranking::{rank_candidates, Profile, ScoredCandidate};
use crate::extraction::text::WorkingText;

/// Runs the configured generators over a job posting's text and ranks the pooled candidates.
pub struct SkillExtractor {
    dictionary: Arc<SkillDictionary>,
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl SkillExtractor {
    /// Extractor with the four stock generators.
    pub fn new(dictionary: Arc<SkillDictionary>) -> Self {
        Self::with_generators(dictionary, default_generators())
    }

    pub fn with_generators(
        dictionary: Arc<SkillDictionary>,
        generators: Vec<Box<dyn CandidateGenerator>>,
    ) -> Self {
        Self {
            dictionary,
            generators,
        }
    }

    /// Extractor over the process-wide shared dictionary.
    pub fn shared() -> Self {
        Self::new(SkillDictionary::shared())
    }

    pub fn dictionary(&self) -> &Arc<SkillDictionary> {
        &self.dictionary
    }

    /// Ranked labels for `profile`, highest score first.
    pub fn extract(&self, description: &str, requirements: &[String], profile: Profile) -> Vec<String> {
        self.extract_scored(description, requirements, profile)
            .into_iter()
            .map(|candidate| candidate.label)
            .collect()
    }

    /// Same as [`extract`](Self::extract) but keeps the scores for diagnostics.
    pub fn extract_scored(
        &self,
        description: &str,
        requirements: &[String],
        profile: Profile,
    ) -> Vec<ScoredCandidate> {
        let text = WorkingText::new(description, requirements);
        if text.is_blank() {
            return Vec::new();
        }

        // One snapshot for the whole call, so concurrent additions can't split it.
        let vocabulary = self.dictionary.snapshot();

        let mut pool = Vec::new();
        for generator in &self.generators {
            let candidates = generator.generate(&text, &vocabulary);
            debug!("{}: {} candidate(s)", generator.name(), candidates.len());
            pool.extend(candidates);
        }

        let ranked = rank_candidates(pool, &text, &vocabulary, profile);
        for candidate in &ranked {
            debug!("  - {} (score: {})", candidate.label, candidate.score);
        }
        debug!(
            "Selected {} skill(s) (min_score={}, max_count={})",
            ranked.len(),
            profile.min_score,
            profile.max_count
        );
        ranked
    }

    pub fn extract_quick(&self, description: &str, requirements: &[String]) -> Vec<String> {
        self.extract(description, requirements, Profile::QUICK)
    }

    pub fn extract_strict(&self, description: &str, requirements: &[String]) -> Vec<String> {
        self.extract(description, requirements, Profile::STRICT)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points over the shared dictionary
// ────────────────────────────────────────────────────────────────────────────

/// Quick profile (min score 2, at most 10 labels). Used when a posting has no
/// structured skill list.
pub fn extract_skills(description: &str, requirements: &[String]) -> Vec<String> {
    SkillExtractor::shared().extract_quick(description, requirements)
}

/// Strict profile (min score 4, at most 8 labels).
pub fn extract_skills_strict(description: &str, requirements: &[String]) -> Vec<String> {
    SkillExtractor::shared().extract_strict(description, requirements)
}

/// Grows the shared vocabulary; returns how many labels were new.
pub fn extend_dictionary<I, S>(labels: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SkillDictionary::shared().add_labels(labels)
}

pub fn list_dictionary() -> Vec<String> {
    SkillDictionary::shared().all_labels()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillDictionary::builtin().unwrap()))
    }

    fn reqs(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    const VI_DESCRIPTION: &str =
        "Chúng tôi cần ứng viên thành thạo React và Node.js, có 3 năm kinh nghiệm với TypeScript";

    #[test]
    fn test_vietnamese_posting_finds_core_stack() {
        let extractor = extractor();
        let skills = extractor.extract_quick(VI_DESCRIPTION, &reqs(&["Kinh nghiệm với MongoDB"]));
        for expected in ["React", "Node.js", "TypeScript", "MongoDB"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}: {skills:?}");
        }
    }

    #[test]
    fn test_vietnamese_posting_is_ordered_by_score() {
        let extractor = extractor();
        let scored =
            extractor.extract_scored(VI_DESCRIPTION, &reqs(&["Kinh nghiệm với MongoDB"]), Profile::QUICK);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

        let score_of = |label: &str| scored.iter().find(|c| c.label == label).map(|c| c.score);
        // dictionary + capitalized, then: next to "thành thạo"
        assert_eq!(score_of("React"), Some(6));
        // dotted
        assert_eq!(score_of("Node.js"), Some(6));
        // joined text reads "TypeScript Kinh nghiệm"
        assert_eq!(score_of("TypeScript"), Some(6));
        assert_eq!(score_of("MongoDB"), Some(5));
    }

    #[test]
    fn test_vietnamese_posting_has_no_sentence_fragments() {
        let extractor = extractor();
        let skills = extractor.extract_quick(VI_DESCRIPTION, &reqs(&["Kinh nghiệm với MongoDB"]));
        assert!(!skills.contains(&"Kinh".to_string()), "{skills:?}");
        assert!(!skills.iter().any(|s| s.starts_with("React ")), "{skills:?}");
    }

    #[test]
    fn test_sentence_punctuation_never_duplicates_a_label() {
        let extractor = extractor();
        let scored = extractor.extract_scored(
            "Yêu cầu thành thạo Docker. Có kinh nghiệm terraform.",
            &[],
            Profile::QUICK,
        );
        let labels: Vec<_> = scored.iter().map(|c| c.label.as_str()).collect();
        assert!(labels.iter().all(|l| !l.contains('.')), "{labels:?}");
        assert_eq!(labels.iter().filter(|l| l.eq_ignore_ascii_case("docker")).count(), 1);
        assert!(labels.contains(&"Docker"));
        assert!(labels.contains(&"Terraform"));
    }

    #[test]
    fn test_empty_input_is_empty_for_both_profiles() {
        let extractor = extractor();
        assert!(extractor.extract_quick("", &[]).is_empty());
        assert!(extractor.extract_strict("", &[]).is_empty());
        assert!(extractor.extract_quick("   ", &reqs(&["", " "])).is_empty());
    }

    #[test]
    fn test_stop_words_and_generic_nouns_excluded() {
        let extractor = extractor();
        let skills = extractor.extract_quick("We need a Manager with strong Communication skills", &[]);
        assert!(!skills.contains(&"Manager".to_string()));
        assert!(!skills.contains(&"Communication".to_string()));
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_no_signals_yields_empty() {
        let extractor = extractor();
        let skills = extractor.extract_quick(
            "we are looking for a friendly person to join us",
            &reqs(&["good attitude and punctual"]),
        );
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_result_never_exceeds_max_count() {
        let extractor = extractor();
        let description = "Docker Kubernetes Terraform Ansible Jenkins Redis MySQL PostgreSQL \
                           MongoDB Kafka Python Java Rust Golang React Angular Vue Svelte";
        assert!(extractor.extract_quick(description, &[]).len() <= Profile::QUICK.max_count);
        assert!(extractor.extract_strict(description, &[]).len() <= Profile::STRICT.max_count);
        assert_eq!(
            extractor.extract(description, &[], Profile::custom(0, 3)).len(),
            3
        );
    }

    #[test]
    fn test_strict_only_keeps_high_confidence_labels() {
        let extractor = extractor();
        let description = "Stack: Docker, Zookeeper, Kafka";
        let strict = extractor.extract_scored(description, &[], Profile::STRICT);
        assert!(strict.iter().all(|c| c.score >= Profile::STRICT.min_score));
        let labels: Vec<_> = strict.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Docker"]);

        let quick = extractor.extract_quick(description, &[]);
        assert!(quick.contains(&"Kafka".to_string()));
    }

    #[test]
    fn test_strict_is_subset_of_quick() {
        let extractor = extractor();
        let requirements = reqs(&["Kinh nghiệm với MongoDB", "Biết Docker, Kafka là lợi thế"]);
        let quick = extractor.extract_quick(VI_DESCRIPTION, &requirements);
        let strict = extractor.extract_strict(VI_DESCRIPTION, &requirements);
        assert!(!strict.is_empty());
        for label in &strict {
            assert!(quick.contains(label), "{label} missing from quick");
        }
    }

    #[test]
    fn test_no_case_insensitive_duplicates() {
        let extractor = extractor();
        let skills = extractor.extract_quick(
            "Thành thạo react, React và REACT. Yêu cầu: docker, Docker",
            &[],
        );
        let mut seen = HashSet::new();
        for skill in &skills {
            assert!(seen.insert(skill.to_lowercase()), "duplicate {skill}");
        }
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_idempotent() {
        let extractor = extractor();
        let requirements = reqs(&["Kinh nghiệm với MongoDB", "Biết Docker là lợi thế"]);
        let first = extractor.extract_quick(VI_DESCRIPTION, &requirements);
        let second = extractor.extract_quick(VI_DESCRIPTION, &requirements);
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_label_promotes_it_without_removing_others() {
        let extractor = extractor();
        let description = "Dự án sử dụng tailscale và Docker";
        let before = extractor.extract_quick(description, &[]);
        assert!(!before.iter().any(|s| s.eq_ignore_ascii_case("tailscale")));

        extractor.dictionary().add_label("Tailscale");
        let after = extractor.extract_quick(description, &[]);
        assert!(after.contains(&"Tailscale".to_string()));
        for label in &before {
            assert!(after.contains(label), "{label} was dropped");
        }
    }

    #[test]
    fn test_custom_generator_list() {
        struct Fixed;
        impl CandidateGenerator for Fixed {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn generate(&self, _text: &WorkingText, _vocabulary: &dictionary::Vocabulary) -> Vec<String> {
                vec!["Elixir".to_string()]
            }
        }

        let extractor = SkillExtractor::with_generators(
            Arc::new(SkillDictionary::empty()),
            vec![Box::new(Fixed)],
        );
        assert_eq!(extractor.extract_quick("anything", &[]), vec!["Elixir"]);
    }

    #[test]
    fn test_extraction_during_concurrent_dictionary_growth() {
        let extractor = Arc::new(extractor());
        let writer = {
            let dictionary = Arc::clone(extractor.dictionary());
            std::thread::spawn(move || {
                for i in 0..100 {
                    dictionary.add_labels([format!("Tool{i}")]);
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let extractor = Arc::clone(&extractor);
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        let skills = extractor.extract_quick(VI_DESCRIPTION, &[]);
                        assert!(skills.contains(&"React".to_string()));
                    }
                })
            })
            .collect();
        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert!(extractor.dictionary().lookup("tool99").is_some());
    }

    #[test]
    fn test_shared_entry_points() {
        let added = extend_dictionary(["SharedEntryPointSkill"]);
        assert!(added <= 1);
        assert!(list_dictionary().contains(&"SharedEntryPointSkill".to_string()));
        let skills = extract_skills("Biết SharedEntryPointSkill", &[]);
        assert_eq!(skills, vec!["SharedEntryPointSkill"]);
        assert_eq!(
            extract_skills_strict("Biết SharedEntryPointSkill", &[]),
            vec!["SharedEntryPointSkill"]
        );
    }
}
