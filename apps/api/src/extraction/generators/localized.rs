use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::dictionary::Vocabulary;
use crate::extraction::generators::CandidateGenerator;
use crate::extraction::text::{CandidateSet, WorkingText};

/// Phrase templates that introduce a skill in Vietnamese and English job ads.
/// The last capture group of each template is the skill span.
///
/// All quantifiers are bounded by the text; the regex engine runs in linear time.
static TEMPLATES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "3 năm kinh nghiệm với React"
        r"(?i)(\d+)\s+năm.*?(?:với|sử dụng|về|làm việc với)\s+([A-Za-z][A-Za-z0-9.+#]+)",
        // "Thành thạo Java, Python"
        r"(?i)(?:thành thạo|thành thục|sử dụng tốt|am hiểu|hiểu biết)\s+([A-Za-z][A-Za-z0-9.+#,\s]+)",
        // "Kinh nghiệm về NodeJS"
        r"(?i)kinh nghiệm.*?(?:về|với|sử dụng|làm việc với)\s+([A-Za-z][A-Za-z0-9.+#]+)",
        // "Yêu cầu: React, Vue"
        r"(?i)yêu cầu.*?:\s*([A-Za-z][A-Za-z0-9.+#,\s]+)",
        // "Có kinh nghiệm Skinning"
        r"(?i)có kinh nghiệm\s+(?:về\s+)?([A-Za-z][A-Za-z0-9.+#]+)",
        // "sử dụng Maya"
        r"(?i)sử dụng\s+([A-Z][A-Za-z0-9.+#]+)",
        // "3+ years of experience with Go"
        r"(?i)(\d+)\+?\s+years?.*?(?:with|in|using)\s+([A-Za-z][A-Za-z0-9.+#]+)",
        // "Proficient in Java, Python"
        r"(?i)(?:proficient|skilled|fluent)\s+(?:in|with)\s+([A-Za-z][A-Za-z0-9.+#,\s]+)",
        // "experience with Terraform"
        r"(?i)experience\s+(?:with|in)\s+([A-Za-z][A-Za-z0-9.+#]+)",
        // "Requirements: Docker, Kubernetes"
        r"(?i)requirements?.*?:\s*([A-Za-z][A-Za-z0-9.+#,\s]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid regex"))
    .collect()
});

const SEPARATORS: &[char] = &[',', '،', '、'];

/// Recovers skills introduced by conventional phrasing, including ones written
/// in lowercase or missing from the dictionary.
pub struct LocalizedPatterns;

impl CandidateGenerator for LocalizedPatterns {
    fn name(&self) -> &'static str {
        "localized"
    }

    fn generate(&self, text: &WorkingText, _vocabulary: &Vocabulary) -> Vec<String> {
        let mut found = CandidateSet::new();
        for template in TEMPLATES.iter() {
            for caps in template.captures_iter(text.raw()) {
                let Some(span) = caps.iter().skip(1).flatten().last() else {
                    continue;
                };
                for piece in split_span(span.as_str()) {
                    found.insert(piece);
                }
            }
        }
        found.into_vec()
    }
}

/// Splits a captured span on comma-like separators, keeping pieces that start
/// with a letter and are longer than two characters.
///
/// The span ends at the first sentence-ending period. Trailing periods and a
/// dangling one-letter word (`React v` from `React và`) are stripped per piece.
fn split_span(span: &str) -> impl Iterator<Item = &str> {
    first_sentence(span)
        .split(SEPARATORS)
        .map(clean_piece)
        .filter(|piece| piece.chars().count() > 2)
        .filter(|piece| piece.starts_with(|c: char| c.is_ascii_alphabetic()))
}

fn first_sentence(span: &str) -> &str {
    span.char_indices()
        .find(|&(idx, c)| c == '.' && span[idx + 1..].starts_with(char::is_whitespace))
        .map_or(span, |(idx, _)| &span[..idx])
}

fn clean_piece(piece: &str) -> &str {
    let piece = piece.trim().trim_end_matches('.');
    match piece.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if tail.chars().count() == 1 => head.trim_end(),
        _ => piece,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<String> {
        LocalizedPatterns.generate(&WorkingText::from_raw(text), &Vocabulary::default())
    }

    #[test]
    fn test_years_of_experience_vietnamese() {
        let found = run("Ít nhất 2 năm kinh nghiệm làm việc với golang");
        assert!(found.contains(&"golang".to_string()));
    }

    #[test]
    fn test_proficient_list_is_split_on_commas() {
        let found = run("Thành thạo Java, Python,Go");
        assert!(found.contains(&"Java".to_string()));
        assert!(found.contains(&"Python".to_string()));
        // "Go" is too short to survive the split filter
        assert!(!found.contains(&"Go".to_string()));
    }

    #[test]
    fn test_requirement_heading_vietnamese() {
        let found = run("Yêu cầu công việc: docker, kubernetes");
        assert!(found.contains(&"docker".to_string()));
        assert!(found.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_experience_about_tool() {
        let found = run("Có kinh nghiệm về skinning nhân vật");
        assert!(found.contains(&"skinning".to_string()));
    }

    #[test]
    fn test_english_templates() {
        let found = run("3+ years of experience with terraform. Proficient in Rust, Tokio");
        assert!(found.contains(&"terraform".to_string()));
        assert!(found.contains(&"Rust".to_string()));
        assert!(found.contains(&"Tokio".to_string()));
    }

    #[test]
    fn test_split_span_filters_short_and_non_letter_pieces() {
        let pieces: Vec<_> = split_span(" Vue ,  3D, C#, Svelte 、Qt").collect();
        assert_eq!(pieces, vec!["Vue", "Svelte"]);
    }

    #[test]
    fn test_spans_stop_at_sentence_end() {
        let found = run("Yêu cầu thành thạo Docker. Có kinh nghiệm terraform.");
        assert!(found.contains(&"Docker".to_string()));
        assert!(found.contains(&"terraform".to_string()));
        assert!(found.iter().all(|piece| !piece.contains('.')), "{found:?}");
    }

    #[test]
    fn test_dangling_vietnamese_fragment_is_dropped() {
        let found = run("Thành thạo React và Node.js");
        assert_eq!(found, vec!["React"]);
    }

    #[test]
    fn test_split_span_keeps_dotted_names() {
        let pieces: Vec<_> = split_span("Node.js, ASP.NET. Next sentence").collect();
        assert_eq!(pieces, vec!["Node.js", "ASP.NET"]);
    }

    #[test]
    fn test_no_cue_phrases_yields_nothing() {
        assert!(run("we are looking for a friendly person to join us").is_empty());
    }
}
