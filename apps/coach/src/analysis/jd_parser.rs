//! JD Parser: extracts title, skills and responsibilities from a raw job description.
//!
//! Header detection is substring based: any line mentioning "skills",
//! "requirements" or "technologies" opens the skills section, and any line
//! mentioning "responsibil" or "what you will" opens the responsibilities section.

use serde::{Deserialize, Serialize};

use crate::analysis::text::{non_empty_lines, split_skill_tokens};

const SKILL_HEADER_KEYWORDS: &[&str] = &["skills", "requirements", "technologies"];
const RESPONSIBILITY_HEADER_KEYWORDS: &[&str] = &["responsibil", "what you will"];
/// Lines at or above this length are never treated as inline skill lists.
const INLINE_SKILL_LINE_MAX_CHARS: usize = 120;

/// Structured view of a free-text job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    pub title: String,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JdSection {
    None,
    Skills,
    Responsibilities,
}

fn match_header(line_lower: &str) -> Option<JdSection> {
    if SKILL_HEADER_KEYWORDS.iter().any(|k| line_lower.contains(k)) {
        Some(JdSection::Skills)
    } else if RESPONSIBILITY_HEADER_KEYWORDS
        .iter()
        .any(|k| line_lower.contains(k))
    {
        Some(JdSection::Responsibilities)
    } else {
        None
    }
}

/// Comma-separated lines outside any section are read as inline skill lists.
/// Ordinary prose with commas also matches; only the length cap guards it.
/// Detection looks at commas alone, but the tokens are split on every skill
/// delimiter so a `;` or `|` never survives inside a token.
fn inline_skills(line: &str) -> Option<Vec<String>> {
    if !line.contains(',') || line.chars().count() >= INLINE_SKILL_LINE_MAX_CHARS {
        return None;
    }
    let segments = line.split(',').filter(|p| !p.trim().is_empty()).count();
    (segments > 1).then(|| split_skill_tokens(line).collect())
}

/// Parses a job description. The first non-empty line is always the title.
pub fn parse_jd(text: &str) -> ParsedJobDescription {
    let lines = non_empty_lines(text);
    let Some((title, body)) = lines.split_first() else {
        return ParsedJobDescription::default();
    };

    let mut parsed = ParsedJobDescription {
        title: title.to_string(),
        ..Default::default()
    };
    let mut section = JdSection::None;

    for line in body {
        if let Some(next) = match_header(&line.to_lowercase()) {
            section = next;
            continue;
        }

        match section {
            JdSection::Skills => parsed.skills.extend(split_skill_tokens(line)),
            JdSection::Responsibilities => parsed.responsibilities.push(line.to_string()),
            JdSection::None => {
                if let Some(parts) = inline_skills(line) {
                    parsed.skills.extend(parts);
                }
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_JD: &str = r#"
        Senior Backend Engineer
        We are a small payments company.

        Responsibilities
        Design and operate payment APIs.
        Mentor junior engineers

        Requirements
        Python; SQL | Kafka
        AWS, Terraform
    "#;

    #[test]
    fn test_title_is_first_line() {
        let parsed = parse_jd(BACKEND_JD);
        assert_eq!(parsed.title, "Senior Backend Engineer");
    }

    #[test]
    fn test_sections_are_extracted() {
        let parsed = parse_jd(BACKEND_JD);
        assert_eq!(
            parsed.responsibilities,
            vec!["Design and operate payment APIs.", "Mentor junior engineers"]
        );
        assert_eq!(parsed.skills, vec!["Python", "SQL", "Kafka", "AWS", "Terraform"]);
    }

    #[test]
    fn test_single_line_yields_only_title() {
        let parsed = parse_jd("Staff Engineer");
        assert_eq!(parsed.title, "Staff Engineer");
        assert!(parsed.skills.is_empty());
        assert!(parsed.responsibilities.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_jd(""), ParsedJobDescription::default());
    }

    #[test]
    fn test_title_line_is_never_a_header() {
        let parsed = parse_jd("Skills Coordinator\nOrganise training");
        assert_eq!(parsed.title, "Skills Coordinator");
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_inline_skill_list_outside_sections() {
        let parsed = parse_jd("Data Engineer\nSpark, Airflow, dbt\nWe value ownership.");
        assert_eq!(parsed.skills, vec!["Spark", "Airflow", "dbt"]);
    }

    #[test]
    fn test_inline_heuristic_misfires_on_prose() {
        let parsed = parse_jd("Engineer\nWe are remote-first, async, and kind");
        assert_eq!(
            parsed.skills,
            vec!["We are remote-first", "async", "and kind"]
        );
    }

    #[test]
    fn test_inline_tokens_split_on_every_delimiter() {
        let parsed = parse_jd("Platform Engineer\nRust; Go, Kafka | Flink");
        assert_eq!(parsed.skills, vec!["Rust", "Go", "Kafka", "Flink"]);
    }

    #[test]
    fn test_inline_detection_still_needs_two_comma_segments() {
        let parsed = parse_jd("Engineer\nRust; Go,");
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_inline_heuristic_ignores_long_lines() {
        let long = format!("{}, tail", "x".repeat(130));
        let parsed = parse_jd(&format!("Engineer\n{long}"));
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_inline_heuristic_needs_two_segments() {
        let parsed = parse_jd("Engineer\nRust,\n, ,");
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_what_you_will_opens_responsibilities() {
        let parsed = parse_jd("Engineer\nWhat you will do:\nShip features.");
        assert_eq!(parsed.responsibilities, vec!["Ship features."]);
    }

    #[test]
    fn test_skills_rule_has_priority() {
        // mentions both keywords; skills wins
        let parsed = parse_jd("Engineer\nResponsibilities and skills\nRust, Go");
        assert_eq!(parsed.skills, vec!["Rust", "Go"]);
        assert!(parsed.responsibilities.is_empty());
    }
}
