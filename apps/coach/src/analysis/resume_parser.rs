//! Resume Parser: classifies resume lines into summary, skills and experience.
//!
//! The classifier is a small state machine: a recognised header moves it into
//! a section and it stays there until the next header. Lines seen outside the
//! skills and experience sections go through the fallback heuristics.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::text::{looks_like_experience, non_empty_lines, split_skill_tokens, strip_bullet};

const MAX_SUMMARY_LINES: usize = 3;
const MAX_SUMMARY_LINE_WORDS: usize = 40;

/// Structured view of a free-text resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub summary: String,
    /// Source order, duplicates kept.
    pub skills: Vec<String>,
    pub experience: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeSection {
    None,
    Summary,
    Skills,
    Experience,
}

static HEADER_RULES: LazyLock<Vec<(ResumeSection, Regex)>> = LazyLock::new(|| {
    vec![
        (
            ResumeSection::Skills,
            Regex::new(r"(?i)^(?:technical skills|skillset|skills)(?:$|[:\- ](?P<rest>.*)$)")
                .expect("Invalid regex: skills header"),
        ),
        (
            ResumeSection::Experience,
            Regex::new(
                r"(?i)^(?:work experience|professional experience|experience)(?:$|[:\- ](?P<rest>.*)$)",
            )
            .expect("Invalid regex: experience header"),
        ),
        (
            ResumeSection::Summary,
            Regex::new(r"(?i)^(?:professional summary|summary|profile)(?:$|[:\- ](?P<rest>.*)$)")
                .expect("Invalid regex: summary header"),
        ),
    ]
});

/// Returns the section a header line opens plus whatever text follows the separator.
fn match_header(line: &str) -> Option<(ResumeSection, &str)> {
    HEADER_RULES.iter().find_map(|(section, re)| {
        re.captures(line).map(|caps| {
            let rest = caps
                .name("rest")
                .map(|m| m.as_str().trim_start_matches([':', '-', ' ']).trim())
                .unwrap_or("");
            (*section, rest)
        })
    })
}

#[derive(Default)]
struct ResumeBuilder {
    summary_lines: Vec<String>,
    skills: Vec<String>,
    experience: Vec<String>,
}

impl ResumeBuilder {
    fn accept(&mut self, section: ResumeSection, line: &str) {
        match section {
            ResumeSection::Skills => self.skills.extend(split_skill_tokens(line)),
            // Inside an experience section lines are kept verbatim, markers included
            ResumeSection::Experience => self.experience.push(line.to_string()),
            ResumeSection::None | ResumeSection::Summary => {
                if looks_like_experience(line) {
                    self.experience.push(strip_bullet(line).to_string());
                } else if self.summary_lines.len() < MAX_SUMMARY_LINES
                    && line.split_whitespace().count() < MAX_SUMMARY_LINE_WORDS
                {
                    self.summary_lines.push(line.to_string());
                }
            }
        }
    }

    fn finish(self) -> ParsedResume {
        ParsedResume {
            summary: self.summary_lines.join(" ").trim().to_string(),
            skills: self.skills,
            experience: self.experience,
        }
    }
}

/// Parses a resume into summary, skills and experience bullets.
pub fn parse_resume(text: &str) -> ParsedResume {
    let mut section = ResumeSection::None;
    let mut builder = ResumeBuilder::default();

    for line in non_empty_lines(text) {
        if let Some((next, rest)) = match_header(line) {
            section = next;
            if !rest.is_empty() {
                builder.accept(section, rest);
            }
            continue;
        }
        builder.accept(section, line);
    }

    builder.finish()
}
