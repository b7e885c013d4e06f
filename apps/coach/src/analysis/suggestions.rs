//! Suggestion generation: summary line, skills to add, and metric prompts for bullets.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::jd_parser::ParsedJobDescription;
use crate::analysis::matcher::match_and_score;
use crate::analysis::resume_parser::ParsedResume;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;
pub const MAX_ADD_SKILLS: usize = 10;
const MAX_BULLET_CHARS: usize = 240;
const METRIC_PROMPT: &str =
    " (include quantifiable impact, e.g., reduced X by Y% or improved throughput by N)";

static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)?%?").expect("Invalid regex: numeric token pattern")
});

/// Suggested edits for tailoring a resume to a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggested_summary: String,
    /// Sorted prefix of the missing skills, at most ten entries.
    pub add_skills: Vec<String>,
    pub rewritten_experience: Vec<String>,
}

pub fn has_metric(bullet: &str) -> bool {
    NUMERIC_TOKEN.is_match(bullet)
}

fn suggest_summary(summary: &str, title: &str) -> String {
    match (title.is_empty(), summary.is_empty()) {
        (true, _) => summary.to_string(),
        (false, false) => format!("{title} - {summary}"),
        (false, true) => format!("{title} candidate with relevant experience."),
    }
}

fn rewrite_bullet(bullet: &str) -> String {
    if !has_metric(bullet) {
        return format!("{bullet}{METRIC_PROMPT}");
    }
    if bullet.chars().count() > MAX_BULLET_CHARS {
        let head: String = bullet.chars().take(MAX_BULLET_CHARS).collect();
        format!("{head}...")
    } else {
        bullet.to_string()
    }
}

/// Builds suggestions. Only the first `max_suggestions` experience bullets are rewritten.
pub fn suggest_resume_updates(
    resume: &ParsedResume,
    jd: &ParsedJobDescription,
    max_suggestions: usize,
) -> Suggestions {
    let missing = match_and_score(resume, jd).missing;

    Suggestions {
        suggested_summary: suggest_summary(&resume.summary, &jd.title),
        add_skills: missing.into_iter().take(MAX_ADD_SKILLS).collect(),
        rewritten_experience: resume
            .experience
            .iter()
            .take(max_suggestions)
            .map(|b| rewrite_bullet(b))
            .collect(),
    }
}
