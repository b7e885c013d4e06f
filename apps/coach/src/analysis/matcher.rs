//! Skill matching: case-insensitive set overlap between resume and JD skills.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::jd_parser::ParsedJobDescription;
use crate::analysis::resume_parser::ParsedResume;

/// Outcome of comparing resume skills against JD skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, one decimal place.
    pub score: f64,
    /// Lower-cased JD skills absent from the resume, ascending.
    pub missing: Vec<String>,
}

fn lowercase_set(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Half-way values go to the even neighbour: 6.25 becomes 6.2, 31.25 becomes 31.2.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Scores the resume against the JD. A JD without skills scores 0.0 with nothing missing.
pub fn match_and_score(resume: &ParsedResume, jd: &ParsedJobDescription) -> MatchResult {
    let resume_skills = lowercase_set(&resume.skills);
    let jd_skills = lowercase_set(&jd.skills);

    if jd_skills.is_empty() {
        return MatchResult::default();
    }

    let matched = jd_skills.intersection(&resume_skills).count();
    // BTreeSet iterates in ascending order, so the difference is already sorted.
    let missing: Vec<String> = jd_skills.difference(&resume_skills).cloned().collect();
    let score = round_one_decimal(100.0 * matched as f64 / jd_skills.len() as f64);

    MatchResult { score, missing }
}

/// Builds a human-readable recommendation line from the score and missing skills.
pub fn build_recommendation(result: &MatchResult) -> String {
    let top_gaps: Vec<&str> = result.missing.iter().take(3).map(String::as_str).collect();
    let score = result.score;

    if score >= 80.0 {
        "Strong match. Your resume already covers most of the listed skills.".to_string()
    } else if score >= 60.0 {
        format!(
            "Moderate match ({score}/100). Consider adding evidence for: {}.",
            top_gaps.join(", ")
        )
    } else if top_gaps.is_empty() {
        format!("Low match ({score}/100). The job description lists no recognisable skills.")
    } else {
        format!(
            "Low match ({score}/100). Significant gaps: {}.",
            top_gaps.join(", ")
        )
    }
}
