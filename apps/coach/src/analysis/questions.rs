//! Interview coaching questions derived from a parsed job description.

use serde::{Deserialize, Serialize};

use crate::analysis::jd_parser::ParsedJobDescription;

pub const DEFAULT_QUESTION_COUNT: usize = 8;

const SKILL_TIP: &str =
    "Mention specific projects, your role, technologies used, and outcomes or metrics.";
const STAR_TIP: &str =
    "Use STAR (Situation, Task, Action, Result) and quantify results when possible.";
const FALLBACK_QUESTION: &str = "Describe a technical challenge you solved recently.";
const FALLBACK_TIP: &str = "Explain trade-offs, your approach, and measurable outcome.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingQuestion {
    pub question: String,
    pub tip: String,
}

impl CoachingQuestion {
    fn for_skill(skill: &str) -> Self {
        Self {
            question: format!("Can you describe your experience with {skill}?"),
            tip: SKILL_TIP.to_string(),
        }
    }

    fn for_responsibility(responsibility: &str) -> Self {
        Self {
            question: format!(
                "Tell me about a time you {}",
                responsibility.trim_matches('.').to_lowercase()
            ),
            tip: STAR_TIP.to_string(),
        }
    }

    fn fallback() -> Self {
        Self {
            question: FALLBACK_QUESTION.to_string(),
            tip: FALLBACK_TIP.to_string(),
        }
    }
}

/// Returns exactly `n` questions: skills first, then responsibilities, then generic filler.
pub fn generate_coaching_questions(jd: &ParsedJobDescription, n: usize) -> Vec<CoachingQuestion> {
    let from_skills = jd.skills.iter().map(|s| CoachingQuestion::for_skill(s));
    let from_responsibilities = jd
        .responsibilities
        .iter()
        .map(|r| CoachingQuestion::for_responsibility(r));

    from_skills
        .chain(from_responsibilities)
        .chain(std::iter::repeat_with(CoachingQuestion::fallback))
        .take(n)
        .collect()
}
