//! CatBot: interview coaching text for a candidate and a target role.
//!
//! The LLM path asks the completion endpoint for questions, model answers and a
//! resume checklist. When that call fails, the same sections are rendered from
//! the heuristic pipeline instead.

use tracing::{info, warn};

use crate::analysis::matcher::MatchResult;
use crate::analysis::questions::CoachingQuestion;
use crate::analysis::suggestions::{has_metric, Suggestions};
use crate::llm_client::prompts::{
    render_template, NO_INVENTION_INSTRUCTION, PLAIN_TEXT_INSTRUCTION,
};
use crate::llm_client::{LlmClient, LlmError, DEFAULT_MAX_OUTPUT_TOKENS};

pub mod prompts;

use prompts::{COACHING_PROMPT_TEMPLATE, COACHING_TEMPERATURE};

pub const DEFAULT_COACHING_QUESTIONS: usize = 6;
const MAX_CHECKLIST_ITEMS: usize = 5;

pub fn build_coaching_prompt(jd_text: &str, resume_text: &str, n_questions: usize) -> String {
    let n = n_questions.to_string();
    render_template(
        COACHING_PROMPT_TEMPLATE,
        &[
            ("n", n.as_str()),
            ("no_invention_instruction", NO_INVENTION_INSTRUCTION),
            ("plain_text_instruction", PLAIN_TEXT_INSTRUCTION),
            ("jd_text", jd_text),
            ("resume_text", resume_text),
        ],
    )
}

/// Asks the completion endpoint for coaching text.
pub async fn coach_candidate(
    llm: &LlmClient,
    jd_text: &str,
    resume_text: &str,
    n_questions: usize,
) -> Result<String, LlmError> {
    let prompt = build_coaching_prompt(jd_text, resume_text, n_questions);
    let options = llm.options(DEFAULT_MAX_OUTPUT_TOKENS, COACHING_TEMPERATURE);
    info!(
        "Requesting {} coaching questions from {}",
        n_questions,
        llm.model()
    );
    llm.complete(&prompt, &options).await
}

/// Inputs for rendering coaching text without the completion endpoint.
pub struct HeuristicCoaching<'a> {
    pub questions: &'a [CoachingQuestion],
    pub suggestions: &'a Suggestions,
    pub match_result: &'a MatchResult,
}

/// Renders the heuristic questions and a resume checklist as labeled plain text.
pub fn render_heuristic_coaching(input: &HeuristicCoaching<'_>) -> String {
    let mut out = Vec::new();

    for (i, q) in input.questions.iter().enumerate() {
        out.push(format!("{}. Question: {}", i + 1, q.question));
        out.push(format!("   Tip: {}", q.tip));
        out.push(String::new());
    }

    out.push("Resume Checklist:".to_string());
    for item in resume_checklist(input.suggestions, input.match_result) {
        out.push(format!("- {item}"));
    }

    out.join("\n")
}

fn resume_checklist(suggestions: &Suggestions, match_result: &MatchResult) -> Vec<String> {
    let mut items = Vec::new();

    if !suggestions.suggested_summary.is_empty() {
        items.push(format!(
            "Lead with a summary aimed at the role, e.g. \"{}\".",
            suggestions.suggested_summary
        ));
    }

    if !suggestions.add_skills.is_empty() {
        items.push(format!(
            "If applicable, mention experience with: {}.",
            suggestions.add_skills.join(", ")
        ));
    }

    let unquantified = suggestions
        .rewritten_experience
        .iter()
        .filter(|b| !has_metric(b))
        .count();
    if unquantified > 0 {
        items.push(format!(
            "Add a measurable outcome to {unquantified} experience bullet(s) that have no numbers."
        ));
    }

    items.push(format!(
        "Current skill match is {}/100; mirror the job description's wording for skills you have.",
        match_result.score
    ));
    items.push(
        "Prepare one STAR story per listed responsibility, ending with a result you can quantify."
            .to_string(),
    );

    items.truncate(MAX_CHECKLIST_ITEMS);
    items
}

/// Coaching text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingText {
    pub text: String,
    pub from_llm: bool,
}

/// Runs the LLM coach; any collaborator failure falls back to `heuristic`.
pub async fn coach_with_fallback(
    llm: &LlmClient,
    jd_text: &str,
    resume_text: &str,
    n_questions: usize,
    heuristic: &HeuristicCoaching<'_>,
) -> CoachingText {
    match coach_candidate(llm, jd_text, resume_text, n_questions).await {
        Ok(text) => CoachingText {
            text,
            from_llm: true,
        },
        Err(e) => {
            warn!("Coaching call failed, rendering heuristic coaching instead: {e}");
            CoachingText {
                text: render_heuristic_coaching(heuristic),
                from_llm: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_suggestions() -> Suggestions {
        Suggestions {
            suggested_summary: "SRE - Ops person".to_string(),
            add_skills: vec!["kafka".to_string(), "terraform".to_string()],
            rewritten_experience: vec![
                "Cut paging by 30%".to_string(),
                "Built runbooks (include quantifiable impact, e.g., reduced X by Y% or improved throughput by N)".to_string(),
            ],
        }
    }

    fn sample_questions() -> Vec<CoachingQuestion> {
        vec![CoachingQuestion {
            question: "Can you describe your experience with Kafka?".to_string(),
            tip: "Mention specific projects.".to_string(),
        }]
    }

    #[test]
    fn test_build_coaching_prompt_substitutes_all_placeholders() {
        let prompt = build_coaching_prompt("JD", "RESUME", 4);
        assert!(prompt.contains("top 4 likely interview questions"));
        assert!(prompt.contains("JOB DESCRIPTION:\nJD"));
        assert!(prompt.contains("RESUME:\nRESUME"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_build_coaching_prompt_does_not_expand_user_braces() {
        let prompt = build_coaching_prompt("Top {n} hires", "Resume mentions {jd_text}", 3);
        assert!(prompt.contains("JOB DESCRIPTION:\nTop {n} hires"));
        assert!(prompt.contains("RESUME:\nResume mentions {jd_text}"));
        assert!(prompt.contains("top 3 likely interview questions"));
    }

    #[test]
    fn test_render_heuristic_coaching_layout() {
        let suggestions = sample_suggestions();
        let questions = sample_questions();
        let match_result = MatchResult {
            score: 50.0,
            missing: vec!["kafka".to_string(), "terraform".to_string()],
        };
        let text = render_heuristic_coaching(&HeuristicCoaching {
            questions: &questions,
            suggestions: &suggestions,
            match_result: &match_result,
        });

        assert!(text.starts_with("1. Question: Can you describe your experience with Kafka?\n   Tip: Mention specific projects."));
        assert!(text.contains("Resume Checklist:"));
        assert!(text.contains("- If applicable, mention experience with: kafka, terraform."));
        // the prompt suffix contains "Y%" and "N" but no digit
        assert!(text.contains("- Add a measurable outcome to 1 experience bullet(s)"));
        assert!(text.contains("50/100"));
    }

    #[test]
    fn test_checklist_is_capped() {
        let items = resume_checklist(&sample_suggestions(), &MatchResult::default());
        assert!(items.len() <= MAX_CHECKLIST_ITEMS);
        assert!(items.len() >= 3);
    }

    #[tokio::test]
    async fn test_coach_with_fallback_uses_llm_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"temperature": 0.15})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"candidates": [{"content": "Question 1: ..."}]})),
            )
            .mount(&server)
            .await;

        let config = Config {
            api_base: server.uri(),
            ..Config::default()
        };
        let llm = LlmClient::new("key".to_string(), &config).unwrap();
        let suggestions = sample_suggestions();
        let questions = sample_questions();
        let match_result = MatchResult::default();
        let heuristic = HeuristicCoaching {
            questions: &questions,
            suggestions: &suggestions,
            match_result: &match_result,
        };

        let result = coach_with_fallback(&llm, "JD", "Resume", 6, &heuristic).await;
        assert!(result.from_llm);
        assert_eq!(result.text, "Question 1: ...");
    }

    #[tokio::test]
    async fn test_coach_with_fallback_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let config = Config {
            api_base: server.uri(),
            ..Config::default()
        };
        let llm = LlmClient::new("key".to_string(), &config).unwrap();
        let suggestions = sample_suggestions();
        let questions = sample_questions();
        let match_result = MatchResult::default();
        let heuristic = HeuristicCoaching {
            questions: &questions,
            suggestions: &suggestions,
            match_result: &match_result,
        };

        let result = coach_with_fallback(&llm, "JD", "Resume", 6, &heuristic).await;
        assert!(!result.from_llm);
        assert_eq!(result.text, render_heuristic_coaching(&heuristic));
    }
}
