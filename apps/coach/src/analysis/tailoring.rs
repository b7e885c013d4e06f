//! Tailoring: pluggable backends that turn a resume plus suggestions into tailored text.
//!
//! Default: `HeuristicTailor` (pure-Rust renderer, deterministic, no network).
//! Optional: `LlmTailor`, which asks the completion endpoint for a rewrite.
//! Any backend failure falls back to the heuristic renderer.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_TEMPERATURE};
use crate::analysis::suggestions::Suggestions;
use crate::analysis::text::{looks_like_dash_bullet, non_empty_lines};
use crate::llm_client::prompts::{
    render_template, NO_INVENTION_INSTRUCTION, PLAIN_TEXT_INSTRUCTION,
};
use crate::llm_client::{LlmClient, LlmError, DEFAULT_MAX_OUTPUT_TOKENS};

pub const SUGGESTED_EXPERIENCE_HEADING: &str = "Experience (suggested improvements):";

/// Which backend produced the tailored text. Reported to the caller for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TailorBackend {
    Heuristic,
    Llm,
}

/// Everything a backend may use to tailor a resume.
#[derive(Debug, Clone, Copy)]
pub struct TailorRequest<'a> {
    pub resume_text: &'a str,
    pub jd_text: &'a str,
    pub suggestions: &'a Suggestions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailoredResume {
    pub text: String,
    pub tailored_by: TailorBackend,
}

/// Implement this to add a tailoring backend without touching the pipeline.
#[async_trait]
pub trait ResumeTailor: Send + Sync {
    fn backend(&self) -> TailorBackend;

    async fn tailor(&self, request: &TailorRequest<'_>) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicTailor
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicTailor;

#[async_trait]
impl ResumeTailor for HeuristicTailor {
    fn backend(&self) -> TailorBackend {
        TailorBackend::Heuristic
    }

    async fn tailor(&self, request: &TailorRequest<'_>) -> Result<String, LlmError> {
        Ok(render_tailored_resume(
            request.resume_text,
            request.suggestions,
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmTailor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmTailor(pub LlmClient);

#[async_trait]
impl ResumeTailor for LlmTailor {
    fn backend(&self) -> TailorBackend {
        TailorBackend::Llm
    }

    async fn tailor(&self, request: &TailorRequest<'_>) -> Result<String, LlmError> {
        let prompt = build_tailor_prompt(request.jd_text, request.resume_text);
        let options = self.0.options(DEFAULT_MAX_OUTPUT_TOKENS, TAILOR_TEMPERATURE);
        self.0.complete(&prompt, &options).await
    }
}

pub fn build_tailor_prompt(jd_text: &str, resume_text: &str) -> String {
    render_template(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("no_invention_instruction", NO_INVENTION_INSTRUCTION),
            ("plain_text_instruction", PLAIN_TEXT_INSTRUCTION),
            ("jd_text", jd_text),
            ("resume_text", resume_text),
        ],
    )
}

/// Runs `tailor`; if it fails, renders heuristically instead.
pub async fn tailor_with_fallback(
    tailor: &dyn ResumeTailor,
    request: &TailorRequest<'_>,
) -> TailoredResume {
    match tailor.tailor(request).await {
        Ok(text) => {
            info!("Resume tailored by {:?} backend", tailor.backend());
            TailoredResume {
                text,
                tailored_by: tailor.backend(),
            }
        }
        Err(e) => {
            warn!(
                "{:?} tailoring failed, falling back to heuristic renderer: {e}",
                tailor.backend()
            );
            TailoredResume {
                text: render_tailored_resume(request.resume_text, request.suggestions),
                tailored_by: TailorBackend::Heuristic,
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristic renderer
// ────────────────────────────────────────────────────────────────────────────

/// Re-renders resume text with the suggested summary and skills on top and
/// bullet-like lines replaced, in order, by the rewritten experience entries.
/// Entries left over once the original bullets run out go under a new heading.
pub fn render_tailored_resume(original_text: &str, suggestions: &Suggestions) -> String {
    let mut out: Vec<String> = Vec::new();

    if !suggestions.suggested_summary.is_empty() {
        out.push(suggestions.suggested_summary.clone());
        out.push(String::new());
    }

    if !suggestions.add_skills.is_empty() {
        out.push("Skills:".to_string());
        out.push(suggestions.add_skills.join(", "));
        out.push(String::new());
    }

    let mut rewritten = suggestions.rewritten_experience.iter().peekable();
    for line in non_empty_lines(original_text) {
        if rewritten.peek().is_some() && looks_like_dash_bullet(line) {
            if let Some(entry) = rewritten.next() {
                out.push(format!("- {entry}"));
            }
            continue;
        }
        out.push(line.to_string());
    }

    if rewritten.peek().is_some() {
        out.push(String::new());
        out.push(SUGGESTED_EXPERIENCE_HEADING.to_string());
        out.extend(rewritten.map(|entry| format!("- {entry}")));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resume_parser::parse_resume;
    use crate::config::Config;

    fn suggestions(summary: &str, skills: &[&str], rewritten: &[&str]) -> Suggestions {
        Suggestions {
            suggested_summary: summary.to_string(),
            add_skills: skills.iter().map(|s| s.to_string()).collect(),
            rewritten_experience: rewritten.iter().map(|s| s.to_string()).collect(),
        }
    }

    struct FailingTailor;

    #[async_trait]
    impl ResumeTailor for FailingTailor {
        fn backend(&self) -> TailorBackend {
            TailorBackend::Llm
        }

        async fn tailor(&self, _request: &TailorRequest<'_>) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct FixedTailor;

    #[async_trait]
    impl ResumeTailor for FixedTailor {
        fn backend(&self) -> TailorBackend {
            TailorBackend::Llm
        }

        async fn tailor(&self, _request: &TailorRequest<'_>) -> Result<String, LlmError> {
            Ok("model output".to_string())
        }
    }

    #[test]
    fn test_render_full_layout() {
        let original = "Jane Doe\n- Built APIs\nHobbies: chess\n- Ran ops";
        let s = suggestions("Engineer - Jane", &["go", "kafka"], &["Built APIs (1)", "Ran ops (2)"]);
        let rendered = render_tailored_resume(original, &s);
        assert_eq!(
            rendered,
            "Engineer - Jane\n\nSkills:\ngo, kafka\n\nJane Doe\n- Built APIs (1)\nHobbies: chess\n- Ran ops (2)"
        );
    }

    #[test]
    fn test_render_omits_empty_blocks() {
        let rendered = render_tailored_resume("Just text", &Suggestions::default());
        assert_eq!(rendered, "Just text");
    }

    #[test]
    fn test_render_substitutes_min_of_matches_and_entries() {
        let original = "- a\n- b\n- c";
        let rendered = render_tailored_resume(original, &suggestions("", &[], &["A"]));
        assert_eq!(rendered, "- A\n- b\n- c");
    }

    #[test]
    fn test_render_appends_leftover_entries() {
        let original = "Intro line\n- only bullet";
        let s = suggestions("", &[], &["first", "second", "third"]);
        let rendered = render_tailored_resume(original, &s);
        assert_eq!(
            rendered,
            format!("Intro line\n- first\n\n{SUGGESTED_EXPERIENCE_HEADING}\n- second\n- third")
        );
    }

    #[test]
    fn test_render_verb_lines_count_as_bullets() {
        let rendered =
            render_tailored_resume("Managed the vendor budget", &suggestions("", &[], &["X"]));
        assert_eq!(rendered, "- X");
    }

    #[test]
    fn test_skills_block_round_trips_through_parser() {
        let skills = ["aws", "c++", "terraform"];
        let rendered =
            render_tailored_resume("Intro", &suggestions("Engineer summary", &skills, &[]));
        let reparsed = parse_resume(&rendered);
        assert_eq!(reparsed.skills[..skills.len()], skills.map(String::from)[..]);
    }

    #[test]
    fn test_jd_inline_skills_round_trip_through_rendered_block() {
        use crate::analysis::jd_parser::parse_jd;
        use crate::analysis::suggestions::suggest_resume_updates;

        let jd = parse_jd("Platform Engineer\nRust; Go, Kafka | Flink");
        let s = suggest_resume_updates(&parse_resume(""), &jd, 6);
        assert_eq!(s.add_skills, vec!["flink", "go", "kafka", "rust"]);

        let reparsed = parse_resume(&render_tailored_resume("", &s));
        assert_eq!(reparsed.skills, s.add_skills);
    }

    #[test]
    fn test_build_tailor_prompt_embeds_inputs() {
        let prompt = build_tailor_prompt("JD BODY", "RESUME BODY");
        assert!(prompt.contains("JOB DESCRIPTION:\nJD BODY"));
        assert!(prompt.contains("RESUME:\nRESUME BODY"));
        assert!(prompt.contains("Suggested Skill:"));
        assert!(!prompt.contains("{no_invention_instruction}"));
        assert!(!prompt.contains("{plain_text_instruction}"));
    }

    #[test]
    fn test_build_tailor_prompt_keeps_placeholder_text_in_jd_literal() {
        let prompt = build_tailor_prompt("Paste {resume_text} here", "RESUME BODY");
        assert!(prompt.contains("JOB DESCRIPTION:\nPaste {resume_text} here"));
        assert_eq!(prompt.matches("RESUME BODY").count(), 1);
    }

    #[tokio::test]
    async fn test_fallback_when_primary_fails() {
        let s = suggestions("Summary", &[], &[]);
        let request = TailorRequest {
            resume_text: "Body",
            jd_text: "JD",
            suggestions: &s,
        };
        let result = tailor_with_fallback(&FailingTailor, &request).await;
        assert_eq!(result.tailored_by, TailorBackend::Heuristic);
        assert_eq!(result.text, "Summary\n\nBody");
    }

    #[tokio::test]
    async fn test_primary_output_used_on_success() {
        let s = Suggestions::default();
        let request = TailorRequest {
            resume_text: "Body",
            jd_text: "JD",
            suggestions: &s,
        };
        let result = tailor_with_fallback(&FixedTailor, &request).await;
        assert_eq!(result.tailored_by, TailorBackend::Llm);
        assert_eq!(result.text, "model output");
    }

    #[tokio::test]
    async fn test_heuristic_tailor_renders() {
        let s = suggestions("Summary", &["rust"], &[]);
        let request = TailorRequest {
            resume_text: "Body",
            jd_text: "JD",
            suggestions: &s,
        };
        let result = tailor_with_fallback(&HeuristicTailor, &request).await;
        assert_eq!(result.tailored_by, TailorBackend::Heuristic);
        assert_eq!(result.text, "Summary\n\nSkills:\nrust\n\nBody");
    }

    #[tokio::test]
    async fn test_llm_tailor_unreachable_endpoint_falls_back() {
        let config = Config {
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..Config::default()
        };
        let tailor = LlmTailor(LlmClient::new("k".to_string(), &config).unwrap());
        let s = suggestions("", &[], &["rewritten"]);
        let request = TailorRequest {
            resume_text: "- original",
            jd_text: "JD",
            suggestions: &s,
        };
        let result = tailor_with_fallback(&tailor, &request).await;
        assert_eq!(result.tailored_by, TailorBackend::Heuristic);
        assert_eq!(result.text, "- rewritten");
    }
}
