//! Command orchestration.
//!
//! tailor: load → parse → score → suggest → coaching questions → tailor → write → report.
//! coach:  load → require credential → LLM coaching (heuristic on failure) → write → report.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::analysis::jd_parser::parse_jd;
use crate::analysis::matcher::{build_recommendation, match_and_score};
use crate::analysis::questions::{generate_coaching_questions, CoachingQuestion};
use crate::analysis::resume_parser::parse_resume;
use crate::analysis::suggestions::{suggest_resume_updates, Suggestions};
use crate::analysis::tailoring::{
    tailor_with_fallback, HeuristicTailor, LlmTailor, ResumeTailor, TailorBackend, TailorRequest,
};
use crate::coaching::{coach_with_fallback, HeuristicCoaching};
use crate::config::Config;
use crate::errors::AppError;
use crate::input::{load_text, write_output};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone)]
pub struct TailorParams {
    pub resume: String,
    pub jd: String,
    pub out: PathBuf,
    pub use_llm: bool,
    pub max_bullets: usize,
    pub questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TailorReport {
    pub match_score: f64,
    pub missing_skills: Vec<String>,
    pub recommendation: String,
    pub suggestions: Suggestions,
    pub coaching_questions: Vec<CoachingQuestion>,
    pub tailored_resume_path: PathBuf,
    pub tailored_by: TailorBackend,
}

#[derive(Debug, Clone)]
pub struct CoachParams {
    pub resume: String,
    pub jd: String,
    pub out: PathBuf,
    pub questions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingSource {
    Llm,
    Heuristic,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachReport {
    pub coaching_path: PathBuf,
    pub generated_by: CoachingSource,
}

/// Runs the tailoring pipeline. The LLM backend is used only when requested
/// and a credential is configured; its absence is not an error here.
pub async fn run_tailor(params: &TailorParams, config: &Config) -> Result<TailorReport, AppError> {
    let resume_text = load_text(&params.resume)?;
    let jd_text = load_text(&params.jd)?;

    let resume = parse_resume(&resume_text);
    let jd = parse_jd(&jd_text);
    info!(
        "Parsed resume ({} skills, {} bullets) and JD '{}' ({} skills, {} responsibilities)",
        resume.skills.len(),
        resume.experience.len(),
        jd.title,
        jd.skills.len(),
        jd.responsibilities.len()
    );

    let match_result = match_and_score(&resume, &jd);
    info!("Match score: {}/100", match_result.score);

    let suggestions = suggest_resume_updates(&resume, &jd, params.max_bullets);
    let coaching_questions = generate_coaching_questions(&jd, params.questions);

    let llm_tailor = match (params.use_llm, config.google_api_key.as_deref()) {
        (true, Some(key)) => Some(LlmTailor(
            LlmClient::new(key.to_string(), config).map_err(|e| anyhow::anyhow!(e))?,
        )),
        (true, None) => {
            info!("No API key configured, using heuristic tailoring");
            None
        }
        (false, _) => None,
    };

    let request = TailorRequest {
        resume_text: &resume_text,
        jd_text: &jd_text,
        suggestions: &suggestions,
    };
    let tailor: &dyn ResumeTailor = match &llm_tailor {
        Some(t) => t,
        None => &HeuristicTailor,
    };
    let tailored = tailor_with_fallback(tailor, &request).await;

    let tailored_resume_path = write_output(&params.out, &tailored.text)?;
    info!("Tailored resume written to {}", tailored_resume_path.display());

    Ok(TailorReport {
        recommendation: build_recommendation(&match_result),
        match_score: match_result.score,
        missing_skills: match_result.missing,
        suggestions,
        coaching_questions,
        tailored_resume_path,
        tailored_by: tailored.tailored_by,
    })
}

/// Runs the coaching agent. A missing credential is a configuration error.
pub async fn run_coach(params: &CoachParams, config: &Config) -> Result<CoachReport, AppError> {
    let api_key = config.require_api_key()?;

    let resume_text = load_text(&params.resume)?;
    let jd_text = load_text(&params.jd)?;

    let llm = LlmClient::new(api_key.to_string(), config).map_err(|e| anyhow::anyhow!(e))?;

    let resume = parse_resume(&resume_text);
    let jd = parse_jd(&jd_text);
    let match_result = match_and_score(&resume, &jd);
    let suggestions = suggest_resume_updates(
        &resume,
        &jd,
        crate::analysis::suggestions::DEFAULT_MAX_SUGGESTIONS,
    );
    let questions = generate_coaching_questions(&jd, params.questions);
    let heuristic = HeuristicCoaching {
        questions: &questions,
        suggestions: &suggestions,
        match_result: &match_result,
    };

    let coaching =
        coach_with_fallback(&llm, &jd_text, &resume_text, params.questions, &heuristic).await;

    let coaching_path = write_output(&params.out, &coaching.text)?;
    info!("Coaching written to {}", coaching_path.display());

    Ok(CoachReport {
        coaching_path,
        generated_by: if coaching.from_llm {
            CoachingSource::Llm
        } else {
            CoachingSource::Heuristic
        },
    })
}
