//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::analysis::questions::DEFAULT_QUESTION_COUNT;
use crate::analysis::suggestions::DEFAULT_MAX_SUGGESTIONS;
use crate::coaching::DEFAULT_COACHING_QUESTIONS;
use crate::pipeline::{CoachParams, TailorParams};

/// Resume Coach - tailor a resume to a job description and prepare for the interview
#[derive(Parser, Debug)]
#[command(name = "resume-coach")]
#[command(version)]
#[command(about = "Tailor a resume to a job description and generate interview coaching")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score, suggest edits and write a tailored resume; prints a JSON report
    Tailor {
        /// Path to resume text/PDF file, or the resume text itself
        #[arg(short, long)]
        resume: String,

        /// Path to job description file, or the job description text itself
        #[arg(short, long)]
        jd: String,

        /// Output path for the tailored resume
        #[arg(short, long, default_value = "tailored_resume.txt")]
        out: PathBuf,

        /// API key for the completion endpoint (defaults to GOOGLE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Never call the completion endpoint, even if a key is configured
        #[arg(long, default_value_t = false)]
        no_llm: bool,

        /// Maximum number of experience bullets to rewrite
        #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
        max_bullets: usize,

        /// Number of coaching questions in the report
        #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
        questions: usize,
    },

    /// Generate interview coaching text with CatBot (requires an API key)
    Coach {
        /// Path to resume text/PDF file, or the resume text itself
        #[arg(short, long)]
        resume: String,

        /// Path to job description file, or the job description text itself
        #[arg(short, long)]
        jd: String,

        /// Number of tailored questions to generate
        #[arg(short = 'n', long, default_value_t = DEFAULT_COACHING_QUESTIONS)]
        questions: usize,

        /// Output path for the coaching text
        #[arg(short, long, default_value = "catbot_coaching.txt")]
        out: PathBuf,

        /// API key for the completion endpoint (defaults to GOOGLE_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Commands {
    pub fn api_key(&self) -> Option<String> {
        match self {
            Commands::Tailor { api_key, .. } | Commands::Coach { api_key, .. } => api_key.clone(),
        }
    }
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Tailor {
                resume,
                jd,
                out,
                no_llm,
                max_bullets,
                questions,
                ..
            } => Command::Tailor(TailorParams {
                resume,
                jd,
                out,
                use_llm: !no_llm,
                max_bullets,
                questions,
            }),
            Commands::Coach {
                resume,
                jd,
                questions,
                out,
                ..
            } => Command::Coach(CoachParams {
                resume,
                jd,
                out,
                questions,
            }),
        }
    }
}

/// Parsed command with its pipeline parameters.
#[derive(Debug)]
pub enum Command {
    Tailor(TailorParams),
    Coach(CoachParams),
}
