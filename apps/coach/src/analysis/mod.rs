// Heuristic analysis pipeline.
// parse (resume_parser, jd_parser) → match → suggestions / questions → tailoring.
// The only network-backed piece is LlmTailor, and it always has a heuristic fallback.

pub mod jd_parser;
pub mod matcher;
pub mod prompts;
pub mod questions;
pub mod resume_parser;
pub mod suggestions;
pub mod tailoring;
pub mod text;
