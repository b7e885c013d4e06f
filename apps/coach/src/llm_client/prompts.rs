// Shared prompt fragments. Each caller that needs the completion endpoint
// keeps its own prompts.rs alongside it and pulls these in.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Appended to every prompt that rewrites or coaches on candidate material.
pub const NO_INVENTION_INSTRUCTION: &str = "Do NOT invent credentials, dates, employers, or \
    metrics. If information is missing, say how the candidate could phrase it instead of \
    making it up.";

/// Keeps output pasteable into a text file.
pub const PLAIN_TEXT_INSTRUCTION: &str =
    "Respond in plain text only. Do NOT use markdown tables or code fences.";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Invalid regex: template placeholder"));

/// Fills `{name}` placeholders in one pass over the template. Substituted text
/// is never scanned again, so user input containing `{resume_text}` stays literal.
/// Placeholders without a value are left untouched.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}
