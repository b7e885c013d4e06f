//! Line-level helpers shared by the resume and job-description classifiers.

/// Verbs that mark a line as an accomplishment bullet. Matched as substrings
/// of the lowercased line, so "led" also fires inside "skilled".
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "designed",
    "implemented",
    "built",
    "created",
    "improved",
    "optimized",
    "automated",
    "reduced",
    "increased",
    "delivered",
];

const BULLET_MARKERS: &[char] = &['-', '•', '*'];
const SKILL_DELIMITERS: &[char] = &[';', ',', '|'];

/// Splits raw text into trimmed, non-empty lines.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Splits a skills line on `;`, `,` and `|`. Duplicates are kept.
pub fn split_skill_tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(SKILL_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

pub fn contains_action_verb(line_lower: &str) -> bool {
    ACTION_VERBS.iter().any(|v| line_lower.contains(v))
}

/// The fallback experience heuristic used while parsing a resume.
pub fn looks_like_experience(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS) || contains_action_verb(&line.to_lowercase())
}

/// The narrower heuristic used by the tailoring renderer: only `-` counts as a marker.
pub fn looks_like_dash_bullet(line: &str) -> bool {
    line.starts_with('-') || contains_action_verb(&line.to_lowercase())
}

pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ')
        .trim()
}
