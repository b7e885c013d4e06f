// Prompt constants for LLM-backed tailoring.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Tailoring temperature: low, the rewrite should stay close to the source.
pub const TAILOR_TEMPERATURE: f32 = 0.2;

/// Resume tailoring prompt.
/// Replace: {no_invention_instruction}, {plain_text_instruction}, {jd_text}, {resume_text}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Tailor the resume below to the job description. Produce a concise, professional, and ATS-friendly resume that highlights relevant skills and quantifiable achievements. Keep formatting as plain text.

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Make changes only to wording. If information is missing, add suggested skill lines prefixed with 'Suggested Skill:'.
{no_invention_instruction}
{plain_text_instruction}"#;
