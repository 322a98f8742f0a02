// Shared prompt fragments. Each module that calls the model defines its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// Persona shared by every prompt in SkillScout.
pub const CAREER_COACH_PERSONA: &str = "You are a data science career coach.";

/// Instruction enforcing JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction enforcing bare line output with no surrounding prose.
pub const LINES_ONLY_INSTRUCTION: &str = "Respond with the requested lines only. \
    Do NOT include headings, numbering, explanations, or markdown formatting.";
