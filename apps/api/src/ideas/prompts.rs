// Prompt constants for project-idea generation.

/// Task statement for the idea-generation system instruction.
pub const IDEAS_TASK: &str = "You also act as a project advisor who proposes \
    portfolio projects that demonstrate specific skills.";

/// Idea generation prompt template.
/// Replace: {skill_count}, {skills}
pub const IDEAS_PROMPT_TEMPLATE: &str = r#"Generate exactly one portfolio project idea for EACH of the following {skill_count} data science skills. Each project should showcase its skill and may integrate others from the list.

Skills (most important first):
{skills}

Return a JSON ARRAY with one object per skill, in the same order:
[
  {
    "skill": "the skill name exactly as listed above",
    "title": "Short project title",
    "description": "Two or three sentences describing what to build and what it demonstrates."
  }
]"#;
