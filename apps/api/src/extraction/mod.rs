// Skill extraction: prompt construction, completion, lenient parsing, ranking.
// All model calls go through llm_client — no direct HTTP calls here.

pub mod aggregate;
pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
