//! Prompt Builder — embeds the few-shot examples and the user's job description
//! into a single extraction prompt.

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_TASK, FEW_SHOT_EXAMPLES};
use crate::llm_client::prompts::{CAREER_COACH_PERSONA, LINES_ONLY_INSTRUCTION};

/// System instruction sent alongside every extraction prompt.
pub fn extraction_system() -> String {
    format!("{CAREER_COACH_PERSONA} {EXTRACTION_TASK} {LINES_ONLY_INSTRUCTION}")
}

/// Builds the extraction prompt. Fails with `InvalidInput` when the description is blank.
///
/// The description is embedded verbatim; only the emptiness check trims it.
pub fn build_extraction_prompt(jd_text: &str) -> Result<String, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "job description cannot be empty".to_string(),
        ));
    }

    let examples = render_examples(FEW_SHOT_EXAMPLES);

    // {jd_text} last so user text containing "{examples}" is never expanded.
    Ok(EXTRACTION_PROMPT_TEMPLATE
        .replace("{examples}", &examples)
        .replace("{jd_text}", jd_text))
}

fn render_examples(examples: &[(&str, &str)]) -> String {
    examples
        .iter()
        .map(|(jd, output)| format!("Job Description:\n{jd}\n\nOutput:\n{output}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Looking for a candidate skilled in Python and SQL for data analysis.";

    #[test]
    fn test_prompt_contains_input_verbatim() {
        let prompt = build_extraction_prompt(JD).unwrap();
        assert!(prompt.contains(JD));
    }

    #[test]
    fn test_prompt_contains_every_example_pair() {
        let prompt = build_extraction_prompt(JD).unwrap();
        for (example_jd, example_output) in FEW_SHOT_EXAMPLES {
            assert!(prompt.contains(example_jd));
            assert!(prompt.contains(example_output));
        }
    }

    #[test]
    fn test_prompt_ends_with_user_text_section() {
        let prompt = build_extraction_prompt(JD).unwrap();
        let jd_pos = prompt.find(JD).unwrap();
        let last_example_pos = prompt.find(FEW_SHOT_EXAMPLES[1].1).unwrap();
        assert!(jd_pos > last_example_pos);
    }

    #[test]
    fn test_whitespace_is_preserved_in_embedded_text() {
        let jd = "  Rust\n\n  and Kafka  ";
        let prompt = build_extraction_prompt(jd).unwrap();
        assert!(prompt.contains(jd));
    }

    #[test]
    fn test_placeholder_in_user_text_is_not_expanded() {
        let jd = "Senior role, see {examples} section";
        let prompt = build_extraction_prompt(jd).unwrap();
        assert!(prompt.contains(jd));
    }

    #[test]
    fn test_system_instruction_demands_bare_lines() {
        let system = extraction_system();
        assert!(system.starts_with(CAREER_COACH_PERSONA));
        assert!(system.contains(LINES_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            build_extraction_prompt(""),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            build_extraction_prompt(" \n\t "),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_examples_are_in_line_format() {
        for (_, output) in FEW_SHOT_EXAMPLES {
            for line in output.lines() {
                let (name, score) = line.rsplit_once(':').unwrap();
                assert!(!name.trim().is_empty());
                let score: f32 = score.trim().parse().unwrap();
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
