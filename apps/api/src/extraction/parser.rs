//! Response Parser — turns raw model text into a ranked skill list.
//!
//! Parsing is lenient: a line that does not look like `name: score` is skipped,
//! never fatal. Only a response with zero usable lines is an error.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::analysis::SkillResult;

/// Parses model output into skills sorted by confidence descending.
///
/// Accepts `name: score` lines (score in 0–1, or a percentage like `85%`) and,
/// as a fallback, a JSON array of `{"skill", "confidence"}` /
/// `{"skill", "confidence_score"}` objects.
pub fn parse_skills(raw: &str) -> Result<Vec<SkillResult>, AppError> {
    let candidates = parse_json_array(raw).unwrap_or_else(|| parse_lines(raw));

    let mut seen = HashSet::new();
    let mut skills: Vec<SkillResult> = candidates
        .into_iter()
        .filter(|skill| seen.insert(skill.name.to_lowercase()))
        .collect();

    if skills.is_empty() {
        return Err(AppError::EmptyResult);
    }

    rank_skills(&mut skills);
    Ok(skills)
}

/// Stable sort by confidence descending, so ties keep extraction order.
pub fn rank_skills(skills: &mut [SkillResult]) {
    skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

fn parse_lines(raw: &str) -> Vec<SkillResult> {
    raw.lines()
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                debug!("Skipping unparseable line: {line:?}");
            }
            parsed
        })
        .collect()
}

fn parse_line(line: &str) -> Option<SkillResult> {
    let line = strip_list_marker(line.trim());
    let (name, score) = line.rsplit_once(':')?;

    let name = clean_name(name);
    if name.is_empty() {
        return None;
    }

    let confidence = parse_score(score)?;
    Some(SkillResult::new(name, confidence))
}

/// Strips `-`, `*`, `•`, `1.` and `1)` prefixes.
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('•'))
    {
        // "**Python**: 0.9" is bold, not a bullet.
        if !rest.starts_with('*') {
            return rest.trim_start();
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }

    line
}

fn clean_name(name: &str) -> String {
    name.trim()
        .trim_matches(|c| matches!(c, '*' | '`' | '"' | '\''))
        .trim()
        .to_string()
}

/// Out-of-range and non-finite scores are rejected rather than clamped.
fn parse_score(score: &str) -> Option<f32> {
    let score = score.trim().trim_matches(|c| matches!(c, '*' | '`'));
    let value = match score.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().ok()? / 100.0,
        None => score.parse::<f32>().ok()?,
    };
    in_unit_range(value)
}

/// Adding `0.0` folds `-0.0` into `0.0` so it never renders as `-0%`.
fn in_unit_range(value: f32) -> Option<f32> {
    (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(value + 0.0)
}

/// `None` when the text is not a JSON array at all.
fn parse_json_array(raw: &str) -> Option<Vec<SkillResult>> {
    let text = strip_json_fences(raw);
    if !text.starts_with('[') {
        return None;
    }
    let items: Vec<Value> = serde_json::from_str(text).ok()?;
    Some(items.iter().filter_map(parse_json_item).collect())
}

fn parse_json_item(item: &Value) -> Option<SkillResult> {
    let name = item
        .get("skill")
        .or_else(|| item.get("name"))
        .and_then(Value::as_str)
        .map(clean_name)
        .filter(|name| !name.is_empty())?;

    let confidence = match item.get("confidence").and_then(Value::as_f64) {
        Some(value) => value as f32,
        None => item.get("confidence_score").and_then(Value::as_f64)? as f32 / 100.0,
    };

    Some(SkillResult::new(name, in_unit_range(confidence)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(skills: &[SkillResult]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_lenient_parse_drops_garbage_and_out_of_range() {
        let skills = parse_skills("Python: 0.9\nSQL: 0.7\ngarbage line\nExcel: 1.5").unwrap();
        assert_eq!(
            skills,
            vec![SkillResult::new("Python", 0.9), SkillResult::new("SQL", 0.7)]
        );
    }

    #[test]
    fn test_zero_valid_lines_is_empty_result() {
        let result = parse_skills("I could not find any skills.\n\nSorry!");
        assert!(matches!(result, Err(AppError::EmptyResult)));
        assert!(matches!(parse_skills(""), Err(AppError::EmptyResult)));
    }

    #[test]
    fn test_output_is_sorted_descending() {
        let skills = parse_skills("SQL: 0.5\nPython: 0.9\nR: 0.7").unwrap();
        assert_eq!(names(&skills), vec!["Python", "R", "SQL"]);
    }

    #[test]
    fn test_ties_keep_extraction_order() {
        let skills = parse_skills("Tableau: 0.8\nPython: 0.9\nExcel: 0.8\nSQL: 0.8").unwrap();
        assert_eq!(names(&skills), vec!["Python", "Tableau", "Excel", "SQL"]);
    }

    #[test]
    fn test_non_numeric_and_non_finite_scores_are_dropped() {
        let skills = parse_skills("Python: high\nSQL: NaN\nR: inf\nSpark: -0.2\nAWS: 0.6").unwrap();
        assert_eq!(names(&skills), vec!["AWS"]);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let skills = parse_skills("Python: 1\nSQL: 0").unwrap();
        assert_eq!(
            skills,
            vec![SkillResult::new("Python", 1.0), SkillResult::new("SQL", 0.0)]
        );
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let skills = parse_skills("Python: 0.9\nSQL: -0\nExcel: -0.0%").unwrap();
        assert_eq!(names(&skills), vec!["Python", "SQL", "Excel"]);
        for skill in &skills[1..] {
            assert_eq!(skill.confidence, 0.0);
            assert!(skill.confidence.is_sign_positive());
        }

        let json = parse_skills(r#"[{"skill": "SQL", "confidence": -0.0}]"#).unwrap();
        assert!(json[0].confidence.is_sign_positive());
    }

    #[test]
    fn test_list_markers_and_bold_are_stripped() {
        let raw = "- Python: 0.9\n* SQL: 0.8\n• R: 0.7\n1. Spark: 0.6\n2) AWS: 0.5\n**Docker**: 0.4";
        let skills = parse_skills(raw).unwrap();
        assert_eq!(
            names(&skills),
            vec!["Python", "SQL", "R", "Spark", "AWS", "Docker"]
        );
    }

    #[test]
    fn test_name_with_colon_splits_on_last_colon() {
        let skills = parse_skills("Certification: AWS Solutions Architect: 0.75").unwrap();
        assert_eq!(skills[0].name, "Certification: AWS Solutions Architect");
        assert!((skills[0].confidence - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_numbers_inside_names_are_kept() {
        let skills = parse_skills("3D modeling: 0.6\nS3: 0.7").unwrap();
        assert_eq!(names(&skills), vec!["S3", "3D modeling"]);
    }

    #[test]
    fn test_percentages_are_scaled() {
        let skills = parse_skills("Python: 95%\nSQL: 120%").unwrap();
        assert_eq!(skills.len(), 1);
        assert!((skills[0].confidence - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_empty_name_is_skipped() {
        let skills = parse_skills(": 0.9\nPython: 0.8").unwrap();
        assert_eq!(names(&skills), vec!["Python"]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let skills = parse_skills("Python: 0.6\npython: 0.9\nSQL: 0.7").unwrap();
        assert_eq!(
            skills,
            vec![SkillResult::new("SQL", 0.7), SkillResult::new("Python", 0.6)]
        );
    }

    #[test]
    fn test_fenced_lines_are_parsed() {
        let skills = parse_skills("```\nPython: 0.9\nSQL: 0.7\n```").unwrap();
        assert_eq!(names(&skills), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_json_array_with_percentage_scores() {
        let raw = r#"```json
[
  {"skill": "Python", "confidence_score": 98},
  {"skill": "Power BI", "confidence_score": 90},
  {"skill": "Teamworks AMS", "confidence_score": 185},
  {"confidence_score": 80}
]
```"#;
        let skills = parse_skills(raw).unwrap();
        assert_eq!(names(&skills), vec!["Python", "Power BI"]);
        assert!((skills[0].confidence - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_json_array_with_unit_scores() {
        let raw = r#"[{"name": "SQL", "confidence": 0.7}, {"skill": "R", "confidence": "high"}]"#;
        let skills = parse_skills(raw).unwrap();
        assert_eq!(skills, vec![SkillResult::new("SQL", 0.7)]);
    }

    #[test]
    fn test_malformed_json_falls_back_to_lines() {
        let skills = parse_skills("[not json\nPython: 0.9\nSQL: 0.8").unwrap();
        assert_eq!(names(&skills), vec!["Python", "SQL"]);
    }
}
