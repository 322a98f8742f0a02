//! The single-page form: one textarea, one submit button, and the results view.

use axum::{extract::State, http::StatusCode, Form};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::extraction::pipeline::analyze;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub job_description: String,
}

/// GET /
pub async fn handle_form_page() -> Markup {
    render_page("", None)
}

/// POST /
///
/// Runs the pipeline and re-renders the page. Failures become a message on the
/// page; the submitted text is kept so the user can edit and resubmit.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> (StatusCode, Markup) {
    let outcome = analyze(
        &form.job_description,
        state.llm.as_ref(),
        state.idea_generator.as_ref(),
        state.config.top_k,
    )
    .await;

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            warn!("Form submission failed: {e}");
            e.status_code()
        }
    };

    (status, render_page(&form.job_description, Some(&outcome)))
}

fn render_page(
    job_description: &str,
    outcome: Option<&Result<AnalysisResult, AppError>>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "SkillScout — Job Skill Extractor" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                main {
                    h1 { "AI-Powered Job Skill Extractor" }
                    p {
                        "Paste a job description to extract key data science skills with "
                        "confidence scores, plus portfolio project ideas for the top skills."
                    }
                    form method="post" action="/" {
                        label {
                            "Job Description"
                            textarea id="job_description" name="job_description" rows="12" required {
                                (job_description)
                            }
                        }
                        button type="submit" { "Extract Skills" }
                    }
                    @match outcome {
                        Some(Ok(result)) => { (render_result(result)) }
                        Some(Err(e)) => {
                            div class="error" role="alert" { (e.user_message()) }
                        }
                        None => {}
                    }
                }
            }
        }
    }
}

fn render_result(result: &AnalysisResult) -> Markup {
    html! {
        section id="skills" {
            h2 { "Extracted Skills" }
            table {
                thead { tr { th { "Skill" } th { "Confidence" } } }
                tbody {
                    @for skill in &result.skills {
                        tr {
                            td { (skill.name) }
                            td { (format!("{:.0}%", skill.confidence * 100.0)) }
                        }
                    }
                }
            }
        }
        section id="ideas" {
            h2 { "Project Ideas" }
            @if result.ideas.is_empty() {
                p { "No project ideas were generated." }
            } @else {
                ol {
                    @for idea in &result.ideas {
                        li {
                            h3 { (idea.title) }
                            p { (idea.description) }
                            p class="related" { "Skill: " (idea.related_skill) }
                        }
                    }
                }
            }
        }
    }
}

const STYLES: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1d2330; }
main { max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
label { display: block; font-weight: 600; margin-bottom: .5rem; }
textarea { width: 100%; box-sizing: border-box; font: inherit; padding: .5rem; }
button { margin-top: .75rem; padding: .5rem 1.25rem; font: inherit; cursor: pointer; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { text-align: left; padding: .4rem .6rem; border-bottom: 1px solid #e2e5ea; }
.error { margin-top: 1rem; padding: .75rem 1rem; background: #fdecea; color: #8a1c12; }
.related { color: #5b6475; font-size: .9rem; }
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{ProjectIdea, SkillResult};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            skills: vec![SkillResult::new("Python", 0.95), SkillResult::new("SQL", 0.85)],
            ideas: vec![ProjectIdea {
                title: "Py Pipeline".to_string(),
                description: "Automate cleaning.".to_string(),
                related_skill: "Python".to_string(),
            }],
        }
    }

    #[test]
    fn test_empty_page_has_form_and_no_results() {
        let page = render_page("", None).into_string();
        assert!(page.contains(r#"name="job_description""#));
        assert!(page.contains(r#"method="post""#));
        assert!(!page.contains("Extracted Skills"));
    }

    #[test]
    fn test_results_render_table_and_ideas() {
        let page = render_page("jd", Some(&Ok(sample_result()))).into_string();
        assert!(page.contains("<td>Python</td>"));
        assert!(page.contains("<td>95%</td>"));
        assert!(page.contains("<td>85%</td>"));
        assert!(page.contains("Py Pipeline"));
    }

    #[test]
    fn test_zero_confidence_renders_without_sign() {
        let result = AnalysisResult {
            skills: crate::extraction::parser::parse_skills("SQL: -0").unwrap(),
            ideas: Vec::new(),
        };
        let page = render_page("jd", Some(&Ok(result))).into_string();
        assert!(page.contains("<td>0%</td>"));
        assert!(!page.contains("-0%"));
    }

    #[test]
    fn test_error_renders_user_message() {
        let page = render_page("", Some(&Err(AppError::EmptyResult))).into_string();
        assert!(page.contains("No skills could be extracted"));
        assert!(page.contains(r#"role="alert""#));
    }

    #[test]
    fn test_submitted_text_is_escaped() {
        let page = render_page("<script>alert(1)</script>", None).into_string();
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
