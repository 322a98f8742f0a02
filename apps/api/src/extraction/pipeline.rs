//! Analysis pipeline: prompt → completion → parse → top-K → ideas.
//!
//! Linear and sequential. Every step returns an explicit `Result`; the only
//! I/O happens behind `CompletionClient` and `IdeaGenerator`.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::aggregate::aggregate_skills;
use crate::extraction::parser::parse_skills;
use crate::extraction::prompt_builder::{build_extraction_prompt, extraction_system};
use crate::ideas::IdeaGenerator;
use crate::llm_client::CompletionClient;
use crate::models::analysis::{AnalysisResult, SkillResult};

/// Extracts the ranked skill list for one job description.
pub async fn extract_skills(
    jd_text: &str,
    llm: &dyn CompletionClient,
) -> Result<Vec<SkillResult>, AppError> {
    let prompt = build_extraction_prompt(jd_text)?;
    let raw = llm.complete(&prompt, &extraction_system()).await?;
    parse_skills(&raw)
}

/// Runs the full pipeline for a single job description.
pub async fn analyze(
    jd_text: &str,
    llm: &dyn CompletionClient,
    ideas: &dyn IdeaGenerator,
    top_k: usize,
) -> Result<AnalysisResult, AppError> {
    let skills = extract_skills(jd_text, llm).await?;
    info!("Extracted {} skills", skills.len());

    Ok(finish(skills, ideas, top_k).await)
}

/// Runs the pipeline over several job descriptions, averaging skill confidence
/// across postings before ranking.
///
/// All descriptions are validated before the first network call. A posting that
/// yields no parseable skills is skipped; any other failure aborts the batch.
pub async fn analyze_many(
    jd_texts: &[String],
    llm: &dyn CompletionClient,
    ideas: &dyn IdeaGenerator,
    top_k: usize,
) -> Result<AnalysisResult, AppError> {
    if jd_texts.is_empty() {
        return Err(AppError::InvalidInput(
            "at least one job description is required".to_string(),
        ));
    }
    if let Some(i) = jd_texts.iter().position(|jd| jd.trim().is_empty()) {
        return Err(AppError::InvalidInput(format!(
            "job description #{} cannot be empty",
            i + 1
        )));
    }

    let mut per_posting = Vec::with_capacity(jd_texts.len());
    for (i, jd) in jd_texts.iter().enumerate() {
        info!("Processing job posting {} of {}", i + 1, jd_texts.len());
        match extract_skills(jd, llm).await {
            Ok(skills) => per_posting.push(skills),
            Err(AppError::EmptyResult) => {
                warn!("Job posting {} yielded no skills, skipping", i + 1)
            }
            Err(e) => return Err(e),
        }
    }

    let skills = aggregate_skills(&per_posting);
    if skills.is_empty() {
        return Err(AppError::EmptyResult);
    }

    Ok(finish(skills, ideas, top_k).await)
}

async fn finish(
    mut skills: Vec<SkillResult>,
    ideas: &dyn IdeaGenerator,
    top_k: usize,
) -> AnalysisResult {
    skills.truncate(top_k);
    let ideas = ideas.generate(&skills).await;
    AnalysisResult { skills, ideas }
}
