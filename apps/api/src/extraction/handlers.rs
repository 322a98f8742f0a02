//! Axum route handlers for the JSON analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::pipeline::{analyze, analyze_many};
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeBatchRequest {
    pub job_descriptions: Vec<String>,
}

/// POST /api/v1/analyze
///
/// Extracts ranked skills from one job description and derives project ideas
/// for the top-K.
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = request?;

    let result = analyze(
        &request.job_description,
        state.llm.as_ref(),
        state.idea_generator.as_ref(),
        state.config.top_k,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analyze/batch
///
/// Same as `/api/v1/analyze`, but averages skill confidence across several
/// postings before ranking.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeBatchRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = request?;

    let result = analyze_many(
        &request.job_descriptions,
        state.llm.as_ref(),
        state.idea_generator.as_ref(),
        state.config.top_k,
    )
    .await?;

    Ok(Json(result))
}
