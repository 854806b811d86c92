//! Axum route handlers for the fit-analysis API.

use axum::{extract::State, Json};

use crate::analysis::fit::{AnalyzeFitRequest, FitAnalysis, FitAnalysisPipeline};
use crate::errors::AppError;
use crate::pipeline::{self, JsonBody};
use crate::state::AppState;

/// POST /api/analyze-fit
///
/// Scores `jobDescription` against the static profile.
pub async fn handle_analyze_fit(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AnalyzeFitRequest>,
) -> Result<Json<FitAnalysis>, AppError> {
    let analysis =
        pipeline::run::<FitAnalysisPipeline>(state.completions.as_ref(), request).await?;
    Ok(Json(analysis))
}
