use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::middleware::RequestId;
use crate::store::StoredAnalysis;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzePostsRequest {
    pub post_ids: Vec<String>,
    pub company_description: Option<String>,
}

/// Request description if non-blank, otherwise the configured default.
fn resolve_description<'a>(
    requested: Option<&'a str>,
    configured: Option<&'a str>,
) -> Option<&'a str> {
    requested
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .or(configured)
}

pub(super) async fn analyze_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzePostsRequest>,
) -> Result<Json<ApiResponse<Vec<StoredAnalysis>>>, ApiError> {
    let max = state.config.max_batch_size;
    if body.post_ids.is_empty() || body.post_ids.len() > max {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("post_ids must contain 1-{max} items, got {}", body.post_ids.len()),
        ));
    }

    let (posts, missing) = state.store.posts_by_id(&body.post_ids).await;
    for id in &missing {
        tracing::warn!(post_id = %id, "analysis requested for unknown post; skipping");
    }

    let description = resolve_description(
        body.company_description.as_deref(),
        state.config.default_company_description.as_deref(),
    );
    let analyses = posts
        .iter()
        .map(|post| state.engine.analyze(post, description))
        .collect();

    let stored = state.store.upsert_analyses(analyses).await;
    tracing::info!(
        analyzed = stored.len(),
        skipped = missing.len(),
        "posts analyzed"
    );

    Ok(Json(ApiResponse::new(req_id.0, stored)))
}
