use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;
use crate::store::StoredTrendReport;

use super::{normalize_limit, validate_min_relevance, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CreateTrendReportRequest {
    pub query: String,
    pub min_relevance: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrendsQuery {
    pub limit: Option<usize>,
}

pub(super) async fn create_trend_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateTrendReportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StoredTrendReport>>), ApiError> {
    let query = body.query.trim();
    if query.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "query must not be empty",
        ));
    }
    let min_relevance = validate_min_relevance(&req_id.0, body.min_relevance)?
        .unwrap_or(state.config.min_relevance);

    let relevant = state.store.analyses_at_least(min_relevance).await;
    let required = state.config.min_trend_posts;
    if relevant.len() < required {
        return Err(ApiError::new(
            req_id.0,
            "insufficient_data",
            format!(
                "need at least {required} analyses scoring {min_relevance} or more, found {}",
                relevant.len()
            ),
        ));
    }

    let report = state.engine.synthesize(query, &relevant);
    let stored = state
        .store
        .append_trend_report(report, min_relevance)
        .await;
    tracing::info!(
        report_id = %stored.id,
        query,
        posts = stored.report.posts_analyzed,
        "trend report created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(req_id.0, stored)),
    ))
}

pub(super) async fn list_trend_reports(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TrendsQuery>,
) -> Json<ApiResponse<Vec<StoredTrendReport>>> {
    let data = state
        .store
        .trend_reports_newest_first(normalize_limit(query.limit))
        .await;
    Json(ApiResponse::new(req_id.0, data))
}
