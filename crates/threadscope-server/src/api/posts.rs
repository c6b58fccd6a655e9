use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use threadscope_core::Post;

use crate::middleware::RequestId;
use crate::store::{StoredAnalysis, StoredPost};

use super::{normalize_limit, validate_min_relevance, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct IngestPostsRequest {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct IngestPostsResponse {
    received: usize,
    inserted: usize,
}

#[derive(Debug, Deserialize)]
pub(super) struct PostsQuery {
    pub limit: Option<usize>,
    pub min_relevance: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct PostItem {
    #[serde(flatten)]
    post: StoredPost,
    analysis: Option<StoredAnalysis>,
}

fn validate_batch(req_id: &str, posts: &[Post], max_batch_size: usize) -> Result<(), ApiError> {
    if posts.is_empty() || posts.len() > max_batch_size {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            format!("posts must contain 1-{max_batch_size} items, got {}", posts.len()),
        ));
    }
    if let Some(index) = posts.iter().position(|p| p.id.trim().is_empty()) {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            format!("posts[{index}].id must not be empty"),
        ));
    }
    Ok(())
}

pub(super) async fn ingest_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<IngestPostsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IngestPostsResponse>>), ApiError> {
    validate_batch(&req_id.0, &body.posts, state.config.max_batch_size)?;

    let received = body.posts.len();
    let inserted = state.store.insert_posts(body.posts).await;
    tracing::info!(received, inserted, "posts ingested");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            req_id.0,
            IngestPostsResponse { received, inserted },
        )),
    ))
}

pub(super) async fn list_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<ApiResponse<Vec<PostItem>>>, ApiError> {
    let min_relevance = validate_min_relevance(&req_id.0, query.min_relevance)?;
    let limit = normalize_limit(query.limit);

    let mut data = Vec::new();
    for post in state.store.posts_newest_first().await {
        if data.len() >= limit {
            break;
        }
        let analysis = state.store.analysis(&post.post.id).await;
        let below_min = match (&analysis, min_relevance) {
            (Some(stored), Some(min)) => stored.analysis.relevance_score < min,
            _ => false,
        };
        if !below_min {
            data.push(PostItem { post, analysis });
        }
    }

    Ok(Json(ApiResponse::new(req_id.0, data)))
}
