use super::*;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use threadscope_core::Environment;
use tower::ServiceExt;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("socket addr"),
        log_level: "debug".to_string(),
        vocabulary_path: None,
        default_company_description: None,
        min_relevance: 50.0,
        min_trend_posts: 2,
        max_batch_size: 5,
        rate_limit_per_minute: 120,
    }
}

fn test_app_with(auth: AuthState, rate_limit: RateLimitState) -> Router {
    build_app(
        AppState::new(Engine::default(), test_config()),
        auth,
        rate_limit,
    )
}

fn test_app() -> Router {
    test_app_with(AuthState::disabled(), RateLimitState::per_minute(120))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json parse")
    };
    (status, json)
}

fn sample_posts() -> Value {
    json!({
        "posts": [
            {
                "id": "p1",
                "title": "AI predicts longevity outcomes with wearable data",
                "subreddit": "longevity",
                "upvotes": 300,
                "comments": 80
            },
            {
                "id": "p2",
                "title": "Wearable glucose sensor results",
                "content": "Three months of continuous glucose data",
                "community": "QuantifiedSelf",
                "upvotes": 150,
                "comments": 40
            },
            {
                "id": "p3",
                "title": "Best sourdough starter",
                "community": "cooking"
            }
        ]
    })
}

const COMPANY: &str = "We use AI and wearables for personalized longevity";

#[test]
fn normalize_limit_applies_defaults_and_bounds() {
    assert_eq!(normalize_limit(None), 50);
    assert_eq!(normalize_limit(Some(0)), 1);
    assert_eq!(normalize_limit(Some(1_000)), 200);
    assert_eq!(normalize_limit(Some(25)), 25);
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("validation_error", StatusCode::BAD_REQUEST),
        ("not_found", StatusCode::NOT_FOUND),
        ("insufficient_data", StatusCode::UNPROCESSABLE_ENTITY),
        ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
        ("something_else", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "message").into_response();
        assert_eq!(response.status(), status, "code {code}");
    }
}

#[test]
fn min_relevance_outside_range_is_rejected() {
    assert!(validate_min_relevance("r", Some(-1.0)).is_err());
    assert!(validate_min_relevance("r", Some(100.1)).is_err());
    assert!(validate_min_relevance("r", Some(f64::NAN)).is_err());
    assert_eq!(validate_min_relevance("r", Some(0.0)).ok(), Some(Some(0.0)));
    assert_eq!(validate_min_relevance("r", None).ok(), Some(None));
}

#[tokio::test]
async fn health_reports_counts_and_request_id() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "req-health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-health")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["posts"], 0);
    assert_eq!(json["meta"]["request_id"], "req-health");
}

#[tokio::test]
async fn ingest_is_insert_if_absent() {
    let app = test_app();

    let (status, json) = send(&app, Method::POST, "/api/v1/posts", Some(sample_posts())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"], json!({"received": 3, "inserted": 3}));

    let (_, json) = send(&app, Method::POST, "/api/v1/posts", Some(sample_posts())).await;
    assert_eq!(json["data"], json!({"received": 3, "inserted": 0}));

    let (status, json) = send(&app, Method::GET, "/api/v1/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().expect("data array");
    let ids: Vec<&str> = data.iter().filter_map(|p| p["id"].as_str()).collect();
    assert_eq!(ids, vec!["p3", "p2", "p1"]);
    assert!(data.iter().all(|p| p["analysis"].is_null()));
    assert_eq!(data[1]["body"], "Three months of continuous glucose data");
}

#[tokio::test]
async fn ingest_rejects_oversized_batch() {
    let app = test_app();
    let posts: Vec<Value> = (0..6).map(|i| json!({"id": format!("p{i}")})).collect();

    let (status, json) = send(&app, Method::POST, "/api/v1/posts", Some(json!({"posts": posts}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn analyze_synthesize_flow() {
    let app = test_app();
    send(&app, Method::POST, "/api/v1/posts", Some(sample_posts())).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/v1/analyses",
        Some(json!({
            "post_ids": ["p1", "p2", "p3", "missing"],
            "company_description": COMPANY
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let analyses = json["data"].as_array().expect("analyses");
    assert_eq!(analyses.len(), 3);
    assert_eq!(analyses[0]["post_id"], "p1");
    assert_eq!(analyses[0]["relevance_score"], 100.0);
    assert_eq!(analyses[2]["relevance_score"], 0.0);
    assert!(analyses[0]["analyzed_at"].is_string());

    // The unrelated post falls below the threshold and is hidden.
    let (_, json) = send(&app, Method::GET, "/api/v1/posts?min_relevance=50", None).await;
    let ids: Vec<&str> = json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["p2", "p1"]);

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/v1/trends",
        Some(json!({"query": "wearable longevity"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let report = &json["data"];
    assert_eq!(report["query"], "wearable longevity");
    assert_eq!(report["posts_analyzed"], 2);
    assert_eq!(report["min_relevance"], 50.0);
    assert!(report["id"].is_string());
    assert_eq!(
        report["community_insights"]
            .as_object()
            .map(serde_json::Map::len),
        Some(6)
    );

    let (_, json) = send(&app, Method::GET, "/api/v1/trends", None).await;
    let history = json["data"].as_array().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], report["id"]);
}

#[tokio::test]
async fn reanalysis_overwrites_previous_result() {
    let app = test_app();
    send(&app, Method::POST, "/api/v1/posts", Some(sample_posts())).await;

    let (_, first) = send(
        &app,
        Method::POST,
        "/api/v1/analyses",
        Some(json!({"post_ids": ["p2"]})),
    )
    .await;
    let (_, second) = send(
        &app,
        Method::POST,
        "/api/v1/analyses",
        Some(json!({"post_ids": ["p2"], "company_description": COMPANY})),
    )
    .await;
    let before = first["data"][0]["relevance_score"].as_f64().expect("score");
    let after = second["data"][0]["relevance_score"].as_f64().expect("score");
    assert!(after >= before);

    let (_, health) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(health["data"]["analyses"], 1);
}

#[tokio::test]
async fn trends_need_enough_relevant_analyses() {
    let app = test_app();
    send(&app, Method::POST, "/api/v1/posts", Some(sample_posts())).await;
    send(
        &app,
        Method::POST,
        "/api/v1/analyses",
        Some(json!({"post_ids": ["p1", "p3"], "company_description": COMPANY})),
    )
    .await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/v1/trends",
        Some(json!({"query": "longevity"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "insufficient_data");

    // Lowering the threshold lets the zero-score post count.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/trends",
        Some(json!({"query": "longevity", "min_relevance": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn trends_reject_blank_query() {
    let app = test_app();
    let (status, json) = send(
        &app,
        Method::POST,
        "/api/v1/trends",
        Some(json!({"query": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn protected_routes_require_bearer_token() {
    let auth = crate::middleware::AuthState::from_raw("secret-token", false).expect("auth");
    let app = test_app_with(auth, RateLimitState::per_minute(120));

    let (status, json) = send(&app, Method::GET, "/api/v1/posts", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "unauthorized");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/posts")
                .header(header::AUTHORIZATION, "Bearer secret-token")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    // Health stays public.
    let (status, _) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rate_limit_rejects_after_budget() {
    let app = test_app_with(AuthState::disabled(), RateLimitState::per_minute(2));

    for _ in 0..2 {
        let (status, _) = send(&app, Method::GET, "/api/v1/trends", None).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, json) = send(&app, Method::GET, "/api/v1/trends", None).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "rate_limited");
}
