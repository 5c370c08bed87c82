use super::common::*;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::assessment_router;

fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

fn post_results(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/assessment/results")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_lists_catalog_and_sections() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/assessment/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 18);
    assert_eq!(payload["sections"].as_array().map(Vec::len), Some(3));
    assert_eq!(payload["sections"][2]["label"], "WISCAR Framework");
    assert_eq!(payload["questions"][0]["id"], "psych_1");
    assert_eq!(payload["questions"][0]["type"], "likert");
}

#[tokio::test]
async fn results_route_scores_submitted_answers() {
    let response = router()
        .oneshot(post_results(json!({ "answers": strongest_answers() })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["recommendation"], "YES");
    assert_eq!(payload["scores"]["confidence_score"], 100);
    assert_eq!(payload["headline"], "Highly Recommended");
    assert_eq!(payload["profile"]["axes"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["alternativePaths"], json!([]));
}

#[tokio::test]
async fn results_route_scores_an_empty_submission_with_fallbacks() {
    let response = router()
        .oneshot(post_results(json!({ "answers": [] })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["recommendation"], "MAYBE");
    assert_eq!(payload["scores"]["technical_readiness"], 75);
}

#[tokio::test]
async fn results_route_rejects_unknown_questions() {
    let response = router()
        .oneshot(post_results(json!({
            "answers": [{ "questionId": "psych_42", "value": 3, "timestamp": 0 }]
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("psych_42"));
}

#[tokio::test]
async fn results_route_rejects_out_of_range_ratings() {
    let response = router()
        .oneshot(post_results(json!({
            "answers": [{ "questionId": "psych_1", "value": 9, "timestamp": 0 }]
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
