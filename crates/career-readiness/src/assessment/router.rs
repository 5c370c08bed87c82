use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::SectionSummary;
use super::domain::{Answer, Question};
use super::scoring::ScoringEngine;

/// Router builder exposing the question catalog and stateless scoring.
pub fn assessment_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse<'a> {
    pub(crate) total: usize,
    pub(crate) sections: Vec<SectionSummary>,
    pub(crate) questions: &'a [Question],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsRequest {
    pub(crate) answers: Vec<Answer>,
}

pub(crate) async fn questions_handler(State(engine): State<Arc<ScoringEngine>>) -> Response {
    let catalog = engine.catalog();
    let body = QuestionsResponse {
        total: catalog.len(),
        sections: catalog.sections(),
        questions: catalog.questions(),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn results_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(request): axum::Json<ResultsRequest>,
) -> Response {
    let catalog = engine.catalog();
    for answer in &request.answers {
        let Some(question) = catalog.get(&answer.question_id) else {
            let payload = json!({
                "error": format!("unknown question {}", answer.question_id),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        };
        if let Err(error) = question.validate(&answer.value) {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    }

    let result = engine.score(&request.answers);
    (StatusCode::OK, axum::Json(result.view())).into_response()
}
