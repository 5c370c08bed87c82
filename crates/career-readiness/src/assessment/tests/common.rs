use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::domain::{Answer, AnswerValue};
use crate::assessment::scoring::ScoringEngine;

pub(super) fn started() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn later(seconds: i64) -> DateTime<Utc> {
    started() + Duration::seconds(seconds)
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard().expect("standard rules validate")
}

pub(super) fn answers(entries: &[(&str, AnswerValue)]) -> Vec<Answer> {
    entries
        .iter()
        .enumerate()
        .map(|(offset, (question_id, value))| {
            Answer::new(*question_id, value.clone(), later(offset as i64))
        })
        .collect()
}

/// Best possible response to every standard question.
pub(super) fn strongest_entries() -> Vec<(&'static str, AnswerValue)> {
    vec![
        ("psych_1", 5u8.into()),
        ("psych_2", 5u8.into()),
        ("psych_3", 5u8.into()),
        ("psych_4", 5u8.into()),
        ("psych_5", 5u8.into()),
        ("tech_1", "Service Level Agreement".into()),
        ("tech_2", "Zendesk".into()),
        ("tech_3", "20 tickets".into()),
        (
            "tech_4",
            "To ensure complex issues reach appropriate expertise levels".into(),
        ),
        (
            "wiscar_will_1",
            "Document the issue and propose improvements despite extra effort".into(),
        ),
        ("wiscar_interest_1", 5u8.into()),
        (
            "wiscar_skill_1",
            "Expert - I can configure and optimize these systems".into(),
        ),
        (
            "wiscar_cognitive_1",
            "Analyze ticket data to identify patterns and bottlenecks".into(),
        ),
        ("wiscar_learning_1", 5u8.into()),
        (
            "wiscar_real_world_1",
            "Investigate the root cause and implement process improvements".into(),
        ),
        ("psych_6", 5u8.into()),
        ("tech_5", "All of the above are important".into()),
        ("wiscar_will_2", 5u8.into()),
    ]
}

/// Weakest response to every standard question.
pub(super) fn weakest_entries() -> Vec<(&'static str, AnswerValue)> {
    vec![
        ("psych_1", 1u8.into()),
        ("psych_2", 1u8.into()),
        ("psych_3", 1u8.into()),
        ("psych_4", 1u8.into()),
        ("psych_5", 1u8.into()),
        ("tech_1", "Support Level Analysis".into()),
        ("tech_2", "Photoshop".into()),
        ("tech_3", "25 tickets".into()),
        ("tech_4", "To increase ticket volume".into()),
        (
            "wiscar_will_1",
            "Wait for someone else to notice the problem".into(),
        ),
        ("wiscar_interest_1", 1u8.into()),
        ("wiscar_skill_1", "No experience - I would need training".into()),
        ("wiscar_cognitive_1", "Suggest hiring more people".into()),
        ("wiscar_learning_1", 1u8.into()),
        (
            "wiscar_real_world_1",
            "Blame the support team for poor performance".into(),
        ),
        ("psych_6", 1u8.into()),
        ("tech_5", "Number of tickets closed".into()),
        ("wiscar_will_2", 1u8.into()),
    ]
}

pub(super) fn strongest_answers() -> Vec<Answer> {
    answers(&strongest_entries())
}

pub(super) fn weakest_answers() -> Vec<Answer> {
    answers(&weakest_entries())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
