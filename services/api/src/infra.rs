use career_readiness::assessment::{
    Answer, AssessmentArchive, AssessmentData, FileSnapshotStore, ScoringEngine,
};
use career_readiness::config::StoreConfig;
use career_readiness::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accepted shapes for `score --input`: a full client snapshot or a bare answer list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScoreInput {
    Snapshot(AssessmentData),
    Answers { answers: Vec<Answer> },
}

impl ScoreInput {
    pub(crate) fn into_answers(self) -> Vec<Answer> {
        match self {
            ScoreInput::Snapshot(data) => data.answers,
            ScoreInput::Answers { answers } => answers,
        }
    }
}

pub(crate) fn standard_engine() -> Result<Arc<ScoringEngine>, AppError> {
    Ok(Arc::new(ScoringEngine::standard()?))
}

pub(crate) fn file_archive(store: &StoreConfig) -> AssessmentArchive<FileSnapshotStore> {
    AssessmentArchive::new(FileSnapshotStore::new(store.directory.clone()))
}

pub(crate) fn read_score_input(path: &Path) -> Result<Vec<Answer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_score_input(&raw)
}

pub(crate) fn parse_score_input(raw: &str) -> Result<Vec<Answer>, AppError> {
    let input: ScoreInput = serde_json::from_str(raw)?;
    Ok(input.into_answers())
}
