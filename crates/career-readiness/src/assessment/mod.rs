//! Career-readiness assessment: question catalog, session reducer, scoring, and result synthesis.
//!
//! Scoring is a pure function of the frozen answer set. The session reducer and snapshot
//! store only decide which answers reach it.

pub mod catalog;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog, SectionSummary};
pub use domain::{
    Answer, AnswerError, AnswerValue, AssessmentData, Category, LikertScale, Question,
    QuestionFormat, WiscarDimension,
};
pub use report::profile::{ProfileAxis, WiscarProfile};
pub use report::views::{
    AssessmentResult, AssessmentResultView, Insights, ScoreBreakdown, WiscarScores,
};
pub use router::assessment_router;
pub use scoring::{
    Recommendation, RuleBook, RuleBookError, ScoreComponent, ScoringConfig, ScoringEngine,
    ScoringRule, POINTS_PER_QUESTION,
};
pub use session::{SessionError, SessionEvent, SessionState};
pub use store::{
    AssessmentArchive, FileSnapshotStore, MemorySnapshotStore, SnapshotStore, StoreError,
    SNAPSHOT_KEY,
};
