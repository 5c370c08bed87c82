pub(crate) mod insights;
pub mod profile;
pub mod views;

pub use profile::{ProfileAxis, WiscarProfile};
pub use views::{AssessmentResult, AssessmentResultView, Insights, ScoreBreakdown, WiscarScores};

use super::scoring::Recommendation;

/// Attach narrative output to a breakdown. Pure: same inputs, same result.
pub(crate) fn synthesize(
    scores: ScoreBreakdown,
    recommendation: Recommendation,
) -> AssessmentResult {
    AssessmentResult {
        recommendation,
        skill_gaps: insights::skill_gaps(&scores),
        next_steps: insights::next_steps(recommendation),
        career_matches: insights::career_matches(recommendation),
        alternative_paths: insights::alternative_paths(recommendation),
        insights: insights::generate_insights(&scores),
        scores,
    }
}
