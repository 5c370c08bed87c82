use serde::{Deserialize, Serialize};

/// Weights and thresholds that turn category scores into a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub psychological_weight: f64,
    pub technical_weight: f64,
    pub wiscar_weight: f64,
    /// Inclusive lower bound of the YES tier.
    pub yes_threshold: u8,
    /// Inclusive lower bound of the MAYBE tier.
    pub maybe_threshold: u8,
    /// Score reported for a category or dimension with no answered questions.
    pub unanswered_fallback: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            psychological_weight: 0.3,
            technical_weight: 0.3,
            wiscar_weight: 0.4,
            yes_threshold: 80,
            maybe_threshold: 60,
            unanswered_fallback: 75,
        }
    }
}
