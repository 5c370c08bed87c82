use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Coarse verdict on the Support Operations Coordinator track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Thresholds are inclusive lower bounds, so a boundary score lands in the higher tier.
    pub fn from_confidence(confidence_score: u8, config: &ScoringConfig) -> Self {
        if confidence_score >= config.yes_threshold {
            Recommendation::Yes
        } else if confidence_score >= config.maybe_threshold {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::Maybe => "MAYBE",
            Recommendation::No => "NO",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "Highly Recommended",
            Recommendation::Maybe => "Potential Match",
            Recommendation::No => "Consider Alternatives",
        }
    }

    pub fn message(self, confidence_score: u8) -> String {
        match self {
            Recommendation::Yes => format!(
                "Excellent! With a confidence score of {confidence_score}%, you have a strong profile for Support Operations Coordination. Your skills, interests, and mindset align well with this career path."
            ),
            Recommendation::Maybe => format!(
                "Good potential! With a confidence score of {confidence_score}%, you show promise for Support Operations Coordination but may benefit from developing certain skills first."
            ),
            Recommendation::No => format!(
                "While Support Operations Coordination might not be the ideal fit right now (confidence score: {confidence_score}%), there are alternative paths that could lead you there or to similar roles."
            ),
        }
    }
}
