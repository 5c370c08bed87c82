use super::super::domain::WiscarDimension;
use super::super::scoring::Recommendation;
use super::profile::WiscarProfile;
use serde::{Deserialize, Serialize};

/// Six WISCAR sub-scores, each 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    /// Scores paired with their dimension, in WISCAR order.
    pub fn entries(&self) -> [(WiscarDimension, u8); 6] {
        WiscarDimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }

    pub fn average(&self) -> f64 {
        let total: f64 = self
            .entries()
            .iter()
            .map(|(_, score)| f64::from(*score))
            .sum();
        total / 6.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub psychological_fit: u8,
    pub technical_readiness: u8,
    pub wiscar: WiscarScores,
    pub confidence_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub personality: String,
}

/// Immutable outcome of one scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub scores: ScoreBreakdown,
    pub recommendation: Recommendation,
    pub skill_gaps: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_matches: Vec<String>,
    pub alternative_paths: Vec<String>,
    pub insights: Insights,
}

impl AssessmentResult {
    pub fn view(&self) -> AssessmentResultView {
        AssessmentResultView {
            result: self.clone(),
            headline: self.recommendation.headline(),
            message: self.recommendation.message(self.scores.confidence_score),
            profile: WiscarProfile::from_scores(&self.scores.wiscar),
        }
    }
}

/// Result plus the presentation data the results view renders.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResultView {
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub headline: &'static str,
    pub message: String,
    pub profile: WiscarProfile,
}
