mod categories;
mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::Recommendation;
pub use rules::{RuleBook, RuleBookError, ScoringRule, POINTS_PER_QUESTION};

use super::catalog::QuestionCatalog;
use super::domain::{Answer, Category, WiscarDimension};
use super::report::synthesize;
use super::report::views::{AssessmentResult, ScoreBreakdown, WiscarScores};
use categories::{answer_map, tally, AnswerMap};
use serde::Serialize;
use tracing::debug;

/// Stateless scorer over a validated catalog and rule book.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: QuestionCatalog,
    rules: RuleBook,
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Build an engine, rejecting rule books that do not line up with `catalog`.
    pub fn new(
        catalog: QuestionCatalog,
        rules: RuleBook,
        config: ScoringConfig,
    ) -> Result<Self, RuleBookError> {
        rules.validate(&catalog)?;
        Ok(Self {
            catalog,
            rules,
            config,
        })
    }

    pub fn standard() -> Result<Self, RuleBookError> {
        Self::new(
            QuestionCatalog::standard(),
            RuleBook::standard(),
            ScoringConfig::default(),
        )
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a frozen answer set into the full result.
    pub fn score(&self, answers: &[Answer]) -> AssessmentResult {
        let answers = answer_map(answers);
        let scores = self.breakdown_from(&answers, |_| {});
        let recommendation =
            Recommendation::from_confidence(scores.confidence_score, &self.config);

        debug!(
            psychological_fit = scores.psychological_fit,
            technical_readiness = scores.technical_readiness,
            confidence_score = scores.confidence_score,
            recommendation = recommendation.label(),
            "assessment scored"
        );

        synthesize(scores, recommendation)
    }

    pub fn breakdown(&self, answers: &[Answer]) -> ScoreBreakdown {
        self.breakdown_from(&answer_map(answers), |_| {})
    }

    /// Per-question points behind a breakdown, in catalog order per category.
    pub fn components(&self, answers: &[Answer]) -> Vec<ScoreComponent> {
        let mut components = Vec::new();
        self.breakdown_from(&answer_map(answers), |component| components.push(component));
        components
    }

    fn breakdown_from(
        &self,
        answers: &AnswerMap<'_>,
        mut on_component: impl FnMut(ScoreComponent),
    ) -> ScoreBreakdown {
        let fallback = self.config.unanswered_fallback;

        let psychological_fit = tally(
            self.catalog.in_category(Category::Psychometric),
            answers,
            &self.rules,
            &mut on_component,
        )
        .percentage(fallback);

        let technical_readiness = tally(
            self.catalog.in_category(Category::Technical),
            answers,
            &self.rules,
            &mut on_component,
        )
        .percentage(fallback);

        let mut dimension_score = |dimension: WiscarDimension| {
            tally(
                self.catalog.in_dimension(dimension),
                answers,
                &self.rules,
                &mut on_component,
            )
            .percentage(fallback)
        };
        let wiscar = WiscarScores {
            will: dimension_score(WiscarDimension::Will),
            interest: dimension_score(WiscarDimension::Interest),
            skill: dimension_score(WiscarDimension::Skill),
            cognitive: dimension_score(WiscarDimension::Cognitive),
            ability_to_learn: dimension_score(WiscarDimension::AbilityToLearn),
            real_world_alignment: dimension_score(WiscarDimension::RealWorldAlignment),
        };

        let confidence_score =
            self.confidence(psychological_fit, technical_readiness, wiscar.average());

        ScoreBreakdown {
            psychological_fit,
            technical_readiness,
            wiscar,
            confidence_score,
        }
    }

    fn confidence(
        &self,
        psychological_fit: u8,
        technical_readiness: u8,
        wiscar_average: f64,
    ) -> u8 {
        let blended = f64::from(psychological_fit) * self.config.psychological_weight
            + f64::from(technical_readiness) * self.config.technical_weight
            + wiscar_average * self.config.wiscar_weight;
        blended.round().clamp(0.0, 100.0) as u8
    }
}

/// Points one answered question contributed, for audit output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub question_id: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WiscarDimension>,
    pub points: f64,
    pub max_points: f64,
}
