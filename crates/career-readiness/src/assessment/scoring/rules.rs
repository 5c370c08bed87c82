use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerValue, Category, Question};
use std::collections::HashMap;

/// Every scored question is worth this many points.
pub const POINTS_PER_QUESTION: f64 = 5.0;
pub(crate) const NEUTRAL_POINTS: f64 = 3.0;
pub(crate) const MISSED_TECHNICAL_POINTS: f64 = 2.0;
const BOOLEAN_OPTIONS: &[&str] = &["yes", "no"];

/// How a choice-style answer turns into points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringRule {
    /// Technical item: full marks on the exact option, 2 otherwise.
    CorrectAnswer(&'static str),
    /// WISCAR item: full marks on the exact option, neutral otherwise.
    PreferredAnswer(&'static str),
    /// Per-option points; options not listed score neutral.
    Graded(Vec<(&'static str, u8)>),
}

impl ScoringRule {
    pub(crate) fn points(&self, value: &AnswerValue) -> f64 {
        let chosen = value.as_text();
        match self {
            ScoringRule::CorrectAnswer(correct) => {
                if chosen == Some(*correct) {
                    POINTS_PER_QUESTION
                } else {
                    MISSED_TECHNICAL_POINTS
                }
            }
            ScoringRule::PreferredAnswer(preferred) => {
                if chosen == Some(*preferred) {
                    POINTS_PER_QUESTION
                } else {
                    NEUTRAL_POINTS
                }
            }
            ScoringRule::Graded(table) => table
                .iter()
                .find(|(option, _)| Some(*option) == chosen)
                .map(|(_, points)| f64::from(*points))
                .unwrap_or(NEUTRAL_POINTS),
        }
    }

    fn referenced_options(&self) -> Vec<&'static str> {
        match self {
            ScoringRule::CorrectAnswer(option) | ScoringRule::PreferredAnswer(option) => {
                vec![*option]
            }
            ScoringRule::Graded(table) => table.iter().map(|(option, _)| *option).collect(),
        }
    }

    fn allowed_in(&self, category: Category) -> bool {
        match self {
            ScoringRule::CorrectAnswer(_) => category == Category::Technical,
            ScoringRule::PreferredAnswer(_) => category == Category::Wiscar,
            ScoringRule::Graded(_) => {
                matches!(category, Category::Psychometric | Category::Wiscar)
            }
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            ScoringRule::CorrectAnswer(_) => "correct-answer",
            ScoringRule::PreferredAnswer(_) => "preferred-answer",
            ScoringRule::Graded(_) => "graded",
        }
    }
}

/// Scoring rules keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<&'static str, ScoringRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleBookError {
    #[error("rule targets unknown question {0}")]
    UnknownQuestion(&'static str),
    #[error("likert question {0} is scored by its rating and takes no rule")]
    LikertRule(&'static str),
    #[error("{kind} rule cannot score {category:?} question {question_id}")]
    CategoryMismatch {
        question_id: &'static str,
        category: Category,
        kind: &'static str,
    },
    #[error("rule for {question_id} names '{option}', which the question does not offer")]
    UnknownOption {
        question_id: &'static str,
        option: &'static str,
    },
    #[error("rule for {question_id} grades '{option}' with {points} points (expected 1..=5)")]
    PointsOutOfRange {
        question_id: &'static str,
        option: &'static str,
        points: u8,
    },
    #[error("technical question {0} has no correct answer on record")]
    MissingCorrectAnswer(&'static str),
    #[error("WISCAR question {0} has no scoring rule")]
    MissingWiscarRule(&'static str),
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, question_id: &'static str, rule: ScoringRule) -> Self {
        self.rules.insert(question_id, rule);
        self
    }

    /// Rules that ship with the standard catalog.
    pub fn standard() -> Self {
        Self::new()
            .with_rule("tech_1", ScoringRule::CorrectAnswer("Service Level Agreement"))
            .with_rule("tech_2", ScoringRule::CorrectAnswer("Zendesk"))
            .with_rule("tech_3", ScoringRule::CorrectAnswer("20 tickets"))
            .with_rule(
                "tech_4",
                ScoringRule::CorrectAnswer(
                    "To ensure complex issues reach appropriate expertise levels",
                ),
            )
            .with_rule(
                "tech_5",
                ScoringRule::CorrectAnswer("All of the above are important"),
            )
            .with_rule(
                "wiscar_will_1",
                ScoringRule::PreferredAnswer(
                    "Document the issue and propose improvements despite extra effort",
                ),
            )
            .with_rule(
                "wiscar_cognitive_1",
                ScoringRule::PreferredAnswer(
                    "Analyze ticket data to identify patterns and bottlenecks",
                ),
            )
            .with_rule(
                "wiscar_real_world_1",
                ScoringRule::PreferredAnswer(
                    "Investigate the root cause and implement process improvements",
                ),
            )
            .with_rule(
                "wiscar_skill_1",
                ScoringRule::Graded(vec![
                    ("Expert - I can configure and optimize these systems", 5),
                    ("Advanced - I can use advanced features effectively", 4),
                    ("Intermediate - I can handle most common tasks", 3),
                    ("Beginner - I have basic familiarity", 2),
                    ("No experience - I would need training", 1),
                ]),
            )
    }

    pub fn rule_for(&self, question_id: &str) -> Option<&ScoringRule> {
        self.rules.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Cross-check the rules against `catalog`, failing on the first gap.
    pub fn validate(&self, catalog: &QuestionCatalog) -> Result<(), RuleBookError> {
        let mut question_ids: Vec<&'static str> = self.rules.keys().copied().collect();
        question_ids.sort();

        for question_id in question_ids {
            let question = catalog
                .get(question_id)
                .ok_or(RuleBookError::UnknownQuestion(question_id))?;
            let rule = &self.rules[question_id];
            check_rule(question, rule)?;
        }

        for question in catalog.questions() {
            if question.format.is_likert() || self.rules.contains_key(question.id) {
                continue;
            }
            match question.category {
                Category::Technical => {
                    return Err(RuleBookError::MissingCorrectAnswer(question.id));
                }
                Category::Wiscar => return Err(RuleBookError::MissingWiscarRule(question.id)),
                Category::Psychometric => {}
            }
        }

        Ok(())
    }
}

fn check_rule(question: &Question, rule: &ScoringRule) -> Result<(), RuleBookError> {
    if question.format.is_likert() {
        return Err(RuleBookError::LikertRule(question.id));
    }
    if !rule.allowed_in(question.category) {
        return Err(RuleBookError::CategoryMismatch {
            question_id: question.id,
            category: question.category,
            kind: rule.kind(),
        });
    }

    let offered = question.format.options().unwrap_or(BOOLEAN_OPTIONS);
    for option in rule.referenced_options() {
        if !offered.contains(&option) {
            return Err(RuleBookError::UnknownOption {
                question_id: question.id,
                option,
            });
        }
    }

    if let ScoringRule::Graded(table) = rule {
        if let Some((option, points)) = table
            .iter()
            .find(|(_, points)| !(1..=5).contains(points))
        {
            return Err(RuleBookError::PointsOutOfRange {
                question_id: question.id,
                option: *option,
                points: *points,
            });
        }
    }

    Ok(())
}
