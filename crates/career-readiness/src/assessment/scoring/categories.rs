use super::super::domain::{Answer, AnswerValue, Category, Question, QuestionFormat};
use super::rules::{
    RuleBook, ScoringRule, MISSED_TECHNICAL_POINTS, NEUTRAL_POINTS, POINTS_PER_QUESTION,
};
use super::ScoreComponent;
use std::collections::HashMap;
use tracing::debug;

/// Latest recorded value per question id.
pub(crate) type AnswerMap<'a> = HashMap<&'a str, &'a AnswerValue>;

/// Fold answers into a map; a later entry for the same question wins.
pub(crate) fn answer_map(answers: &[Answer]) -> AnswerMap<'_> {
    let mut map = HashMap::with_capacity(answers.len());
    for answer in answers {
        map.insert(answer.question_id.as_str(), &answer.value);
    }
    map
}

/// Running total for one category or WISCAR dimension.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Tally {
    pub earned: f64,
    pub possible: f64,
    pub answered: usize,
}

impl Tally {
    fn record(&mut self, points: f64) {
        self.earned += points;
        self.possible += POINTS_PER_QUESTION;
        self.answered += 1;
    }

    /// Whole-number percentage, or `fallback` when nothing was answered.
    pub fn percentage(&self, fallback: u8) -> u8 {
        if self.possible <= 0.0 {
            return fallback;
        }
        (self.earned / self.possible * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Score every answered question in `questions`, skipping the rest.
pub(crate) fn tally<'q>(
    questions: impl IntoIterator<Item = &'q Question>,
    answers: &AnswerMap<'_>,
    rules: &RuleBook,
    mut on_component: impl FnMut(ScoreComponent),
) -> Tally {
    let mut tally = Tally::default();
    for question in questions {
        let Some(value) = answers.get(question.id) else {
            continue;
        };
        let Some(points) = points_for(question, rules.rule_for(question.id), value) else {
            continue;
        };
        tally.record(points);
        on_component(ScoreComponent {
            question_id: question.id,
            category: question.category,
            dimension: question.wiscar_dimension(),
            points,
            max_points: POINTS_PER_QUESTION,
        });
    }
    tally
}

/// Points earned by one answer, or `None` when the answer does not count.
pub(crate) fn points_for(
    question: &Question,
    rule: Option<&ScoringRule>,
    value: &AnswerValue,
) -> Option<f64> {
    match question.category {
        Category::Technical => {
            Some(rule.map_or(MISSED_TECHNICAL_POINTS, |rule| rule.points(value)))
        }
        Category::Psychometric => match &question.format {
            QuestionFormat::Likert { .. } => likert_points(question, value),
            QuestionFormat::MultipleChoice { .. } | QuestionFormat::Scenario { .. } => {
                Some(rule.map_or(NEUTRAL_POINTS, |rule| rule.points(value)))
            }
            QuestionFormat::Boolean => {
                debug!(question_id = question.id, "boolean answers carry no psychometric weight");
                None
            }
        },
        Category::Wiscar => {
            if question.format.is_likert() {
                likert_points(question, value)
            } else {
                Some(rule.map_or(NEUTRAL_POINTS, |rule| rule.points(value)))
            }
        }
    }
}

fn likert_points(question: &Question, value: &AnswerValue) -> Option<f64> {
    let points = value.as_number();
    if points.is_none() {
        debug!(question_id = question.id, ?value, "skipping non-numeric likert answer");
    }
    points
}
