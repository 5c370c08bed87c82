use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assessment section a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychological Assessment",
            Self::Technical => "Technical Assessment",
            Self::Wiscar => "WISCAR Framework",
        }
    }
}

/// One of the six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldAlignment,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::AbilityToLearn,
            Self::RealWorldAlignment,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::AbilityToLearn => "ability_to_learn",
            Self::RealWorldAlignment => "real_world_alignment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::AbilityToLearn => "Ability to learn",
            Self::RealWorldAlignment => "Real world alignment",
        }
    }

    /// Short axis label used on the radar chart.
    pub const fn chart_label(self) -> &'static str {
        match self {
            Self::AbilityToLearn => "Learning",
            Self::RealWorldAlignment => "Alignment",
            other => other.label(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.key() == key)
    }
}

/// Bounds and endpoint labels of a likert item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

impl LikertScale {
    /// The five point agreement scale every built-in likert item uses.
    pub const fn agreement() -> Self {
        Self {
            min: 1,
            max: 5,
            min_label: "Strongly Disagree",
            max_label: "Strongly Agree",
        }
    }
}

/// Question type together with the payload that type needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionFormat {
    Likert {
        #[serde(rename = "likertScale")]
        scale: LikertScale,
    },
    MultipleChoice {
        options: Vec<&'static str>,
    },
    Scenario {
        options: Vec<&'static str>,
    },
    Boolean,
}

impl QuestionFormat {
    pub fn options(&self) -> Option<&[&'static str]> {
        match self {
            QuestionFormat::MultipleChoice { options } | QuestionFormat::Scenario { options } => {
                Some(options)
            }
            QuestionFormat::Likert { .. } | QuestionFormat::Boolean => None,
        }
    }

    pub const fn is_likert(&self) -> bool {
        matches!(self, QuestionFormat::Likert { .. })
    }

    pub const fn label(&self) -> &'static str {
        match self {
            QuestionFormat::Likert { .. } => "likert",
            QuestionFormat::MultipleChoice { .. } => "multiple-choice",
            QuestionFormat::Scenario { .. } => "scenario",
            QuestionFormat::Boolean => "boolean",
        }
    }
}

/// Static question definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<&'static str>,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    #[serde(flatten)]
    pub format: QuestionFormat,
}

impl Question {
    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        if self.category != Category::Wiscar {
            return None;
        }
        self.subcategory.and_then(WiscarDimension::from_key)
    }

    /// Check that `value` is an acceptable response before it enters a session.
    pub fn validate(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match &self.format {
            QuestionFormat::Likert { scale } => {
                let Some(number) = value.as_number() else {
                    return Err(AnswerError::ExpectedNumber {
                        question_id: self.id,
                    });
                };
                if number.fract() != 0.0
                    || number < f64::from(scale.min)
                    || number > f64::from(scale.max)
                {
                    return Err(AnswerError::OutOfRange {
                        question_id: self.id,
                        min: scale.min,
                        max: scale.max,
                        value: number,
                    });
                }
            }
            QuestionFormat::MultipleChoice { options } | QuestionFormat::Scenario { options } => {
                let text = value.as_text().ok_or(AnswerError::ExpectedText {
                    question_id: self.id,
                })?;
                if !options.iter().any(|option| *option == text) {
                    return Err(AnswerError::UnknownOption {
                        question_id: self.id,
                        value: text.to_string(),
                    });
                }
            }
            QuestionFormat::Boolean => {
                let text = value.as_text().ok_or(AnswerError::ExpectedText {
                    question_id: self.id,
                })?;
                if text != "yes" && text != "no" {
                    return Err(AnswerError::UnknownOption {
                        question_id: self.id,
                        value: text.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Recorded response: a number for likert items, an option label otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Number(_) => None,
        }
    }

    /// Numeric reading of the value; numeric text is accepted.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            AnswerValue::Number(number) => Some(*number),
            AnswerValue::Text(text) => text.trim().parse::<f64>().ok(),
        };
        number.filter(|number| number.is_finite())
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    pub fn new(
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp: at,
        }
    }
}

/// Frozen session handed from the quiz to the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    pub answers: Vec<Answer>,
    /// Milliseconds between `start_time` and completion.
    pub time_spent: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub completed_sections: Vec<String>,
}

impl AssessmentData {
    pub fn started_at(start_time: DateTime<Utc>) -> Self {
        Self {
            answers: Vec::new(),
            time_spent: 0,
            start_time,
            completed_sections: Vec::new(),
        }
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }
}

/// Rejection raised when a response does not fit its question.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {question_id} expects a numeric rating")]
    ExpectedNumber { question_id: &'static str },
    #[error("question {question_id} expects one of its option labels")]
    ExpectedText { question_id: &'static str },
    #[error("rating {value} for {question_id} is outside {min}..={max}")]
    OutOfRange {
        question_id: &'static str,
        min: u8,
        max: u8,
        value: f64,
    },
    #[error("'{value}' is not an option of {question_id}")]
    UnknownOption {
        question_id: &'static str,
        value: String,
    },
}
