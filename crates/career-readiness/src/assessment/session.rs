use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerError, AnswerValue, AssessmentData, Question};
use chrono::{DateTime, Utc};

/// Navigation and answer events raised by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Answer {
        value: AnswerValue,
        at: DateTime<Utc>,
    },
    Next {
        at: DateTime<Utc>,
    },
    Previous,
    Restart {
        at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("question {question_id} needs an answer before moving on")]
    AnswerRequired { question_id: &'static str },
    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
    #[error("the assessment is already complete")]
    AlreadyCompleted,
    #[error("the catalog has no question at position {0}")]
    NoQuestion(usize),
}

/// In-progress assessment. Transitions never mutate; `apply` returns the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    current_index: usize,
    data: AssessmentData,
    completed: bool,
}

impl SessionState {
    pub fn start(at: DateTime<Utc>) -> Self {
        Self {
            current_index: 0,
            data: AssessmentData::started_at(at),
            completed: false,
        }
    }

    pub fn apply(
        &self,
        catalog: &QuestionCatalog,
        event: SessionEvent,
    ) -> Result<Self, SessionError> {
        match event {
            SessionEvent::Restart { at } => Ok(Self::start(at)),
            _ if self.completed => Err(SessionError::AlreadyCompleted),
            SessionEvent::Answer { value, at } => self.record(catalog, value, at),
            SessionEvent::Next { at } => self.advance(catalog, at),
            SessionEvent::Previous => Ok(Self {
                current_index: self.current_index.saturating_sub(1),
                ..self.clone()
            }),
        }
    }

    fn question<'c>(&self, catalog: &'c QuestionCatalog) -> Result<&'c Question, SessionError> {
        catalog
            .at(self.current_index)
            .ok_or(SessionError::NoQuestion(self.current_index))
    }

    fn record(
        &self,
        catalog: &QuestionCatalog,
        value: AnswerValue,
        at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let question = self.question(catalog)?;
        question.validate(&value)?;

        let mut next = self.clone();
        next.data
            .answers
            .retain(|answer| answer.question_id != question.id);
        next.data.answers.push(Answer::new(question.id, value, at));
        Ok(next)
    }

    fn advance(&self, catalog: &QuestionCatalog, at: DateTime<Utc>) -> Result<Self, SessionError> {
        let question = self.question(catalog)?;
        if self.data.answer_for(question.id).is_none() {
            return Err(SessionError::AnswerRequired {
                question_id: question.id,
            });
        }

        let mut next = self.clone();
        let section_closes = !catalog.questions()[self.current_index + 1..]
            .iter()
            .any(|later| later.category == question.category);
        let section = question.category.key().to_string();
        if section_closes && !next.data.completed_sections.contains(&section) {
            next.data.completed_sections.push(section);
        }

        if self.current_index + 1 < catalog.len() {
            next.current_index += 1;
        } else {
            next.completed = true;
            next.data.time_spent = (at - self.data.start_time).num_milliseconds().max(0);
        }
        Ok(next)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question<'c>(&self, catalog: &'c QuestionCatalog) -> Option<&'c Question> {
        catalog.at(self.current_index)
    }

    pub fn current_answer(&self, catalog: &QuestionCatalog) -> Option<&Answer> {
        let question = self.current_question(catalog)?;
        self.data.answer_for(question.id)
    }

    /// Navigation forward is gated on the current question having an answer.
    pub fn can_proceed(&self, catalog: &QuestionCatalog) -> bool {
        !self.completed && self.current_answer(catalog).is_some()
    }

    pub fn progress_pct(&self, catalog: &QuestionCatalog) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / catalog.len() as f64 * 100.0
    }

    /// Whole minutes left at ninety seconds per remaining question, never below one.
    pub fn estimated_minutes_remaining(&self, catalog: &QuestionCatalog) -> u32 {
        let remaining = catalog.len().saturating_sub(self.current_index + 1);
        let minutes = (remaining as f64 * 1.5).round() as u32;
        minutes.max(1)
    }

    pub fn section_label(&self, catalog: &QuestionCatalog) -> Option<&'static str> {
        self.current_question(catalog)
            .map(|question| question.category.label())
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn data(&self) -> &AssessmentData {
        &self.data
    }

    /// The frozen answer set, available once the last question is passed.
    pub fn snapshot(&self) -> Option<&AssessmentData> {
        self.completed.then_some(&self.data)
    }
}
