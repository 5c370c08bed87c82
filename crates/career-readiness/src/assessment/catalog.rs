use super::domain::{Category, LikertScale, Question, QuestionFormat, WiscarDimension};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, validated set of questions presented one at a time.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

/// Section heading with the number of questions it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub category: Category,
    pub label: &'static str,
    pub questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no questions")]
    Empty,
    #[error("question at position {0} has an empty id")]
    MissingId(usize),
    #[error("question id {0} appears more than once")]
    DuplicateId(&'static str),
    #[error("question {0} offers no options")]
    NoOptions(&'static str),
    #[error("question {question_id} lists option '{option}' twice")]
    DuplicateOption {
        question_id: &'static str,
        option: &'static str,
    },
    #[error("likert scale of {question_id} needs min < max (found {min}..={max})")]
    InvalidScale {
        question_id: &'static str,
        min: u8,
        max: u8,
    },
    #[error("WISCAR question {0} has no recognised dimension")]
    UnknownDimension(&'static str),
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (position, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(CatalogError::MissingId(position));
            }
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }

            match &question.format {
                QuestionFormat::Likert { scale } if scale.min >= scale.max => {
                    return Err(CatalogError::InvalidScale {
                        question_id: question.id,
                        min: scale.min,
                        max: scale.max,
                    });
                }
                QuestionFormat::MultipleChoice { options } | QuestionFormat::Scenario { options } => {
                    if options.is_empty() {
                        return Err(CatalogError::NoOptions(question.id));
                    }
                    let mut labels = HashSet::new();
                    for option in options.iter().copied() {
                        if !labels.insert(option) {
                            return Err(CatalogError::DuplicateOption {
                                question_id: question.id,
                                option,
                            });
                        }
                    }
                }
                _ => {}
            }

            if question.category == Category::Wiscar && question.wiscar_dimension().is_none() {
                return Err(CatalogError::UnknownDimension(question.id));
            }
        }

        Ok(Self { questions })
    }

    /// The Support Operations Coordinator question set.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn in_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn in_dimension(&self, dimension: WiscarDimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.wiscar_dimension() == Some(dimension))
            .collect()
    }

    /// Sections in order of first appearance.
    pub fn sections(&self) -> Vec<SectionSummary> {
        let mut sections: Vec<SectionSummary> = Vec::new();
        for question in &self.questions {
            match sections
                .iter_mut()
                .find(|section| section.category == question.category)
            {
                Some(section) => section.questions += 1,
                None => sections.push(SectionSummary {
                    category: question.category,
                    label: question.category.label(),
                    questions: 1,
                }),
            }
        }
        sections
    }
}

fn likert(
    id: &'static str,
    category: Category,
    subcategory: &'static str,
    prompt: &'static str,
) -> Question {
    Question {
        id,
        category,
        subcategory: Some(subcategory),
        prompt,
        format: QuestionFormat::Likert {
            scale: LikertScale::agreement(),
        },
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        likert(
            "psych_1",
            Category::Psychometric,
            "interest",
            "I enjoy organizing and coordinating workflows between different teams.",
        ),
        likert(
            "psych_2",
            Category::Psychometric,
            "interest",
            "I find satisfaction in helping teams operate more efficiently.",
        ),
        likert(
            "psych_3",
            Category::Psychometric,
            "personality",
            "I am naturally detail-oriented and rarely miss important information.",
        ),
        likert(
            "psych_4",
            Category::Psychometric,
            "personality",
            "I prefer structured environments with clear processes and procedures.",
        ),
        likert(
            "psych_5",
            Category::Psychometric,
            "motivation",
            "I am motivated by improving systems and processes for long-term benefit.",
        ),
        Question {
            id: "tech_1",
            category: Category::Technical,
            subcategory: Some("domain_knowledge"),
            prompt: "What does SLA stand for in support operations?",
            format: QuestionFormat::MultipleChoice {
                options: vec![
                    "Service Level Agreement",
                    "Support Level Analysis",
                    "System Level Automation",
                    "Service Line Application",
                ],
            },
        },
        Question {
            id: "tech_2",
            category: Category::Technical,
            subcategory: Some("tools"),
            prompt: "Which of these is typically used for ticket management in support operations?",
            format: QuestionFormat::MultipleChoice {
                options: vec!["Zendesk", "Photoshop", "AutoCAD", "Final Cut Pro"],
            },
        },
        Question {
            id: "tech_3",
            category: Category::Technical,
            subcategory: Some("logical_reasoning"),
            prompt: "A support team receives 100 tickets daily. High priority tickets must be resolved within 4 hours, medium priority within 24 hours, and low priority within 72 hours. If 20% are high priority, 50% are medium, and 30% are low priority, what is the maximum number of high priority tickets the team should handle per day to meet SLA?",
            format: QuestionFormat::Scenario {
                options: vec!["20 tickets", "15 tickets", "25 tickets", "10 tickets"],
            },
        },
        Question {
            id: "tech_4",
            category: Category::Technical,
            subcategory: Some("processes"),
            prompt: "What is the primary purpose of escalation protocols in support operations?",
            format: QuestionFormat::MultipleChoice {
                options: vec![
                    "To ensure complex issues reach appropriate expertise levels",
                    "To increase ticket volume",
                    "To reduce customer satisfaction",
                    "To eliminate the need for documentation",
                ],
            },
        },
        Question {
            id: "wiscar_will_1",
            category: Category::Wiscar,
            subcategory: Some("will"),
            prompt: "You encounter a repetitive process that could be improved, but it would require extra effort to document and propose changes. What would you do?",
            format: QuestionFormat::Scenario {
                options: vec![
                    "Continue with the current process to avoid extra work",
                    "Document the issue and propose improvements despite extra effort",
                    "Mention it to someone else and hope they handle it",
                    "Wait for someone else to notice the problem",
                ],
            },
        },
        likert(
            "wiscar_interest_1",
            Category::Wiscar,
            "interest",
            "I genuinely enjoy analyzing data to identify trends and improvement opportunities.",
        ),
        Question {
            id: "wiscar_skill_1",
            category: Category::Wiscar,
            subcategory: Some("skill"),
            prompt: "How would you rate your current proficiency with CRM and ticketing systems?",
            format: QuestionFormat::MultipleChoice {
                options: vec![
                    "Expert - I can configure and optimize these systems",
                    "Advanced - I can use advanced features effectively",
                    "Intermediate - I can handle most common tasks",
                    "Beginner - I have basic familiarity",
                    "No experience - I would need training",
                ],
            },
        },
        Question {
            id: "wiscar_cognitive_1",
            category: Category::Wiscar,
            subcategory: Some("cognitive"),
            prompt: "Your team is experiencing longer resolution times. How would you approach diagnosing the problem?",
            format: QuestionFormat::Scenario {
                options: vec![
                    "Ask team members what they think is wrong",
                    "Analyze ticket data to identify patterns and bottlenecks",
                    "Wait for management to address it",
                    "Suggest hiring more people",
                ],
            },
        },
        likert(
            "wiscar_learning_1",
            Category::Wiscar,
            "ability_to_learn",
            "I actively seek feedback on my work and use it to improve.",
        ),
        Question {
            id: "wiscar_real_world_1",
            category: Category::Wiscar,
            subcategory: Some("real_world_alignment"),
            prompt: "A customer escalates a complaint about slow response times. As a Support Operations Coordinator, what would be your primary focus?",
            format: QuestionFormat::Scenario {
                options: vec![
                    "Apologize to the customer and move on",
                    "Investigate the root cause and implement process improvements",
                    "Blame the support team for poor performance",
                    "Escalate to management immediately",
                ],
            },
        },
        likert(
            "psych_6",
            Category::Psychometric,
            "personality",
            "I work well under pressure and can maintain quality when managing multiple priorities.",
        ),
        Question {
            id: "tech_5",
            category: Category::Technical,
            subcategory: Some("metrics"),
            prompt: "Which metric is most important for measuring support team efficiency?",
            format: QuestionFormat::MultipleChoice {
                options: vec![
                    "First Response Time",
                    "Number of tickets closed",
                    "Customer Satisfaction Score",
                    "All of the above are important",
                ],
            },
        },
        likert(
            "wiscar_will_2",
            Category::Wiscar,
            "will",
            "I am willing to learn new tools and technologies to improve operational efficiency.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_its_own_validation() {
        let standard = QuestionCatalog::standard();
        let validated =
            QuestionCatalog::new(standard.questions().to_vec()).expect("standard catalog is valid");
        assert_eq!(validated.len(), 18);
    }

    #[test]
    fn sections_follow_first_appearance() {
        let sections = QuestionCatalog::standard().sections();
        let counts: Vec<(Category, usize)> = sections
            .iter()
            .map(|section| (section.category, section.questions))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Category::Psychometric, 6),
                (Category::Technical, 5),
                (Category::Wiscar, 7)
            ]
        );
    }

    #[test]
    fn every_dimension_has_at_least_one_question() {
        let catalog = QuestionCatalog::standard();
        for dimension in WiscarDimension::ordered() {
            assert!(
                !catalog.in_dimension(dimension).is_empty(),
                "{} has no questions",
                dimension.key()
            );
        }
        assert_eq!(catalog.in_dimension(WiscarDimension::Will).len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = QuestionCatalog::standard().questions().to_vec();
        questions.push(questions[0].clone());
        assert_eq!(
            QuestionCatalog::new(questions).expect_err("duplicate id"),
            CatalogError::DuplicateId("psych_1")
        );
    }

    #[test]
    fn rejects_wiscar_question_without_dimension() {
        let question = likert("wiscar_x", Category::Wiscar, "grit", "I never give up.");
        assert_eq!(
            QuestionCatalog::new(vec![question]).expect_err("unknown dimension"),
            CatalogError::UnknownDimension("wiscar_x")
        );
    }

    #[test]
    fn rejects_inverted_likert_scale() {
        let mut question = likert("psych_x", Category::Psychometric, "interest", "Prompt");
        question.format = QuestionFormat::Likert {
            scale: LikertScale {
                min: 5,
                max: 1,
                min_label: "High",
                max_label: "Low",
            },
        };
        assert!(matches!(
            QuestionCatalog::new(vec![question]),
            Err(CatalogError::InvalidScale { min: 5, max: 1, .. })
        ));
    }

    #[test]
    fn serializes_in_the_client_shape() {
        let catalog = QuestionCatalog::standard();
        let likert = serde_json::to_value(catalog.get("psych_1").expect("psych_1"))
            .expect("serializes");
        assert_eq!(likert["type"], "likert");
        assert_eq!(likert["question"], catalog.questions()[0].prompt);
        assert_eq!(likert["likertScale"]["maxLabel"], "Strongly Agree");

        let scenario = serde_json::to_value(catalog.get("tech_3").expect("tech_3"))
            .expect("serializes");
        assert_eq!(scenario["type"], "scenario");
        assert_eq!(scenario["category"], "technical");
        assert_eq!(scenario["options"][0], "20 tickets");
    }
}
