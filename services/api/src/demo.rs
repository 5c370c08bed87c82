use crate::cli::{QuestionsArgs, ResultsArgs};
use crate::infra::{file_archive, read_score_input, standard_engine};
use career_readiness::assessment::{
    AnswerValue, AssessmentResultView, Question, QuestionFormat, RuleBook, ScoreComponent,
    ScoringEngine, ScoringRule, SessionEvent, SessionState,
};
use career_readiness::config::AppConfig;
use career_readiness::error::AppError;
use chrono::{Duration, Utc};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an assessment snapshot or `{"answers": [...]}`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// List the points each answered question contributed
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scripted candidate to walk through the assessment
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    /// Save the finished snapshot so `results` can show it afterwards
    #[arg(long)]
    pub(crate) persist: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Preferred option and top rating everywhere
    #[default]
    Strong,
    /// Rating 4 and the second listed option
    Moderate,
    /// Lowest rating and the last listed option
    Weak,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let engine = standard_engine()?;
    let catalog = engine.catalog();

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.questions())?);
        return Ok(());
    }

    println!("Support Operations Coordinator assessment");
    for section in catalog.sections() {
        println!("\n{} ({} questions)", section.label, section.questions);
        for (position, question) in catalog.questions().iter().enumerate() {
            if question.category != section.category {
                continue;
            }
            println!("{:>2}. [{}] {}", position + 1, question.id, question.prompt);
            match &question.format {
                QuestionFormat::Likert { scale } => println!(
                    "      {} ({}) .. {} ({})",
                    scale.min, scale.min_label, scale.max, scale.max_label
                ),
                QuestionFormat::Boolean => println!("      yes / no"),
                QuestionFormat::MultipleChoice { options } | QuestionFormat::Scenario { options } => {
                    for option in options {
                        println!("      - {}", option);
                    }
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = standard_engine()?;
    let answers = read_score_input(&args.input)?;
    let view = engine.score(&answers).view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_result(&view);
    }
    if args.explain {
        render_components(&engine.components(&answers));
    }
    Ok(())
}

pub(crate) fn run_results(args: ResultsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let archive = file_archive(&config.store);

    if args.clear {
        archive.clear()?;
        println!(
            "Cleared stored assessment in {}",
            archive.store().directory().display()
        );
        return Ok(());
    }

    let Some(data) = archive.load()? else {
        println!("No assessment in progress. Run `demo --persist` or take the assessment first.");
        return Ok(());
    };

    let engine = standard_engine()?;
    let view = engine.score(&data.answers).view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "Stored assessment: {} answers, {} seconds, sections completed: {}",
            data.answers.len(),
            data.time_spent / 1000,
            data.completed_sections.join(", ")
        );
        render_result(&view);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = standard_engine()?;
    println!("Career readiness demo ({:?} candidate)", args.profile);

    let state = scripted_session(&engine, args.profile)?;
    let Some(snapshot) = state.snapshot() else {
        println!("  Session did not reach the end of the catalog");
        return Ok(());
    };
    println!(
        "- Answered {} questions in {} seconds",
        snapshot.answers.len(),
        snapshot.time_spent / 1000
    );

    if args.persist {
        let config = AppConfig::load()?;
        let archive = file_archive(&config.store);
        archive.save(snapshot)?;
        println!(
            "- Snapshot saved under {}",
            archive.store().directory().display()
        );
    }

    let view = engine.score(&snapshot.answers).view();
    render_result(&view);
    Ok(())
}

/// Drive the session reducer through the whole catalog, forty-five seconds per question.
pub(crate) fn scripted_session(
    engine: &ScoringEngine,
    profile: DemoProfile,
) -> Result<SessionState, AppError> {
    let catalog = engine.catalog();
    let mut clock = Utc::now();
    let mut state = SessionState::start(clock);
    let mut section = None;

    while let Some(question) = state.current_question(catalog) {
        if state.is_complete() {
            break;
        }
        let label = state.section_label(catalog);
        if label != section {
            if let Some(label) = label {
                println!("\n{}", label);
            }
            section = label;
        }

        clock += Duration::seconds(45);
        let value = scripted_answer(question, engine.rules(), profile);
        println!(
            "  [{:>3.0}%, ~{} min left] {} -> {}",
            state.progress_pct(catalog),
            state.estimated_minutes_remaining(catalog),
            question.id,
            describe(&value)
        );
        state = state.apply(catalog, SessionEvent::Answer { value, at: clock })?;
        state = state.apply(catalog, SessionEvent::Next { at: clock })?;
    }
    println!();
    Ok(state)
}

pub(crate) fn scripted_answer(
    question: &Question,
    rules: &RuleBook,
    profile: DemoProfile,
) -> AnswerValue {
    match &question.format {
        QuestionFormat::Likert { scale } => AnswerValue::from(match profile {
            DemoProfile::Strong => scale.max,
            DemoProfile::Moderate => scale.max.saturating_sub(1).max(scale.min),
            DemoProfile::Weak => scale.min,
        }),
        QuestionFormat::Boolean => AnswerValue::from(match profile {
            DemoProfile::Weak => "no",
            DemoProfile::Strong | DemoProfile::Moderate => "yes",
        }),
        QuestionFormat::MultipleChoice { options } | QuestionFormat::Scenario { options } => {
            let chosen = match profile {
                DemoProfile::Strong => {
                    best_option(rules.rule_for(question.id)).or(options.first().copied())
                }
                DemoProfile::Moderate => options.get(1).or(options.first()).copied(),
                DemoProfile::Weak => options.last().copied(),
            };
            AnswerValue::from(chosen.unwrap_or_default())
        }
    }
}

fn best_option(rule: Option<&ScoringRule>) -> Option<&'static str> {
    match rule? {
        ScoringRule::CorrectAnswer(option) | ScoringRule::PreferredAnswer(option) => Some(*option),
        ScoringRule::Graded(table) => table
            .iter()
            .max_by_key(|(_, points)| *points)
            .map(|(option, _)| *option),
    }
}

fn describe(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Number(number) => format!("{number}"),
        AnswerValue::Text(text) => format!("\"{text}\""),
    }
}

pub(crate) fn render_result(view: &AssessmentResultView) {
    let result = &view.result;
    let scores = &result.scores;

    println!(
        "\nRecommendation: {} ({})",
        result.recommendation.label(),
        view.headline
    );
    println!("{}", view.message);

    println!("\nScores");
    println!("- Confidence: {}%", scores.confidence_score);
    println!("- Psychological fit: {}%", scores.psychological_fit);
    println!("- Technical readiness: {}%", scores.technical_readiness);

    println!("\nWISCAR profile");
    for axis in &view.profile.axes {
        println!("- {:<22} {:>3}%", axis.dimension.label(), axis.value);
    }

    println!("\nPersonality: {}", result.insights.personality);
    print_list("Strengths", &result.insights.strengths);
    print_list("Areas to develop", &result.insights.improvements);
    print_list("Skill gaps", &result.skill_gaps);
    print_list("Next steps", &result.next_steps);
    print_list("Career matches", &result.career_matches);
    print_list("Alternative paths", &result.alternative_paths);
}

fn render_components(components: &[ScoreComponent]) {
    println!("\nScore components");
    for component in components {
        let scope = component
            .dimension
            .map(|dimension| dimension.label())
            .unwrap_or_else(|| component.category.label());
        println!(
            "- {:<20} {:<24} {:.0}/{:.0}",
            component.question_id, scope, component.points, component.max_points
        );
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}", heading);
    for item in items {
        println!("- {}", item);
    }
}
