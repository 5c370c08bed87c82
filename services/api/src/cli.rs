use crate::demo::{run_demo, run_questions, run_results, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use career_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Career Readiness Assessment",
    about = "Serve, score, and demonstrate the Support Operations career-readiness assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question catalog grouped by section
    Questions(QuestionsArgs),
    /// Score a saved assessment snapshot or answer list from a JSON file
    Score(ScoreArgs),
    /// Show results for the assessment stored in the local snapshot directory
    Results(ResultsArgs),
    /// Walk a scripted candidate through the full assessment and print the results
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Emit the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ResultsArgs {
    /// Forget the stored assessment so the next run starts a retake
    #[arg(long)]
    pub(crate) clear: bool,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions(args) => run_questions(args),
        Command::Score(args) => run_score(args),
        Command::Results(args) => run_results(args),
        Command::Demo(args) => run_demo(args),
    }
}
