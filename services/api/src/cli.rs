use crate::demo::{
    run_demo, run_draws, run_french, run_project, run_score, DemoArgs, FrenchArgs, ProjectArgs,
    ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pstq::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PSTQ Score Simulator",
    about = "Score skilled worker selection profiles and project them into the future",
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
    /// Score a profile document and print the itemized audit
    Score(ScoreArgs),
    /// Project a profile across two what-if axes
    Project(ProjectArgs),
    /// Convert raw French test results to Quebec scale levels
    French(FrenchArgs),
    /// List recent invitation rounds and their cut-off scores
    Draws,
    /// Score and project a sample couple profile end to end
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Project(args) => run_project(args),
        Command::French(args) => run_french(args),
        Command::Draws => run_draws(),
        Command::Demo(args) => run_demo(args),
    }
}
