use crate::commands::{run_estimate, run_score, EstimateArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rcm_crm::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RCM CRM",
    about = "Score prospects, price RCM engagements, and run the CRM intake service",
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
    /// Print the lead score breakdown for a JSON scoring input
    Score(ScoreArgs),
    /// Print pricing models, the recommendation, and projected savings
    Estimate(EstimateArgs),
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
        Command::Estimate(args) => run_estimate(args),
    }
}
