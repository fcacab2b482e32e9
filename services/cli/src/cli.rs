use crate::commands::{run_capex, run_dashboard, run_score, CapexArgs, DashboardArgs, ScoreArgs};
use crate::infra::bootstrap;
use clap::{Parser, Subcommand};
use portfolio_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Portfolio Engine",
    about = "Derive scores, aggregates and CAPEX projections for a real-estate portfolio",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full portfolio dashboard (default command)
    Dashboard(DashboardArgs),
    /// Print the health scores of a single asset
    Score(ScoreArgs),
    /// Project return and rent uplift for a CAPEX amount on one asset
    Capex(CapexArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(DashboardArgs::default()));

    let config = bootstrap()?;

    match command {
        Command::Dashboard(args) => run_dashboard(args, &config),
        Command::Score(args) => run_score(args, &config),
        Command::Capex(args) => run_capex(args, &config),
    }
}
