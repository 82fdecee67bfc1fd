use crate::score::{run_catalog, run_score, CatalogArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cherry_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cherry Score",
    about = "Assess Series A readiness from nine growth metrics",
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
    /// Score a set of metrics and print the readiness assessment
    Score(ScoreArgs),
    /// List the metric catalog with domains, thresholds, and slider defaults
    Metrics(CatalogArgs),
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
        Command::Metrics(args) => run_catalog(args),
    }
}
