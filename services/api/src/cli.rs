use crate::demo::{
    run_checklist, run_demo, run_eligibility, run_residency, ChecklistArgs, DemoArgs,
    EligibilityArgs, ResidencyArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vistoflow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VistoFlow",
    about = "Run the VistoFlow relocation tools from the command line",
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
    /// Score a nomad-visa eligibility form from a JSON file
    Eligibility(EligibilityArgs),
    /// Assess tax-residency risk for a planned relocation year
    Residency(ResidencyArgs),
    /// Print the document checklist for a permit combination
    Checklist(ChecklistArgs),
    /// Run an end-to-end CLI demo covering every tool
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
        Command::Eligibility(args) => run_eligibility(args),
        Command::Residency(args) => run_residency(args),
        Command::Checklist(args) => run_checklist(args),
        Command::Demo(args) => run_demo(args),
    }
}
