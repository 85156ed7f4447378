use crate::report::{run_employee_overview, run_report, EmployeeArgs, ReportArgs};
use clap::{Parser, Subcommand};
use qualitrack::config::AppConfig;
use qualitrack::error::AppError;
use qualitrack::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qualitrack",
    about = "Evaluate employee qualification status from HR exports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Organization and department rollup with the renewal queue
    Report(ReportArgs),
    /// Qualification overview for a single employee
    Employee(EmployeeArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        lifecycle = ?config.lifecycle,
        "qualitrack configuration loaded"
    );

    match cli.command {
        Command::Report(args) => run_report(args, &config),
        Command::Employee(args) => run_employee_overview(args, &config),
    }
}
