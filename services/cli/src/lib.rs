mod cli;
mod infra;
mod report;

use qualitrack::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
