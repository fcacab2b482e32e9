mod cli;
mod commands;
mod infra;

use portfolio_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
