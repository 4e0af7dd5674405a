mod cli;
mod demo;
mod infra;
mod render;

use leadboard::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
