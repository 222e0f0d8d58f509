mod cli;
mod commands;
mod demo;
mod infra;
mod render;

use navi_graduation::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
