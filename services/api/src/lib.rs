mod cli;
mod demo;
mod infra;
mod routes;
mod scheduler;
mod server;

use hotel_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
