mod cli;
mod infra;
mod render;
mod routes;
mod score;
mod server;

use cherry_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
