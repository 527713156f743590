mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{bot::start, config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;

    let db = startup::connect_to_database(&config).await?;

    startup::spawn_health_server(config.port)?;

    let state = AppState::new(db, config);
    let client = start::init_bot(state).await?;

    start::start_bot(client).await
}
