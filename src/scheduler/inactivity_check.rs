use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::gateway::Gateway, error::AppError, model::inactivity::PassSummary,
    service::inactivity::InactivityService, state::AppState,
};

/// Starts the inactivity check scheduler
///
/// The check runs once immediately and then every `CHECK_INTERVAL_HOURS`. Each run
/// tracks offline members and grants the marker role to those past the
/// inactivity threshold.
///
/// # Arguments
/// - `state`: Application state with the database and configuration
/// - `gateway`: Discord access used for member snapshots and role changes
pub async fn start_scheduler(state: AppState, gateway: Arc<dyn Gateway>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_state = state.clone();
    let job_gateway = gateway.clone();

    let job = Job::new_repeated_async(state.config.check_interval(), move |_uuid, _lock| {
        let state = job_state.clone();
        let gateway = job_gateway.clone();

        Box::pin(async move {
            run_check(&state, gateway.as_ref()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Inactivity scheduler started, checking every {}h",
        state.config.check_interval_hours
    );

    // First check right away rather than one interval after startup
    tokio::spawn(async move {
        run_check(&state, gateway.as_ref()).await;
    });

    Ok(())
}

/// Runs a single inactivity pass over every guild.
pub async fn run_check(state: &AppState, gateway: &dyn Gateway) -> PassSummary {
    InactivityService::new(&state.db, gateway, &state.config)
        .run_pass(Utc::now())
        .await
}
