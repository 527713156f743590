//! Ready and cache-ready event handlers.
//!
//! `ready` fires after every successful gateway handshake, including reconnects.
//! `cache_ready` fires once the guilds announced in the ready payload are cached,
//! which is the earliest point an inactivity pass can see any members.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::{
    bot::gateway::{Gateway, SerenityGateway},
    scheduler::inactivity_check,
    state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("member activity")));
}

/// Starts the inactivity scheduler the first time the cache becomes ready.
///
/// Later cache-ready events (after reconnects) leave the running scheduler alone.
/// If the scheduler fails to start, the next cache-ready event retries.
///
/// # Arguments
/// - `state` - Application state handed to the scheduler
/// - `scheduler_started` - Flag guarding against starting the scheduler twice
/// - `ctx` - Discord context providing the cache and HTTP client
/// - `guilds` - Guilds that were cached
pub async fn handle_cache_ready(
    state: &AppState,
    scheduler_started: &AtomicBool,
    ctx: Context,
    guilds: Vec<GuildId>,
) {
    tracing::info!("Cache ready with {} guilds", guilds.len());

    if scheduler_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Inactivity scheduler already running");
        return;
    }

    let gateway: Arc<dyn Gateway> =
        Arc::new(SerenityGateway::new(ctx.cache.clone(), ctx.http.clone()));

    if let Err(e) = inactivity_check::start_scheduler(state.clone(), gateway).await {
        tracing::error!("Failed to start inactivity scheduler: {}", e);
        scheduler_started.store(false, Ordering::SeqCst);
    }
}
