use std::sync::atomic::AtomicBool;

use serenity::all::{Context, EventHandler, Guild, GuildId, Message, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Set once the inactivity scheduler has been started.
    scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.state, &self.scheduler_started, ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }
}
