//! Guild event handler.
//!
//! Large guilds only arrive with a partial member list. Presence tracking needs
//! every member in the cache, so the remaining members are requested through the
//! gateway. The chunks are merged into the cache by Serenity as they arrive.

use serenity::all::{ChunkGuildFilter, Context, Guild};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `ctx` - Discord context for requesting member chunks
/// - `guild` - Guild that became available
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    let cached_members = guild.members.len() as u64;

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, cached_members: {}, new: {}",
        guild.name,
        guild.id,
        guild.member_count,
        cached_members,
        is_new.unwrap_or(false)
    );

    if cached_members < guild.member_count {
        tracing::info!(
            "Requesting {} missing members of guild {}",
            guild.member_count - cached_members,
            guild.name
        );

        ctx.shard
            .chunk_guild(guild.id, None, true, ChunkGuildFilter::None, None);
    }
}
