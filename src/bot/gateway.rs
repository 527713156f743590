//! Access to Discord state and role mutations.
//!
//! Services talk to Discord through the `Gateway` trait. `SerenityGateway` backs it
//! with the Serenity cache (kept current by gateway events) and the bot's HTTP
//! client.

use std::sync::Arc;

use serenity::all::{Cache, Guild, GuildId, Http, Member, OnlineStatus, RoleId, UserId};
use serenity::async_trait;

use crate::{
    error::role::RoleError,
    model::discord::{GuildSnapshot, MemberSnapshot, PresenceStatus, RoleSnapshot},
};

/// Audit log reason attached to every role mutation made by the bot.
const AUDIT_LOG_REASON: &str = "Inactivity tracking";

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Snapshots of every guild the bot is a member of.
    fn guilds(&self) -> Vec<GuildSnapshot>;

    /// Snapshot of a single guild, if the bot is a member of it.
    fn guild(&self, guild_id: u64) -> Option<GuildSnapshot>;

    async fn add_role(&self, guild_id: u64, member_id: u64, role_id: u64)
        -> Result<(), RoleError>;

    /// Removing a role the member does not hold succeeds without changes.
    async fn remove_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), RoleError>;
}

pub struct SerenityGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl Gateway for SerenityGateway {
    fn guilds(&self) -> Vec<GuildSnapshot> {
        let bot_id = self.cache.current_user().id;

        self.cache
            .guilds()
            .into_iter()
            .filter_map(|guild_id| {
                self.cache
                    .guild(guild_id)
                    .map(|guild| snapshot_guild(&guild, bot_id))
            })
            .collect()
    }

    fn guild(&self, guild_id: u64) -> Option<GuildSnapshot> {
        let bot_id = self.cache.current_user().id;

        self.cache
            .guild(GuildId::new(guild_id))
            .map(|guild| snapshot_guild(&guild, bot_id))
    }

    async fn add_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), RoleError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(member_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), RoleError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(member_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }
}

/// Copies the parts of a cached guild the bot needs into an owned snapshot.
///
/// # Arguments
/// - `guild` - Cached guild including members and presences
/// - `bot_id` - User ID of the bot, used to find its highest role
pub fn snapshot_guild(guild: &Guild, bot_id: UserId) -> GuildSnapshot {
    let roles = guild
        .roles
        .values()
        .map(|role| RoleSnapshot {
            id: role.id.get(),
            name: role.name.clone(),
            position: role.position,
        })
        .collect();

    let members = guild
        .members
        .values()
        .map(|member| snapshot_member(guild, member))
        .collect();

    let bot_top_role_position = guild
        .members
        .get(&bot_id)
        .map(|bot| top_role_position(guild, bot))
        .unwrap_or(0);

    GuildSnapshot {
        id: guild.id.get(),
        name: guild.name.clone(),
        roles,
        members,
        bot_top_role_position,
    }
}

fn snapshot_member(guild: &Guild, member: &Member) -> MemberSnapshot {
    // Discord does not send presences for offline members
    let presence = guild.presences.get(&member.user.id);

    MemberSnapshot {
        id: member.user.id.get(),
        name: member.user.name.clone(),
        nickname: member.nick.clone(),
        tag: member.user.tag(),
        bot: member.user.bot,
        status: presence
            .map(|presence| presence_status(presence.status))
            .unwrap_or(PresenceStatus::Offline),
        has_activity: presence.is_some_and(|presence| !presence.activities.is_empty()),
        role_ids: member.roles.iter().map(|role_id| role_id.get()).collect(),
        can_manage_roles: can_manage_roles(guild, member),
    }
}

pub fn presence_status(status: OnlineStatus) -> PresenceStatus {
    match status {
        OnlineStatus::Online => PresenceStatus::Online,
        OnlineStatus::Idle => PresenceStatus::Idle,
        OnlineStatus::DoNotDisturb => PresenceStatus::DoNotDisturb,
        _ => PresenceStatus::Offline,
    }
}

fn top_role_position(guild: &Guild, member: &Member) -> u16 {
    member
        .roles
        .iter()
        .filter_map(|role_id| guild.roles.get(role_id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

/// Owner, or any held role (including `@everyone`) grants Manage Roles or Administrator.
fn can_manage_roles(guild: &Guild, member: &Member) -> bool {
    if guild.owner_id == member.user.id {
        return true;
    }

    let everyone = guild.roles.get(&RoleId::new(guild.id.get()));

    everyone
        .into_iter()
        .chain(
            member
                .roles
                .iter()
                .filter_map(|role_id| guild.roles.get(role_id)),
        )
        .any(|role| role.permissions.manage_roles() || role.permissions.administrator())
}
