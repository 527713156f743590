//! Text command handlers.
//!
//! Each handler returns the reply text; sending it is left to the bot's message
//! handler. Failures never propagate out of a command, they become the reply.

use sea_orm::DatabaseConnection;

use crate::{
    bot::gateway::Gateway,
    config::Config,
    data::InactivityRepository,
    error::role::RoleError,
    model::discord::{GuildSnapshot, MemberSnapshot, RoleSnapshot},
};

pub struct CommandService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
    config: &'a Config,
}

impl<'a> CommandService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn Gateway, config: &'a Config) -> Self {
        Self {
            db,
            gateway,
            config,
        }
    }

    /// Liveness check.
    pub fn ping(&self) -> String {
        format!(
            "✅ Bot is running and checks activity every {}h 🕓",
            self.config.check_interval_hours
        )
    }

    /// Lists members holding the marker role who are currently offline.
    pub fn list_offline(&self, guild: &GuildSnapshot) -> String {
        let role = match self.marker_role(guild) {
            Ok(role) => role,
            Err(e) => return format!("⚠️ {}", e),
        };

        let offline: Vec<&str> = guild
            .members_with_role(role.id)
            .filter(|member| member.is_offline())
            .map(|member| member.tag.as_str())
            .collect();

        if offline.is_empty() {
            "✅ No offline members have this role.".to_string()
        } else {
            format!(
                "📋 **Offline members with the inactive role:**\n{}",
                offline.join("\n")
            )
        }
    }

    /// Manually removes the marker role from a member and clears their flag.
    ///
    /// The invoker needs Manage Roles and the bot's highest role must be above the
    /// marker role. The flag is cleared even if the member did not hold the role.
    ///
    /// # Arguments
    /// - `guild` - Guild the command was invoked in
    /// - `invoker_id` - User ID of the member who invoked the command
    /// - `target` - Mention, ID, or name of the member to remove the role from
    pub async fn remove_marker(&self, guild: &GuildSnapshot, invoker_id: u64, target: &str) -> String {
        let allowed = guild
            .member(invoker_id)
            .is_some_and(|invoker| invoker.can_manage_roles);
        if !allowed {
            return "🚫 You need the Manage Roles permission to use this command.".to_string();
        }

        let Some(member) = guild.find_member(target) else {
            return format!("⚠️ Member '{}' not found.", target.trim());
        };

        let role = match self.marker_role(guild) {
            Ok(role) => role,
            Err(e) => return format!("⚠️ {}", e),
        };

        if !guild.bot_outranks(role) {
            return "🚫 The bot is not allowed to remove this role.".to_string();
        }

        if let Err(e) = self.gateway.remove_role(guild.id, member.id, role.id).await {
            tracing::warn!("Failed to remove role from {}: {}", member.tag, e);

            return match e {
                RoleError::PermissionDenied => {
                    "🚫 The bot lacks permission to remove the role.".to_string()
                }
                e => format!("⚠️ Error: {}", e),
            };
        }

        let mut reply = format!("✅ Removed role '{}' from {}", role.name, member.tag);

        if let Err(e) = self.clear_flag(member).await {
            tracing::error!("Failed to clear inactivity flag of {}: {}", member.tag, e);
            reply.push_str(&format!("\n⚠️ Error: {}", e));
        }

        reply
    }

    fn marker_role<'g>(&self, guild: &'g GuildSnapshot) -> Result<&'g RoleSnapshot, RoleError> {
        guild
            .role_by_name(&self.config.inactive_role_name)
            .ok_or_else(|| RoleError::MissingRole(self.config.inactive_role_name.clone()))
    }

    async fn clear_flag(&self, member: &MemberSnapshot) -> Result<(), RoleError> {
        InactivityRepository::new(self.db)
            .clear_role_added(member.id)
            .await?;

        Ok(())
    }
}
