use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    bot::gateway::Gateway,
    data::InactivityRepository,
    error::role::RoleError,
    model::{
        discord::{GuildSnapshot, MemberSnapshot, RoleSnapshot},
        inactivity::GuildSummary,
    },
};

/// Grants the marker role to members inactive for longer than the threshold.
pub struct RoleEnforcer<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
    inactive_days: i64,
}

impl<'a> RoleEnforcer<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn Gateway, inactive_days: i64) -> Self {
        Self {
            db,
            gateway,
            inactive_days,
        }
    }

    /// Grants `role` to every human member of `guild` whose record is due.
    ///
    /// Members are processed sequentially. A failed grant is logged and never
    /// retried within the pass; the member stays unflagged so the next pass tries
    /// again.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild to enforce
    /// - `role` - The marker role in that guild
    /// - `now` - Reference time for the threshold
    ///
    /// # Returns
    /// - `GuildSummary` - Grant counters; `sighted` is left at zero
    pub async fn enforce_guild(
        &self,
        guild: &GuildSnapshot,
        role: &RoleSnapshot,
        now: DateTime<Utc>,
    ) -> GuildSummary {
        let repo = InactivityRepository::new(self.db);
        let mut summary = GuildSummary::default();

        for member in guild.humans() {
            let record = match repo.find_by_member_id(member.id).await {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Failed to load inactivity record of {}: {}", member.tag, e);
                    continue;
                }
            };

            if !record.is_due(now, self.inactive_days) {
                continue;
            }

            match self.grant(guild, role, member).await {
                Ok(()) => {
                    summary.granted += 1;
                    tracing::info!("Added role '{}' to {}", role.name, member.tag);
                }
                Err(RoleError::PermissionDenied) => {
                    summary.denied += 1;
                    tracing::warn!("Missing permissions to add role to {}", member.tag);
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Failed to add role to {}: {}", member.tag, e);
                }
            }
        }

        summary
    }

    async fn grant(
        &self,
        guild: &GuildSnapshot,
        role: &RoleSnapshot,
        member: &MemberSnapshot,
    ) -> Result<(), RoleError> {
        self.gateway.add_role(guild.id, member.id, role.id).await?;

        InactivityRepository::new(self.db)
            .mark_role_added(member.id)
            .await?;

        Ok(())
    }
}
