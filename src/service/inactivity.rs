use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    bot::gateway::Gateway,
    config::Config,
    data::InactivityRepository,
    error::role::RoleError,
    model::inactivity::{GuildSummary, PassSummary},
    service::{enforcement::RoleEnforcer, presence::PresenceTracker},
};

/// Runs complete inactivity passes over every guild the bot is in.
pub struct InactivityService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
    config: &'a Config,
}

impl<'a> InactivityService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn Gateway, config: &'a Config) -> Self {
        Self {
            db,
            gateway,
            config,
        }
    }

    /// Runs one pass: tracks then enforces every guild in turn.
    ///
    /// Guilds without the marker role are skipped entirely. No failure escapes the
    /// pass; everything is logged and counted in the returned summary.
    ///
    /// # Arguments
    /// - `now` - Reference time used for both sightings and the threshold
    pub async fn run_pass(&self, now: DateTime<Utc>) -> PassSummary {
        tracing::info!("Starting inactivity check");

        let tracker = PresenceTracker::new(self.db);
        let enforcer = RoleEnforcer::new(self.db, self.gateway, self.config.inactive_days);
        let mut summary = PassSummary::default();

        for guild in self.gateway.guilds() {
            let Some(role) = guild.role_by_name(&self.config.inactive_role_name) else {
                summary.guilds_skipped += 1;
                tracing::warn!(
                    "{} in guild '{}'",
                    RoleError::MissingRole(self.config.inactive_role_name.clone()),
                    guild.name
                );
                continue;
            };

            let (sighted, failed) = tracker.track_guild(&guild, now).await;
            let enforced = enforcer.enforce_guild(&guild, role, now).await;

            summary.add_guild(GuildSummary {
                sighted,
                failed: failed + enforced.failed,
                ..enforced
            });

            match InactivityRepository::new(self.db)
                .get_flagged_by_guild(guild.id)
                .await
            {
                Ok(flagged) => tracing::debug!(
                    "{} members of guild '{}' are flagged inactive",
                    flagged.len(),
                    guild.name
                ),
                Err(e) => tracing::error!(
                    "Failed to count flagged members of guild '{}': {}",
                    guild.name,
                    e
                ),
            }
        }

        tracing::info!(
            "Inactivity check finished: {} guilds checked, {} skipped, {} sighted, {} roles added, {} denied, {} failed",
            summary.guilds_checked,
            summary.guilds_skipped,
            summary.sighted,
            summary.granted,
            summary.denied,
            summary.failed
        );

        summary
    }
}
