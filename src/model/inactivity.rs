use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Tracked inactivity state of a single member.
///
/// There is at most one record per member; `guild_id` is the community the member
/// was first sighted in.
#[derive(Debug, Clone, PartialEq)]
pub struct InactivityRecord {
    /// Discord user ID.
    pub member_id: u64,
    /// Discord guild ID of the first sighting.
    pub guild_id: u64,
    /// Last time the member was sighted offline without any activity.
    pub last_seen: Option<DateTime<Utc>>,
    /// Whether the marker role has been granted for the current inactivity period.
    pub role_added: bool,
}

impl InactivityRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(InactivityRecord)` - Successfully converted record
    /// - `Err(DbErr::Custom)` - Failed to parse member_id or guild_id as u64
    pub fn from_entity(entity: entity::inactivity::Model) -> Result<Self, DbErr> {
        let member_id = entity
            .member_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse member_id: {}", e)))?;

        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            member_id,
            guild_id,
            last_seen: entity.last_seen,
            role_added: entity.role_added,
        })
    }

    /// Whole days elapsed since `last_seen`, or `None` if the member was never sighted.
    pub fn days_inactive(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_seen.map(|last_seen| (now - last_seen).num_days())
    }

    /// Returns true when the marker role should be granted.
    ///
    /// The role is due once `last_seen` is at least `threshold_days` whole days old and
    /// the role has not already been granted.
    pub fn is_due(&self, now: DateTime<Utc>, threshold_days: i64) -> bool {
        !self.role_added
            && self
                .days_inactive(now)
                .is_some_and(|days| days >= threshold_days)
    }
}

/// Outcome counters for one community in a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildSummary {
    /// Members whose `last_seen` was recorded or refreshed.
    pub sighted: usize,
    /// Members that received the marker role.
    pub granted: usize,
    /// Grants refused by Discord for lack of permissions.
    pub denied: usize,
    /// Database or unclassified gateway failures.
    pub failed: usize,
}

/// Outcome counters for a complete pass over every community.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Communities that were tracked and enforced.
    pub guilds_checked: usize,
    /// Communities skipped because the marker role is missing.
    pub guilds_skipped: usize,
    pub sighted: usize,
    pub granted: usize,
    pub denied: usize,
    pub failed: usize,
}

impl PassSummary {
    /// Folds a single community's counters into the pass totals.
    pub fn add_guild(&mut self, guild: GuildSummary) {
        self.guilds_checked += 1;
        self.sighted += guild.sighted;
        self.granted += guild.granted;
        self.denied += guild.denied;
        self.failed += guild.failed;
    }
}
