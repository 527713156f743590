use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{data::InactivityRepository, model::discord::GuildSnapshot};

pub struct PresenceTracker<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PresenceTracker<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an offline sighting for every inactive human member of a guild.
    ///
    /// A member is inactive when they appear offline and show no activity. Bots and
    /// active members are skipped. A failed upsert is logged and the member skipped.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild to scan
    /// - `now` - Time recorded as `last_seen`
    ///
    /// # Returns
    /// - `(sighted, failed)` - Members recorded and members whose upsert failed
    pub async fn track_guild(&self, guild: &GuildSnapshot, now: DateTime<Utc>) -> (usize, usize) {
        let repo = InactivityRepository::new(self.db);
        let mut sighted = 0;
        let mut failed = 0;

        for member in guild.humans().filter(|member| member.is_inactive()) {
            match repo.upsert_last_seen(member.id, guild.id, now).await {
                Ok(_) => {
                    sighted += 1;
                    tracing::debug!("Recorded {} as offline in guild {}", member.tag, guild.name);
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!(
                        "Failed to record last seen for {} in guild {}: {}",
                        member.tag,
                        guild.name,
                        e
                    );
                }
            }
        }

        (sighted, failed)
    }
}
