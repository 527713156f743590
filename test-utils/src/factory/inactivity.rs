//! Inactivity factory for creating test inactivity records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inactivity records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::inactivity::InactivityFactory;
///
/// let record = InactivityFactory::new(&db)
///     .member_id("987654321")
///     .guild_id("123456789")
///     .days_since_seen(45)
///     .build()
///     .await?;
/// ```
pub struct InactivityFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: String,
    guild_id: String,
    last_seen: Option<DateTime<Utc>>,
    role_added: bool,
}

impl<'a> InactivityFactory<'a> {
    /// Creates a new InactivityFactory with default values.
    ///
    /// Defaults:
    /// - member_id: auto-incremented counter value
    /// - guild_id: `"1"`
    /// - last_seen: now
    /// - role_added: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            member_id: next_id().to_string(),
            guild_id: "1".to_string(),
            last_seen: Some(Utc::now()),
            role_added: false,
        }
    }

    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = member_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn last_seen(mut self, last_seen: Option<DateTime<Utc>>) -> Self {
        self.last_seen = last_seen;
        self
    }

    /// Sets `last_seen` to the given number of days before now.
    pub fn days_since_seen(mut self, days: i64) -> Self {
        self.last_seen = Some(Utc::now() - Duration::days(days));
        self
    }

    pub fn role_added(mut self, role_added: bool) -> Self {
        self.role_added = role_added;
        self
    }

    /// Builds and inserts the record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::inactivity::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::inactivity::Model, DbErr> {
        entity::inactivity::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            guild_id: ActiveValue::Set(self.guild_id),
            last_seen: ActiveValue::Set(self.last_seen),
            role_added: ActiveValue::Set(self.role_added),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactivity record with default values.
///
/// Shorthand for `InactivityFactory::new(db).build().await`.
pub async fn create_inactivity(
    db: &DatabaseConnection,
) -> Result<entity::inactivity::Model, DbErr> {
    InactivityFactory::new(db).build().await
}
